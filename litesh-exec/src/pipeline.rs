// This file is part of litesh, an interactive POSIX-flavored shell.
// Copyright (C) 2026 The litesh authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! The pipeline executor: chains two or more segments through anonymous OS
//! pipes.
//!
//! Builtins are rejected in every position but the last. A builtin in the
//! final position still receives the previous stage's captured stdout,
//! though only `pwd`, `cd`, `history`, and `exit` make any use of it (by
//! falling back to the full single-command path, which gives them
//! redirection support); `echo` and `type` ignore piped input and
//! redirection alike.

use crate::error::ExecError;
use litesh_builtin::Outcome;
use litesh_env::History;
use litesh_syntax::tokenize;
use std::io::{self, Read};
use std::process::{Child, Command, Stdio};

/// Runs a pipeline of `segments.len() >= 2` raw (pre-lex) command strings.
pub fn run(segments: &[String], path_var: &str, history: &History) -> Outcome {
    let mut children: Vec<Child> = Vec::new();
    let mut previous_stdout: Option<std::process::ChildStdout> = None;

    for (i, segment) in segments.iter().enumerate() {
        let tokens = tokenize(segment);
        let Some(name) = tokens.first() else {
            continue;
        };
        let is_last = i == segments.len() - 1;

        if litesh_builtin::is_builtin(name) {
            if !is_last {
                println!("{name}: builtin commands cannot be used in the middle of a pipeline");
                drain_and_reap(children);
                return Outcome::Continue;
            }

            let piped_input = previous_stdout.take().map(|mut pipe| {
                let mut buf = String::new();
                let _ = pipe.read_to_string(&mut buf);
                buf
            });
            drain_and_reap(children);
            return run_final_builtin(name, &tokens, piped_input.as_deref(), segment, path_var, history);
        }

        let Some(path) = crate::resolve_for_spawn(name, path_var) else {
            println!("{name}: command not found");
            drain_and_reap(children);
            return Outcome::Continue;
        };

        let mut command = Command::new(&path);
        command.args(&tokens[1..]);
        match previous_stdout.take() {
            Some(pipe) => {
                command.stdin(Stdio::from(pipe));
            }
            None => {
                command.stdin(Stdio::inherit());
            }
        }
        command.stdout(if is_last { Stdio::inherit() } else { Stdio::piped() });
        command.stderr(Stdio::piped());

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(source) => {
                println!("{}", ExecError::Spawn(source));
                drain_and_reap(children);
                return Outcome::Continue;
            }
        };
        previous_stdout = child.stdout.take();
        children.push(child);
    }

    for mut child in children {
        let mut stderr = Vec::new();
        if let Some(mut pipe) = child.stderr.take() {
            let _ = pipe.read_to_end(&mut stderr);
        }
        if !stderr.is_empty() {
            print!("{}", String::from_utf8_lossy(&stderr));
        }
        let _ = child.wait();
    }

    Outcome::Continue
}

/// Forwards stderr for any already-spawned stages and reaps them, used when
/// a later stage fails to start or is an illegal mid-pipeline builtin.
fn drain_and_reap(children: Vec<Child>) {
    for mut child in children {
        let mut stderr = Vec::new();
        if let Some(mut pipe) = child.stderr.take() {
            let _ = pipe.read_to_end(&mut stderr);
        }
        if !stderr.is_empty() {
            print!("{}", String::from_utf8_lossy(&stderr));
        }
        let _ = child.kill();
        let _ = child.wait();
    }
}

fn run_final_builtin(
    name: &str,
    tokens: &[String],
    piped_input: Option<&str>,
    original_segment: &str,
    path_var: &str,
    history: &History,
) -> Outcome {
    let _ = piped_input;
    match name {
        "echo" | "type" => {
            let args = &tokens[1..];
            match litesh_builtin::dispatch(name, args, &mut io::stdout(), path_var, history) {
                Ok(outcome) => outcome,
                Err(error) => {
                    println!("{error}");
                    Outcome::Continue
                }
            }
        }
        _ => crate::single::run(original_segment, path_var, history),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_in_a_non_final_position_is_rejected() {
        let history = History::new();
        let segments = vec!["pwd".to_string(), "grep x".to_string()];
        assert_eq!(run(&segments, "", &history), Outcome::Continue);
    }

    #[test]
    fn builtin_as_the_final_stage_runs_standalone() {
        let history = History::new();
        let segments = vec!["echo hi".to_string(), "echo world".to_string()];
        // The first segment ("echo") is itself a builtin, so this is
        // rejected as a non-final builtin rather than executed.
        assert_eq!(run(&segments, "", &history), Outcome::Continue);
    }
}
