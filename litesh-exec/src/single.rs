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

//! The single-command executor: tokenize, peel redirections, dispatch to a
//! builtin or an external process.

use crate::error::ExecError;
use crate::{EXTERNAL_COMMAND_TIMEOUT, POLL_INTERVAL};
use litesh_builtin::Outcome;
use litesh_env::History;
use litesh_syntax::{extract_redirections, tokenize, RedirectionPlan};
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::time::Instant;

/// Runs one command line: a lone segment with no unquoted `|`.
pub fn run(line: &str, path_var: &str, history: &History) -> Outcome {
    let tokens = tokenize(line);
    if tokens.is_empty() {
        return Outcome::Continue;
    }
    let (argv, plan) = extract_redirections(&tokens);
    run_argv(&argv, &plan, path_var, history)
}

fn run_argv(argv: &[String], plan: &RedirectionPlan, path_var: &str, history: &History) -> Outcome {
    let Some(name) = argv.first() else {
        return Outcome::Continue;
    };

    // Touch both targets now so they exist even if the command ends up
    // writing nothing to them.
    if let Some(target) = &plan.stdout_target {
        touch(target, plan.stdout_append);
    }
    if let Some(target) = &plan.stderr_target {
        touch(target, plan.stderr_append);
    }

    if litesh_builtin::is_builtin(name) {
        return run_builtin(name, &argv[1..], plan, path_var, history);
    }

    match crate::resolve_for_spawn(name, path_var) {
        None => {
            println!("{name}: command not found");
            Outcome::Continue
        }
        Some(path) => run_external(&path, argv, plan),
    }
}

fn touch(path: &str, append: bool) {
    let _ = open_target(path, append);
}

fn open_target(path: &str, append: bool) -> io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .append(append)
        .truncate(!append)
        .open(path)
}

fn run_builtin(
    name: &str,
    args: &[String],
    plan: &RedirectionPlan,
    path_var: &str,
    history: &History,
) -> Outcome {
    // Only `echo` honors a redirection target in this shell; every other
    // builtin always writes to the terminal.
    if name == "echo" {
        if let Some(target) = &plan.stdout_target {
            return match open_target(target, plan.stdout_append) {
                Ok(mut file) => dispatch_into(name, args, &mut file, path_var, history),
                Err(source) => {
                    println!(
                        "{}",
                        ExecError::Redirect {
                            path: PathBuf::from(target),
                            source,
                        }
                    );
                    Outcome::Continue
                }
            };
        }
    }
    dispatch_into(name, args, &mut io::stdout(), path_var, history)
}

fn dispatch_into(
    name: &str,
    args: &[String],
    out: &mut dyn Write,
    path_var: &str,
    history: &History,
) -> Outcome {
    match litesh_builtin::dispatch(name, args, out, path_var, history) {
        Ok(outcome) => outcome,
        Err(error) => {
            println!("{error}");
            Outcome::Continue
        }
    }
}

fn run_external(path: &Path, argv: &[String], plan: &RedirectionPlan) -> Outcome {
    let name = &argv[0];
    let mut command = Command::new(path);
    command
        .args(&argv[1..])
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let child = match command.spawn() {
        Ok(child) => child,
        Err(source) => {
            println!("{}", ExecError::Spawn(source));
            return Outcome::Continue;
        }
    };

    match wait_with_timeout(child, EXTERNAL_COMMAND_TIMEOUT) {
        WaitResult::Exited { stdout, stderr } => {
            if !stdout.is_empty() {
                emit(&stdout, plan.stdout_target.as_deref(), plan.stdout_append);
            }
            if !stderr.is_empty() {
                emit(&stderr, plan.stderr_target.as_deref(), plan.stderr_append);
            }
        }
        WaitResult::TimedOut => println!("{name}: command time out"),
        WaitResult::WaitFailed(source) => println!("{}", ExecError::Spawn(source)),
    }
    Outcome::Continue
}

enum WaitResult {
    Exited { stdout: String, stderr: String },
    TimedOut,
    WaitFailed(io::Error),
}

/// Polls `child` with `try_wait` until it exits or `timeout` elapses. No
/// thread is spawned to watch it, consistent with the shell's
/// synchronous-only concurrency model: the only blocking is this thread's
/// own sleep between polls.
fn wait_with_timeout(mut child: Child, timeout: std::time::Duration) -> WaitResult {
    let started = Instant::now();
    loop {
        match child.try_wait() {
            Ok(Some(_status)) => {
                let mut stdout = Vec::new();
                let mut stderr = Vec::new();
                if let Some(mut pipe) = child.stdout.take() {
                    let _ = pipe.read_to_end(&mut stdout);
                }
                if let Some(mut pipe) = child.stderr.take() {
                    let _ = pipe.read_to_end(&mut stderr);
                }
                return WaitResult::Exited {
                    stdout: String::from_utf8_lossy(&stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&stderr).into_owned(),
                };
            }
            Ok(None) => {
                if started.elapsed() >= timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    return WaitResult::TimedOut;
                }
                std::thread::sleep(POLL_INTERVAL);
            }
            Err(source) => return WaitResult::WaitFailed(source),
        }
    }
}

fn emit(text: &str, target: Option<&str>, append: bool) {
    match target {
        None => print!("{text}"),
        Some(path) => match open_target(path, append).and_then(|mut file| file.write_all(text.as_bytes())) {
            Ok(()) => {}
            Err(source) => println!(
                "{}",
                ExecError::Redirect {
                    path: PathBuf::from(path),
                    source,
                }
            ),
        },
    }
}
