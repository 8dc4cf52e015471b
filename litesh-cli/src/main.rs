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

//! The `litesh` binary: reads lines from the terminal via rustyline, splits
//! them into pipeline segments, and dispatches each to the single-command or
//! pipeline executor. Tab completion and persistent history are wired in
//! here; the crates doing the actual work know nothing about the terminal.

mod completion;

use completion::LiteshHelper;
use litesh_builtin::Outcome;
use litesh_env::{default_history_path, History};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config, Editor};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut history = load_history();

    let config = Config::builder()
        .completion_type(CompletionType::List)
        .build();
    let mut editor: Editor<LiteshHelper, DefaultHistory> = match Editor::with_config(config) {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("litesh: {e}");
            return ExitCode::FAILURE;
        }
    };
    editor.set_helper(Some(LiteshHelper::new()));

    let status = run(&mut editor, &mut history);
    save_history(&history);

    ExitCode::from(status.clamp(0, 255) as u8)
}

/// The read-eval loop proper. Returns the process exit status.
fn run(editor: &mut Editor<LiteshHelper, DefaultHistory>, history: &mut History) -> i32 {
    loop {
        match editor.readline("$ ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);
                history.push(line);

                if let Outcome::Exit(status) = execute(line, history) {
                    return status;
                }
            }
            Err(ReadlineError::Eof) => return 0,
            Err(ReadlineError::Interrupted) => continue,
            Err(e) => {
                eprintln!("litesh: {e}");
                return 1;
            }
        }
    }
}

/// Splits `line` into pipeline segments and runs it through the appropriate
/// executor.
fn execute(line: &str, history: &History) -> Outcome {
    let path_var = std::env::var("PATH").unwrap_or_default();
    let segments = litesh_syntax::split_pipeline(line);
    match segments.len() {
        0 => Outcome::Continue,
        1 => litesh_exec::single::run(line, &path_var, history),
        _ => litesh_exec::pipeline::run(&segments, &path_var, history),
    }
}

fn load_history() -> History {
    let Some(path) = default_history_path() else {
        return History::new();
    };
    History::load(&path).unwrap_or_else(|e| {
        eprintln!("litesh: {e}");
        History::new()
    })
}

fn save_history(history: &History) {
    let Some(path) = default_history_path() else {
        return;
    };
    if let Err(e) = history.save(&path) {
        eprintln!("litesh: {e}");
    }
}
