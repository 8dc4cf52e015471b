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

//! Implementation of the shell's built-in commands.
//!
//! Each built-in lives in its own submodule, named after the command it
//! implements (`type` is spelled `type_builtin` to dodge the keyword). The
//! [`dispatch`] function is the registry's single entry point: it matches an
//! exact command name to a handler and runs it.
//!
//! Built-ins never decide for themselves where their output goes — the
//! caller always hands them the `Write` implementation to use. Only `echo`'s
//! caller ever passes a redirection-target file here; every other built-in
//! is always given the terminal.

mod cd;
mod echo;
mod exit;
mod history_builtin;
mod pwd;
mod type_builtin;

use litesh_env::History;
use std::io::Write;

/// Names of every command this crate implements, used both by `type` and by
/// the completion engine's candidate enumeration.
pub const BUILTIN_NAMES: &[&str] = &["cd", "echo", "exit", "history", "pwd", "type"];

/// Whether `name` is handled in-process rather than looked up on `PATH`.
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_NAMES.contains(&name)
}

/// What the REPL should do after a built-in returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Return to the prompt.
    Continue,
    /// Terminate the shell process with this exit status.
    Exit(i32),
}

/// Failure writing a built-in's output, most commonly because its
/// redirection target could not be written to.
#[derive(Debug, thiserror::Error)]
pub enum BuiltinError {
    #[error("Error: {0}")]
    Io(#[from] std::io::Error),
}

/// Runs the built-in named `name` with `args` (the argument list excluding
/// the command name itself).
///
/// `out` is where the built-in's output goes; `path_var` is the raw `PATH`
/// value (needed by `type`); `history` is the session's command log (needed
/// by `history`). Panics if `name` is not one of [`BUILTIN_NAMES`] — callers
/// are expected to check [`is_builtin`] first.
pub fn dispatch(
    name: &str,
    args: &[String],
    out: &mut dyn Write,
    path_var: &str,
    history: &History,
) -> Result<Outcome, BuiltinError> {
    match name {
        "exit" => Ok(exit::run(args)),
        "echo" => echo::run(args, out),
        "type" => type_builtin::run(args, out, path_var),
        "pwd" => pwd::run(out),
        "cd" => cd::run(args, out),
        "history" => history_builtin::run(args, out, history),
        _ => unreachable!("dispatch called with non-builtin name {name:?}"),
    }
}
