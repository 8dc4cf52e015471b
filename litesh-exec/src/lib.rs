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

//! Execution of single commands and pipelines.
//!
//! [`single::run`] drives one segment (builtin or external, with
//! redirection); [`pipeline::run`] chains two or more segments through OS
//! pipes. Both report what the REPL should do next via
//! [`litesh_builtin::Outcome`] and never propagate a child command's own
//! exit status — only `exit` changes the shell's fate.

mod error;
pub mod pipeline;
pub mod single;

pub use error::ExecError;
pub use litesh_builtin::Outcome;

use std::path::PathBuf;
use std::time::Duration;

/// Ceiling on how long an external command may run before the shell gives
/// up on it and reports a timeout.
pub const EXTERNAL_COMMAND_TIMEOUT: Duration = Duration::from_secs(20);

/// How often the timeout loop polls a child for completion.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Resolves `name` to the path that should be handed to `Command::new`.
///
/// A name containing `/` bypasses `PATH` search entirely and is passed
/// through as-is, per spec: resolution doesn't check it exists, spawning
/// does, and a bad path surfaces as the ordinary spawn-failure diagnostic.
/// A bare name is looked up on `PATH`; `None` means it wasn't found there.
fn resolve_for_spawn(name: &str, path_var: &str) -> Option<PathBuf> {
    if name.contains('/') {
        Some(PathBuf::from(name))
    } else {
        litesh_env::resolve(name, path_var)
    }
}
