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

use std::io;
use std::path::PathBuf;

/// Failures encountered while executing a stage. These are always printed
/// as a single-line diagnostic (`Display` already formats the `Error: `
/// prefix) and never abort the REPL.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error("Error: {path}: {source}")]
    Redirect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error: {0}")]
    Spawn(#[source] io::Error),
}
