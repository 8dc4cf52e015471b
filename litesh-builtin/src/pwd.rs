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

//! Pwd built-in. Prints the process's current working directory.

use crate::{BuiltinError, Outcome};
use std::io::Write;

pub fn run(out: &mut dyn Write) -> Result<Outcome, BuiltinError> {
    let cwd = std::env::current_dir().map_err(BuiltinError::Io)?;
    writeln!(out, "{}", cwd.display())?;
    Ok(Outcome::Continue)
}
