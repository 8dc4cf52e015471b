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

//! Type built-in.
//!
//! `type name` reports whether `name` is a shell builtin, an executable
//! found on `PATH`, or neither. With zero operands, it emits nothing — it
//! does not iterate any implicit list of names.

use crate::{is_builtin, BuiltinError, Outcome};
use std::io::Write;

pub fn run(args: &[String], out: &mut dyn Write, path_var: &str) -> Result<Outcome, BuiltinError> {
    let Some(name) = args.first() else {
        return Ok(Outcome::Continue);
    };

    if is_builtin(name) {
        writeln!(out, "{name} is a shell builtin")?;
    } else if let Some(path) = litesh_env::resolve(name, path_var) {
        writeln!(out, "{name} is {}", path.display())?;
    } else {
        writeln!(out, "{name} not found")?;
    }
    Ok(Outcome::Continue)
}
