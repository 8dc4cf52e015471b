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

//! Cd built-in.
//!
//! `cd [dir]` changes the working directory. With no operand, or with the
//! literal operand `~`, the target is `$HOME`. Any other operand is used
//! verbatim as a path, relative or absolute. On failure the diagnostic shows
//! the operand exactly as the caller typed it, not the path we resolved it
//! to — a `~` that doesn't exist should read back as `~`, not as whatever
//! `$HOME` expanded to.

use crate::{BuiltinError, Outcome};
use std::io::Write;
use std::path::PathBuf;

pub fn run(args: &[String], out: &mut dyn Write) -> Result<Outcome, BuiltinError> {
    let requested = args.first().map(String::as_str);
    let target = match requested {
        None | Some("~") => std::env::var_os("HOME").map(PathBuf::from),
        Some(arg) => Some(PathBuf::from(arg)),
    };

    let Some(target) = target else {
        writeln!(out, "cd: HOME not set")?;
        return Ok(Outcome::Continue);
    };

    if std::env::set_current_dir(&target).is_err() {
        let shown = requested.map(str::to_string).unwrap_or_else(|| target.display().to_string());
        writeln!(out, "cd: {shown}: No such file or directory")?;
    }
    Ok(Outcome::Continue)
}
