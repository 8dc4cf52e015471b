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

//! Echo built-in.
//!
//! `echo [args...]` writes the arguments joined by a single space, followed
//! by a newline, to `out`. This is the only built-in whose output the
//! executor may redirect to a file.

use crate::{BuiltinError, Outcome};
use std::io::Write;

pub fn run(args: &[String], out: &mut dyn Write) -> Result<Outcome, BuiltinError> {
    writeln!(out, "{}", args.join(" "))?;
    Ok(Outcome::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_arguments_with_a_single_space() {
        let mut out = Vec::new();
        let args = vec!["hello".to_string(), "world".to_string()];
        run(&args, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "hello world\n");
    }

    #[test]
    fn no_arguments_prints_a_blank_line() {
        let mut out = Vec::new();
        run(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\n");
    }

    #[test]
    fn preserves_internal_spacing_of_a_single_argument() {
        let mut out = Vec::new();
        let args = vec!["hello   world".to_string()];
        run(&args, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "hello   world\n");
    }
}
