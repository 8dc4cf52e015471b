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

//! History built-in.
//!
//! `history` with no operand lists every entry, 1-indexed. `history n` lists
//! only the last `n` entries, still in ascending (oldest-first) order and
//! still numbered by their original position. A non-numeric operand is an
//! error, not a silent no-op.

use crate::{BuiltinError, Outcome};
use litesh_env::History;
use std::io::Write;

pub fn run(args: &[String], out: &mut dyn Write, history: &History) -> Result<Outcome, BuiltinError> {
    match args.first() {
        None => {
            for (index, line) in history.iter() {
                writeln!(out, "{index} {line}")?;
            }
        }
        Some(arg) => match arg.parse::<usize>() {
            Ok(n) => {
                for (index, line) in history.tail(n) {
                    writeln!(out, "{index} {line}")?;
                }
            }
            Err(_) => writeln!(out, "history: {arg}: numeric argument required")?,
        },
    }
    Ok(Outcome::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_history() -> History {
        let mut history = History::new();
        for line in ["echo one", "echo two", "echo three"] {
            history.push(line.to_string());
        }
        history
    }

    #[test]
    fn lists_every_entry_one_indexed() {
        let history = sample_history();
        let mut out = Vec::new();
        run(&[], &mut out, &history).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1 echo one\n2 echo two\n3 echo three\n"
        );
    }

    #[test]
    fn lists_only_the_last_n_entries_in_ascending_order() {
        let history = sample_history();
        let mut out = Vec::new();
        run(&["2".to_string()], &mut out, &history).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "2 echo two\n3 echo three\n");
    }

    #[test]
    fn non_numeric_operand_is_an_error_message() {
        let history = sample_history();
        let mut out = Vec::new();
        run(&["oops".to_string()], &mut out, &history).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "history: oops: numeric argument required\n"
        );
    }
}
