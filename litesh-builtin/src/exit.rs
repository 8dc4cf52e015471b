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

//! Exit built-in.
//!
//! `exit [code]` terminates the shell. With no operand, or with a
//! non-numeric operand, the process exits with status 0. A numeric operand
//! becomes the process exit status — see DESIGN.md for why this differs
//! from a pure pass-through shell.

use crate::Outcome;

pub fn run(args: &[String]) -> Outcome {
    let code = args
        .first()
        .and_then(|arg| arg.parse::<i32>().ok())
        .unwrap_or(0);
    Outcome::Exit(code)
}
