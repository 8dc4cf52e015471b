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

//! Parsing front-end for the litesh shell.
//!
//! This crate turns a raw input line into the pieces the execution engine
//! needs: [`split_pipeline`] divides a line into pipeline segments on
//! unquoted `|`, [`tokenize`] turns a segment into words honoring POSIX-like
//! quoting, and [`extract_redirections`] peels file-target redirection
//! operators off a token list.
//!
//! None of the functions here perform I/O or can fail: malformed input
//! (unterminated quotes, dangling operators) is tolerated per the shell's
//! documented behavior, not rejected.

mod lexer;
mod pipeline;
mod redirection;

pub use lexer::tokenize;
pub use pipeline::split_pipeline;
pub use redirection::{extract_redirections, RedirectionPlan};
