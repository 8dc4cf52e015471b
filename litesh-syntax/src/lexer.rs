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

//! The word lexer.
//!
//! [`tokenize`] converts a single pipeline segment into a sequence of words,
//! honoring single-quote, double-quote, and backslash escaping. It never
//! interprets `|`, `>`, or other operator characters — those arrive as
//! ordinary bytes within a token if present in the input.

/// Splits a line into tokens, applying POSIX-like quoting and escaping.
///
/// Unterminated quotes and a trailing lone backslash are tolerated: the
/// accumulated token is flushed as-is at end of input rather than rejected.
/// The empty string is never emitted as a token.
pub fn tokenize(line: &str) -> Vec<String> {
    let bytes: Vec<char> = line.chars().collect();
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_single = false;
    let mut in_double = false;
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];

        if c == '\'' && !in_double {
            in_single = !in_single;
        } else if c == '"' && !in_single {
            in_double = !in_double;
        } else if c == '\\' {
            if !in_double && !in_single {
                if i + 1 < bytes.len() {
                    current.push(bytes[i + 1]);
                    i += 1;
                }
                // a trailing lone backslash is consumed and emits nothing
            } else if in_double {
                if i + 1 < bytes.len() && (bytes[i + 1] == '\\' || bytes[i + 1] == '"') {
                    current.push(bytes[i + 1]);
                    i += 1;
                } else {
                    current.push('\\');
                }
            } else {
                // inside single quotes, the backslash is preserved verbatim
                current.push('\\');
            }
        } else if c == ' ' && !in_single && !in_double {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else {
            current.push(c);
        }

        i += 1;
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
