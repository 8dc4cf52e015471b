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

//! The pipeline splitter.
//!
//! [`split_pipeline`] divides a raw input line into segment strings on
//! unquoted `|`, tracking quote state the same way the [lexer](super::lexer)
//! does but without processing backslashes — quote characters are left in
//! the segment text so the lexer can re-process them later.

/// Splits a line into pipeline segments on unquoted `|`.
///
/// Segments are trimmed of surrounding whitespace; empty segments (e.g. from
/// a leading, trailing, or doubled `|`) are dropped.
pub fn split_pipeline(line: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut in_single = false;
    let mut in_double = false;

    for c in line.chars() {
        if c == '\'' && !in_double {
            in_single = !in_single;
            current.push(c);
        } else if c == '"' && !in_single {
            in_double = !in_double;
            current.push(c);
        } else if c == '|' && !in_single && !in_double {
            let trimmed = current.trim();
            if !trimmed.is_empty() {
                segments.push(trimmed.to_string());
            }
            current.clear();
        } else {
            current.push(c);
        }
    }

    let trimmed = current.trim();
    if !trimmed.is_empty() {
        segments.push(trimmed.to_string());
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_segment_is_idempotent_with_trimming() {
        assert_eq!(split_pipeline("  echo hi  "), vec!["echo hi"]);
    }

    #[test]
    fn splits_on_unquoted_pipe() {
        assert_eq!(split_pipeline("ls | wc -l"), vec!["ls", "wc -l"]);
    }

    #[test]
    fn splits_on_multiple_pipes() {
        assert_eq!(
            split_pipeline("a | b | c"),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn pipe_inside_single_quotes_is_preserved() {
        assert_eq!(split_pipeline("echo 'a|b'"), vec!["echo 'a|b'"]);
    }

    #[test]
    fn pipe_inside_double_quotes_is_preserved() {
        assert_eq!(split_pipeline(r#"echo "a|b""#), vec![r#"echo "a|b""#]);
    }

    #[test]
    fn empty_segments_are_dropped() {
        assert_eq!(split_pipeline("a || b"), vec!["a", "b"]);
        assert_eq!(split_pipeline("|a"), vec!["a"]);
        assert_eq!(split_pipeline("a|"), vec!["a"]);
    }

    #[test]
    fn empty_line_yields_no_segments() {
        assert_eq!(split_pipeline(""), Vec::<String>::new());
        assert_eq!(split_pipeline("   "), Vec::<String>::new());
    }

    #[test]
    fn no_unquoted_pipe_idempotence_property() {
        for line in ["echo hi", "  ls -la  ", "'a|b' \"c|d\""] {
            let segments = split_pipeline(line);
            assert_eq!(segments, vec![line.trim().to_string()]);
        }
    }
}
