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

//! Command history.
//!
//! Storage is 0-indexed internally; display is 1-indexed, per the shell's
//! `history` built-in contract. [`History::tail`] always iterates in
//! ascending index order, even though it is computed by walking backward
//! from the end of the log.

use crate::error::HistoryError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// An append-only, in-memory log of accepted input lines.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `line` to the history. Empty lines are never recorded.
    pub fn push(&mut self, line: &str) {
        if !line.is_empty() {
            self.entries.push(line.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates every entry as `(1-indexed position, line)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, line)| (i + 1, line.as_str()))
    }

    /// Iterates the last `n` entries, in ascending index order, clamped to
    /// the number of entries actually recorded.
    pub fn tail(&self, n: usize) -> impl Iterator<Item = (usize, &str)> {
        let start = self.entries.len().saturating_sub(n);
        self.entries[start..]
            .iter()
            .enumerate()
            .map(move |(i, line)| (start + i + 1, line.as_str()))
    }

    /// Loads history from a newline-delimited file. A missing file is
    /// treated as an empty history, not an error.
    pub fn load(path: &Path) -> Result<Self, HistoryError> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let entries = contents.lines().map(str::to_string).collect();
                Ok(Self { entries })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::new()),
            Err(source) => Err(HistoryError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Overwrites `path` with the full history, one entry per line.
    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        let mut file = fs::File::create(path).map_err(|source| HistoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        for line in &self.entries {
            writeln!(file, "{line}").map_err(|source| HistoryError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }
}

/// The default history file location, `$HOME/.litesh_history`.
pub fn default_history_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| Path::new(&home).join(".litesh_history"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_lines_are_never_recorded() {
        let mut h = History::new();
        h.push("");
        assert!(h.is_empty());
    }

    #[test]
    fn iter_is_one_indexed() {
        let mut h = History::new();
        h.push("first");
        h.push("second");
        let entries: Vec<_> = h.iter().collect();
        assert_eq!(entries, vec![(1, "first"), (2, "second")]);
    }

    #[test]
    fn tail_clamps_to_total_and_stays_ascending() {
        let mut h = History::new();
        for line in ["a", "b", "c"] {
            h.push(line);
        }
        let last_two: Vec<_> = h.tail(2).collect();
        assert_eq!(last_two, vec![(2, "b"), (3, "c")]);

        let clamped: Vec<_> = h.tail(100).collect();
        assert_eq!(clamped, vec![(1, "a"), (2, "b"), (3, "c")]);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history_file");

        let mut h = History::new();
        h.push("echo one");
        h.push("echo two");
        h.save(&path).unwrap();

        let loaded = History::load(&path).unwrap();
        let entries: Vec<_> = loaded.iter().map(|(_, l)| l.to_string()).collect();
        assert_eq!(entries, vec!["echo one".to_string(), "echo two".to_string()]);
    }

    #[test]
    fn loading_a_missing_file_yields_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does_not_exist");
        let h = History::load(&path).unwrap();
        assert!(h.is_empty());
    }
}
