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

//! The tab-completion state machine.
//!
//! [`CompletionEngine`] is pure: it performs no terminal I/O of its own. It
//! takes a prefix and a call index and returns a [`CompletionAction`]
//! describing what the caller (the terminal line editor's completion
//! callback) should do. This mirrors the rest of the shell's separation
//! between logic and the I/O that acts on it.

use std::collections::BTreeSet;

/// What the line editor should do in response to one completion callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionAction {
    /// No candidates, or a later call with nothing left to offer.
    None,
    /// Ring the terminal bell; no text is inserted.
    RingBell,
    /// Exactly one candidate: insert it followed by a trailing space.
    InsertWithTrailingSpace(String),
    /// Multiple candidates share a common prefix longer than what the user
    /// typed: insert just that extension (no trailing space).
    ExtendToCommonPrefix(String),
    /// Second (or later) tab on an ambiguous prefix: show every candidate,
    /// sorted, then redraw the prompt with the prefix the user had typed.
    ListCandidates(Vec<String>),
}

/// Process-wide completion memory: what prefix was last completed, what it
/// matched, and how many consecutive tabs have been pressed against it.
#[derive(Debug, Default)]
pub struct CompletionEngine {
    last_prefix: Option<String>,
    last_matches: Vec<String>,
    tab_count: u32,
}

impl CompletionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the state machine for one `(prefix, state)` callback and
    /// returns the action the caller should take. `path_var` is the raw
    /// `PATH` value, used to enumerate external candidates.
    pub fn complete(&mut self, prefix: &str, state: usize, path_var: &str) -> CompletionAction {
        if prefix.is_empty() {
            return CompletionAction::None;
        }

        if self.last_prefix.as_deref() != Some(prefix) {
            self.last_matches = candidates(prefix, path_var);
            self.tab_count = 1;
            self.last_prefix = Some(prefix.to_string());
        } else {
            self.tab_count += 1;
        }

        match self.last_matches.len() {
            0 => CompletionAction::None,
            1 if state == 0 => {
                CompletionAction::InsertWithTrailingSpace(self.last_matches[0].clone())
            }
            1 => CompletionAction::None,
            _ => self.complete_ambiguous(prefix, state),
        }
    }

    fn complete_ambiguous(&self, prefix: &str, state: usize) -> CompletionAction {
        if state != 0 {
            return CompletionAction::None;
        }
        if self.tab_count == 1 {
            let common = longest_common_prefix(&self.last_matches);
            if common.len() > prefix.len() {
                CompletionAction::ExtendToCommonPrefix(common)
            } else {
                CompletionAction::RingBell
            }
        } else {
            let mut sorted = self.last_matches.clone();
            sorted.sort();
            CompletionAction::ListCandidates(sorted)
        }
    }
}

fn candidates(prefix: &str, path_var: &str) -> Vec<String> {
    let mut set: BTreeSet<String> = litesh_builtin::BUILTIN_NAMES
        .iter()
        .map(|name| name.to_string())
        .collect();
    set.extend(litesh_env::enumerate_path_executables(path_var));
    set.into_iter().filter(|name| name.starts_with(prefix)).collect()
}

fn longest_common_prefix(strings: &[String]) -> String {
    let Some(first) = strings.first() else {
        return String::new();
    };
    let mut prefix_len = first.len();
    for s in &strings[1..] {
        let common = first
            .bytes()
            .zip(s.bytes())
            .take_while(|(a, b)| a == b)
            .count();
        prefix_len = prefix_len.min(common);
    }
    first[..prefix_len].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_prefix_yields_no_action() {
        let mut engine = CompletionEngine::new();
        assert_eq!(engine.complete("", 0, ""), CompletionAction::None);
    }

    #[test]
    fn unique_match_inserts_with_trailing_space_once() {
        let mut engine = CompletionEngine::new();
        assert_eq!(
            engine.complete("ech", 0, ""),
            CompletionAction::InsertWithTrailingSpace("echo".to_string())
        );
        assert_eq!(engine.complete("ech", 1, ""), CompletionAction::None);
    }

    #[test]
    fn no_match_yields_no_action() {
        let mut engine = CompletionEngine::new();
        assert_eq!(engine.complete("zzz", 0, ""), CompletionAction::None);
    }

    #[test]
    fn first_tab_on_ambiguous_builtins_extends_or_rings() {
        // "e" matches "echo" and "exit" among the builtins; no extension
        // beyond "e" is possible since they diverge at the second letter.
        let mut engine = CompletionEngine::new();
        assert_eq!(engine.complete("e", 0, ""), CompletionAction::RingBell);
    }

    #[test]
    fn second_tab_on_ambiguous_prefix_lists_sorted_candidates() {
        let mut engine = CompletionEngine::new();
        engine.complete("e", 0, "");
        let action = engine.complete("e", 0, "");
        assert_eq!(
            action,
            CompletionAction::ListCandidates(vec!["echo".to_string(), "exit".to_string()])
        );
    }

    #[test]
    fn changing_the_prefix_resets_tab_count() {
        let mut engine = CompletionEngine::new();
        engine.complete("e", 0, "");
        engine.complete("e", 0, ""); // tab_count now 2
        assert_eq!(engine.complete("ech", 0, ""), CompletionAction::InsertWithTrailingSpace("echo".to_string()));
    }

    #[test]
    fn extends_to_a_genuine_common_prefix() {
        // Exercise the pure common-prefix helper directly; the PATH-backed
        // case is covered by litesh-env's own enumeration tests.
        let matches = vec!["history".to_string(), "hi".to_string()];
        assert_eq!(longest_common_prefix(&matches), "hi");
    }
}
