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

//! The redirection extractor.
//!
//! [`extract_redirections`] walks an already-tokenized command and peels off
//! `>`, `>>`, `1>`, `1>>`, `2>`, `2>>` (with or without an intervening space)
//! into a [`RedirectionPlan`], returning the remaining argument tokens.
//!
//! `stdout_append` and `stderr_append` are tracked independently rather than
//! sharing one flag, so `> out 2>> err` truncates `out` and appends to `err`
//! unambiguously.

/// Where a command's stdout and/or stderr should be redirected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectionPlan {
    pub stdout_target: Option<String>,
    pub stdout_append: bool,
    pub stderr_target: Option<String>,
    pub stderr_append: bool,
}

impl RedirectionPlan {
    /// True if neither stream is redirected.
    pub fn is_empty(&self) -> bool {
        self.stdout_target.is_none() && self.stderr_target.is_none()
    }
}

/// Removes redirection operators and their targets from `tokens`, returning
/// the cleaned argument list alongside the extracted [`RedirectionPlan`].
///
/// A dangling operator with no following argument is silently dropped. If a
/// stream is redirected more than once, the last occurrence wins.
pub fn extract_redirections(tokens: &[String]) -> (Vec<String>, RedirectionPlan) {
    let mut cleaned = Vec::new();
    let mut plan = RedirectionPlan::default();
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i].as_str();

        match token {
            ">" | "1>" => {
                if let Some(target) = tokens.get(i + 1) {
                    plan.stdout_target = Some(target.clone());
                    plan.stdout_append = false;
                    i += 2;
                    continue;
                }
                i += 1;
                continue;
            }
            ">>" | "1>>" => {
                if let Some(target) = tokens.get(i + 1) {
                    plan.stdout_target = Some(target.clone());
                    plan.stdout_append = true;
                    i += 2;
                    continue;
                }
                i += 1;
                continue;
            }
            "2>" => {
                if let Some(target) = tokens.get(i + 1) {
                    plan.stderr_target = Some(target.clone());
                    plan.stderr_append = false;
                    i += 2;
                    continue;
                }
                i += 1;
                continue;
            }
            "2>>" => {
                if let Some(target) = tokens.get(i + 1) {
                    plan.stderr_target = Some(target.clone());
                    plan.stderr_append = true;
                    i += 2;
                    continue;
                }
                i += 1;
                continue;
            }
            _ => {}
        }

        // glued forms: ">file", "1>file", "2>file"
        if let Some(rest) = token.strip_prefix("1>") {
            if !rest.is_empty() {
                plan.stdout_target = Some(rest.to_string());
                plan.stdout_append = false;
                i += 1;
                continue;
            }
        } else if let Some(rest) = token.strip_prefix("2>") {
            if !rest.is_empty() {
                plan.stderr_target = Some(rest.to_string());
                plan.stderr_append = false;
                i += 1;
                continue;
            }
        } else if let Some(rest) = token.strip_prefix('>') {
            if !rest.is_empty() {
                plan.stdout_target = Some(rest.to_string());
                plan.stdout_append = false;
                i += 1;
                continue;
            }
        }

        cleaned.push(token.to_string());
        i += 1;
    }

    (cleaned, plan)
}
