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

//! Adapts [`litesh_complete::CompletionEngine`] to rustyline's [`Helper`]
//! trait family.
//!
//! The engine itself performs no terminal I/O; this module is the thin
//! layer that turns its [`CompletionAction`]s into either a rustyline
//! candidate list or, for the two-tab listing case, a direct write to the
//! terminal followed by a prompt redraw.

use litesh_complete::{CompletionAction, CompletionEngine};
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use std::cell::RefCell;
use std::io::Write;

pub struct LiteshHelper {
    engine: RefCell<CompletionEngine>,
}

impl LiteshHelper {
    pub fn new() -> Self {
        Self {
            engine: RefCell::new(CompletionEngine::new()),
        }
    }
}

impl Helper for LiteshHelper {}
impl Validator for LiteshHelper {}
impl Highlighter for LiteshHelper {}

impl Hinter for LiteshHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<Self::Hint> {
        None
    }
}

impl Completer for LiteshHelper {
    type Candidate = Pair;

    /// Only the command position (the first word on the line) is
    /// completed; arguments are left untouched.
    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = line[..pos]
            .rfind(' ')
            .map(|i| i + 1)
            .unwrap_or(0);
        if start != 0 {
            return Ok((pos, Vec::new()));
        }

        let prefix = &line[start..pos];
        let path_var = std::env::var("PATH").unwrap_or_default();
        let mut engine = self.engine.borrow_mut();

        match engine.complete(prefix, 0, &path_var) {
            CompletionAction::None | CompletionAction::RingBell => Ok((pos, Vec::new())),
            CompletionAction::InsertWithTrailingSpace(word) => Ok((
                start,
                vec![Pair {
                    display: word.clone(),
                    replacement: format!("{word} "),
                }],
            )),
            CompletionAction::ExtendToCommonPrefix(common) => Ok((
                start,
                vec![Pair {
                    display: common.clone(),
                    replacement: common,
                }],
            )),
            CompletionAction::ListCandidates(matches) => {
                println!();
                println!("{}", matches.join("  "));
                print!("$ {line}");
                let _ = std::io::stdout().flush();
                Ok((pos, Vec::new()))
            }
        }
    }
}
