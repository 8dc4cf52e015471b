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

//! Shell execution environment: search-path resolution and command history.
//!
//! The current working directory and `PATH`/`HOME` themselves are left to
//! the operating system (`std::env`); this crate only adds the lookup and
//! bookkeeping logic layered on top of them.

mod error;
mod history;
mod path;

pub use error::HistoryError;
pub use history::{default_history_path, History};
pub use path::{enumerate_path_executables, resolve};
