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

//! Search-path resolution.
//!
//! Both [`resolve`] and [`enumerate_path_executables`] take the raw value of
//! `PATH` as a parameter rather than reading the environment themselves, so
//! tests can point them at a scratch directory without mutating process
//! state.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Returns whether `path` is a regular file executable by the current user.
fn is_executable_file(path: &Path) -> bool {
    let Ok(metadata) = fs::metadata(path) else {
        return false;
    };
    if !metadata.is_file() {
        return false;
    }
    is_executable(path)
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::ffi::CString;
    let Some(path_str) = path.to_str() else {
        return false;
    };
    let Ok(c_path) = CString::new(path_str) else {
        return false;
    };
    // SAFETY: c_path is a valid NUL-terminated string for the lifetime of the call.
    unsafe { libc::access(c_path.as_ptr(), libc::X_OK) == 0 }
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolves `name` to an absolute executable path by searching `path_var`
/// (a colon-separated list of directories) in order.
///
/// A name containing `/` is not looked up here — per the shell's contract,
/// such names are passed directly to the process spawn call instead.
pub fn resolve(name: &str, path_var: &str) -> Option<PathBuf> {
    if name.contains('/') {
        return None;
    }
    for dir in path_var.split(':') {
        if dir.is_empty() {
            continue;
        }
        let candidate = Path::new(dir).join(name);
        if is_executable_file(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Collects the names of every regular, executable file reachable through
/// `path_var`, for use by the completion engine. Unreadable directories are
/// silently skipped.
pub fn enumerate_path_executables(path_var: &str) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for dir in path_var.split(':') {
        if dir.is_empty() {
            continue;
        }
        let Ok(entries) = fs::read_dir(dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if is_executable_file(&path) {
                if let Some(name) = entry.file_name().to_str() {
                    names.insert(name.to_string());
                }
            }
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use std::os::unix::fs::PermissionsExt;

    fn make_executable(path: &Path) {
        let mut file = File::create(path).unwrap();
        writeln!(file, "#!/bin/sh\necho hi").unwrap();
        let mut perms = fs::metadata(path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms).unwrap();
    }

    #[test]
    fn resolves_first_match_on_path() {
        let dir = tempfile::tempdir().unwrap();
        let tool = dir.path().join("mytool");
        make_executable(&tool);

        let path_var = dir.path().to_str().unwrap();
        assert_eq!(resolve("mytool", path_var), Some(tool));
    }

    #[test]
    fn skips_non_executable_files() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("data.txt")).unwrap();

        let path_var = dir.path().to_str().unwrap();
        assert_eq!(resolve("data.txt", path_var), None);
    }

    #[test]
    fn skips_empty_path_segments() {
        let dir = tempfile::tempdir().unwrap();
        let tool = dir.path().join("mytool");
        make_executable(&tool);

        let path_var = format!("::{}:", dir.path().to_str().unwrap());
        assert_eq!(resolve("mytool", &path_var), Some(tool));
    }

    #[test]
    fn name_with_slash_is_not_resolved_via_path() {
        let dir = tempfile::tempdir().unwrap();
        let path_var = dir.path().to_str().unwrap();
        assert_eq!(resolve("./mytool", path_var), None);
    }

    #[test]
    fn returns_none_when_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path_var = dir.path().to_str().unwrap();
        assert_eq!(resolve("nosuchcmd", path_var), None);
    }

    #[test]
    fn enumerate_collects_executables_across_directories() {
        let dir_a = tempfile::tempdir().unwrap();
        let dir_b = tempfile::tempdir().unwrap();
        make_executable(&dir_a.path().join("foo"));
        make_executable(&dir_b.path().join("bar"));
        File::create(dir_b.path().join("readme.txt")).unwrap();

        let path_var = format!(
            "{}:{}",
            dir_a.path().to_str().unwrap(),
            dir_b.path().to_str().unwrap()
        );
        let names = enumerate_path_executables(&path_var);
        assert!(names.contains("foo"));
        assert!(names.contains("bar"));
        assert!(!names.contains("readme.txt"));
    }

    #[test]
    fn enumerate_skips_unreadable_directories() {
        let names = enumerate_path_executables("/this/does/not/exist");
        assert!(names.is_empty());
    }

    #[test]
    fn resolve_agrees_with_enumeration() {
        let dir = tempfile::tempdir().unwrap();
        make_executable(&dir.path().join("toolx"));
        let path_var = dir.path().to_str().unwrap();

        assert!(resolve("toolx", path_var).is_some());
        assert!(enumerate_path_executables(path_var).contains("toolx"));
    }
}
