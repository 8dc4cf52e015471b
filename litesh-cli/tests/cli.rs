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

//! End-to-end tests that drive the `litesh` binary with piped stdin, the way
//! a non-interactive script would invoke it.

use assert_cmd::Command;
use predicates::str::contains;

fn litesh() -> Command {
    let mut cmd = Command::cargo_bin("litesh").unwrap();
    let home = tempfile::tempdir().unwrap();
    // Leak the tempdir so it outlives the command; each test gets its own.
    cmd.env("HOME", home.into_path());
    cmd
}

#[test]
fn echo_writes_its_arguments_joined_by_a_space() {
    litesh()
        .write_stdin("echo hello world\nexit\n")
        .assert()
        .success()
        .stdout(contains("hello world\n"));
}

#[test]
fn unknown_command_reports_command_not_found() {
    litesh()
        .write_stdin("definitely-not-a-real-command-xyz\nexit\n")
        .assert()
        .success()
        .stdout(contains(
            "definitely-not-a-real-command-xyz: command not found",
        ));
}

#[test]
fn type_reports_a_builtin_and_an_unresolved_name() {
    litesh()
        .write_stdin("type echo\ntype nosuchcmd\nexit\n")
        .assert()
        .success()
        .stdout(contains("echo is a shell builtin"))
        .stdout(contains("nosuchcmd not found"));
}

#[test]
fn exit_with_a_numeric_argument_propagates_as_the_process_status() {
    litesh().write_stdin("exit 7\n").assert().code(7);
}

#[test]
fn eof_on_stdin_terminates_with_status_zero() {
    litesh().write_stdin("").assert().success();
}

#[test]
fn pipeline_output_matches_the_chained_external_commands() {
    // Both stages must be external: `echo` is a builtin, and a builtin in a
    // non-final pipeline position is rejected rather than run (see
    // litesh-exec/src/pipeline.rs).
    litesh()
        .write_stdin("printf hi | cat\nexit\n")
        .assert()
        .success()
        .stdout(contains("hi"));
}

#[test]
fn history_lists_prior_lines_one_indexed() {
    litesh()
        .write_stdin("echo one\necho two\nhistory\nexit\n")
        .assert()
        .success()
        .stdout(contains("1 echo one"))
        .stdout(contains("2 echo two"));
}
