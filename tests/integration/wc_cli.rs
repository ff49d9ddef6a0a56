use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::Fixture;

fn wc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_wc"))
}

#[test]
fn counts_a_file() {
    let fx = Fixture::new();
    let path = fx.file("poem.txt", b"roses are red\nviolets are blue\n");
    wc().arg(&path).assert().success().stdout("2 6 31\n");
}

#[test]
fn reads_stdin_without_argument() {
    wc().write_stdin("a b\tc\n\nd").assert().success().stdout("2 4 8\n");
}

#[test]
fn empty_input_prints_zeros() {
    wc().write_stdin("").assert().success().stdout("0 0 0\n");
}

#[test]
fn counts_bytes_not_characters() {
    wc().write_stdin("caf\u{e9}\n").assert().success().stdout("1 1 6\n");
}

#[test]
fn missing_file_exits_with_one() {
    let fx = Fixture::default();
    wc().arg(fx.missing("ghost.txt"))
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("ghost.txt"));
}

#[test]
fn json_format() {
    wc().args(["--format", "json"])
        .write_stdin("x y\n")
        .assert()
        .success()
        .stdout("{\"lines\":1,\"words\":2,\"chars\":4}\n");
}

#[test]
fn shows_help() {
    wc().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}
