use std::collections::HashMap;

use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::Fixture;

fn words() -> Command {
    Command::new(env!("CARGO_BIN_EXE_words"))
}

fn table_rows(stdout: &[u8]) -> HashMap<String, usize> {
    String::from_utf8_lossy(stdout)
        .lines()
        .skip(1)
        .map(|line| {
            let (count, word) = line.split_once('\t').expect("count<TAB>word");
            (word.to_string(), count.parse().expect("numeric count"))
        })
        .collect()
}

#[test]
fn default_mode_is_total_count() {
    words()
        .write_stdin("Hello, World! 123")
        .assert()
        .success()
        .stdout("The total number of words is: 2\n");
}

#[test]
fn count_flag_on_file() {
    let fx = Fixture::new();
    let path = fx.file("in.txt", b"one two\nthree");
    words()
        .arg("-c")
        .arg(&path)
        .assert()
        .success()
        .stdout("The total number of words is: 3\n");
}

#[test]
fn frequency_table_counts_each_word() {
    let output = words().arg("--frequency").write_stdin("a a b").output().unwrap();
    assert!(output.status.success());

    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.starts_with("The frequencies of each word are: \n"));
    let rows = table_rows(&output.stdout);
    assert_eq!(rows, HashMap::from([("a".to_string(), 2), ("b".to_string(), 1)]));
}

#[test]
fn frequency_table_is_sorted_by_count_then_word() {
    words()
        .arg("-f")
        .write_stdin("pear Apple apple fig PEAR apple")
        .assert()
        .success()
        .stdout("The frequencies of each word are: \n3\tapple\n2\tpear\n1\tfig\n");
}

#[test]
fn frequency_table_alphabetical() {
    words()
        .args(["-f", "--sort", "word"])
        .write_stdin("c b a b")
        .assert()
        .success()
        .stdout("The frequencies of each word are: \n1\ta\n2\tb\n1\tc\n");
}

#[test]
fn last_mode_flag_wins() {
    words()
        .args(["-f", "-c"])
        .write_stdin("x y x")
        .assert()
        .success()
        .stdout("The total number of words is: 3\n");
}

#[test]
fn repeated_count_flag_still_counts() {
    words()
        .args(["-c", "-c"])
        .write_stdin("x y x")
        .assert()
        .success()
        .stdout("The total number of words is: 3\n");
}

#[test]
fn repeated_frequency_flag_after_count_prints_table() {
    words()
        .args(["-f", "-c", "-f", "-f"])
        .write_stdin("x y x")
        .assert()
        .success()
        .stdout("The frequencies of each word are: \n2\tx\n1\ty\n");
}

#[test]
fn long_words_are_truncated() {
    let long = "a".repeat(100);
    let expected = format!("The frequencies of each word are: \n1\t{}\n", "a".repeat(63));
    words()
        .arg("-f")
        .write_stdin(long)
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

#[test]
fn help_lists_both_modes() {
    words()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("--count").and(predicate::str::contains("--frequency")));
}

#[test]
fn missing_file_exits_with_one() {
    let fx = Fixture::new();
    words()
        .args(["-f"])
        .arg(fx.missing("nowhere.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nowhere.txt"));
}

#[test]
fn zero_max_word_len_is_rejected() {
    words()
        .args(["--max-word-len", "0"])
        .write_stdin("x")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--max-word-len"));
}

#[test]
fn json_frequency_output() {
    let output = words()
        .args(["-f", "--format", "json"])
        .write_stdin("b a b")
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["word"], "b");
    assert_eq!(json[0]["count"], 2);
    assert_eq!(json[1]["word"], "a");
}

#[cfg(target_os = "linux")]
#[test]
fn limits_are_printed_before_the_result() {
    words()
        .arg("--limits")
        .write_stdin("x")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("max file descriptors: ")
                .and(predicate::str::ends_with("The total number of words is: 1\n")),
        );
}
