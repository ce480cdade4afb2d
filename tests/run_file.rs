mod common;

use common::{cargo_bin, source_file};
use predicates::prelude::*;

#[test]
fn runs_program_from_file() {
    let tf = source_file("+++.");
    cargo_bin()
        .arg(tf.path())
        .assert()
        .success()
        .stdout("\u{3}")
        .stderr(predicate::str::is_empty());
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let tf = source_file("\n\n   -.\n\t\n");
    cargo_bin()
        .arg(tf.path())
        .assert()
        .success()
        .stdout("\u{ff}");
}

#[test]
fn comments_are_skipped() {
    let tf = source_file("print two: ++ .");
    cargo_bin()
        .arg(tf.path())
        .assert()
        .success()
        .stdout("\u{2}");
}

#[test]
fn hello_world() {
    let tf = source_file(concat!(
        "++++++++++[>+++++++>++++++++++>+++>+<<<<-]\n",
        ">++.>+.+++++++..+++.>++.<<+++++++++++++++.>.+++.------.--------.>+.>.",
    ));
    cargo_bin()
        .arg(tf.path())
        .assert()
        .success()
        .stdout("Hello World!\n");
}

#[test]
fn trailing_newline_flag_and_env() {
    let tf = source_file(&format!("{}.", "+".repeat(65))); // 'A'
    cargo_bin()
        .arg("--trailing-newline")
        .arg(tf.path())
        .assert()
        .success()
        .stdout("A\n");

    cargo_bin()
        .env("BF_TRAILING_NEWLINE", "1")
        .arg(tf.path())
        .assert()
        .success()
        .stdout("A\n");
}

#[test]
fn empty_file_is_a_valid_program() {
    let tf = source_file("   \n");
    cargo_bin()
        .arg(tf.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
