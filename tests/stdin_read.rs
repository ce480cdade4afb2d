// Exercises ',' by feeding lines on stdin to a program that echoes them.
mod common;

use common::{cargo_bin, source_file};

#[test]
fn reads_first_character_of_a_line() {
    let tf = source_file(",.");
    cargo_bin()
        .arg(tf.path())
        .write_stdin("A\n")
        .assert()
        .success()
        .stdout("A");
}

#[test]
fn remainder_of_each_line_is_discarded() {
    let tf = source_file(",.,.");
    cargo_bin()
        .arg(tf.path())
        .write_stdin("hello\nworld\n")
        .assert()
        .success()
        .stdout("hw");
}

#[test]
fn end_of_input_stores_zero() {
    // Reads nothing, so the loop is skipped and '+' makes the cell 1.
    let tf = source_file("+++,[.]+++++++++++++++++++++++++++++++++++++++++++++++++.");
    cargo_bin()
        .arg(tf.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout("1");
}
