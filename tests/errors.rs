mod common;

use common::{cargo_bin, source_file};
use predicates::prelude::*;

#[test]
fn unmatched_open_bracket_is_a_parse_error() {
    let tf = source_file("[");
    cargo_bin()
        .arg(tf.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Parse error: unmatched bracket '['"));
}

#[test]
fn unmatched_close_bracket_stops_before_any_output() {
    let tf = source_file("+.]");
    cargo_bin()
        .arg(tf.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains("unmatched bracket ']'")
                .and(predicate::str::contains("at instruction 2")),
        );
}

#[test]
fn pointer_underflow_is_a_runtime_error() {
    let tf = source_file("+.<");
    cargo_bin()
        .arg(tf.path())
        .assert()
        .code(1)
        .stdout("\u{1}")
        .stderr(predicate::str::contains("Runtime error: pointer moved left of cell 0"));
}

#[test]
fn caret_points_at_the_error() {
    let tf = source_file("++]");
    cargo_bin()
        .arg(tf.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("  ++]\n    ^"));
}

#[test]
fn missing_file_is_reported() {
    cargo_bin()
        .arg("/definitely/not/here.bf")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read"));
}
