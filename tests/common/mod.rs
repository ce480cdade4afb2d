#![allow(dead_code)]

use assert_cmd::Command;
use std::io::Write;

/// The CLI with settings isolated from the user's config file and environment.
pub fn cargo_bin() -> Command {
    let mut cmd = Command::cargo_bin("bf-tape").unwrap();
    cmd.env("XDG_CONFIG_HOME", std::env::temp_dir().join("bf-tape-tests-no-config"))
        .env_remove("BF_LOG")
        .env_remove("BF_DEBUG")
        .env_remove("BF_TRAILING_NEWLINE");
    cmd
}

pub fn source_file(content: &str) -> tempfile::NamedTempFile {
    let mut tf = tempfile::NamedTempFile::new().expect("tempfile");
    write!(tf, "{}", content).unwrap();
    tf
}
