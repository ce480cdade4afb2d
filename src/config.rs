//! User settings.
//!
//! Values are resolved in this order: command-line flags, environment
//! (`BF_TRAILING_NEWLINE`, `BF_DEBUG`, `BF_LOG`), the `[run]` section of
//! `bf-tape.toml` in the XDG config home, then built-in defaults.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;

use cross_xdg::BaseDirs;

pub const FILE_NAME: &str = "bf-tape.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Print a newline to stdout once the program halts.
    pub trailing_newline: bool,
    /// Print the step table to stderr while running.
    pub debug: bool,
    /// `tracing` filter directive used when `BF_LOG` is unset.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            trailing_newline: false,
            debug: false,
            log_level: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Defaults, overlaid with the config file and then the environment.
    pub fn load() -> Self {
        let mut settings = Settings::default();
        if let Some(content) = config_path().and_then(|p| fs::read_to_string(p).ok()) {
            settings.apply(&parse_section(&content, "run"));
        }
        settings.apply_env(|key| env::var(key).ok());
        settings
    }

    fn apply(&mut self, values: &HashMap<String, String>) {
        if let Some(v) = values.get("trailing_newline").and_then(|s| parse_bool(s)) {
            self.trailing_newline = v;
        }
        if let Some(v) = values.get("debug").and_then(|s| parse_bool(s)) {
            self.debug = v;
        }
        if let Some(v) = values.get("log_level") {
            self.log_level = v.clone();
        }
    }

    fn apply_env<F: Fn(&str) -> Option<String>>(&mut self, var: F) {
        if let Some(v) = var("BF_TRAILING_NEWLINE").and_then(|s| parse_bool(&s)) {
            self.trailing_newline = v;
        }
        if let Some(v) = var("BF_DEBUG").and_then(|s| parse_bool(&s)) {
            self.debug = v;
        }
        if let Some(v) = var("BF_LOG") {
            self.log_level = v;
        }
    }
}

/// `<XDG config home>/bf-tape.toml`, if a home directory can be found.
pub fn config_path() -> Option<PathBuf> {
    let base_dirs = BaseDirs::new().ok()?;
    let mut path = PathBuf::from(base_dirs.config_home());
    path.push(FILE_NAME);
    Some(path)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Collect `key = value` pairs from one `[section]` of a small TOML-like file.
/// Quoted values are unquoted; `#` lines are comments.
fn parse_section(content: &str, section: &str) -> HashMap<String, String> {
    let mut in_section = false;
    let mut map = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.starts_with('[') && line.ends_with(']') {
            in_section = &line[1..line.len() - 1] == section;
            continue;
        }
        if !in_section {
            continue;
        }
        if let Some((key, raw)) = line.split_once('=') {
            let raw = raw.trim();
            let val = raw
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(raw);
            map.insert(key.trim().to_string(), val.to_string());
        }
    }
    map
}
