//! Shared helpers for the integration tests.

use md2html_core::Document;
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("fixture to be readable")
}

/// Parse markdown source the way the cli does: one record per line.
pub fn parse(source: &str) -> Document {
    let lines: Vec<&str> = source.lines().collect();
    md2html_core::parse_markdown(&lines)
}

/// Body fragments concatenated without separators.
pub fn body(source: &str) -> String {
    parse(source).blocks.concat()
}
