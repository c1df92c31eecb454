//! Shared helpers for integration tests.

use richtext_babel::model::Document;
use serde_json::Value;
use std::path::PathBuf;

/// Path of a file under tests/fixtures.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Load a fixture as raw JSON.
pub fn load_fixture_value(name: &str) -> Value {
    let source = std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|err| panic!("failed to read fixture {name}: {err}"));
    serde_json::from_str(&source).unwrap_or_else(|err| panic!("fixture {name} is not JSON: {err}"))
}

/// Load a fixture as a document.
pub fn load_fixture(name: &str) -> Document {
    Document::from_value(&load_fixture_value(name))
}
