//! Test utilities shared across the codebase

use std::env;
use std::fs;
use std::path::PathBuf;

/// Directory holding the stylesheet fixtures
pub fn fixtures_dir() -> PathBuf {
    // CARGO_MANIFEST_DIR is always set under cargo test
    let root = env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::current_dir().expect("Failed to get current directory"));
    root.join("fixtures")
}

/// Read a fixture file by name
pub fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}
