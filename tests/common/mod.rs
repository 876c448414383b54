//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// Two-line input used by the end-to-end scenarios
pub const HELLO_INPUT: &str = "Hello World\nPython is amazing\n";

/// Expected transform of `HELLO_INPUT`
pub const HELLO_OUTPUT: &str =
    "Line 1: HELLO WORLD [Words: 2]\nLine 2: PYTHON IS AMAZING [Words: 3]\n";

/// Write `contents` to `name` inside `temp_dir` and return its path
pub fn create_test_file(temp_dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = temp_dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Generate `count` lines of varying word counts and spacing
pub fn generate_lines(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let words: Vec<String> = (0..=(i % 6)).map(|w| format!("word{}", w)).collect();
            format!("{}{}", " ".repeat(i % 3), words.join("  "))
        })
        .collect()
}

/// Read a file's lines, panicking on failure
pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
