// tests/common/mod.rs
//! Shared fixtures for the CLI tests.

use std::{fs, path::PathBuf};

use tempfile::TempDir;

/// A temp directory holding input files for one test.
pub struct Fixture {
    dir: TempDir,
}

impl Default for Fixture {
    fn default() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn missing(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
