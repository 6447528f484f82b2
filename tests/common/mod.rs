//! Common test utilities for ctxsync integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A seeded workspace for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new empty test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Seed the required context document
    #[allow(dead_code)]
    pub fn seed_context(&self, content: &str) {
        self.write_file(".ai/context.md", content);
    }

    /// Seed an agent source file
    #[allow(dead_code)]
    pub fn seed_agent(&self, file_name: &str, content: &str) {
        self.write_file(&format!(".ai/agents/{file_name}"), content);
    }

    /// Seed a command source file
    #[allow(dead_code)]
    pub fn seed_command(&self, file_name: &str, content: &str) {
        self.write_file(&format!(".ai/commands/{file_name}"), content);
    }
}
