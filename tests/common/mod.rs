//! Shared test fixtures.
#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// A throwaway git repository driven through the real `git` binary.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Initialize an empty repository with commit identity configured.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let repo = TestRepo { dir };
        repo.git(&["init", "-b", "main"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo.git(&["config", "commit.gpgsign", "false"]);
        repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Run a git command in the repository; panics on failure.
    pub fn git(&self, args: &[&str]) {
        let status = Command::new("git")
            .arg("-C")
            .arg(self.path())
            .args(args)
            .status()
            .expect("spawn git");
        assert!(status.success(), "git {:?} failed", args);
    }

    /// Write a file relative to the repository root.
    pub fn write(&self, name: &str, content: &str) {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(path, content).expect("write file");
    }

    /// Stage a path.
    pub fn stage(&self, name: &str) {
        self.git(&["add", name]);
    }

    /// Record an empty commit with `message`.
    pub fn commit(&self, message: &str) {
        self.git(&["commit", "--allow-empty", "-m", message]);
    }
}
