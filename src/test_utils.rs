//! Test utilities: temporary git repositories and synthetic listings.
//!
//! This module is only compiled with the `test-utils` feature (tests and
//! benchmarks).

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

use crate::types::{Entry, RepoRef};

/// A temporary source root holding one git repository at
/// `<root>/<owner>/<repository>`.
///
/// The directory is removed when dropped.
pub struct TestRepo {
    root: TempDir,
    repo: RepoRef,
}

impl TestRepo {
    /// Create and initialize `<tmp>/<owner>/<repository>` for branch `main`.
    pub fn new(owner: &str, repository: &str) -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        let this = Self {
            root,
            repo: RepoRef::new(owner, repository, "main"),
        };
        fs::create_dir_all(this.path()).expect("Failed to create repository dir");

        this.git(&["init"]);
        this.git(&["config", "user.email", "test@test.com"]);
        this.git(&["config", "user.name", "Test"]);
        this
    }

    /// Directory containing `<owner>/<repository>`.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// The repository working directory.
    pub fn path(&self) -> PathBuf {
        self.root
            .path()
            .join(&self.repo.owner)
            .join(&self.repo.repository)
    }

    pub fn repo_ref(&self) -> &RepoRef {
        &self.repo
    }

    /// Write a file (creating parent directories) and stage it.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        self.git(&["add", path]);
        full_path
    }

    /// Commit staged files and make sure the branch is called `main`.
    pub fn commit(&self, message: &str) {
        self.git(&["commit", "-m", message, "--allow-empty"]);
        self.git(&["branch", "-M", "main"]);
    }

    /// Create `branch` at the current commit.
    pub fn branch(&self, branch: &str) {
        self.git(&["branch", branch]);
    }

    fn git(&self, args: &[&str]) {
        Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("Failed to run git");
    }
}

/// A synthetic listing with `dirs` top-level directories, each holding
/// `files_per_dir` files and one nested directory with one file.
pub fn sample_entries(dirs: usize, files_per_dir: usize) -> Vec<Entry> {
    let mut entries = Vec::with_capacity(dirs * (files_per_dir + 3) + 1);
    entries.push(Entry::file("README.md", 1024));
    for d in 0..dirs {
        let dir = format!("dir_{:04}", d);
        for f in 0..files_per_dir {
            entries.push(Entry::file(format!("{}/file_{:04}.rs", dir, f), (f as u64 + 1) * 100));
        }
        entries.push(Entry::directory(format!("{}/nested", dir)));
        entries.push(Entry::file(format!("{}/nested/mod.rs", dir), 64));
        entries.push(Entry::directory(dir));
    }
    entries
}

/// Write a git-trees-shaped JSON document for `repo` under `root`.
pub fn write_listing_json(root: &Path, repo: &RepoRef, document: &str) -> PathBuf {
    let path = root
        .join(&repo.owner)
        .join(&repo.repository)
        .join(format!("{}.json", repo.branch));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create listing dirs");
    }
    fs::write(&path, document).expect("Failed to write listing");
    path
}
