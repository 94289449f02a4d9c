//! Test harness for repotree integration tests

use std::path::Path;
use std::process::Command;

pub use repotree::test_utils::{TestRepo, write_listing_json};

/// A committed repository `octo/demo` with a small source tree on `main`.
pub fn demo_repo() -> TestRepo {
    let repo = TestRepo::new("octo", "demo");
    repo.add_file("README.md", "# demo\n");
    repo.add_file("src/index.ts", "export const x = 1;\n");
    repo.add_file("src/util/fmt.ts", "export {};\n");
    repo.add_file("docs/guide.md", "guide\n");
    repo.commit("initial");
    repo
}

/// Run the binary against git repositories under `root`.
pub fn run_repotree(root: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_repotree");
    let output = Command::new(binary)
        .args(args)
        .arg("--root")
        .arg(root)
        .args(["--color", "never"])
        .env_remove("FORCE_COLOR")
        .output()
        .expect("Failed to run repotree");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_repository() {
        let repo = TestRepo::new("octo", "demo");
        assert!(repo.path().join(".git").exists());
        assert!(repo.path().starts_with(repo.root()));
    }

    #[test]
    fn test_harness_add_file() {
        let repo = TestRepo::new("octo", "demo");
        let file_path = repo.add_file("nested/test.rs", "fn main() {}");
        assert!(file_path.exists());
    }
}
