//! Listings stored as JSON documents on disk
//!
//! Documents follow the git trees API shape (`sha`, `url`, `tree`,
//! `truncated`) and live at `<root>/<owner>/<repository>/<branch>.json`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::{Listing, RepoRef};

use super::ListingSource;

pub struct JsonSource {
    root: PathBuf,
}

impl JsonSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn document_path(&self, repo: &RepoRef) -> PathBuf {
        self.root
            .join(&repo.owner)
            .join(&repo.repository)
            .join(format!("{}.json", repo.branch))
    }
}

impl ListingSource for JsonSource {
    fn fetch(&self, repo: &RepoRef) -> Result<Option<Listing>> {
        let path = self.document_path(repo);
        tracing::debug!(path = %path.display(), "Reading listing document");

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::upstream(repo, "repository or branch not found"));
            }
            Err(e) => return Err(Error::upstream(repo, e)),
        };

        if text.trim().is_empty() {
            return Ok(None);
        }

        let listing: Listing = serde_json::from_str(&text)
            .map_err(|e| Error::upstream(repo, format!("malformed listing: {}", e)))?;
        tracing::debug!(
            entries = listing.entries.len(),
            truncated = listing.truncated,
            "Parsed listing document"
        );
        Ok(Some(listing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_doc(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_reads_listing_document() {
        let dir = TempDir::new().unwrap();
        write_doc(
            dir.path(),
            "octo/demo/main.json",
            r#"{"sha": "t1", "tree": [{"path": "a.txt", "type": "blob", "sha": "b1", "size": 3}]}"#,
        );

        let source = JsonSource::new(dir.path());
        let listing = source
            .fetch(&RepoRef::new("octo", "demo", "main"))
            .unwrap()
            .unwrap();
        assert_eq!(listing.identity, "t1");
        assert_eq!(listing.entries[0].path, "a.txt");
        assert!(!listing.truncated);
    }

    #[test]
    fn test_branch_with_slash() {
        let dir = TempDir::new().unwrap();
        write_doc(dir.path(), "octo/demo/feature/x.json", r#"{"tree": []}"#);

        let source = JsonSource::new(dir.path());
        let listing = source
            .fetch(&RepoRef::new("octo", "demo", "feature/x"))
            .unwrap()
            .unwrap();
        assert!(listing.is_empty());
    }

    #[test]
    fn test_missing_document_is_upstream_failure() {
        let dir = TempDir::new().unwrap();
        let source = JsonSource::new(dir.path());
        let err = source
            .fetch(&RepoRef::new("octo", "nope", "main"))
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_malformed_document() {
        let dir = TempDir::new().unwrap();
        write_doc(dir.path(), "octo/demo/main.json", "{not json");
        let err = JsonSource::new(dir.path())
            .fetch(&RepoRef::new("octo", "demo", "main"))
            .unwrap_err();
        assert!(matches!(err, Error::UpstreamFetch { .. }));
        assert!(err.to_string().contains("malformed listing"));
    }

    #[test]
    fn test_blank_document_is_absent() {
        let dir = TempDir::new().unwrap();
        write_doc(dir.path(), "octo/demo/main.json", "  \n");
        let listing = JsonSource::new(dir.path())
            .fetch(&RepoRef::new("octo", "demo", "main"))
            .unwrap();
        assert!(listing.is_none());
    }
}
