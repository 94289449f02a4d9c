//! Listings read from local git repositories

use std::path::{Path, PathBuf};

use git2::{ObjectType, Repository, TreeWalkMode, TreeWalkResult};

use crate::error::{Error, Result};
use crate::types::{Entry, EntryKind, Listing, RepoRef};

use super::ListingSource;

/// Matches the entry cap of the hosted git trees API.
pub const DEFAULT_MAX_ENTRIES: usize = 100_000;

/// Lists the committed tree of a branch from repositories laid out as
/// `<root>/<owner>/<repository>`.
pub struct GitSource {
    root: PathBuf,
    base_url: Option<String>,
    max_entries: usize,
}

impl GitSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            base_url: None,
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }

    /// Prefix for entry locators. Defaults to a `file://` URL of the root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Stop after this many entries and mark the listing truncated.
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    pub fn repository_path(&self, repo: &RepoRef) -> PathBuf {
        self.root.join(&repo.owner).join(&repo.repository)
    }

    fn base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("file://{}", self.root.display()),
        }
    }

    fn locator(&self, repo: &RepoRef, kind: EntryKind, path: &str) -> String {
        let segment = match kind {
            EntryKind::Directory => "tree",
            EntryKind::File | EntryKind::Submodule => "blob",
        };
        format!(
            "{}/{}/{}/{}/{}/{}",
            self.base_url(),
            repo.owner,
            repo.repository,
            segment,
            repo.branch,
            path
        )
    }
}

impl ListingSource for GitSource {
    fn fetch(&self, repo: &RepoRef) -> Result<Option<Listing>> {
        let path = self.repository_path(repo);
        tracing::debug!(path = %path.display(), branch = %repo.branch, "Opening git repository");

        let git = open_repository(&path).map_err(|e| Error::upstream(repo, e.message()))?;
        let tree = git
            .revparse_single(&repo.branch)
            .and_then(|object| object.peel_to_tree())
            .map_err(|e| {
                Error::upstream(repo, format!("cannot resolve '{}': {}", repo.branch, e.message()))
            })?;

        let mut entries = Vec::new();
        let mut truncated = false;
        let walked = tree.walk(TreeWalkMode::PreOrder, |dir, item| {
            if entries.len() >= self.max_entries {
                truncated = true;
                return TreeWalkResult::Abort;
            }
            // Non-UTF-8 names cannot be addressed by slash-separated paths
            let Some(name) = item.name() else {
                return TreeWalkResult::Skip;
            };
            let kind = match item.kind() {
                Some(ObjectType::Blob) => EntryKind::File,
                Some(ObjectType::Tree) => EntryKind::Directory,
                Some(ObjectType::Commit) => EntryKind::Submodule,
                _ => return TreeWalkResult::Skip,
            };
            let path = format!("{}{}", dir, name);
            let size = match kind {
                EntryKind::File => git.find_blob(item.id()).ok().map(|b| b.size() as u64),
                _ => None,
            };
            let locator = self.locator(repo, kind, &path);
            entries.push(Entry {
                path,
                kind,
                identity: item.id().to_string(),
                size,
                locator,
            });
            TreeWalkResult::Ok
        });

        // An aborted walk reports an error; only a real failure matters here.
        if let Err(e) = walked {
            if !truncated {
                return Err(Error::upstream(repo, e.message()));
            }
        }

        tracing::debug!(entries = entries.len(), truncated, "Listed git tree");
        Ok(Some(Listing {
            identity: tree.id().to_string(),
            locator: format!(
                "{}/{}/{}/tree/{}",
                self.base_url(),
                repo.owner,
                repo.repository,
                repo.branch
            ),
            entries,
            truncated,
        }))
    }
}

fn open_repository(path: &Path) -> std::result::Result<Repository, git2::Error> {
    Repository::open(path).or_else(|_| Repository::open_bare(path))
}
