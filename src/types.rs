//! Core data model: repository entries and listings

use std::fmt;

use serde::Deserialize;

/// Classification of a listing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum EntryKind {
    #[serde(rename = "file", alias = "blob")]
    File,
    #[serde(rename = "directory", alias = "tree", alias = "dir")]
    Directory,
    /// Opaque nested repository reference, rendered as a leaf.
    #[serde(rename = "submodule", alias = "commit")]
    Submodule,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Directory => "directory",
            EntryKind::Submodule => "submodule",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One item of a repository listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Entry {
    /// Slash-separated path, unique within a listing.
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(rename = "sha")]
    pub identity: String,
    /// Only meaningful for files.
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(rename = "url", default)]
    pub locator: String,
}

impl Entry {
    pub fn new(path: impl Into<String>, kind: EntryKind, identity: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            identity: identity.into(),
            size: None,
            locator: String::new(),
        }
    }

    pub fn file(path: impl Into<String>, size: u64) -> Self {
        let path = path.into();
        let identity = format!("blob:{}", path);
        Self::new(path, EntryKind::File, identity).with_size(size)
    }

    pub fn directory(path: impl Into<String>) -> Self {
        let path = path.into();
        let identity = format!("tree:{}", path);
        Self::new(path, EntryKind::Directory, identity)
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_locator(mut self, locator: impl Into<String>) -> Self {
        self.locator = locator.into();
        self
    }

    /// Final path segment.
    pub fn name(&self) -> &str {
        basename(&self.path)
    }

    /// Path of the containing directory, `None` for top-level entries.
    pub fn parent(&self) -> Option<&str> {
        parent_path(&self.path)
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Final segment of a slash-separated path.
pub fn basename(path: &str) -> &str {
    path.rsplit_once('/').map_or(path, |(_, name)| name)
}

/// Everything before the last `/`, or `None` if the path has no separator.
pub fn parent_path(path: &str) -> Option<&str> {
    path.rsplit_once('/').map(|(parent, _)| parent)
}

/// The full set of entries for one branch of one repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Listing {
    #[serde(rename = "sha", default)]
    pub identity: String,
    #[serde(rename = "url", default)]
    pub locator: String,
    #[serde(rename = "tree", default)]
    pub entries: Vec<Entry>,
    /// Set when the source could not return every entry.
    #[serde(default)]
    pub truncated: bool,
}

impl Listing {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Identifies one branch of one repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    pub owner: String,
    pub repository: String,
    pub branch: String,
}

impl RepoRef {
    pub fn new(
        owner: impl Into<String>,
        repository: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            repository: repository.into(),
            branch: branch.into(),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}@{}", self.owner, self.repository, self.branch)
    }
}
