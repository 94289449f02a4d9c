//! In-memory listing source

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::types::{Listing, RepoRef};

use super::ListingSource;

/// Serves listings from a map. Unknown repositories fail like a remote 404.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    listings: HashMap<RepoRef, Option<Listing>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listing(mut self, repo: RepoRef, listing: Listing) -> Self {
        self.listings.insert(repo, Some(listing));
        self
    }

    /// Register a repository that exists but has nothing to list.
    pub fn with_absent(mut self, repo: RepoRef) -> Self {
        self.listings.insert(repo, None);
        self
    }
}

impl ListingSource for MemorySource {
    fn fetch(&self, repo: &RepoRef) -> Result<Option<Listing>> {
        self.listings
            .get(repo)
            .cloned()
            .ok_or_else(|| Error::upstream(repo, "repository or branch not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Entry;

    #[test]
    fn test_known_and_unknown_repositories() {
        let repo = RepoRef::new("octo", "demo", "main");
        let source = MemorySource::new()
            .with_listing(repo.clone(), Listing::new(vec![Entry::file("a", 1)]));

        let listing = source.fetch(&repo).unwrap().unwrap();
        assert_eq!(listing.entries.len(), 1);

        let missing = RepoRef::new("octo", "demo", "dev");
        let err = source.fetch(&missing).unwrap_err();
        assert!(matches!(err, Error::UpstreamFetch { .. }));
        assert!(err.to_string().contains("octo/demo@dev"));
    }

    #[test]
    fn test_absent_listing() {
        let repo = RepoRef::new("octo", "empty", "main");
        let source = MemorySource::new().with_absent(repo.clone());
        assert!(source.fetch(&repo).unwrap().is_none());
    }
}
