//! Listing sources
//!
//! A source resolves an `(owner, repository, branch)` triple to a `Listing`.
//! `Ok(None)` means the source had nothing to list; it is not an error.

mod git;
mod json;
mod memory;

pub use git::{DEFAULT_MAX_ENTRIES, GitSource};
pub use json::JsonSource;
pub use memory::MemorySource;

use crate::error::Result;
use crate::types::{Listing, RepoRef};

pub trait ListingSource {
    fn fetch(&self, repo: &RepoRef) -> Result<Option<Listing>>;
}

impl<S: ListingSource + ?Sized> ListingSource for &S {
    fn fetch(&self, repo: &RepoRef) -> Result<Option<Listing>> {
        (**self).fetch(repo)
    }
}

impl<S: ListingSource + ?Sized> ListingSource for Box<S> {
    fn fetch(&self, repo: &RepoRef) -> Result<Option<Listing>> {
        (**self).fetch(repo)
    }
}
