//! Header block shared by every output format

use crate::paginate::{Page, PaginationHint};
use crate::types::RepoRef;

/// Leading text of the truncation warning line.
pub const TRUNCATION_WARNING: &str =
    "WARNING: upstream listing was truncated; some entries may be missing.";

/// Leading text of the pagination hint line.
pub const MORE_RESULTS: &str = "More results available:";

/// Summary lines printed above the body.
#[derive(Debug, Clone)]
pub struct Header<'a> {
    pub repo: &'a RepoRef,
    pub total: usize,
    pub showing: usize,
    pub offset: usize,
    pub truncated: bool,
    pub hint: Option<PaginationHint>,
}

impl<'a> Header<'a> {
    pub fn new(repo: &'a RepoRef) -> Self {
        Self {
            repo,
            total: 0,
            showing: 0,
            offset: 0,
            truncated: false,
            hint: None,
        }
    }

    /// Header describing `page`, with the continuation hint derived from it.
    pub fn for_page(repo: &'a RepoRef, page: &Page<'_>, truncated: bool) -> Self {
        Self {
            repo,
            total: page.total,
            showing: page.showing,
            offset: page.offset,
            truncated,
            hint: Some(PaginationHint::from_page(page)),
        }
    }

    pub fn with_truncated(mut self, truncated: bool) -> Self {
        self.truncated = truncated;
        self
    }

    pub fn format(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Repository: {}/{} (branch: {})\n",
            self.repo.owner, self.repo.repository, self.repo.branch
        ));
        output.push_str(&format!("Total: {}\n", self.total));
        output.push_str(&format!("Showing: {}\n", self.showing));
        if self.offset > 0 {
            output.push_str(&format!("Offset: {}\n", self.offset));
        }
        if self.truncated {
            output.push_str(TRUNCATION_WARNING);
            output.push('\n');
        }
        if let Some(hint) = self.hint.filter(|h| h.has_more) {
            output.push_str(&format!(
                "{} use offset={} to continue ({}/{} shown).\n",
                MORE_RESULTS, hint.next_offset, hint.next_offset, hint.total
            ));
        }
        output
    }
}
