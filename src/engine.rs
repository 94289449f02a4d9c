//! Listing orchestration: fetch, filter, paginate, build and render
//!
//! `RepoLister` is the only component that talks to a `ListingSource`. Every
//! call fetches once, then runs a pure in-memory pipeline; nothing is kept
//! between calls.

use crate::error::Result;
use crate::filter::{KindFilter, PathFilter};
use crate::limits::{DefaultLimits, ListFormat, OutputFormat, TreeFormat};
use crate::output::{Header, ListingFormatter, TreeFormatter, render_payload};
use crate::paginate::{Page, PageRequest, PaginationHint, paginate};
use crate::source::ListingSource;
use crate::tree::build_tree;
use crate::types::RepoRef;

const EMPTY_LISTING: &str = "No entries found.\n";
const NO_MATCHES: &str = "No entries match the given filters.\n";

/// Filtering and windowing parameters shared by both tools.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub kind: KindFilter,
    pub pattern: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<i64>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: KindFilter) -> Self {
        self.kind = kind;
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// Flat listing request.
#[derive(Debug, Clone)]
pub struct ListRequest {
    pub repo: RepoRef,
    pub query: Query,
    pub format: ListFormat,
}

/// Hierarchical view request.
#[derive(Debug, Clone)]
pub struct TreeRequest {
    pub repo: RepoRef,
    pub query: Query,
    pub format: TreeFormat,
}

/// Rendered payload plus the numbers it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingResult {
    pub text: String,
    pub total: usize,
    pub showing: usize,
    pub offset: usize,
    pub truncated: bool,
    pub hint: Option<PaginationHint>,
}

impl ListingResult {
    pub fn has_more(&self) -> bool {
        self.hint.is_some_and(|h| h.has_more)
    }

    pub fn next_offset(&self) -> Option<usize> {
        self.hint.filter(|h| h.has_more).map(|h| h.next_offset)
    }
}

pub struct RepoLister<S> {
    source: S,
    limits: DefaultLimits,
}

impl<S: ListingSource> RepoLister<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            limits: DefaultLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: DefaultLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> &DefaultLimits {
        &self.limits
    }

    /// Flat listing of repository entries.
    pub fn list_contents(&self, request: &ListRequest) -> Result<ListingResult> {
        self.run(&request.repo, &request.query, request.format.into())
    }

    /// Directory tree of repository entries.
    pub fn directory_tree(&self, request: &TreeRequest) -> Result<ListingResult> {
        self.run(&request.repo, &request.query, request.format.into())
    }

    fn run(&self, repo: &RepoRef, query: &Query, format: OutputFormat) -> Result<ListingResult> {
        // Compile first so a bad pattern fails even when the listing is empty
        let filter = PathFilter::new(query.kind, query.pattern.as_deref())?;

        tracing::debug!(%repo, %format, "Fetching listing");
        let listing = match self.source.fetch(repo)? {
            Some(listing) if !listing.is_empty() => listing,
            other => {
                let truncated = other.is_some_and(|l| l.truncated);
                tracing::debug!(%repo, "Empty listing");
                return Ok(Self::empty_result(repo, truncated));
            }
        };

        let filtered = filter.apply(&listing.entries);
        let limit = self.limits.resolve(format, query.limit);
        let page = paginate(filtered, PageRequest::new(Some(limit), query.offset));
        tracing::debug!(
            fetched = listing.entries.len(),
            total = page.total,
            showing = page.showing,
            offset = page.offset,
            limit,
            "Filtered and paginated listing"
        );

        let header = Header::for_page(repo, &page, listing.truncated);
        let body = Self::render_body(&page, format);

        Ok(ListingResult {
            text: render_payload(&header, &body),
            total: page.total,
            showing: page.showing,
            offset: page.offset,
            truncated: listing.truncated,
            hint: header.hint,
        })
    }

    fn render_body(page: &Page<'_>, format: OutputFormat) -> String {
        if page.total == 0 {
            return NO_MATCHES.to_string();
        }
        match format {
            OutputFormat::Listing(format) => ListingFormatter::new(format).format(&page.window),
            OutputFormat::Tree(format) => {
                let forest = build_tree(page.window.iter().copied());
                TreeFormatter::new(format).format(&forest)
            }
        }
    }

    fn empty_result(repo: &RepoRef, truncated: bool) -> ListingResult {
        let header = Header::new(repo).with_truncated(truncated);
        ListingResult {
            text: render_payload(&header, EMPTY_LISTING),
            total: 0,
            showing: 0,
            offset: 0,
            truncated,
            hint: None,
        }
    }
}
