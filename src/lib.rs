//! Repotree - filtered, paginated listings and trees of repository contents

pub mod engine;
pub mod error;
pub mod filter;
pub mod limits;
pub mod output;
pub mod paginate;
pub mod source;
pub mod tree;
pub mod types;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use engine::{ListRequest, ListingResult, Query, RepoLister, TreeRequest};
pub use error::{Error, Result};
pub use filter::{KindFilter, PathFilter, PathPattern, filter_entries};
pub use limits::{DefaultLimits, ListFormat, OutputFormat, OutputMode, TreeFormat};
pub use output::{
    Header, ListingFormatter, OutputConfig, TreeFormatter, format_size, print_payload,
    render_payload,
};
pub use paginate::{Page, PageRequest, PaginationHint, paginate};
pub use source::{GitSource, JsonSource, ListingSource, MemorySource};
pub use tree::{TreeNode, build_tree, count_nodes};
pub use types::{Entry, EntryKind, Listing, RepoRef};
