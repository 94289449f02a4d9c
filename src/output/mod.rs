//! Text rendering of listings and trees
//!
//! - `header` - summary block shared by every format
//! - `listing` - flat formats (paths-only, compact, detailed)
//! - `tree` - tree formats (tree, simple-tree, detailed)
//! - `color` - terminal printing with highlighted warning/hint lines
//! - `utils` - size formatting and prefix helpers

mod color;
mod config;
mod header;
mod listing;
mod tree;
mod utils;

pub use color::{print_payload, write_payload};
pub use config::OutputConfig;
pub use header::{Header, MORE_RESULTS, TRUNCATION_WARNING};
pub use listing::ListingFormatter;
pub use tree::TreeFormatter;
pub use utils::{continuation_prefix, format_size};

/// Join a header and a body into the final payload.
pub fn render_payload(header: &Header<'_>, body: &str) -> String {
    let mut output = header.format();
    output.push('\n');
    output.push_str(body);
    output
}
