//! Tree reconstruction from flat, path-addressed listings
//!
//! - `node` - the owned `TreeNode` type
//! - `builder` - single sorted pass from entries to a forest of top-level nodes

mod builder;
mod node;

pub use builder::build_tree;
pub use node::{TreeNode, count_kinds, count_nodes};
