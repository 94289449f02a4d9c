//! Tree formatter
//!
//! Formats a forest of `TreeNode`s as connector-drawn, indented or detailed
//! text, followed by a directory/file count summary.

use crate::limits::TreeFormat;
use crate::tree::{TreeNode, count_kinds};

use super::utils::{continuation_prefix, name_with_size};

const SIMPLE_INDENT: &str = "  ";

/// Formatter for reconstructed trees.
pub struct TreeFormatter {
    format: TreeFormat,
}

impl TreeFormatter {
    pub fn new(format: TreeFormat) -> Self {
        Self { format }
    }

    /// Body text for `nodes`, ending with the count summary.
    pub fn format(&self, nodes: &[TreeNode]) -> String {
        let mut output = String::new();
        match self.format {
            TreeFormat::SimpleTree => {
                for node in nodes {
                    Self::format_simple(node, &mut output, 0);
                }
            }
            TreeFormat::Tree | TreeFormat::Detailed => {
                for (i, node) in nodes.iter().enumerate() {
                    let is_last = i == nodes.len() - 1;
                    self.format_node(node, &mut output, "", is_last);
                }
            }
        }

        let (dir_count, file_count) = count_kinds(nodes);
        output.push_str(&format!(
            "\n{} directories, {} files\n",
            dir_count, file_count
        ));
        output
    }

    fn label(node: &TreeNode) -> String {
        match node {
            TreeNode::Dir { name, .. } => format!("{}/", name),
            TreeNode::File { name, size, .. } => name_with_size(name, *size),
            TreeNode::Submodule { name, .. } => format!("{} (submodule)", name),
        }
    }

    fn format_node(&self, node: &TreeNode, output: &mut String, prefix: &str, is_last: bool) {
        let connector = if is_last { "└── " } else { "├── " };
        output.push_str(prefix);
        output.push_str(connector);
        output.push_str(&Self::label(node));
        output.push('\n');

        let cont_prefix = continuation_prefix(prefix, is_last);

        match node {
            TreeNode::File {
                identity, locator, ..
            } if self.format == TreeFormat::Detailed => {
                output.push_str(&format!("{}SHA: {}\n", cont_prefix, identity));
                output.push_str(&format!("{}URL: {}\n", cont_prefix, locator));
            }
            TreeNode::Dir { children, .. } => {
                for (i, child) in children.iter().enumerate() {
                    let child_is_last = i == children.len() - 1;
                    self.format_node(child, output, &cont_prefix, child_is_last);
                }
            }
            _ => {}
        }
    }

    fn format_simple(node: &TreeNode, output: &mut String, depth: usize) {
        output.push_str(&SIMPLE_INDENT.repeat(depth));
        match node {
            TreeNode::Dir { name, .. } => {
                output.push_str(name);
                output.push('/');
            }
            _ => output.push_str(node.name()),
        }
        output.push('\n');

        for child in node.children() {
            Self::format_simple(child, output, depth + 1);
        }
    }
}
