//! Tree node type

use crate::types::{Entry, EntryKind};

/// One node of a reconstructed tree. Directories own their children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    File {
        name: String,
        path: String,
        identity: String,
        locator: String,
        size: Option<u64>,
    },
    Dir {
        name: String,
        path: String,
        identity: String,
        locator: String,
        children: Vec<TreeNode>,
    },
    Submodule {
        name: String,
        path: String,
        identity: String,
        locator: String,
    },
}

impl TreeNode {
    /// Leaf or empty directory for an entry; children are attached by the builder.
    pub fn from_entry(entry: &Entry) -> Self {
        let name = entry.name().to_string();
        let path = entry.path.clone();
        let identity = entry.identity.clone();
        let locator = entry.locator.clone();
        match entry.kind {
            EntryKind::File => TreeNode::File {
                name,
                path,
                identity,
                locator,
                size: entry.size,
            },
            EntryKind::Directory => TreeNode::Dir {
                name,
                path,
                identity,
                locator,
                children: Vec::new(),
            },
            EntryKind::Submodule => TreeNode::Submodule {
                name,
                path,
                identity,
                locator,
            },
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Dir { name, .. } => name,
            TreeNode::Submodule { name, .. } => name,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            TreeNode::File { path, .. } => path,
            TreeNode::Dir { path, .. } => path,
            TreeNode::Submodule { path, .. } => path,
        }
    }

    pub fn identity(&self) -> &str {
        match self {
            TreeNode::File { identity, .. } => identity,
            TreeNode::Dir { identity, .. } => identity,
            TreeNode::Submodule { identity, .. } => identity,
        }
    }

    pub fn locator(&self) -> &str {
        match self {
            TreeNode::File { locator, .. } => locator,
            TreeNode::Dir { locator, .. } => locator,
            TreeNode::Submodule { locator, .. } => locator,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            TreeNode::File { .. } => EntryKind::File,
            TreeNode::Dir { .. } => EntryKind::Directory,
            TreeNode::Submodule { .. } => EntryKind::Submodule,
        }
    }

    pub fn size(&self) -> Option<u64> {
        match self {
            TreeNode::File { size, .. } => *size,
            _ => None,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    /// Children of a directory; empty for leaves.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::Dir { children, .. } => children,
            _ => &[],
        }
    }
}

/// Number of nodes in a forest, counted recursively.
pub fn count_nodes(nodes: &[TreeNode]) -> usize {
    nodes
        .iter()
        .map(|node| 1 + count_nodes(node.children()))
        .sum()
}

/// `(directories, files)` in a forest. Submodules count as files.
pub fn count_kinds(nodes: &[TreeNode]) -> (usize, usize) {
    nodes.iter().fold((0, 0), |(dirs, files), node| {
        let (d, f) = count_kinds(node.children());
        if node.is_dir() {
            (dirs + d + 1, files + f)
        } else {
            (dirs + d, files + f + 1)
        }
    })
}
