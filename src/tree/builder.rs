//! Build a forest of `TreeNode`s from flat entries
//!
//! Entries are processed once in path order. Each processed entry is indexed
//! by its path; an entry whose parent path is indexed and is a directory is
//! attached to it, anything else becomes a top-level node. Ancestors that
//! were filtered or paged out are not synthesized, so their descendants
//! surface at the top level.

use std::collections::HashMap;

use crate::types::Entry;

use super::node::TreeNode;

struct Slot<'a> {
    entry: &'a Entry,
    children: Vec<usize>,
}

/// Build top-level nodes from entries in any order.
pub fn build_tree<'a, I>(entries: I) -> Vec<TreeNode>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut sorted: Vec<&Entry> = entries.into_iter().collect();
    sorted.sort_by(|a, b| a.path.cmp(&b.path));

    let mut slots: Vec<Slot<'_>> = Vec::with_capacity(sorted.len());
    let mut by_path: HashMap<&str, usize> = HashMap::with_capacity(sorted.len());
    let mut roots = Vec::new();

    for entry in sorted {
        let index = slots.len();
        let parent = entry
            .parent()
            .and_then(|p| by_path.get(p).copied())
            .filter(|&i| slots[i].entry.is_dir());

        slots.push(Slot {
            entry,
            children: Vec::new(),
        });
        match parent {
            Some(p) => slots[p].children.push(index),
            None => roots.push(index),
        }
        by_path.insert(entry.path.as_str(), index);
    }

    roots
        .into_iter()
        .map(|index| materialize(&slots, index))
        .collect()
}

fn materialize(slots: &[Slot<'_>], index: usize) -> TreeNode {
    let slot = &slots[index];
    let mut node = TreeNode::from_entry(slot.entry);
    if let TreeNode::Dir { children, .. } = &mut node {
        children.extend(slot.children.iter().map(|&child| materialize(slots, child)));
    }
    node
}
