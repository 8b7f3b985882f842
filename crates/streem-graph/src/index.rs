//! Parent to children adjacency over a node slice.

use std::collections::HashMap;

use crate::Node;

/// Positions of each node's children, grouped by parent id.
///
/// Sibling order is the order of the indexed slice.
#[derive(Debug, Clone, Default)]
pub struct ChildIndex {
    /// Positions of root-level nodes.
    roots: Vec<usize>,
    /// Positions of child nodes keyed by parent id.
    by_parent: HashMap<String, Vec<usize>>,
}

impl ChildIndex {
    /// Indexes the given nodes.
    pub fn new(nodes: &[Node]) -> Self {
        let mut index = Self::default();
        for (position, node) in nodes.iter().enumerate() {
            match &node.parent {
                Some(parent) => index
                    .by_parent
                    .entry(parent.clone())
                    .or_default()
                    .push(position),
                None => index.roots.push(position),
            }
        }
        index
    }

    /// Returns the positions of the children of `parent`, or of root-level
    /// nodes when `parent` is `None`.
    pub fn children(&self, parent: Option<&str>) -> &[usize] {
        match parent {
            Some(id) => self.by_parent.get(id).map_or(&[], Vec::as_slice),
            None => &self.roots,
        }
    }
}
