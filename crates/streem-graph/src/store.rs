//! The authoritative node list and lookups over it.
//!
//! [`NodeStore`] wraps an ordered snapshot of nodes with an id index and a
//! parent to children index. Store order is insertion order and is meaningful:
//! it decides sibling order and which sibling is "previous".

use std::collections::{HashMap, HashSet};

use crate::{GraphError, Node, index::ChildIndex, path::Ancestry};

/// An immutable snapshot of the note list.
#[derive(Debug, Clone, Default)]
pub struct NodeStore {
    /// Nodes in insertion order.
    nodes: Vec<Node>,
    /// Position of the first node with each id.
    by_id: HashMap<String, usize>,
    /// Children grouped by parent id.
    children: ChildIndex,
}

impl NodeStore {
    /// Builds a store from nodes in insertion order.
    pub fn new(nodes: Vec<Node>) -> Self {
        let mut by_id = HashMap::with_capacity(nodes.len());
        for (position, node) in nodes.iter().enumerate() {
            by_id.entry(node.id.clone()).or_insert(position);
        }
        let children = ChildIndex::new(&nodes);
        Self {
            nodes,
            by_id,
            children,
        }
    }

    /// Returns all nodes in store order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the store holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns true if a node with `id` exists.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Looks up a node by id.
    pub fn find_node(&self, id: &str) -> Option<&Node> {
        self.position(id).map(|p| &self.nodes[p])
    }

    /// Returns the store position of a node.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Walks from `id` up to its root, yielding `id` first.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not in the store. Iteration panics if a parent on
    /// the way up does not resolve.
    pub fn ancestry(&self, id: &str) -> Ancestry<'_> {
        Ancestry::new(self, id)
    }

    /// Returns the path from the root down to `id`, inclusive.
    ///
    /// An empty id yields an empty path.
    ///
    /// # Panics
    ///
    /// Panics if `id` or any parent on the way up does not resolve.
    pub fn find_path(&self, id: &str) -> Vec<&Node> {
        if id.is_empty() {
            return Vec::new();
        }
        let mut path: Vec<&Node> = self.ancestry(id).collect();
        path.reverse();
        path
    }

    /// Returns the strict ancestors of `id`, root first.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`find_path`](Self::find_path).
    pub fn find_ancestors(&self, id: &str) -> Vec<&Node> {
        let mut path = self.find_path(id);
        path.pop();
        path
    }

    /// Returns the immediate parent of `id`.
    ///
    /// `None` when `id` is unknown, root-level, or its parent is missing.
    pub fn find_parent(&self, id: &str) -> Option<&Node> {
        let parent = self.find_node(id)?.parent_id()?;
        self.find_node(parent)
    }

    /// Returns the nearest node before `id` in store order that shares its
    /// parent: the previous sibling.
    pub fn find_prev(&self, id: &str) -> Option<&Node> {
        let position = self.position(id)?;
        let siblings = self.children.children(self.nodes[position].parent_id());
        let at = siblings.iter().position(|&p| p == position)?;
        at.checked_sub(1).map(|prev| &self.nodes[siblings[prev]])
    }

    /// Returns the children of `id` (root-level nodes for `None`) in store order.
    pub fn get_children(&self, id: Option<&str>) -> Vec<&Node> {
        self.children
            .children(id)
            .iter()
            .map(|&p| &self.nodes[p])
            .collect()
    }

    /// Returns true if `ancestor` is on the path from the root to `id`,
    /// counting `id` itself.
    ///
    /// # Panics
    ///
    /// Panics if a parent on the way up does not resolve.
    pub fn is_within(&self, id: &str, ancestor: &str) -> bool {
        self.ancestry(id).any(|node| node.id == ancestor)
    }

    /// Verifies the referential integrity the derived views rely on.
    ///
    /// Checks, in store order, for duplicate ids, parents that do not resolve,
    /// and parent chains that loop.
    pub fn check_integrity(&self) -> Result<(), GraphError> {
        let mut seen = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(GraphError::DuplicateId {
                    id: node.id.clone(),
                });
            }
            if let Some(parent) = &node.parent
                && !self.contains(parent)
            {
                return Err(GraphError::DanglingParent {
                    id: node.id.clone(),
                    parent: parent.clone(),
                });
            }
        }

        // Every chain longer than the store must revisit a node.
        for node in &self.nodes {
            let mut current = node.parent_id();
            let mut steps = 0;
            while let Some(id) = current {
                steps += 1;
                if steps > self.nodes.len() || id == node.id {
                    return Err(GraphError::Cycle {
                        id: node.id.clone(),
                    });
                }
                current = self.find_node(id).and_then(Node::parent_id);
            }
        }
        Ok(())
    }
}

impl From<Vec<Node>> for NodeStore {
    fn from(nodes: Vec<Node>) -> Self {
        Self::new(nodes)
    }
}
