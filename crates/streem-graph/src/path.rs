//! Upward traversal through parent links.

use crate::{Node, NodeStore};

/// Iterator from a node up to its root, yielding the node itself first.
///
/// # Panics
///
/// Iteration panics when a parent id does not resolve in the store. Callers
/// must hand over a store with intact parent references; see
/// [`NodeStore::check_integrity`].
pub struct Ancestry<'a> {
    /// The store being walked.
    store: &'a NodeStore,
    /// Starting node, yielded first.
    start: Option<&'a Node>,
    /// Next parent id to resolve.
    next: Option<&'a str>,
}

impl<'a> Ancestry<'a> {
    /// Starts a walk at `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not in the store.
    pub(crate) fn new(store: &'a NodeStore, id: &str) -> Self {
        Self {
            store,
            start: Some(resolve(store, id)),
            next: None,
        }
    }
}

impl<'a> Iterator for Ancestry<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = match self.start.take() {
            Some(node) => node,
            None => resolve(self.store, self.next.take()?),
        };
        self.next = node.parent_id();
        Some(node)
    }
}

/// Looks up `id`, panicking when it is missing.
fn resolve<'a>(store: &'a NodeStore, id: &str) -> &'a Node {
    let Some(node) = store.find_node(id) else {
        panic!("parent must resolve: no node with id {id}");
    };
    node
}
