//! Restricting the node list to one sub-tree.

use crate::{Node, NodeStore};

/// Returns the nodes at or below `id`, in store order.
///
/// With no `id`, or an empty one, every node is returned. An `id` that is not
/// in the store yields an empty list.
///
/// # Panics
///
/// Panics if a parent reference in the store does not resolve.
pub fn filter_descendants<'a>(store: &'a NodeStore, id: Option<&str>) -> Vec<&'a Node> {
    let Some(id) = id.filter(|id| !id.is_empty()) else {
        return store.nodes().iter().collect();
    };
    if !store.contains(id) {
        return Vec::new();
    }
    store
        .nodes()
        .iter()
        .filter(|node| store.is_within(&node.id, id))
        .collect()
}
