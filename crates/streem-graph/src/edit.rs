//! Pure edit operations.
//!
//! Each operation reads a [`NodeStore`] snapshot and returns the next node
//! list. The store itself is never modified; the host swaps snapshots.

use std::collections::HashSet;

use tracing::debug;

use crate::{GraphError, Node, NodeStore};

/// Appends a new node below `parent` (or at root level).
pub fn new_node(
    store: &NodeStore,
    id: impl Into<String>,
    created: i64,
    content: &str,
    parent: Option<&str>,
) -> Result<Vec<Node>, GraphError> {
    if content.is_empty() {
        return Err(GraphError::EmptyContent);
    }
    if let Some(parent) = parent {
        require(store, parent)?;
    }
    let mut nodes = store.nodes().to_vec();
    nodes.push(Node {
        id: id.into(),
        created,
        content: Some(content.to_string()),
        parent: parent.map(str::to_string),
        deleted: false,
    });
    Ok(nodes)
}

/// Moves the selection under the previous sibling of its first node.
///
/// Returns the list unchanged when the first node has no previous sibling.
pub fn indent(store: &NodeStore, selection: &[&str]) -> Result<Vec<Node>, GraphError> {
    let first = first_selected(store, selection)?;
    let Some(prev) = store.find_prev(first) else {
        return Ok(store.nodes().to_vec());
    };
    let target = Some(prev.id.clone());
    debug!(count = selection.len(), parent = %prev.id, "indenting selection");
    Ok(map_selected(store, selection, |node| node.parent = target.clone()))
}

/// Moves the selection up one level, next to the parent of its first node.
///
/// Returns the list unchanged when the first node is already root-level.
pub fn outdent(store: &NodeStore, selection: &[&str]) -> Result<Vec<Node>, GraphError> {
    let first = first_selected(store, selection)?;
    let Some(parent) = store.find_parent(first) else {
        return Ok(store.nodes().to_vec());
    };
    let target = parent.parent.clone();
    debug!(count = selection.len(), "outdenting selection");
    Ok(map_selected(store, selection, |node| node.parent = target.clone()))
}

/// Tombstones every selected node.
pub fn delete(store: &NodeStore, selection: &[&str]) -> Result<Vec<Node>, GraphError> {
    first_selected(store, selection)?;
    for id in selection {
        require(store, id)?;
    }
    Ok(map_selected(store, selection, |node| node.deleted = true))
}

/// Returns the first selected id after checking it exists.
fn first_selected<'a>(store: &NodeStore, selection: &[&'a str]) -> Result<&'a str, GraphError> {
    let first = *selection.first().ok_or(GraphError::EmptySelection)?;
    require(store, first)?;
    Ok(first)
}

/// Fails with [`GraphError::NodeNotFound`] unless `id` is in the store.
fn require(store: &NodeStore, id: &str) -> Result<(), GraphError> {
    if store.contains(id) {
        Ok(())
    } else {
        Err(GraphError::NodeNotFound { id: id.to_string() })
    }
}

/// Copies the store's nodes, applying `edit` to the selected ones.
fn map_selected(
    store: &NodeStore,
    selection: &[&str],
    mut edit: impl FnMut(&mut Node),
) -> Vec<Node> {
    let selected: HashSet<&str> = selection.iter().copied().collect();
    store
        .nodes()
        .iter()
        .map(|node| {
            let mut node = node.clone();
            if selected.contains(node.id.as_str()) {
                edit(&mut node);
            }
            node
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> NodeStore {
        NodeStore::new(vec![
            Node::new("a", "first"),
            Node::new("b", "second"),
            Node::new("c", "child").with_parent("b"),
        ])
    }

    fn parent_of<'a>(nodes: &'a [Node], id: &str) -> Option<&'a str> {
        nodes.iter().find(|n| n.id == id).and_then(Node::parent_id)
    }

    #[test]
    fn new_node_appends() {
        let nodes = new_node(&store(), "d", 7, "hello", Some("a")).unwrap();
        let last = nodes.last().unwrap();
        assert_eq!(last.id, "d");
        assert_eq!(last.created, 7);
        assert_eq!(last.parent_id(), Some("a"));
        assert_eq!(nodes.len(), 4);
    }

    #[test]
    fn new_node_rejects_empty_content() {
        assert_eq!(
            new_node(&store(), "d", 0, "", None),
            Err(GraphError::EmptyContent)
        );
    }

    #[test]
    fn new_node_requires_existing_parent() {
        assert_eq!(
            new_node(&store(), "d", 0, "x", Some("zz")),
            Err(GraphError::NodeNotFound { id: "zz".into() })
        );
    }

    #[test]
    fn indent_moves_under_previous_sibling() {
        let nodes = indent(&store(), &["b"]).unwrap();
        assert_eq!(parent_of(&nodes, "b"), Some("a"));
        // Descendants follow implicitly.
        assert_eq!(parent_of(&nodes, "c"), Some("b"));
    }

    #[test]
    fn indent_without_previous_sibling_is_noop() {
        let s = store();
        assert_eq!(indent(&s, &["a"]).unwrap(), s.nodes().to_vec());
        assert_eq!(indent(&s, &["c"]).unwrap(), s.nodes().to_vec());
    }

    #[test]
    fn indent_moves_whole_selection() {
        let s = NodeStore::new(vec![
            Node::new("a", ""),
            Node::new("b", ""),
            Node::new("c", ""),
        ]);
        let nodes = indent(&s, &["b", "c"]).unwrap();
        assert_eq!(parent_of(&nodes, "b"), Some("a"));
        assert_eq!(parent_of(&nodes, "c"), Some("a"));
    }

    #[test]
    fn outdent_moves_to_grandparent() {
        let nodes = outdent(&store(), &["c"]).unwrap();
        assert_eq!(parent_of(&nodes, "c"), None);

        let deep = NodeStore::new(vec![
            Node::new("a", ""),
            Node::new("b", "").with_parent("a"),
            Node::new("c", "").with_parent("b"),
        ]);
        let nodes = outdent(&deep, &["c"]).unwrap();
        assert_eq!(parent_of(&nodes, "c"), Some("a"));
    }

    #[test]
    fn outdent_root_is_noop() {
        let s = store();
        assert_eq!(outdent(&s, &["a"]).unwrap(), s.nodes().to_vec());
    }

    #[test]
    fn delete_tombstones() {
        let nodes = delete(&store(), &["a", "c"]).unwrap();
        let deleted: Vec<_> = nodes
            .iter()
            .filter(|n| n.deleted)
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(deleted, vec!["a", "c"]);
        assert_eq!(nodes.len(), 3);
    }

    #[test]
    fn empty_selection_fails() {
        assert_eq!(indent(&store(), &[]), Err(GraphError::EmptySelection));
        assert_eq!(delete(&store(), &[]), Err(GraphError::EmptySelection));
    }

    #[test]
    fn unknown_selection_fails() {
        assert_eq!(
            outdent(&store(), &["zz"]),
            Err(GraphError::NodeNotFound { id: "zz".into() })
        );
        assert_eq!(
            delete(&store(), &["a", "zz"]),
            Err(GraphError::NodeNotFound { id: "zz".into() })
        );
    }
}
