//! Bounded, flattened views over the tail of a node list.
//!
//! A long thread is rendered from its most recent end. [`build_streem`] takes
//! the last `limit` entries of a filtered list, caps them to
//! [`WINDOW`]` + 1`, and merges the root-to-node path of each entry into a
//! shared tree. Consecutive entries that share a path prefix fold into one
//! ancestor branch. When an ancestor shows up again after a gap it opens a new
//! branch tagged with the next `iteration`, so a renderer can tell a repeated
//! header from a continuous one.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::{Node, NodeStore};

/// Maximum number of leaf entries merged into one view, minus one.
pub const WINDOW: usize = 200;

/// A node in a windowed view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreemNode {
    /// The node record.
    #[serde(flatten)]
    pub node: Node,
    /// Zero-based count of earlier, non-adjacent branches for the same id.
    pub iteration: usize,
    /// Length of the longest chain of children below this node; 0 for leaves.
    pub height: usize,
    /// Children in merge order.
    pub children: Vec<Self>,
}

/// A windowed view: the merged forest of the selected entries' paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Streem {
    /// 1 + the tallest child's height, or 0 when empty.
    pub height: usize,
    /// Top-level branches.
    pub children: Vec<StreemNode>,
}

impl Streem {
    /// Returns true if the view holds no branches.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// A branch during assembly, before heights are known.
struct Branch<'a> {
    /// The node this branch renders.
    node: &'a Node,
    /// Occurrence counter for the node's id.
    iteration: usize,
    /// Branches merged below this one.
    children: Vec<Self>,
}

/// Returns the index range of `filtered` a view with `limit` covers.
pub fn window_bounds(len: usize, limit: usize) -> (usize, usize) {
    let start = len.saturating_sub(limit);
    let end = len.min(start + WINDOW + 1);
    (start, end)
}

/// Builds the windowed view of `filtered`, resolving paths against `store`.
///
/// Only the last `limit` entries are considered, and of those at most
/// `WINDOW + 1` starting from the front of that tail. A `limit` of 0 yields an
/// empty view.
///
/// # Panics
///
/// Panics if an entry's path runs through a parent id missing from `store`.
pub fn build_streem(store: &NodeStore, filtered: &[&Node], limit: usize) -> Streem {
    let (start, end) = window_bounds(filtered.len(), limit);
    debug!(start, end, total = filtered.len(), "building windowed view");

    let mut used: HashMap<&str, usize> = HashMap::new();
    let mut roots: Vec<Branch<'_>> = Vec::new();

    for entry in &filtered[start..end] {
        let mut level = &mut roots;
        for part in store.find_path(&entry.id) {
            let continues = level.last().is_some_and(|b| b.node.id == part.id);
            if !continues {
                let iteration = *used
                    .entry(part.id.as_str())
                    .and_modify(|n| *n += 1)
                    .or_insert(0);
                level.push(Branch {
                    node: part,
                    iteration,
                    children: Vec::new(),
                });
            }
            let branch = level.last_mut().expect("branch exists at this level");
            level = &mut branch.children;
        }
    }

    let (height, children) = finish(roots);
    Streem { height, children }
}

/// Converts assembled branches into view nodes, computing heights bottom-up.
fn finish(branches: Vec<Branch<'_>>) -> (usize, Vec<StreemNode>) {
    let mut height = 0;
    let mut nodes = Vec::with_capacity(branches.len());
    for branch in branches {
        let (child_height, children) = finish(branch.children);
        height = height.max(child_height + 1);
        nodes.push(StreemNode {
            node: branch.node.clone(),
            iteration: branch.iteration,
            height: child_height,
            children,
        });
    }
    (height, nodes)
}

/// Tracks how much of a thread's tail is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPager {
    /// Current number of trailing entries requested.
    pub limit: usize,
    /// Amount `limit` changes by per page.
    pub step: usize,
}

impl WindowPager {
    /// Creates a pager with the given starting limit and step.
    pub fn new(limit: usize, step: usize) -> Self {
        Self { limit, step }
    }

    /// Returns true if entries before the current window are hidden.
    pub fn has_more(&self, len: usize) -> bool {
        self.limit < len
    }

    /// Returns true if the limit reaches past the fixed window.
    pub fn can_load_less(&self) -> bool {
        self.limit > WINDOW
    }

    /// Extends the limit by one step.
    pub fn load_more(&mut self) {
        self.limit += self.step;
    }

    /// Shrinks the limit by one step while it reaches past the window.
    pub fn load_less(&mut self) {
        if self.can_load_less() {
            self.limit = self.limit.saturating_sub(self.step);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(nodes: Vec<Node>, limit: usize) -> Streem {
        let store = NodeStore::new(nodes);
        let filtered: Vec<&Node> = store.nodes().iter().collect();
        build_streem(&store, &filtered, limit)
    }

    fn leaf_count(children: &[StreemNode]) -> usize {
        children
            .iter()
            .map(|c| {
                if c.children.is_empty() {
                    1
                } else {
                    leaf_count(&c.children)
                }
            })
            .sum()
    }

    #[test]
    fn zero_limit_is_empty() {
        let streem = view(vec![Node::new("a", "")], 0);
        assert!(streem.is_empty());
        assert_eq!(streem.height, 0);
    }

    #[test]
    fn short_list_is_taken_whole() {
        let streem = view(vec![Node::new("a", ""), Node::new("b", "")], 100);
        let ids: Vec<_> = streem.children.iter().map(|c| c.node.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn limit_trims_from_the_front() {
        let streem = view(
            vec![Node::new("a", ""), Node::new("b", ""), Node::new("c", "")],
            2,
        );
        let ids: Vec<_> = streem.children.iter().map(|c| c.node.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[test]
    fn window_caps_leaf_entries() {
        let nodes: Vec<Node> = (0..500).map(|i| Node::new(format!("n{i:03}"), "")).collect();
        let streem = view(nodes, 450);
        assert_eq!(streem.children.len(), WINDOW + 1);
        assert_eq!(streem.children[0].node.id, "n050");
    }

    #[test]
    fn bounds_match_window_rules() {
        assert_eq!(window_bounds(10, 0), (10, 10));
        assert_eq!(window_bounds(10, 100), (0, 10));
        assert_eq!(window_bounds(1000, 300), (700, 901));
        assert_eq!(window_bounds(1000, 100), (900, 1000));
    }

    #[test]
    fn adjacent_entries_share_ancestor() {
        let streem = view(
            vec![
                Node::new("a", ""),
                Node::new("b", "").with_parent("a"),
                Node::new("c", "").with_parent("a"),
            ],
            10,
        );
        assert_eq!(streem.children.len(), 1);
        let a = &streem.children[0];
        assert_eq!(a.node.id, "a");
        assert_eq!(a.iteration, 0);
        let ids: Vec<_> = a.children.iter().map(|c| c.node.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
        assert_eq!(a.height, 1);
        assert_eq!(streem.height, 2);
    }

    #[test]
    fn ancestor_after_gap_gets_next_iteration() {
        let streem = view(
            vec![
                Node::new("a", ""),
                Node::new("b", "").with_parent("a"),
                Node::new("x", ""),
                Node::new("c", "").with_parent("a"),
            ],
            10,
        );
        let top: Vec<_> = streem
            .children
            .iter()
            .map(|c| (c.node.id.as_str(), c.iteration))
            .collect();
        assert_eq!(top, vec![("a", 0), ("x", 0), ("a", 1)]);
        assert_eq!(streem.children[2].children[0].node.id, "c");
    }

    #[test]
    fn nested_repeat_counts_per_id() {
        let streem = view(
            vec![
                Node::new("r", ""),
                Node::new("p", "").with_parent("r"),
                Node::new("q", "").with_parent("r"),
                Node::new("p1", "").with_parent("p"),
            ],
            10,
        );
        // r stays continuous, p reopens below it after q.
        assert_eq!(streem.children.len(), 1);
        let r = &streem.children[0];
        let inner: Vec<_> = r
            .children
            .iter()
            .map(|c| (c.node.id.as_str(), c.iteration))
            .collect();
        assert_eq!(inner, vec![("p", 0), ("q", 0), ("p", 1)]);
        assert_eq!(r.children[2].children[0].node.id, "p1");
        assert_eq!(r.height, 2);
    }

    #[test]
    fn filtered_entries_resolve_against_full_store() {
        let store = NodeStore::new(vec![
            Node::new("a", ""),
            Node::new("b", "").with_parent("a"),
            Node::new("c", ""),
        ]);
        let filtered = vec![store.find_node("b").unwrap()];
        let streem = build_streem(&store, &filtered, 10);
        assert_eq!(streem.children[0].node.id, "a");
        assert_eq!(streem.children[0].children[0].node.id, "b");
        assert_eq!(leaf_count(&streem.children), 1);
    }

    #[test]
    fn pager_steps() {
        let mut pager = WindowPager::new(100, 100);
        assert!(pager.has_more(150));
        assert!(!pager.has_more(100));
        assert!(!pager.can_load_less());
        pager.load_less();
        assert_eq!(pager.limit, 100);
        pager.load_more();
        pager.load_more();
        assert_eq!(pager.limit, 300);
        pager.load_less();
        assert_eq!(pager.limit, 200);
    }
}
