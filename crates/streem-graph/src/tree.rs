//! Nested trees built from a flat node slice.

use serde::Serialize;

use crate::{Node, index::ChildIndex};

/// A node together with its nested children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    /// The node record.
    #[serde(flatten)]
    pub node: Node,
    /// Length of the longest chain of children below this node; 0 for leaves.
    pub height: usize,
    /// Children in slice order.
    pub children: Vec<Self>,
}

/// A forest: the children of a (possibly virtual) parent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tree {
    /// 1 + the tallest child's height, or 0 with no children.
    pub height: usize,
    /// Top-level nodes of the forest.
    pub children: Vec<TreeNode>,
}

impl Tree {
    /// Returns the number of nodes in the forest.
    pub fn node_count(&self) -> usize {
        self.children.iter().map(TreeNode::node_count).sum()
    }

    /// Iterates all tree nodes depth-first, parents before children.
    pub fn iter_preorder(&self) -> impl Iterator<Item = &TreeNode> {
        self.children.iter().flat_map(TreeNode::iter_preorder)
    }
}

impl TreeNode {
    /// Returns the number of nodes in this subtree, including self.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Iterates this subtree depth-first, parents before children.
    pub fn iter_preorder(&self) -> PreorderIter<'_> {
        PreorderIter { stack: vec![self] }
    }
}

/// Iterator for pre-order traversal of tree nodes.
pub struct PreorderIter<'a> {
    /// Stack of nodes to visit (rightmost children pushed first).
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for PreorderIter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Builds the tree below `parent` from `nodes`.
///
/// With `parent = None` the result is the whole forest, its children being the
/// root-level nodes. Siblings keep the order they have in `nodes`. A parent id
/// that matches nothing yields an empty tree.
pub fn build_tree(nodes: &[Node], parent: Option<&str>) -> Tree {
    let index = ChildIndex::new(nodes);
    let (height, children) = subtree(nodes, &index, parent);
    Tree { height, children }
}

/// Recursively assembles the children of `parent` and their height.
fn subtree(nodes: &[Node], index: &ChildIndex, parent: Option<&str>) -> (usize, Vec<TreeNode>) {
    let mut height = 0;
    let mut children = Vec::new();
    for &position in index.children(parent) {
        let node = &nodes[position];
        let (child_height, grandchildren) = subtree(nodes, index, Some(&node.id));
        height = height.max(child_height + 1);
        children.push(TreeNode {
            node: node.clone(),
            height: child_height,
            children: grandchildren,
        });
    }
    (height, children)
}
