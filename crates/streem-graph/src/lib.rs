//! The in-memory note graph behind streem.
//!
//! Notes live in a flat, ordered list of [`Node`]s linked through optional
//! parent ids. This crate derives everything hierarchical from that list:
//!
//! - path lookups on a [`NodeStore`] (`find_path`, `find_prev`, ...)
//! - full nested trees via [`build_tree`]
//! - sub-tree restriction via [`filter_descendants`]
//! - bounded windowed views of a thread's tail via [`build_streem`]
//! - pure edit operations in [`edit`]
//!
//! All derived structures are rebuilt from a snapshot on each call. Nothing
//! here performs I/O.
//!
//! # Example
//!
//! ```
//! use streem_graph::{Node, NodeStore, build_tree, filter_descendants};
//!
//! let store = NodeStore::new(vec![
//!     Node::new("1", "projects"),
//!     Node::new("2", "streem").with_parent("1"),
//!     Node::new("3", "groceries"),
//! ]);
//! let focused = filter_descendants(&store, Some("1"));
//! assert_eq!(focused.len(), 2);
//! assert_eq!(build_tree(store.nodes(), None).height, 2);
//! ```

#![warn(missing_docs)]

pub mod edit;
mod error;
mod filter;
mod index;
mod node;
mod path;
mod select;
mod store;
mod tree;
mod window;

pub use error::GraphError;
pub use filter::filter_descendants;
pub use node::Node;
pub use path::Ancestry;
pub use select::{next_in, previous_in, select_range};
pub use store::NodeStore;
pub use tree::{PreorderIter, Tree, TreeNode, build_tree};
pub use window::{Streem, StreemNode, WINDOW, WindowPager, build_streem, window_bounds};
