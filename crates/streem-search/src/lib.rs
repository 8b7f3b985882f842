//! Stemmed multi-word search for streem notes.
//!
//! The [`Searcher`] stems a query, finds which nodes contain each query word in
//! any inflected form, and buckets nodes by the combination of query words they
//! matched. Each surviving bucket comes back as a [`SearchGroup`] whose nodes
//! carry `**emphasis**` around matched words and are completed with their
//! ancestors, ready for [`streem_graph::build_tree`].
//!
//! # Example
//!
//! ```
//! use streem_graph::{Node, NodeStore};
//! use streem_search::search_nodes;
//!
//! let store = NodeStore::new(vec![
//!     Node::new("a", "gardening notes"),
//!     Node::new("b", "new garden beds").with_parent("a"),
//! ]);
//! let results = search_nodes(&store, "garden");
//! assert_eq!(results.get("garden").unwrap().matches, 2);
//! ```

#![warn(missing_docs)]

mod analyzer;
mod error;
mod ranges;
mod search;

pub use analyzer::{MIN_STEM_LEN, Word, WordStemmer, parse_language, significant_stems};
pub use error::SearchError;
pub use ranges::{EMPHASIS, emphasize, merge_ranges};
pub use search::{
    GroupTree, MIN_GROUP_SIZE, SearchGroup, SearchResults, Searcher, search_nodes, word_subsets,
};
pub use tantivy::tokenizer::Language;
