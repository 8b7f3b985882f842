//! Error types for the note graph.

use thiserror::Error;

/// Errors raised by integrity checks and edit operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// No node with the given id exists in the store.
    #[error("node not found: {id}")]
    NodeNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// Two nodes share the same id.
    #[error("duplicate node id: {id}")]
    DuplicateId {
        /// The repeated id.
        id: String,
    },

    /// A node references a parent that is not in the store.
    #[error("node {id} references missing parent {parent}")]
    DanglingParent {
        /// The node holding the reference.
        id: String,
        /// The parent id that does not resolve.
        parent: String,
    },

    /// Following parent links from a node leads back to it.
    #[error("parent links form a cycle through {id}")]
    Cycle {
        /// A node on the cycle.
        id: String,
    },

    /// An edit was requested with no nodes selected.
    #[error("no nodes selected")]
    EmptySelection,

    /// A new node was requested without any content.
    #[error("node content is empty")]
    EmptyContent,
}
