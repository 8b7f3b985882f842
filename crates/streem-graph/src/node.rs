//! The flat node record.
//!
//! Notes are stored as a flat list of [`Node`]s linked to each other through
//! optional `parent` ids. Everything hierarchical is derived from that list.

use serde::{Deserialize, Serialize};

/// A single note.
///
/// Identity is the `id`. Ids are time-ordered, so sorting them lexically
/// sorts nodes by creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique, immutable identifier.
    pub id: String,

    /// Creation time in epoch milliseconds.
    #[serde(default)]
    pub created: i64,

    /// Free text. May be absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Id of the parent node, or `None` for root-level nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// Tombstone. Deleted nodes stay in the list and are not special-cased
    /// by any derived view.
    #[serde(default, skip_serializing_if = "is_false")]
    pub deleted: bool,
}

impl Node {
    /// Creates a root-level node with the given id and content.
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created: 0,
            content: Some(content.into()),
            parent: None,
            deleted: false,
        }
    }

    /// Sets the parent id.
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Sets the creation timestamp.
    pub fn with_created(mut self, created: i64) -> Self {
        self.created = created;
        self
    }

    /// Returns the content, or an empty string when absent.
    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }

    /// Returns the parent id as a borrowed string.
    pub fn parent_id(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Returns true if this node has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Serde helper for skipping `false` flags.
#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}
