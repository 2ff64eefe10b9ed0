//! Data models for document sequences.
//!
//! [`HasId`] is the only contract the sequence helpers depend on.
//! [`Document`] is a minimal owned record implementing it, so the crate is
//! usable without defining your own element type.

use serde::{Deserialize, Serialize};

// =============================================================================
// ID CAPABILITY
// =============================================================================

/// Capability trait for values that carry a string identifier.
///
/// Identifiers are opaque to this crate: they are compared byte-for-byte
/// and never parsed, generated, or normalized.
pub trait HasId {
    /// Returns the identifier of this value.
    fn id(&self) -> &str;
}

impl<D: HasId + ?Sized> HasId for &D {
    fn id(&self) -> &str {
        (**self).id()
    }
}

impl<D: HasId + ?Sized> HasId for Box<D> {
    fn id(&self) -> &str {
        (**self).id()
    }
}

// =============================================================================
// DOCUMENT
// =============================================================================

/// A minimal owned document record.
///
/// Callers with their own document types only need to implement [`HasId`];
/// this struct is the out-of-the-box element type used by the demos and
/// benchmarks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Unique identifier (caller-supplied, matched exactly).
    pub id: String,

    /// Display title.
    pub title: String,

    /// Raw document body.
    pub body: String,
}

impl Document {
    /// Creates a new Document with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            body: String::new(),
        }
    }

    /// Builder: Set title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builder: Set body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Converts to a JSON-serializable representation.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "title": self.title,
            "body": self.body,
        })
    }
}

impl HasId for Document {
    fn id(&self) -> &str {
        &self.id
    }
}

// =============================================================================
// TESTS
// =============================================================================
