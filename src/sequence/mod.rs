//! Sequence helpers module.
//!
//! Provides the identifier capability trait, a minimal concrete document
//! record, and the projection/membership operations over sequences of
//! identified documents.

pub mod ids;
pub mod model;

// Re-exports for convenience
pub use ids::{collect_ids, collect_ids_from_iter, contains_id, contains_id_in_iter, IdSeqExt};
pub use model::{Document, HasId};
