//! DocSeq - allocation-conscious helpers over sequences of identified documents.
//!
//! This crate provides ID projection and membership probes for any sequence
//! whose elements expose a string identifier:
//!
//! - **One contract**: elements implement [`HasId`], a single `id()` accessor
//! - **Capability-tiered traversal**: slices get a pre-sized, length-aware
//!   path; forward-only iterators get a single-pass fallback sized from
//!   their `size_hint`
//! - **Absence is normal-path**: an absent sequence projects to an empty
//!   list and never contains anything, so there is no error surface
//!
//! # Example
//!
//! ```rust
//! use docseq::{collect_ids, Document, IdSeqExt};
//!
//! let docs = vec![
//!     Document::new("doc-1").with_title("First draft"),
//!     Document::new("doc-2").with_title("Second draft"),
//! ];
//!
//! // Project the sequence into its identifiers, order preserved
//! assert_eq!(docs.collect_ids(), vec!["doc-1", "doc-2"]);
//!
//! // Membership stops at the first match and compares exactly
//! assert!(docs.contains_id("doc-2"));
//! assert!(!docs.contains_id("DOC-2"));
//!
//! // Absent sequences are normal-path, not errors
//! assert!(collect_ids::<Document>(None).is_empty());
//! ```

// Sequence module
pub mod sequence;

// Re-exports for convenience
pub use sequence::{
    collect_ids, collect_ids_from_iter, contains_id, contains_id_in_iter, Document, HasId,
    IdSeqExt,
};
