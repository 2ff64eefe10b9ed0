//! ID projection and membership over document sequences.
//!
//! Two capability tiers share one functional contract (single forward pass,
//! order preservation, no re-enumeration):
//!
//! - [`IdSeqExt`] on slices: length is known, so projection pre-sizes its
//!   output and membership probes skip empty inputs outright
//! - the `*_iter` free functions: forward-only sequences, pre-sized from the
//!   iterator's `size_hint` lower bound
//!
//! Absent input is normal-path: [`collect_ids`] maps `None` to an empty
//! list and [`contains_id`] maps it to `false`.

use super::model::HasId;

// =============================================================================
// SLICE TIER (indexed access, known count)
// =============================================================================

/// Extension helpers over slices of identified documents.
///
/// Implemented for `[D]`, so the methods are available on `Vec<D>` and
/// arrays via deref. The input is only read; results are freshly allocated
/// and owned by the caller.
pub trait IdSeqExt {
    /// Element type of the sequence.
    type Doc: HasId;

    /// Projects the sequence into an owned list of its identifiers,
    /// preserving order and length exactly. The output is pre-sized to the
    /// slice length.
    fn collect_ids(&self) -> Vec<String>;

    /// Returns true if some element's identifier equals `id` exactly
    /// (case-sensitive). Stops at the first match; an empty sequence
    /// returns false without traversal.
    fn contains_id(&self, id: &str) -> bool;

    /// Returns the position of the first element whose identifier equals
    /// `id` exactly.
    fn index_of_id(&self, id: &str) -> Option<usize>;

    /// Returns a borrow of the first element whose identifier equals `id`
    /// exactly.
    fn find_by_id(&self, id: &str) -> Option<&Self::Doc>;
}

impl<D: HasId> IdSeqExt for [D] {
    type Doc = D;

    fn collect_ids(&self) -> Vec<String> {
        let mut ids = Vec::with_capacity(self.len());
        for doc in self {
            ids.push(doc.id().to_owned());
        }
        ids
    }

    fn contains_id(&self, id: &str) -> bool {
        self.index_of_id(id).is_some()
    }

    fn index_of_id(&self, id: &str) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.iter().position(|doc| doc.id() == id)
    }

    fn find_by_id(&self, id: &str) -> Option<&D> {
        self.index_of_id(id).map(|pos| &self[pos])
    }
}

// =============================================================================
// NULLABLE ENTRY POINTS
// =============================================================================

/// Projects an optional sequence into an owned list of its identifiers.
///
/// An absent sequence yields an empty list, never an error.
pub fn collect_ids<D: HasId>(docs: Option<&[D]>) -> Vec<String> {
    match docs {
        Some(docs) => docs.collect_ids(),
        None => Vec::new(),
    }
}

/// Tests an optional sequence for a document with the given identifier.
///
/// An absent sequence contains nothing and yields false.
pub fn contains_id<D: HasId>(docs: Option<&[D]>, id: &str) -> bool {
    match docs {
        Some(docs) => docs.contains_id(id),
        None => false,
    }
}

// =============================================================================
// ITERATOR TIER (forward-only sequences)
// =============================================================================

/// Projects a forward-only sequence into an owned list of its identifiers
/// in a single pass, preserving order.
///
/// The output is pre-sized to the iterator's `size_hint` lower bound; an
/// honest hint of zero degrades to ordinary growth. The sequence is never
/// re-enumerated to discover its length.
pub fn collect_ids_from_iter<I>(docs: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: HasId,
{
    let iter = docs.into_iter();
    let mut ids = Vec::with_capacity(iter.size_hint().0);
    for doc in iter {
        ids.push(doc.id().to_owned());
    }
    ids
}

/// Tests a forward-only sequence for a document with the given identifier.
///
/// Stops at the first match; each element is visited at most once and the
/// worst case is one full pass when no match exists.
pub fn contains_id_in_iter<I>(docs: I, id: &str) -> bool
where
    I: IntoIterator,
    I::Item: HasId,
{
    docs.into_iter().any(|doc| doc.id() == id)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::model::Document;

    fn corpus() -> Vec<Document> {
        vec![
            Document::new("a").with_title("Alpha"),
            Document::new("b").with_title("Beta"),
            Document::new("c").with_title("Gamma"),
        ]
    }

    /// Test double whose id access panics once armed.
    struct Fused {
        id: &'static str,
        armed: bool,
    }

    impl HasId for Fused {
        fn id(&self) -> &str {
            assert!(!self.armed, "id read past the first match");
            self.id
        }
    }

    #[test]
    fn test_collect_ids_length_and_order() {
        let docs = corpus();
        let ids = docs.collect_ids();

        assert_eq!(ids.len(), docs.len());
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_collect_ids_absent_input() {
        let ids = collect_ids::<Document>(None);
        assert!(ids.is_empty());
    }

    #[test]
    fn test_collect_ids_present_input() {
        let docs = corpus();
        assert_eq!(collect_ids(Some(docs.as_slice())), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_collect_ids_leaves_input_untouched() {
        let docs = corpus();
        let before = docs.clone();
        let _ = docs.collect_ids();
        assert_eq!(docs, before);
    }

    #[test]
    fn test_collect_ids_from_iter() {
        let docs = corpus();
        let ids = collect_ids_from_iter(docs.iter());
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_collect_ids_from_iter_lowered_hint() {
        let docs = corpus();
        // filter() lowers the size hint to zero; the growth path must
        // still produce a complete, ordered result
        let ids = collect_ids_from_iter(docs.iter().filter(|doc| doc.id() != "b"));
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_contains_id_exact_match() {
        let docs = corpus();
        assert!(docs.contains_id("b"));
        assert!(!docs.contains_id("z"));
    }

    #[test]
    fn test_contains_id_case_sensitive() {
        let docs = vec![Document::new("A")];
        assert!(docs.contains_id("A"));
        assert!(!docs.contains_id("a"));
    }

    #[test]
    fn test_contains_id_absent_and_empty() {
        let empty: Vec<Document> = Vec::new();
        assert!(!contains_id::<Document>(None, "a"));
        assert!(!contains_id(Some(empty.as_slice()), "a"));
        assert!(!contains_id_in_iter(empty.iter(), "a"));
    }

    #[test]
    fn test_contains_id_short_circuits_on_match() {
        let docs = vec![
            Fused {
                id: "a",
                armed: false,
            },
            Fused {
                id: "b",
                armed: false,
            },
            Fused {
                id: "boom",
                armed: true,
            },
        ];

        // The armed element sits past the match and must never be read
        assert!(docs.contains_id("b"));
        assert!(contains_id_in_iter(docs.iter(), "b"));
    }

    #[test]
    fn test_index_of_id_and_find_by_id() {
        let docs = corpus();

        assert_eq!(docs.index_of_id("c"), Some(2));
        assert_eq!(docs.index_of_id("z"), None);

        let doc = docs.find_by_id("b").unwrap();
        assert_eq!(doc.title, "Beta");
        assert!(docs.find_by_id("z").is_none());
    }

    #[test]
    fn test_repeated_reads_agree() {
        let docs = corpus();
        assert_eq!(docs.collect_ids(), docs.collect_ids());
        assert_eq!(docs.contains_id("a"), docs.contains_id("a"));
        assert_eq!(docs.index_of_id("c"), docs.index_of_id("c"));
    }
}
