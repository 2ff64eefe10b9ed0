//! Capability-tier walkthrough for the document ID sequence helpers.
//!
//! Run with: cargo run --release --example id_scan

use docseq::{collect_ids, collect_ids_from_iter, contains_id, Document, IdSeqExt};

fn make_corpus(len: usize) -> Vec<Document> {
    (0..len)
        .map(|i| {
            Document::new(format!("doc-{}", i))
                .with_title(format!("Document {}", i))
                .with_body("Walkthrough document body")
        })
        .collect()
}

fn main() {
    println!("========================================");
    println!(" DocSeq ID Scan Walkthrough");
    println!("========================================\n");

    scan_slice();
    scan_iterator();
    scan_absent();
}

// -----------------------------------------------------------------------------
// 1. Slice tier: known length, pre-sized projection, early-exit probes
// -----------------------------------------------------------------------------
fn scan_slice() {
    println!("Tier: slice (indexed access, known count)");

    let corpus = make_corpus(5);
    let ids = corpus.collect_ids();
    println!("   Projected IDs:    {:?}", ids);
    println!("   Contains doc-3:   {}", corpus.contains_id("doc-3"));
    println!("   Contains DOC-3:   {}", corpus.contains_id("DOC-3"));
    println!("   Index of doc-4:   {:?}", corpus.index_of_id("doc-4"));

    if let Some(doc) = corpus.find_by_id("doc-2") {
        let json = serde_json::to_string_pretty(&doc.to_json_value()).unwrap();
        println!("   Sample (doc-2):\n{}", json);
    }
    println!();
}

// -----------------------------------------------------------------------------
// 2. Iterator tier: forward-only sequence, sized from its hint
// -----------------------------------------------------------------------------
fn scan_iterator() {
    println!("Tier: iterator (forward-only)");

    let corpus = make_corpus(5);
    let drafts = corpus
        .iter()
        .filter(|doc| doc.id != "doc-0");

    let ids = collect_ids_from_iter(drafts);
    println!("   Projected IDs:    {:?}", ids);
    println!();
}

// -----------------------------------------------------------------------------
// 3. Absent input: empty projection, negative membership, no errors
// -----------------------------------------------------------------------------
fn scan_absent() {
    println!("Tier: absent input");

    let ids = collect_ids::<Document>(None);
    println!("   Projected IDs:    {:?}", ids);
    println!("   Contains doc-0:   {}", contains_id::<Document>(None, "doc-0"));
}
