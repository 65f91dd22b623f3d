//! Basic tests for restitch-core

use restitch_core::*;

#[test]
fn test_sliding_window_output_is_reassembled() {
    // Windows of 20 characters advancing by 12, as a character splitter
    // with chunk_overlap = 8 would emit them.
    let document = "The quick brown fox jumps over the lazy dog.";
    let windows: Vec<&str> = vec![
        &document[0..20],
        &document[12..32],
        &document[24..44],
    ];

    let pieces = reconcile(&windows);
    assert_eq!(merged_text(&pieces), document);

    // Two shared runs, one per adjacent pair.
    let overlap_count = pieces.iter().filter(|p| p.is_overlap()).count();
    assert_eq!(overlap_count, 2);
}

#[test]
fn test_unique_piece_per_segment() {
    let segments = ["hello world", "world peace", "unrelated"];
    let pieces = reconcile(&segments);

    let unique_count = pieces.iter().filter(|p| !p.is_overlap()).count();
    assert_eq!(unique_count, segments.len());
}

#[test]
fn test_overlap_descriptor_invariants() {
    let left = "sliding window text";
    let right = "window text continues";
    let result = overlap(left, right);

    assert!(left.ends_with(&result.text));
    assert!(right.starts_with(&result.text));
    assert_eq!(result.text.chars().count(), result.chars);
    assert_eq!(result.text, "window text");
    assert_eq!(result.chars, 11);
}

#[test]
fn test_scan_descriptor_count() {
    let segments = ["a", "b", "c", "d"];
    assert_eq!(scan(&segments).len(), 3);
}

#[test]
fn test_accepts_owned_and_borrowed_segments() {
    let owned: Vec<String> = vec!["hello world".into(), "world peace".into()];
    let borrowed: Vec<&str> = owned.iter().map(String::as_str).collect();

    assert_eq!(reconcile(&owned), reconcile(&borrowed));
}

#[test]
fn test_only_adjacent_pairs_are_compared() {
    // The first and third segments share "shared" but are never compared;
    // reconciliation only merges adjacent overlaps.
    let pieces = reconcile(&["shared start", "middle", "shared start"]);
    assert!(pieces.iter().all(|p| !p.is_overlap()));
    assert_eq!(pieces.len(), 3);
}
