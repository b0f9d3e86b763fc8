/// Property-based tests for sliding-window and snapshot invariants
use ghostline_completion::{ContextWindowManager, DocumentSnapshot, Language, Position};
use proptest::prelude::*;

fn numbered_document(lines: usize) -> DocumentSnapshot {
    let text = (1..=lines)
        .map(|i| format!("line {i}"))
        .collect::<Vec<_>>()
        .join("\n");
    DocumentSnapshot::from_text(&text)
}

proptest! {
    #[test]
    fn prop_window_length_is_min_of_total_and_cap(
        total in 0usize..400,
        cap in 1usize..300,
    ) {
        let mut manager = ContextWindowManager::new(cap, 25);
        manager.recompute_window(&numbered_document(total));

        prop_assert_eq!(manager.window().len(), total.min(cap));
    }

    #[test]
    fn prop_window_is_document_tail_in_order(
        total in 1usize..400,
        cap in 1usize..300,
    ) {
        let mut manager = ContextWindowManager::new(cap, 25);
        manager.recompute_window(&numbered_document(total));

        let keep = total.min(cap);
        let first_kept = total - keep + 1;
        for (offset, line) in manager.window().iter().enumerate() {
            let expected = format!("line {}", first_kept + offset);
            prop_assert_eq!(line.as_str(), expected.as_str());
        }
    }

    #[test]
    fn prop_window_recompute_is_idempotent(
        total in 0usize..200,
        cap in 1usize..100,
    ) {
        let mut manager = ContextWindowManager::new(cap, 25);
        let document = numbered_document(total);
        manager.recompute_window(&document);
        let first = manager.window().to_vec();
        manager.recompute_window(&document);

        prop_assert_eq!(manager.window(), first.as_slice());
    }

    #[test]
    fn prop_snapshot_span_is_clipped(
        total in 0usize..300,
        cursor in 0usize..400,
        radius in 1usize..50,
    ) {
        let manager = ContextWindowManager::new(250, radius);
        let document = numbered_document(total);
        let snapshot = manager.recompute_snapshot(&document, cursor);

        let expected_end = (cursor + radius).min(total);
        let expected_start = cursor.saturating_sub(radius).min(expected_end);
        prop_assert_eq!(snapshot.start_line, expected_start);
        prop_assert_eq!(snapshot.end_line, expected_end);

        let line_count = if snapshot.text.is_empty() {
            0
        } else {
            snapshot.text.lines().count()
        };
        prop_assert_eq!(line_count, expected_end - expected_start);
    }

    #[test]
    fn prop_context_reads_never_mutate_log(
        total in 0usize..100,
        reads in 1usize..5,
    ) {
        let mut manager = ContextWindowManager::new(50, 10);
        manager.on_document_changed(numbered_document(total));
        manager.track_accepted("kept".to_string(), Language::Rust);

        for _ in 0..reads {
            let bundle = manager.get_context();
            prop_assert_eq!(bundle.accepted_suggestions.len(), 1);
        }
        prop_assert_eq!(manager.accepted_log().len(), 1);
    }
}

#[test]
fn test_window_matches_documented_example() {
    // A 300-line document with a 250-line cap keeps lines 51-300.
    let mut manager = ContextWindowManager::new(250, 25);
    manager.recompute_window(&numbered_document(300));

    assert_eq!(manager.window().len(), 250);
    assert_eq!(manager.window().first().map(String::as_str), Some("line 51"));
    assert_eq!(manager.window().last().map(String::as_str), Some("line 300"));
}

#[test]
fn test_cursor_far_past_document_yields_empty_snapshot() {
    let manager = ContextWindowManager::new(250, 25);
    let snapshot = manager.recompute_snapshot(&numbered_document(5), 10_000);

    assert_eq!(snapshot.text, "");
    assert_eq!(snapshot.start_line, snapshot.end_line);
}

#[test]
fn test_get_context_uses_tracked_cursor() {
    let mut manager = ContextWindowManager::new(250, 1);
    manager.on_document_changed(numbered_document(10));
    manager.set_cursor(Position::new(4, 0));

    let bundle = manager.get_context();
    assert_eq!(bundle.surrounding_context, "line 4\nline 5");
}
