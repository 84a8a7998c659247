//! Property-based tests for selection expansion.
//!
//! These verify invariants the engine must maintain on arbitrary input:
//! - Safety: returned offsets are in bounds and on char boundaries
//! - Identity on failure: an unmatched selection comes back bit-identical
//! - Containment: a matched expansion encloses the original span
//! - Direction: the original selection direction is preserved
//! - Idempotence: exclusive expansion is a fixpoint

use encircle::{expand_selections, PairSpec, SelectionRange};
use proptest::prelude::*;

// =============================================================================
// Generators
// =============================================================================

/// ASCII soup with delimiters sprinkled in, plus a cursor offset.
/// ASCII keeps every offset a valid char boundary.
fn doc_and_cursor() -> impl Strategy<Value = (String, usize)> {
    prop::string::string_regex("[a-z ()'\\[\\]]{0,120}")
        .unwrap()
        .prop_flat_map(|s| {
            let len = s.len();
            (Just(s), 0..=len)
        })
}

/// A document plus a non-empty forward span inside it.
fn doc_and_span() -> impl Strategy<Value = (String, usize, usize)> {
    prop::string::string_regex("[a-z ()]{2,120}")
        .unwrap()
        .prop_flat_map(|s| {
            let len = s.len();
            (Just(s), 0..len)
        })
        .prop_flat_map(|(s, start)| {
            let len = s.len();
            (Just(s), Just(start), (start + 1)..=len)
        })
}

fn parens(include: bool) -> PairSpec {
    PairSpec::new(r"\(", r"\)", include).unwrap()
}

fn quotes() -> PairSpec {
    PairSpec::new("'", "'", false).unwrap()
}

// =============================================================================
// Safety
// =============================================================================

proptest! {
    #[test]
    fn result_offsets_in_bounds((text, cursor) in doc_and_cursor()) {
        for spec in [parens(false), parens(true), quotes()] {
            let out = expand_selections(&spec, &text, &[SelectionRange::cursor(cursor)]);
            let sel = out[0].selection;
            prop_assert!(sel.end() <= text.len());
            prop_assert!(text.is_char_boundary(sel.start()));
            prop_assert!(text.is_char_boundary(sel.end()));
        }
    }

    #[test]
    fn failure_returns_identical_selection((text, start, end) in doc_and_span()) {
        let spec = parens(false);
        let sel = SelectionRange::new(start, end);
        let out = expand_selections(&spec, &text, &[sel]);
        if !out[0].matched {
            prop_assert_eq!(out[0].selection, sel);
        }
    }
}

// =============================================================================
// Containment and boundary content
// =============================================================================

proptest! {
    #[test]
    fn expansion_contains_original_span((text, start, end) in doc_and_span()) {
        for spec in [parens(false), parens(true)] {
            let sel = SelectionRange::new(start, end);
            let out = expand_selections(&spec, &text, &[sel]);
            if out[0].matched {
                prop_assert!(out[0].selection.start() <= sel.start());
                prop_assert!(out[0].selection.end() >= sel.end());
            }
        }
    }

    #[test]
    fn exclusive_boundaries_sit_just_inside_delimiters((text, cursor) in doc_and_cursor()) {
        let out = expand_selections(&parens(false), &text, &[SelectionRange::cursor(cursor)]);
        if out[0].matched {
            let sel = out[0].selection;
            prop_assert!(sel.start() >= 1);
            prop_assert_eq!(text.as_bytes()[sel.start() - 1], b'(');
            prop_assert_eq!(text.as_bytes()[sel.end()], b')');
        }
    }

    #[test]
    fn inclusive_boundaries_sit_on_delimiters((text, cursor) in doc_and_cursor()) {
        let out = expand_selections(&parens(true), &text, &[SelectionRange::cursor(cursor)]);
        if out[0].matched {
            let sel = out[0].selection;
            prop_assert_eq!(text.as_bytes()[sel.start()], b'(');
            prop_assert_eq!(text.as_bytes()[sel.end() - 1], b')');
        }
    }
}

// =============================================================================
// Direction
// =============================================================================

proptest! {
    #[test]
    fn reversed_stays_reversed_forward_stays_forward((text, start, end) in doc_and_span()) {
        let spec = parens(true);

        let fwd = expand_selections(&spec, &text, &[SelectionRange::new(start, end)]);
        prop_assert!(!fwd[0].selection.is_reversed());

        let rev = expand_selections(&spec, &text, &[SelectionRange::new(end, start)]);
        if rev[0].matched {
            prop_assert!(rev[0].selection.is_reversed());
        }
    }
}

// =============================================================================
// Idempotence
// =============================================================================

proptest! {
    #[test]
    fn exclusive_expansion_is_a_fixpoint((text, cursor) in doc_and_cursor()) {
        let spec = parens(false);
        let first = expand_selections(&spec, &text, &[SelectionRange::cursor(cursor)]);
        if first[0].matched {
            let second = expand_selections(&spec, &text, &[first[0].selection]);
            prop_assert!(second[0].matched);
            prop_assert_eq!(second[0].selection, first[0].selection);
        }
    }
}
