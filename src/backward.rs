//! Backward matching: find the nearest start delimiter to the left.
//!
//! ## The Problem: No Leftward Scan
//!
//! Regex engines scan left to right. There is no "find the last match
//! before offset X" primitive that stops early, so a naive backward search
//! over a large document would scan everything before the cursor on every
//! keystroke.
//!
//! ## The Fix: Growing Suffix
//!
//! Scan only the last `scope` bytes before the cursor. If that window holds
//! no answer, double it and rescan from scratch:
//!
//! ```text
//! document: [.............................(........|cursor]
//! round 1:                        [ scope ]            no hit
//! round 2:               [     scope * 2  ]            no hit
//! round 3: [           scope * 4 (clamped) ]           hit
//! ```
//!
//! Partial state is never reused between rounds: a delimiter lying just
//! outside the current window can change which occurrence is the correct
//! nearest one, so each round re-evaluates the whole suffix.
//!
//! Growth is geometric, so there are at most O(log n) rounds; the worst
//! case (no match anywhere) costs O(n log n). In the common case the pair
//! sits within the initial window and one cheap scan suffices.

use crate::pattern::{Nesting, Pattern, PatternMatch, TextSlice};

/// Default initial backward search window, in bytes.
///
/// Tunable trade-off: a small window keeps the common case cheap, a large
/// one avoids rescans when delimiters sit far from the cursor.
pub const INITIAL_BACKWARD_SCOPE: usize = 1000;

/// Find the nearest occurrence of `target` scanning right to left, by
/// forward-scanning a geometrically growing suffix of `slice`.
///
/// With `nesting` set, suffix hits are evaluated rightmost-first with the
/// roles swapped relative to a forward scan: an inverse (end-delimiter)
/// occurrence opens a nested region, and a target occurrence at depth zero
/// is the answer. An unbalanced suffix forces a larger window even when it
/// contains target occurrences.
///
/// The returned offset is relative to `slice`.
#[must_use]
pub fn match_backward(
    target: &Pattern,
    slice: TextSlice<'_>,
    initial_scope: usize,
    nesting: Option<Nesting<'_>>,
) -> Option<PatternMatch> {
    let text = slice.text;
    let mut scope = initial_scope.max(1);

    loop {
        let clamped = scope.min(text.len());
        // Snap the window start outward to a char boundary.
        let mut from = text.len() - clamped;
        while !text.is_char_boundary(from) {
            from -= 1;
        }
        let suffix = &text[from..];

        if let Some(m) = scan_suffix(target, suffix, nesting) {
            return Some(PatternMatch {
                offset: from + m.offset,
                len: m.len,
            });
        }

        if clamped == text.len() {
            return None;
        }
        scope = scope.saturating_mul(2);
    }
}

/// One full evaluation of a candidate suffix. `None` means the window must
/// grow: either no hits at all, or every target hit was consumed balancing
/// an end delimiter to its right.
fn scan_suffix(
    target: &Pattern,
    suffix: &str,
    nesting: Option<Nesting<'_>>,
) -> Option<PatternMatch> {
    let Some(nesting) = nesting else {
        // Nearest to the cursor = last occurrence in the suffix.
        return target.as_regex().find_iter(suffix).last().map(|m| PatternMatch {
            offset: m.start(),
            len: m.len(),
        });
    };

    let hits: Vec<regex::Match<'_>> = nesting.scan.find_iter(suffix).collect();

    let mut depth: usize = 0;
    for hit in hits.iter().rev() {
        if nesting.opens_nested(target, hit.as_str()) {
            depth += 1;
            continue;
        }
        if depth > 0 {
            depth -= 1;
            continue;
        }
        return Some(PatternMatch {
            offset: hit.start(),
            len: hit.len(),
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::PairSpec;

    fn parens() -> PairSpec {
        PairSpec::new(r"\(", r"\)", false).unwrap()
    }

    #[test]
    fn test_plain_last_occurrence() {
        let spec = parens();
        let m = match_backward(
            spec.start(),
            TextSlice::new("(a(b", 0),
            INITIAL_BACKWARD_SCOPE,
            None,
        )
        .unwrap();
        assert_eq!(m.offset, 2);
    }

    #[test]
    fn test_no_occurrence() {
        let spec = parens();
        assert!(match_backward(
            spec.start(),
            TextSlice::new("abcd", 0),
            INITIAL_BACKWARD_SCOPE,
            None,
        )
        .is_none());
    }

    #[test]
    fn test_empty_text() {
        let spec = parens();
        assert!(match_backward(
            spec.start(),
            TextSlice::new("", 0),
            INITIAL_BACKWARD_SCOPE,
            Some(spec.start_nesting()),
        )
        .is_none());
    }

    #[test]
    fn test_nested_open_is_skipped() {
        let spec = parens();
        // Rightmost-first over "(a(b)c": the close at 4 consumes the open
        // at 2, leaving the open at 0 as the enclosing delimiter.
        let m = match_backward(
            spec.start(),
            TextSlice::new("(a(b)c", 0),
            INITIAL_BACKWARD_SCOPE,
            Some(spec.start_nesting()),
        )
        .unwrap();
        assert_eq!(m.offset, 0);
    }

    #[test]
    fn test_scope_grows_past_initial_window() {
        let spec = parens();
        let text = format!("({}", "x".repeat(5000));
        let m = match_backward(
            spec.start(),
            TextSlice::new(&text, 0),
            INITIAL_BACKWARD_SCOPE,
            Some(spec.start_nesting()),
        )
        .unwrap();
        assert_eq!(m.offset, 0);
    }

    #[test]
    fn test_unbalanced_suffix_forces_regrow() {
        let spec = parens();
        // With a window of 3 the suffix ")cd" is unbalanced; the correct
        // answer only appears once the window covers both opens.
        let m = match_backward(
            spec.start(),
            TextSlice::new("((ab)cd", 0),
            3,
            Some(spec.start_nesting()),
        )
        .unwrap();
        assert_eq!(m.offset, 0);
    }

    #[test]
    fn test_window_snaps_to_char_boundary() {
        let spec = parens();
        // Window start lands mid-codepoint and must snap outward.
        let text = format!("({}", "日本語".repeat(100));
        let m = match_backward(
            spec.start(),
            TextSlice::new(&text, 0),
            4,
            Some(spec.start_nesting()),
        )
        .unwrap();
        assert_eq!(m.offset, 0);
    }

    #[test]
    fn test_zero_initial_scope_still_terminates() {
        let spec = parens();
        let m = match_backward(spec.start(), TextSlice::new("(a", 0), 0, None).unwrap();
        assert_eq!(m.offset, 0);
    }
}
