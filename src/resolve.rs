//! Pair resolution: combine the two directional scans around a selection.
//!
//! ```text
//! document: [ ... before ... ][ selection ][ ... after ... ]
//!                    ^ backward scan             ^ forward scan
//!                      for start pattern           for end pattern
//! ```
//!
//! Both scans are nesting-aware, each treating the opposite delimiter as
//! its inverse. The scans are independent: each side finds the first
//! unmatched occurrence scanning outward, which is also what makes the
//! identical-pattern case (quotes) behave as "nearest occurrence on each
//! side".

use crate::backward::{match_backward, INITIAL_BACKWARD_SCOPE};
use crate::forward::match_forward;
use crate::pattern::{PairSpec, TextSlice};
use crate::selection::SelectionRange;

/// The resolved enclosing delimiter pair for one selection.
///
/// Offsets are absolute byte offsets in the document. With pathologically
/// overlapping patterns (identical quotes in degenerate text) the start
/// match is not guaranteed to end before the end match begins; callers own
/// that edge case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPair {
    /// Absolute offset of the start delimiter match.
    pub start_offset: usize,
    /// Byte length of the start delimiter match.
    pub start_len: usize,
    /// Absolute offset of the end delimiter match.
    pub end_offset: usize,
    /// Byte length of the end delimiter match.
    pub end_len: usize,
}

/// Find the nearest correctly-nested delimiter pair enclosing `selection`.
///
/// Splits `text` at the selection, backward-matches the start pattern over
/// the prefix and forward-matches the end pattern over the suffix. Both
/// sides must match or the resolution fails as a whole.
///
/// A selection that is out of bounds or not on char boundaries resolves to
/// `None` rather than panicking; the engine never corrupts a selection it
/// cannot handle.
#[must_use]
pub fn resolve_pair(
    spec: &PairSpec,
    text: &str,
    selection: SelectionRange,
) -> Option<ResolvedPair> {
    let sel_start = selection.start();
    let sel_end = selection.end();
    if sel_end > text.len()
        || !text.is_char_boundary(sel_start)
        || !text.is_char_boundary(sel_end)
    {
        return None;
    }

    let before = TextSlice::new(&text[..sel_start], 0);
    let after = TextSlice::new(&text[sel_end..], sel_end);

    let start = match_backward(
        spec.start(),
        before,
        INITIAL_BACKWARD_SCOPE,
        Some(spec.start_nesting()),
    )?;
    let end = match_forward(spec.end(), after, Some(spec.end_nesting()))?;

    Some(ResolvedPair {
        start_offset: before.absolute(start.offset),
        start_len: start.len,
        end_offset: after.absolute(end.offset),
        end_len: end.len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::PairSpec;

    fn parens() -> PairSpec {
        PairSpec::new(r"\(", r"\)", false).unwrap()
    }

    #[test]
    fn test_simple_pair() {
        let spec = parens();
        //        0123456
        let text = "a(bcd)e";
        let pair = resolve_pair(&spec, text, SelectionRange::cursor(3)).unwrap();
        assert_eq!(pair.start_offset, 1);
        assert_eq!(pair.end_offset, 5);
        assert_eq!((pair.start_len, pair.end_len), (1, 1));
    }

    #[test]
    fn test_nearest_enclosing_not_outermost() {
        let spec = parens();
        //          0123456789...
        let text = "foo(bar(baz)qux)quux";
        let pair = resolve_pair(&spec, text, SelectionRange::cursor(9)).unwrap();
        assert_eq!(pair.start_offset, 7);
        assert_eq!(pair.end_offset, 11);
    }

    #[test]
    fn test_selection_spanning_inner_pair() {
        let spec = parens();
        let text = "foo(bar(baz)qux)quux";
        // Selecting "(baz)" whole: the enclosing pair is the outer one.
        let pair = resolve_pair(&spec, text, SelectionRange::new(7, 12)).unwrap();
        assert_eq!(pair.start_offset, 3);
        assert_eq!(pair.end_offset, 15);
    }

    #[test]
    fn test_missing_either_side_fails() {
        let spec = parens();
        assert!(resolve_pair(&spec, "(abc", SelectionRange::cursor(2)).is_none());
        assert!(resolve_pair(&spec, "abc)", SelectionRange::cursor(2)).is_none());
        assert!(resolve_pair(&spec, "abc", SelectionRange::cursor(2)).is_none());
    }

    #[test]
    fn test_out_of_bounds_selection_fails() {
        let spec = parens();
        assert!(resolve_pair(&spec, "(a)", SelectionRange::cursor(10)).is_none());
    }

    #[test]
    fn test_mid_char_selection_fails() {
        let spec = parens();
        assert!(resolve_pair(&spec, "(日)", SelectionRange::cursor(2)).is_none());
    }

    #[test]
    fn test_identical_quote_patterns() {
        let spec = PairSpec::new("'", "'", false).unwrap();
        //          0123456789
        let text = "a'b'c'd";
        // Between the first two quotes: nearest occurrence on each side.
        let pair = resolve_pair(&spec, text, SelectionRange::cursor(3)).unwrap();
        assert_eq!(pair.start_offset, 1);
        assert_eq!(pair.end_offset, 3);
    }

    #[test]
    fn test_multichar_delimiters() {
        let spec = PairSpec::new("```", "```", false).unwrap();
        let text = "a```code```b";
        let pair = resolve_pair(&spec, text, SelectionRange::new(5, 7)).unwrap();
        assert_eq!(pair.start_offset, 1);
        assert_eq!(pair.start_len, 3);
        assert_eq!(pair.end_offset, 8);
        assert_eq!(pair.end_len, 3);
    }
}
