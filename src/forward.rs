//! Forward matching: find the nearest end delimiter to the right.
//!
//! ## The Stacking Discipline
//!
//! Scanning rightward for a closing delimiter, any *opening* delimiter we
//! pass introduces a nested region whose close must be skipped:
//!
//! ```text
//! "| a ( b ) c ) d"        scan target: `)`  inverse: `(`
//!      ^     ^   ^
//!      open  |   this one balances the scan start
//!            closes the nested region, depth 1 -> 0, skip
//! ```
//!
//! The depth counter stands in for a stack of markers; only the count
//! matters. A target hit at depth zero is the answer.

use crate::pattern::{Nesting, Pattern, PatternMatch, TextSlice};

/// Find the nearest occurrence of `target` scanning left to right.
///
/// With `nesting` set, intervening inverse-pattern occurrences open nested
/// regions and the target occurrences closing them are skipped; the first
/// target hit at depth zero wins. Without `nesting`, the first occurrence
/// wins outright.
///
/// The returned offset is relative to `slice`.
#[must_use]
pub fn match_forward(
    target: &Pattern,
    slice: TextSlice<'_>,
    nesting: Option<Nesting<'_>>,
) -> Option<PatternMatch> {
    let Some(nesting) = nesting else {
        return target.as_regex().find(slice.text).map(|m| PatternMatch {
            offset: m.start(),
            len: m.len(),
        });
    };

    let mut depth: usize = 0;
    for hit in nesting.scan.find_iter(slice.text) {
        if nesting.opens_nested(target, hit.as_str()) {
            depth += 1;
            continue;
        }
        if depth > 0 {
            // This target closes a nested region opened earlier in the scan.
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
