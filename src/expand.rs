//! Selection expansion: apply pair resolution to each cursor independently.
//!
//! Multi-cursor editing means one command touches many selections at once.
//! Each is expanded against the same immutable text snapshot; a selection
//! with no enclosing pair is passed through unchanged and warned about, and
//! never blocks the others.
//!
//! ## Boundary Placement
//!
//! ```text
//! "foo ( bar ) baz"
//!       ^exclusive^         start + match len .. end offset
//!      ^-inclusive--^       start offset .. end + match len
//! ```
//!
//! ## Direction Preservation
//!
//! The new selection keeps the direction the user drew: a reversed
//! selection stays reversed, so repeated expansions keep the cursor on the
//! same end while the span grows outward.

use tracing::warn;

use crate::pattern::PairSpec;
use crate::resolve::resolve_pair;
use crate::selection::SelectionRange;
use crate::TextAccessor;

/// Outcome of expanding one selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expansion {
    /// The resulting selection. Identical to the input when `matched` is
    /// false.
    pub selection: SelectionRange,
    /// Whether an enclosing pair was found for this selection.
    pub matched: bool,
}

/// Expand each selection to its nearest enclosing delimiter pair.
///
/// Selections are processed sequentially and independently against the
/// same snapshot of `text`. Failures pass the original selection through
/// unchanged (and emit a warning); they never abort the batch.
///
/// ```rust
/// use encircle::{expand_selections, PairSpec, SelectionRange};
///
/// let spec = PairSpec::new(r"\(", r"\)", false)?;
/// let out = expand_selections(&spec, "foo(bar(baz)qux)quux", &[SelectionRange::cursor(9)]);
/// assert!(out[0].matched);
/// assert_eq!(out[0].selection.span(), 8..11); // "baz"
/// # Ok::<(), encircle::Error>(())
/// ```
#[must_use]
pub fn expand_selections(
    spec: &PairSpec,
    text: &str,
    selections: &[SelectionRange],
) -> Vec<Expansion> {
    selections
        .iter()
        .map(|&selection| match resolve_pair(spec, text, selection) {
            None => {
                warn!(
                    anchor = selection.anchor,
                    active = selection.active,
                    start_pattern = spec.start().source(),
                    end_pattern = spec.end().source(),
                    "no matching delimiter pair found"
                );
                Expansion {
                    selection,
                    matched: false,
                }
            }
            Some(pair) => {
                let (start, end) = if spec.include_delimiters() {
                    (pair.start_offset, pair.end_offset + pair.end_len)
                } else {
                    (pair.start_offset + pair.start_len, pair.end_offset)
                };
                let selection = if selection.is_reversed() {
                    SelectionRange::new(end, start)
                } else {
                    // Forward and empty selections both come out forward.
                    SelectionRange::new(start, end)
                };
                Expansion {
                    selection,
                    matched: true,
                }
            }
        })
        .collect()
}

/// Drive a full expansion against a document: read the current selections,
/// expand them, and apply the results.
///
/// Returns the number of selections for which a pair was found. With no
/// current selections this warns once and is a no-op.
pub fn expand_document<D: TextAccessor + ?Sized>(doc: &mut D, spec: &PairSpec) -> usize {
    let selections = doc.selections();
    if selections.is_empty() {
        warn!("no active selections to expand");
        return 0;
    }

    let text = doc.text(0..doc.len()).to_owned();
    let expansions = expand_selections(spec, &text, &selections);
    let matched = expansions.iter().filter(|e| e.matched).count();
    doc.apply_selections(expansions.into_iter().map(|e| e.selection).collect());
    matched
}

/// A minimal in-memory document, useful as a test double and as a
/// reference implementation of [`TextAccessor`].
#[derive(Debug, Clone, Default)]
pub struct StringDocument {
    text: String,
    selections: Vec<SelectionRange>,
}

impl StringDocument {
    /// Create a document from text and initial selections.
    #[must_use]
    pub fn new(text: impl Into<String>, selections: Vec<SelectionRange>) -> Self {
        Self {
            text: text.into(),
            selections,
        }
    }

    /// The full document text.
    #[must_use]
    pub fn contents(&self) -> &str {
        &self.text
    }
}

impl TextAccessor for StringDocument {
    fn text(&self, range: std::ops::Range<usize>) -> &str {
        &self.text[range]
    }

    fn len(&self) -> usize {
        self.text.len()
    }

    fn selections(&self) -> Vec<SelectionRange> {
        self.selections.clone()
    }

    fn apply_selections(&mut self, selections: Vec<SelectionRange>) {
        self.selections = selections;
    }
}
