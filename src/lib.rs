//! # encircle
//!
//! Expand text selections outward to the nearest enclosing delimiter pair.
//!
//! ## The Problem
//!
//! "Select everything inside these parentheses" is one of the most common
//! editing gestures there is, and it is fiddly to do by hand. The catch is
//! that *nearest* is not *first*: delimiters nest.
//!
//! ```text
//! foo(bar(baz)qux)quux
//!              ^cursor inside qux
//!
//! naive:   scan left for `(`  ->  the `(` before baz   WRONG (that pair
//!                                                       is already closed)
//! correct: skip the balanced `(baz)` pair  ->  the `(` after foo
//! ```
//!
//! Matching must respect stacking order: scanning outward in either
//! direction, every *opposite* delimiter passed opens a nested region whose
//! partner must be skipped. A depth counter per direction does it.
//!
//! ## The Other Problem: Scanning Backward
//!
//! Regex scans run left to right; there is no "last match before the
//! cursor, found lazily" primitive. Scanning the whole prefix on every
//! invocation would make large files sluggish, so the backward matcher
//! scans a suffix window of the prefix and doubles it geometrically until
//! the window contains a balanced answer (see [`match_backward`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use encircle::{expand_selections, PairSpec, SelectionRange};
//!
//! let text = "foo(bar(baz)qux)quux";
//!
//! // A cursor inside `baz` selects exactly `baz`:
//! let exclusive = PairSpec::new(r"\(", r"\)", false)?;
//! let out = expand_selections(&exclusive, text, &[SelectionRange::cursor(9)]);
//! assert_eq!(&text[out[0].selection.span()], "baz");
//!
//! // Including the delimiters lets repeated invocations climb outward:
//! let inclusive = PairSpec::new(r"\(", r"\)", true)?;
//! let out = expand_selections(&inclusive, text, &[SelectionRange::cursor(9)]);
//! assert_eq!(&text[out[0].selection.span()], "(baz)");
//!
//! let again = expand_selections(&inclusive, text, &[out[0].selection]);
//! assert_eq!(&text[again[0].selection.span()], "(bar(baz)qux)");
//! # Ok::<(), encircle::Error>(())
//! ```
//!
//! ## Presets and Custom Patterns
//!
//! [`Preset`] covers brackets, quotes, and fenced code blocks;
//! [`CommandRegistry`] exposes each as a pair of invokable commands and
//! accepts up to ten user-defined regex pairs from a JSON settings payload,
//! validated eagerly and degraded per slot.
//!
//! ## What This Is Not
//!
//! The engine matches patterns over a flat string. It does not parse any
//! language: a parenthesis inside a string literal or comment counts like
//! any other, unless the supplied patterns themselves encode otherwise.
//! Offsets are byte offsets; mapping to line/column is the host's job.

mod backward;
mod config;
mod error;
mod expand;
mod forward;
mod pattern;
mod resolve;
mod selection;

pub use backward::{match_backward, INITIAL_BACKWARD_SCOPE};
pub use config::{
    Command, CommandKind, CommandRegistry, CustomPatternDef, Preset, MAX_CUSTOM_PATTERNS,
};
pub use error::{Error, Result};
pub use expand::{expand_document, expand_selections, Expansion, StringDocument};
pub use forward::match_forward;
pub use pattern::{Nesting, PairSpec, Pattern, PatternMatch, TextSlice};
pub use resolve::{resolve_pair, ResolvedPair};
pub use selection::SelectionRange;

/// Host-editor access to document text and selections.
///
/// The engine is agnostic to how text is stored; it requests bounded
/// substrings, reads the current selections, and hands back new ones. It
/// never mutates document content.
///
/// [`StringDocument`] is the in-memory reference implementation.
pub trait TextAccessor {
    /// A substring of the document, by byte range.
    fn text(&self, range: std::ops::Range<usize>) -> &str;

    /// Total document length in bytes.
    fn len(&self) -> usize;

    /// Whether the document is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The current selections, in the order the host tracks them.
    fn selections(&self) -> Vec<SelectionRange>;

    /// Replace the current selections.
    fn apply_selections(&mut self, selections: Vec<SelectionRange>);
}
