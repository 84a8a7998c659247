//! The SelectionRange type: a directed span of selected text.
//!
//! A selection is not just a range. It remembers *how* the user drew it:
//! the anchor is where the drag started and stays put, the active end is
//! where the cursor sits. Dragging right-to-left gives `anchor > active`.
//!
//! ```text
//! "foo(bar)baz"
//!      ^^^
//! forward:  anchor = 4, active = 7
//! reversed: anchor = 7, active = 4   <- same span, opposite direction
//! ```
//!
//! Expansion preserves this direction so that repeated invocations keep
//! growing the selection outward symmetrically on both ends.
//!
//! ## Byte Offsets
//!
//! `anchor` and `active` are byte offsets into the document, matching
//! Rust's string slicing semantics. The caller is responsible for keeping
//! them on `char` boundaries.

/// A directed text selection identified by byte offsets.
///
/// An empty selection (`anchor == active`) is a bare cursor.
///
/// ```rust
/// use encircle::SelectionRange;
///
/// let sel = SelectionRange::new(7, 4);
/// assert!(sel.is_reversed());
/// assert_eq!(sel.start(), 4);
/// assert_eq!(sel.end(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    /// Byte offset where the selection was anchored (the fixed end).
    pub anchor: usize,
    /// Byte offset of the cursor (the moving end).
    pub active: usize,
}

impl SelectionRange {
    /// Create a selection from anchor and active offsets.
    #[must_use]
    pub const fn new(anchor: usize, active: usize) -> Self {
        Self { anchor, active }
    }

    /// Create a bare cursor (empty selection) at `offset`.
    #[must_use]
    pub const fn cursor(offset: usize) -> Self {
        Self {
            anchor: offset,
            active: offset,
        }
    }

    /// The lower bound of the selected span.
    #[must_use]
    pub fn start(&self) -> usize {
        self.anchor.min(self.active)
    }

    /// The upper bound (exclusive) of the selected span.
    #[must_use]
    pub fn end(&self) -> usize {
        self.anchor.max(self.active)
    }

    /// Whether this selection is a bare cursor.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// Whether the user drew this selection right-to-left.
    #[must_use]
    pub const fn is_reversed(&self) -> bool {
        self.anchor > self.active
    }

    /// The selected byte span, in document order.
    #[must_use]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start()..self.end()
    }
}
