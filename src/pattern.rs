//! Delimiter patterns and pair specifications.
//!
//! ## Why Compiled Value Types?
//!
//! Users supply delimiter patterns as regex source text (possibly from
//! settings files, possibly wrong). Compiling eagerly at construction turns
//! bad input into a typed [`Error`](crate::Error) at load time instead of a
//! surprise at match time. Each [`Pattern`] keeps its source text around for
//! diagnostics.
//!
//! ## The Alternation Trick
//!
//! Nesting-aware scans need occurrences of *either* delimiter in document
//! order. Rather than interleaving two independent searches, a [`PairSpec`]
//! precompiles the alternation `(start)|(end)` once. Each hit is then
//! classified by re-testing its matched text against the individual
//! patterns — inverse first, because the two patterns may overlap in what
//! they match (identical quote patterns being the extreme case).

use regex::Regex;

use crate::error::{Error, Result};

/// A delimiter pattern: a compiled regex plus its original source text.
///
/// Patterns that can match the empty string are rejected at construction —
/// a zero-width delimiter cannot bound a region.
///
/// ```rust
/// use encircle::Pattern;
///
/// let open = Pattern::new(r"\(")?;
/// assert_eq!(open.source(), r"\(");
/// assert!(Pattern::new(r"\q").is_err()); // bad escape
/// # Ok::<(), encircle::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    source: String,
}

impl Pattern {
    /// Compile a pattern from regex source text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if the source fails to compile and
    /// [`Error::MatchesEmpty`] if the compiled pattern matches `""`.
    pub fn new(source: &str) -> Result<Self> {
        let regex = Regex::new(source).map_err(|e| Error::InvalidPattern {
            source_text: source.to_owned(),
            source: e,
        })?;
        if regex.is_match("") {
            return Err(Error::MatchesEmpty {
                source_text: source.to_owned(),
            });
        }
        Ok(Self {
            regex,
            source: source.to_owned(),
        })
    }

    /// The compiled regex.
    #[must_use]
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }

    /// The original source text, kept for diagnostics.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether this pattern matches anywhere in `text`.
    ///
    /// Used to classify hits of a combined alternation scan.
    #[must_use]
    pub fn hits(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// A single occurrence of a pattern within a scanned slice.
///
/// `offset` is relative to the slice that was scanned; `len >= 1` always
/// holds because zero-width patterns are rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMatch {
    /// Byte offset of the match within the scanned slice.
    pub offset: usize,
    /// Byte length of the matched text.
    pub len: usize,
}

/// A read-only view of document text with its position in the document.
///
/// `anchor` is the absolute byte offset that the slice's byte 0 corresponds
/// to, so slice-relative match offsets convert back with [`Self::absolute`].
#[derive(Debug, Clone, Copy)]
pub struct TextSlice<'a> {
    /// The text covered by this slice.
    pub text: &'a str,
    /// Absolute document offset of `text`'s first byte.
    pub anchor: usize,
}

impl<'a> TextSlice<'a> {
    /// Create a slice anchored at `anchor`.
    #[must_use]
    pub const fn new(text: &'a str, anchor: usize) -> Self {
        Self { text, anchor }
    }

    /// Convert a slice-relative offset to an absolute document offset.
    #[must_use]
    pub const fn absolute(&self, offset: usize) -> usize {
        self.anchor + offset
    }
}

/// Nesting context for a balanced scan: the opposite delimiter and the
/// precompiled either-delimiter alternation.
///
/// Borrowed from a [`PairSpec`] via [`PairSpec::end_nesting`] (forward
/// scans) or [`PairSpec::start_nesting`] (backward scans).
#[derive(Debug, Clone, Copy)]
pub struct Nesting<'a> {
    /// The delimiter playing the opposite role of the scan target.
    pub inverse: &'a Pattern,
    /// Alternation matching either delimiter, in document order.
    pub scan: &'a Regex,
}

impl Nesting<'_> {
    /// Classify an alternation hit: does it open a nested region rather
    /// than close the one we are looking for?
    ///
    /// Inverse-match is checked first; a hit matching both patterns counts
    /// as the target. With identical start/end patterns (quotes) every hit
    /// is therefore a target and the depth counter never moves.
    #[must_use]
    pub fn opens_nested(&self, target: &Pattern, matched: &str) -> bool {
        self.inverse.hits(matched) && !target.hits(matched)
    }
}

/// A delimiter pair specification: start pattern, end pattern, and whether
/// the delimiters themselves belong in the expanded selection.
///
/// Immutable once built; the engine only reads it.
///
/// ```rust
/// use encircle::PairSpec;
///
/// let parens = PairSpec::new(r"\(", r"\)", false)?;
/// assert!(!parens.include_delimiters());
/// # Ok::<(), encircle::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct PairSpec {
    start: Pattern,
    end: Pattern,
    include_delimiters: bool,
    scan: Regex,
}

impl PairSpec {
    /// Build a spec from start/end pattern source text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] or [`Error::MatchesEmpty`] if
    /// either pattern is unusable.
    pub fn new(start: &str, end: &str, include_delimiters: bool) -> Result<Self> {
        Self::from_patterns(Pattern::new(start)?, Pattern::new(end)?, include_delimiters)
    }

    /// Build a spec from already-compiled patterns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if the combined alternation fails
    /// to compile (e.g. the pair together exceeds the regex size limit).
    pub fn from_patterns(
        start: Pattern,
        end: Pattern,
        include_delimiters: bool,
    ) -> Result<Self> {
        let alternation = format!("({})|({})", start.source(), end.source());
        let scan = Regex::new(&alternation).map_err(|e| Error::InvalidPattern {
            source_text: alternation,
            source: e,
        })?;
        Ok(Self {
            start,
            end,
            include_delimiters,
            scan,
        })
    }

    /// The start (opening) delimiter pattern.
    #[must_use]
    pub fn start(&self) -> &Pattern {
        &self.start
    }

    /// The end (closing) delimiter pattern.
    #[must_use]
    pub fn end(&self) -> &Pattern {
        &self.end
    }

    /// Whether the matched delimiters are included in the new selection.
    #[must_use]
    pub const fn include_delimiters(&self) -> bool {
        self.include_delimiters
    }

    /// Nesting context for scanning *forward* for the end delimiter:
    /// intervening start delimiters open nested regions.
    #[must_use]
    pub fn end_nesting(&self) -> Nesting<'_> {
        Nesting {
            inverse: &self.start,
            scan: &self.scan,
        }
    }

    /// Nesting context for scanning *backward* for the start delimiter:
    /// intervening end delimiters open nested regions.
    #[must_use]
    pub fn start_nesting(&self) -> Nesting<'_> {
        Nesting {
            inverse: &self.end,
            scan: &self.scan,
        }
    }
}
