//! Delimiter presets, custom pattern slots, and the command registry.
//!
//! ## Presets
//!
//! Eight delimiter sets cover the everyday cases: the four bracket kinds,
//! the three quote kinds, and fenced code blocks. Each set yields two
//! commands, one excluding the delimiters from the selection and one
//! including them.
//!
//! ## Custom Slots
//!
//! Beyond the presets, hosts can fill up to [`MAX_CUSTOM_PATTERNS`]
//! numbered slots with user-defined start/end regex pairs, delivered as a
//! JSON settings payload:
//!
//! ```json
//! { "1": { "startPattern": "begin", "endPattern": "end" } }
//! ```
//!
//! Validation is eager and per-slot: a slot whose patterns fail to compile
//! becomes an "invalid" command that reports the compile error when
//! invoked, a missing slot becomes an "undefined" command that warns, and
//! neither disturbs the other slots or the presets. Only a payload that is
//! not the expected shape at all rejects the whole custom section.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::{error, warn};

use crate::error::{Error, Result};
use crate::expand::expand_document;
use crate::pattern::PairSpec;
use crate::TextAccessor;

/// Maximum number of user-defined custom pattern slots.
pub const MAX_CUSTOM_PATTERNS: usize = 10;

/// A built-in delimiter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// `(` ... `)`
    Parenthesis,
    /// `{` ... `}`
    Curly,
    /// `[` ... `]`
    Square,
    /// `<` ... `>`
    Angle,
    /// `'` ... `'`
    SingleQuote,
    /// `"` ... `"`
    DoubleQuote,
    /// `` ` `` ... `` ` ``
    Backtick,
    /// ```` ``` ```` ... ```` ``` ```` (fenced code blocks)
    BacktickBlock,
}

impl Preset {
    /// All built-in delimiter sets, in registration order.
    pub const ALL: [Self; 8] = [
        Self::Parenthesis,
        Self::Curly,
        Self::Square,
        Self::Angle,
        Self::SingleQuote,
        Self::DoubleQuote,
        Self::Backtick,
        Self::BacktickBlock,
    ];

    /// The kebab-case name used in command ids.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Parenthesis => "parenthesis",
            Self::Curly => "curly",
            Self::Square => "square",
            Self::Angle => "angle",
            Self::SingleQuote => "single-quote",
            Self::DoubleQuote => "double-quote",
            Self::Backtick => "backtick",
            Self::BacktickBlock => "backtick-block",
        }
    }

    /// Start and end pattern source text.
    const fn patterns(self) -> (&'static str, &'static str) {
        match self {
            Self::Parenthesis => (r"\(", r"\)"),
            Self::Curly => (r"\{", r"\}"),
            Self::Square => (r"\[", r"\]"),
            Self::Angle => ("<", ">"),
            Self::SingleQuote => ("'", "'"),
            Self::DoubleQuote => ("\"", "\""),
            Self::Backtick => ("`", "`"),
            Self::BacktickBlock => ("```", "```"),
        }
    }

    /// Build the pair spec for this preset.
    ///
    /// # Errors
    ///
    /// Preset patterns are known-good; this only fails if the regex engine
    /// itself rejects them, which would be a bug worth surfacing.
    pub fn spec(self, include_delimiters: bool) -> Result<PairSpec> {
        let (start, end) = self.patterns();
        PairSpec::new(start, end, include_delimiters)
    }
}

/// A user-defined custom pattern slot, as delivered by the host's
/// settings payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CustomPatternDef {
    /// Start pattern regex source.
    pub start_pattern: String,
    /// End pattern regex source.
    pub end_pattern: String,
}

/// What invoking a command does.
#[derive(Debug, Clone)]
pub enum CommandKind {
    /// A usable delimiter pair: invoking expands selections.
    Ready(PairSpec),
    /// A custom slot with no definition: invoking warns and does nothing.
    Undefined {
        /// The empty slot number.
        slot: usize,
    },
    /// A custom slot whose patterns failed validation: invoking reports
    /// the error and does nothing.
    Invalid {
        /// The offending slot number.
        slot: usize,
        /// Human-readable validation failure.
        reason: String,
    },
}

/// One invokable expansion command.
#[derive(Debug, Clone)]
pub struct Command {
    id: String,
    kind: CommandKind,
}

impl Command {
    /// The command's stable identifier, e.g.
    /// `select-in-parenthesis-exclusive`.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// What invoking this command does.
    #[must_use]
    pub fn kind(&self) -> &CommandKind {
        &self.kind
    }

    /// Invoke the command against a document.
    ///
    /// Returns the number of selections that were expanded (zero for
    /// undefined and invalid slots, which only emit diagnostics).
    pub fn invoke<D: TextAccessor + ?Sized>(&self, doc: &mut D) -> usize {
        match &self.kind {
            CommandKind::Ready(spec) => expand_document(doc, spec),
            CommandKind::Undefined { slot } => {
                warn!(slot, command = %self.id, "custom pattern slot has no definition");
                0
            }
            CommandKind::Invalid { slot, reason } => {
                error!(slot, command = %self.id, %reason, "custom pattern slot is invalid");
                0
            }
        }
    }
}

/// The full command surface: two commands per preset plus two per custom
/// slot.
///
/// The registry is immutable once built; hosts rebuild it when settings
/// change.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    /// Build a registry with presets only; every custom slot registers as
    /// undefined.
    ///
    /// # Errors
    ///
    /// Fails only if a preset pattern fails to compile, which would be a
    /// bug.
    pub fn new() -> Result<Self> {
        Self::build(&BTreeMap::new())
    }

    /// Build a registry from a custom pattern settings payload.
    ///
    /// Slots present in the payload register as ready commands (or invalid
    /// ones, if their patterns do not compile); absent slots register as
    /// undefined.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the payload is not a JSON map
    /// of slot definitions, and [`Error::InvalidSlot`] for keys outside
    /// `1..=10`. Callers typically fall back to [`Self::new`].
    pub fn from_custom_config(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, CustomPatternDef> = serde_json::from_str(json)?;

        let mut slots = BTreeMap::new();
        for (key, def) in raw {
            let slot: usize = key
                .parse()
                .map_err(|_| Error::InvalidSlot(key.clone()))?;
            if !(1..=MAX_CUSTOM_PATTERNS).contains(&slot) {
                return Err(Error::InvalidSlot(key));
            }
            slots.insert(slot, def);
        }
        Self::build(&slots)
    }

    fn build(slots: &BTreeMap<usize, CustomPatternDef>) -> Result<Self> {
        let mut commands = Vec::with_capacity((Preset::ALL.len() + MAX_CUSTOM_PATTERNS) * 2);

        for preset in Preset::ALL {
            for include in [false, true] {
                commands.push(Command {
                    id: format!("select-in-{}-{}", preset.name(), suffix(include)),
                    kind: CommandKind::Ready(preset.spec(include)?),
                });
            }
        }

        for slot in 1..=MAX_CUSTOM_PATTERNS {
            for include in [false, true] {
                let kind = match slots.get(&slot) {
                    None => CommandKind::Undefined { slot },
                    Some(def) => {
                        match PairSpec::new(&def.start_pattern, &def.end_pattern, include) {
                            Ok(spec) => CommandKind::Ready(spec),
                            Err(e) => CommandKind::Invalid {
                                slot,
                                reason: e.to_string(),
                            },
                        }
                    }
                };
                commands.push(Command {
                    id: format!("select-in-custom-pattern-{slot}-{}", suffix(include)),
                    kind,
                });
            }
        }

        Ok(Self { commands })
    }

    /// Look up a command by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.id == id)
    }

    /// All registered commands, in registration order.
    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }
}

const fn suffix(include: bool) -> &'static str {
    if include {
        "inclusive"
    } else {
        "exclusive"
    }
}
