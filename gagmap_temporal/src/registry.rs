//! Ordered pattern table for German date and era phrases.
//!
//! The order of the table is significant: the scanner accepts the first
//! pattern (by priority) that matches anywhere after its cursor, regardless
//! of where in the text a lower-priority pattern would have matched.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::reference::Mode;

/// German month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// Optional trailing "vor der Zeitwende" marker; case-insensitive.
const ERA_SUFFIX: &str = r"(?:\s*(?i:vdzw))?";

/// Definition of a single registry pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternDef {
    /// Regex matched against the normalized text.
    pub pattern: String,

    /// Granularity assigned to every match of this pattern.
    pub mode: Mode,
}

impl PatternDef {
    #[must_use]
    pub fn new(pattern: impl Into<String>, mode: Mode) -> Self {
        Self {
            pattern: pattern.into(),
            mode,
        }
    }
}

/// A compiled registry entry.
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    priority: usize,
    mode: Mode,
    regex: Regex,
}

impl RegistryEntry {
    /// Position in the registry, 0 being the highest priority.
    #[must_use]
    pub const fn priority(&self) -> usize {
        self.priority
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub const fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// Immutable, priority-ordered set of compiled patterns.
///
/// Cheap to share between threads once built.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    entries: Vec<RegistryEntry>,
}

impl PatternRegistry {
    /// Compile the given definitions, keeping their order as priority order.
    pub fn new(defs: &[PatternDef]) -> Result<Self> {
        let entries = defs
            .iter()
            .enumerate()
            .map(|(priority, def)| {
                Ok(RegistryEntry {
                    priority,
                    mode: def.mode,
                    regex: Regex::new(&def.pattern)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    /// The fixed German registry.
    pub fn german() -> Result<Self> {
        Self::new(&default_patterns())
    }

    #[must_use]
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The German pattern set, highest priority first.
///
/// Digits are ASCII only; `\d` would also accept other Unicode digits.
#[must_use]
pub fn default_patterns() -> Vec<PatternDef> {
    let months = MONTH_NAMES.join("|");
    vec![
        PatternDef::new(
            format!(r"[0-9][0-9]?\. (?:{months}) [0-9]{{1,4}}{ERA_SUFFIX}"),
            Mode::Day,
        ),
        PatternDef::new(format!(r"(?:{months}) [0-9]{{1,4}}{ERA_SUFFIX}"), Mode::Month),
        PatternDef::new(
            format!(r"[0-9]{{1,4}}er Jahren? des [0-9][0-9]?\. (?:Jahrhunderts?|JH){ERA_SUFFIX}"),
            Mode::DecadeRelative,
        ),
        PatternDef::new(
            format!(r"[0-9]{{1,4}}er Jahren?{ERA_SUFFIX}"),
            Mode::DecadeAbsolute,
        ),
        PatternDef::new(
            format!(r"[0-9][0-9]?\. Jahrhunderts?{ERA_SUFFIX}"),
            Mode::Century,
        ),
        PatternDef::new(format!(r"Jahr [0-9]{{1,4}}{ERA_SUFFIX}"), Mode::Year),
    ]
}
