//! Temporal reference types.
//!
//! A temporal reference is one German date or era phrase found in a
//! description, resolved to an inclusive UTC interval with second precision.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Result;
use crate::resolver;

/// Granularity class that drove the resolution of a reference.
///
/// The declaration order is the order of the deduplicated output, which is
/// not the same as the scan priority of the registry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Mode {
    /// "14. Januar 2022"
    Day = 0,
    /// "Oktober 2023", represented by its first day only
    Month = 1,
    /// "Jahr 2022"
    Year = 2,
    /// "1980er Jahre"
    DecadeAbsolute = 3,
    /// "60er Jahren des 19. Jahrhunderts"
    DecadeRelative = 4,
    /// "19. Jahrhundert"
    Century = 5,
}

impl Mode {
    pub const ALL: [Self; 6] = [
        Self::Day,
        Self::Month,
        Self::Year,
        Self::DecadeAbsolute,
        Self::DecadeRelative,
        Self::Century,
    ];

    /// Returns the string representation of this mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Month => "Month",
            Self::Year => "Year",
            Self::DecadeAbsolute => "DecadeAbsolute",
            Self::DecadeRelative => "DecadeRelative",
            Self::Century => "Century",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = &'static str;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or("unknown temporal mode")
    }
}

/// A resolved date or era phrase.
///
/// Built once from a matched literal and never changed afterwards; the
/// normalized text, interval and era flag are all derived from the literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporalReference {
    literal: String,
    mode: Mode,
    normalized: String,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    is_bce: bool,
}

impl TemporalReference {
    /// Resolve a literal for the given mode.
    ///
    /// `is_bce` is the only driver of the year sign; the registry derives it
    /// from the trailing `vdZw` marker.
    pub fn resolve(literal: &str, mode: Mode, is_bce: bool) -> Result<Self> {
        let resolution = resolver::resolve(literal, mode, is_bce)?;
        Ok(Self {
            literal: literal.to_string(),
            mode,
            normalized: resolution.normalized,
            start: resolution.start,
            end: resolution.end,
            is_bce,
        })
    }

    #[must_use]
    pub fn literal(&self) -> &str {
        &self.literal
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Display form, e.g. "60er Jahre des 19. Jh." for "60er Jahren des 19. Jahrhunderts".
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Inclusive start, 00:00:00 UTC of the earliest day.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Inclusive end, 23:59:59 UTC of the latest day.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    #[must_use]
    pub const fn is_bce(&self) -> bool {
        self.is_bce
    }

    /// Whether `instant` lies inside the referenced interval.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

impl fmt::Display for TemporalReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{:?} .. {:?}]", self.normalized, self.start, self.end)
    }
}
