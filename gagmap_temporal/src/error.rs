use thiserror::Error;

use crate::reference::Mode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A numeric component of a matched literal could not be read.
    #[error("cannot read {component} from {mode} literal '{literal}'")]
    Arithmetic {
        literal: String,
        mode: Mode,
        component: &'static str,
    },

    /// The literal names a day that does not exist, e.g. "30. Februar 2022".
    #[error("'{literal}' ({mode}) is not a calendar date: {year}-{month:02}-{day:02}")]
    InvalidDate {
        literal: String,
        mode: Mode,
        year: i32,
        month: u32,
        day: u32,
    },

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl Error {
    /// The literal the error was raised for, if it came from resolution.
    #[must_use]
    pub fn literal(&self) -> Option<&str> {
        match self {
            Self::Arithmetic { literal, .. } | Self::InvalidDate { literal, .. } => Some(literal),
            Self::Pattern(_) => None,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> Option<Mode> {
        match self {
            Self::Arithmetic { mode, .. } | Self::InvalidDate { mode, .. } => Some(*mode),
            Self::Pattern(_) => None,
        }
    }
}
