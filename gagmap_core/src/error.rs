use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("episode {id}: invalid publication date '{value}': {source}")]
    InvalidPubDate {
        id: u32,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("episode {id}: temporal extraction failed: {source}")]
    Temporal {
        id: u32,
        #[source]
        source: gagmap_temporal::Error,
    },
}

impl Error {
    /// Id of the episode the error belongs to.
    #[must_use]
    pub const fn episode_id(&self) -> u32 {
        match self {
            Self::InvalidPubDate { id, .. } | Self::Temporal { id, .. } => *id,
        }
    }
}
