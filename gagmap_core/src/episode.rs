//! Episode records.
//!
//! A [`RawEpisode`] carries the plain values of one feed item. Building an
//! [`Episode`] from it normalizes the text, collects cross-links and runs the
//! temporal extractor over the normalized description.

use chrono::{DateTime, Utc};
use gagmap_temporal::{TemporalExtractor, TemporalReference};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::links::extract_episode_links;
use crate::text::{normalize_description, normalize_title};
use crate::util::content_hash;

/// Default base of the public episode page.
pub const DEFAULT_WEBSITE_URL_BASE: &str = "https://gadg.fm/";

/// One feed item as handed over by the feed reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEpisode {
    pub episode: u32,
    pub title: String,
    /// RFC 2822, e.g. "Wed, 29 May 2024 07:00:00 +0000".
    pub pub_date: String,
    pub description: String,
    /// HTML show notes.
    #[serde(default)]
    pub content_encoded: String,
    pub duration_in_seconds: u64,
    pub audio_url: String,
}

impl RawEpisode {
    /// Hash over every raw field, used to detect changed feed items.
    #[must_use]
    pub fn checksum(&self) -> String {
        let content = [
            self.episode.to_string(),
            self.title.clone(),
            self.pub_date.clone(),
            self.description.clone(),
            self.content_encoded.clone(),
            self.duration_in_seconds.to_string(),
            self.audio_url.clone(),
        ]
        .join("\n");
        content_hash("episode", &content)
    }
}

/// A place mentioned in an episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A processed episode as stored in the episode dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub id: u32,
    pub checksum: String,
    pub title: String,
    pub date: DateTime<Utc>,
    pub duration_in_seconds: u64,
    pub website_url: String,
    pub audio_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
    pub description: String,
    pub episode_links: Vec<u32>,
    pub temporal_links: Vec<TemporalReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<Location>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literature: Option<Vec<String>>,
}

/// Options for [`Episode::from_raw`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Fail the episode on the first unresolvable temporal literal instead of
    /// dropping that literal.
    pub strict: bool,
    /// Prefix of the public episode page; the id is appended.
    pub website_url_base: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            strict: true,
            website_url_base: DEFAULT_WEBSITE_URL_BASE.to_string(),
        }
    }
}

impl Episode {
    /// Build an episode from a raw feed item.
    ///
    /// # Errors
    /// Returns [`Error::InvalidPubDate`] if the publication date is not
    /// RFC 2822, and [`Error::Temporal`] if strict extraction fails.
    pub fn from_raw(
        raw: &RawEpisode,
        extractor: &TemporalExtractor,
        options: &BuildOptions,
    ) -> Result<Self> {
        let id = raw.episode;
        let date = DateTime::parse_from_rfc2822(raw.pub_date.trim())
            .map_err(|source| Error::InvalidPubDate {
                id,
                value: raw.pub_date.clone(),
                source,
            })?
            .with_timezone(&Utc);

        let description = normalize_description(&raw.description);
        let temporal_links = if options.strict {
            extractor
                .extract(&description)
                .map_err(|source| Error::Temporal { id, source })?
        } else {
            let extraction = extractor.extract_lenient(&description);
            if !extraction.is_clean() {
                warn!(
                    "Episode {}: dropped {} unresolvable temporal literals",
                    id,
                    extraction.failures.len()
                );
            }
            extraction.references
        };
        let episode_links = extract_episode_links(&raw.content_encoded, id);

        debug!(
            "Built episode {} with {} temporal and {} episode links",
            id,
            temporal_links.len(),
            episode_links.len()
        );

        Ok(Self {
            id,
            checksum: raw.checksum(),
            title: normalize_title(&raw.title),
            date,
            duration_in_seconds: raw.duration_in_seconds,
            website_url: format!("{}{id}", options.website_url_base),
            audio_url: raw.audio_url.clone(),
            transcript: None,
            description,
            episode_links,
            temporal_links,
            locations: None,
            literature: None,
        })
    }
}
