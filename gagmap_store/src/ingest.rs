//! Incremental ingest of raw feed items into the episode store.
//!
//! An item is rebuilt only when the store has no episode with its id or
//! the stored checksum differs from the item's current checksum. Failing
//! items are logged and counted; they never stop the rest of the run.

use std::collections::BTreeMap;
use std::fmt;

use gagmap_core::{BuildOptions, Episode, RawEpisode, is_episode};
use gagmap_temporal::TemporalExtractor;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::store::EpisodeStore;

/// Options for [`ingest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestOptions {
    /// Title prefix of regular episodes; other items are skipped.
    pub title_prefix: String,
    pub build: BuildOptions,
    /// Build changed episodes on the rayon thread pool.
    pub parallel: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            title_prefix: "GAG".to_string(),
            build: BuildOptions::default(),
            parallel: true,
        }
    }
}

/// Outcome counts of one ingest run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub added: usize,
    pub updated: usize,
    pub unchanged: usize,
    /// Items that are not regular episodes.
    pub skipped: usize,
    pub failed: usize,
}

impl fmt::Display for IngestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} added, {} updated, {} unchanged, {} skipped, {} failed",
            self.added, self.updated, self.unchanged, self.skipped, self.failed
        )
    }
}

/// Merge `raws` into `store`.
///
/// Items sharing an episode id collapse to the last one in `raws`; the
/// earlier ones count as skipped. The store is only changed in memory;
/// call [`EpisodeStore::dump`] to persist it.
pub fn ingest(
    store: &mut EpisodeStore,
    raws: &[RawEpisode],
    extractor: &TemporalExtractor,
    options: &IngestOptions,
) -> IngestReport {
    let mut report = IngestReport::default();
    let mut latest: BTreeMap<u32, &RawEpisode> = BTreeMap::new();

    for raw in raws {
        if !is_episode(&raw.title, &options.title_prefix) {
            debug!("Skipping non-episode item '{}'", raw.title);
            report.skipped += 1;
            continue;
        }
        if latest.insert(raw.episode, raw).is_some() {
            debug!("Superseded earlier item for episode {}", raw.episode);
            report.skipped += 1;
        }
    }

    let mut pending = Vec::new();
    for raw in latest.into_values() {
        let unchanged = store
            .get(raw.episode)
            .is_some_and(|existing| existing.checksum == raw.checksum());
        if unchanged {
            report.unchanged += 1;
        } else {
            pending.push(raw);
        }
    }

    let build = |raw: &&RawEpisode| Episode::from_raw(raw, extractor, &options.build);
    let built: Vec<_> = if options.parallel {
        pending.par_iter().map(build).collect()
    } else {
        pending.iter().map(build).collect()
    };

    for (raw, result) in pending.iter().zip(built) {
        match result {
            Ok(episode) => {
                info!("Extracted metadata for episode {}", episode.id);
                if store.upsert(episode).is_some() {
                    report.updated += 1;
                } else {
                    report.added += 1;
                }
            }
            Err(e) => {
                warn!("Failed to build episode {}: {}", raw.episode, e);
                report.failed += 1;
            }
        }
    }

    info!("Ingest finished: {}", report);
    report
}
