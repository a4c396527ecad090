use std::path::PathBuf;

use gagmap_config::Config;
use gagmap_store::{EpisodeStore, IngestOptions, ingest, read_raw_items};
use gagmap_temporal::TemporalExtractor;
use tracing::info;

/// Strategy for the incremental ingest run.
///
/// Loads the episode dump and the raw feed items named in the config,
/// rebuilds new or changed episodes and rewrites the dump.
#[derive(Debug, Clone, Copy)]
pub struct IngestStrategy;

impl super::CommandStrategy for IngestStrategy {
    /// Optional config file path.
    type Input = Option<PathBuf>;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let (config, _) = super::load_config(input.as_deref())?;

        let mut store = EpisodeStore::open(config.episodes_path())?;
        let raws = read_raw_items(&config.raw_items_path())?;
        info!("Ingesting {} raw items", raws.len());

        let extractor = TemporalExtractor::new()?;
        let report = ingest(&mut store, &raws, &extractor, &ingest_options(&config));
        store.dump()?;

        info!(
            "Wrote {} episodes to {}",
            store.len(),
            store.path().display()
        );
        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    }
}

fn ingest_options(config: &Config) -> IngestOptions {
    IngestOptions {
        title_prefix: config.feed.title_prefix.clone(),
        build: config.build_options(),
        parallel: config.extraction.parallel,
    }
}
