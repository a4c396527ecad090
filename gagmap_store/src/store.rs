//! JSONL episode dump.
//!
//! One JSON [`Episode`] per line, ordered by id descending. The whole file is
//! read on open and rewritten on [`EpisodeStore::dump`].

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::Context;
use gagmap_core::{Episode, RawEpisode};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

/// In-memory view of the episode dump, keyed by episode id.
#[derive(Debug)]
pub struct EpisodeStore {
    path: PathBuf,
    episodes: BTreeMap<u32, Episode>,
}

impl EpisodeStore {
    /// Open the dump at `path`, creating an empty file if it does not exist.
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open {}", path.display()))?;

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let episodes = parse_lines::<Episode>(&content, &path)?
            .into_iter()
            .map(|episode| (episode.id, episode))
            .collect::<BTreeMap<_, _>>();

        info!("Loaded {} episodes from {}", episodes.len(), path.display());
        Ok(Self { path, episodes })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Episode> {
        self.episodes.get(&id)
    }

    /// Insert or replace an episode, returning the replaced one.
    pub fn upsert(&mut self, episode: Episode) -> Option<Episode> {
        self.episodes.insert(episode.id, episode)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// Episodes by id, newest first.
    pub fn episodes(&self) -> impl Iterator<Item = &Episode> {
        self.episodes.values().rev()
    }

    /// Rewrite the dump file from the in-memory state.
    pub fn dump(&self) -> anyhow::Result<()> {
        let mut content = String::new();
        for episode in self.episodes() {
            content.push_str(&serde_json::to_string(episode)?);
            content.push('\n');
        }
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        debug!("Dumped {} episodes to {}", self.len(), self.path.display());
        Ok(())
    }
}

/// Read the raw feed items at `path`, one JSON object per line.
pub fn read_raw_items(path: &Path) -> anyhow::Result<Vec<RawEpisode>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read raw items from {}", path.display()))?;
    let items = parse_lines(&content, path)?;
    debug!("Read {} raw items from {}", items.len(), path.display());
    Ok(items)
}

fn parse_lines<T: DeserializeOwned>(content: &str, path: &Path) -> anyhow::Result<Vec<T>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("{}:{}: malformed record", path.display(), index + 1))
        })
        .collect()
}
