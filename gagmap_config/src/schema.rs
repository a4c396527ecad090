use gagmap_core::BuildOptions;
use gagmap_core::episode::DEFAULT_WEBSITE_URL_BASE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_DIR: &str = "gagmap";
const CONFIG_FILE: &str = "config.json";

const CONFIG_TEMPLATE: &str = r#"{
  "data": {
    "dir": "data",
    "raw_items_file": "items.jsonl",
    "episodes_file": "episodes.jsonl"
  },
  "feed": {
    "title_prefix": "GAG",
    "website_url_base": "https://gadg.fm/"
  },
  "extraction": {
    "strict": true,
    "parallel": true
  }
}
"#;

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DataConfig {
    /// Directory holding the raw items and the episode dump.
    #[serde(default = "DataConfig::default_dir")]
    pub dir: PathBuf,
    /// JSONL file of raw feed items, relative to `dir`.
    #[serde(default = "DataConfig::default_raw_items_file")]
    pub raw_items_file: String,
    /// JSONL episode dump, relative to `dir`.
    #[serde(default = "DataConfig::default_episodes_file")]
    pub episodes_file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: Self::default_dir(),
            raw_items_file: Self::default_raw_items_file(),
            episodes_file: Self::default_episodes_file(),
        }
    }
}

impl DataConfig {
    fn default_dir() -> PathBuf {
        PathBuf::from("data")
    }

    fn default_raw_items_file() -> String {
        "items.jsonl".to_string()
    }

    fn default_episodes_file() -> String {
        "episodes.jsonl".to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// Title prefix of regular episodes.
    #[serde(default = "FeedConfig::default_title_prefix")]
    pub title_prefix: String,
    #[serde(default = "FeedConfig::default_website_url_base")]
    pub website_url_base: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            title_prefix: Self::default_title_prefix(),
            website_url_base: Self::default_website_url_base(),
        }
    }
}

impl FeedConfig {
    fn default_title_prefix() -> String {
        "GAG".to_string()
    }

    fn default_website_url_base() -> String {
        DEFAULT_WEBSITE_URL_BASE.to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// Reject an episode whose description has an unresolvable date phrase.
    #[serde(default = "ExtractionConfig::default_strict")]
    pub strict: bool,
    /// Build changed episodes on the rayon thread pool.
    #[serde(default = "ExtractionConfig::default_parallel")]
    pub parallel: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            strict: Self::default_strict(),
            parallel: Self::default_parallel(),
        }
    }
}

impl ExtractionConfig {
    const fn default_strict() -> bool {
        true
    }

    const fn default_parallel() -> bool {
        true
    }
}

impl Config {
    /// Load the config from `~/gagmap/config.json`.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'gagmap init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(config_path)?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Invalid config file {}: {e}", config_path.display())
        })?;
        debug!("Loaded config from {}", config_path.display());

        Ok(config)
    }

    pub fn default_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR))
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_path = Self::ensure_config_dir()?.join(CONFIG_FILE);
        Self::create_config_at(&config_path)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Put the raw feed items (one JSON object per line) into data/items.jsonl");
        println!("   2. Run 'gagmap ingest' to build data/episodes.jsonl");
        println!("   3. Run 'gagmap extract --text \"...\"' to try the date extraction");
        println!();
        println!("🔧 Configuration options:");
        println!("   - data.dir: directory of the raw items and the episode dump");
        println!("   - extraction.strict: reject episodes with unresolvable date phrases");
        println!("   - extraction.parallel: build changed episodes in parallel");
        println!();
        Ok(())
    }

    /// Write the config template to `config_path`, refusing to overwrite.
    pub fn create_config_at(config_path: &Path) -> anyhow::Result<()> {
        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        std::fs::write(config_path, CONFIG_TEMPLATE)?;
        Ok(())
    }

    #[must_use]
    pub fn raw_items_path(&self) -> PathBuf {
        self.data.dir.join(&self.data.raw_items_file)
    }

    #[must_use]
    pub fn episodes_path(&self) -> PathBuf {
        self.data.dir.join(&self.data.episodes_file)
    }

    #[must_use]
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            strict: self.extraction.strict,
            website_url_base: self.feed.website_url_base.clone(),
        }
    }
}
