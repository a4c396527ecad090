use std::path::{Path, PathBuf};

use gagmap_temporal::PatternRegistry;

/// Strategy for displaying configuration information.
///
/// Prints the effective config, whether the data files exist and the
/// pattern registry in priority order.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    /// Optional config file path.
    type Input = Option<PathBuf>;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let (config, path) = super::load_config(input.as_deref())?;

        println!("=== gagmap Configuration ===\n");
        println!("Config File: {}", path.display());
        println!();

        println!("Data:");
        println!("  Directory: {}", config.data.dir.display());
        println!("  Raw Items: {}", describe(&config.raw_items_path()));
        println!("  Episodes: {}", describe(&config.episodes_path()));
        println!();

        println!("Feed:");
        println!("  Title Prefix: {}", config.feed.title_prefix);
        println!("  Website URL Base: {}", config.feed.website_url_base);
        println!();

        println!("Extraction:");
        println!("  Strict: {}", config.extraction.strict);
        println!("  Parallel: {}", config.extraction.parallel);
        println!("  Patterns (highest priority first):");
        for entry in PatternRegistry::german()?.entries() {
            println!("    {}. {}", entry.priority() + 1, entry.mode());
        }

        Ok(())
    }
}

fn describe(path: &Path) -> String {
    if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (missing)", path.display())
    }
}
