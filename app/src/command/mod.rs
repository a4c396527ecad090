//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate unit-struct strategy with its own input type;
//! `main` dispatches to them without trait objects.

use std::path::{Path, PathBuf};

use gagmap_config::Config;
use tracing::info;

mod extract;
mod info;
mod ingest;
mod init;
mod version;

pub use extract::{ExtractInput, ExtractStrategy};
pub use info::InfoStrategy;
pub use ingest::IngestStrategy;
pub use init::InitStrategy;
pub use version::VersionStrategy;

/// Load the config from `path`, or from the default location.
fn load_config(path: Option<&Path>) -> anyhow::Result<(Config, PathBuf)> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::default_path()?,
    };
    let config = Config::load_from(&path)?;
    info!("Loaded config from {}", path.display());
    Ok((config, path))
}

/// Core trait defining the contract for all command strategies.
///
/// Adding a command means adding a strategy type that implements this trait
/// and a match arm in `main`.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
