#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;

use command::{
    CommandStrategy, ExtractInput, ExtractStrategy, InfoStrategy, IngestStrategy, InitStrategy,
    VersionStrategy,
};

#[derive(Parser)]
#[command(name = "gagmap")]
#[command(about = "Episode metadata and historical date extraction", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract date and era phrases from a description
    Extract {
        /// Text to scan; read from stdin when omitted
        #[arg(short = 't', long)]
        text: Option<String>,

        /// Print every accepted match in scan order, without deduplication
        #[arg(long)]
        scan_order: bool,
    },
    /// Build the episode dump from the raw feed items
    Ingest {
        /// Config file to use instead of ~/gagmap/config.json
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,
    },
    /// Initialize configuration
    Init,
    /// Show effective configuration
    Info {
        /// Config file to use instead of ~/gagmap/config.json
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { text, scan_order } => {
            ExtractStrategy.execute(ExtractInput { text, scan_order })
        }
        Commands::Ingest { config } => IngestStrategy.execute(config),
        Commands::Init => InitStrategy.execute(()),
        Commands::Info { config } => InfoStrategy.execute(config),
        Commands::Version => VersionStrategy.execute(()),
    }
}
