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

//! Persistence of episode records and incremental ingest of feed items.

pub mod ingest;
pub mod store;

pub use ingest::{IngestOptions, IngestReport, ingest};
pub use store::{EpisodeStore, read_raw_items};
