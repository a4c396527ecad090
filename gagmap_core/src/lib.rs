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

pub mod episode;
mod error;
pub mod links;
pub mod text;
pub mod util;

pub use episode::{BuildOptions, Episode, Location, RawEpisode};
pub use error::{Error, Result};
pub use links::extract_episode_links;
pub use text::{is_episode, normalize_description, normalize_title, normalize_whitespace};
pub use util::content_hash;
