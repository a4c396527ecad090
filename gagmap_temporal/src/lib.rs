#![warn(
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

//! Extraction of German historical date and era phrases.
//!
//! Text is scanned with an ordered [`PatternRegistry`]; every accepted match
//! is resolved into a [`TemporalReference`] carrying an inclusive UTC
//! interval. Phrases marked with `vdZw` ("vor der Zeitwende") resolve to
//! negative (proleptic, astronomical) years.
//!
//! ```
//! use gagmap_temporal::{Mode, TemporalExtractor};
//!
//! let extractor = TemporalExtractor::new()?;
//! let refs = extractor.extract("im 19. Jahrhundert vdZw")?;
//! assert_eq!(refs[0].mode(), Mode::Century);
//! assert!(refs[0].is_bce());
//! # Ok::<(), gagmap_temporal::Error>(())
//! ```

mod dedup;
pub mod engine;
mod error;
pub mod reference;
pub mod registry;
pub mod resolver;
pub mod scanner;

pub use dedup::dedup_sorted;
pub use engine::{Extraction, TemporalExtractor};
pub use error::{Error, Result};
pub use reference::{Mode, TemporalReference};
pub use registry::{MONTH_NAMES, PatternDef, PatternRegistry, default_patterns};
pub use resolver::{Resolution, has_era_marker, normalize, resolve};
pub use scanner::{Matches, RawMatch, scan};
