use std::io::Read;

use gagmap_core::normalize_description;
use gagmap_temporal::{TemporalExtractor, TemporalReference};
use tracing::info;

/// Input parameters for the Extract command strategy.
#[derive(Debug, Clone)]
pub struct ExtractInput {
    /// Text to scan; stdin is read when `None`.
    pub text: Option<String>,
    /// Print resolved matches in scan order instead of the deduplicated view.
    pub scan_order: bool,
}

/// Strategy for extracting temporal references from a single text.
///
/// The text is normalized like an episode description before scanning and
/// the references are printed to stdout as pretty JSON.
#[derive(Debug, Clone, Copy)]
pub struct ExtractStrategy;

impl super::CommandStrategy for ExtractStrategy {
    type Input = ExtractInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let text = match input.text {
            Some(text) => text,
            None => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
        };
        let description = normalize_description(&text);

        let extractor = TemporalExtractor::new()?;
        let references: Vec<TemporalReference> = if input.scan_order {
            extractor
                .resolve_all(&description)
                .into_iter()
                .collect::<gagmap_temporal::Result<_>>()?
        } else {
            extractor.extract(&description)?
        };

        info!("Found {} temporal references", references.len());
        println!("{}", serde_json::to_string_pretty(&references)?);
        Ok(())
    }
}
