//! Extraction facade tying the registry, scanner and resolver together.
//!
//! The extractor owns an immutable [`PatternRegistry`] and keeps no other
//! state, so one instance can be shared by reference across threads.

use tracing::{debug, warn};

use crate::dedup::dedup_sorted;
use crate::error::{Error, Result};
use crate::reference::TemporalReference;
use crate::registry::PatternRegistry;
use crate::scanner::{RawMatch, scan};

/// Result of a lenient extraction.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Deduplicated references, ordered by mode.
    pub references: Vec<TemporalReference>,
    /// One entry per match that failed to resolve, in scan order.
    pub failures: Vec<Error>,
}

impl Extraction {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Temporal reference extractor.
#[derive(Debug, Clone)]
pub struct TemporalExtractor {
    registry: PatternRegistry,
}

impl TemporalExtractor {
    /// Create an extractor with the German registry.
    ///
    /// # Errors
    /// Returns an error if a built-in pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self::with_registry(PatternRegistry::german()?))
    }

    #[must_use]
    pub const fn with_registry(registry: PatternRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub const fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    /// Raw scanner output, before resolution.
    #[must_use]
    pub fn scan(&self, text: &str) -> Vec<RawMatch> {
        scan(&self.registry, text).collect()
    }

    /// Resolve every accepted match in scan order, without deduplication.
    ///
    /// A failing match yields an `Err` in its slot; later matches are still
    /// resolved.
    #[must_use]
    pub fn resolve_all(&self, text: &str) -> Vec<Result<TemporalReference>> {
        scan(&self.registry, text)
            .map(|m| TemporalReference::resolve(&m.literal, m.mode, m.is_bce))
            .collect()
    }

    /// Extract the deduplicated, mode-ordered references of `text`.
    ///
    /// # Errors
    /// Returns the first resolution error in scan order.
    pub fn extract(&self, text: &str) -> Result<Vec<TemporalReference>> {
        let references = self
            .resolve_all(text)
            .into_iter()
            .collect::<Result<Vec<_>>>()?;
        let total = references.len();
        let unique = dedup_sorted(references);
        debug!(
            "Extracted {} temporal references ({} matches)",
            unique.len(),
            total
        );
        Ok(unique)
    }

    /// Like [`extract`](Self::extract), but collects failing matches instead
    /// of stopping at the first one.
    #[must_use]
    pub fn extract_lenient(&self, text: &str) -> Extraction {
        let mut references = Vec::new();
        let mut failures = Vec::new();

        for resolved in self.resolve_all(text) {
            match resolved {
                Ok(reference) => references.push(reference),
                Err(e) => {
                    warn!("Skipping unresolvable temporal literal: {}", e);
                    failures.push(e);
                }
            }
        }

        let references = dedup_sorted(references);
        debug!(
            "Extracted {} temporal references, {} failures",
            references.len(),
            failures.len()
        );

        Extraction {
            references,
            failures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::Mode;

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn extractor() -> TemporalExtractor {
        TemporalExtractor::new().expect("german registry should compile")
    }

    #[test]
    fn test_scan_order_differs_from_output_order() {
        let extractor = extractor();
        let text = "das 19. Jahrhundert, die 1980er Jahre und der 14. Januar 2022";

        // Day outranks everything, so the scan starts there and never comes back.
        let scanned: Vec<Mode> = extractor.scan(text).into_iter().map(|m| m.mode).collect();
        assert_eq!(scanned, vec![Mode::Day]);

        let text = "im Jahr 1848 und im 19. Jahrhundert";
        let scanned: Vec<Mode> = extractor.scan(text).into_iter().map(|m| m.mode).collect();
        assert_eq!(scanned, vec![Mode::Century]);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_extract_sorts_by_mode() {
        let extractor = extractor();
        let refs = extractor
            .extract("das 19. Jahrhundert und danach Jahr 1900")
            .expect("extraction should succeed");
        let modes: Vec<Mode> = refs.iter().map(TemporalReference::mode).collect();
        assert_eq!(modes, vec![Mode::Year, Mode::Century]);

        let raw: Vec<Mode> = extractor
            .resolve_all("das 19. Jahrhundert und danach Jahr 1900")
            .into_iter()
            .map(|r| r.expect("resolves").mode())
            .collect();
        assert_eq!(raw, vec![Mode::Century, Mode::Year]);
    }

    #[test]
    fn test_invalid_date_fails_strict_extraction() {
        let result = extractor().extract("am 30. Februar 2022 passierte nichts");
        match result {
            Err(Error::InvalidDate { literal, mode, .. }) => {
                assert_eq!(literal, "30. Februar 2022");
                assert_eq!(mode, Mode::Day);
            }
            other => panic!("expected InvalidDate, got {other:?}"),
        }
    }

    #[test]
    fn test_lenient_extraction_keeps_later_matches() {
        let extraction = extractor().extract_lenient("am 30. Februar 2022 und am 1. März 2022");
        assert!(!extraction.is_clean());
        assert_eq!(extraction.failures.len(), 1);
        assert_eq!(extraction.failures[0].literal(), Some("30. Februar 2022"));
        assert_eq!(extraction.references.len(), 1);
        assert_eq!(extraction.references[0].literal(), "1. März 2022");
    }

    #[test]
    fn test_no_references() {
        let extraction = extractor().extract_lenient("Eine Folge ganz ohne Datum.");
        assert!(extraction.is_clean());
        assert!(extraction.references.is_empty());
    }

    #[test]
    fn test_extractor_is_shareable() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<TemporalExtractor>();
    }
}
