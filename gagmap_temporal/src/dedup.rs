//! Deduplication and output ordering of resolved references.

use std::collections::HashSet;

use crate::reference::TemporalReference;

/// Drop repeated references and order the rest by mode.
///
/// The first occurrence of a duplicate is kept. The sort is stable, so
/// references of the same mode stay in scan order.
#[must_use]
pub fn dedup_sorted(
    references: impl IntoIterator<Item = TemporalReference>,
) -> Vec<TemporalReference> {
    let mut seen = HashSet::new();
    let mut unique: Vec<TemporalReference> = references
        .into_iter()
        .filter(|reference| seen.insert(reference.clone()))
        .collect();
    unique.sort_by_key(TemporalReference::mode);
    unique
}
