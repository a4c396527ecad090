//! Cross-references between episodes.
//!
//! Show notes link other episodes through three URL shapes:
//! `gadg.fm/362`, `geschichte.fm/podcast/zs104` and `geschichte.fm/archiv/gag07`.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

#[expect(clippy::expect_used, reason = "literal pattern is known to compile")]
static EPISODE_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:gadg\.fm/|geschichte\.fm/podcast/zs|geschichte\.fm/archiv/gag)([0-9][0-9][0-9]?)")
        .expect("valid regex")
});

/// Ids of the episodes linked from `content`, sorted and without `own_id`.
#[must_use]
pub fn extract_episode_links(content: &str, own_id: u32) -> Vec<u32> {
    EPISODE_LINK
        .captures_iter(content)
        .filter_map(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
        .filter(|id| *id != own_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
