//! Text cleanup applied to feed items before extraction.

use once_cell::sync::Lazy;
use regex::Regex;

/// Line marker of the ad block that follows the episode description.
const AD_MARKER: &str = "aus unserer werbung";

/// Line prefix of trailing blocks (literature, related episodes).
const BLOCK_MARKER: &str = "//";

#[expect(clippy::expect_used, reason = "literal pattern is known to compile")]
static TITLE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"GAG[0-9][0-9][0-9]?: ").expect("valid regex"));

/// Whether a feed item with this title is a regular episode.
///
/// Feedback and bonus items use other prefixes and are skipped.
#[must_use]
pub fn is_episode(title: &str, prefix: &str) -> bool {
    title.starts_with(prefix)
}

/// Drop all whitespace except plain spaces, collapse space runs and trim.
#[must_use]
pub fn normalize_whitespace(line: &str) -> String {
    let kept: String = line
        .chars()
        .filter(|c| *c == ' ' || !c.is_whitespace())
        .collect();
    kept.split(' ')
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reduce a raw description to the single line the extractor expects.
///
/// Keeps non-blank lines up to the first ad or trailing block, normalizes
/// their whitespace and joins them with a single space.
#[must_use]
pub fn normalize_description(description: &str) -> String {
    description
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take_while(|line| {
            !line.to_lowercase().contains(AD_MARKER) && !line.starts_with(BLOCK_MARKER)
        })
        .map(normalize_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip the `GAG<nr>: ` prefix from an episode title.
#[must_use]
pub fn normalize_title(title: &str) -> String {
    normalize_whitespace(&TITLE_PREFIX.replace_all(title, ""))
}
