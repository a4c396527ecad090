//! Priority-ordered scan over normalized text.
//!
//! # Algorithm
//! 1. Start with a cursor at offset 0.
//! 2. Walk the registry from the highest priority down; the first pattern
//!    with any match starting at or after the cursor wins, wherever in the
//!    remaining text that match lies.
//! 3. Emit the match, move the cursor to its end and restart at step 2.
//! 4. Stop once no pattern matches at or after the cursor.
//!
//! Priority beats text position: a lower-priority phrase that sits before
//! the next higher-priority phrase is jumped over and lost for good.

use tracing::trace;

use crate::reference::Mode;
use crate::registry::PatternRegistry;
use crate::resolver::has_era_marker;

/// A literal accepted by the scanner, not yet resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch {
    /// Registry position of the pattern that produced the match.
    pub priority: usize,
    pub mode: Mode,
    pub literal: String,
    /// Byte offset of the first matched character.
    pub start: usize,
    /// Byte offset one past the last matched character.
    pub end: usize,
    pub is_bce: bool,
}

/// Lazy iterator over the matches of one scan.
#[derive(Debug)]
pub struct Matches<'r, 't> {
    registry: &'r PatternRegistry,
    text: &'t str,
    cursor: usize,
}

/// Scan `text` with `registry`.
#[must_use]
pub const fn scan<'r, 't>(registry: &'r PatternRegistry, text: &'t str) -> Matches<'r, 't> {
    Matches {
        registry,
        text,
        cursor: 0,
    }
}

impl Matches<'_, '_> {
    /// Current cursor position in bytes.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Iterator for Matches<'_, '_> {
    type Item = RawMatch;

    fn next(&mut self) -> Option<Self::Item> {
        let (entry, found) = self.registry.entries().iter().find_map(|entry| {
            entry
                .regex()
                .find_at(self.text, self.cursor)
                .filter(|m| !m.is_empty())
                .map(|m| (entry, m))
        })?;

        self.cursor = found.end();

        let literal = found.as_str().to_string();
        trace!(
            "Accepted {} literal '{}' at {}..{}",
            entry.mode(),
            literal,
            found.start(),
            found.end()
        );

        Some(RawMatch {
            priority: entry.priority(),
            mode: entry.mode(),
            is_bce: has_era_marker(&literal),
            literal,
            start: found.start(),
            end: found.end(),
        })
    }
}

impl std::iter::FusedIterator for Matches<'_, '_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PatternDef;

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn registry() -> PatternRegistry {
        PatternRegistry::german().expect("german registry should compile")
    }

    fn literals(text: &str) -> Vec<(Mode, String)> {
        scan(&registry(), text)
            .map(|m| (m.mode, m.literal))
            .collect()
    }

    #[test]
    fn test_day_suffix_is_not_matched_as_month() {
        assert_eq!(
            literals("lorem 14. Januar 2022 ipsum 4. Februar 2022"),
            vec![
                (Mode::Day, "14. Januar 2022".to_string()),
                (Mode::Day, "4. Februar 2022".to_string()),
            ]
        );
    }

    #[test]
    fn test_relative_decade_wins_over_its_parts() {
        assert_eq!(
            literals("in den 60er Jahren des 19. Jahrhunderts vdZw und danach"),
            vec![(
                Mode::DecadeRelative,
                "60er Jahren des 19. Jahrhunderts vdZw".to_string()
            )]
        );
    }

    #[test]
    fn test_higher_priority_later_in_text_skips_earlier_phrase() {
        // The year sits before the day, but the day pattern is checked first
        // and matches further on, so the cursor jumps past the year.
        assert_eq!(
            literals("Im Jahr 1848 und am 14. Januar 2022"),
            vec![(Mode::Day, "14. Januar 2022".to_string())]
        );
    }

    #[test]
    fn test_lower_priority_after_cursor_is_recovered() {
        assert_eq!(
            literals("Jahr 1848, dann 14. Januar 2022 und Jahr 1900"),
            vec![
                (Mode::Day, "14. Januar 2022".to_string()),
                (Mode::Year, "Jahr 1900".to_string()),
            ]
        );
    }

    #[test]
    fn test_each_jump_can_skip_again() {
        // After the day, the century outranks the year that precedes it.
        assert_eq!(
            literals("Jahr 1848, dann 14. Januar 2022, dann Jahr 1900 und das 19. Jahrhundert"),
            vec![
                (Mode::Day, "14. Januar 2022".to_string()),
                (Mode::Century, "19. Jahrhundert".to_string()),
            ]
        );
    }

    #[test]
    fn test_cursor_and_offsets() {
        let registry = registry();
        let text = "seit Oktober 2023";
        let mut matches = scan(&registry, text);
        let first = matches.next();
        assert_eq!(
            first,
            Some(RawMatch {
                priority: 1,
                mode: Mode::Month,
                literal: "Oktober 2023".to_string(),
                start: 5,
                end: text.len(),
                is_bce: false,
            })
        );
        assert_eq!(matches.cursor(), text.len());
        assert_eq!(matches.next(), None);
        assert_eq!(matches.next(), None);
    }

    #[test]
    fn test_era_flag_per_occurrence() {
        let flags: Vec<bool> = scan(&registry(), "Jahr 300 vdZw und Jahr 300")
            .map(|m| m.is_bce)
            .collect();
        assert_eq!(flags, vec![true, false]);
    }

    #[test]
    fn test_non_ascii_text_offsets_stay_on_char_boundaries() {
        let found = literals("Über die Zeit: März 1848 – Jahr 1849 ätsch");
        assert_eq!(
            found,
            vec![
                (Mode::Month, "März 1848".to_string()),
                (Mode::Year, "Jahr 1849".to_string()),
            ]
        );
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_empty_matching_pattern_cannot_stall() {
        let registry = PatternRegistry::new(&[
            PatternDef::new(r"x*", Mode::Year),
            PatternDef::new(r"Jahr \d+", Mode::Year),
        ])
        .expect("patterns should compile");
        let found: Vec<String> = scan(&registry, "Jahr 1 Jahr 2").map(|m| m.literal).collect();
        assert_eq!(found, vec!["Jahr 1".to_string(), "Jahr 2".to_string()]);
    }

    #[test]
    fn test_unicode_digits_do_not_move_cursor() {
        assert_eq!(
            literals("im ١٩. Jahrhundert und im Jahr 1848"),
            vec![(Mode::Year, "Jahr 1848".to_string())]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(literals("").is_empty());
    }
}
