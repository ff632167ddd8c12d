//! Reading-time estimation
//!
//! Words are counted by splitting on the literal space character only.
//! Tabs and newlines do not separate words, consecutive spaces yield empty
//! tokens that still count, and markup is counted as-is. This keeps the
//! minute values identical to the ones the blog has always published.

use crate::types::Section;

/// Reading speed used when none is configured
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 150;

/// Count the space-separated tokens in a string
///
/// An empty string counts as one token.
pub fn count_words(text: &str) -> usize {
    text.split(' ').count()
}

/// Total word count of a document: every heading plus every body block
pub fn total_words(content: &[Section]) -> usize {
    content
        .iter()
        .map(|section| {
            let body: usize = section.body.iter().map(|block| count_words(&block.text)).sum();
            count_words(&section.heading) + body
        })
        .sum()
}

/// Estimated minutes to read `content` at `words_per_minute`
///
/// The quotient is rounded to the nearest integer with halves rounded up, so
/// an empty document reads in 0 minutes. A speed of 0 is treated as 1.
pub fn estimate_read_minutes(content: &[Section], words_per_minute: u32) -> u64 {
    let words = total_words(content) as f64;
    let speed = f64::from(words_per_minute.max(1));
    (words / speed).round() as u64
}

/// Estimate at [`DEFAULT_WORDS_PER_MINUTE`]
pub fn estimate_read_minutes_default(content: &[Section]) -> u64 {
    estimate_read_minutes(content, DEFAULT_WORDS_PER_MINUTE)
}

/// Estimate for an optional content tree; absent content reads in 0 minutes
pub fn estimate_optional(content: Option<&[Section]>, words_per_minute: u32) -> u64 {
    content.map_or(0, |c| estimate_read_minutes(c, words_per_minute))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TextBlock;
    use test_case::test_case;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test_case("", 1 ; "empty string is one token")]
    #[test_case("one", 1 ; "single word")]
    #[test_case("One Two Three", 3 ; "three words")]
    #[test_case("a  b", 3 ; "double space yields empty token")]
    #[test_case(" leading", 2 ; "leading space")]
    #[test_case("tab\tseparated\nlines", 1 ; "tabs and newlines do not split")]
    #[test_case("<strong>bold</strong> text", 2 ; "markup is not stripped")]
    fn test_count_words(text: &str, expected: usize) {
        assert_eq!(count_words(text), expected);
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(estimate_read_minutes_default(&[]), 0);
        assert_eq!(total_words(&[]), 0);
    }

    #[test]
    fn test_heading_only_section() {
        let content = vec![Section::new("One Two Three", vec![])];
        assert_eq!(total_words(&content), 3);
        assert_eq!(estimate_read_minutes_default(&content), 0);
    }

    #[test]
    fn test_exactly_one_minute() {
        // 1 heading word + 149 body words
        let content = vec![Section::new(
            "Intro",
            vec![TextBlock::paragraph(words(100)), TextBlock::paragraph(words(49))],
        )];
        assert_eq!(total_words(&content), 150);
        assert_eq!(estimate_read_minutes_default(&content), 1);
    }

    #[test]
    fn test_half_rounds_up() {
        let content = vec![
            Section::new("First part", vec![TextBlock::paragraph(words(110))]),
            Section::new("Second part", vec![TextBlock::paragraph(words(111))]),
        ];
        assert_eq!(total_words(&content), 225);
        assert_eq!(estimate_read_minutes_default(&content), 2);
    }

    #[test_case(74, 0 ; "just under half")]
    #[test_case(75, 1 ; "exactly half")]
    #[test_case(224, 1 ; "just under one and a half")]
    #[test_case(1500, 10 ; "ten minutes")]
    fn test_rounding(total: usize, expected: u64) {
        let content = vec![Section::new(words(total), vec![])];
        assert_eq!(estimate_read_minutes_default(&content), expected);
    }

    #[test]
    fn test_custom_speed() {
        let content = vec![Section::new(words(300), vec![])];
        assert_eq!(estimate_read_minutes(&content, 100), 3);
        assert_eq!(estimate_read_minutes(&content, 0), 300);
    }

    #[test]
    fn test_absent_content() {
        assert_eq!(estimate_optional(None, 150), 0);
        let content = vec![Section::new(words(150), vec![])];
        assert_eq!(estimate_optional(Some(&content), 150), 1);
    }
}
