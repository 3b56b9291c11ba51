// Text cleanup shared by the PAN and Aadhar extractors.
use regex::Regex;

use crate::config::ExtractionSettings;

/// Trimmed, non-empty lines in their original order.
pub fn non_empty_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

pub fn token_count(line: &str) -> usize {
    line.split_whitespace().count()
}

/// A line that looks like a full name: only the characters `shape` allows,
/// long enough, with at least the configured number of words, and not issuer
/// boilerplate.
pub fn looks_like_name(line: &str, shape: &Regex, settings: &ExtractionSettings) -> bool {
    line.chars().count() >= settings.min_name_length
        && shape.is_match(line)
        && token_count(line) >= settings.min_name_tokens
        && !settings.is_header_line(line)
}

/// "mALE" -> "Male"
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Collapse a multi-line address span into a single comma separated line.
/// Lines shorter than `min_line_length` are dropped as noise. Returns `None`
/// when nothing survives.
pub fn join_address_lines(span: &str, min_line_length: usize) -> Option<String> {
    let joined = span
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && line.chars().count() >= min_line_length)
        .collect::<Vec<_>>()
        .join(", ")
        .replace(" ,", ",");
    let joined = joined.trim();

    if joined.is_empty() {
        None
    } else {
        Some(joined.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::patterns::{MIXED_CASE_NAME_PATTERN, UPPERCASE_NAME_PATTERN};
    use rstest::rstest;

    #[test]
    fn test_non_empty_lines() {
        let lines = non_empty_lines("  first \n\n\t\nsecond\r\n   ");
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[rstest]
    #[case("MALE", "Male")]
    #[case("male", "Male")]
    #[case("fEMALE", "Female")]
    #[case("Transgender", "Transgender")]
    #[case("", "")]
    fn test_title_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(title_case(input), expected);
    }

    #[rstest]
    #[case("RAJESH KUMAR", true)]
    #[case("RAJESH", false)]
    #[case("AB C", false)]
    #[case("INCOME TAX DEPARTMENT", false)]
    #[case("Rajesh Kumar", false)]
    fn test_uppercase_name_lines(#[case] line: &str, #[case] expected: bool) {
        let settings = ExtractionSettings::default();
        assert_eq!(looks_like_name(line, &UPPERCASE_NAME_PATTERN, &settings), expected);
    }

    #[test]
    fn test_mixed_case_name_rejects_header() {
        let settings = ExtractionSettings::default();
        assert!(looks_like_name("Jane Smith", &MIXED_CASE_NAME_PATTERN, &settings));
        assert!(!looks_like_name("Government of India", &MIXED_CASE_NAME_PATTERN, &settings));
    }

    #[test]
    fn test_join_address_lines_drops_noise() {
        let joined = join_address_lines("12 Main St \n ab\n\nSpringfield\n", 3);
        assert_eq!(joined.as_deref(), Some("12 Main St, Springfield"));
    }

    #[test]
    fn test_join_address_lines_empty() {
        assert_eq!(join_address_lines(" \n a \n", 3), None);
    }

    #[test]
    fn test_strip_whitespace() {
        assert_eq!(strip_whitespace("1234 5678\n9012"), "123456789012");
    }
}
