//! Aadhar card field extraction.
//!
//! On this layout the printed name comes before the birth-date area and the
//! address is a trailing block that ends at the identifier number, so both
//! positional fields are anchored on those markers instead of line offsets.
use crate::config::ExtractionSettings;
use crate::models::{DocumentType, Field, FieldSet};
use crate::processing::patterns::{
    AADHAR_NUMBER_PATTERN, ADDRESS_MARKER_PATTERN, BIRTH_MARKERS, DOB_LABEL_PATTERN,
    GENDER_PATTERN, MIXED_CASE_NAME_PATTERN, YEAR_OF_BIRTH_PATTERN,
};
use crate::processing::text::{
    join_address_lines, looks_like_name, non_empty_lines, strip_whitespace, title_case,
};

/// Birth information as printed: a full date, or only the year on older cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BirthDate<'a> {
    Full(&'a str),
    Year(&'a str),
}

impl<'a> BirthDate<'a> {
    fn raw(&self) -> &'a str {
        match self {
            BirthDate::Full(date) => date,
            BirthDate::Year(year) => year,
        }
    }

    fn display(&self) -> String {
        match self {
            BirthDate::Full(date) => date.to_string(),
            BirthDate::Year(year) => format!("Year: {}", year),
        }
    }
}

/// Extract Name, Date of Birth, Gender, Aadhar Number and Address using the
/// default heuristic constants.
pub fn extract_aadhar_details(text: &str) -> FieldSet {
    extract_aadhar_details_with(text, &ExtractionSettings::default())
}

pub fn extract_aadhar_details_with(text: &str, settings: &ExtractionSettings) -> FieldSet {
    let mut details = FieldSet::new(DocumentType::Aadhar);

    if let Some(number) = AADHAR_NUMBER_PATTERN.find(text) {
        details.set(Field::AadharNumber, strip_whitespace(number.as_str()));
    }

    if let Some(gender) = GENDER_PATTERN.find(text) {
        details.set(Field::Gender, title_case(gender.as_str()));
    }

    let birth = find_birth_date(text);
    if let Some(birth) = birth {
        details.set(Field::DateOfBirth, birth.display());
    }

    let lines = non_empty_lines(text);
    if let Some(name) = locate_name(&lines, birth, settings) {
        details.set(Field::Name, name);
    }

    if let Some(address) = extract_address(text, settings) {
        details.set(Field::Address, address);
    }

    log::debug!(
        "Aadhar extraction found {}/{} fields",
        details.found_count(),
        details.len()
    );
    details
}

fn find_birth_date(text: &str) -> Option<BirthDate<'_>> {
    if let Some(captures) = DOB_LABEL_PATTERN.captures(text) {
        return captures.get(1).map(|m| BirthDate::Full(m.as_str()));
    }
    YEAR_OF_BIRTH_PATTERN
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|m| BirthDate::Year(m.as_str()))
}

/// First name-shaped line above the birth-date area. Nothing past that area
/// is trusted.
fn locate_name<'a>(
    lines: &[&'a str],
    birth: Option<BirthDate<'_>>,
    settings: &ExtractionSettings,
) -> Option<&'a str> {
    for line in lines {
        let reached_birth_area = BIRTH_MARKERS.iter().any(|marker| line.contains(marker))
            || birth.map_or(false, |b| line.contains(b.raw()));
        if reached_birth_area {
            break;
        }
        if looks_like_name(line, &MIXED_CASE_NAME_PATTERN, settings) {
            return Some(*line);
        }
    }
    None
}

/// Everything after the "Address" label up to the next identifier number, or
/// the configured boundary, or the end of the text, joined into one line.
fn extract_address(text: &str, settings: &ExtractionSettings) -> Option<String> {
    let marker = ADDRESS_MARKER_PATTERN.find(text)?;
    let rest = &text[marker.end()..];
    let custom = settings.address_boundary();
    let boundary = custom.as_ref().unwrap_or(&*AADHAR_NUMBER_PATTERN);
    let end = boundary
        .find(rest)
        .map_or(rest.len(), |number| number.start());

    join_address_lines(&rest[..end], settings.address_min_line_length)
}
