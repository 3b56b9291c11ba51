//! PAN card field extraction.
//!
//! The identifier and the birth date have rigid shapes and are taken from the
//! first match anywhere in the text. The name has no marker of its own, so it
//! is located by proximity: an all-caps name line is accepted only when a date
//! or the guardian label shows up within the next few lines.
use crate::config::ExtractionSettings;
use crate::models::{DocumentType, Field, FieldSet};
use crate::processing::patterns::{
    FATHERS_NAME_MARKER, PAN_NUMBER_PATTERN, SLASH_DATE_PATTERN, UPPERCASE_NAME_PATTERN,
};
use crate::processing::text::{looks_like_name, non_empty_lines};

/// Extract Name, Father's Name, Date of Birth and PAN Number using the
/// default heuristic constants.
pub fn extract_pan_details(text: &str) -> FieldSet {
    extract_pan_details_with(text, &ExtractionSettings::default())
}

pub fn extract_pan_details_with(text: &str, settings: &ExtractionSettings) -> FieldSet {
    let mut details = FieldSet::new(DocumentType::Pan);

    if let Some(pan) = PAN_NUMBER_PATTERN.find(text) {
        details.set(Field::PanNumber, pan.as_str());
    }

    if let Some(dob) = SLASH_DATE_PATTERN.find(text) {
        details.set(Field::DateOfBirth, dob.as_str());
    }

    let lines = non_empty_lines(text);
    if let Some((name, fathers_name)) = locate_name_block(&lines, settings) {
        details.set(Field::Name, name);
        if let Some(fathers_name) = fathers_name {
            details.set(Field::FathersName, fathers_name);
        }
    }

    log::debug!("PAN extraction found {}/{} fields", details.found_count(), details.len());
    details
}

/// First name candidate confirmed by a nearby marker, plus the guardian name
/// printed right below it when present.
fn locate_name_block<'a>(
    lines: &[&'a str],
    settings: &ExtractionSettings,
) -> Option<(&'a str, Option<&'a str>)> {
    for (i, line) in lines.iter().enumerate() {
        if !looks_like_name(line, &UPPERCASE_NAME_PATTERN, settings) {
            continue;
        }

        let following = &lines[i + 1..];
        let confirmed = following
            .iter()
            .take(settings.pan_confirmation_window)
            .any(|next| SLASH_DATE_PATTERN.is_match(next) || next.contains(FATHERS_NAME_MARKER));

        if confirmed {
            return Some((*line, guardian_name(following, settings)));
        }
    }
    None
}

// The guardian label may sit between the two names.
fn guardian_name<'a>(following: &[&'a str], settings: &ExtractionSettings) -> Option<&'a str> {
    let mut rest = following.iter();
    let mut candidate = rest.next()?;
    if candidate.contains(FATHERS_NAME_MARKER) {
        candidate = rest.next()?;
    }

    if looks_like_name(candidate, &UPPERCASE_NAME_PATTERN, settings) {
        Some(*candidate)
    } else {
        None
    }
}
