// Lexical shapes used by the field extractors. Each pattern is compiled once.
use lazy_static::lazy_static;
use regex::Regex;

/// Literal label printed above the guardian name on PAN cards.
pub const FATHERS_NAME_MARKER: &str = "Father's Name";

/// Substrings that mark the birth-date area of an Aadhar card.
pub const BIRTH_MARKERS: [&str; 2] = ["DOB", "Birth"];

lazy_static! {
    // Shared
    pub static ref SLASH_DATE_PATTERN: Regex = Regex::new(r"[0-9]{2}/[0-9]{2}/[0-9]{4}").unwrap();

    // PAN card
    pub static ref PAN_NUMBER_PATTERN: Regex = Regex::new(r"[A-Z]{5}[0-9]{4}[A-Z]").unwrap();
    pub static ref UPPERCASE_NAME_PATTERN: Regex = Regex::new(r"^[A-Z\s.]+$").unwrap();

    // Aadhar card
    pub static ref AADHAR_NUMBER_PATTERN: Regex =
        Regex::new(r"[0-9]{4}\s?[0-9]{4}\s?[0-9]{4}").unwrap();
    pub static ref GENDER_PATTERN: Regex = Regex::new(r"(?i)\b(?:male|female|transgender)\b").unwrap();
    pub static ref DOB_LABEL_PATTERN: Regex =
        Regex::new(r"(?i)(?:DOB|Date of Birth)\s*:?\s*([0-9]{2}/[0-9]{2}/[0-9]{4})").unwrap();
    pub static ref YEAR_OF_BIRTH_PATTERN: Regex =
        Regex::new(r"(?i)Year of Birth\s*:?\s*([0-9]{4})").unwrap();
    pub static ref ADDRESS_MARKER_PATTERN: Regex = Regex::new(r"(?i)Address\s*:?\s*").unwrap();
    pub static ref MIXED_CASE_NAME_PATTERN: Regex = Regex::new(r"^[A-Za-z\s.]+$").unwrap();
}
