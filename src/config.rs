use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::utils::KycError;

/// Lines after a PAN name candidate searched for a date or guardian label.
pub const DEFAULT_PAN_CONFIRMATION_WINDOW: usize = 3;
pub const DEFAULT_MIN_NAME_LENGTH: usize = 5;
pub const DEFAULT_MIN_NAME_TOKENS: usize = 2;
/// Address lines shorter than this are treated as OCR noise.
pub const DEFAULT_ADDRESS_MIN_LINE_LENGTH: usize = 3;
pub const DEFAULT_OCR_LANGUAGE: &str = "eng";

const DEFAULT_HEADER_PHRASES: [&str; 6] = [
    "INCOME TAX",
    "GOVT",
    "GOVERNMENT",
    "PERMANENT ACCOUNT",
    "UNIQUE IDENTIFICATION",
    "AUTHORITY OF INDIA",
];

/// Tunable constants of the positional heuristics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionSettings {
    pub pan_confirmation_window: usize,
    pub min_name_length: usize,
    pub min_name_tokens: usize,
    pub address_min_line_length: usize,
    /// Issuer boilerplate that is never accepted as a name.
    pub header_phrases: Vec<String>,
    /// Regex ending the address block. Unset means the next 12-digit
    /// identifier.
    pub address_boundary_pattern: Option<String>,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        ExtractionSettings {
            pan_confirmation_window: DEFAULT_PAN_CONFIRMATION_WINDOW,
            min_name_length: DEFAULT_MIN_NAME_LENGTH,
            min_name_tokens: DEFAULT_MIN_NAME_TOKENS,
            address_min_line_length: DEFAULT_ADDRESS_MIN_LINE_LENGTH,
            header_phrases: DEFAULT_HEADER_PHRASES.iter().map(|p| p.to_string()).collect(),
            address_boundary_pattern: None,
        }
    }
}

impl ExtractionSettings {
    pub fn is_header_line(&self, line: &str) -> bool {
        let line = line.to_uppercase();
        self.header_phrases
            .iter()
            .any(|phrase| line.contains(&phrase.to_uppercase()))
    }

    /// Compiled custom address boundary, `None` when the default applies.
    pub fn address_boundary(&self) -> Option<Regex> {
        let pattern = self.address_boundary_pattern.as_deref()?;
        match Regex::new(pattern) {
            Ok(regex) => Some(regex),
            Err(err) => {
                log::warn!("Ignoring invalid address boundary pattern: {}", err);
                None
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ocr_language: String,
    /// Tesseract data directory; TESSDATA_PREFIX is used when unset.
    pub tessdata_prefix: Option<PathBuf>,
    pub extraction: ExtractionSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            ocr_language: DEFAULT_OCR_LANGUAGE.to_string(),
            tessdata_prefix: None,
            extraction: ExtractionSettings::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json_str(json: &str) -> Result<Self, KycError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, KycError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            KycError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        log::info!("Loaded configuration from {}", path.display());
        Self::from_json_str(&contents)
    }

    fn check(&self) -> Result<(), KycError> {
        if self.ocr_language.trim().is_empty() {
            return Err(KycError::Config("ocr_language must not be empty".to_string()));
        }
        if self.extraction.min_name_tokens == 0 {
            return Err(KycError::Config("min_name_tokens must be at least 1".to_string()));
        }
        if let Some(pattern) = &self.extraction.address_boundary_pattern {
            Regex::new(pattern).map_err(|e| {
                KycError::Config(format!("invalid address_boundary_pattern: {}", e))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json_str(r#"{"extraction": {"pan_confirmation_window": 5}}"#)
            .unwrap();
        assert_eq!(config.ocr_language, "eng");
        assert_eq!(config.extraction.pan_confirmation_window, 5);
        assert_eq!(config.extraction.min_name_length, DEFAULT_MIN_NAME_LENGTH);
        assert!(!config.extraction.header_phrases.is_empty());
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            AppConfig::from_json_str(r#"{"ocr_language": " "}"#),
            Err(KycError::Config(_))
        ));
        assert!(matches!(
            AppConfig::from_json_str("{not json"),
            Err(KycError::Config(_))
        ));
        assert!(matches!(
            AppConfig::from_json_str(r#"{"extraction": {"address_boundary_pattern": "("}}"#),
            Err(KycError::Config(_))
        ));
    }

    #[test]
    fn test_header_lines_match_case_insensitively() {
        let settings = ExtractionSettings::default();
        assert!(settings.is_header_line("Government of India"));
        assert!(settings.is_header_line("INCOME TAX DEPARTMENT"));
        assert!(!settings.is_header_line("RAJESH KUMAR SHARMA"));
    }

    #[test]
    fn test_address_boundary_compiles_when_set() {
        let mut settings = ExtractionSettings::default();
        assert!(settings.address_boundary().is_none());
        settings.address_boundary_pattern = Some(r"\bVID\b".to_string());
        assert!(settings.address_boundary().unwrap().is_match("VID 9999"));
    }

    #[test]
    fn test_from_file_reports_missing_file() {
        let err = AppConfig::from_file("/nonexistent/kyc.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/kyc.json"));
    }
}
