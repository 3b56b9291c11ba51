use std::path::Path;

use crate::models::{Classification, DocumentType};
use crate::processing::text::title_case;
use crate::utils::KycError;

/// Decides which kind of document an image shows.
pub trait DocumentClassifier {
    fn classify(&self, image_path: &Path) -> Result<Classification, KycError>;
}

/// Classifier that always answers with a caller supplied label, for when the
/// document type is already known.
#[derive(Debug, Clone)]
pub struct FixedClassifier {
    label: String,
    confidence: f32,
}

impl FixedClassifier {
    pub fn new(label: &str) -> Self {
        FixedClassifier {
            label: label.to_string(),
            confidence: 1.0,
        }
    }

    pub fn for_document(document_type: DocumentType) -> Self {
        match document_type {
            DocumentType::Pan => Self::new("pan"),
            DocumentType::Aadhar => Self::new("aadhar"),
        }
    }

    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence.clamp(0.0, 1.0);
        self
    }
}

impl DocumentClassifier for FixedClassifier {
    fn classify(&self, _image_path: &Path) -> Result<Classification, KycError> {
        Ok(Classification {
            label: self.label.clone(),
            confidence: self.confidence,
        })
    }
}

/// One-line summary such as "PAN Card (Confidence: 97.50%)".
pub fn describe(classification: &Classification) -> String {
    let percent = classification.confidence * 100.0;
    match classification.document_type() {
        Some(document_type) => format!("{} (Confidence: {:.2}%)", document_type, percent),
        None => format!(
            "Uncertain: {} (Confidence: {:.2}%)",
            title_case(&classification.label),
            percent
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_classifier() {
        let classifier = FixedClassifier::for_document(DocumentType::Aadhar).with_confidence(0.9);
        let classification = classifier.classify(Path::new("card.png")).unwrap();
        assert_eq!(classification.document_type(), Some(DocumentType::Aadhar));
        assert!((classification.confidence - 0.9).abs() < f32::EPSILON);
    }

    #[test]
    fn test_describe() {
        let known = Classification {
            label: "pan".to_string(),
            confidence: 0.975,
        };
        assert_eq!(describe(&known), "PAN Card (Confidence: 97.50%)");

        let unknown = Classification {
            label: "passport".to_string(),
            confidence: 0.5,
        };
        assert_eq!(describe(&unknown), "Uncertain: Passport (Confidence: 50.00%)");
    }
}
