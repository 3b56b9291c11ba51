use std::path::Path;

use crate::config::ExtractionSettings;
use crate::models::*;
use crate::processing::*;
use crate::utils::KycError;

/// Runs one document image through classification, OCR and field extraction.
pub struct KycProcessor<C, R> {
    classifier: C,
    recognizer: R,
    settings: ExtractionSettings,
}

impl<C: DocumentClassifier, R: TextRecognizer> KycProcessor<C, R> {
    pub fn new(classifier: C, recognizer: R) -> Self {
        Self::with_settings(classifier, recognizer, ExtractionSettings::default())
    }

    pub fn with_settings(classifier: C, recognizer: R, settings: ExtractionSettings) -> Self {
        KycProcessor {
            classifier,
            recognizer,
            settings,
        }
    }

    pub fn process(&self, image_path: &Path) -> Result<KycReport, KycError> {
        // Step 1: Classify the document
        let classification = self.classifier.classify(image_path)?;
        let document_type = classification.document_type();
        match document_type {
            Some(document_type) => log::info!(
                "Classified {} as {} ({:.2})",
                image_path.display(),
                document_type,
                classification.confidence
            ),
            None => log::warn!(
                "Unsupported document label '{}' for {}",
                classification.label,
                image_path.display()
            ),
        }

        // Step 2: Read the text
        let raw_text = extract_text_from_image(&self.recognizer, image_path);
        if raw_text.trim().is_empty() {
            log::warn!("OCR returned no text for {}", image_path.display());
            return Err(KycError::NoTextDetected);
        }

        // Step 3: Extract fields
        let fields = document_type.map(|document_type| self.process_text(document_type, &raw_text));

        Ok(KycReport {
            classification,
            document_type,
            raw_text,
            fields,
        })
    }

    pub fn process_text(&self, document_type: DocumentType, text: &str) -> FieldSet {
        extract_fields(document_type, text, &self.settings)
    }
}

/// Dispatch to the extractor for `document_type`.
pub fn extract_fields(document_type: DocumentType, text: &str, settings: &ExtractionSettings) -> FieldSet {
    match document_type {
        DocumentType::Pan => extract_pan_details_with(text, settings),
        DocumentType::Aadhar => extract_aadhar_details_with(text, settings),
    }
}
