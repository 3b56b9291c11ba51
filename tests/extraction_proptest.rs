// Property tests: the extractors are total over arbitrary OCR text.

use kyc_extract::{extract_aadhar_details, extract_pan_details, DocumentType, FieldSet, NOT_FOUND};
use proptest::prelude::*;

fn ocr_like_text() -> impl Strategy<Value = String> {
    let line = prop_oneof![
        "[A-Z .]{0,30}",
        "[A-Za-z .:/']{0,30}",
        "[0-9 /]{0,20}",
        Just("DOB: 15/08/1992".to_string()),
        Just("Father's Name".to_string()),
        Just("Address:".to_string()),
        Just("1234 5678 9012".to_string()),
        Just("ABCDE1234F".to_string()),
        ".{0,40}",
    ];
    prop::collection::vec(line, 0..12).prop_map(|lines| lines.join("\n"))
}

fn assert_complete(fields: &FieldSet, document_type: DocumentType) -> Result<(), TestCaseError> {
    let keys: Vec<_> = fields.iter().map(|(field, _)| field).collect();
    prop_assert_eq!(keys.as_slice(), document_type.fields());
    for (_, value) in fields.iter() {
        prop_assert!(!value.trim().is_empty());
    }
    Ok(())
}

proptest! {
    #[test]
    fn test_pan_extraction_is_total(text in ocr_like_text()) {
        let fields = extract_pan_details(&text);
        assert_complete(&fields, DocumentType::Pan)?;
    }

    #[test]
    fn test_aadhar_extraction_is_total(text in ocr_like_text()) {
        let fields = extract_aadhar_details(&text);
        assert_complete(&fields, DocumentType::Aadhar)?;
    }

    #[test]
    fn test_extraction_is_deterministic(text in ocr_like_text()) {
        prop_assert_eq!(extract_pan_details(&text), extract_pan_details(&text));
        prop_assert_eq!(extract_aadhar_details(&text), extract_aadhar_details(&text));
    }

    #[test]
    fn test_aadhar_number_is_twelve_digits(text in ocr_like_text()) {
        let fields = extract_aadhar_details(&text);
        if let Some(number) = fields.found(kyc_extract::Field::AadharNumber) {
            prop_assert_eq!(number.len(), 12);
            prop_assert!(number.chars().all(|c| c.is_ascii_digit()));
        }
    }
}

#[test]
fn test_empty_input_finds_nothing() {
    for fields in [extract_pan_details(""), extract_aadhar_details("")] {
        assert!(fields.iter().all(|(_, value)| value == NOT_FOUND));
    }
}
