pub mod aadhar;
pub mod classifier;
pub mod ocr;
pub mod pan;
pub mod patterns;
pub mod text;

pub use aadhar::{extract_aadhar_details, extract_aadhar_details_with};
pub use classifier::{DocumentClassifier, FixedClassifier};
pub use ocr::{extract_text_from_image, TextRecognizer};
pub use pan::{extract_pan_details, extract_pan_details_with};
