pub mod config;
pub mod kyc_processor;
pub mod models;
pub mod processing;
pub mod utils;

pub use config::{AppConfig, ExtractionSettings};
pub use kyc_processor::{extract_fields, KycProcessor};
pub use models::{DocumentType, Field, FieldSet, NOT_FOUND};
pub use processing::{extract_aadhar_details, extract_pan_details};
pub use utils::KycError;
