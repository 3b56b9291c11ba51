use thiserror::Error;

#[derive(Debug, Error)]
pub enum KycError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image decoding error: {0}")]
    ImageDecoding(String),
    #[error("OCR error: {0}")]
    Ocr(String),
    #[error("OCR engine unavailable: {0}")]
    OcrUnavailable(String),
    #[error("Classification error: {0}")]
    Classification(String),
    #[error("OCR could not detect any text")]
    NoTextDetected,
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<image::ImageError> for KycError {
    fn from(err: image::ImageError) -> Self {
        KycError::ImageDecoding(err.to_string())
    }
}

impl From<serde_json::Error> for KycError {
    fn from(err: serde_json::Error) -> Self {
        KycError::Config(err.to_string())
    }
}
