use std::io::Write;
use std::path::Path;

use image::GenericImageView;
use tempfile::NamedTempFile;

use crate::config::AppConfig;
use crate::utils::KycError;

/// Turns a document image into raw text.
pub trait TextRecognizer {
    /// Engine identifier, used in log output.
    fn name(&self) -> &'static str;

    fn recognize(&self, image_path: &Path) -> Result<String, KycError>;

    /// Recognize an in-memory image by staging it on disk first.
    fn recognize_bytes(&self, image_data: &[u8]) -> Result<String, KycError> {
        let staged = stage_image_bytes(image_data)?;
        self.recognize(staged.path())
    }
}

impl<T: TextRecognizer + ?Sized> TextRecognizer for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn recognize(&self, image_path: &Path) -> Result<String, KycError> {
        (**self).recognize(image_path)
    }
}

/// Decode an image buffer and write it to a temporary PNG file. The file is
/// removed when the returned handle is dropped.
pub fn stage_image_bytes(image_data: &[u8]) -> Result<NamedTempFile, KycError> {
    let decoded = image::load_from_memory(image_data)?;

    let mut temp_file = tempfile::Builder::new()
        .prefix("kyc-")
        .suffix(".png")
        .tempfile()?;
    decoded.write_to(&mut temp_file, image::ImageOutputFormat::Png)?;
    temp_file.flush()?;

    log::debug!(
        "Staged {}x{} image at {}",
        decoded.width(),
        decoded.height(),
        temp_file.path().display()
    );
    Ok(temp_file)
}

/// Run OCR and fall back to an empty string on failure, so callers can treat
/// an unreadable image the same as one without text.
pub fn extract_text_from_image<R: TextRecognizer + ?Sized>(recognizer: &R, image_path: &Path) -> String {
    match recognizer.recognize(image_path) {
        Ok(text) => text,
        Err(err) => {
            log::error!("Error during OCR extraction with {}: {}", recognizer.name(), err);
            String::new()
        }
    }
}

#[cfg(feature = "tesseract")]
pub use self::tesseract_engine::TesseractRecognizer;

#[cfg(feature = "tesseract")]
mod tesseract_engine {
    use std::path::{Path, PathBuf};

    use tesseract::Tesseract;

    use super::TextRecognizer;
    use crate::config::AppConfig;
    use crate::utils::KycError;

    pub struct TesseractRecognizer {
        language: String,
        tessdata_prefix: Option<PathBuf>,
    }

    impl TesseractRecognizer {
        pub fn new(language: &str) -> Self {
            TesseractRecognizer {
                language: language.to_string(),
                tessdata_prefix: None,
            }
        }

        pub fn from_config(config: &AppConfig) -> Self {
            TesseractRecognizer {
                language: config.ocr_language.clone(),
                tessdata_prefix: config.tessdata_prefix.clone(),
            }
        }
    }

    impl TextRecognizer for TesseractRecognizer {
        fn name(&self) -> &'static str {
            "tesseract"
        }

        fn recognize(&self, image_path: &Path) -> Result<String, KycError> {
            let path_str = image_path
                .to_str()
                .ok_or_else(|| KycError::Ocr("Failed to convert path to string".to_string()))?;
            let datapath = self.tessdata_prefix.as_deref().and_then(Path::to_str);

            let text = Tesseract::new(datapath, Some(self.language.as_str()))
                .map_err(|e| KycError::Ocr(format!("Tesseract init error: {}", e)))?
                .set_image(path_str)
                .map_err(|e| KycError::Ocr(format!("Tesseract set image error: {}", e)))?
                .get_text()
                .map_err(|e| KycError::Ocr(format!("Tesseract error: {}", e)))?;

            log::debug!("OCR produced {} characters from {}", text.len(), image_path.display());
            Ok(text)
        }
    }
}

/// The OCR engine compiled into this build.
#[cfg(feature = "tesseract")]
pub fn default_recognizer(config: &AppConfig) -> Result<Box<dyn TextRecognizer>, KycError> {
    Ok(Box::new(TesseractRecognizer::from_config(config)))
}

#[cfg(not(feature = "tesseract"))]
pub fn default_recognizer(_config: &AppConfig) -> Result<Box<dyn TextRecognizer>, KycError> {
    Err(KycError::OcrUnavailable(
        "built without the `tesseract` feature; pass --text with an OCR text file".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    struct CannedRecognizer {
        text: Option<&'static str>,
    }

    impl TextRecognizer for CannedRecognizer {
        fn name(&self) -> &'static str {
            "canned"
        }

        fn recognize(&self, image_path: &Path) -> Result<String, KycError> {
            assert!(image_path.exists());
            self.text
                .map(str::to_string)
                .ok_or_else(|| KycError::Ocr("engine crashed".to_string()))
        }
    }

    fn png_bytes() -> Vec<u8> {
        let image = image::DynamicImage::ImageRgb8(image::RgbImage::new(8, 4));
        let mut buffer = Cursor::new(Vec::new());
        image
            .write_to(&mut buffer, image::ImageOutputFormat::Png)
            .unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_stage_image_bytes_writes_png() {
        let staged = stage_image_bytes(&png_bytes()).unwrap();
        assert_eq!(staged.path().extension().and_then(|e| e.to_str()), Some("png"));
        let reloaded = image::open(staged.path()).unwrap();
        assert_eq!((reloaded.width(), reloaded.height()), (8, 4));
    }

    #[test]
    fn test_stage_image_bytes_rejects_garbage() {
        let err = stage_image_bytes(b"definitely not an image").unwrap_err();
        assert!(matches!(err, KycError::ImageDecoding(_)));
    }

    #[test]
    fn test_recognize_bytes_uses_staged_file() {
        let recognizer = CannedRecognizer { text: Some("ABCDE1234F") };
        assert_eq!(recognizer.recognize_bytes(&png_bytes()).unwrap(), "ABCDE1234F");
    }

    #[test]
    fn test_failed_ocr_yields_empty_text() {
        let staged = stage_image_bytes(&png_bytes()).unwrap();
        let recognizer = CannedRecognizer { text: None };
        assert_eq!(extract_text_from_image(&recognizer, staged.path()), "");
    }

    #[cfg(not(feature = "tesseract"))]
    #[test]
    fn test_default_recognizer_unavailable() {
        let result = default_recognizer(&AppConfig::default());
        assert!(matches!(result, Err(KycError::OcrUnavailable(_))));
    }
}
