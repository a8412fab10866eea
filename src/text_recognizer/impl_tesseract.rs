use crate::library::logger::interface::Logger;
use crate::text_recognizer::interface::TextRecognizer;
use std::sync::Arc;

pub struct TextRecognizerTesseract {
    tessdata_dir: Option<String>,
    language: String,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl TextRecognizerTesseract {
    /// `language` names the traineddata model. The deployment uses "lets",
    /// the LetsGoDigital model trained on seven-segment digits.
    pub fn new(
        tessdata_dir: Option<String>,
        language: String,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            tessdata_dir,
            language,
            logger: logger.with_namespace("ocr").with_namespace("tesseract"),
        }
    }
}

impl TextRecognizer for TextRecognizerTesseract {
    fn recognize(&self, image: &[u8]) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.debug("Recognizing digits...")?;

        let tess =
            tesseract::Tesseract::new(self.tessdata_dir.as_deref(), Some(self.language.as_str()))?;
        let tess = tess.set_variable("tessedit_char_whitelist", "0123456789")?;
        let mut tess = tess.set_image_from_mem(image)?;
        let text = tess.get_text()?;

        self.logger.debug(&format!("Recognized text: {:?}", text))?;
        Ok(text)
    }
}
