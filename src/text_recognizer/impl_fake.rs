use crate::library::logger::interface::Logger;
use crate::text_recognizer::interface::TextRecognizer;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

pub struct TextRecognizerFake {
    canned_text: Option<String>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl TextRecognizerFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            canned_text: None,
            logger: logger.with_namespace("ocr").with_namespace("fake"),
        }
    }

    /// Always returns the given text instead of a random temperature.
    #[allow(dead_code)]
    pub fn with_text(logger: Arc<dyn Logger + Send + Sync>, text: &str) -> Self {
        Self {
            canned_text: Some(text.to_string()),
            logger: logger.with_namespace("ocr").with_namespace("fake"),
        }
    }
}

impl TextRecognizer for TextRecognizerFake {
    fn recognize(&self, _image: &[u8]) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.debug("Recognizing digits with fake recognizer...")?;

        if let Some(text) = &self.canned_text {
            return Ok(text.clone());
        }

        let mut rng = rand::rng();
        let temp_dist = Uniform::new(20, 110)?;
        Ok(temp_dist.sample(&mut rng).to_string())
    }
}
