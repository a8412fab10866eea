pub trait TextRecognizer {
    fn recognize(&self, image: &[u8]) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}
