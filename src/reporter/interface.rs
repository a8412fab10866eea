pub trait Reporter {
    fn send_temperature(&self, temp: &str)
        -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn send_alert(&self, temp: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
