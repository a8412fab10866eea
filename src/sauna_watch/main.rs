use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::library::logger::interface::Logger;
use crate::reporter::interface::Reporter;
use crate::text_recognizer::interface::TextRecognizer;
use std::sync::Arc;

pub struct SaunaWatch {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    pub text_recognizer: Arc<dyn TextRecognizer + Send + Sync>,
    pub reporter: Arc<dyn Reporter + Send + Sync>,
}

impl SaunaWatch {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        text_recognizer: Arc<dyn TextRecognizer + Send + Sync>,
        reporter: Arc<dyn Reporter + Send + Sync>,
    ) -> Self {
        Self {
            config,
            logger,
            device_camera,
            text_recognizer,
            reporter,
        }
    }
}
