use crate::device_camera::interface::DeviceCamera;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::path::PathBuf;
use std::process::Command;
use std::sync::Arc;

pub struct RaspistillConfig {
    pub capture_path: PathBuf,
    pub exposure_compensation: i32,
    pub rotation: u32,
}

impl Default for RaspistillConfig {
    fn default() -> Self {
        Self {
            capture_path: PathBuf::from("./capture.jpg"),
            // The dial is backlit by a red lamp. Negative compensation keeps
            // the digits from blowing out against the dark cabin.
            exposure_compensation: -9,
            rotation: 180,
        }
    }
}

pub struct DeviceCameraRaspistill {
    config: RaspistillConfig,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraRaspistill {
    pub fn new(
        config: RaspistillConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        // An unwritable capture path is an unrecoverable precondition.
        std::fs::File::create(&config.capture_path)?;

        Ok(Self {
            config,
            logger: logger.with_namespace("camera").with_namespace("raspistill"),
        })
    }
}

impl DeviceCamera for DeviceCameraRaspistill {
    fn capture_frame(&self) -> Result<DynamicImage, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Capturing image...")?;

        let output = Command::new("raspistill")
            .arg("-ev")
            .arg(self.config.exposure_compensation.to_string())
            .arg("-rot")
            .arg(self.config.rotation.to_string())
            .arg("-o")
            .arg(&self.config.capture_path)
            .output();

        match output {
            Ok(output) if output.status.success() => {}
            Ok(output) => {
                self.logger.critical("Unable to take picture")?;
                return Err(format!(
                    "raspistill exited with {}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr)
                )
                .into());
            }
            Err(e) => {
                self.logger.critical("Unable to take picture")?;
                return Err(Box::new(e));
            }
        }

        match image::open(&self.config.capture_path) {
            Ok(frame) => Ok(frame),
            Err(e) => {
                self.logger.warn("Unable to decode captured image")?;
                Err(Box::new(e))
            }
        }
    }
}
