use crate::device_camera::interface::DeviceCamera;
use crate::library::logger::interface::Logger;
use image::{DynamicImage, Rgb, RgbImage};
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

pub struct DeviceCameraFake {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("fake"),
        }
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn capture_frame(&self) -> Result<DynamicImage, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Capturing fake frame...")?;

        let mut rng = rand::rng();
        let noise_dist = Uniform::new(0u8, 30u8)?;
        let red_dist = Uniform::new(150u8, 230u8)?;

        let width = 320;
        let height = 240;
        let mut frame = RgbImage::new(width, height);
        for pixel in frame.pixels_mut() {
            let v = noise_dist.sample(&mut rng);
            *pixel = Rgb([v, v, v]);
        }

        // A red-lit dial disc in the middle of the frame, bright enough to
        // satisfy the validity gate.
        let (cx, cy, radius) = (width as i32 / 2, height as i32 / 2, 30i32);
        for y in (cy - radius)..(cy + radius) {
            for x in (cx - radius)..(cx + radius) {
                let (dx, dy) = (x - cx, y - cy);
                if dx * dx + dy * dy <= radius * radius {
                    let r = red_dist.sample(&mut rng);
                    frame.put_pixel(x as u32, y as u32, Rgb([r, 10, 10]));
                }
            }
        }

        self.logger.info("Fake frame captured")?;
        Ok(DynamicImage::ImageRgb8(frame))
    }
}
