use image::DynamicImage;

pub trait DeviceCamera {
    fn capture_frame(&self) -> Result<DynamicImage, Box<dyn std::error::Error + Send + Sync>>;
}
