use crate::config::Config;
use image::DynamicImage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameVerdict {
    pub valid: bool,
    pub red_pixels: u32,
}

/// Counts pixels that look like the red-illuminated dial face. A frame with
/// too few of them shows a dark, unlit or obstructed scene, and OCR on it
/// would only produce noise.
pub fn check_frame(config: &Config, frame: &DynamicImage) -> FrameVerdict {
    let rgb = frame.to_rgb8();
    let mut red_pixels = 0u32;
    for pixel in rgb.pixels() {
        let [r, g, b] = pixel.0;
        if r > config.gate_red_min && g < config.gate_green_max && b < config.gate_blue_max {
            red_pixels += 1;
        }
    }

    FrameVerdict {
        valid: red_pixels > config.gate_min_red_pixels,
        red_pixels,
    }
}
