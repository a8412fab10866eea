use image::GrayImage;
use std::io::Cursor;

/// Per-cycle outcome of the sensing chain. Every failure mode upstream of
/// the state machine collapses into `Unreadable`; errors never cross this
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    Temperature(i32),
    Unreadable,
}

pub fn encode_readout(
    readout: &GrayImage,
) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
    let mut buffer = Cursor::new(Vec::new());
    readout.write_to(&mut buffer, image::ImageFormat::Jpeg)?;
    Ok(buffer.into_inner())
}

pub fn parse_temperature(text: &str) -> Reading {
    match text.trim().parse::<i32>() {
        Ok(temp) => Reading::Temperature(temp),
        Err(_) => Reading::Unreadable,
    }
}
