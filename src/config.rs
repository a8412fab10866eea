use crate::library::logger::interface::LogLevel;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: String,
    pub webhook_url: String,
    pub log_level: LogLevel,
    pub logger_timezone: chrono::FixedOffset,

    pub poll_interval: Duration,
    pub capture_path: PathBuf,
    pub ocr_language: String,

    pub gate_red_min: u8,
    pub gate_green_max: u8,
    pub gate_blue_max: u8,
    pub gate_min_red_pixels: u32,

    pub blur_kernel: u32,
    pub canny_low: f32,
    pub canny_high: f32,
    pub contour_stroke: u32,
    pub binarize_floor: u8,

    pub alert_threshold: i32,
    pub startup_grace: u32,
    pub failure_threshold: u32,
    pub zero_report_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8080/temp".to_string(),
            webhook_url: "http://localhost:8080/alert".to_string(),
            log_level: LogLevel::Info,
            logger_timezone: central_european_time(),
            poll_interval: Duration::from_secs(5),
            capture_path: PathBuf::from("./capture.jpg"),
            ocr_language: "lets".to_string(),
            gate_red_min: 100,
            gate_green_max: 50,
            gate_blue_max: 50,
            gate_min_red_pixels: 150,
            blur_kernel: 5,
            canny_low: 170.0,
            canny_high: 255.0,
            contour_stroke: 3,
            binarize_floor: 240,
            alert_threshold: 100,
            startup_grace: 6,
            failure_threshold: 100,
            zero_report_interval: Duration::from_secs(21600),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    backend_url: String,
    webhook_url: String,
    log_level: Option<String>,
    ocr_language: Option<String>,
    capture_path: Option<PathBuf>,
}

impl Config {
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    fn from_toml(raw: &str) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let file: ConfigFile = toml::from_str(raw)?;

        let mut config = Config::default();
        config.backend_url = file.backend_url;
        config.webhook_url = file.webhook_url;
        if let Some(level) = file.log_level {
            match LogLevel::from_str(&level) {
                Ok(level) => config.log_level = level,
                Err(_) => {
                    println!("Unable to parse log level from config file, using INFO");
                }
            }
        }
        if let Some(language) = file.ocr_language {
            config.ocr_language = language;
        }
        if let Some(capture_path) = file.capture_path {
            config.capture_path = capture_path;
        }
        Ok(config)
    }
}

fn central_european_time() -> chrono::FixedOffset {
    chrono::FixedOffset::east_opt(3600).unwrap()
}
