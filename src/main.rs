use config::Config;
use device_camera::impl_fake::DeviceCameraFake;
use device_camera::impl_raspistill::{DeviceCameraRaspistill, RaspistillConfig};
use device_camera::interface::DeviceCamera;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use reporter::impl_fake::ReporterFake;
use reporter::impl_http::ReporterHttp;
use reporter::interface::Reporter;
use sauna_watch::main::SaunaWatch;
use std::sync::Arc;
use text_recognizer::interface::TextRecognizer;

mod config;
mod device_camera;
mod dial_reader;
mod library;
mod reporter;
mod sauna_watch;
mod text_recognizer;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // --simulate runs the whole chain on fakes, without camera or network
    let simulate = std::env::args().any(|arg| arg == "--simulate");

    let config = Config::load("config.toml")?;

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(
        config.logger_timezone,
        config.log_level,
    ));

    let device_camera: Arc<dyn DeviceCamera + Send + Sync> = if simulate {
        Arc::new(DeviceCameraFake::new(logger.clone()))
    } else {
        Arc::new(DeviceCameraRaspistill::new(
            RaspistillConfig {
                capture_path: config.capture_path.clone(),
                ..RaspistillConfig::default()
            },
            logger.clone(),
        )?)
    };

    let text_recognizer = build_text_recognizer(&config, logger.clone());

    let reporter: Arc<dyn Reporter + Send + Sync> = if simulate {
        Arc::new(ReporterFake::new(logger.clone()))
    } else {
        Arc::new(ReporterHttp::new(
            config.backend_url.clone(),
            config.webhook_url.clone(),
            logger.clone(),
        )?)
    };

    let watch = SaunaWatch::new(config, logger, device_camera, text_recognizer, reporter);

    watch.run()?;

    Ok(())
}

#[cfg(feature = "ocr")]
fn build_text_recognizer(
    config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Arc<dyn TextRecognizer + Send + Sync> {
    Arc::new(text_recognizer::impl_tesseract::TextRecognizerTesseract::new(
        None,
        config.ocr_language.clone(),
        logger,
    ))
}

#[cfg(not(feature = "ocr"))]
fn build_text_recognizer(
    _config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Arc<dyn TextRecognizer + Send + Sync> {
    Arc::new(text_recognizer::impl_fake::TextRecognizerFake::new(logger))
}
