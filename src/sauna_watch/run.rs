use super::core::{step, MonitorState};
use super::main::SaunaWatch;
use crate::dial_reader::extract::{self, Reading};
use crate::dial_reader::{gate, isolate};
use std::time::Instant;

impl SaunaWatch {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut state = MonitorState::new(&self.config, Instant::now());

        loop {
            self.cycle(&mut state);
            std::thread::sleep(self.config.poll_interval);
        }
    }

    pub(crate) fn cycle(&self, state: &mut MonitorState) {
        let reading = self.sense();

        if let Reading::Temperature(temp) = reading {
            let _ = self.logger.info(&format!(
                "The temperature is {} (failures so far: {})",
                temp, state.consecutive_failures
            ));
        }

        let effects = step(&self.config, state, reading, Instant::now());
        for effect in effects {
            self.run_effect(effect);
        }
    }

    pub(crate) fn sense(&self) -> Reading {
        let frame = match self.device_camera.capture_frame() {
            Ok(frame) => frame,
            Err(e) => {
                let _ = self.logger.critical(&format!("Capture failed: {}", e));
                return Reading::Unreadable;
            }
        };

        let verdict = gate::check_frame(&self.config, &frame);
        let _ = self
            .logger
            .debug(&format!("There are {} red pixels", verdict.red_pixels));
        if !verdict.valid {
            let _ = self.logger.debug("Dial is not visible, skipping OCR");
            return Reading::Unreadable;
        }

        let readout = isolate::isolate_digits(&self.config, &frame);
        let encoded = match extract::encode_readout(&readout) {
            Ok(encoded) => encoded,
            Err(e) => {
                let _ = self.logger.warn(&format!("Unable to encode readout: {}", e));
                return Reading::Unreadable;
            }
        };

        let text = match self.text_recognizer.recognize(&encoded) {
            Ok(text) => text,
            Err(e) => {
                let _ = self.logger.critical(&format!("Recognizer failed: {}", e));
                return Reading::Unreadable;
            }
        };

        let reading = extract::parse_temperature(&text);
        if reading == Reading::Unreadable {
            let _ = self.logger.critical(&format!(
                "Unable to determine temperature from picture: {:?}",
                text
            ));
        }
        reading
    }
}
