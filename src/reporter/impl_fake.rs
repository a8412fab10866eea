use crate::library::logger::interface::Logger;
use crate::reporter::interface::Reporter;
use std::sync::{Arc, Mutex};

pub struct ReporterFake {
    temperatures: Mutex<Vec<String>>,
    alerts: Mutex<Vec<String>>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ReporterFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            temperatures: Mutex::new(vec![]),
            alerts: Mutex::new(vec![]),
            logger: logger.with_namespace("reporter").with_namespace("fake"),
        }
    }

    #[allow(dead_code)]
    pub fn sent_temperatures(&self) -> Vec<String> {
        self.temperatures.lock().unwrap().clone()
    }

    #[allow(dead_code)]
    pub fn sent_alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Reporter for ReporterFake {
    fn send_temperature(
        &self,
        temp: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!("Recording temperature: {}", temp))?;
        self.temperatures.lock().unwrap().push(temp.to_string());
        Ok(())
    }

    fn send_alert(&self, temp: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!("Recording alert: {}", temp))?;
        self.alerts.lock().unwrap().push(temp.to_string());
        Ok(())
    }
}
