use crate::library::logger::interface::Logger;
use crate::reporter::interface::Reporter;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct TempReport {
    temp: String,
}

#[derive(Debug, Serialize)]
struct WebhookAlert {
    value1: String,
}

pub struct ReporterHttp {
    client: reqwest::blocking::Client,
    backend_url: String,
    webhook_url: String,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ReporterHttp {
    pub fn new(
        backend_url: String,
        webhook_url: String,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            backend_url,
            webhook_url,
            logger: logger.with_namespace("reporter").with_namespace("http"),
        })
    }

    fn post<T: Serialize>(
        &self,
        url: &str,
        payload: &T,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger
            .debug(&format!("POST {}: {}", url, serde_json::to_string(payload)?))?;

        let response = self.client.post(url).json(payload).send()?;
        if !response.status().is_success() {
            return Err(format!("{} returned {}", url, response.status()).into());
        }
        Ok(())
    }
}

impl Reporter for ReporterHttp {
    fn send_temperature(
        &self,
        temp: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.post(
            &self.backend_url,
            &TempReport {
                temp: temp.to_string(),
            },
        )
    }

    fn send_alert(&self, temp: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!("Sending alert: {}", temp))?;
        self.post(
            &self.webhook_url,
            &WebhookAlert {
                value1: temp.to_string(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_report_payload_shape() {
        let payload = TempReport {
            temp: "85".to_string(),
        };
        assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"temp":"85"}"#);
    }

    #[test]
    fn test_webhook_alert_payload_shape() {
        let payload = WebhookAlert {
            value1: "150".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"value1":"150"}"#
        );
    }
}
