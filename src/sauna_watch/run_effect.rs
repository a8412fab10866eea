use super::core::Effect;
use super::main::SaunaWatch;

impl SaunaWatch {
    /// Delivery failures are logged and swallowed. They never count against
    /// the failure counter; reliability comes from the state machine's
    /// periodic re-assertion, not from retries here.
    pub(crate) fn run_effect(&self, effect: Effect) {
        let _ = self.logger.debug(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::ReportTemperature(temp) => {
                if let Err(e) = self.reporter.send_temperature(&temp) {
                    let _ = self
                        .logger
                        .critical(&format!("Failed to send temperature to backend: {}", e));
                }
            }
            Effect::SendAlert(temp) => {
                if let Err(e) = self.reporter.send_alert(&temp) {
                    let _ = self
                        .logger
                        .critical(&format!("Failed to send alert to webhook: {}", e));
                }
            }
        }
    }
}
