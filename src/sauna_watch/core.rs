use crate::config::Config;
use crate::dial_reader::extract::Reading;
use std::time::Instant;

/// The only state that survives across poll cycles. Owned by the loop and
/// passed by reference into `step`; nothing else reads or writes it.
#[derive(Debug, Clone)]
pub struct MonitorState {
    pub consecutive_failures: u32,
    pub startup_grace: u32,
    pub last_reported_temp: i32,
    pub last_zero_report: Instant,
    pub alert_sent: bool,
}

impl MonitorState {
    pub fn new(config: &Config, now: Instant) -> Self {
        Self {
            consecutive_failures: 0,
            startup_grace: config.startup_grace,
            last_reported_temp: 0,
            last_zero_report: now,
            alert_sent: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ReportTemperature(String),
    SendAlert(String),
}

/// Advances the monitor by one poll cycle. Emits at most one backend report
/// and at most one webhook alert.
pub fn step(
    config: &Config,
    state: &mut MonitorState,
    reading: Reading,
    now: Instant,
) -> Vec<Effect> {
    match reading {
        Reading::Unreadable => on_unreadable(config, state, now),
        Reading::Temperature(temp) => {
            state.consecutive_failures = 0;
            on_temperature(config, state, temp)
        }
    }
}

fn on_unreadable(config: &Config, state: &mut MonitorState, now: Instant) -> Vec<Effect> {
    state.consecutive_failures += 1;

    if state.consecutive_failures == config.failure_threshold && state.last_reported_temp != 0 {
        // The dial has been dark long enough to assume the heater is off.
        // Report zero once and re-arm the startup grace window and the alert
        // for the next heating cycle.
        state.last_zero_report = now;
        state.last_reported_temp = 0;
        state.startup_grace = config.startup_grace;
        state.alert_sent = false;
        vec![Effect::ReportTemperature("0".to_string())]
    } else if state.consecutive_failures > config.failure_threshold {
        let mut effects = vec![];
        if now.duration_since(state.last_zero_report) > config.zero_report_interval {
            state.last_zero_report = now;
            effects.push(Effect::ReportTemperature("0".to_string()));
        }
        state.consecutive_failures = 0;
        effects
    } else {
        vec![]
    }
}

fn on_temperature(config: &Config, state: &mut MonitorState, temp: i32) -> Vec<Effect> {
    if temp <= 0 {
        // Not heating yet
        return vec![];
    }
    if state.startup_grace > 0 {
        // Readings during warm-up are unreliable; absorb them quietly.
        state.startup_grace -= 1;
        return vec![];
    }

    let mut effects = vec![];
    if temp > config.alert_threshold && !state.alert_sent {
        effects.push(Effect::SendAlert(temp.to_string()));
        state.alert_sent = true;
    }
    effects.push(Effect::ReportTemperature(temp.to_string()));
    state.last_reported_temp = temp;
    effects
}
