#[cfg(test)]
mod core_test {

    use std::time::{Duration, Instant};

    use crate::config::Config;
    use crate::dial_reader::extract::Reading;
    use crate::sauna_watch::core::{step, Effect, MonitorState};

    fn fixture() -> (Config, MonitorState, Instant) {
        let config = Config::default();
        let now = Instant::now();
        let state = MonitorState::new(&config, now);
        (config, state, now)
    }

    /// Burns through the startup grace window with quiet positive readings.
    fn settle(config: &Config, state: &mut MonitorState, now: Instant) {
        for _ in 0..config.startup_grace {
            let effects = step(config, state, Reading::Temperature(50), now);
            assert!(effects.is_empty());
        }
    }

    #[test]
    fn test_initial_state() {
        let (config, state, _) = fixture();

        assert_eq!(state.consecutive_failures, 0);
        assert_eq!(state.startup_grace, config.startup_grace);
        assert_eq!(state.last_reported_temp, 0);
        assert!(!state.alert_sent);
    }

    #[test]
    fn test_grace_window_consumption() {
        let (config, mut state, now) = fixture();

        // Six positive readings are absorbed without any report
        for _ in 0..6 {
            let effects = step(&config, &mut state, Reading::Temperature(80), now);
            assert!(effects.is_empty());
        }
        assert_eq!(state.startup_grace, 0);

        // The seventh goes out
        let effects = step(&config, &mut state, Reading::Temperature(80), now);
        assert_eq!(effects, vec![Effect::ReportTemperature("80".to_string())]);
        assert_eq!(state.last_reported_temp, 80);
    }

    #[test]
    fn test_grace_only_consumed_by_positive_readings() {
        let (config, mut state, now) = fixture();

        step(&config, &mut state, Reading::Temperature(0), now);
        step(&config, &mut state, Reading::Temperature(-3), now);
        step(&config, &mut state, Reading::Unreadable, now);

        assert_eq!(state.startup_grace, config.startup_grace);
    }

    #[test]
    fn test_zero_and_negative_temperatures_have_no_effect() {
        let (config, mut state, now) = fixture();
        settle(&config, &mut state, now);

        assert!(step(&config, &mut state, Reading::Temperature(0), now).is_empty());
        assert!(step(&config, &mut state, Reading::Temperature(-40), now).is_empty());
        assert_eq!(state.last_reported_temp, 0);
    }

    #[test]
    fn test_alert_fall_through() {
        let (config, mut state, now) = fixture();
        settle(&config, &mut state, now);

        // A dangerous reading produces the webhook alert and the normal
        // backend report in the same cycle
        let effects = step(&config, &mut state, Reading::Temperature(150), now);
        assert_eq!(
            effects,
            vec![
                Effect::SendAlert("150".to_string()),
                Effect::ReportTemperature("150".to_string()),
            ]
        );
        assert!(state.alert_sent);
        assert_eq!(state.last_reported_temp, 150);
    }

    #[test]
    fn test_alert_is_not_repeated_while_hot() {
        let (config, mut state, now) = fixture();
        settle(&config, &mut state, now);

        step(&config, &mut state, Reading::Temperature(150), now);
        let effects = step(&config, &mut state, Reading::Temperature(151), now);

        assert_eq!(effects, vec![Effect::ReportTemperature("151".to_string())]);
    }

    #[test]
    fn test_alert_threshold_is_strict() {
        let (config, mut state, now) = fixture();
        settle(&config, &mut state, now);

        let effects = step(&config, &mut state, Reading::Temperature(100), now);
        assert_eq!(effects, vec![Effect::ReportTemperature("100".to_string())]);
        assert!(!state.alert_sent);
    }

    #[test]
    fn test_success_resets_failure_counter() {
        let (config, mut state, now) = fixture();

        for _ in 0..50 {
            step(&config, &mut state, Reading::Unreadable, now);
        }
        assert_eq!(state.consecutive_failures, 50);

        step(&config, &mut state, Reading::Temperature(80), now);
        assert_eq!(state.consecutive_failures, 0);
    }

    #[test]
    fn test_failures_below_threshold_are_silent() {
        let (config, mut state, now) = fixture();

        for _ in 0..99 {
            let effects = step(&config, &mut state, Reading::Unreadable, now);
            assert!(effects.is_empty());
        }
        assert_eq!(state.consecutive_failures, 99);
    }

    #[test]
    fn test_failure_to_zero_transition() {
        let (config, mut state, now) = fixture();
        settle(&config, &mut state, now);
        step(&config, &mut state, Reading::Temperature(75), now);
        assert_eq!(state.last_reported_temp, 75);

        let mut effects = vec![];
        for _ in 0..100 {
            effects.extend(step(&config, &mut state, Reading::Unreadable, now));
        }

        // Exactly one zero report, and the state is re-armed for the next
        // heating cycle
        assert_eq!(effects, vec![Effect::ReportTemperature("0".to_string())]);
        assert_eq!(state.last_reported_temp, 0);
        assert_eq!(state.startup_grace, config.startup_grace);
        assert!(!state.alert_sent);
    }

    #[test]
    fn test_zero_transition_rearms_alert() {
        let (config, mut state, now) = fixture();
        settle(&config, &mut state, now);

        step(&config, &mut state, Reading::Temperature(150), now);
        assert!(state.alert_sent);

        for _ in 0..100 {
            step(&config, &mut state, Reading::Unreadable, now);
        }
        assert!(!state.alert_sent);

        // Next heating cycle alerts again once its grace is spent
        settle(&config, &mut state, now);
        let effects = step(&config, &mut state, Reading::Temperature(120), now);
        assert_eq!(
            effects,
            vec![
                Effect::SendAlert("120".to_string()),
                Effect::ReportTemperature("120".to_string()),
            ]
        );
    }

    #[test]
    fn test_zero_reassertion_is_rate_limited() {
        let (config, mut state, t0) = fixture();
        settle(&config, &mut state, t0);
        step(&config, &mut state, Reading::Temperature(75), t0);

        let mut effects = vec![];
        for _ in 0..100 {
            effects.extend(step(&config, &mut state, Reading::Unreadable, t0));
        }
        assert_eq!(effects, vec![Effect::ReportTemperature("0".to_string())]);

        // Still failing inside the six hour window: nothing more goes out
        let soon = t0 + Duration::from_secs(60);
        let mut effects = vec![];
        for _ in 0..300 {
            effects.extend(step(&config, &mut state, Reading::Unreadable, soon));
        }
        assert!(effects.is_empty());

        // Once the window has passed, the zero report is re-asserted once
        let later = t0 + config.zero_report_interval + Duration::from_secs(1);
        let mut effects = vec![];
        for _ in 0..102 {
            effects.extend(step(&config, &mut state, Reading::Unreadable, later));
        }
        assert_eq!(effects, vec![Effect::ReportTemperature("0".to_string())]);
    }

    #[test]
    fn test_zero_transition_requires_prior_report() {
        let (config, mut state, now) = fixture();

        // The heater was never seen on, so there is nothing to zero out
        for _ in 0..101 {
            let effects = step(&config, &mut state, Reading::Unreadable, now);
            assert!(effects.is_empty());
        }

        // The counter wrapped without a report
        assert_eq!(state.consecutive_failures, 0);
    }

    #[test]
    fn test_recovery_after_outage_reports_again() {
        let (config, mut state, now) = fixture();
        settle(&config, &mut state, now);
        step(&config, &mut state, Reading::Temperature(75), now);

        for _ in 0..100 {
            step(&config, &mut state, Reading::Unreadable, now);
        }

        // The camera comes back while the heater is running: grace was
        // re-armed, so reports resume only after it is spent
        settle(&config, &mut state, now);
        let effects = step(&config, &mut state, Reading::Temperature(60), now);
        assert_eq!(effects, vec![Effect::ReportTemperature("60".to_string())]);
        assert_eq!(state.consecutive_failures, 0);
    }
}
