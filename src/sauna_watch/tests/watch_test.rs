#[cfg(test)]
mod watch_test {

    use std::time::Instant;

    use crate::dial_reader::extract::Reading;
    use crate::sauna_watch::core::MonitorState;
    use crate::sauna_watch::tests::fixture::Fixture;

    #[test]
    fn test_sense_reads_temperature_through_the_whole_chain() {
        let fixture = Fixture::new("85");
        assert_eq!(fixture.watch.sense(), Reading::Temperature(85));
    }

    #[test]
    fn test_sense_degrades_to_unreadable_on_garbage_text() {
        let fixture = Fixture::new("&!");
        assert_eq!(fixture.watch.sense(), Reading::Unreadable);
    }

    #[test]
    fn test_cycle_dispatches_alert_and_report() {
        let fixture = Fixture::new("150");
        let mut state = MonitorState::new(&fixture.config, Instant::now());
        state.startup_grace = 0;

        fixture.watch.cycle(&mut state);

        assert_eq!(fixture.reporter.sent_alerts(), vec!["150".to_string()]);
        assert_eq!(
            fixture.reporter.sent_temperatures(),
            vec!["150".to_string()]
        );
    }

    #[test]
    fn test_cycle_swallows_unreadable_frames() {
        let fixture = Fixture::new("not a number");
        let mut state = MonitorState::new(&fixture.config, Instant::now());

        fixture.watch.cycle(&mut state);

        assert!(fixture.reporter.sent_alerts().is_empty());
        assert!(fixture.reporter.sent_temperatures().is_empty());
        assert_eq!(state.consecutive_failures, 1);
    }
}
