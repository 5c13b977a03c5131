use pirates_revenge::{Countdown, CountdownEvent};
use std::time::Duration;

const INTERVAL: Duration = Duration::from_millis(200);

#[test]
fn test_seven_seconds_ticks_thirty_six_times() {
    let mut countdown = Countdown::new();
    countdown.start(7, INTERVAL);
    let mut ticks = 0;
    let mut expired = 0;
    while let Some(event) = countdown.tick() {
        match event {
            CountdownEvent::Tick(_) => ticks += 1,
            CountdownEvent::Expired => expired += 1,
        }
    }
    assert_eq!(ticks, 36);
    assert_eq!(expired, 1);
    assert!(!countdown.is_running());
    assert_eq!(countdown.tick_interval(), INTERVAL);
}

#[test]
fn test_fractions_run_from_full_to_empty() {
    let mut countdown = Countdown::new();
    countdown.start(1, INTERVAL);
    assert_eq!(countdown.fraction(), 1.0);
    let mut fractions = Vec::new();
    while let Some(CountdownEvent::Tick(f)) = countdown.tick() {
        fractions.push(f);
    }
    assert_eq!(fractions, vec![1.0, 0.8, 0.6, 0.4, 0.2, 0.0]);
    assert_eq!(countdown.fraction(), 0.0);
}

#[test]
fn test_cancel_stops_ticks_and_expiry() {
    for after in 0..36 {
        let mut countdown = Countdown::new();
        countdown.start(7, INTERVAL);
        for _ in 0..after {
            assert!(matches!(countdown.tick(), Some(CountdownEvent::Tick(_))));
        }
        countdown.cancel();
        countdown.cancel();
        assert_eq!(countdown.tick(), None);
        assert_eq!(countdown.tick(), None);
    }
}

#[test]
fn test_cancel_before_start_is_harmless() {
    let mut countdown = Countdown::new();
    countdown.cancel();
    assert!(!countdown.is_running());
    assert_eq!(countdown.tick(), None);
}

#[test]
fn test_restart_rearms() {
    let mut countdown = Countdown::new();
    countdown.start(1, INTERVAL);
    while countdown.tick().is_some() {}
    countdown.start(1, INTERVAL);
    assert!(countdown.is_running());
    assert_eq!(countdown.tick(), Some(CountdownEvent::Tick(1.0)));
}
