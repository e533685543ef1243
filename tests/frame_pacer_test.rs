use std::time::Duration;

use matrix_rain::term::FramePacer;
use matrix_rain::types::RainConfig;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn frame_pacer_sleeps_for_leftover_budget() {
    let p = FramePacer::new(ms(33), Duration::from_micros(1024));
    assert_eq!(p.remaining(ms(10)), Some(ms(23)));
    assert_eq!(p.remaining(Duration::ZERO), Some(ms(33)));
}

#[test]
fn frame_pacer_skips_tiny_remainders() {
    let p = FramePacer::new(ms(33), Duration::from_micros(1024));
    assert_eq!(p.remaining(ms(32)), None);
    assert_eq!(p.remaining(Duration::from_micros(33_000 - 1024)), None);
    assert!(p.remaining(Duration::from_micros(33_000 - 1025)).is_some());
}

#[test]
fn frame_pacer_never_sleeps_after_overrun() {
    let p = FramePacer::new(ms(33), Duration::from_micros(1024));
    assert_eq!(p.remaining(ms(33)), None);
    assert_eq!(p.remaining(ms(500)), None);
}

#[test]
fn frame_pacer_default_budget_is_thirty_fps() {
    let p = FramePacer::from_config(&RainConfig::default());
    assert_eq!(p.budget(), Duration::from_micros(33_333));
}
