//! Timing arithmetic tests for servo-core

use servo_core::{ServoError, ServoTuning, TimeBase, DEFAULT_TIMER_CLOCK};

#[test]
fn test_clamp_at_margin() {
    let tuning = ServoTuning::default();
    assert_eq!(tuning.clamp_pulse(20_000, 19_999), 19_600);
    assert_eq!(tuning.clamp_pulse(20_000, 19_600), 19_600);
    assert_eq!(tuning.clamp_pulse(20_000, 1_500), 1_500);
}

#[test]
fn test_clamp_zero_period() {
    let tuning = ServoTuning::default();
    assert_eq!(tuning.clamp_pulse(0, 1_000), 0);
}

#[test]
fn test_rearm_threshold_does_not_wrap() {
    let tuning = ServoTuning::default();
    assert_eq!(tuning.rearm_threshold(u16::MAX), u16::MAX as u32 + 50);
}

#[test]
fn test_time_base_50hz_at_1mhz() {
    // 84 MHz APB1 timer clock, 1 MHz counter, 50 Hz servo frame
    let base = TimeBase::from_rate(84_000_000, DEFAULT_TIMER_CLOCK, 50).unwrap();
    assert_eq!(base.prescaler, 83);
    assert_eq!(base.period, 19_999);
}

#[test]
fn test_time_base_oneshot125() {
    // 168 MHz APB2, 8 MHz counter, 2 kHz frame
    let base = TimeBase::from_rate(168_000_000, 8_000_000, 2_000).unwrap();
    assert_eq!(base.prescaler, 20);
    assert_eq!(base.period, 3_999);
}

#[test]
fn test_time_base_rejects_zero_rate() {
    assert_eq!(
        TimeBase::from_rate(84_000_000, DEFAULT_TIMER_CLOCK, 0),
        Err(ServoError::InvalidRate)
    );
}

#[test]
fn test_time_base_rejects_wide_period() {
    // 1 MHz / 10 Hz needs 100_000 ticks
    assert_eq!(
        TimeBase::from_rate(84_000_000, DEFAULT_TIMER_CLOCK, 10),
        Err(ServoError::InvalidRate)
    );
}

#[test]
fn test_time_base_rejects_bad_clock() {
    assert_eq!(
        TimeBase::from_rate(84_000_000, 0, 50),
        Err(ServoError::InvalidClock)
    );
    assert_eq!(
        TimeBase::from_rate(1_000_000, 2_000_000, 50),
        Err(ServoError::InvalidClock)
    );
    // 168 MHz / 1 kHz would need a prescaler of 167_999
    assert_eq!(
        TimeBase::from_rate(168_000_000, 1_000, 1),
        Err(ServoError::InvalidClock)
    );
}
