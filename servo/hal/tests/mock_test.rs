//! Mock register tests for servo-hal

use servo_hal::mock::{MockOutput, MockPin, MockTimer, PinFunction};
use servo_hal::{CompareOutput, OnePulseMode, OutputCompareConfig, ServoPin, ServoTimer, TimeBaseConfig};

#[test]
fn test_timer_clones_share_registers() {
    let timer = MockTimer::new(3, 19_999);
    let handle = timer.clone();

    handle.set_enabled(true);
    handle.select_one_pulse_mode(OnePulseMode::Single);
    assert!(timer.is_enabled());
    assert_eq!(timer.one_pulse_mode(), OnePulseMode::Single);
    assert_eq!(timer.auto_reload(), 19_999);
}

#[test]
fn test_timer_update_event_restarts_count() {
    let timer = MockTimer::new(3, 2_499);
    timer.set_counter(1_200);
    timer.generate_update();
    assert_eq!(timer.counter(), 0);
    assert_eq!(timer.update_events(), 1);
}

#[test]
fn test_timer_time_base_write() {
    let timer = MockTimer::new(1, 0);
    timer.init_time_base(&TimeBaseConfig {
        prescaler: 167,
        period: 2_499,
        ..TimeBaseConfig::default()
    });
    assert_eq!(timer.prescaler(), 167);
    assert_eq!(timer.auto_reload(), 2_499);
    assert_eq!(timer.time_base_writes(), 1);
}

#[test]
fn test_output_compare() {
    let output = MockOutput::new();
    assert_eq!(output.oc_config(), None);

    output.init_output_compare(&OutputCompareConfig::pwm(), true);
    output.set_compare(1_500);
    assert_eq!(output.compare(), 1_500);
    assert_eq!(output.compare_writes(), 1);
    assert!(output.preload());
    assert_eq!(output.oc_config(), Some(OutputCompareConfig::pwm()));
}

#[test]
fn test_pin_function() {
    let pin = MockPin::new();
    assert_eq!(pin.function(), PinFunction::Unconfigured);

    pin.restore_alternate(2);
    assert_eq!(pin.function(), PinFunction::Alternate(2));

    pin.force_low();
    assert!(pin.is_forced_low());
}
