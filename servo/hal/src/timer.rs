//! Timer abstraction

use core::fmt;

/// Identity of a hardware timer peripheral (TIM1, TIM2, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u8);

impl TimerId {
    /// Bus clock domain feeding this timer.
    ///
    /// TIM1, TIM8, TIM9, TIM10 and TIM11 sit on APB2; every other timer on APB1.
    pub const fn clock_domain(self) -> ClockDomain {
        match self.0 {
            1 | 8 | 9 | 10 | 11 => ClockDomain::Apb2,
            _ => ClockDomain::Apb1,
        }
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TIM{}", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TimerId {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "TIM{}", self.0);
    }
}

/// Peripheral bus clock domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockDomain {
    Apb1,
    Apb2,
}

/// Timer input clocks per bus domain, in Hz.
///
/// Parts whose timers all run from the master clock set both fields equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTree {
    pub apb1_timer_clock: u32,
    pub apb2_timer_clock: u32,
}

impl ClockTree {
    /// Both domains clocked at the same rate
    pub const fn uniform(clock: u32) -> Self {
        Self {
            apb1_timer_clock: clock,
            apb2_timer_clock: clock,
        }
    }

    /// Input clock of the given timer
    pub const fn timer_clock(&self, timer: TimerId) -> u32 {
        match timer.clock_domain() {
            ClockDomain::Apb1 => self.apb1_timer_clock,
            ClockDomain::Apb2 => self.apb2_timer_clock,
        }
    }
}

impl Default for ClockTree {
    /// STM32F405 at 168 MHz: APB1 timers 84 MHz, APB2 timers 168 MHz
    fn default() -> Self {
        Self {
            apb1_timer_clock: 84_000_000,
            apb2_timer_clock: 168_000_000,
        }
    }
}

/// Counter behavior at the update event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnePulseMode {
    /// Counter keeps running across update events
    #[default]
    Repetitive,
    /// Counter stops at the next update event
    Single,
}

/// Dead-time and filter clock division
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockDivision {
    #[default]
    Div1,
    Div2,
    Div4,
}

/// Counting direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterMode {
    #[default]
    Up,
    Down,
    CenterAligned,
}

/// Time-base register template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeBaseConfig {
    pub prescaler: u16,
    pub period: u16,
    pub clock_division: ClockDivision,
    pub counter_mode: CounterMode,
    pub repetition_counter: u8,
}

/// Shared pulse timer driving one bank of outputs
pub trait ServoTimer {
    /// Peripheral identity; channels with equal ids share this timer
    fn id(&self) -> TimerId;

    /// Write prescaler, period, clock division and counter mode
    fn init_time_base(&self, config: &TimeBaseConfig);

    /// Current auto-reload (period) value
    fn auto_reload(&self) -> u16;

    /// Buffer auto-reload writes until the next update event
    fn set_auto_reload_preload(&self, enable: bool);

    /// Main output enable (advanced-control timers; no-op elsewhere)
    fn set_main_outputs(&self, enable: bool);

    /// Start or stop the counter
    fn set_enabled(&self, enable: bool);

    /// Select whether the counter stops at the update event
    fn select_one_pulse_mode(&self, mode: OnePulseMode);

    /// Software update event: reload shadow registers and restart the count
    fn generate_update(&self);

    /// Live counter value
    fn counter(&self) -> u16;
}
