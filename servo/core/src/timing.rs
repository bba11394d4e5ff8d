//! Tick arithmetic for bank timers and pulse widths

use crate::{ServoError, ServoResult};

/// Fraction of the period (1/50 = 2%) reserved at its end so a pulse edge
/// never meets the next period boundary
pub const PULSE_MARGIN_DIVISOR: u16 = 50;

/// Ticks past the previous single pulse's width before a bank may be re-armed
pub const SINGLE_PULSE_SAFE_MARGIN: u16 = 50;

/// Counter clock used when no per-bank override is given (1 MHz, 1 tick = 1 us)
pub const DEFAULT_TIMER_CLOCK: u32 = 1_000_000;

/// Per-deployment tuning of the output timing constants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServoTuning {
    /// Period divisor giving the end-of-period margin
    pub margin_divisor: u16,
    /// Re-arm window for single-pulse banks, in ticks
    pub safe_margin: u16,
    /// Default counter clock in Hz
    pub default_timer_clock: u32,
}

impl ServoTuning {
    /// Tuning with the standard constants
    pub const fn new() -> Self {
        Self {
            margin_divisor: PULSE_MARGIN_DIVISOR,
            safe_margin: SINGLE_PULSE_SAFE_MARGIN,
            default_timer_clock: DEFAULT_TIMER_CLOCK,
        }
    }

    /// Margin in ticks for a given period; zero divisor disables the margin
    pub const fn margin(&self, period: u16) -> u16 {
        if self.margin_divisor == 0 {
            0
        } else {
            period / self.margin_divisor
        }
    }

    /// Largest pulse width accepted for a period
    pub const fn max_pulse(&self, period: u16) -> u16 {
        period - self.margin(period)
    }

    /// Clamp a commanded width to `period - margin`
    pub fn clamp_pulse(&self, period: u16, width: u16) -> u16 {
        width.min(self.max_pulse(period))
    }

    /// Counter value past which the previously armed single pulse is complete
    pub const fn rearm_threshold(&self, next_update: u16) -> u32 {
        next_update as u32 + self.safe_margin as u32
    }

    /// Target clock for a bank: the override when non-zero, otherwise the default
    pub const fn target_clock(&self, clock_override: u32) -> u32 {
        if clock_override != 0 {
            clock_override
        } else {
            self.default_timer_clock
        }
    }
}

impl Default for ServoTuning {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ServoTuning {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "ServoTuning{{ margin_divisor: {}, safe_margin: {}, default_timer_clock: {} }}",
            self.margin_divisor,
            self.safe_margin,
            self.default_timer_clock
        );
    }
}

/// Prescaler and period register values for one bank timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBase {
    /// Input clock divider minus one
    pub prescaler: u16,
    /// Counter ticks per cycle minus one (auto-reload value)
    pub period: u16,
}

impl TimeBase {
    /// Compute the time base hitting `rate_hz` with a counter clocked at `target_clock`.
    ///
    /// `prescaler = base_clock / target_clock - 1` and
    /// `period = target_clock / rate_hz - 1`, both in 16-bit registers.
    pub fn from_rate(base_clock: u32, target_clock: u32, rate_hz: u16) -> ServoResult<Self> {
        if target_clock == 0 {
            return Err(ServoError::InvalidClock);
        }
        let divider = base_clock / target_clock;
        if divider == 0 || divider - 1 > u16::MAX as u32 {
            return Err(ServoError::InvalidClock);
        }

        if rate_hz == 0 {
            return Err(ServoError::InvalidRate);
        }
        let ticks = target_clock / rate_hz as u32;
        if ticks == 0 || ticks - 1 > u16::MAX as u32 {
            return Err(ServoError::InvalidRate);
        }

        Ok(Self {
            prescaler: (divider - 1) as u16,
            period: (ticks - 1) as u16,
        })
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TimeBase {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "TimeBase{{ psc: {}, arr: {} }}", self.prescaler, self.period);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_truncates() {
        let tuning = ServoTuning::new();
        assert_eq!(tuning.margin(20_000), 400);
        assert_eq!(tuning.margin(2_499), 49);
        assert_eq!(tuning.margin(49), 0);
    }

    #[test]
    fn test_zero_divisor_disables_margin() {
        let tuning = ServoTuning {
            margin_divisor: 0,
            ..ServoTuning::new()
        };
        assert_eq!(tuning.clamp_pulse(20_000, 20_000), 20_000);
    }

    #[test]
    fn test_target_clock_override() {
        let tuning = ServoTuning::new();
        assert_eq!(tuning.target_clock(0), DEFAULT_TIMER_CLOCK);
        assert_eq!(tuning.target_clock(8_000_000), 8_000_000);
    }
}
