//! Driver configuration record

use heapless::Vec;
use servo_core::{ServoError, ServoResult, ServoTuning, MAX_CHANNELS};
use servo_hal::{ClockTree, OutputCompareConfig, TimeBaseConfig};

/// One output channel: its bank timer, compare register, pin and alternate function
#[derive(Debug, Clone)]
pub struct ServoChannel<T, O, P> {
    pub timer: T,
    pub output: O,
    pub pin: P,
    /// Alternate-function selector routing `pin` to the compare output
    pub remap: u8,
}

impl<T, O, P> ServoChannel<T, O, P> {
    pub fn new(timer: T, output: O, pin: P, remap: u8) -> Self {
        Self {
            timer,
            output,
            pin,
            remap,
        }
    }
}

/// Immutable output configuration handed to [`ServoDriver::init`].
///
/// Channels are listed in output order; channel `i` is what the mixer
/// addresses as output `i`.
///
/// [`ServoDriver::init`]: crate::ServoDriver::init
#[derive(Debug, Clone)]
pub struct ServoConfig<T, O, P> {
    pub channels: Vec<ServoChannel<T, O, P>, MAX_CHANNELS>,
    /// Time-base template used by rate updates
    pub time_base: TimeBaseConfig,
    /// Output-compare template applied to every channel on enable
    pub output_compare: OutputCompareConfig,
    pub clocks: ClockTree,
    pub tuning: ServoTuning,
}

impl<T, O, P> ServoConfig<T, O, P> {
    /// Creates a new configuration builder.
    pub fn builder() -> ServoConfigBuilder<T, O, P> {
        ServoConfigBuilder::new()
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }
}

/// Builder for [`ServoConfig`].
#[derive(Debug)]
pub struct ServoConfigBuilder<T, O, P> {
    channels: Vec<ServoChannel<T, O, P>, MAX_CHANNELS>,
    time_base: TimeBaseConfig,
    output_compare: OutputCompareConfig,
    clocks: ClockTree,
    tuning: ServoTuning,
    overflow: bool,
}

impl<T, O, P> ServoConfigBuilder<T, O, P> {
    fn new() -> Self {
        Self {
            channels: Vec::new(),
            time_base: TimeBaseConfig::default(),
            output_compare: OutputCompareConfig::pwm(),
            clocks: ClockTree::default(),
            tuning: ServoTuning::new(),
            overflow: false,
        }
    }

    /// Append the next output channel.
    pub fn channel(mut self, timer: T, output: O, pin: P, remap: u8) -> Self {
        if self
            .channels
            .push(ServoChannel::new(timer, output, pin, remap))
            .is_err()
        {
            self.overflow = true;
        }
        self
    }

    pub fn time_base(mut self, time_base: TimeBaseConfig) -> Self {
        self.time_base = time_base;
        self
    }

    pub fn output_compare(mut self, output_compare: OutputCompareConfig) -> Self {
        self.output_compare = output_compare;
        self
    }

    pub fn clocks(mut self, clocks: ClockTree) -> Self {
        self.clocks = clocks;
        self
    }

    pub fn tuning(mut self, tuning: ServoTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Period divisor for the end-of-period margin (default 50, i.e. 2%).
    pub fn margin_divisor(mut self, divisor: u16) -> Self {
        self.tuning.margin_divisor = divisor;
        self
    }

    /// Single-pulse re-arm window in ticks (default 50).
    pub fn safe_margin(mut self, ticks: u16) -> Self {
        self.tuning.safe_margin = ticks;
        self
    }

    /// Counter clock used when a rate update gives no override (default 1 MHz).
    pub fn default_timer_clock(mut self, hz: u32) -> Self {
        self.tuning.default_timer_clock = hz;
        self
    }

    /// Builds the configuration, failing if more than `MAX_CHANNELS` channels were added.
    pub fn build(self) -> ServoResult<ServoConfig<T, O, P>> {
        if self.overflow {
            return Err(ServoError::TooManyChannels);
        }
        Ok(ServoConfig {
            channels: self.channels,
            time_base: self.time_base,
            output_compare: self.output_compare,
            clocks: self.clocks,
            tuning: self.tuning,
        })
    }
}
