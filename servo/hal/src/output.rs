//! Output-compare channel abstraction

/// Output-compare waveform mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OcMode {
    /// Active while counter < compare
    #[default]
    Pwm1,
    /// Inactive while counter < compare
    Pwm2,
}

/// Active level of the compare output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OcPolarity {
    #[default]
    High,
    Low,
}

/// Output-compare unit template shared by all channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputCompareConfig {
    pub mode: OcMode,
    pub polarity: OcPolarity,
    pub output_enable: bool,
    pub pulse: u16,
}

impl OutputCompareConfig {
    /// PWM mode 1, active high, output enabled, zero initial pulse
    pub const fn pwm() -> Self {
        Self {
            mode: OcMode::Pwm1,
            polarity: OcPolarity::High,
            output_enable: true,
            pulse: 0,
        }
    }
}

/// One compare channel of a bank timer.
///
/// Implementations resolve the channel number to its compare register once,
/// at construction, so writes on the control-loop path do not branch on it.
pub trait CompareOutput {
    /// Configure the compare unit from the template and set its preload
    fn init_output_compare(&self, config: &OutputCompareConfig, preload: bool);

    /// Write the compare value (pulse width in ticks)
    fn set_compare(&self, ticks: u16);

    /// Read back the compare value
    fn compare(&self) -> u16;
}
