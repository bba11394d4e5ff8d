//! Per-channel pulse writes

use servo_hal::{CompareOutput, ServoTimer};

use crate::ServoDriver;

impl<T: ServoTimer, O: CompareOutput, P> ServoDriver<T, O, P> {
    /// Command `channel` to emit a `width`-tick pulse.
    ///
    /// The width is clamped to `period - period / 50` of the channel's bank
    /// and folded into the bank's per-cycle maximum. Ignored while outputs
    /// are disabled or when `channel` is out of range.
    pub fn set_pulse(&mut self, channel: usize, width: u16) {
        if !self.enabled {
            return;
        }
        let Some(chan) = self.config.channels.get(channel) else {
            return;
        };

        let bank = &mut self.banks[self.registry.bank_of(channel).index()];
        let value = self.config.tuning.clamp_pulse(bank.period, width);
        if bank.max_pulse < value {
            bank.max_pulse = value;
        }
        chan.output.set_compare(value);
    }
}
