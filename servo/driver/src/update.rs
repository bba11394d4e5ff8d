//! End-of-cycle output update

use servo_core::{BankId, BankMode};
use servo_hal::{CompareOutput, ServoTimer};

use crate::ServoDriver;

impl<T: ServoTimer, O: CompareOutput, P> ServoDriver<T, O, P> {
    /// Close the current control cycle.
    ///
    /// Call once per cycle, after all of the cycle's [`set_pulse`](Self::set_pulse)
    /// calls. SinglePulse banks whose previous pulse has run out (counter past
    /// the last width plus the safe margin) get a software update event, which
    /// loads this cycle's compare values and fires one pulse; a bank still
    /// busy with a long pulse skips this cycle. Every channel of a SinglePulse
    /// bank is then zeroed so that an output not commanded next cycle emits
    /// nothing. Synchronous banks free-run and only have their per-cycle
    /// maximum cleared.
    pub fn update(&mut self) {
        if !self.enabled {
            return;
        }

        let tuning = self.config.tuning;
        for bank in self.banks.iter_mut() {
            if bank.mode == BankMode::SinglePulse {
                if let Some(timer) = &bank.timer {
                    if timer.counter() as u32 > tuning.rearm_threshold(bank.next_update) {
                        timer.generate_update();
                        bank.next_update = bank.max_pulse;
                    }
                }
            }
            bank.max_pulse = 0;
        }

        for (index, bank) in self.banks.iter().enumerate() {
            if bank.mode != BankMode::SinglePulse {
                continue;
            }
            for channel in self.registry.channels(BankId::new_unchecked(index as u8)) {
                if let Some(chan) = self.config.channels.get(channel) {
                    chan.output.set_compare(0);
                }
            }
        }
    }

    /// Write one pulse per channel, in channel order, then close the cycle.
    ///
    /// Entries past the configured channel count are ignored.
    pub fn apply_frame(&mut self, pulses: &[u16]) {
        for (channel, width) in pulses.iter().enumerate() {
            self.set_pulse(channel, *width);
        }
        self.update();
    }
}
