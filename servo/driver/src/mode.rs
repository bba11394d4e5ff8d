//! Bank pulse mode and output enable

use servo_core::{BankId, BankMode, ServoError, ServoResult};
use servo_hal::{CompareOutput, ServoPin, ServoTimer};

use crate::ServoDriver;

impl<T, O, P> ServoDriver<T, O, P>
where
    T: ServoTimer,
    O: CompareOutput,
    P: ServoPin,
{
    /// Set the protocol driven by `bank`.
    ///
    /// With outputs enabled the bank timer is put in repetitive mode and
    /// started at once, whatever the mode; a running counter is never halted
    /// mid-pulse. While disabled only the mode is stored; the next
    /// [`enable`](Self::enable) arms the banks whose mode is not `None`.
    pub fn set_bank_mode(&mut self, bank: BankId, mode: BankMode) -> ServoResult<()> {
        let enabled = self.enabled;
        let slot = self
            .banks
            .get_mut(bank.index())
            .ok_or(ServoError::InvalidBank(bank.raw()))?;
        slot.mode = mode;
        servo_debug!("{} mode {}", bank, mode);

        if !enabled {
            return Ok(());
        }

        slot.arm();
        Ok(())
    }

    /// Route every pin back to its compare output and restart armed banks.
    ///
    /// Compare units are reinitialized from the configured template with
    /// preload enabled. Bank modes and rates survive a disable/enable pair.
    pub fn enable(&mut self) {
        for channel in self.config.channels.iter() {
            channel.pin.restore_alternate(channel.remap);
            channel
                .output
                .init_output_compare(&self.config.output_compare, true);
        }

        for bank in self.banks.iter().filter(|b| b.mode.is_armed()) {
            bank.arm();
        }

        self.enabled = true;
        servo_info!("servo outputs enabled");
    }

    /// Force every output pin to a static low level.
    ///
    /// Pulses stop on the spot. Timers, modes and rates are left alone so
    /// [`enable`](Self::enable) resumes exactly where things were; pulse
    /// writes and updates are ignored until then.
    pub fn disable(&mut self) {
        self.enabled = false;

        // Low is safe for ESCs and servos; inverted brushed setups would see full throttle.
        for channel in self.config.channels.iter() {
            channel.pin.force_low();
        }
        servo_info!("servo outputs disabled");
    }
}
