//! Channel to bank grouping
//!
//! Channels are partitioned by timer identity. Bank ids are handed out in
//! first-seen order, so every channel on a given timer lands in the same
//! bank no matter where it appears in the configuration.

use heapless::Vec;
use servo_core::{BankId, ServoError, ServoResult, MAX_BANKS, MAX_CHANNELS};
use servo_hal::TimerId;

/// Immutable channel to bank map built once at init
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankRegistry {
    /// Bank of each channel, indexed by channel
    pin_bank: Vec<BankId, MAX_CHANNELS>,
    /// Timer of each allocated bank, indexed by bank
    timers: Vec<TimerId, MAX_BANKS>,
}

impl BankRegistry {
    /// Group channels by timer, given each channel's timer in configuration order.
    ///
    /// Fails with `TooManyBanks` when more than `MAX_BANKS` distinct timers
    /// appear and `TooManyChannels` past `MAX_CHANNELS` entries.
    pub fn build<I>(channel_timers: I) -> ServoResult<Self>
    where
        I: IntoIterator<Item = TimerId>,
    {
        let mut registry = Self {
            pin_bank: Vec::new(),
            timers: Vec::new(),
        };

        for timer in channel_timers {
            let bank = match registry.timers.iter().position(|t| *t == timer) {
                Some(index) => index,
                None => {
                    registry
                        .timers
                        .push(timer)
                        .map_err(|_| ServoError::TooManyBanks)?;
                    registry.timers.len() - 1
                }
            };
            registry
                .pin_bank
                .push(BankId::new_unchecked(bank as u8))
                .map_err(|_| ServoError::TooManyChannels)?;
        }

        Ok(registry)
    }

    /// Bank of `channel`; `BankId::FIRST` when out of range
    pub fn bank_of(&self, channel: usize) -> BankId {
        self.pin_bank.get(channel).copied().unwrap_or(BankId::FIRST)
    }

    /// Number of allocated banks
    pub fn bank_count(&self) -> usize {
        self.timers.len()
    }

    pub fn channel_count(&self) -> usize {
        self.pin_bank.len()
    }

    /// Timer shared by a bank, if the bank is allocated
    pub fn timer(&self, bank: BankId) -> Option<TimerId> {
        self.timers.get(bank.index()).copied()
    }

    /// Channels assigned to `bank`, in configuration order
    pub fn channels(&self, bank: BankId) -> impl Iterator<Item = usize> + '_ {
        self.pin_bank
            .iter()
            .enumerate()
            .filter(move |(_, b)| **b == bank)
            .map(|(channel, _)| channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u8]) -> impl Iterator<Item = TimerId> + '_ {
        raw.iter().map(|id| TimerId(*id))
    }

    #[test]
    fn test_contiguous_channels() {
        let registry = BankRegistry::build(ids(&[3, 3, 4, 4])).unwrap();
        assert_eq!(registry.bank_count(), 2);
        assert_eq!(registry.bank_of(0), BankId::new_unchecked(0));
        assert_eq!(registry.bank_of(1), BankId::new_unchecked(0));
        assert_eq!(registry.bank_of(2), BankId::new_unchecked(1));
        assert_eq!(registry.bank_of(3), BankId::new_unchecked(1));
    }

    #[test]
    fn test_interleaved_channels() {
        let registry = BankRegistry::build(ids(&[3, 4, 3, 8, 4])).unwrap();
        assert_eq!(registry.bank_count(), 3);
        assert_eq!(registry.bank_of(0), registry.bank_of(2));
        assert_eq!(registry.bank_of(1), registry.bank_of(4));
        assert_eq!(registry.bank_of(3), BankId::new_unchecked(2));
        assert_eq!(registry.timer(BankId::new_unchecked(1)), Some(TimerId(4)));

        let bank0: heapless::Vec<usize, 4> = registry.channels(BankId::FIRST).collect();
        assert_eq!(&bank0[..], &[0, 2]);
    }

    #[test]
    fn test_out_of_range_defaults_to_first_bank() {
        let registry = BankRegistry::build(ids(&[3, 4])).unwrap();
        assert_eq!(registry.bank_of(7), BankId::FIRST);
        assert_eq!(registry.timer(BankId::new_unchecked(5)), None);
    }

    #[test]
    fn test_too_many_banks() {
        let result = BankRegistry::build(ids(&[1, 2, 3, 4, 5, 8, 9]));
        assert_eq!(result, Err(ServoError::TooManyBanks));
    }

    #[test]
    fn test_too_many_channels() {
        let result = BankRegistry::build(ids(&[3; MAX_CHANNELS + 1]));
        assert_eq!(result, Err(ServoError::TooManyChannels));
    }
}
