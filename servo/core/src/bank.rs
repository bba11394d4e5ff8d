//! Bank identity and per-bank protocol mode

use core::fmt;
use crate::{ServoError, ServoResult, MAX_BANKS};

/// Type-safe index of a timer bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BankId(u8);

impl BankId {
    /// First bank, also returned for out-of-range channel lookups
    pub const FIRST: BankId = BankId(0);

    /// Create a bank id, rejecting indices at or above `MAX_BANKS`
    pub fn new(index: u8) -> ServoResult<Self> {
        if index as usize >= MAX_BANKS {
            Err(ServoError::InvalidBank(index))
        } else {
            Ok(BankId(index))
        }
    }

    /// Create a bank id without validation (const fn)
    pub const fn new_unchecked(index: u8) -> Self {
        BankId(index)
    }

    /// Get the raw bank index
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Bank index as an array offset
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bank({})", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for BankId {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "Bank({})", self.0);
    }
}

/// Pulse protocol driven by a bank.
///
/// Any mode may follow any other; a change takes effect immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BankMode {
    /// Bank timer is never armed
    #[default]
    None,
    /// Free-running periodic PWM at the configured rate
    Synchronous,
    /// One pulse per control cycle, re-armed by the output update (OneShot/OneShot125)
    SinglePulse,
}

impl BankMode {
    /// Whether a bank in this mode has its timer running while outputs are enabled
    pub const fn is_armed(self) -> bool {
        !matches!(self, BankMode::None)
    }
}

impl fmt::Display for BankMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BankMode::None => write!(f, "None"),
            BankMode::Synchronous => write!(f, "Synchronous"),
            BankMode::SinglePulse => write!(f, "SinglePulse"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for BankMode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            BankMode::None => defmt::write!(fmt, "None"),
            BankMode::Synchronous => defmt::write!(fmt, "Synchronous"),
            BankMode::SinglePulse => defmt::write!(fmt, "SinglePulse"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_id_bounds() {
        assert!(BankId::new(0).is_ok());
        assert!(BankId::new((MAX_BANKS - 1) as u8).is_ok());
        assert_eq!(
            BankId::new(MAX_BANKS as u8),
            Err(ServoError::InvalidBank(MAX_BANKS as u8))
        );
    }

    #[test]
    fn test_mode_armed() {
        assert!(!BankMode::None.is_armed());
        assert!(BankMode::Synchronous.is_armed());
        assert!(BankMode::SinglePulse.is_armed());
        assert_eq!(BankMode::default(), BankMode::None);
    }
}
