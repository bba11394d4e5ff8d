#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

//! # Servo Core
//!
//! Core types shared by the servo output layers: bank identity and protocol
//! mode, configuration errors, and the tick arithmetic used to program bank
//! timers and clamp commanded pulse widths.

use core::fmt;

pub mod bank;
pub mod timing;

pub use bank::*;
pub use timing::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hardware maximum number of timer banks
pub const MAX_BANKS: usize = 6;

/// Maximum number of output channels a configuration may declare
pub const MAX_CHANNELS: usize = 12;

/// Result type used throughout the servo output crates
pub type ServoResult<T> = Result<T, ServoError>;

/// Configuration errors.
///
/// Every variant describes a build-time misconfiguration. Operations that
/// return one of these leave hardware and driver state untouched; firmware is
/// expected to halt rather than run with an inconsistent bank map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServoError {
    /// More distinct timers than `MAX_BANKS`
    TooManyBanks,
    /// More channels than `MAX_CHANNELS`
    TooManyChannels,
    /// Bank index outside `0..MAX_BANKS`
    InvalidBank(u8),
    /// Bank count passed to a rate update exceeds `MAX_BANKS`
    InvalidBankCount(usize),
    /// Rate or clock table shorter than the requested bank count
    RateTableTooShort,
    /// Update rate is zero or does not fit the 16-bit period register
    InvalidRate,
    /// Target clock is zero, above the input clock, or needs a prescaler wider than 16 bits
    InvalidClock,
}

impl fmt::Display for ServoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServoError::TooManyBanks => write!(f, "Too many timer banks (max {})", MAX_BANKS),
            ServoError::TooManyChannels => write!(f, "Too many channels (max {})", MAX_CHANNELS),
            ServoError::InvalidBank(bank) => write!(f, "Invalid bank index {}", bank),
            ServoError::InvalidBankCount(count) => {
                write!(f, "Bank count {} exceeds maximum {}", count, MAX_BANKS)
            }
            ServoError::RateTableTooShort => write!(f, "Rate table shorter than bank count"),
            ServoError::InvalidRate => write!(f, "Invalid update rate"),
            ServoError::InvalidClock => write!(f, "Invalid timer clock"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ServoError {}

#[cfg(feature = "defmt")]
impl defmt::Format for ServoError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ServoError::TooManyBanks => defmt::write!(fmt, "TooManyBanks"),
            ServoError::TooManyChannels => defmt::write!(fmt, "TooManyChannels"),
            ServoError::InvalidBank(bank) => defmt::write!(fmt, "InvalidBank({})", bank),
            ServoError::InvalidBankCount(count) => {
                defmt::write!(fmt, "InvalidBankCount({})", count)
            }
            ServoError::RateTableTooShort => defmt::write!(fmt, "RateTableTooShort"),
            ServoError::InvalidRate => defmt::write!(fmt, "InvalidRate"),
            ServoError::InvalidClock => defmt::write!(fmt, "InvalidClock"),
        }
    }
}
