//! Hardware abstraction for servo outputs
//!
//! Register-level traits the servo output driver consumes. Implementations
//! wrap a vendor HAL or PAC; every method is a bounded register access that
//! never blocks, so the driver can call them from a real-time control cycle.
//!
//! Handles are shared: all trait methods take `&self`, the way register
//! blocks are written through shared references.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod output;
pub mod pin;
pub mod timer;

#[cfg(feature = "mock")]
pub mod mock;

// Re-export commonly used types
pub use output::{CompareOutput, OutputCompareConfig, OcMode, OcPolarity};
pub use pin::ServoPin;
pub use timer::{
    ClockDivision, ClockDomain, ClockTree, CounterMode, OnePulseMode, ServoTimer, TimeBaseConfig,
    TimerId,
};
