#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

//! # Servo Driver
//!
//! Drives servo and ESC outputs by multiplexing output channels onto a small
//! set of shared hardware timers. Channels on the same timer form a bank;
//! each bank runs either free-running PWM (`BankMode::Synchronous`) or one
//! pulse per control cycle (`BankMode::SinglePulse`, OneShot/OneShot125).
//!
//! Per control cycle the mixer calls [`ServoDriver::set_pulse`] for each
//! channel and the scheduler then calls [`ServoDriver::update`] once.
//! Every operation is a bounded sequence of register accesses with no
//! allocation and no blocking.
//!
//! ```ignore
//! let config = ServoConfig::builder()
//!     .channel(tim3, tim3_ch1, pb4, AF2)
//!     .channel(tim3, tim3_ch2, pb5, AF2)
//!     .channel(tim9, tim9_ch2, pa3, AF3)
//!     .build()?;
//! let mut servo = ServoDriver::init(config)?;
//!
//! servo.set_rates(&[50, 2_000], &[0, 8_000_000], 2)?;
//! servo.set_bank_mode(servo.bank_of(0), BankMode::Synchronous)?;
//! servo.set_bank_mode(servo.bank_of(2), BankMode::SinglePulse)?;
//!
//! loop {
//!     servo.apply_frame(&mixer.outputs());
//! }
//! ```

#[macro_use]
mod logging;

pub mod config;
pub mod driver;
pub mod registry;
pub mod shared;

mod mode;
mod rates;
mod update;
mod writer;

pub use config::{ServoChannel, ServoConfig, ServoConfigBuilder};
pub use driver::{BankStatus, ServoDriver};
pub use registry::BankRegistry;
pub use shared::ServoCell;

pub use servo_core::{
    BankId, BankMode, ServoError, ServoResult, ServoTuning, MAX_BANKS, MAX_CHANNELS,
};
