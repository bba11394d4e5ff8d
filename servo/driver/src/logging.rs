//! Logging macros
//!
//! Forward to `defmt` on target builds with the `defmt` feature, to the `log`
//! facade with the `log` feature, and compile to nothing otherwise. Format
//! strings stick to plain `{}` so both backends accept them.

macro_rules! servo_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($($arg)*);

        #[cfg(all(feature = "log", not(feature = "defmt")))]
        ::log::debug!($($arg)*);

        #[cfg(not(any(feature = "defmt", feature = "log")))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

macro_rules! servo_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::info!($($arg)*);

        #[cfg(all(feature = "log", not(feature = "defmt")))]
        ::log::info!($($arg)*);

        #[cfg(not(any(feature = "defmt", feature = "log")))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

macro_rules! servo_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::warn!($($arg)*);

        #[cfg(all(feature = "log", not(feature = "defmt")))]
        ::log::warn!($($arg)*);

        #[cfg(not(any(feature = "defmt", feature = "log")))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}
