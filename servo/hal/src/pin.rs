//! Output pin function control

/// Physical pin carrying a compare output
pub trait ServoPin {
    /// Route the pin to its timer compare output through alternate function `remap`
    fn restore_alternate(&self, remap: u8);

    /// Take the pin away from the timer as a push-pull output driven low
    fn force_low(&self);
}
