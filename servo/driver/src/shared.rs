//! Critical-section cell for a driver reached from several contexts

use core::cell::RefCell;
use critical_section::Mutex;

/// Driver slot guarded by a critical section.
///
/// A `static` cell serializes the whole per-cycle sequence when the mixer,
/// the scheduler and arming logic run in different interrupt contexts.
/// Calls made before a driver is installed do nothing and return `None`.
///
/// ```ignore
/// static SERVO: ServoCell<Outputs> = ServoCell::new();
///
/// SERVO.install(ServoDriver::init(config)?);
/// SERVO.with(|servo| servo.apply_frame(&pulses));
/// ```
pub struct ServoCell<D> {
    inner: Mutex<RefCell<Option<D>>>,
}

impl<D> ServoCell<D> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Install a driver, returning the one it replaces
    pub fn install(&self, driver: D) -> Option<D> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).replace(driver))
    }

    /// Remove the installed driver
    pub fn take(&self) -> Option<D> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).take())
    }

    pub fn is_installed(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow_ref(cs).is_some())
    }

    /// Run `f` on the installed driver inside one critical section
    pub fn with<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut D) -> R,
    {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).as_mut().map(f))
    }
}

impl<D> Default for ServoCell<D> {
    fn default() -> Self {
        Self::new()
    }
}
