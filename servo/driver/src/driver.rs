//! Driver state and initialization

use servo_core::{BankId, BankMode, ServoResult, MAX_BANKS};
use servo_hal::{CompareOutput, OnePulseMode, ServoPin, ServoTimer, TimerId};

use crate::config::ServoConfig;
use crate::registry::BankRegistry;

/// Per-bank runtime state
#[derive(Debug)]
pub(crate) struct Bank<T> {
    pub(crate) timer: Option<T>,
    pub(crate) mode: BankMode,
    /// Largest width commanded this cycle, in ticks
    pub(crate) max_pulse: u16,
    /// Counter value at which the last single pulse is presumed finished
    pub(crate) next_update: u16,
    /// Auto-reload value, ticks per cycle minus one
    pub(crate) period: u16,
}

impl<T: ServoTimer> Bank<T> {
    const fn unused() -> Self {
        Self {
            timer: None,
            mode: BankMode::None,
            max_pulse: 0,
            next_update: 0,
            period: 0,
        }
    }

    /// Put the timer in repetitive mode and start it
    pub(crate) fn arm(&self) {
        if let Some(timer) = &self.timer {
            timer.select_one_pulse_mode(OnePulseMode::Repetitive);
            timer.set_enabled(true);
        }
    }

    fn status(&self) -> BankStatus {
        BankStatus {
            timer: self.timer.as_ref().map(|t| t.id()),
            mode: self.mode,
            period: self.period,
            max_pulse: self.max_pulse,
            next_update: self.next_update,
        }
    }
}

/// Snapshot of one bank's state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankStatus {
    pub timer: Option<TimerId>,
    pub mode: BankMode,
    pub period: u16,
    pub max_pulse: u16,
    pub next_update: u16,
}

#[cfg(feature = "defmt")]
impl defmt::Format for BankStatus {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "BankStatus{{ timer: {}, mode: {}, period: {}, max_pulse: {}, next_update: {} }}",
            self.timer,
            self.mode,
            self.period,
            self.max_pulse,
            self.next_update
        );
    }
}

/// Bank-multiplexed servo output driver.
///
/// One instance owns one set of output timers. All calls come from a single
/// context, normally the control loop: every `set_pulse` of a cycle first,
/// then exactly one `update`. Wrap the driver in a [`ServoCell`] when more
/// than one context needs to reach it.
///
/// [`ServoCell`]: crate::ServoCell
#[derive(Debug)]
pub struct ServoDriver<T, O, P> {
    pub(crate) config: ServoConfig<T, O, P>,
    pub(crate) registry: BankRegistry,
    pub(crate) banks: [Bank<T>; MAX_BANKS],
    pub(crate) enabled: bool,
}

impl<T, O, P> ServoDriver<T, O, P>
where
    T: ServoTimer + Clone,
    O: CompareOutput,
    P: ServoPin,
{
    /// Build the bank map, prepare every bank timer and enable outputs.
    ///
    /// Bank timers are left stopped; a bank starts pulsing once it is given
    /// a mode other than `BankMode::None`.
    pub fn init(config: ServoConfig<T, O, P>) -> ServoResult<Self> {
        let registry = match BankRegistry::build(config.channels.iter().map(|c| c.timer.id())) {
            Ok(registry) => registry,
            Err(err) => {
                servo_warn!("servo init rejected: {}", err);
                return Err(err);
            }
        };

        let mut banks: [Bank<T>; MAX_BANKS] = core::array::from_fn(|_| Bank::unused());

        for (channel, chan) in config.channels.iter().enumerate() {
            let bank_id = registry.bank_of(channel);
            let bank = &mut banks[bank_id.index()];
            if bank.timer.is_some() {
                continue;
            }

            let timer = chan.timer.clone();
            timer.set_auto_reload_preload(true);
            timer.set_main_outputs(true);
            timer.set_enabled(false);
            bank.period = timer.auto_reload();
            servo_debug!("{} -> {} (period {})", timer.id(), bank_id, bank.period);
            bank.timer = Some(timer);
        }

        servo_info!(
            "servo init: {} channels on {} banks",
            registry.channel_count(),
            registry.bank_count()
        );

        let mut driver = Self {
            config,
            registry,
            banks,
            enabled: false,
        };
        driver.enable();
        Ok(driver)
    }
}

impl<T: ServoTimer, O, P> ServoDriver<T, O, P> {
    /// The configuration the driver was initialized with
    pub fn config(&self) -> &ServoConfig<T, O, P> {
        &self.config
    }

    /// Channel to bank map
    pub fn registry(&self) -> &BankRegistry {
        &self.registry
    }

    /// Bank of `channel`; the first bank for out-of-range channels
    pub fn bank_of(&self, channel: usize) -> BankId {
        self.registry.bank_of(channel)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn channel_count(&self) -> usize {
        self.registry.channel_count()
    }

    /// Number of banks with a timer assigned
    pub fn bank_count(&self) -> usize {
        self.registry.bank_count()
    }

    /// Current mode of `bank`; `BankMode::None` for out-of-range ids
    pub fn bank_mode(&self, bank: BankId) -> BankMode {
        self.banks
            .get(bank.index())
            .map_or(BankMode::None, |b| b.mode)
    }

    /// Ticks per cycle of `bank`, `None` for unallocated banks
    pub fn bank_period(&self, bank: BankId) -> Option<u16> {
        self.banks
            .get(bank.index())
            .filter(|b| b.timer.is_some())
            .map(|b| b.period)
    }

    /// Hardware timer shared by `bank`, `None` for unallocated banks
    pub fn bank_timer(&self, bank: BankId) -> Option<TimerId> {
        self.registry.timer(bank)
    }

    /// Snapshot of `bank`, `None` for out-of-range ids
    pub fn bank_status(&self, bank: BankId) -> Option<BankStatus> {
        self.banks.get(bank.index()).map(Bank::status)
    }
}
