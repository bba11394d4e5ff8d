//! Mock timer, compare channel and pin for host testing
//!
//! Register state lives behind an `Rc`, so a test keeps one clone and hands
//! the other to the driver, then inspects what the driver wrote.

use std::cell::Cell;
use std::rc::Rc;

use crate::output::{CompareOutput, OutputCompareConfig};
use crate::pin::ServoPin;
use crate::timer::{OnePulseMode, ServoTimer, TimeBaseConfig, TimerId};

#[derive(Debug, Default)]
struct TimerRegisters {
    time_base: Cell<TimeBaseConfig>,
    time_base_writes: Cell<u32>,
    arr_preload: Cell<bool>,
    main_outputs: Cell<bool>,
    enabled: Cell<bool>,
    one_pulse: Cell<OnePulseMode>,
    counter: Cell<u16>,
    update_events: Cell<u32>,
}

/// Mock timer peripheral
///
/// Tracks time base, counter state and software update events.
#[derive(Debug, Clone)]
pub struct MockTimer {
    id: TimerId,
    regs: Rc<TimerRegisters>,
}

impl MockTimer {
    /// Create a stopped timer with the given auto-reload value
    pub fn new(id: u8, period: u16) -> Self {
        let regs = TimerRegisters::default();
        regs.time_base.set(TimeBaseConfig {
            period,
            ..TimeBaseConfig::default()
        });
        Self {
            id: TimerId(id),
            regs: Rc::new(regs),
        }
    }

    /// Force the live counter value
    pub fn set_counter(&self, value: u16) {
        self.regs.counter.set(value);
    }

    /// Last written time base
    pub fn time_base(&self) -> TimeBaseConfig {
        self.regs.time_base.get()
    }

    /// Number of time-base writes
    pub fn time_base_writes(&self) -> u32 {
        self.regs.time_base_writes.get()
    }

    /// Prescaler from the last time-base write
    pub fn prescaler(&self) -> u16 {
        self.regs.time_base.get().prescaler
    }

    /// Whether the counter is running
    pub fn is_enabled(&self) -> bool {
        self.regs.enabled.get()
    }

    /// Auto-reload preload bit
    pub fn arr_preload(&self) -> bool {
        self.regs.arr_preload.get()
    }

    /// Main output enable bit (advanced timers)
    pub fn main_outputs(&self) -> bool {
        self.regs.main_outputs.get()
    }

    /// One-pulse mode last selected
    pub fn one_pulse_mode(&self) -> OnePulseMode {
        self.regs.one_pulse.get()
    }

    /// Number of software update events generated
    pub fn update_events(&self) -> u32 {
        self.regs.update_events.get()
    }
}

impl ServoTimer for MockTimer {
    fn id(&self) -> TimerId {
        self.id
    }

    fn init_time_base(&self, config: &TimeBaseConfig) {
        self.regs.time_base.set(*config);
        self.regs
            .time_base_writes
            .set(self.regs.time_base_writes.get() + 1);
    }

    fn auto_reload(&self) -> u16 {
        self.regs.time_base.get().period
    }

    fn set_auto_reload_preload(&self, enable: bool) {
        self.regs.arr_preload.set(enable);
    }

    fn set_main_outputs(&self, enable: bool) {
        self.regs.main_outputs.set(enable);
    }

    fn set_enabled(&self, enable: bool) {
        self.regs.enabled.set(enable);
    }

    fn select_one_pulse_mode(&self, mode: OnePulseMode) {
        self.regs.one_pulse.set(mode);
    }

    fn generate_update(&self) {
        self.regs.counter.set(0);
        self.regs.update_events.set(self.regs.update_events.get() + 1);
    }

    fn counter(&self) -> u16 {
        self.regs.counter.get()
    }
}

#[derive(Debug, Default)]
struct CompareRegisters {
    compare: Cell<u16>,
    writes: Cell<u32>,
    config: Cell<Option<OutputCompareConfig>>,
    preload: Cell<bool>,
}

/// Mock compare channel
#[derive(Debug, Clone, Default)]
pub struct MockOutput {
    regs: Rc<CompareRegisters>,
}

impl MockOutput {
    /// Compare channel with a zeroed register
    pub fn new() -> Self {
        Self::default()
    }

    /// Template applied by the last output-compare init, if any
    pub fn oc_config(&self) -> Option<OutputCompareConfig> {
        self.regs.config.get()
    }

    /// Compare preload bit from the last output-compare init
    pub fn preload(&self) -> bool {
        self.regs.preload.get()
    }

    /// Number of compare register writes
    pub fn compare_writes(&self) -> u32 {
        self.regs.writes.get()
    }
}

impl CompareOutput for MockOutput {
    fn init_output_compare(&self, config: &OutputCompareConfig, preload: bool) {
        self.regs.config.set(Some(*config));
        self.regs.preload.set(preload);
    }

    fn set_compare(&self, ticks: u16) {
        self.regs.compare.set(ticks);
        self.regs.writes.set(self.regs.writes.get() + 1);
    }

    fn compare(&self) -> u16 {
        self.regs.compare.get()
    }
}

/// Function currently selected on a mock pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PinFunction {
    #[default]
    Unconfigured,
    /// Routed to the timer through the given alternate function
    Alternate(u8),
    /// Static push-pull output at logic low
    OutputLow,
}

/// Mock output pin
#[derive(Debug, Clone, Default)]
pub struct MockPin {
    function: Rc<Cell<PinFunction>>,
}

impl MockPin {
    /// Pin in its reset, unconfigured state
    pub fn new() -> Self {
        Self::default()
    }

    /// Function currently selected
    pub fn function(&self) -> PinFunction {
        self.function.get()
    }

    /// Whether the pin reads as a static low level
    pub fn is_forced_low(&self) -> bool {
        self.function.get() == PinFunction::OutputLow
    }
}

impl ServoPin for MockPin {
    fn restore_alternate(&self, remap: u8) {
        self.function.set(PinFunction::Alternate(remap));
    }

    fn force_low(&self) {
        self.function.set(PinFunction::OutputLow);
    }
}
