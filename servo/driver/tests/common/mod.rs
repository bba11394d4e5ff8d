//! Mock output rig shared by the driver tests

#![allow(dead_code)]

use servo_driver::{ServoConfig, ServoDriver, ServoResult};
use servo_hal::mock::{MockOutput, MockPin, MockTimer};
use servo_hal::ServoTimer;

pub type MockDriver = ServoDriver<MockTimer, MockOutput, MockPin>;

/// Test-side handles onto the registers the driver writes
pub struct Rig {
    pub timers: Vec<MockTimer>,
    pub outputs: Vec<MockOutput>,
    pub pins: Vec<MockPin>,
}

impl Rig {
    /// One shared timer per distinct id, one output and pin per channel
    pub fn new(channel_timers: &[u8], period: u16) -> Self {
        let mut timers: Vec<MockTimer> = Vec::new();
        for id in channel_timers {
            if !timers.iter().any(|t| t.id().0 == *id) {
                timers.push(MockTimer::new(*id, period));
            }
        }
        Self {
            timers,
            outputs: channel_timers.iter().map(|_| MockOutput::new()).collect(),
            pins: channel_timers.iter().map(|_| MockPin::new()).collect(),
        }
    }

    /// Timer with hardware id `id`
    pub fn timer(&self, id: u8) -> &MockTimer {
        self.timers
            .iter()
            .find(|t| t.id().0 == id)
            .expect("timer not in rig")
    }

    /// Configuration wiring channel `i` to timer `channel_timers[i]`, remap = channel index
    pub fn config(&self, channel_timers: &[u8]) -> ServoResult<ServoConfig<MockTimer, MockOutput, MockPin>> {
        let mut builder = ServoConfig::builder();
        for (channel, id) in channel_timers.iter().enumerate() {
            builder = builder.channel(
                self.timer(*id).clone(),
                self.outputs[channel].clone(),
                self.pins[channel].clone(),
                channel as u8,
            );
        }
        builder.build()
    }
}

/// Initialized driver over a fresh rig
pub fn setup(channel_timers: &[u8], period: u16) -> (MockDriver, Rig) {
    let rig = Rig::new(channel_timers, period);
    let config = rig.config(channel_timers).unwrap();
    let driver = ServoDriver::init(config).unwrap();
    (driver, rig)
}
