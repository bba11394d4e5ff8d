//! Control-loop cost of one output frame

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use servo_driver::{BankId, BankMode, ServoConfig, ServoDriver};
use servo_hal::mock::{MockOutput, MockPin, MockTimer};

// Eight outputs on four timers, as on a typical F4 board
const LAYOUT: [u8; 8] = [3, 3, 4, 4, 8, 8, 9, 9];

fn driver(mode: BankMode) -> (ServoDriver<MockTimer, MockOutput, MockPin>, Vec<MockTimer>) {
    let mut timers: Vec<MockTimer> = Vec::new();
    let mut builder = ServoConfig::builder();
    for id in LAYOUT {
        let timer = match timers.iter().position(|t| servo_hal::ServoTimer::id(t).0 == id) {
            Some(index) => timers[index].clone(),
            None => {
                timers.push(MockTimer::new(id, 2_499));
                timers[timers.len() - 1].clone()
            }
        };
        builder = builder.channel(timer, MockOutput::new(), MockPin::new(), 2);
    }

    let mut servo = ServoDriver::init(builder.build().unwrap()).unwrap();
    for bank in 0..servo.bank_count() {
        servo
            .set_bank_mode(BankId::new(bank as u8).unwrap(), mode)
            .unwrap();
    }
    (servo, timers)
}

fn bench_frame(c: &mut Criterion) {
    let frame = [125u16, 180, 210, 250, 125, 160, 240, 250];

    let (mut servo, _timers) = driver(BankMode::Synchronous);
    c.bench_function("frame synchronous", |b| {
        b.iter(|| servo.apply_frame(black_box(&frame)))
    });

    let (mut servo, timers) = driver(BankMode::SinglePulse);
    c.bench_function("frame single pulse", |b| {
        b.iter(|| {
            for timer in &timers {
                timer.set_counter(2_000);
            }
            servo.apply_frame(black_box(&frame))
        })
    });

    let (mut servo, _timers) = driver(BankMode::SinglePulse);
    c.bench_function("set_pulse", |b| {
        b.iter(|| servo.set_pulse(black_box(5), black_box(1_500)))
    });
}

criterion_group!(benches, bench_frame);
criterion_main!(benches);
