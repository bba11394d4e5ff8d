//! Bank update-rate configuration

use servo_core::{ServoError, ServoResult, TimeBase, MAX_BANKS};
use servo_hal::{ClockDivision, CounterMode, ServoTimer, TimeBaseConfig};

use crate::ServoDriver;

impl<T: ServoTimer, O, P> ServoDriver<T, O, P> {
    /// Reprogram the prescaler and period of the first `bank_count` banks.
    ///
    /// `rates[i]` is the target update rate of bank `i` in Hz and `clocks[i]`
    /// its counter clock in Hz, `0` selecting the configured default. The
    /// timer's input clock comes from its bus domain in the clock tree.
    /// Banks without a timer are skipped.
    ///
    /// Every bank is validated before any timer is written, so an error
    /// leaves all banks as they were.
    pub fn set_rates(&mut self, rates: &[u16], clocks: &[u32], bank_count: usize) -> ServoResult<()> {
        if bank_count > MAX_BANKS {
            servo_warn!("servo rates rejected: {} banks", bank_count);
            return Err(ServoError::InvalidBankCount(bank_count));
        }
        if rates.len() < bank_count || clocks.len() < bank_count {
            return Err(ServoError::RateTableTooShort);
        }

        let tuning = self.config.tuning;
        let mut plan: [Option<TimeBase>; MAX_BANKS] = [None; MAX_BANKS];
        for (index, bank) in self.banks.iter().enumerate().take(bank_count) {
            let Some(timer) = &bank.timer else {
                continue;
            };
            let base_clock = self.config.clocks.timer_clock(timer.id());
            let target_clock = tuning.target_clock(clocks[index]);
            match TimeBase::from_rate(base_clock, target_clock, rates[index]) {
                Ok(time_base) => plan[index] = Some(time_base),
                Err(err) => {
                    servo_warn!(
                        "servo rates rejected: bank {} at {} Hz / {} Hz: {}",
                        index,
                        rates[index],
                        target_clock,
                        err
                    );
                    return Err(err);
                }
            }
        }

        let template = self.config.time_base;
        for (index, (bank, time_base)) in self.banks.iter_mut().zip(plan.iter()).enumerate() {
            let (Some(timer), Some(time_base)) = (&bank.timer, time_base) else {
                continue;
            };
            timer.init_time_base(&TimeBaseConfig {
                prescaler: time_base.prescaler,
                period: time_base.period,
                clock_division: ClockDivision::Div1,
                counter_mode: CounterMode::Up,
                ..template
            });
            bank.period = time_base.period;
            servo_info!(
                "bank {}: psc {} arr {}",
                index,
                time_base.prescaler,
                time_base.period
            );
        }

        Ok(())
    }
}
