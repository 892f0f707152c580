//! Source of the current instant for the countdown loop.

use chrono::{DateTime, Local};
use std::time::Duration;

pub trait Clock {
    fn now(&self) -> DateTime<Local>;
    fn sleep(&mut self, d: Duration);
}

/// Wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    fn sleep(&mut self, d: Duration) {
        std::thread::sleep(d);
    }
}

/// Clock pinned to a given instant; `sleep` moves it forward without
/// blocking. Backs the `--at` option.
pub struct SimulatedClock {
    now: DateTime<Local>,
}

impl SimulatedClock {
    pub fn new(start: DateTime<Local>) -> Self {
        Self { now: start }
    }
}

impl Clock for SimulatedClock {
    fn now(&self) -> DateTime<Local> {
        self.now
    }

    fn sleep(&mut self, d: Duration) {
        match chrono::Duration::from_std(d) {
            Ok(step) => self.now += step,
            Err(e) => log::warn!("simulated clock cannot advance by {:?}: {}", d, e),
        }
    }
}
