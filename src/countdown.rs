//! Cooperative countdown driving the placement deadline.
//!
//! The countdown never sleeps on its own. The host calls [`Countdown::tick`]
//! once per tick interval. After [`Countdown::cancel`] no further tick or
//! expiry is produced.

use core::time::Duration;

use crate::config::TICKS_PER_SECOND;

/// What a single tick produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CountdownEvent {
    /// Fraction of the countdown still remaining, in `[0, 1]`.
    Tick(f32),
    /// The countdown ran out. Produced once.
    Expired,
}

#[derive(Debug, Clone, Default)]
pub struct Countdown {
    total: u32,
    remaining: Option<u32>,
    running: bool,
    tick_interval: Duration,
}

impl Countdown {
    /// An idle countdown; ticking it does nothing until [`start`](Self::start).
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the countdown for `total_seconds`, discretized into
    /// `TICKS_PER_SECOND` ticks per second.
    pub fn start(&mut self, total_seconds: u32, tick_interval: Duration) {
        self.total = total_seconds.saturating_mul(TICKS_PER_SECOND);
        self.remaining = Some(self.total);
        self.running = true;
        self.tick_interval = tick_interval;
    }

    /// Advance by one tick. Returns `None` when not running.
    ///
    /// Every tick reports the fraction left and then decrements; the tick
    /// after the counter reached zero reports [`CountdownEvent::Expired`]
    /// and stops the countdown.
    pub fn tick(&mut self) -> Option<CountdownEvent> {
        if !self.running {
            return None;
        }
        match self.remaining {
            Some(left) => {
                let fraction = self.fraction_of(left);
                self.remaining = left.checked_sub(1);
                Some(CountdownEvent::Tick(fraction))
            }
            None => {
                self.running = false;
                Some(CountdownEvent::Expired)
            }
        }
    }

    /// Stop ticking. Safe to call at any time, any number of times.
    pub fn cancel(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Fraction of the countdown left, for a progress bar.
    pub fn fraction(&self) -> f32 {
        self.fraction_of(self.remaining.unwrap_or(0))
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    fn fraction_of(&self, left: u32) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            (left as f32 / self.total as f32).clamp(0.0, 1.0)
        }
    }
}
