//! Tick gate - hands hardware timer ticks from interrupt context to the
//! polled menu task.
//!
//! The interrupt handler only ever calls [`TickCounter::on_tick`]; the task
//! loop drains the counter one tick at a time with
//! [`TickCounter::drain_one`]. Both sides touch `pending` exclusively through
//! single atomic read-modify-write operations, so neither side can observe a
//! half-updated value and there is no test-then-decrement window.
//!
//! [`EvalTimer`] turns the stream of drained ticks into evaluation steps.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::config::MENU_EVAL_PERIOD_TICKS;

/// Pending-tick counter shared between the tick interrupt and the task loop.
pub struct TickCounter {
    pending: AtomicU32,
}

impl TickCounter {
    /// Create a counter with no pending ticks (usable in a `static`).
    pub const fn new() -> Self {
        Self {
            pending: AtomicU32::new(0),
        }
    }

    /// Record one elapsed hardware period. Call from the tick interrupt.
    ///
    /// Saturates instead of wrapping if the task loop is starved.
    pub fn on_tick(&self) {
        let _ = self
            .pending
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |p| p.checked_add(1));
    }

    /// Consume one pending tick if there is one.
    ///
    /// Returns `true` when a tick was drained. The check and the decrement
    /// happen in one atomic compare-and-swap loop.
    pub fn drain_one(&self) -> bool {
        self.pending
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |p| p.checked_sub(1))
            .is_ok()
    }

    /// Ticks recorded but not yet drained.
    pub fn pending(&self) -> u32 {
        self.pending.load(Ordering::Acquire)
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Countdown that gates menu evaluation to once per
/// [`MENU_EVAL_PERIOD_TICKS`] drained ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EvalTimer {
    ticks_until_eval: u32,
}

impl EvalTimer {
    /// Value the countdown is reloaded with after an evaluation.
    ///
    /// An evaluation fires when the countdown is already at zero, so the
    /// reload is one less than the period.
    pub const RELOAD: u32 = MENU_EVAL_PERIOD_TICKS - 1;

    /// A timer that fires on the very first drained tick.
    pub const fn new() -> Self {
        Self { ticks_until_eval: 0 }
    }

    /// Feed one drained tick. Returns `true` when an evaluation step is due.
    pub fn on_tick(&mut self) -> bool {
        if self.ticks_until_eval > 0 {
            self.ticks_until_eval -= 1;
            false
        } else {
            self.ticks_until_eval = Self::RELOAD;
            true
        }
    }

    /// Drained ticks left before the next evaluation.
    pub fn ticks_until_eval(&self) -> u32 {
        self.ticks_until_eval
    }
}

impl Default for EvalTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_on_empty_counter_returns_false() {
        let ticks = TickCounter::new();
        assert!(!ticks.drain_one());
        assert_eq!(ticks.pending(), 0);
    }

    #[test]
    fn each_recorded_tick_drains_exactly_once() {
        let ticks = TickCounter::new();
        ticks.on_tick();
        ticks.on_tick();
        ticks.on_tick();
        assert_eq!(ticks.pending(), 3);

        assert!(ticks.drain_one());
        assert!(ticks.drain_one());
        assert!(ticks.drain_one());
        assert!(!ticks.drain_one());
        assert_eq!(ticks.pending(), 0);
    }

    #[test]
    fn counter_saturates_instead_of_wrapping() {
        let ticks = TickCounter {
            pending: AtomicU32::new(u32::MAX),
        };
        ticks.on_tick();
        assert_eq!(ticks.pending(), u32::MAX);
    }

    #[test]
    fn concurrent_producer_and_consumer_lose_no_ticks() {
        use std::sync::Arc;

        let ticks = Arc::new(TickCounter::new());
        let producer = {
            let ticks = Arc::clone(&ticks);
            std::thread::spawn(move || {
                for _ in 0..10_000 {
                    ticks.on_tick();
                }
            })
        };

        let mut drained = 0u32;
        while drained < 10_000 {
            if ticks.drain_one() {
                drained += 1;
            }
        }
        producer.join().unwrap();

        assert_eq!(drained, 10_000);
        assert_eq!(ticks.pending(), 0);
    }

    #[test]
    fn eval_timer_fires_on_first_tick() {
        let mut timer = EvalTimer::new();
        assert!(timer.on_tick());
        assert_eq!(timer.ticks_until_eval(), EvalTimer::RELOAD);
    }

    #[test]
    fn eval_timer_fires_once_per_period() {
        let mut timer = EvalTimer::new();
        assert!(timer.on_tick());

        for cycle in 0..3 {
            for tick in 1..MENU_EVAL_PERIOD_TICKS {
                assert!(!timer.on_tick(), "cycle {} tick {} fired early", cycle, tick);
            }
            assert!(timer.on_tick(), "cycle {} did not fire", cycle);
        }
    }

    #[test]
    fn eval_timer_countdown_stays_in_range() {
        let mut timer = EvalTimer::new();
        for _ in 0..(MENU_EVAL_PERIOD_TICKS * 3) {
            timer.on_tick();
            assert!(timer.ticks_until_eval() < MENU_EVAL_PERIOD_TICKS);
        }
    }
}
