//! Debounced values: an input that is only committed once it has stopped
//! changing for a fixed delay.
//!
//! [`Debounced`] is a small state machine, `Idle → Pending → Committed`,
//! driven by a [`Scheduler`]. Every [`Debounced::set`] schedules a fresh
//! timer and stores its handle, dropping (and so cancelling) the previous
//! one; at most one timer is pending per value. When a timer fires it hands
//! its [`Tick`] to a callback, and the owner feeds the tick back through
//! [`Debounced::expire`]. Ticks carry a generation, so a tick from a
//! superseded timer never commits: last write wins.

use std::time::Duration;

/// Quiet period before a filter input is committed.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(400);

/// Source of time and delayed callbacks.
pub trait Scheduler {
    /// Dropping a handle cancels its callback.
    type Handle;

    /// Monotonic time since an arbitrary origin.
    fn now(&self) -> Duration;

    fn schedule_after(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Identifies the `set` call whose timer fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Pending { deadline: Duration },
    Committed,
}

pub struct Debounced<T, H> {
    live: T,
    committed: T,
    phase: Phase,
    generation: u64,
    delay: Duration,
    timer: Option<H>,
}

impl<T: Clone + PartialEq, H> Debounced<T, H> {
    pub fn new(initial: T) -> Self {
        Self::with_delay(initial, DEBOUNCE_DELAY)
    }

    pub fn with_delay(initial: T, delay: Duration) -> Self {
        Self {
            live: initial.clone(),
            committed: initial,
            phase: Phase::Idle,
            generation: 0,
            delay,
            timer: None,
        }
    }

    /// The latest value written, committed or not.
    pub fn live(&self) -> &T {
        &self.live
    }

    pub fn committed(&self) -> &T {
        &self.committed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Records `value` and restarts the delay. `on_tick` runs when the delay
    /// elapses without another `set`.
    pub fn set<S>(&mut self, value: T, scheduler: &S, on_tick: impl FnOnce(Tick) + 'static)
    where
        S: Scheduler<Handle = H>,
    {
        self.live = value;
        self.generation += 1;
        let tick = Tick {
            generation: self.generation,
        };
        let deadline = scheduler.now() + self.delay;
        self.timer = Some(scheduler.schedule_after(self.delay, Box::new(move || on_tick(tick))));
        self.phase = Phase::Pending { deadline };
    }

    /// Commits the live value if `tick` belongs to the latest `set`.
    ///
    /// Returns `true` only when the committed value changed, which is the
    /// signal to act on it.
    pub fn expire(&mut self, tick: Tick) -> bool {
        if tick.generation != self.generation || !matches!(self.phase, Phase::Pending { .. }) {
            return false;
        }
        self.timer = None;
        self.phase = Phase::Committed;
        if self.committed == self.live {
            return false;
        }
        self.committed = self.live.clone();
        true
    }
}
