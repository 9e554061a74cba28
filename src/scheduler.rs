//! Timer service on a virtual clock.
//!
//! Timers carry a task token `T` instead of a callback: the owner pops due
//! tasks with [`Scheduler::pop_due`] and handles them itself, so handlers can
//! freely mutate game state (and schedule further timers) without the
//! scheduler holding any borrow. Nothing here reads the wall clock; the clock
//! only moves when the owner advances it.

use std::time::Duration;

/// Periods shorter than this are raised to it, so a periodic timer can never
/// fire unboundedly often within one advance.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Clone, Debug)]
struct Timer<T> {
    id: TimerId,
    due: Duration,
    period: Option<Duration>,
    task: T,
}

#[derive(Clone, Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    timers: Vec<Timer<T>>,
}

impl<T: Clone> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            timers: Vec::new(),
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    fn insert(&mut self, delay: Duration, period: Option<Duration>, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            due: self.now + delay,
            period,
            task,
        });
        id
    }

    /// One-shot timer firing `delay` from now.
    pub fn after(&mut self, delay: Duration, task: T) -> TimerId {
        self.insert(delay, None, task)
    }

    /// Periodic timer first firing one `period` from now.
    pub fn every(&mut self, period: Duration, task: T) -> TimerId {
        let period = period.max(MIN_PERIOD);
        self.insert(period, Some(period), task)
    }

    /// Remove a pending timer. Returns false if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Pop the earliest timer due at or before `until`, moving the clock to
    /// its due time. Ties fire in scheduling order. Periodic timers are
    /// re-armed one period later.
    pub fn pop_due(&mut self, until: Duration) -> Option<T> {
        let idx = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.id))
            .map(|(i, _)| i)?;

        let due = self.timers[idx].due;
        self.now = self.now.max(due);
        match self.timers[idx].period {
            Some(period) => {
                let timer = &mut self.timers[idx];
                timer.due += period;
                Some(timer.task.clone())
            }
            None => Some(self.timers.swap_remove(idx).task),
        }
    }

    /// Move the clock forward to `until` once every due timer was popped.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Advance by `dt`, collecting everything that fired. Tasks scheduled
    /// while handling these are not seen; use `pop_due` for that.
    pub fn advance(&mut self, dt: Duration) -> Vec<T> {
        let until = self.now + dt;
        let mut fired = Vec::new();
        while let Some(task) = self.pop_due(until) {
            fired.push(task);
        }
        self.advance_to(until);
        fired
    }
}

/// Handle to a periodic timer whose period can be changed at runtime.
///
/// Reconfiguring always cancels the outstanding occurrence before the new
/// timer is installed, so there is never more than one live occurrence.
#[derive(Clone, Debug)]
pub struct PeriodicTask {
    id: Option<TimerId>,
    period: Duration,
}

impl PeriodicTask {
    pub fn start<T: Clone>(scheduler: &mut Scheduler<T>, period: Duration, task: T) -> Self {
        let period = period.max(MIN_PERIOD);
        let id = scheduler.every(period, task);
        log::debug!("periodic task {:?} scheduled every {:?}", id, period);
        Self {
            id: Some(id),
            period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.id.is_some()
    }

    /// Cancel the pending occurrence and start over with `period`.
    pub fn reconfigure<T: Clone>(&mut self, scheduler: &mut Scheduler<T>, period: Duration, task: T) {
        self.stop(scheduler);
        *self = Self::start(scheduler, period, task);
    }

    pub fn stop<T: Clone>(&mut self, scheduler: &mut Scheduler<T>) {
        if let Some(id) = self.id.take() {
            scheduler.cancel(id);
        }
    }
}
