//! Timed progress actions: cooldown-gated clickers that fill a bar, may
//! decay while left alone, and optionally pay out when full.
//!
//! The action only tracks its own counter and phase. Gate checks and the
//! payout itself (which reads and writes other layers) belong to the owner,
//! which learns about a completed bar from [`Trigger::Completed`].

use std::time::Duration;

use crate::decimal::Decimal;
use crate::scheduler::{Scheduler, TimerId};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Cooling,
}

/// What happens when progress reaches the maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnFull {
    /// Stay pinned at max.
    Hold,
    /// Report completion and start over from zero.
    Payout,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Still cooling down; nothing changed.
    Ignored,
    Advanced,
    /// At max and holding there.
    Full,
    /// Bar filled; progress is already back at zero, the owner pays out.
    Completed,
}

#[derive(Clone, Debug)]
pub struct ProgressAction {
    progress: Decimal,
    phase: Phase,
    /// Set by every accepted trigger, consumed by the next decay tick.
    active: bool,
    on_full: OnFull,
    cooldown: Option<TimerId>,
}

impl ProgressAction {
    pub fn new(on_full: OnFull) -> Self {
        Self {
            progress: Decimal::ZERO,
            phase: Phase::Idle,
            active: false,
            on_full,
            cooldown: None,
        }
    }

    pub fn progress(&self) -> Decimal {
        self.progress
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Fill ratio in `[0, 1]` for progress bars.
    pub fn fraction(&self, max: Decimal) -> f64 {
        if !max.is_positive() {
            return 0.0;
        }
        (self.progress / max).to_f64().clamp(0.0, 1.0)
    }

    /// One press. While idle: mark active, add one (capped at `max`), start
    /// the cooldown timer that will deliver `ready` back to the owner.
    pub fn trigger<T: Clone>(
        &mut self,
        max: Decimal,
        cooldown: Duration,
        scheduler: &mut Scheduler<T>,
        ready: T,
    ) -> Trigger {
        if self.phase == Phase::Cooling {
            return Trigger::Ignored;
        }

        self.active = true;
        self.progress = (self.progress + Decimal::ONE).clamp(Decimal::ZERO, max.max(Decimal::ZERO));
        self.phase = Phase::Cooling;
        self.cooldown = Some(scheduler.after(cooldown, ready));

        if self.progress < max {
            return Trigger::Advanced;
        }
        match self.on_full {
            OnFull::Hold => Trigger::Full,
            OnFull::Payout => {
                self.progress = Decimal::ZERO;
                Trigger::Completed
            }
        }
    }

    /// The cooldown timer fired.
    pub fn finish_cooldown(&mut self) {
        self.phase = Phase::Idle;
        self.cooldown = None;
    }

    /// One decay period elapsed. A trigger since the previous tick
    /// suppresses exactly this one; otherwise progress drops by `step`,
    /// never below zero. Returns whether progress was reduced.
    pub fn decay_tick(&mut self, step: Decimal) -> bool {
        if self.active {
            self.active = false;
            return false;
        }
        if !self.progress.is_positive() {
            return false;
        }
        self.progress = (self.progress - step).max(Decimal::ZERO);
        true
    }

    /// Re-establish `progress <= max` after the maximum shrank.
    pub fn clamp_to(&mut self, max: Decimal) {
        self.progress = self.progress.clamp(Decimal::ZERO, max.max(Decimal::ZERO));
    }

    /// Back to a fresh bar, cancelling any pending cooldown.
    pub fn reset<T: Clone>(&mut self, scheduler: &mut Scheduler<T>) {
        if let Some(id) = self.cooldown.take() {
            scheduler.cancel(id);
        }
        self.progress = Decimal::ZERO;
        self.phase = Phase::Idle;
        self.active = false;
    }

    /// Load a persisted counter; out-of-range values are clamped.
    pub fn restore(&mut self, progress: Decimal, max: Decimal) {
        self.progress = progress;
        self.clamp_to(max);
    }
}
