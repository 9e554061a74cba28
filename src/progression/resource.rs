//! Resources: a decimal amount with optional best/total trackers.

use crate::decimal::Decimal;

#[derive(Clone, Debug, PartialEq)]
pub struct Resource {
    value: Decimal,
    /// Highest value ever held, when tracked.
    best: Option<Decimal>,
    /// Sum of every increase, when tracked.
    total: Option<Decimal>,
}

impl Resource {
    pub fn new(initial: Decimal) -> Self {
        Self {
            value: initial,
            best: None,
            total: None,
        }
    }

    pub fn tracking_best(mut self) -> Self {
        self.best = Some(self.value);
        self
    }

    pub fn tracking_total(mut self) -> Self {
        self.total = Some(self.value);
        self
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn best(&self) -> Option<Decimal> {
        self.best
    }

    pub fn total(&self) -> Option<Decimal> {
        self.total
    }

    /// Overwrite the value, floored at zero. Trackers follow: best takes the
    /// max, total accumulates only the positive part of the change.
    pub fn set(&mut self, value: Decimal) {
        let value = value.max(Decimal::ZERO);
        let delta = value - self.value;
        self.value = value;
        if let Some(best) = self.best.as_mut() {
            *best = (*best).max(value);
        }
        if let Some(total) = self.total.as_mut() {
            if delta.is_positive() {
                *total += delta;
            }
        }
    }

    pub fn credit(&mut self, amount: Decimal) {
        self.set(self.value + amount);
    }

    pub fn debit(&mut self, amount: Decimal) {
        self.set(self.value - amount);
    }

    pub fn can_afford(&self, cost: Decimal) -> bool {
        self.value >= cost
    }

    /// Put value and trackers back to `baseline` together.
    pub fn reset_to(&mut self, baseline: Decimal) {
        self.value = baseline;
        if self.best.is_some() {
            self.best = Some(baseline);
        }
        if self.total.is_some() {
            self.total = Some(baseline);
        }
    }

    /// Restore persisted values. Negatives come back as zero; trackers that
    /// are not enabled on this resource ignore the stored number.
    pub fn restore(&mut self, value: Decimal, best: Option<Decimal>, total: Option<Decimal>) {
        let value = value.max(Decimal::ZERO);
        self.value = value;
        if self.best.is_some() {
            self.best = Some(best.unwrap_or(value).max(Decimal::ZERO));
        }
        if self.total.is_some() {
            self.total = Some(total.unwrap_or(value).max(Decimal::ZERO));
        }
    }
}
