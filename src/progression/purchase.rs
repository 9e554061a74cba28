//! One-time upgrades and repeatable purchases.
//!
//! Purchase state (`Upgrade`, `Repeatable`) is kept apart from the static
//! definitions (`UpgradeDef`, `RepeatableDef`). The caller evaluates the cost
//! against the full game state first, then hands the resource and the
//! purchase state in by `&mut`.

use crate::decimal::Decimal;

use super::modifier::Amount;
use super::resource::Resource;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Upgrade {
    bought: bool,
}

impl Upgrade {
    pub fn bought(&self) -> bool {
        self.bought
    }

    /// Buy for `cost`. No-op (false) when already bought or unaffordable;
    /// otherwise debits exactly `cost`.
    pub fn purchase(&mut self, resource: &mut Resource, cost: Decimal) -> bool {
        if self.bought || !resource.can_afford(cost) {
            return false;
        }
        resource.debit(cost);
        self.bought = true;
        true
    }

    /// Only prestige resets and save loading may clear the flag.
    pub fn reset(&mut self) {
        self.bought = false;
    }

    pub fn restore(&mut self, bought: bool) {
        self.bought = bought;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Repeatable {
    amount: u64,
}

impl Repeatable {
    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn purchase(&mut self, resource: &mut Resource, cost: Decimal) -> bool {
        if !resource.can_afford(cost) {
            return false;
        }
        resource.debit(cost);
        self.amount += 1;
        true
    }

    pub fn reset(&mut self) {
        self.amount = 0;
    }

    pub fn restore(&mut self, amount: u64) {
        self.amount = amount;
    }
}

pub struct UpgradeDef<S> {
    pub description: &'static str,
    pub cost: Amount<S>,
    /// Display only; does not gate `purchase`.
    pub visibility: fn(&S) -> bool,
}

/// Geometric cost curve: `floor(ratio^amount × scale)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CostCurve {
    pub ratio: f64,
    pub scale: f64,
}

impl CostCurve {
    pub const fn doubling(scale: f64) -> Self {
        Self { ratio: 2.0, scale }
    }

    /// Cost of the purchase following `amount` earlier ones.
    pub fn cost(&self, amount: u64) -> Decimal {
        (Decimal::from_f64(self.ratio).pow(amount as f64) * Decimal::from_f64(self.scale)).floor()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RepeatableDef {
    pub title: &'static str,
    pub description: &'static str,
    pub curve: CostCurve,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(v: f64) -> Decimal {
        Decimal::from_f64(v)
    }

    #[test]
    fn upgrade_purchase_debits_exact_cost() {
        let mut points = Resource::new(d(75.0));
        let mut up = Upgrade::default();
        assert!(up.purchase(&mut points, d(75.0)));
        assert!(up.bought());
        assert!(points.value().is_zero());
    }

    #[test]
    fn upgrade_insufficient_funds_changes_nothing() {
        let mut points = Resource::new(d(74.999));
        let mut up = Upgrade::default();
        assert!(!up.purchase(&mut points, d(75.0)));
        assert!(!up.bought());
        assert_eq!(points.value(), d(74.999));
    }

    #[test]
    fn upgrade_cannot_be_bought_twice() {
        let mut points = Resource::new(d(1000.0));
        let mut up = Upgrade::default();
        assert!(up.purchase(&mut points, d(100.0)));
        assert!(!up.purchase(&mut points, d(100.0)));
        assert_eq!(points.value(), d(900.0));
    }

    #[test]
    fn repeatable_counts_up() {
        let mut points = Resource::new(d(10.0));
        let mut rep = Repeatable::default();
        let curve = CostCurve::doubling(1.0);
        while rep.purchase(&mut points, curve.cost(rep.amount())) {}
        // 1 + 2 + 4 = 7, next costs 8
        assert_eq!(rep.amount(), 3);
        assert_eq!(points.value(), d(3.0));
    }

    #[test]
    fn doubling_curves() {
        let height = CostCurve::doubling(1.0);
        let length = CostCurve::doubling(5.0);
        let width = CostCurve::doubling(10.0);
        assert_eq!(height.cost(0), d(1.0));
        assert_eq!(height.cost(10), d(1024.0));
        assert_eq!(length.cost(3), d(40.0));
        assert_eq!(width.cost(4), d(160.0));
    }

    #[test]
    fn fractional_curve_is_floored() {
        let curve = CostCurve { ratio: 1.5, scale: 1.0 };
        assert_eq!(curve.cost(3), d(3.0)); // 3.375
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_height_cost_is_power_of_two(n in 0u64..48) {
            let cost = CostCurve::doubling(1.0).cost(n);
            prop_assert_eq!(cost, Decimal::from_f64(2f64.powi(n as i32)));
        }

        #[test]
        fn prop_length_cost_is_five_times_power_of_two(n in 0u64..45) {
            let cost = CostCurve::doubling(5.0).cost(n);
            prop_assert_eq!(cost, Decimal::from_f64((2f64.powi(n as i32) * 5.0).floor()));
        }

        #[test]
        fn prop_cost_non_decreasing(n in 0u64..500, scale in 1.0f64..100.0) {
            let curve = CostCurve::doubling(scale);
            prop_assert!(curve.cost(n + 1) >= curve.cost(n));
        }

        #[test]
        fn prop_failed_purchase_is_noop(value in 0.0f64..1000.0, extra in 0.001f64..1000.0) {
            let mut points = Resource::new(Decimal::from_f64(value));
            let mut up = Upgrade::default();
            let cost = Decimal::from_f64(value + extra);
            prop_assume!(cost > points.value());
            prop_assert!(!up.purchase(&mut points, cost));
            prop_assert!(!up.bought());
            prop_assert_eq!(points.value(), Decimal::from_f64(value));
        }
    }
}
