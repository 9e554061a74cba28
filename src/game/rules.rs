//! Game content: modifier chains, upgrade and repeatable definitions, and
//! the reset tree.
//!
//! Every amount is a late-bound `fn(&Game)`, so chains may read each other
//! (upgrade 4 feeds into upgrades 1–3, condenser upgrade 4 into condenser
//! upgrade 1) without any chain holding a reference.

use crate::decimal::Decimal;
use crate::progression::{
    Amount, Conversion, CostCurve, Modifier, ModifierChain, ModifierTable, RepeatableDef,
    ResetTree, UpgradeDef,
};

use super::config::GameConfig;
use super::state::{CondenserUpgrade, LayerId, MainUpgrade, NodeId, RepeatableId, UpgradeId};
use super::Game;

/// Main upgrade 4 multiplier.
pub const AMPLIFY_FACTOR: f64 = 1.5;

/// Main gain chains, in application order.
pub const POINT_GAIN_SERIES: [UpgradeId; 7] = [
    UpgradeId::Main(MainUpgrade::WindBoost),
    UpgradeId::Main(MainUpgrade::DoublePower),
    UpgradeId::Main(MainUpgrade::TimePlayed),
    UpgradeId::Main(MainUpgrade::Amplify),
    UpgradeId::Main(MainUpgrade::SpaceUnlock),
    UpgradeId::Condenser(CondenserUpgrade::CondensedBoost),
    UpgradeId::Condenser(CondenserUpgrade::Haste),
];

/// Chains a condenser payout passes through.
pub const CONDENSE_SERIES: [UpgradeId; 2] = [
    UpgradeId::Condenser(CondenserUpgrade::BestTime),
    UpgradeId::Main(MainUpgrade::SpaceUnlock),
];

/// Space points from main points: `sqrt(points)`, floored.
pub const SPACE_CONVERSION: Conversion = Conversion {
    formula: space_formula,
};

fn space_formula(points: Decimal) -> Decimal {
    points.sqrt()
}

fn main_has(g: &Game, u: MainUpgrade) -> bool {
    g.state.main.has(u)
}

fn condenser_has(g: &Game, u: CondenserUpgrade) -> bool {
    g.state.condenser.has(u)
}

/// Run `value` through main upgrade 4.
fn amplify(g: &Game, value: Decimal) -> Decimal {
    g.modifiers
        .apply(UpgradeId::Main(MainUpgrade::Amplify), g, value)
}

/// Non-finite and negative intermediate results count as zero.
fn non_negative(value: f64) -> Decimal {
    if value.is_nan() {
        return Decimal::ZERO;
    }
    Decimal::from_f64(value.max(0.0))
}

fn single(modifier: Modifier<Game>) -> ModifierChain<Game> {
    ModifierChain::new().then(modifier)
}

pub fn build_modifiers() -> ModifierTable<UpgradeId, Game> {
    use CondenserUpgrade as C;
    use MainUpgrade as M;

    let mut table = ModifierTable::new();

    table.insert(
        UpgradeId::Main(M::WindBoost),
        single(Modifier::multiply(
            "Time Upgrade 1",
            Amount::Computed(|g: &Game| {
                amplify(g, g.state.main.winder.progress().pow(0.75).floor())
            }),
            |g: &Game| main_has(g, M::WindBoost),
        )),
    );
    table.insert(
        UpgradeId::Main(M::DoublePower),
        single(Modifier::multiply(
            "Time Upgrade 2",
            Amount::Computed(|g: &Game| amplify(g, Decimal::from_f64(2.0))),
            |g: &Game| main_has(g, M::DoublePower),
        )),
    );
    table.insert(
        UpgradeId::Main(M::TimePlayed),
        single(Modifier::multiply(
            "Time Upgrade 3",
            Amount::Computed(|g: &Game| {
                let orders = Decimal::from_f64(g.state.time_played).log10().floor();
                amplify(g, non_negative(orders))
            }),
            |g: &Game| main_has(g, M::TimePlayed),
        )),
    );
    table.insert(
        UpgradeId::Main(M::Amplify),
        single(Modifier::multiply(
            "Time Upgrade 4",
            AMPLIFY_FACTOR.into(),
            |g: &Game| main_has(g, M::Amplify),
        )),
    );
    table.insert(
        UpgradeId::Main(M::SpaceUnlock),
        single(Modifier::multiply(
            "Time Upgrade 5",
            Amount::from(2.0),
            |g: &Game| main_has(g, M::SpaceUnlock),
        )),
    );

    table.insert(
        UpgradeId::Condenser(C::CondensedBoost),
        single(Modifier::multiply(
            "Condenser Upgrade 1",
            Amount::Computed(|g: &Game| {
                let root = g.state.condenser.points.value().sqrt();
                g.modifiers
                    .apply(UpgradeId::Condenser(C::TotalBoost), g, root)
            }),
            |g: &Game| condenser_has(g, C::CondensedBoost),
        )),
    );
    table.insert(
        UpgradeId::Condenser(C::Haste),
        single(Modifier::multiply(
            "Condenser Upgrade 2",
            Amount::from(2.0),
            |g: &Game| condenser_has(g, C::Haste),
        )),
    );
    table.insert(
        UpgradeId::Condenser(C::BestTime),
        single(Modifier::multiply(
            "Condenser Upgrade 3",
            Amount::Computed(|g: &Game| {
                let points = &g.state.main.points;
                let best = points.best().unwrap_or_else(|| points.value());
                non_negative(best.log(50.0)).round()
            }),
            |g: &Game| condenser_has(g, C::BestTime),
        )),
    );
    table.insert(
        UpgradeId::Condenser(C::TotalBoost),
        single(Modifier::multiply(
            "Condenser Upgrade 4",
            Amount::Computed(|g: &Game| {
                let points = &g.state.condenser.points;
                points
                    .total()
                    .unwrap_or_else(|| points.value())
                    .max(Decimal::ZERO)
                    .pow(0.25)
            }),
            |g: &Game| condenser_has(g, C::TotalBoost),
        )),
    );
    table.insert(
        UpgradeId::Condenser(C::DoubleWind),
        single(Modifier::multiply(
            "Condenser Upgrade 5",
            Amount::from(2.0),
            |g: &Game| condenser_has(g, C::DoubleWind),
        )),
    );

    table
}

fn always(_: &Game) -> bool {
    true
}

fn space_unlock_visible(g: &Game) -> bool {
    g.state.main.points.value() >= g.config.space_unlock_reveal
        || g.state.main.has(MainUpgrade::SpaceUnlock)
}

pub fn upgrade_def(id: UpgradeId, config: &GameConfig) -> UpgradeDef<Game> {
    use CondenserUpgrade as C;
    use MainUpgrade as M;

    let description = match id {
        UpgradeId::Main(M::WindBoost) => {
            "The power generator's wind amount improves time generation."
        }
        UpgradeId::Main(M::DoublePower) => {
            "Double power generation, and make the power generator decay slower."
        }
        UpgradeId::Main(M::TimePlayed) => "Your time played boosts time generation.",
        UpgradeId::Main(M::Amplify) => "The previous upgrades boost time 50% more.",
        UpgradeId::Main(M::SpaceUnlock) => {
            "Unlock the space tab. Double both time and compressed time gain."
        }
        UpgradeId::Condenser(C::CondensedBoost) => "Condensed time boosts normal time gain.",
        UpgradeId::Condenser(C::Haste) => "You condense and gain time 2x faster.",
        UpgradeId::Condenser(C::BestTime) => {
            "Your condenser produces more condensed time based on your best time earned."
        }
        UpgradeId::Condenser(C::TotalBoost) => {
            "Boost condenser upgrade 1's effect significantly based on total condensed time made."
        }
        UpgradeId::Condenser(C::DoubleWind) => "The power generator can be wound twice as much.",
    };

    let visibility: fn(&Game) -> bool = match id {
        UpgradeId::Main(M::SpaceUnlock) => space_unlock_visible,
        _ => always,
    };

    let cost = match id {
        UpgradeId::Main(u) => config.main_upgrade_costs[u.index()],
        UpgradeId::Condenser(u) => config.condenser_upgrade_costs[u.index()],
    };

    UpgradeDef {
        description,
        cost: Amount::Fixed(cost),
        visibility,
    }
}

pub fn repeatable_def(id: RepeatableId) -> RepeatableDef {
    match id {
        RepeatableId::Height => RepeatableDef {
            title: "Height",
            description: "Increase the height of the space",
            curve: CostCurve::doubling(1.0),
        },
        RepeatableId::Length => RepeatableDef {
            title: "Length",
            description: "Increase the length of the space",
            curve: CostCurve::doubling(5.0),
        },
        RepeatableId::Width => RepeatableDef {
            title: "Width",
            description: "Increase the width of the space",
            curve: CostCurve::doubling(10.0),
        },
    }
}

/// Space sits above the condenser; both nodes reset the main layer.
pub fn build_tree() -> ResetTree<NodeId, LayerId> {
    ResetTree::new()
        .node(NodeId::Condenser, LayerId::Condenser, &[LayerId::Main])
        .node(NodeId::Space, LayerId::Space, &[LayerId::Main])
        .branch(NodeId::Space, NodeId::Condenser)
}
