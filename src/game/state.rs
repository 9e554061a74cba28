//! Time Condenser game state: data structures only, no logic.

use serde::{Deserialize, Serialize};

use crate::decimal::Decimal;
use crate::progression::{OnFull, ProgressAction, Repeatable, Resource, Upgrade};

use super::config::GameConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerId {
    Main,
    Condenser,
    Space,
}

/// Nodes of the reset tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeId {
    Condenser,
    Space,
}

impl NodeId {
    pub fn name(&self) -> &'static str {
        match self {
            NodeId::Condenser => "Time Condenser",
            NodeId::Space => "Space",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MainUpgrade {
    WindBoost,
    DoublePower,
    TimePlayed,
    Amplify,
    SpaceUnlock,
}

impl MainUpgrade {
    pub fn all() -> &'static [MainUpgrade] {
        &[
            MainUpgrade::WindBoost,
            MainUpgrade::DoublePower,
            MainUpgrade::TimePlayed,
            MainUpgrade::Amplify,
            MainUpgrade::SpaceUnlock,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            MainUpgrade::WindBoost => 0,
            MainUpgrade::DoublePower => 1,
            MainUpgrade::TimePlayed => 2,
            MainUpgrade::Amplify => 3,
            MainUpgrade::SpaceUnlock => 4,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CondenserUpgrade {
    CondensedBoost,
    Haste,
    BestTime,
    TotalBoost,
    DoubleWind,
}

impl CondenserUpgrade {
    pub fn all() -> &'static [CondenserUpgrade] {
        &[
            CondenserUpgrade::CondensedBoost,
            CondenserUpgrade::Haste,
            CondenserUpgrade::BestTime,
            CondenserUpgrade::TotalBoost,
            CondenserUpgrade::DoubleWind,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            CondenserUpgrade::CondensedBoost => 0,
            CondenserUpgrade::Haste => 1,
            CondenserUpgrade::BestTime => 2,
            CondenserUpgrade::TotalBoost => 3,
            CondenserUpgrade::DoubleWind => 4,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeId {
    Main(MainUpgrade),
    Condenser(CondenserUpgrade),
}

impl UpgradeId {
    pub fn all() -> Vec<UpgradeId> {
        MainUpgrade::all()
            .iter()
            .map(|u| UpgradeId::Main(*u))
            .chain(CondenserUpgrade::all().iter().map(|u| UpgradeId::Condenser(*u)))
            .collect()
    }

    /// Layer whose points pay for this upgrade.
    pub fn layer(&self) -> LayerId {
        match self {
            UpgradeId::Main(_) => LayerId::Main,
            UpgradeId::Condenser(_) => LayerId::Condenser,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RepeatableId {
    Height,
    Length,
    Width,
}

impl RepeatableId {
    pub fn all() -> &'static [RepeatableId] {
        &[RepeatableId::Height, RepeatableId::Length, RepeatableId::Width]
    }

    pub fn index(&self) -> usize {
        match self {
            RepeatableId::Height => 0,
            RepeatableId::Length => 1,
            RepeatableId::Width => 2,
        }
    }
}

/// Timer tokens owned by the game's scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Task {
    WindReady,
    CondenseReady,
    WindDecay,
}

/// Layer `main`: seconds of time and the power generator.
#[derive(Clone, Debug)]
pub struct MainLayer {
    pub points: Resource,
    pub upgrades: [Upgrade; 5],
    pub winder: ProgressAction,
}

impl MainLayer {
    pub fn new(starting_points: Decimal) -> Self {
        Self {
            points: Resource::new(starting_points).tracking_best().tracking_total(),
            upgrades: [Upgrade::default(); 5],
            winder: ProgressAction::new(OnFull::Hold),
        }
    }

    pub fn upgrade(&self, id: MainUpgrade) -> &Upgrade {
        &self.upgrades[id.index()]
    }

    pub fn has(&self, id: MainUpgrade) -> bool {
        self.upgrade(id).bought()
    }
}

/// Layer `condenser`: condensed time and the condenser clicker.
#[derive(Clone, Debug)]
pub struct CondenserLayer {
    pub points: Resource,
    pub upgrades: [Upgrade; 5],
    pub condenser: ProgressAction,
}

impl CondenserLayer {
    pub fn new() -> Self {
        Self {
            points: Resource::new(Decimal::ZERO).tracking_total(),
            upgrades: [Upgrade::default(); 5],
            condenser: ProgressAction::new(OnFull::Payout),
        }
    }

    pub fn upgrade(&self, id: CondenserUpgrade) -> &Upgrade {
        &self.upgrades[id.index()]
    }

    pub fn has(&self, id: CondenserUpgrade) -> bool {
        self.upgrade(id).bought()
    }
}

impl Default for CondenserLayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Layer `space`: space points and the area repeatables.
#[derive(Clone, Debug)]
pub struct SpaceLayer {
    pub points: Resource,
    pub repeatables: [Repeatable; 3],
}

impl SpaceLayer {
    pub fn new() -> Self {
        Self {
            points: Resource::new(Decimal::ZERO),
            repeatables: [Repeatable::default(); 3],
        }
    }

    pub fn amount(&self, id: RepeatableId) -> u64 {
        self.repeatables[id.index()].amount()
    }

    /// Square metres of area: height + length.
    pub fn area(&self) -> u64 {
        self.amount(RepeatableId::Height) + self.amount(RepeatableId::Length)
    }
}

impl Default for SpaceLayer {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub main: MainLayer,
    pub condenser: CondenserLayer,
    pub space: SpaceLayer,
    /// Seconds of (scaled) game time since the save was created.
    pub time_played: f64,
    pub dev_speed: f64,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            main: MainLayer::new(config.starting_points),
            condenser: CondenserLayer::new(),
            space: SpaceLayer::new(),
            time_played: 0.0,
            dev_speed: config.dev_speed,
        }
    }

    pub fn upgrade(&self, id: UpgradeId) -> &Upgrade {
        match id {
            UpgradeId::Main(u) => self.main.upgrade(u),
            UpgradeId::Condenser(u) => self.condenser.upgrade(u),
        }
    }

    pub fn has(&self, id: UpgradeId) -> bool {
        self.upgrade(id).bought()
    }
}
