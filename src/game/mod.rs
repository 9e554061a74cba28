//! Time Condenser: wind a power generator to make time, condense it, and
//! trade it for space.

pub mod actions;
pub mod config;
pub mod logic;
pub mod rules;
pub mod save;
pub mod state;

mod simulator;

use std::time::Duration;

use crate::decimal::Decimal;
use crate::progression::{ModifierTable, Operation, ResetTree};
use crate::scheduler::{PeriodicTask, Scheduler};

use actions::Action;
use config::GameConfig;
use state::{GameState, LayerId, NodeId, RepeatableId, Task, UpgradeId};

pub struct Game {
    pub state: GameState,
    config: GameConfig,
    modifiers: ModifierTable<UpgradeId, Game>,
    tree: ResetTree<NodeId, LayerId>,
    scheduler: Scheduler<Task>,
    decay: PeriodicTask,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        let state = GameState::new(&config);
        let mut scheduler = Scheduler::new();
        let decay = PeriodicTask::start(
            &mut scheduler,
            Duration::from_millis(config.decay_ms),
            Task::WindDecay,
        );
        Self {
            state,
            config,
            modifiers: rules::build_modifiers(),
            tree: rules::build_tree(),
            scheduler,
            decay,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Virtual time elapsed on the game clock.
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    pub fn update(&mut self, diff: Duration) {
        logic::update(self, diff);
    }

    /// Apply one player action. Returns false when it was refused.
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Wind => logic::wind(self),
            Action::Condense => logic::condense(self),
            Action::BuyUpgrade(id) => logic::buy_upgrade(self, id),
            Action::BuyRepeatable(id) => logic::buy_repeatable(self, id),
            Action::Reset(node) => logic::reset(self, node),
            Action::SpaceReset => logic::space_reset(self),
        }
    }

    pub fn handle_key(&mut self, key: char) -> bool {
        match Action::from_hotkey(key) {
            Some(action) => self.dispatch(action),
            None => false,
        }
    }

    // ── Queries ─────────────────────────────────────────────────

    pub fn point_gain(&self) -> Decimal {
        logic::point_gain(self)
    }

    /// Every enabled modifier feeding the main point gain, in order.
    pub fn gain_breakdown(&self) -> Vec<(&'static str, Operation, Decimal)> {
        rules::POINT_GAIN_SERIES
            .iter()
            .filter_map(|key| self.modifiers.get(*key))
            .flat_map(|chain| chain.breakdown(self))
            .collect()
    }

    pub fn condense_gain(&self) -> Decimal {
        logic::condense_gain(self)
    }

    pub fn wind_max(&self) -> Decimal {
        logic::wind_max(self)
    }

    pub fn wind_fraction(&self) -> f64 {
        self.state.main.winder.fraction(self.wind_max())
    }

    pub fn condense_fraction(&self) -> f64 {
        self.state.condenser.condenser.fraction(self.config.condense_max)
    }

    pub fn decay_period(&self) -> Duration {
        logic::decay_period(self)
    }

    pub fn condense_cooldown(&self) -> Duration {
        logic::condense_cooldown(self)
    }

    pub fn can_condense(&self) -> bool {
        logic::can_condense(self)
    }

    pub fn upgrade_cost(&self, id: UpgradeId) -> Decimal {
        logic::upgrade_cost(self, id)
    }

    pub fn upgrade_description(&self, id: UpgradeId) -> &'static str {
        rules::upgrade_def(id, &self.config).description
    }

    pub fn upgrade_visible(&self, id: UpgradeId) -> bool {
        (rules::upgrade_def(id, &self.config).visibility)(self)
    }

    pub fn can_afford_upgrade(&self, id: UpgradeId) -> bool {
        let points = match id.layer() {
            LayerId::Condenser => &self.state.condenser.points,
            _ => &self.state.main.points,
        };
        !self.state.has(id) && points.can_afford(self.upgrade_cost(id))
    }

    pub fn repeatable_cost(&self, id: RepeatableId) -> Decimal {
        logic::repeatable_cost(self, id)
    }

    pub fn can_afford_repeatable(&self, id: RepeatableId) -> bool {
        self.state.space.points.can_afford(self.repeatable_cost(id))
    }

    pub fn space_gain(&self) -> Decimal {
        logic::space_gain(self)
    }

    /// Tree node visibility; the space node is always shown.
    pub fn node_visible(&self, node: NodeId) -> bool {
        match node {
            NodeId::Condenser => {
                self.state.main.points.value() >= self.config.condense_cost
                    || self.state.condenser.points.value() >= Decimal::ONE
            }
            NodeId::Space => true,
        }
    }
}
