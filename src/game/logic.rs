//! Time Condenser game logic. Operates on `Game`, no rendering or IO.
//!
//! Gameplay never errors: refused actions return `false` and change nothing.

use std::time::Duration;

use crate::decimal::Decimal;
use crate::progression::Trigger;

use super::rules::{self, CONDENSE_SERIES, POINT_GAIN_SERIES, SPACE_CONVERSION};
use super::state::{CondenserUpgrade, LayerId, MainUpgrade, NodeId, RepeatableId, Task, UpgradeId};
use super::Game;

// ── Derived values ──────────────────────────────────────────────

/// Main points per second. Zero while the generator is unwound.
pub fn point_gain(game: &Game) -> Decimal {
    if !game.state.main.winder.progress().is_positive() {
        return Decimal::ZERO;
    }
    game.modifiers
        .apply_series(&POINT_GAIN_SERIES, game, Decimal::ONE)
        .max(Decimal::ZERO)
}

/// Condensed time credited by one condenser payout.
pub fn condense_gain(game: &Game) -> Decimal {
    game.modifiers
        .apply_series(&CONDENSE_SERIES, game, Decimal::ONE)
        .max(Decimal::ZERO)
}

pub fn wind_max(game: &Game) -> Decimal {
    game.modifiers.apply(
        UpgradeId::Condenser(CondenserUpgrade::DoubleWind),
        game,
        game.config.wind_max,
    )
}

pub fn decay_period(game: &Game) -> Duration {
    let ms = if game.state.main.has(MainUpgrade::DoublePower) {
        game.config.slow_decay_ms
    } else {
        game.config.decay_ms
    };
    Duration::from_millis(ms)
}

/// Condenser cooldown, divided by the haste chain.
pub fn condense_cooldown(game: &Game) -> Duration {
    let speedup = game
        .modifiers
        .apply(UpgradeId::Condenser(CondenserUpgrade::Haste), game, Decimal::ONE)
        .to_f64()
        .max(1.0);
    let micros = game.config.condense_cooldown_ms as f64 * 1000.0 / speedup;
    Duration::from_micros(micros.round() as u64)
}

pub fn can_condense(game: &Game) -> bool {
    game.state.main.points.value() >= game.config.condense_cost
}

pub fn upgrade_cost(game: &Game, id: UpgradeId) -> Decimal {
    rules::upgrade_def(id, &game.config).cost.eval(game)
}

pub fn repeatable_cost(game: &Game, id: RepeatableId) -> Decimal {
    rules::repeatable_def(id).curve.cost(game.state.space.amount(id))
}

/// Space points a space reset would grant right now.
pub fn space_gain(game: &Game) -> Decimal {
    SPACE_CONVERSION.gain(game.state.main.points.value())
}

// ── Clock ───────────────────────────────────────────────────────

/// Advance the game by `diff` of wall time (scaled by dev speed): fire
/// every timer that falls due, then accrue main points.
pub fn update(game: &mut Game, diff: Duration) {
    let speed = game.state.dev_speed;
    if !speed.is_finite() || speed <= 0.0 || diff.is_zero() {
        return;
    }
    let Ok(scaled) = Duration::try_from_secs_f64(diff.as_secs_f64() * speed) else {
        return;
    };

    let target = game.scheduler.now() + scaled;
    while let Some(task) = game.scheduler.pop_due(target) {
        handle_task(game, task);
    }
    game.scheduler.advance_to(target);

    let secs = scaled.as_secs_f64();
    game.state.time_played += secs;
    let gain = point_gain(game);
    if gain.is_positive() {
        game.state.main.points.credit(gain * Decimal::from_f64(secs));
    }
}

fn handle_task(game: &mut Game, task: Task) {
    match task {
        Task::WindReady => game.state.main.winder.finish_cooldown(),
        Task::CondenseReady => game.state.condenser.condenser.finish_cooldown(),
        Task::WindDecay => {
            game.state.main.winder.decay_tick(Decimal::ONE);
        }
    }
}

/// Make the decay timer match the current decay period. The outstanding
/// occurrence is cancelled first, so a change never double-decays.
pub fn sync_decay_timer(game: &mut Game) {
    let period = decay_period(game);
    if game.decay.is_running() && game.decay.period() == period {
        return;
    }
    game.decay
        .reconfigure(&mut game.scheduler, period, Task::WindDecay);
}

// ── Actions ─────────────────────────────────────────────────────

/// Wind the power generator.
pub fn wind(game: &mut Game) -> bool {
    let max = wind_max(game);
    let cooldown = Duration::from_millis(game.config.wind_cooldown_ms);
    let outcome = game
        .state
        .main
        .winder
        .trigger(max, cooldown, &mut game.scheduler, Task::WindReady);
    outcome != Trigger::Ignored
}

/// Press the condenser. The tenth accepted press pays out.
pub fn condense(game: &mut Game) -> bool {
    if !can_condense(game) {
        return false;
    }
    let max = game.config.condense_max;
    let cooldown = condense_cooldown(game);
    let outcome = game.state.condenser.condenser.trigger(
        max,
        cooldown,
        &mut game.scheduler,
        Task::CondenseReady,
    );
    match outcome {
        Trigger::Ignored => false,
        Trigger::Completed => {
            let cost = game.config.condense_cost;
            game.state.main.points.debit(cost);
            let gain = condense_gain(game);
            game.state.condenser.points.credit(gain);
            log::info!("condensed {} time into {} condensed time", cost, gain);
            true
        }
        Trigger::Advanced | Trigger::Full => true,
    }
}

pub fn buy_upgrade(game: &mut Game, id: UpgradeId) -> bool {
    let cost = upgrade_cost(game, id);
    let bought = match id {
        UpgradeId::Main(u) => {
            let main = &mut game.state.main;
            main.upgrades[u.index()].purchase(&mut main.points, cost)
        }
        UpgradeId::Condenser(u) => {
            let condenser = &mut game.state.condenser;
            condenser.upgrades[u.index()].purchase(&mut condenser.points, cost)
        }
    };
    if !bought {
        return false;
    }
    log::info!("bought {:?} for {}", id, cost);
    if id == UpgradeId::Main(MainUpgrade::DoublePower) {
        sync_decay_timer(game);
    }
    true
}

pub fn buy_repeatable(game: &mut Game, id: RepeatableId) -> bool {
    let cost = repeatable_cost(game, id);
    let space = &mut game.state.space;
    if !space.repeatables[id.index()].purchase(&mut space.points, cost) {
        return false;
    }
    log::info!("bought {:?} #{} for {}", id, space.amount(id), cost);
    true
}

/// Convert main points into space points, then reset the space node.
/// Refused while the conversion would yield nothing.
pub fn space_reset(game: &mut Game) -> bool {
    if !space_gain(game).is_positive() {
        return false;
    }
    let source = game.state.main.points.value();
    let gained = SPACE_CONVERSION.convert(source, &mut game.state.space.points);
    log::info!("space reset for {} space points", gained);
    reset(game, NodeId::Space)
}

/// Reset `node`: every layer in its closure, and every layer below it
/// through branches, goes back to its baseline.
pub fn reset(game: &mut Game, node: NodeId) -> bool {
    let Some(plan) = game.tree.reset_plan(node) else {
        return false;
    };
    for layer in &plan.layers {
        reset_layer(game, *layer, node);
    }

    // Condenser upgrade 5 may be gone, shrinking the winder.
    if plan.touches(&LayerId::Condenser) {
        let max = wind_max(game);
        game.state.main.winder.clamp_to(max);
    }
    if plan.touches(&LayerId::Main) {
        sync_decay_timer(game);
    }

    log::info!("reset {} ({:?})", node.name(), plan.layers);
    true
}

fn reset_layer(game: &mut Game, layer: LayerId, resetting: NodeId) {
    match layer {
        LayerId::Main => {
            let baseline = if resetting == NodeId::Condenser {
                Decimal::ZERO
            } else {
                game.config.reset_points
            };
            let main = &mut game.state.main;
            main.points.reset_to(baseline);
            main.upgrades.iter_mut().for_each(|u| u.reset());
        }
        LayerId::Condenser => {
            let condenser = &mut game.state.condenser;
            condenser.points.reset_to(Decimal::ZERO);
            condenser.upgrades.iter_mut().for_each(|u| u.reset());
            condenser.condenser.reset(&mut game.scheduler);
        }
        LayerId::Space => {
            let space = &mut game.state.space;
            space.points.reset_to(Decimal::ZERO);
            space.repeatables.iter_mut().for_each(|r| r.reset());
        }
    }
}
