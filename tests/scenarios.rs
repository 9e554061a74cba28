//! End-to-end scenarios driven through the public `Game` API.

use std::time::Duration;

use time_condenser::game::save;
use time_condenser::game::state::{CondenserUpgrade, MainUpgrade, NodeId, RepeatableId, UpgradeId};
use time_condenser::time::FrameClock;
use time_condenser::{Action, Decimal, Game, GameConfig};

fn d(v: f64) -> Decimal {
    Decimal::from_f64(v)
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn game_with_points(points: f64) -> Game {
    Game::with_config(GameConfig {
        starting_points: d(points),
        ..GameConfig::default()
    })
}

#[test]
fn ten_spaced_condenses_pay_out_once() {
    let mut game = game_with_points(1000.0);
    let mut accepted = 0;
    for _ in 0..10 {
        if game.dispatch(Action::Condense) {
            accepted += 1;
        }
        game.update(ms(50));
    }
    assert_eq!(accepted, 10);
    assert!(game.state.main.points.value().is_zero());
    assert!(game.state.condenser.condenser.progress().is_zero());
    assert_eq!(game.state.condenser.points.value(), Decimal::ONE);
    assert_eq!(game.state.condenser.points.total(), Some(Decimal::ONE));
}

#[test]
fn payout_goes_through_both_chains() {
    let mut game = game_with_points(1000.0);
    // best 2500 → round(log_50) = 2, then ×2 from main upgrade 5
    game.state.main.points.restore(d(1000.0), Some(d(2500.0)), None);
    game.state.condenser.upgrades[CondenserUpgrade::BestTime.index()].restore(true);
    game.state.main.upgrades[MainUpgrade::SpaceUnlock.index()].restore(true);
    assert_eq!(game.condense_gain(), d(4.0));

    for _ in 0..10 {
        game.dispatch(Action::Condense);
        game.update(ms(50));
    }
    assert_eq!(game.state.condenser.points.value(), d(4.0));
    assert!(game.state.main.points.value().is_zero());
}

#[test]
fn rapid_presses_are_rate_limited() {
    let mut game = game_with_points(1000.0);
    for _ in 0..10 {
        game.dispatch(Action::Condense);
    }
    assert_eq!(game.state.condenser.condenser.progress(), Decimal::ONE);
    assert_eq!(game.state.main.points.value(), d(1000.0));
}

#[test]
fn upgrade_cost_boundary() {
    let id = UpgradeId::Condenser(CondenserUpgrade::TotalBoost);

    let mut short = Game::new();
    short.state.condenser.points.credit(d(74.999));
    assert!(!short.dispatch(Action::BuyUpgrade(id)));
    assert!(!short.state.has(id));
    assert_eq!(short.state.condenser.points.value(), d(74.999));

    let mut exact = Game::new();
    exact.state.condenser.points.credit(d(75.0));
    assert!(exact.dispatch(Action::BuyUpgrade(id)));
    assert!(exact.state.has(id));
    assert!(exact.state.condenser.points.value().is_zero());
}

#[test]
fn space_reset_restores_closure_and_keeps_the_rest() {
    let mut game = game_with_points(10_000.0);
    game.state.main.upgrades[MainUpgrade::Amplify.index()].restore(true);
    game.state.condenser.points.credit(d(80.0));
    game.state.condenser.upgrades[CondenserUpgrade::Haste.index()].restore(true);
    game.state.space.points.credit(d(1.0));
    assert!(game.dispatch(Action::BuyRepeatable(RepeatableId::Height)));
    game.state.time_played = 321.0;

    assert!(game.handle_key('s'));

    // Converted before zeroing: sqrt(10000) = 100.
    assert_eq!(game.state.space.points.value(), d(100.0));
    assert_eq!(game.state.space.amount(RepeatableId::Height), 1);
    // Main goes to the non-condenser baseline.
    assert_eq!(game.state.main.points.value(), d(10.0));
    assert_eq!(game.state.main.points.best(), Some(d(10.0)));
    assert_eq!(game.state.main.points.total(), Some(d(10.0)));
    assert!(!game.state.main.has(MainUpgrade::Amplify));
    // Condenser is reached through the branch.
    assert!(game.state.condenser.points.value().is_zero());
    assert!(!game.state.condenser.has(CondenserUpgrade::Haste));
    // Not part of any layer.
    assert_eq!(game.state.time_played, 321.0);
}

#[test]
fn condenser_reset_leaves_condenser_and_space() {
    let mut game = game_with_points(5000.0);
    game.state.condenser.points.credit(d(12.0));
    game.state.space.points.credit(d(3.0));
    assert!(game.dispatch(Action::Reset(NodeId::Condenser)));
    assert!(game.state.main.points.value().is_zero());
    assert_eq!(game.state.condenser.points.value(), d(12.0));
    assert_eq!(game.state.space.points.value(), d(3.0));
}

#[test]
fn holding_wind_prevents_decay_and_release_resumes_it() {
    let mut game = Game::new();
    // Hold: one press every 100 ms for three seconds.
    for _ in 0..30 {
        game.dispatch(Action::Wind);
        game.update(ms(100));
    }
    assert_eq!(game.state.main.winder.progress(), d(10.0));

    // Released at t = 3000 ms; the tick at 3000 already ran (suppressed by
    // the last press), so the next ones take one each.
    game.update(ms(499));
    assert_eq!(game.state.main.winder.progress(), d(10.0));
    game.update(ms(1));
    assert_eq!(game.state.main.winder.progress(), d(9.0));
    game.update(ms(500));
    assert_eq!(game.state.main.winder.progress(), d(8.0));
}

#[test]
fn buying_double_power_reschedules_without_double_decay() {
    let mut game = game_with_points(150.0);
    game.dispatch(Action::Wind);
    game.update(ms(20));
    game.dispatch(Action::Wind);
    game.update(ms(20));
    // t = 40: two presses, one decay tick pending at 500.
    assert!(game.dispatch(Action::BuyUpgrade(UpgradeId::Main(MainUpgrade::DoublePower))));
    assert_eq!(game.decay_period(), ms(1000));

    // The old 500 ms occurrence is gone.
    game.update(ms(960));
    assert_eq!(game.state.main.winder.progress(), d(2.0));
    // First new tick at 1040 eats the active flag, the next one decays.
    game.update(ms(1000));
    assert_eq!(game.state.main.winder.progress(), d(2.0));
    game.update(ms(1000));
    assert_eq!(game.state.main.winder.progress(), Decimal::ONE);
}

#[test]
fn save_round_trip_resumes_identically() {
    let mut game = game_with_points(2000.0);
    game.state.main.upgrades[MainUpgrade::DoublePower.index()].restore(true);
    for _ in 0..5 {
        game.dispatch(Action::Wind);
        game.dispatch(Action::Condense);
        game.update(ms(50));
    }

    let json = save::to_json(&game).unwrap();
    let mut restored = save::load(&json).unwrap();
    assert_eq!(restored.state.main.points, game.state.main.points);
    assert_eq!(restored.state.main.winder.progress(), game.state.main.winder.progress());
    assert_eq!(
        restored.state.condenser.condenser.progress(),
        game.state.condenser.condenser.progress()
    );
    assert_eq!(restored.decay_period(), ms(1000));

    restored.update(Duration::from_secs(2));
    assert!(restored.state.main.points.value() > game.state.main.points.value());
}

#[test]
fn frame_clock_drives_updates() {
    let mut game = Game::new();
    let mut clock = FrameClock::new(game.config().ticks_per_sec, game.config().max_frame_ms);
    let tick = clock.tick_duration();
    clock.update(0.0);
    game.dispatch(Action::Wind);

    let mut now = 0.0;
    for _ in 0..60 {
        now += 1000.0 / 60.0;
        for _ in 0..clock.update(now) {
            game.update(tick);
        }
    }
    let elapsed = game.now().as_secs_f64();
    assert!((0.9..=1.05).contains(&elapsed), "elapsed {elapsed}");
    assert!(game.state.main.points.value() > Decimal::ZERO);
}

#[test]
fn config_override_changes_starting_points() {
    let config = GameConfig::from_json(r#"{"starting_points": 160000}"#).unwrap();
    let game = Game::with_config(config);
    assert_eq!(game.state.main.points.value(), d(160000.0));
    assert_eq!(game.state.main.points.best(), Some(d(160000.0)));
}
