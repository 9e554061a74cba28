//! Time Condenser セーブ/ロード機能。
//!
//! ## バージョニング方針
//!
//! - `SAVE_VERSION`: 現在のセーブ形式バージョン。フィールド追加時にインクリメントする。
//! - `MIN_COMPATIBLE_VERSION`: 互換性を維持できる最小バージョン。
//!   既存フィールドの意味変更や削除など破壊的変更を行った場合のみインクリメントする。
//!
//! 数値は `Decimal` の正規文字列（`"1.5e300"`）で保存するため、f64 の範囲を
//! 超える値も誤差なく往復する。クールダウン中のタイマーは保存しない。

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decimal::Decimal;

use super::config::GameConfig;
use super::logic;
use super::Game;

/// セーブデータのフォーマットバージョン。
pub const SAVE_VERSION: u32 = 1;

/// 互換性を維持できる最小バージョン。
pub const MIN_COMPATIBLE_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("save version {found} is older than the oldest supported version {min}")]
    TooOld { found: u32, min: u32 },
    #[error("save version {found} is newer than this build ({current})")]
    TooNew { found: u32, current: u32 },
}

#[derive(Serialize, Deserialize)]
struct SaveData {
    version: u32,
    game: GameSave,
}

#[derive(Serialize, Deserialize, Default)]
#[serde(default)]
struct GameSave {
    main_points: Decimal,
    main_best: Option<Decimal>,
    main_total: Option<Decimal>,
    /// MainUpgrade::all() の順。
    main_upgrades: Vec<bool>,
    wind_progress: Decimal,

    condenser_points: Decimal,
    condenser_total: Option<Decimal>,
    /// CondenserUpgrade::all() の順。
    condenser_upgrades: Vec<bool>,
    condenser_progress: Decimal,

    space_points: Decimal,
    /// RepeatableId::all() の順。
    repeatables: Vec<u64>,

    time_played: f64,
    /// 旧データに無い場合は設定値を使う。
    dev_speed: Option<f64>,
}

fn extract_save(game: &Game) -> SaveData {
    let s = &game.state;
    SaveData {
        version: SAVE_VERSION,
        game: GameSave {
            main_points: s.main.points.value(),
            main_best: s.main.points.best(),
            main_total: s.main.points.total(),
            main_upgrades: s.main.upgrades.iter().map(|u| u.bought()).collect(),
            wind_progress: s.main.winder.progress(),
            condenser_points: s.condenser.points.value(),
            condenser_total: s.condenser.points.total(),
            condenser_upgrades: s.condenser.upgrades.iter().map(|u| u.bought()).collect(),
            condenser_progress: s.condenser.condenser.progress(),
            space_points: s.space.points.value(),
            repeatables: s.space.repeatables.iter().map(|r| r.amount()).collect(),
            time_played: s.time_played,
            dev_speed: Some(s.dev_speed),
        },
    }
}

/// セーブデータを Game に復元する。
/// 定義の個数が合わない場合は余りを無視し、足りない分は初期値のまま。
fn apply_save(game: &mut Game, save: &GameSave) {
    // 負の値は Resource::restore が 0 に丸める
    let s = &mut game.state;
    s.main
        .points
        .restore(save.main_points, save.main_best, save.main_total);
    for (upgrade, &bought) in s.main.upgrades.iter_mut().zip(&save.main_upgrades) {
        upgrade.restore(bought);
    }

    s.condenser
        .points
        .restore(save.condenser_points, None, save.condenser_total);
    for (upgrade, &bought) in s.condenser.upgrades.iter_mut().zip(&save.condenser_upgrades) {
        upgrade.restore(bought);
    }

    s.space.points.restore(save.space_points, None, None);
    for (repeatable, &amount) in s.space.repeatables.iter_mut().zip(&save.repeatables) {
        repeatable.restore(amount);
    }

    if save.time_played.is_finite() && save.time_played >= 0.0 {
        s.time_played = save.time_played;
    }
    if let Some(speed) = save.dev_speed.filter(|v| v.is_finite() && *v >= 0.0) {
        s.dev_speed = speed;
    }

    // 進捗の上限はアップグレード復元後に決まる
    let wind_max = logic::wind_max(game);
    game.state.main.winder.restore(save.wind_progress, wind_max);
    let condense_max = game.config.condense_max;
    game.state
        .condenser
        .condenser
        .restore(save.condenser_progress, condense_max);

    // 減衰タイマーは main upgrade 2 の状態に合わせて張り直す
    logic::sync_decay_timer(game);
}

pub fn to_json(game: &Game) -> Result<String, SaveError> {
    let json = serde_json::to_string(&extract_save(game))?;
    log::info!("saved game ({} bytes)", json.len());
    Ok(json)
}

/// Load with the default config.
pub fn load(json: &str) -> Result<Game, SaveError> {
    from_json(json, GameConfig::default())
}

/// バージョン不一致やパースエラーの場合は Err を返す（呼び出し側で新規ゲームにする）。
pub fn from_json(json: &str, config: GameConfig) -> Result<Game, SaveError> {
    let data: SaveData = serde_json::from_str(json).map_err(|e| {
        log::warn!("セーブデータのパースに失敗: {e}");
        SaveError::from(e)
    })?;

    if data.version < MIN_COMPATIBLE_VERSION {
        log::warn!(
            "セーブバージョンが古すぎます (saved={}, min_compatible={})",
            data.version,
            MIN_COMPATIBLE_VERSION
        );
        return Err(SaveError::TooOld {
            found: data.version,
            min: MIN_COMPATIBLE_VERSION,
        });
    }
    if data.version > SAVE_VERSION {
        log::warn!(
            "セーブバージョンが新しすぎます (saved={}, current={})",
            data.version,
            SAVE_VERSION
        );
        return Err(SaveError::TooNew {
            found: data.version,
            current: SAVE_VERSION,
        });
    }
    if data.version < SAVE_VERSION {
        log::info!(
            "旧バージョンのセーブデータをマイグレーション (saved={}, current={})",
            data.version,
            SAVE_VERSION
        );
    }

    let mut game = Game::with_config(config);
    apply_save(&mut game, &data.game);
    log::info!("loaded save v{}", data.version);
    Ok(game)
}
