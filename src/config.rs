//! Runtime gameplay configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors the tunable constants in
//! [`crate::constants`].  At startup, [`load_game_config`] reads
//! `assets/game.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a
//! minimal TOML can override just the constants you care about.
//!
//! Systems take `config: Res<GameConfig>` and read values like
//! `config.rotation_speed` instead of the raw constants, which keeps a play
//! session tunable without recompiling.

use crate::constants::*;
use crate::error::{ConfigError, ConfigResult};
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable gameplay configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`.  Override any subset by setting the value in
/// `assets/game.toml`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Player ────────────────────────────────────────────────────────────────
    pub player_lives: u32,
    pub rotation_speed: f32,
    pub thrust_acceleration: f32,

    // ── Bullets ───────────────────────────────────────────────────────────────
    pub bullet_speed: f32,
    pub fire_cooldown_ms: u64,

    // ── Meteors ───────────────────────────────────────────────────────────────
    pub meteor_spawn_interval_ms: u64,
    pub meteor_speed_min: f32,
    pub meteor_speed_max: f32,
    pub split_angle_min: f32,
    pub split_angle_max: f32,

    // ── Scoring ───────────────────────────────────────────────────────────────
    pub big_meteor_score: u32,
    pub small_meteor_score: u32,

    // ── Culling ───────────────────────────────────────────────────────────────
    pub offscreen_margin: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_lives: PLAYER_LIVES,
            rotation_speed: ROTATION_SPEED,
            thrust_acceleration: THRUST_ACCELERATION,
            bullet_speed: BULLET_SPEED,
            fire_cooldown_ms: FIRE_COOLDOWN_MS,
            meteor_spawn_interval_ms: METEOR_SPAWN_INTERVAL_MS,
            meteor_speed_min: METEOR_SPEED_MIN,
            meteor_speed_max: METEOR_SPEED_MAX,
            split_angle_min: SPLIT_ANGLE_MIN,
            split_angle_max: SPLIT_ANGLE_MAX,
            big_meteor_score: BIG_METEOR_SCORE,
            small_meteor_score: SMALL_METEOR_SCORE,
            offscreen_margin: OFFSCREEN_MARGIN,
        }
    }
}

impl GameConfig {
    /// Check that configured ranges are usable by the random draws that
    /// consume them.
    ///
    /// `gen_range(min..max)` panics on an empty range, so a bad overlay must
    /// be rejected here rather than at first spawn.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.meteor_speed_min >= self.meteor_speed_max {
            return Err(ConfigError::OutOfRange {
                name: "meteor_speed_min",
                value: self.meteor_speed_min,
                accepted: "[0, meteor_speed_max)",
            });
        }
        if self.split_angle_min >= self.split_angle_max {
            return Err(ConfigError::OutOfRange {
                name: "split_angle_min",
                value: self.split_angle_min,
                accepted: "[0, split_angle_max)",
            });
        }
        if self.offscreen_margin < 0.0 {
            return Err(ConfigError::OutOfRange {
                name: "offscreen_margin",
                value: self.offscreen_margin,
                accepted: "[0, ∞)",
            });
        }
        Ok(())
    }
}

/// Parse and validate a TOML overlay.
fn parse_config(path: &'static str, contents: &str) -> ConfigResult<GameConfig> {
    let config: GameConfig = toml::from_str(contents).map_err(|e| ConfigError::Parse {
        path,
        message: e.to_string(),
    })?;
    config.validate()?;
    Ok(config)
}

/// Startup system: overlay `assets/game.toml` onto the compiled defaults.
///
/// A missing file is not an error; a malformed or out-of-range file logs a
/// warning and keeps the defaults already in place.
pub fn load_game_config(mut config: ResMut<GameConfig>) {
    let path = "assets/game.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match parse_config(path, &contents) {
            Ok(loaded) => {
                *config = loaded;
                info!("loaded game config from {path}");
            }
            Err(e) => {
                warn!("{e}; using compiled defaults");
            }
        },
        Err(_) => {
            info!("no {path} found; using compiled defaults");
        }
    }
}
