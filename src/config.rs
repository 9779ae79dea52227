//! Runtime tuning loaded from an optional TOML file.
//!
//! [`GameConfig`] mirrors the tunable values in [`crate::constants`]. Missing
//! keys fall back to those compiled defaults, so a file can override just the
//! values you care about:
//!
//! ```toml
//! initial_spawn_interval = 90
//! shield_ticks = 1200
//! ```
//!
//! The canvas size and tick rate are fixed and cannot be tuned.

use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::constants::*;
use crate::error::{GameError, GameResult};

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    // ── Background ────────────────────────────────────────────────────────────
    pub star_count: usize,

    // ── Director ──────────────────────────────────────────────────────────────
    pub initial_spawn_interval: u32,
    pub min_spawn_interval: u32,
    pub spawn_interval_step: u32,
    pub difficulty_interval: u32,

    // ── Ship ──────────────────────────────────────────────────────────────────
    pub shoot_cooldown: u32,
    pub ship_base_speed: f32,
    pub speed_boost_factor: f32,

    // ── Power-up durations (ticks) ────────────────────────────────────────────
    pub triple_shot_ticks: u32,
    pub speed_boost_ticks: u32,
    pub shield_ticks: u32,

    // ── Power-up drop odds ────────────────────────────────────────────────────
    pub triple_shot_chance: f64,
    pub speed_boost_chance: f64,
    pub shield_chance: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            star_count: STAR_COUNT,
            initial_spawn_interval: INITIAL_SPAWN_INTERVAL,
            min_spawn_interval: MIN_SPAWN_INTERVAL,
            spawn_interval_step: SPAWN_INTERVAL_STEP,
            difficulty_interval: DIFFICULTY_INTERVAL,
            shoot_cooldown: SHOOT_COOLDOWN,
            ship_base_speed: SHIP_BASE_SPEED,
            speed_boost_factor: SPEED_BOOST_FACTOR,
            triple_shot_ticks: TRIPLE_SHOT_TICKS,
            speed_boost_ticks: SPEED_BOOST_TICKS,
            shield_ticks: SHIELD_TICKS,
            triple_shot_chance: TRIPLE_SHOT_CHANCE,
            speed_boost_chance: SPEED_BOOST_CHANCE,
            shield_chance: SHIELD_CHANCE,
        }
    }
}

impl GameConfig {
    /// Parse a TOML document and validate the result.
    pub fn from_toml_str(contents: &str, path: &Path) -> GameResult<Self> {
        let config: GameConfig =
            toml::from_str(contents).map_err(|source| GameError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Read a tuning file from disk.
    pub fn load(path: &Path) -> GameResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| GameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents, path)?;
        info!("loaded game config from {}", path.display());
        Ok(config)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> GameResult<()> {
        positive_u32("initial_spawn_interval", self.initial_spawn_interval)?;
        positive_u32("min_spawn_interval", self.min_spawn_interval)?;
        positive_u32("difficulty_interval", self.difficulty_interval)?;

        if self.min_spawn_interval > self.initial_spawn_interval {
            return Err(GameError::InvalidConfig {
                name: "min_spawn_interval",
                value: self.min_spawn_interval.to_string(),
                expected: "at most initial_spawn_interval",
            });
        }

        if !self.ship_base_speed.is_finite() || self.ship_base_speed <= 0.0 {
            return Err(GameError::InvalidConfig {
                name: "ship_base_speed",
                value: self.ship_base_speed.to_string(),
                expected: "> 0",
            });
        }
        if !self.speed_boost_factor.is_finite() || self.speed_boost_factor < 1.0 {
            return Err(GameError::InvalidConfig {
                name: "speed_boost_factor",
                value: self.speed_boost_factor.to_string(),
                expected: ">= 1",
            });
        }

        probability("triple_shot_chance", self.triple_shot_chance)?;
        probability("speed_boost_chance", self.speed_boost_chance)?;
        probability("shield_chance", self.shield_chance)?;
        let total = self.triple_shot_chance + self.speed_boost_chance + self.shield_chance;
        if total > 1.0 {
            return Err(GameError::InvalidConfig {
                name: "power-up chances",
                value: total.to_string(),
                expected: "a sum of at most 1",
            });
        }
        Ok(())
    }
}

fn positive_u32(name: &'static str, value: u32) -> GameResult<()> {
    if value == 0 {
        Err(GameError::InvalidConfig {
            name,
            value: value.to_string(),
            expected: "> 0",
        })
    } else {
        Ok(())
    }
}

fn probability(name: &'static str, value: f64) -> GameResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GameError::InvalidConfig {
            name,
            value: value.to_string(),
            expected: "[0, 1]",
        })
    }
}
