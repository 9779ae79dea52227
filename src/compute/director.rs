//! Spawn cadence, enemy mix, power-up drops and the difficulty ramp.

use log::debug;
use rand::Rng;

use crate::config::GameConfig;
use crate::constants::*;
use crate::entities::{Enemy, EnemyKind, PowerUp, PowerUpKind, SessionState};

/// Advance the spawn timer and emit one enemy when it reaches the interval.
pub fn spawn_step(state: &mut SessionState, rng: &mut impl Rng) {
    state.spawn_timer += 1;

    if state.spawn_timer >= state.spawn_interval {
        state.spawn_timer = 0;
        let kind = pick_enemy_kind(state.game_time, rng.gen());
        let x = rng.gen_range(ENEMY_SPAWN_MARGIN..CANVAS_WIDTH - ENEMY_SPAWN_MARGIN);
        debug!("spawning {:?} enemy at x={:.1} (t={})", kind, x, state.game_time);
        state.enemies.push(Enemy::new(x, ENEMY_SPAWN_Y, kind));
    }
}

/// Enemy mix as a function of elapsed play time. `roll` is uniform in [0, 1).
pub fn pick_enemy_kind(game_time: u64, roll: f64) -> EnemyKind {
    if game_time > HEAVY_PHASE_TICKS {
        if roll < LATE_HEAVY_CHANCE {
            EnemyKind::Heavy
        } else if roll < LATE_HEAVY_CHANCE + LATE_FAST_CHANCE {
            EnemyKind::Fast
        } else {
            EnemyKind::Basic
        }
    } else if game_time > FAST_PHASE_TICKS {
        if roll < MID_FAST_CHANCE {
            EnemyKind::Fast
        } else {
            EnemyKind::Basic
        }
    } else {
        EnemyKind::Basic
    }
}

/// Which power-up, if any, a kill drops. `roll` is uniform in [0, 1).
pub fn pick_power_up(roll: f64, config: &GameConfig) -> Option<PowerUpKind> {
    let triple = config.triple_shot_chance;
    let speed = triple + config.speed_boost_chance;
    let shield = speed + config.shield_chance;

    if roll < triple {
        Some(PowerUpKind::TripleShot)
    } else if roll < speed {
        Some(PowerUpKind::SpeedBoost)
    } else if roll < shield {
        Some(PowerUpKind::Shield)
    } else {
        None
    }
}

/// One drop attempt centred on (`x`, `y`), the dead enemy's centre.
pub fn maybe_drop_power_up(state: &mut SessionState, x: f32, y: f32, rng: &mut impl Rng) {
    if let Some(kind) = pick_power_up(rng.gen(), &state.config) {
        debug!("dropping {:?} at ({:.1}, {:.1})", kind, x, y);
        let phase = rng.gen_range(0.0..std::f32::consts::TAU);
        state
            .power_ups
            .push(PowerUp::new(x - POWER_UP_SIZE / 2.0, y, kind, phase));
    }
}

/// Every `difficulty_interval` ticks: spawn faster and speed up the live
/// enemies. Enemies spawned later keep their table speed.
pub fn difficulty_step(state: &mut SessionState) {
    state.difficulty_timer += 1;

    if state.difficulty_timer >= state.config.difficulty_interval {
        state.difficulty_timer = 0;

        let config = &state.config;
        if state.spawn_interval > config.min_spawn_interval {
            state.spawn_interval = state
                .spawn_interval
                .saturating_sub(config.spawn_interval_step)
                .max(config.min_spawn_interval);
        }

        for enemy in &mut state.enemies {
            enemy.speed = ramp_speed(enemy.speed);
        }

        debug!(
            "difficulty ramp: spawn interval {} ticks, {} enemies sped up",
            state.spawn_interval,
            state.enemies.len()
        );
    }
}

/// The smaller of a 5 % and a +0.5 increase.
pub fn ramp_speed(speed: f32) -> f32 {
    (speed * RAMP_SPEED_FACTOR).min(speed + RAMP_SPEED_BONUS)
}
