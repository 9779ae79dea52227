//! Game-logic functions.
//!
//! [`tick`] takes an immutable reference to the current [`SessionState`]
//! plus the polled input and an RNG handle, and returns a brand-new state.
//! Side effects are limited to the injected RNG, so a seeded RNG replays a
//! session exactly.

pub mod collision;
pub mod director;
pub mod effects;
pub mod kinematics;
pub mod player;

use log::info;
use rand::Rng;

use crate::config::GameConfig;
use crate::constants::*;
use crate::entities::{GameStatus, SessionState, Ship, Star};
use crate::input::InputState;

use collision::{resolve_bullet_hits, update_enemies, update_power_ups};
use director::{difficulty_step, spawn_step};
use kinematics::{advance_bullet, advance_particle, advance_star, bullet_off_screen};
use player::update_ship;

// ── Constructors ─────────────────────────────────────────────────────────────

fn starfield(count: usize, rng: &mut impl Rng) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            x: rng.gen_range(0.0..CANVAS_WIDTH),
            y: rng.gen_range(0.0..CANVAS_HEIGHT),
            speed: rng.gen_range(1.0..4.0),
            size: rng.gen_range(1.0..3.0),
            brightness: rng.gen_range(100..=255),
        })
        .collect()
}

/// Build a fresh `Playing` session.
pub fn init_state(config: GameConfig, best_score: u32, rng: &mut impl Rng) -> SessionState {
    info!("new session (best score {})", best_score);
    SessionState {
        ship: Ship::new(&config),
        enemies: Vec::new(),
        bullets: Vec::new(),
        power_ups: Vec::new(),
        particles: Vec::new(),
        stars: starfield(config.star_count, rng),
        status: GameStatus::Playing,
        score: 0,
        best_score,
        previous_best: best_score,
        game_time: 0,
        frame: 0,
        spawn_timer: 0,
        spawn_interval: config.initial_spawn_interval,
        difficulty_timer: 0,
        config,
    }
}

/// Full reset after a game over. Only the best score, the tuning and the
/// cosmetic frame counter carry over.
pub fn restart(state: &SessionState, rng: &mut impl Rng) -> SessionState {
    SessionState {
        frame: state.frame,
        ..init_state(state.config, state.best_score, rng)
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.
///
/// While `Playing` everything moves; after a game over only the stars and
/// the particles keep animating.
pub fn tick(state: &SessionState, input: &InputState, rng: &mut impl Rng) -> SessionState {
    let mut next = state.clone();
    next.frame += 1;

    for star in &mut next.stars {
        advance_star(star, rng);
    }

    match next.status {
        GameStatus::Playing => play_step(&mut next, input, rng),
        GameStatus::GameOver => update_particles(&mut next),
    }

    next
}

fn play_step(state: &mut SessionState, input: &InputState, rng: &mut impl Rng) {
    state.game_time += 1;

    // ── 1. Ship ──────────────────────────────────────────────────────────────
    update_ship(state, input);

    // ── 2. Spawn ─────────────────────────────────────────────────────────────
    spawn_step(state, rng);

    // ── 3. Enemies (movement + ship contact) ─────────────────────────────────
    update_enemies(state, rng);

    // ── 4. Bullets ───────────────────────────────────────────────────────────
    for bullet in &mut state.bullets {
        advance_bullet(bullet);
    }
    state.bullets.retain(|b| !bullet_off_screen(b));

    // ── 5. Power-ups (movement + pickup) ─────────────────────────────────────
    update_power_ups(state, rng);

    // ── 6. Particles ─────────────────────────────────────────────────────────
    update_particles(state);

    // ── 7. Bullets ↔ enemies ─────────────────────────────────────────────────
    resolve_bullet_hits(state, rng);

    // ── 8. Cleanup ───────────────────────────────────────────────────────────
    state
        .enemies
        .retain(|e| e.y < CANVAS_HEIGHT + ENEMY_CLEANUP_MARGIN);

    // ── 9. Difficulty ────────────────────────────────────────────────────────
    difficulty_step(state);
}

fn update_particles(state: &mut SessionState) {
    for particle in &mut state.particles {
        advance_particle(particle);
    }
    state.particles.retain(|p| !p.is_dead());
}
