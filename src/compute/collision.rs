//! Overlap test and the three collision passes.
//!
//! Removals are tombstoned during the scan and compacted afterwards, which
//! keeps the scan order identical to walking the lists back to front and
//! deleting in place.

use log::{debug, info};
use rand::Rng;

use crate::compute::director::maybe_drop_power_up;
use crate::compute::effects::{create_explosion, create_hit_effect, create_sparkle};
use crate::compute::kinematics::{advance_enemy, advance_power_up, power_up_off_screen};
use crate::compute::player::apply_power_up;
use crate::constants::*;
use crate::entities::{Bounds, GameStatus, Rgb, SessionState};

/// Half-open AABB overlap. Boxes that only share an edge do not collide.
pub fn check_collision<A, B>(a: &A, b: &B) -> bool
where
    A: Bounds + ?Sized,
    B: Bounds + ?Sized,
{
    a.x() < b.x() + b.width()
        && a.x() + a.width() > b.x()
        && a.y() < b.y() + b.height()
        && a.y() + a.height() > b.y()
}

/// Drop every item whose tombstone is set, preserving order.
pub(crate) fn compact<T>(items: &mut Vec<T>, removed: &[bool]) {
    let mut idx = 0;
    items.retain(|_| {
        let keep = !removed[idx];
        idx += 1;
        keep
    });
}

/// Move every enemy and resolve contact with the ship.
///
/// A shield absorbs one contact and takes the enemy with it; an unshielded
/// contact ends the session. Enemies that slip past the bottom are dropped.
pub fn update_enemies(state: &mut SessionState, rng: &mut impl Rng) {
    let mut removed = vec![false; state.enemies.len()];

    for i in (0..state.enemies.len()).rev() {
        advance_enemy(&mut state.enemies[i]);

        if check_collision(&state.ship, &state.enemies[i]) {
            if state.ship.is_shielded() {
                state.ship.shield_ticks = 0;
                let (cx, cy) = state.enemies[i].center();
                create_explosion(
                    &mut state.particles,
                    cx,
                    cy,
                    Rgb::CYAN,
                    SHIELD_BREAK_PARTICLES,
                    rng,
                );
                debug!("shield absorbed a {:?} enemy", state.enemies[i].kind);
                removed[i] = true;
            } else {
                end_session(state);
            }
        } else if state.enemies[i].y > CANVAS_HEIGHT + ENEMY_EXIT_MARGIN {
            removed[i] = true;
        }
    }

    compact(&mut state.enemies, &removed);
}

/// `Playing → GameOver`, raising the best score if this run beat it.
fn end_session(state: &mut SessionState) {
    if state.status == GameStatus::Playing {
        info!(
            "game over: score {} after {} ticks",
            state.score, state.game_time
        );
    }
    state.status = GameStatus::GameOver;

    if state.score > state.best_score {
        info!("new best score {} (was {})", state.score, state.best_score);
        state.best_score = state.score;
    }
}

/// Move power-ups and hand any the ship touches to the controller.
pub fn update_power_ups(state: &mut SessionState, rng: &mut impl Rng) {
    let mut removed = vec![false; state.power_ups.len()];

    for i in (0..state.power_ups.len()).rev() {
        advance_power_up(&mut state.power_ups[i]);

        if check_collision(&state.ship, &state.power_ups[i]) {
            let kind = state.power_ups[i].kind;
            apply_power_up(&mut state.ship, kind, &state.config);
            state.score += POWER_UP_SCORE;

            let (cx, cy) = state.power_ups[i].center();
            create_sparkle(&mut state.particles, cx, cy, rng);
            removed[i] = true;
        } else if power_up_off_screen(&state.power_ups[i]) {
            removed[i] = true;
        }
    }

    compact(&mut state.power_ups, &removed);
}

/// Bullets against enemies, back to front on both lists.
///
/// A bullet stops at the first enemy it overlaps, so it damages at most one
/// enemy per tick. The same enemy can still absorb several bullets in one
/// tick.
pub fn resolve_bullet_hits(state: &mut SessionState, rng: &mut impl Rng) {
    let mut bullet_gone = vec![false; state.bullets.len()];
    let mut enemy_gone = vec![false; state.enemies.len()];

    for bi in (0..state.bullets.len()).rev() {
        for ei in (0..state.enemies.len()).rev() {
            if enemy_gone[ei] || !check_collision(&state.bullets[bi], &state.enemies[ei]) {
                continue;
            }

            let (bx, by) = (state.bullets[bi].x, state.bullets[bi].y);
            create_hit_effect(&mut state.particles, bx, by, rng);
            bullet_gone[bi] = true;

            let enemy = &mut state.enemies[ei];
            enemy.health = enemy.health.saturating_sub(1);

            if enemy.health == 0 {
                let points = enemy.points;
                let color = enemy.color;
                let (cx, cy) = enemy.center();

                state.score += points;
                create_explosion(
                    &mut state.particles,
                    cx,
                    cy,
                    color,
                    EXPLOSION_PARTICLES,
                    rng,
                );
                maybe_drop_power_up(state, cx, cy, rng);
                enemy_gone[ei] = true;
            }

            break;
        }
    }

    compact(&mut state.bullets, &bullet_gone);
    compact(&mut state.enemies, &enemy_gone);
}
