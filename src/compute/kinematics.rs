//! Per-tick integration rules, one per entity type.
//!
//! None of these touch randomness except the star wrap, which only affects
//! the background.

use rand::Rng;

use crate::constants::*;
use crate::entities::{Bullet, Enemy, EnemyKind, Particle, PowerUp, Star};

pub fn advance_bullet(bullet: &mut Bullet) {
    bullet.x += bullet.vx;
    bullet.y += bullet.vy;

    bullet.trail.push((bullet.x, bullet.y));
    if bullet.trail.len() > BULLET_TRAIL_LEN {
        bullet.trail.remove(0);
    }
}

/// True once the bullet has fully left any of the four canvas edges.
pub fn bullet_off_screen(bullet: &Bullet) -> bool {
    bullet.y < -bullet.height
        || bullet.y > CANVAS_HEIGHT + bullet.height
        || bullet.x < -bullet.width
        || bullet.x > CANVAS_WIDTH + bullet.width
}

pub fn advance_particle(particle: &mut Particle) {
    particle.x += particle.vx;
    particle.y += particle.vy;
    particle.vx *= PARTICLE_DRAG;
    particle.vy *= PARTICLE_DRAG;
    particle.life = particle.life.saturating_sub(1);
}

pub fn advance_star(star: &mut Star, rng: &mut impl Rng) {
    star.y += star.speed;
    if star.y > CANVAS_HEIGHT {
        star.y = 0.0;
        star.x = rng.gen_range(0.0..CANVAS_WIDTH);
    }
}

pub fn advance_power_up(power_up: &mut PowerUp) {
    power_up.y += power_up.speed;
    power_up.angle += POWER_UP_SPIN;
    power_up.pulse_phase += POWER_UP_PULSE_STEP;
}

/// Power-ups only ever fall, so only the bottom edge matters.
pub fn power_up_off_screen(power_up: &PowerUp) -> bool {
    power_up.y > CANVAS_HEIGHT + power_up.height
}

pub fn advance_enemy(enemy: &mut Enemy) {
    enemy.y += enemy.speed;

    if enemy.kind == EnemyKind::Fast {
        enemy.angle += FAST_WOBBLE_STEP;
        enemy.x = enemy.base_x + enemy.angle.sin() * FAST_WOBBLE_AMPLITUDE;
    }
}
