//! Particle bursts. Purely visual; they never feed back into gameplay.

use rand::Rng;

use crate::constants::*;
use crate::entities::{Particle, Rgb};

#[allow(clippy::too_many_arguments)]
fn burst(
    particles: &mut Vec<Particle>,
    x: f32,
    y: f32,
    color: Rgb,
    count: usize,
    spread: f32,
    life: u32,
    rng: &mut impl Rng,
) {
    particles.extend((0..count).map(|_| Particle {
        x,
        y,
        vx: rng.gen_range(-spread..spread),
        vy: rng.gen_range(-spread..spread),
        color,
        life,
        max_life: life,
        size: rng.gen_range(3.0..8.0),
    }));
}

/// Enemy death, or a shield absorbing a hit.
pub fn create_explosion(
    particles: &mut Vec<Particle>,
    x: f32,
    y: f32,
    color: Rgb,
    count: usize,
    rng: &mut impl Rng,
) {
    burst(particles, x, y, color, count, EXPLOSION_SPREAD, EXPLOSION_LIFE, rng);
}

/// Bullet impact that did not necessarily kill.
pub fn create_hit_effect(particles: &mut Vec<Particle>, x: f32, y: f32, rng: &mut impl Rng) {
    burst(
        particles,
        x,
        y,
        Rgb::WHITE,
        HIT_PARTICLES,
        HIT_SPREAD,
        HIT_LIFE,
        rng,
    );
}

/// Power-up pickup.
pub fn create_sparkle(particles: &mut Vec<Particle>, x: f32, y: f32, rng: &mut impl Rng) {
    burst(
        particles,
        x,
        y,
        Rgb::YELLOW,
        SPARKLE_PARTICLES,
        SPARKLE_SPREAD,
        SPARKLE_LIFE,
        rng,
    );
}
