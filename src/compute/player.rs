//! Player controller: movement, firing cadence, power-up timers.

use log::debug;

use crate::config::GameConfig;
use crate::constants::*;
use crate::entities::{Bullet, PowerUpKind, SessionState, Ship};
use crate::input::InputState;

/// One controller step: move, maybe fire, then run down the power-up timers.
pub fn update_ship(state: &mut SessionState, input: &InputState) {
    move_ship(&mut state.ship, input);

    let ship = &mut state.ship;
    ship.ticks_since_shot = ship.ticks_since_shot.saturating_add(1);
    if input.fire && ship.ticks_since_shot >= state.config.shoot_cooldown {
        state.bullets.extend(shoot(ship));
        ship.ticks_since_shot = 0;
    }

    tick_power_ups(ship);
}

/// Each held direction moves by the current speed, keeping the whole ship
/// on the canvas. Opposite directions cancel out.
pub fn move_ship(ship: &mut Ship, input: &InputState) {
    if input.left {
        ship.x = (ship.x - ship.speed).max(0.0);
    }
    if input.right {
        ship.x = (ship.x + ship.speed).min(CANVAS_WIDTH - ship.width);
    }
    if input.up {
        ship.y = (ship.y - ship.speed).max(0.0);
    }
    if input.down {
        ship.y = (ship.y + ship.speed).min(CANVAS_HEIGHT - ship.height);
    }
}

/// Bullets for one trigger pull, launched from the ship's nose.
pub fn shoot(ship: &Ship) -> Vec<Bullet> {
    let x = ship.x + ship.width / 2.0;
    let y = ship.y;

    if ship.has_triple_shot() {
        vec![
            Bullet::new(x, y, 0.0, -BULLET_SPEED),
            Bullet::new(x, y, -SPREAD_VX, -SPREAD_VY),
            Bullet::new(x, y, SPREAD_VX, -SPREAD_VY),
        ]
    } else {
        vec![Bullet::new(x, y, 0.0, -BULLET_SPEED)]
    }
}

pub fn activate_triple_shot(ship: &mut Ship, config: &GameConfig) {
    ship.triple_shot_ticks = config.triple_shot_ticks;
}

pub fn activate_speed_boost(ship: &mut Ship, config: &GameConfig) {
    ship.speed_boost_ticks = config.speed_boost_ticks;
    ship.speed = ship.base_speed * config.speed_boost_factor;
}

pub fn activate_shield(ship: &mut Ship, config: &GameConfig) {
    ship.shield_ticks = config.shield_ticks;
}

/// Re-activating an active power-up restarts its full duration; it never
/// stacks.
pub fn apply_power_up(ship: &mut Ship, kind: PowerUpKind, config: &GameConfig) {
    debug!("power-up collected: {:?}", kind);
    match kind {
        PowerUpKind::TripleShot => activate_triple_shot(ship, config),
        PowerUpKind::SpeedBoost => activate_speed_boost(ship, config),
        PowerUpKind::Shield => activate_shield(ship, config),
    }
}

pub fn tick_power_ups(ship: &mut Ship) {
    if ship.triple_shot_ticks > 0 {
        ship.triple_shot_ticks -= 1;
    }

    if ship.speed_boost_ticks > 0 {
        ship.speed_boost_ticks -= 1;
        if ship.speed_boost_ticks == 0 {
            ship.speed = ship.base_speed;
        }
    }

    if ship.shield_ticks > 0 {
        ship.shield_ticks -= 1;
    }
}
