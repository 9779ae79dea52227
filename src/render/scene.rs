//! Per-entity render calls and the HUD.
//!
//! Everything takes the cosmetic frame counter explicitly; nothing here
//! reads or changes gameplay state.

use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::entities::{
    Bullet, Enemy, EnemyKind, GameStatus, Particle, PowerUp, Rgb, SessionState, Ship, Star,
};
use crate::hud;
use crate::render::{Canvas, TextAlign};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BACKGROUND: Rgb = Rgb::new(5, 5, 15);
const C_SHIP_BODY: Rgb = Rgb::new(0, 150, 255);
const C_SHIP_WINGS: Rgb = Rgb::new(100, 100, 255);
const C_ENGINE: Rgb = Rgb::new(255, 100, 0);
const C_SHIELD: Rgb = Rgb::new(0, 255, 0);
const C_ARMOR: Rgb = Rgb::new(100, 100, 100);
const C_DANGER: Rgb = Rgb::new(255, 0, 0);
const C_BULLET: Rgb = Rgb::YELLOW;
const C_DIM_TEXT: Rgb = Rgb::new(200, 200, 200);

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn draw_frame(canvas: &mut impl Canvas, state: &SessionState) {
    let tick = state.frame;
    canvas.background(C_BACKGROUND);

    for star in &state.stars {
        draw_star(canvas, star);
    }

    match state.status {
        GameStatus::Playing => {
            draw_ship(canvas, &state.ship, tick);
            for enemy in &state.enemies {
                draw_enemy(canvas, enemy, tick);
            }
            for bullet in &state.bullets {
                draw_bullet(canvas, bullet);
            }
            for power_up in &state.power_ups {
                draw_power_up(canvas, power_up);
            }
            for particle in &state.particles {
                draw_particle(canvas, particle);
            }
        }
        GameStatus::GameOver => {
            draw_game_over(canvas, state);
            for particle in &state.particles {
                draw_particle(canvas, particle);
            }
        }
    }

    draw_hud(canvas, state);
}

// ── Entities ──────────────────────────────────────────────────────────────────

pub fn draw_ship(canvas: &mut impl Canvas, ship: &Ship, tick: u64) {
    canvas.push();
    canvas.translate(ship.x + ship.width / 2.0, ship.y + ship.height / 2.0);

    if ship.is_shielded() {
        canvas.stroke(C_SHIELD);
        canvas.no_fill();
        canvas.ellipse(0.0, 0.0, ship.width + 20.0, ship.height + 20.0);
    }

    canvas.fill(C_SHIP_BODY, 255);
    canvas.stroke(Rgb::WHITE);
    canvas.triangle((-15.0, 15.0), (15.0, 15.0), (0.0, -20.0));

    canvas.fill(C_SHIP_WINGS, 255);
    canvas.triangle((-15.0, 15.0), (-20.0, 25.0), (-10.0, 25.0));
    canvas.triangle((15.0, 15.0), (20.0, 25.0), (10.0, 25.0));

    // engine flicker
    if tick % 4 < 2 {
        canvas.fill(C_ENGINE, 150);
        canvas.no_stroke();
        canvas.ellipse(-5.0, 20.0, 8.0, 15.0);
        canvas.ellipse(5.0, 20.0, 8.0, 15.0);
    }

    canvas.pop();
}

pub fn draw_enemy(canvas: &mut impl Canvas, enemy: &Enemy, tick: u64) {
    canvas.push();
    canvas.translate(enemy.x + enemy.width / 2.0, enemy.y + enemy.height / 2.0);

    canvas.fill(enemy.color, 255);
    canvas.stroke(Rgb::WHITE);

    match enemy.kind {
        EnemyKind::Basic => {
            canvas.triangle((-15.0, -15.0), (15.0, -15.0), (0.0, 20.0));
        }
        EnemyKind::Fast => {
            canvas.triangle((-10.0, -20.0), (10.0, -20.0), (0.0, 15.0));
            canvas.triangle((-15.0, -10.0), (-5.0, -20.0), (-5.0, 10.0));
            canvas.triangle((15.0, -10.0), (5.0, -20.0), (5.0, 10.0));
        }
        EnemyKind::Heavy => {
            canvas.rect(-25.0, -25.0, 50.0, 50.0, 5.0);
            canvas.fill(C_ARMOR, 255);
            canvas.rect(-20.0, -20.0, 40.0, 40.0, 3.0);

            canvas.fill(C_DANGER, 255);
            canvas.no_stroke();
            let bar = 40.0 * enemy.health as f32 / enemy.max_health as f32;
            canvas.rect(-20.0, -35.0, bar, 5.0, 0.0);
        }
    }

    if enemy.is_damaged() && tick % 10 < 5 {
        canvas.fill(C_DANGER, 100);
        canvas.no_stroke();
        canvas.ellipse(0.0, 0.0, enemy.width, enemy.height);
    }

    canvas.pop();
}

pub fn draw_bullet(canvas: &mut impl Canvas, bullet: &Bullet) {
    // trail fades in towards the head
    canvas.no_stroke();
    let last = bullet.trail.len().saturating_sub(1);
    for (i, &(tx, ty)) in bullet.trail.iter().enumerate() {
        let alpha = if last == 0 { 255 } else { (i * 255 / last) as u8 };
        canvas.fill(C_BULLET, alpha);
        canvas.ellipse(tx, ty, 3.0, 3.0);
    }

    canvas.fill(C_BULLET, 255);
    canvas.stroke(Rgb::WHITE);
    canvas.ellipse(bullet.x, bullet.y, bullet.width, bullet.height);

    canvas.fill(C_BULLET, 100);
    canvas.no_stroke();
    canvas.ellipse(bullet.x, bullet.y, bullet.width + 4.0, bullet.height + 4.0);
}

pub fn draw_power_up(canvas: &mut impl Canvas, power_up: &PowerUp) {
    let color = power_up.kind.color();
    let pulse = 1.0 + power_up.pulse_phase.sin() * 0.3;

    canvas.push();
    canvas.translate(
        power_up.x + power_up.width / 2.0,
        power_up.y + power_up.height / 2.0,
    );
    canvas.rotate(power_up.angle);

    canvas.fill(color, 100);
    canvas.no_stroke();
    canvas.ellipse(
        0.0,
        0.0,
        power_up.width * pulse * 1.5,
        power_up.height * pulse * 1.5,
    );

    canvas.fill(color, 255);
    canvas.stroke(Rgb::WHITE);
    canvas.ellipse(0.0, 0.0, power_up.width * pulse, power_up.height * pulse);

    canvas.fill(Rgb::WHITE, 255);
    canvas.no_stroke();
    canvas.text(power_up.kind.symbol(), 0.0, 0.0, 16.0, TextAlign::Center);

    canvas.pop();
}

pub fn draw_particle(canvas: &mut impl Canvas, particle: &Particle) {
    let alpha = if particle.max_life == 0 {
        0
    } else {
        (particle.life.min(particle.max_life) * 255 / particle.max_life) as u8
    };
    canvas.fill(particle.color, alpha);
    canvas.no_stroke();
    canvas.ellipse(particle.x, particle.y, particle.size, particle.size);
}

pub fn draw_star(canvas: &mut impl Canvas, star: &Star) {
    let b = star.brightness;
    canvas.fill(Rgb::new(b, b, b), 255);
    canvas.no_stroke();
    canvas.ellipse(star.x, star.y, star.size, star.size);
}

// ── HUD ───────────────────────────────────────────────────────────────────────

pub fn draw_hud(canvas: &mut impl Canvas, state: &SessionState) {
    canvas.no_stroke();
    canvas.fill(Rgb::WHITE, 255);
    canvas.text(&hud::score_line(state.score), 20.0, 30.0, 24.0, TextAlign::Left);
    canvas.text(&hud::best_line(state.best_score), 20.0, 55.0, 18.0, TextAlign::Left);

    let mut y = 80.0;
    for (kind, line) in hud::power_up_lines(&state.ship) {
        canvas.fill(kind.color(), 255);
        canvas.text(&line, 20.0, y, 14.0, TextAlign::Left);
        y += 20.0;
    }

    canvas.fill(Rgb::WHITE, 255);
    canvas.text(
        &hud::time_line(state.game_time),
        CANVAS_WIDTH - 20.0,
        30.0,
        16.0,
        TextAlign::Right,
    );
}

pub fn draw_game_over(canvas: &mut impl Canvas, state: &SessionState) {
    let cx = CANVAS_WIDTH / 2.0;
    let cy = CANVAS_HEIGHT / 2.0;

    canvas.no_stroke();
    canvas.fill(Rgb::new(0, 0, 0), 150);
    canvas.rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT, 0.0);

    canvas.fill(C_DANGER, 255);
    canvas.text("GAME OVER", cx, cy - 80.0, 48.0, TextAlign::Center);

    canvas.fill(Rgb::WHITE, 255);
    canvas.text(
        &format!("Final Score: {}", state.score),
        cx,
        cy - 20.0,
        32.0,
        TextAlign::Center,
    );

    if hud::is_new_high_score(state) {
        canvas.fill(Rgb::YELLOW, 255);
        canvas.text("NEW HIGH SCORE!", cx, cy + 20.0, 24.0, TextAlign::Center);
    } else {
        canvas.fill(C_DIM_TEXT, 255);
        canvas.text(
            &format!("High Score: {}", state.best_score),
            cx,
            cy + 20.0,
            20.0,
            TextAlign::Center,
        );
    }

    canvas.fill(Rgb::WHITE, 255);
    canvas.text(
        "Press R or click to restart",
        cx,
        cy + 60.0,
        18.0,
        TextAlign::Center,
    );
}
