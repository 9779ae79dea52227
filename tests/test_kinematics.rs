use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use space_shooter::compute::kinematics::*;
use space_shooter::constants::*;
use space_shooter::entities::*;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── bullets ───────────────────────────────────────────────────────────────────

#[test]
fn bullet_moves_by_velocity() {
    let mut b = Bullet::new(100.0, 300.0, 3.0, -8.0);
    advance_bullet(&mut b);
    assert_eq!((b.x, b.y), (103.0, 292.0));
    assert_eq!(b.trail, vec![(103.0, 292.0)]);
}

#[test]
fn bullet_trail_keeps_last_five_positions() {
    let mut b = Bullet::new(100.0, 300.0, 0.0, -10.0);
    for _ in 0..7 {
        advance_bullet(&mut b);
    }
    assert_eq!(b.trail.len(), BULLET_TRAIL_LEN);
    assert_eq!(b.trail.first(), Some(&(100.0, 270.0)));
    assert_eq!(b.trail.last(), Some(&(b.x, b.y)));
}

#[test]
fn bullet_off_screen_edges() {
    let inside = Bullet::new(400.0, 0.0, 0.0, -10.0);
    assert!(!bullet_off_screen(&inside));

    let above = Bullet::new(400.0, -16.0, 0.0, -10.0);
    assert!(bullet_off_screen(&above));

    let left = Bullet::new(-9.0, 300.0, -3.0, -8.0);
    assert!(bullet_off_screen(&left));

    let right = Bullet::new(CANVAS_WIDTH + 1.0, 300.0, 3.0, -8.0);
    assert!(bullet_off_screen(&right));
}

// ── particles ─────────────────────────────────────────────────────────────────

#[test]
fn particle_drifts_slows_and_ages() {
    let mut p = Particle {
        x: 10.0,
        y: 20.0,
        vx: 1.0,
        vy: -2.0,
        color: Rgb::WHITE,
        life: 2,
        max_life: 30,
        size: 4.0,
    };

    advance_particle(&mut p);
    assert_eq!((p.x, p.y), (11.0, 18.0));
    assert!((p.vx - 0.98).abs() < 1e-6);
    assert!((p.vy + 1.96).abs() < 1e-6);
    assert_eq!(p.life, 1);
    assert!(!p.is_dead());

    advance_particle(&mut p);
    assert!(p.is_dead());
}

// ── stars ─────────────────────────────────────────────────────────────────────

#[test]
fn star_wraps_to_top_at_random_column() {
    let mut rng = seeded_rng();
    let mut star = Star {
        x: 10.0,
        y: 599.0,
        speed: 2.0,
        size: 1.0,
        brightness: 200,
    };

    advance_star(&mut star, &mut rng);
    assert_eq!(star.y, 0.0);
    assert!((0.0..CANVAS_WIDTH).contains(&star.x));
}

#[test]
fn star_inside_canvas_just_falls() {
    let mut rng = seeded_rng();
    let mut star = Star {
        x: 10.0,
        y: 100.0,
        speed: 2.5,
        size: 1.0,
        brightness: 200,
    };

    advance_star(&mut star, &mut rng);
    assert_eq!((star.x, star.y), (10.0, 102.5));
}

// ── power-ups ─────────────────────────────────────────────────────────────────

#[test]
fn power_up_falls_spins_and_pulses() {
    let mut p = PowerUp::new(100.0, 100.0, PowerUpKind::Shield, 0.0);
    advance_power_up(&mut p);
    assert_eq!(p.y, 102.0);
    assert!((p.angle - 0.05).abs() < 1e-6);
    assert!((p.pulse_phase - 0.1).abs() < 1e-6);
}

#[test]
fn power_up_leaves_below_canvas() {
    let mut p = PowerUp::new(100.0, CANVAS_HEIGHT + 30.0, PowerUpKind::Shield, 0.0);
    assert!(!power_up_off_screen(&p));
    p.y += 1.0;
    assert!(power_up_off_screen(&p));
}

// ── enemies ───────────────────────────────────────────────────────────────────

#[test]
fn basic_and_heavy_fall_straight() {
    let mut basic = Enemy::new(100.0, -50.0, EnemyKind::Basic);
    advance_enemy(&mut basic);
    assert_eq!((basic.x, basic.y), (100.0, -47.0));

    let mut heavy = Enemy::new(100.0, -50.0, EnemyKind::Heavy);
    advance_enemy(&mut heavy);
    assert_eq!((heavy.x, heavy.y), (100.0, -48.0));
}

#[test]
fn fast_enemy_wobbles_around_spawn_column() {
    let mut e = Enemy::new(100.0, 0.0, EnemyKind::Fast);
    advance_enemy(&mut e);
    assert_eq!(e.y, 6.0);
    assert!((e.angle - 0.1).abs() < 1e-6);
    assert!((e.x - (100.0 + 0.1f32.sin() * 30.0)).abs() < 1e-4);

    for _ in 0..100 {
        advance_enemy(&mut e);
        assert!((e.x - e.base_x).abs() <= 30.0 + 1e-4);
    }
}

proptest! {
    #[test]
    fn advance_enemy_is_deterministic(
        x in 50.0f32..750.0,
        y in -50.0f32..600.0,
        fast in any::<bool>(),
    ) {
        let kind = if fast { EnemyKind::Fast } else { EnemyKind::Basic };
        let mut a = Enemy::new(x, y, kind);
        let mut b = a.clone();
        advance_enemy(&mut a);
        advance_enemy(&mut b);
        prop_assert_eq!(a.x, b.x);
        prop_assert_eq!(a.y, b.y);
        prop_assert!(a.y > y);
    }
}
