use space_shooter::config::GameConfig;
use space_shooter::constants::*;
use space_shooter::entities::*;

#[test]
fn enemy_table_matches_kind() {
    let basic = Enemy::new(10.0, 20.0, EnemyKind::Basic);
    assert_eq!((basic.width, basic.height), (40.0, 40.0));
    assert_eq!(basic.speed, 3.0);
    assert_eq!((basic.health, basic.max_health), (1, 1));
    assert_eq!(basic.points, 10);
    assert_eq!(basic.color, Rgb::new(0, 255, 0));

    let fast = Enemy::new(10.0, 20.0, EnemyKind::Fast);
    assert_eq!(fast.width, 35.0);
    assert_eq!(fast.speed, 6.0);
    assert_eq!(fast.points, 20);
    assert_eq!(fast.color, Rgb::new(255, 0, 0));

    let heavy = Enemy::new(10.0, 20.0, EnemyKind::Heavy);
    assert_eq!(heavy.width, 60.0);
    assert_eq!(heavy.speed, 2.0);
    assert_eq!((heavy.health, heavy.max_health), (3, 3));
    assert_eq!(heavy.points, 50);
}

#[test]
fn enemy_remembers_spawn_column() {
    let e = Enemy::new(123.0, -50.0, EnemyKind::Fast);
    assert_eq!(e.base_x, 123.0);
    assert_eq!(e.angle, 0.0);
    assert!(!e.is_damaged());
}

#[test]
fn ship_starts_centred_near_bottom() {
    let ship = Ship::new(&GameConfig::default());
    assert_eq!(ship.x, CANVAS_WIDTH / 2.0 - 25.0);
    assert_eq!(ship.y, CANVAS_HEIGHT - 80.0);
    assert_eq!((ship.width, ship.height), (50.0, 50.0));
    assert_eq!(ship.speed, ship.base_speed);
    assert!(!ship.is_shielded());
    assert!(!ship.has_triple_shot());
    assert!(!ship.has_speed_boost());
}

#[test]
fn bullet_box_is_eight_by_fifteen() {
    let b = Bullet::new(1.0, 2.0, 0.0, -10.0);
    assert_eq!((b.width, b.height), (8.0, 15.0));
    assert!(b.trail.is_empty());
}

#[test]
fn bounds_center() {
    let e = Enemy::new(100.0, -50.0, EnemyKind::Heavy);
    assert_eq!(e.center(), (130.0, -20.0));
}

#[test]
fn power_up_kinds_have_distinct_colours() {
    let colours = [
        PowerUpKind::TripleShot.color(),
        PowerUpKind::SpeedBoost.color(),
        PowerUpKind::Shield.color(),
    ];
    assert_ne!(colours[0], colours[1]);
    assert_ne!(colours[1], colours[2]);
    assert_ne!(colours[0], colours[2]);
}

#[test]
fn enemy_clone_is_independent() {
    let original = Enemy::new(5.0, 5.0, EnemyKind::Heavy);
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.health = 1;
    cloned.speed = 9.0;

    assert_eq!(original.health, 3);
    assert_eq!(original.speed, 2.0);
}
