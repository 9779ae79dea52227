//! All game entity types. Pure data, no per-tick logic.
//!
//! Type-fixed attribute bundles (enemy stats, power-up colours) live in
//! lookup tables keyed by the kind enums.

use crate::config::GameConfig;
use crate::constants::*;

// ── Colour ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const CYAN: Rgb = Rgb::new(0, 255, 255);
}

// ── Axis-aligned boxes ────────────────────────────────────────────────────────

/// Anything with a top-left position and a size can take part in overlap tests.
pub trait Bounds {
    fn x(&self) -> f32;
    fn y(&self) -> f32;
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    fn center(&self) -> (f32, f32) {
        (self.x() + self.width() / 2.0, self.y() + self.height() / 2.0)
    }
}

/// A free-standing box, handy for tests and ad-hoc queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds for Aabb {
    fn x(&self) -> f32 {
        self.x
    }
    fn y(&self) -> f32 {
        self.y
    }
    fn width(&self) -> f32 {
        self.width
    }
    fn height(&self) -> f32 {
        self.height
    }
}

macro_rules! impl_bounds {
    ($ty:ty) => {
        impl Bounds for $ty {
            fn x(&self) -> f32 {
                self.x
            }
            fn y(&self) -> f32 {
                self.y
            }
            fn width(&self) -> f32 {
                self.width
            }
            fn height(&self) -> f32 {
                self.height
            }
        }
    };
}

// ── Enums ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyKind {
    Basic,
    /// Wobbles sideways around its spawn column.
    Fast,
    /// Takes three hits; shows a health bar.
    Heavy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    TripleShot,
    SpeedBoost,
    Shield,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

// ── Enemy attribute table ─────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemyStats {
    pub size: f32,
    pub speed: f32,
    pub health: u32,
    pub points: u32,
    pub color: Rgb,
}

const BASIC_STATS: EnemyStats = EnemyStats {
    size: 40.0,
    speed: 3.0,
    health: 1,
    points: 10,
    color: Rgb::new(0, 255, 0),
};

const FAST_STATS: EnemyStats = EnemyStats {
    size: 35.0,
    speed: 6.0,
    health: 1,
    points: 20,
    color: Rgb::new(255, 0, 0),
};

const HEAVY_STATS: EnemyStats = EnemyStats {
    size: 60.0,
    speed: 2.0,
    health: 3,
    points: 50,
    color: Rgb::new(150, 150, 150),
};

impl EnemyKind {
    pub fn stats(self) -> &'static EnemyStats {
        match self {
            EnemyKind::Basic => &BASIC_STATS,
            EnemyKind::Fast => &FAST_STATS,
            EnemyKind::Heavy => &HEAVY_STATS,
        }
    }
}

impl PowerUpKind {
    pub fn color(self) -> Rgb {
        match self {
            PowerUpKind::TripleShot => Rgb::new(0, 0, 255),
            PowerUpKind::SpeedBoost => Rgb::new(255, 255, 0),
            PowerUpKind::Shield => Rgb::new(0, 255, 0),
        }
    }

    /// Single glyph drawn in the middle of the capsule.
    pub fn symbol(self) -> &'static str {
        match self {
            PowerUpKind::TripleShot => "3",
            PowerUpKind::SpeedBoost => ">",
            PowerUpKind::Shield => "O",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PowerUpKind::TripleShot => "Triple Shot",
            PowerUpKind::SpeedBoost => "Speed Boost",
            PowerUpKind::Shield => "Shield",
        }
    }
}

// ── Player ship ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Current speed, `base_speed` or boosted.
    pub speed: f32,
    pub base_speed: f32,
    /// Remaining ticks per power-up; zero means inactive.
    pub triple_shot_ticks: u32,
    pub speed_boost_ticks: u32,
    pub shield_ticks: u32,
    /// Ticks since the last shot, saturating.
    pub ticks_since_shot: u32,
}

impl Ship {
    /// Fresh ship at the standard start position.
    pub fn new(config: &GameConfig) -> Self {
        Self::at(
            CANVAS_WIDTH / 2.0 - SHIP_WIDTH / 2.0,
            CANVAS_HEIGHT - SHIP_START_OFFSET_Y,
            config,
        )
    }

    pub fn at(x: f32, y: f32, config: &GameConfig) -> Self {
        Ship {
            x,
            y,
            width: SHIP_WIDTH,
            height: SHIP_HEIGHT,
            speed: config.ship_base_speed,
            base_speed: config.ship_base_speed,
            triple_shot_ticks: 0,
            speed_boost_ticks: 0,
            shield_ticks: 0,
            // ready to fire on the very first tick
            ticks_since_shot: config.shoot_cooldown,
        }
    }

    pub fn has_triple_shot(&self) -> bool {
        self.triple_shot_ticks > 0
    }

    pub fn has_speed_boost(&self) -> bool {
        self.speed_boost_ticks > 0
    }

    pub fn is_shielded(&self) -> bool {
        self.shield_ticks > 0
    }
}

impl_bounds!(Ship);

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: EnemyKind,
    pub health: u32,
    pub max_health: u32,
    pub speed: f32,
    pub points: u32,
    pub color: Rgb,
    /// Spawn column; fast enemies wobble around it.
    pub base_x: f32,
    /// Wobble phase in radians.
    pub angle: f32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, kind: EnemyKind) -> Self {
        let stats = kind.stats();
        Enemy {
            x,
            y,
            width: stats.size,
            height: stats.size,
            kind,
            health: stats.health,
            max_health: stats.health,
            speed: stats.speed,
            points: stats.points,
            color: stats.color,
            base_x: x,
            angle: 0.0,
        }
    }

    pub fn is_damaged(&self) -> bool {
        self.health < self.max_health
    }
}

impl_bounds!(Enemy);

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub vx: f32,
    pub vy: f32,
    /// Most recent positions, oldest first, at most `BULLET_TRAIL_LEN`.
    pub trail: Vec<(f32, f32)>,
}

impl Bullet {
    pub fn new(x: f32, y: f32, vx: f32, vy: f32) -> Self {
        Bullet {
            x,
            y,
            width: BULLET_WIDTH,
            height: BULLET_HEIGHT,
            vx,
            vy,
            trail: Vec::with_capacity(BULLET_TRAIL_LEN + 1),
        }
    }
}

impl_bounds!(Bullet);

// ── Power-up capsule ──────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: PowerUpKind,
    pub speed: f32,
    /// Render-only rotation.
    pub angle: f32,
    /// Render-only pulse phase.
    pub pulse_phase: f32,
}

impl PowerUp {
    pub fn new(x: f32, y: f32, kind: PowerUpKind, pulse_phase: f32) -> Self {
        PowerUp {
            x,
            y,
            width: POWER_UP_SIZE,
            height: POWER_UP_SIZE,
            kind,
            speed: POWER_UP_SPEED,
            angle: 0.0,
            pulse_phase,
        }
    }
}

impl_bounds!(PowerUp);

// ── Cosmetics ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub color: Rgb,
    pub life: u32,
    pub max_life: u32,
    pub size: f32,
}

impl Particle {
    pub fn is_dead(&self) -> bool {
        self.life == 0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub size: f32,
    pub brightness: u8,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything one play session owns. Cloneable so [`crate::compute::tick`]
/// can hand back a new copy without touching the original.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub ship: Ship,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub power_ups: Vec<PowerUp>,
    pub particles: Vec<Particle>,
    pub stars: Vec<Star>,
    pub status: GameStatus,
    pub score: u32,
    pub best_score: u32,
    /// Best score as it stood when this session began.
    pub previous_best: u32,
    /// Ticks spent in `Playing` this session.
    pub game_time: u64,
    /// Ticks since the program started; drives cosmetic flicker only.
    pub frame: u64,
    pub spawn_timer: u32,
    pub spawn_interval: u32,
    pub difficulty_timer: u32,
    pub config: GameConfig,
}
