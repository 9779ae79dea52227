use rand::rngs::StdRng;
use rand::SeedableRng;

use space_shooter::compute::init_state;
use space_shooter::config::GameConfig;
use glam::Vec2;

use space_shooter::display::raster::PixelBuffer;
use space_shooter::display::TerminalCanvas;
use space_shooter::entities::*;
use space_shooter::render::{draw_frame, Canvas, TextAlign};

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn make_state() -> SessionState {
    init_state(GameConfig::default(), 0, &mut seeded_rng())
}

/// Canvas that remembers text and checks push/pop pairing.
#[derive(Default)]
struct RecordingCanvas {
    texts: Vec<(String, f32, f32, TextAlign)>,
    fill: Option<Rgb>,
    text_colors: Vec<Option<Rgb>>,
    depth: i32,
    unbalanced: bool,
    shapes: usize,
}

impl RecordingCanvas {
    fn has_text(&self, needle: &str) -> bool {
        self.texts.iter().any(|(t, ..)| t == needle)
    }
}

impl Canvas for RecordingCanvas {
    fn background(&mut self, _color: Rgb) {}
    fn push(&mut self) {
        self.depth += 1;
    }
    fn pop(&mut self) {
        self.depth -= 1;
        if self.depth < 0 {
            self.unbalanced = true;
        }
    }
    fn translate(&mut self, _x: f32, _y: f32) {}
    fn rotate(&mut self, _radians: f32) {}
    fn fill(&mut self, color: Rgb, _alpha: u8) {
        self.fill = Some(color);
    }
    fn no_fill(&mut self) {
        self.fill = None;
    }
    fn stroke(&mut self, _color: Rgb) {}
    fn no_stroke(&mut self) {}
    fn triangle(&mut self, _a: (f32, f32), _b: (f32, f32), _c: (f32, f32)) {
        self.shapes += 1;
    }
    fn rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _radius: f32) {
        self.shapes += 1;
    }
    fn ellipse(&mut self, _cx: f32, _cy: f32, _w: f32, _h: f32) {
        self.shapes += 1;
    }
    fn text(&mut self, text: &str, x: f32, y: f32, _size: f32, align: TextAlign) {
        self.texts.push((text.to_string(), x, y, align));
        self.text_colors.push(self.fill);
    }
}

// ── scene ─────────────────────────────────────────────────────────────────────

#[test]
fn playing_frame_shows_hud() {
    let mut state = make_state();
    state.score = 120;
    state.best_score = 300;
    state.game_time = 3900;

    let mut canvas = RecordingCanvas::default();
    draw_frame(&mut canvas, &state);

    assert!(canvas.has_text("Score: 120"));
    assert!(canvas.has_text("Best: 300"));
    assert!(canvas.has_text("Time: 1:05"));
    assert!(!canvas.has_text("GAME OVER"));

    let (_, x, y, align) = canvas
        .texts
        .iter()
        .find(|(t, ..)| t.starts_with("Time"))
        .unwrap();
    assert_eq!((*x, *y, *align), (780.0, 30.0, TextAlign::Right));
}

#[test]
fn active_power_ups_are_listed_in_their_colour() {
    let mut state = make_state();
    state.ship.shield_ticks = 900;
    state.ship.triple_shot_ticks = 61;

    let mut canvas = RecordingCanvas::default();
    draw_frame(&mut canvas, &state);

    let triple = canvas
        .texts
        .iter()
        .position(|(t, ..)| t == "Triple Shot: 2s")
        .unwrap();
    let shield = canvas
        .texts
        .iter()
        .position(|(t, ..)| t == "Shield: 15s")
        .unwrap();
    assert!(triple < shield);
    assert_eq!(canvas.texts[triple].2, 80.0);
    assert_eq!(canvas.texts[shield].2, 100.0);
    assert_eq!(canvas.text_colors[shield], Some(PowerUpKind::Shield.color()));
    assert!(!canvas.texts.iter().any(|(t, ..)| t.starts_with("Speed Boost")));
}

#[test]
fn game_over_with_new_record() {
    let mut state = make_state();
    state.status = GameStatus::GameOver;
    state.score = 250;
    state.best_score = 250;
    state.previous_best = 100;

    let mut canvas = RecordingCanvas::default();
    draw_frame(&mut canvas, &state);

    assert!(canvas.has_text("GAME OVER"));
    assert!(canvas.has_text("Final Score: 250"));
    assert!(canvas.has_text("NEW HIGH SCORE!"));
    assert!(canvas.has_text("Press R or click to restart"));
    assert!(!canvas.has_text("High Score: 250"));
}

#[test]
fn game_over_without_record_shows_best() {
    let mut state = make_state();
    state.status = GameStatus::GameOver;
    state.score = 40;
    state.best_score = 100;
    state.previous_best = 100;

    let mut canvas = RecordingCanvas::default();
    draw_frame(&mut canvas, &state);

    assert!(canvas.has_text("High Score: 100"));
    assert!(!canvas.has_text("NEW HIGH SCORE!"));
}

#[test]
fn every_push_has_a_pop() {
    let mut rng = seeded_rng();
    let mut state = make_state();
    state.ship.shield_ticks = 10;
    state.enemies.push(Enemy::new(100.0, 100.0, EnemyKind::Basic));
    state.enemies.push(Enemy::new(200.0, 100.0, EnemyKind::Fast));
    let mut heavy = Enemy::new(300.0, 100.0, EnemyKind::Heavy);
    heavy.health = 1;
    state.enemies.push(heavy);
    let mut bullet = Bullet::new(400.0, 300.0, 0.0, -10.0);
    for _ in 0..5 {
        space_shooter::compute::kinematics::advance_bullet(&mut bullet);
    }
    state.bullets.push(bullet);
    state.power_ups.push(PowerUp::new(500.0, 200.0, PowerUpKind::SpeedBoost, 1.0));
    space_shooter::compute::effects::create_hit_effect(&mut state.particles, 50.0, 50.0, &mut rng);

    let mut canvas = RecordingCanvas::default();
    draw_frame(&mut canvas, &state);

    assert_eq!(canvas.depth, 0);
    assert!(!canvas.unbalanced);
    assert!(canvas.shapes > state.stars.len());
}

// ── terminal canvas ───────────────────────────────────────────────────────────

#[test]
fn full_canvas_rect_covers_every_pixel() {
    let mut canvas = TerminalCanvas::new(80, 30);
    canvas.background(Rgb::new(0, 0, 0));
    canvas.no_stroke();
    canvas.fill(Rgb::WHITE, 255);
    canvas.rect(0.0, 0.0, 800.0, 600.0, 0.0);

    let pixels = canvas.pixels();
    assert_eq!((pixels.width(), pixels.height()), (80, 60));
    assert_eq!(pixels.get(0, 0), Rgb::WHITE);
    assert_eq!(pixels.get(79, 59), Rgb::WHITE);
    assert_eq!(pixels.get(40, 30), Rgb::WHITE);
}

#[test]
fn text_is_aligned_on_the_cell_grid() {
    let mut canvas = TerminalCanvas::new(80, 30);
    canvas.background(Rgb::new(0, 0, 0));
    canvas.fill(Rgb::WHITE, 255);
    canvas.text("HI", 400.0, 300.0, 24.0, TextAlign::Center);
    canvas.text("ab", 800.0, 0.0, 16.0, TextAlign::Right);
    canvas.text("L", 0.0, 0.0, 16.0, TextAlign::Left);

    assert_eq!(canvas.glyph(39, 15), Some('H'));
    assert_eq!(canvas.glyph(40, 15), Some('I'));
    assert_eq!(canvas.glyph(78, 0), Some('a'));
    assert_eq!(canvas.glyph(79, 0), Some('b'));
    assert_eq!(canvas.glyph(0, 0), Some('L'));

    canvas.background(Rgb::new(0, 0, 0));
    assert_eq!(canvas.glyph(39, 15), None);
}

#[test]
fn pop_restores_transform_and_pen() {
    let red = Rgb::new(255, 0, 0);
    let mut canvas = TerminalCanvas::new(80, 30);
    canvas.background(Rgb::new(0, 0, 0));
    canvas.no_stroke();
    canvas.fill(Rgb::WHITE, 255);

    canvas.push();
    canvas.translate(400.0, 300.0);
    canvas.fill(red, 255);
    canvas.rect(0.0, 0.0, 10.0, 10.0, 0.0);
    canvas.pop();

    canvas.rect(0.0, 0.0, 10.0, 10.0, 0.0);

    assert_eq!(canvas.pixels().get(40, 30), red);
    assert_eq!(canvas.pixels().get(0, 0), Rgb::WHITE);
}

#[test]
fn present_emits_half_blocks() {
    let mut canvas = TerminalCanvas::new(20, 5);
    canvas.background(Rgb::new(5, 5, 15));
    let mut out: Vec<u8> = Vec::new();
    canvas.present(&mut out).unwrap();

    let text = String::from_utf8_lossy(&out);
    assert_eq!(text.matches('▀').count(), 100);
}

#[test]
fn resize_follows_terminal() {
    let mut canvas = TerminalCanvas::new(20, 5);
    canvas.resize(40, 10);
    assert_eq!(canvas.pixels().width(), 40);
    assert_eq!(canvas.pixels().height(), 20);
}

// ── raster ────────────────────────────────────────────────────────────────────

#[test]
fn tiny_shape_still_lights_a_pixel() {
    let mut buf = PixelBuffer::new(10, 10);
    buf.fill_convex(
        &[Vec2::new(3.1, 3.1), Vec2::new(3.3, 3.1), Vec2::new(3.2, 3.3)],
        Rgb::YELLOW,
        255,
    );
    assert_eq!(buf.get(3, 3), Rgb::YELLOW);
}

#[test]
fn blend_mixes_with_alpha() {
    let mut buf = PixelBuffer::new(2, 2);
    buf.clear(Rgb::new(0, 0, 0));
    buf.blend(0, 0, Rgb::new(255, 255, 255), 0);
    assert_eq!(buf.get(0, 0), Rgb::new(0, 0, 0));

    buf.blend(1, 1, Rgb::new(255, 255, 255), 255);
    assert_eq!(buf.get(1, 1), Rgb::new(255, 255, 255));

    // Out of range is ignored
    buf.blend(-1, 5, Rgb::WHITE, 255);
}

#[test]
fn line_lights_both_endpoints() {
    let mut buf = PixelBuffer::new(10, 10);
    buf.draw_line(Vec2::new(1.0, 1.0), Vec2::new(8.0, 5.0), Rgb::CYAN);
    assert_eq!(buf.get(1, 1), Rgb::CYAN);
    assert_eq!(buf.get(8, 5), Rgb::CYAN);
}

#[test]
fn rotation_turns_clockwise_about_the_translated_origin() {
    let mut canvas = TerminalCanvas::new(80, 30);
    canvas.background(Rgb::new(0, 0, 0));
    canvas.no_stroke();
    canvas.fill(Rgb::WHITE, 255);

    // A tall bar hanging below the origin ends up pointing left
    canvas.push();
    canvas.translate(400.0, 300.0);
    canvas.rotate(std::f32::consts::FRAC_PI_2);
    canvas.rect(0.0, 0.0, 10.0, 100.0, 0.0);
    canvas.pop();

    assert_eq!(canvas.pixels().get(35, 30), Rgb::WHITE);
    assert_eq!(canvas.pixels().get(40, 35), Rgb::new(0, 0, 0));
    assert_eq!(canvas.pixels().get(45, 30), Rgb::new(0, 0, 0));
}
