use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use space_shooter::constants::TICKS_PER_SECOND;
use space_shooter::display::TerminalCanvas;
use space_shooter::input::KeyTracker;
use space_shooter::render::draw_frame;
use space_shooter::{FileScoreStore, Game, GameConfig, ScoreStore};

#[derive(Parser, Debug)]
#[command(name = "space_shooter", about = "Arcade space shooter for the terminal")]
struct Cli {
    /// TOML file overriding gameplay tuning
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where the best score is kept [default: ~/.space_shooter_score.json]
    #[arg(long)]
    score_file: Option<PathBuf>,

    /// Log destination; the terminal itself is busy drawing
    #[arg(long, default_value = "space_shooter.log")]
    log_file: PathBuf,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Frames per second; the simulation advances one tick per frame
    #[arg(
        long,
        default_value_t = TICKS_PER_SECOND,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    fps: u32,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until a quit command arrives.
///
/// Input model: every pending event is drained into a [`KeyTracker`] at the
/// start of the frame, then one snapshot of held keys drives the tick. This
/// lets Space and the arrows be held together.
fn game_loop<W: Write, S: ScoreStore>(
    out: &mut W,
    game: &mut Game<S>,
    rx: &mpsc::Receiver<Event>,
    rng: &mut StdRng,
    frame_time: Duration,
) -> Result<()> {
    let mut tracker = KeyTracker::new();
    let (cols, rows) = terminal::size()?;
    let mut canvas = TerminalCanvas::new(cols, rows);
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(event) = rx.try_recv() {
            if let Some(command) = tracker.handle(&event, frame) {
                if !game.handle(command, rng) {
                    return Ok(());
                }
            }
        }

        let input = tracker.snapshot(frame);
        if let Err(e) = game.step(&input, rng) {
            warn!("could not persist best score: {e}");
        }

        let (cols, rows) = terminal::size()?;
        canvas.resize(cols, rows);
        draw_frame(&mut canvas, game.state());
        canvas.present(out)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let store = FileScoreStore::new(
        cli.score_file
            .clone()
            .unwrap_or_else(FileScoreStore::default_path),
    );
    let mut rng = match cli.seed {
        Some(seed) => {
            info!("using seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let frame_time = Duration::from_secs_f64(1.0 / cli.fps as f64);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let mut game = Game::new(config, store, &mut rng);
    let result = game_loop(&mut out, &mut game, &rx, &mut rng, frame_time);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("exiting with best score {}", game.state().best_score);
    result
}
