//! Single-screen arcade space shooter.
//!
//! Core modules:
//! - `compute`: the simulation (kinematics, controller, collisions, director)
//! - `entities`: plain data for everything on screen
//! - `game`: session driver that persists the best score
//! - `render`: drawing-backend interface and per-entity render calls
//! - `display`: terminal drawing backend
//! - `input`, `hud`, `config`, `highscore`, `error`: the edges

pub mod compute;
pub mod config;
pub mod constants;
pub mod display;
pub mod entities;
pub mod error;
pub mod game;
pub mod highscore;
pub mod hud;
pub mod input;
pub mod render;

pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use game::Game;
pub use highscore::{FileScoreStore, MemoryScoreStore, ScoreStore};
pub use input::{Command, InputState};
