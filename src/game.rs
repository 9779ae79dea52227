//! Session driver: owns the state and the best-score store.

use log::info;
use rand::Rng;

use crate::compute::{init_state, restart, tick};
use crate::config::GameConfig;
use crate::entities::{GameStatus, SessionState};
use crate::error::GameResult;
use crate::highscore::ScoreStore;
use crate::input::{Command, InputState};

pub struct Game<S: ScoreStore> {
    state: SessionState,
    store: S,
}

impl<S: ScoreStore> Game<S> {
    /// Read the stored best score and start playing.
    pub fn new(config: GameConfig, store: S, rng: &mut impl Rng) -> Self {
        let best = store.load();
        Self {
            state: init_state(config, best, rng),
            store,
        }
    }

    /// Resume from an existing state, e.g. a scripted scenario.
    pub fn from_state(state: SessionState, store: S) -> Self {
        Self { state, store }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// One frame. The best score is written here, once, when the run that
    /// just ended beat it.
    pub fn step(&mut self, input: &InputState, rng: &mut impl Rng) -> GameResult<()> {
        let was_playing = self.state.status == GameStatus::Playing;
        let best_before = self.state.best_score;

        self.state = tick(&self.state, input, rng);

        let ended = was_playing && self.state.status == GameStatus::GameOver;
        if ended && self.state.best_score > best_before {
            self.store.save(self.state.best_score)?;
        }
        Ok(())
    }

    /// Apply a discrete command. Returns `false` when the program should exit.
    pub fn handle(&mut self, command: Command, rng: &mut impl Rng) -> bool {
        match command {
            Command::Quit => false,
            Command::Restart => {
                if self.state.status == GameStatus::GameOver {
                    info!("restart requested");
                    self.state = restart(&self.state, rng);
                }
                true
            }
        }
    }
}
