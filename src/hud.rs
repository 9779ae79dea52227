//! On-screen text derived from session state. Nothing here is stored.

use crate::constants::TICKS_PER_SECOND;
use crate::entities::{PowerUpKind, SessionState, Ship};

/// Whole seconds left on a power-up timer, rounded up.
pub fn seconds_left(ticks: u32) -> u32 {
    ticks.div_ceil(TICKS_PER_SECOND)
}

/// Elapsed play time as `m:ss`.
pub fn format_clock(game_time: u64) -> String {
    let tps = TICKS_PER_SECOND as u64;
    let minutes = game_time / (tps * 60);
    let seconds = (game_time % (tps * 60)) / tps;
    format!("{}:{:02}", minutes, seconds)
}

pub fn score_line(score: u32) -> String {
    format!("Score: {}", score)
}

pub fn best_line(best: u32) -> String {
    format!("Best: {}", best)
}

pub fn time_line(game_time: u64) -> String {
    format!("Time: {}", format_clock(game_time))
}

/// One indicator per active power-up, in a fixed order.
pub fn power_up_lines(ship: &Ship) -> Vec<(PowerUpKind, String)> {
    [
        (PowerUpKind::TripleShot, ship.triple_shot_ticks),
        (PowerUpKind::SpeedBoost, ship.speed_boost_ticks),
        (PowerUpKind::Shield, ship.shield_ticks),
    ]
    .into_iter()
    .filter(|&(_, ticks)| ticks > 0)
    .map(|(kind, ticks)| (kind, format!("{}: {}s", kind.label(), seconds_left(ticks))))
    .collect()
}

/// The finished run set a new record: the score now equals the best and is
/// strictly above what the best was when the run began.
pub fn is_new_high_score(state: &SessionState) -> bool {
    state.score > 0 && state.score == state.best_score && state.score > state.previous_best
}
