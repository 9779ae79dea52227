//! Polled input.
//!
//! The simulation only ever sees an [`InputState`] snapshot plus the odd
//! discrete [`Command`]. [`KeyTracker`] turns a terminal's event stream into
//! those snapshots.

use std::collections::HashMap;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

/// Held-key state for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

/// One-shot actions, acted on once per press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Start over; only honoured after a game over.
    Restart,
    Quit,
}

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames. Covers terminals that don't emit key-release events:
/// OS key-repeat runs at ≥ 15 Hz, so at 60 frames/s a 6-frame window
/// (100 ms) is refreshed before it expires.
pub const HOLD_WINDOW: u64 = 6;

/// Records the frame number of the last press/repeat event for every key.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (kitty protocol): proper
///   `Press` / `Repeat` / `Release` events, keys drop on release.
/// * **Classic terminals**: only `Press` events. Keys expire after
///   [`HOLD_WINDOW`] frames of silence.
#[derive(Debug, Default)]
pub struct KeyTracker {
    key_frame: HashMap<KeyCode, u64>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one terminal event seen during `frame`.
    pub fn handle(&mut self, event: &Event, frame: u64) -> Option<Command> {
        match event {
            Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) => match kind {
                KeyEventKind::Press => {
                    self.key_frame.insert(normalize(*code), frame);
                    command_for(*code, *modifiers)
                }
                KeyEventKind::Repeat => {
                    self.key_frame.insert(normalize(*code), frame);
                    None
                }
                KeyEventKind::Release => {
                    self.key_frame.remove(&normalize(*code));
                    None
                }
            },
            // Any click or tap counts as the restart pointer press.
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(_),
                ..
            }) => Some(Command::Restart),
            _ => None,
        }
    }

    fn is_held(&self, key: KeyCode, frame: u64) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    /// Which controls are live at `frame`. Arrows and WASD are equivalent.
    pub fn snapshot(&self, frame: u64) -> InputState {
        let held = |arrow: KeyCode, letter: char| {
            self.is_held(arrow, frame) || self.is_held(KeyCode::Char(letter), frame)
        };
        InputState {
            left: held(KeyCode::Left, 'a'),
            right: held(KeyCode::Right, 'd'),
            up: held(KeyCode::Up, 'w'),
            down: held(KeyCode::Down, 's'),
            fire: self.is_held(KeyCode::Char(' '), frame),
        }
    }
}

/// Fold upper-case letters onto lower-case so Shift doesn't break movement.
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

fn command_for(code: KeyCode, modifiers: KeyModifiers) -> Option<Command> {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        _ => None,
    }
}
