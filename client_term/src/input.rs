//! Keyboard input handling

use std::io::Write;
use std::time::{Duration, Instant};

use crossterm::event::{
    KeyCode, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use game_core::PaddleInput;

/// Without release events a key counts as held this long after its last
/// press or auto-repeat
pub const HOLD_WINDOW: Duration = Duration::from_millis(550);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleKey {
    Up,
    Down,
}

/// Map a key to a paddle direction
pub fn paddle_key(code: KeyCode) -> Option<PaddleKey> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(PaddleKey::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(PaddleKey::Down),
        _ => None,
    }
}

/// Ask the terminal to report key releases. On failure the game falls back
/// to the hold window; returns whether release events are on.
pub fn enable_release_events<W: Write>(out: &mut W) -> bool {
    match execute!(
        out,
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
    ) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "key release events unavailable");
            false
        }
    }
}

pub fn disable_release_events<W: Write>(out: &mut W) {
    if let Err(e) = execute!(out, PopKeyboardEnhancementFlags) {
        tracing::warn!(error = %e, "failed to restore keyboard flags");
    }
}

/// Up/down key state sampled once per frame.
///
/// Terminals that report key releases give exact state. Others only send
/// presses and repeats, so a key is considered held for [`HOLD_WINDOW`] and
/// pressing one direction drops the other.
#[derive(Debug, Clone)]
pub struct KeyState {
    up: Option<Instant>,
    down: Option<Instant>,
    release_events: bool,
}

impl KeyState {
    pub fn new(release_events: bool) -> Self {
        Self {
            up: None,
            down: None,
            release_events,
        }
    }

    pub fn press(&mut self, key: PaddleKey, now: Instant) {
        match key {
            PaddleKey::Up => {
                self.up = Some(now);
                if !self.release_events {
                    self.down = None;
                }
            }
            PaddleKey::Down => {
                self.down = Some(now);
                if !self.release_events {
                    self.up = None;
                }
            }
        }
    }

    pub fn release(&mut self, key: PaddleKey) {
        match key {
            PaddleKey::Up => self.up = None,
            PaddleKey::Down => self.down = None,
        }
    }

    pub fn clear(&mut self) {
        self.up = None;
        self.down = None;
    }

    pub fn sample(&self, now: Instant) -> PaddleInput {
        PaddleInput::new(self.held(self.up, now), self.held(self.down, now))
    }

    fn held(&self, pressed_at: Option<Instant>, now: Instant) -> bool {
        match pressed_at {
            Some(at) => self.release_events || now.saturating_duration_since(at) < HOLD_WINDOW,
            None => false,
        }
    }
}
