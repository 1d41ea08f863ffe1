use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::{ChallengeState, Session, Snapshot};

use crate::flow::{Flow, FlowAction, FlowState};
use crate::input::{paddle_key, KeyState};

/// Glue between the key stream, the screen flow and the simulation
pub struct App {
    session: Session,
    flow: Flow,
    keys: KeyState,
    free_play: bool,
    should_quit: bool,
}

impl App {
    pub fn new(session: Session, free_play: bool, release_events: bool) -> Self {
        Self {
            session,
            flow: Flow::new(),
            keys: KeyState::new(release_events),
            free_play,
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind == KeyEventKind::Release {
            if let Some(paddle) = paddle_key(key.code) {
                self.keys.release(paddle);
            }
            return;
        }

        let ctrl_c = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl_c || key.code == KeyCode::Char('q') {
            tracing::info!(state = ?self.flow.state(), "quit requested");
            self.should_quit = true;
            return;
        }

        match self.flow.state() {
            FlowState::Title => {
                if is_confirm(key.code) {
                    self.begin();
                }
            }
            FlowState::Briefing => {
                if is_confirm(key.code) {
                    self.flow.transition(FlowAction::Accept);
                    self.session.start_challenge();
                }
            }
            FlowState::Playing => {
                if self.session.challenge_state() == ChallengeState::OvershootPending {
                    self.resolve_overshoot(key.code);
                } else if let Some(paddle) = paddle_key(key.code) {
                    self.keys.press(paddle, now);
                }
            }
            FlowState::Victory => {
                if is_confirm(key.code) {
                    self.should_quit = true;
                }
            }
        }
    }

    fn begin(&mut self) {
        if self.free_play {
            self.flow.transition(FlowAction::FreePlay);
        } else {
            self.flow.transition(FlowAction::Begin);
        }
    }

    fn resolve_overshoot(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                self.session.retry();
                self.keys.clear();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                if self.session.decline().success() {
                    self.flow.transition(FlowAction::Decline);
                    self.keys.clear();
                }
            }
            _ => {}
        }
    }

    /// One frame of simulation; a no-op outside play or while paused
    pub fn tick(&mut self, dt: f32, now: Instant) {
        if !self.flow.is_playing() {
            return;
        }

        let input = self.keys.sample(now);
        self.session.step(input, dt);

        if self.session.challenge_state() == ChallengeState::Won
            && self.flow.transition(FlowAction::Win).is_some()
        {
            let score = self.session.score();
            tracing::info!(
                player = score.player,
                opponent = score.opponent,
                "challenge won"
            );
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn flow_state(&self) -> FlowState {
        self.flow.state()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    pub fn is_free_play(&self) -> bool {
        self.free_play
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

fn is_confirm(code: KeyCode) -> bool {
    matches!(code, KeyCode::Enter | KeyCode::Char(' '))
}
