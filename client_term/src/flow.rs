//! Screen flow
//!
//! Title, challenge briefing, play and the victory screen. Quitting is not a
//! state; the app stops its loop instead.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Title,
    Briefing,
    Playing,
    Victory,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowAction {
    Begin,
    Accept,
    FreePlay,
    Win,
    Decline,
}

#[derive(Debug, Clone)]
pub struct Flow {
    state: FlowState,
}

impl Flow {
    pub fn new() -> Self {
        Self {
            state: FlowState::Title,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn can_transition(&self, action: FlowAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Apply an action; returns the new state, or `None` if it was not valid
    pub fn transition(&mut self, action: FlowAction) -> Option<FlowState> {
        let next_state = self.get_next_state(action)?;
        tracing::debug!(from = ?self.state, to = ?next_state, ?action, "flow transition");
        self.state = next_state;
        Some(next_state)
    }

    fn get_next_state(&self, action: FlowAction) -> Option<FlowState> {
        match (self.state, action) {
            (FlowState::Title, FlowAction::Begin) => Some(FlowState::Briefing),
            (FlowState::Title, FlowAction::FreePlay) => Some(FlowState::Playing),

            (FlowState::Briefing, FlowAction::Accept) => Some(FlowState::Playing),

            (FlowState::Playing, FlowAction::Win) => Some(FlowState::Victory),
            (FlowState::Playing, FlowAction::Decline) => Some(FlowState::Title),

            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == FlowState::Playing
    }
}

impl Default for Flow {
    fn default() -> Self {
        Self::new()
    }
}
