//! Challenge State Machine
//!
//! The challenge asks for an exact final score. Both counters must land on
//! their targets at the same time; running past either target pauses play
//! until the caller retries or declines.

use crate::resources::{Score, ScoreEvent, ScoreListener};

/// Challenge states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeState {
    Idle,
    Active,
    Won,
    OvershootPending,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeAction {
    Start,
    ReachTarget,
    Overshoot,
    Retry,
    Decline,
}

/// Result of a state transition
#[derive(Debug, Clone)]
pub struct TransitionResult {
    success: bool,
    from_state: ChallengeState,
    to_state: ChallengeState,
    action: ChallengeAction,
}

impl TransitionResult {
    pub fn success(&self) -> bool {
        self.success
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn from_state(&self) -> ChallengeState {
        self.from_state
    }

    pub fn to_state(&self) -> ChallengeState {
        self.to_state
    }

    pub fn action(&self) -> ChallengeAction {
        self.action
    }
}

/// Score the challenge asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Targets {
    pub player: u32,
    pub opponent: u32,
}

impl Targets {
    pub fn new(player: u32, opponent: u32) -> Self {
        Self { player, opponent }
    }

    /// Both counters sit exactly on their targets
    pub fn matched_by(&self, score: &Score) -> bool {
        score.player == self.player && score.opponent == self.opponent
    }

    /// Either counter ran past its target
    pub fn exceeded_by(&self, score: &Score) -> bool {
        score.player > self.player || score.opponent > self.opponent
    }
}

/// Challenge Finite State Machine
#[derive(Debug, Clone)]
pub struct Challenge {
    state: ChallengeState,
    targets: Targets,
}

impl Challenge {
    pub fn new(targets: Targets) -> Self {
        Self {
            state: ChallengeState::Idle,
            targets,
        }
    }

    pub fn state(&self) -> ChallengeState {
        self.state
    }

    pub fn targets(&self) -> Targets {
        self.targets
    }

    pub fn can_transition(&self, action: ChallengeAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: ChallengeAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            tracing::info!(?from_state, ?next_state, ?action, "challenge transition");
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            tracing::warn!(?from_state, ?action, "rejected challenge transition");
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    fn get_next_state(&self, action: ChallengeAction) -> Option<ChallengeState> {
        match (self.state, action) {
            // From Idle, or again after a win
            (ChallengeState::Idle, ChallengeAction::Start) => Some(ChallengeState::Active),
            (ChallengeState::Won, ChallengeAction::Start) => Some(ChallengeState::Active),

            // From Active
            (ChallengeState::Active, ChallengeAction::ReachTarget) => Some(ChallengeState::Won),
            (ChallengeState::Active, ChallengeAction::Overshoot) => {
                Some(ChallengeState::OvershootPending)
            }

            // From OvershootPending
            (ChallengeState::OvershootPending, ChallengeAction::Retry) => {
                Some(ChallengeState::Active)
            }
            (ChallengeState::OvershootPending, ChallengeAction::Decline) => {
                Some(ChallengeState::Idle)
            }

            // Invalid transition
            _ => None,
        }
    }

    /// Judge a freshly updated score. Only an active challenge reacts.
    pub fn judge(&mut self, score: &Score) -> ChallengeState {
        if self.state != ChallengeState::Active {
            return self.state;
        }
        if self.targets.matched_by(score) {
            self.transition(ChallengeAction::ReachTarget);
        } else if self.targets.exceeded_by(score) {
            self.transition(ChallengeAction::Overshoot);
        }
        self.state
    }

    /// Play is frozen until the caller resolves the state
    pub fn is_paused(&self) -> bool {
        matches!(
            self.state,
            ChallengeState::OvershootPending | ChallengeState::Won
        )
    }

    pub fn is_won(&self) -> bool {
        self.state == ChallengeState::Won
    }
}

/// Score counters plus the challenge judging them
#[derive(Debug, Clone)]
pub struct Scoreboard {
    score: Score,
    challenge: Challenge,
}

impl Scoreboard {
    pub fn new(targets: Targets) -> Self {
        Self {
            score: Score::new(),
            challenge: Challenge::new(targets),
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    /// Begin (or restart after a win) with the score zeroed
    pub fn start_challenge(&mut self) -> TransitionResult {
        let result = self.challenge.transition(ChallengeAction::Start);
        if result.success() {
            self.score.reset();
        }
        result
    }

    /// Resolve an overshoot by starting over from 0:0
    pub fn retry(&mut self) -> TransitionResult {
        let result = self.challenge.transition(ChallengeAction::Retry);
        if result.success() {
            self.score.reset();
        }
        result
    }

    /// Resolve an overshoot by leaving the challenge
    pub fn decline(&mut self) -> TransitionResult {
        self.challenge.transition(ChallengeAction::Decline)
    }
}

impl ScoreListener for Scoreboard {
    fn on_score(&mut self, event: ScoreEvent) {
        // The round is over once won
        if self.challenge.is_won() {
            tracing::debug!(?event, "score ignored after challenge win");
            return;
        }
        self.score.increment(event.side());
        tracing::info!(
            ?event,
            player = self.score.player,
            opponent = self.score.opponent,
            "point scored"
        );
        self.challenge.judge(&self.score);
    }
}
