use log::{info, warn};
use serde::{Serialize, Deserialize};

use crate::game::board::GameBoard;
use crate::game::clock::{GameClock, TickOutcome};
use crate::game::grid::Grid;
use crate::game::types::{
    ActionOutcome, BlockReason, PlayerInput, Position, SoundKind, UrgencyState,
};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    Won,
    TimeExpired,
    ForcedLoss,
    /// Player left for the menu.
    Quit,
}

impl EndReason {
    pub fn played(&self) -> bool {
        !matches!(self, EndReason::Quit)
    }

    pub fn won(&self) -> bool {
        matches!(self, EndReason::Won)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Built but the clock has not been started.
    Ready,
    Playing,
    Ended(EndReason),
}

/// Everything the core reports to the front end, in the order it happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    SessionStarted { grid: Grid, position: Position, remaining: i32 },
    PositionChanged(Position),
    UrgencyChanged(UrgencyState),
    TimerTick { remaining: i32, low_time: bool },
    CooldownProgress(f64),
    Sound(SoundKind),
    SessionEnded { played: bool, won: bool },
}

/// Serializable view of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub position: Position,
    pub remaining: i32,
    pub urgency: UrgencyState,
    pub on_cooldown: bool,
    pub cooldown_progress: f64,
}

/// One session's model: the board and the clock it drives, plus the session phase.
///
/// All mutation goes through `&mut self`, so a tick and an action never interleave.
/// Once the phase is `Ended` every entry point is a no-op.
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: GameBoard,
    pub clock: GameClock,
    phase: GamePhase,
}

impl GameState {
    /// A new session with a random layout.
    pub fn new() -> Self {
        Self::from_parts(GameBoard::new(), GameClock::new())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_parts(GameBoard::with_seed(seed), GameClock::new())
    }

    pub fn from_parts(board: GameBoard, clock: GameClock) -> Self {
        Self {
            board,
            clock,
            phase: GamePhase::Ready,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn is_ended(&self) -> bool {
        matches!(self.phase, GamePhase::Ended(_))
    }

    /// Start the countdown. Only the first call has an effect.
    pub fn start(&mut self) -> Vec<GameEvent> {
        if self.phase != GamePhase::Ready {
            return Vec::new();
        }
        self.phase = GamePhase::Playing;
        self.clock.start();
        vec![GameEvent::SessionStarted {
            grid: self.board.grid().clone(),
            position: self.board.position(),
            remaining: self.clock.remaining_seconds(),
        }]
    }

    pub fn apply_input(&mut self, input: PlayerInput) -> Vec<GameEvent> {
        if !self.is_playing() {
            warn!("[GameState] input {:?} ignored in phase {:?}", input, self.phase);
            return Vec::new();
        }

        let mut events = Vec::new();
        match input {
            PlayerInput::Move(direction) => {
                let outcome = self.board.move_player(direction, &mut self.clock);
                match outcome.blocked {
                    Some(BlockReason::Obstacle) => events.push(GameEvent::Sound(SoundKind::Collision)),
                    Some(BlockReason::OutOfBounds) => {}
                    None => {
                        events.push(GameEvent::PositionChanged(outcome.position));
                        if outcome.pickup_collected {
                            events.push(GameEvent::Sound(SoundKind::Pickup));
                        }
                        if outcome.won {
                            events.push(self.end(EndReason::Won));
                        }
                    }
                }
            }
            PlayerInput::SpecialAction => {
                let outcome = self.board.use_special_action(&mut self.clock);
                if outcome != ActionOutcome::OnCooldown {
                    events.push(GameEvent::Sound(SoundKind::SpecialAction));
                }
                if outcome == ActionOutcome::ForcedLoss {
                    events.push(self.end(EndReason::ForcedLoss));
                }
            }
            PlayerInput::Quit => events.push(self.end(EndReason::Quit)),
        }
        events
    }

    /// One countdown second.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        if !self.is_playing() {
            return Vec::new();
        }

        match self.clock.tick() {
            TickOutcome::Stopped => Vec::new(),
            TickOutcome::Expired => vec![self.end(EndReason::TimeExpired)],
            TickOutcome::Ticked { remaining, low_time, urgency_changed } => {
                let mut events = vec![GameEvent::TimerTick { remaining, low_time }];
                if let Some(state) = urgency_changed {
                    events.push(GameEvent::UrgencyChanged(state));
                }
                events
            }
        }
    }

    /// One half-second cooldown step.
    pub fn step_cooldown(&mut self) -> Vec<GameEvent> {
        if !self.is_playing() {
            return Vec::new();
        }
        self.board
            .step_cooldown()
            .map(|step| vec![GameEvent::CooldownProgress(step.progress)])
            .unwrap_or_default()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            position: self.board.position(),
            remaining: self.clock.remaining_seconds(),
            urgency: self.clock.urgency(),
            on_cooldown: self.board.is_on_cooldown(),
            cooldown_progress: self.board.cooldown_progress(),
        }
    }

    fn end(&mut self, reason: EndReason) -> GameEvent {
        self.clock.stop();
        self.phase = GamePhase::Ended(reason);
        info!(
            "[GameState] session ended: {:?} with {}s left at {}",
            reason,
            self.clock.remaining_seconds(),
            self.board.position()
        );
        GameEvent::SessionEnded { played: reason.played(), won: reason.won() }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
