use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::config::game::GRID_SIZE;
use crate::error::{GameError, Result};

/// Grid coordinate. Always inside `[0, GRID_SIZE)` on both axes: the only ways in
/// are `Position::new` and deserialization, and both check the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: usize,
    col: usize,
}

/// Unchecked wire shape of a `Position`.
#[derive(Deserialize)]
struct RawPosition {
    row: usize,
    col: usize,
}

impl TryFrom<RawPosition> for Position {
    type Error = GameError;

    fn try_from(raw: RawPosition) -> Result<Self> {
        Position::new(raw.row, raw.col)
    }
}

impl Position {
    /// Build a position, rejecting coordinates outside the grid.
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Ok(Self { row, col })
        } else {
            Err(GameError::OutOfBounds { row, col })
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub(crate) const fn from_const((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "w" | "\x1b[a" => Ok(Direction::Up),
            "down" | "s" | "\x1b[b" => Ok(Direction::Down),
            "left" | "a" | "\x1b[d" => Ok(Direction::Left),
            "right" | "d" | "\x1b[c" => Ok(Direction::Right),
            other => Err(GameError::InvalidDirection(other.to_string())),
        }
    }
}

/// Escalating urgency classification driven by the countdown.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UrgencyState {
    #[default]
    Calm = 0,
    Warning = 1,
    Panic = 2,
}

/// Fire-and-forget sound requests sent to the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundKind {
    Collision,
    Pickup,
    SpecialAction,
}

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockReason {
    OutOfBounds,
    Obstacle,
}

/// Result of a single move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Player position after the attempt (unchanged when blocked).
    pub position: Position,
    /// Set when the move was rejected; the timer penalty was applied exactly once.
    pub blocked: Option<BlockReason>,
    pub pickup_collected: bool,
    pub won: bool,
}

impl MoveOutcome {
    pub fn penalty_applied(&self) -> bool {
        self.blocked.is_some()
    }
}

/// Result of a special action request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// Cooldown still running; nothing changed.
    OnCooldown,
    /// Cooldown started but the countdown had already run out.
    TooLate,
    /// Roll succeeded, countdown extended. Carries the new remaining seconds.
    Extended { remaining: i32 },
    /// Roll failed, countdown forced to zero.
    ForcedLoss,
}

/// The only commands that affect a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerInput {
    Move(Direction),
    SpecialAction,
    /// Leave the session for the menu without finishing it.
    Quit,
}
