use serde::{Serialize, Deserialize};

use crate::config::game::SPAWN;
use crate::game::entities::CooldownState;
use crate::game::types::Position;

/// The player token. Urgency is tracked by the clock, see `GameClock`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Position,
    pub cooldown: CooldownState,
}

impl Player {
    /// A player standing on the spawn cell with no cooldown running.
    pub fn spawn() -> Self {
        Self {
            pos: Position::from_const(SPAWN),
            cooldown: CooldownState::new(),
        }
    }

    pub fn reset_position(&mut self) {
        self.pos = Position::from_const(SPAWN);
    }
}
