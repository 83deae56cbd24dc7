use actix::prelude::*;

use crate::error::Result;
use crate::game::state::GameSnapshot;
use crate::game::types::PlayerInput;
use super::frontend::Frontend;
use super::server::GameSession;

/// Player command for a running session.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "Result<()>")]
pub struct Command(pub PlayerInput);

/// One countdown second. Sent by the session's own timer, or by an external game loop.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct Tick;

/// One half-second cooldown step.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct CooldownStep;

#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "GameSnapshot")]
pub struct GetSnapshot;

/// Ask the manager for a brand-new session reporting to `frontend`.
#[derive(Message)]
#[rtype(result = "(uuid::Uuid, Addr<GameSession>)")]
pub struct CreateGame {
    pub frontend: Box<dyn Frontend>,
    /// Fixed seed for a reproducible layout and action rolls.
    pub seed: Option<u64>,
}

impl CreateGame {
    pub fn new(frontend: Box<dyn Frontend>) -> Self {
        Self { frontend, seed: None }
    }
}

/// Number of sessions still alive.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "usize")]
pub struct ActiveSessions;
