pub mod types;
pub mod grid;
pub mod entities;
pub mod systems;
pub mod clock;
pub mod board;
pub mod state;

#[cfg(test)]
mod tests;

pub use board::GameBoard;
pub use clock::{format_timer, GameClock, TickOutcome};
pub use state::{EndReason, GameEvent, GamePhase, GameSnapshot, GameState};
pub use types::*;
