//! Countdown grid game.
//!
//! The player walks from the spawn cell to the house before a short countdown runs
//! out. Bumping into obstacles costs time, pickups give some back, and a special
//! action on a cooldown either buys more time or ends the run on the spot.
//!
//! - [`game`]: the deterministic core (board, clock, urgency, cooldown).
//! - [`session`]: the actor that schedules ticks and relays events to a front end.

pub mod config;
pub mod error;
pub mod game;
pub mod session;

pub use error::{GameError, Result};
