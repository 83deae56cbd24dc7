// src/session/mod.rs

//! Session layer root module.
//!
//! This module organizes everything that drives the game core for one player:
//! - The session actor that owns a `GameState` and its two periodic tasks
//! - The session manager that hands out fresh sessions
//! - The front end trait the session reports to, and its terminal implementation
//! - Parsing of terminal commands

pub mod frontend;
pub mod input;
pub mod messages;
pub mod server;
pub mod terminal;


pub use frontend::{dispatch, Frontend, NullFrontend};
pub use input::{parse_input, parse_menu_choice, MenuChoice};
pub use messages::{ActiveSessions, Command, CooldownStep, CreateGame, GetSnapshot, Tick};
pub use server::{GameSession, GameSessionManager};
pub use terminal::{SessionSummary, TerminalFrontend};
