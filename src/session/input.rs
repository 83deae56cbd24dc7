//! Terminal command parsing.
//!
//! Directions accept `w/a/s/d`, the words `up/down/left/right` and ANSI arrow
//! escapes. Anything unrecognised is rejected instead of ignored.

use crate::error::{GameError, Result};
use crate::game::types::{Direction, PlayerInput};

/// Parse one line typed during a session.
pub fn parse_input(line: &str) -> Result<PlayerInput> {
    // A bare space is the special action key; check before trimming it away.
    if line.trim_end_matches(['\r', '\n']) == " " {
        return Ok(PlayerInput::SpecialAction);
    }
    match line.trim().to_ascii_lowercase().as_str() {
        "f" | "space" | "fire" => Ok(PlayerInput::SpecialAction),
        "q" | "quit" | "menu" => Ok(PlayerInput::Quit),
        other => other.parse::<Direction>().map(PlayerInput::Move),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Start,
    Exit,
}

/// Parse one line typed on the menu. An empty line starts a session.
pub fn parse_menu_choice(line: &str) -> Result<MenuChoice> {
    match line.trim().to_ascii_lowercase().as_str() {
        "" | "s" | "start" => Ok(MenuChoice::Start),
        "q" | "exit" | "quit" => Ok(MenuChoice::Exit),
        other => Err(GameError::UnknownMenuChoice(other.to_string())),
    }
}
