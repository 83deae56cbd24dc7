//! Game entities module.
//!
//! This module organizes the player token and its special action cooldown.

pub mod player;
pub mod cooldown;

pub use player::*;
pub use cooldown::*;
