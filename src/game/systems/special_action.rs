//! Special action roll.

use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::config::game::ACTION_SUCCESS_CHANCE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionRoll {
    Success,
    Failure,
}

/// Draw the outcome of one special action fire.
pub fn roll_special_action<R: Rng>(rng: &mut R) -> ActionRoll {
    if rng.random::<f64>() < ACTION_SUCCESS_CHANCE {
        ActionRoll::Success
    } else {
        ActionRoll::Failure
    }
}
