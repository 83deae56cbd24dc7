//! Player movement system.
//!
//! This module computes the candidate cell of a move on the grid.

use crate::game::types::{Direction, Position};

/// Cell reached by moving one step from `pos` in `direction`.
/// Returns `None` when the step would leave the grid.
pub fn step_position(pos: Position, direction: Direction) -> Option<Position> {
    let (row, col) = (pos.row(), pos.col());

    let (row, col) = match direction {
        Direction::Up => (row.checked_sub(1)?, col),
        Direction::Down => (row + 1, col),
        Direction::Left => (row, col.checked_sub(1)?),
        Direction::Right => (row, col + 1),
    };

    Position::new(row, col).ok()
}
