/// Game configuration constants.
/// 
/// This module defines the main gameplay parameters such as grid dimensions,
/// the fixed spawn and goal cells, the countdown budget and its adjustments.
pub const GRID_SIZE: usize = 10; // The grid is always GRID_SIZE x GRID_SIZE.

/// Cell (row, col) where the player appears at the start of every session.
pub const SPAWN: (usize, usize) = (8, 0);

/// Cell (row, col) holding the goal. Never randomised.
pub const GOAL: (usize, usize) = (0, 5);

/// Countdown budget (in seconds) at the start of a session.
pub const INITIAL_SECONDS: i32 = 17;

/// Seconds removed when a move is rejected (wall or obstacle).
pub const OBSTACLE_PENALTY_SECS: i32 = 2;

/// Seconds added when the player arrives on a pickup.
pub const PICKUP_BONUS_SECS: i32 = 3;

/// Seconds added when the special action succeeds.
pub const ACTION_BONUS_SECS: i32 = 5;

/// Probability that a fired special action succeeds. Failure forces a loss.
pub const ACTION_SUCCESS_CHANCE: f64 = 0.8;

/// Per-cell probability of a rock obstacle.
pub const ROCK_CHANCE: f64 = 0.1;

/// Per-cell probability of a panel obstacle (drawn only if no rock was placed).
pub const PANEL_CHANCE: f64 = 0.1;

/// Per-cell probability of a pickup (drawn only if no obstacle was placed).
pub const PICKUP_CHANCE: f64 = 0.05;

/// Remaining seconds at or below which the timer is shown as low.
pub const LOW_TIME_THRESHOLD: i32 = 5;

/// Remaining seconds at or above which any urgency falls back to calm.
pub const CALM_RECOVERY_SECS: i32 = 15;

/// Remaining seconds at or below which calm escalates to warning.
pub const WARNING_SECS: i32 = 30;

/// Upper bound of the band in which panic eases back to warning.
pub const RECOVERY_BAND_SECS: i32 = 10;

/// Remaining seconds at or below which warning escalates to panic.
pub const PANIC_SECS: i32 = 5;
