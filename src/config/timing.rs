/// Timing configuration constants.
/// 
/// Periods of the two scheduled tasks owned by a session: the countdown tick
/// and the special action cooldown progress.
use std::time::Duration;

/// Period of the countdown tick.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Length of the special action cooldown, in seconds.
pub const COOLDOWN_DURATION_SECS: f64 = 5.0;

/// Granularity of cooldown progress reports, in seconds.
pub const COOLDOWN_STEP_SECS: f64 = 0.5;

/// Period of the cooldown progress task.
pub const COOLDOWN_STEP_INTERVAL: Duration = Duration::from_millis(500);
