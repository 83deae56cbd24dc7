//! Urgency transition system.
//!
//! Hysteresis over the remaining seconds: the same countdown value can map to
//! different states depending on the current one. Rules are checked in order and
//! the first match wins.

use crate::config::game::{CALM_RECOVERY_SECS, WARNING_SECS, RECOVERY_BAND_SECS, PANIC_SECS};
use crate::game::types::UrgencyState;

/// Next urgency state, or `None` when the current one holds.
pub fn next_urgency(remaining: i32, current: UrgencyState) -> Option<UrgencyState> {
    if remaining >= CALM_RECOVERY_SECS && current > UrgencyState::Calm {
        Some(UrgencyState::Calm)
    } else if (remaining <= WARNING_SECS && current == UrgencyState::Calm)
        || (remaining > PANIC_SECS && remaining <= RECOVERY_BAND_SECS && current == UrgencyState::Panic)
    {
        // Panic only eases back inside (5, 10]; calm escalates anywhere below 30.
        Some(UrgencyState::Warning)
    } else if remaining <= PANIC_SECS && current == UrgencyState::Warning {
        Some(UrgencyState::Panic)
    } else {
        None
    }
}
