//! Countdown and urgency state.
//!
//! `GameClock` does not schedule anything itself. The session calls [`GameClock::tick`]
//! once per second and gets back what happened; ticks delivered after [`GameClock::stop`]
//! are ignored, so a tick already queued when the session ends changes nothing.

use log::debug;
use serde::{Serialize, Deserialize};

use crate::config::game::{INITIAL_SECONDS, LOW_TIME_THRESHOLD};
use crate::game::systems::next_urgency;
use crate::game::types::UrgencyState;

/// What a single tick produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// The clock is not running; nothing changed.
    Stopped,
    /// Countdown decremented and still positive.
    Ticked {
        remaining: i32,
        low_time: bool,
        urgency_changed: Option<UrgencyState>,
    },
    /// Countdown reached zero or below. The clock stopped itself.
    Expired,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameClock {
    remaining: i32,
    urgency: UrgencyState,
    running: bool,
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl GameClock {
    pub fn new() -> Self {
        Self::with_seconds(INITIAL_SECONDS)
    }

    pub fn with_seconds(remaining: i32) -> Self {
        Self {
            remaining,
            urgency: UrgencyState::Calm,
            running: false,
        }
    }

    /// Arm the clock so subsequent ticks count down.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Halt the countdown. Idempotent.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining_seconds(&self) -> i32 {
        self.remaining
    }

    pub fn urgency(&self) -> UrgencyState {
        self.urgency
    }

    /// Add `delta` (possibly negative) and return the new value. No clamping:
    /// callers treat anything at or below zero as terminal.
    pub fn adjust_seconds(&mut self, delta: i32) -> i32 {
        self.remaining += delta;
        self.remaining
    }

    /// Overwrite the countdown, used by the forced-loss branch.
    pub fn set_seconds(&mut self, remaining: i32) {
        self.remaining = remaining;
    }

    /// Force the urgency state, bypassing the transition rules.
    pub fn force_urgency(&mut self, state: UrgencyState) {
        self.urgency = state;
    }

    pub fn is_low_time(&self) -> bool {
        self.remaining <= LOW_TIME_THRESHOLD
    }

    /// One countdown step: decrement, then either expire or re-derive urgency.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Stopped;
        }

        self.remaining -= 1;
        if self.remaining <= 0 {
            self.running = false;
            return TickOutcome::Expired;
        }

        let urgency_changed = next_urgency(self.remaining, self.urgency);
        if let Some(state) = urgency_changed {
            debug!("[GameClock] urgency {:?} -> {:?} at {}s", self.urgency, state, self.remaining);
            self.urgency = state;
        }

        TickOutcome::Ticked {
            remaining: self.remaining,
            low_time: self.is_low_time(),
            urgency_changed,
        }
    }
}

/// Format seconds as `MM:SS`. Negative values show as `00:00`.
pub fn format_timer(seconds: i32) -> String {
    let seconds = seconds.max(0);
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
