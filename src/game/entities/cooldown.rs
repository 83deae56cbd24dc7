//! Special action cooldown.
//!
//! The cooldown advances in fixed half-second steps reported by the session's
//! progress task. It never relies on wall-clock time.

use serde::{Serialize, Deserialize};

use crate::config::timing::{COOLDOWN_DURATION_SECS, COOLDOWN_STEP_SECS};

/// Result of advancing an active cooldown by one step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CooldownStep {
    /// `elapsed / duration`, reaches exactly 1.0 on the last step.
    pub progress: f64,
    /// The cooldown expired on this step and is inactive again.
    pub finished: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CooldownState {
    on_cooldown: bool,
    elapsed: f64,
}

impl CooldownState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.on_cooldown
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Fraction of the cooldown already elapsed, or 0.0 when inactive.
    pub fn progress(&self) -> f64 {
        if self.on_cooldown {
            self.elapsed / COOLDOWN_DURATION_SECS
        } else {
            0.0
        }
    }

    /// Arm the cooldown. Returns false (and changes nothing) if already armed.
    pub fn start(&mut self) -> bool {
        if self.on_cooldown {
            return false;
        }
        self.on_cooldown = true;
        self.elapsed = 0.0;
        true
    }

    /// Advance by one step. `None` when the cooldown is not running.
    pub fn step(&mut self) -> Option<CooldownStep> {
        if !self.on_cooldown {
            return None;
        }
        self.elapsed = (self.elapsed + COOLDOWN_STEP_SECS).min(COOLDOWN_DURATION_SECS);
        let progress = self.elapsed / COOLDOWN_DURATION_SECS;
        let finished = self.elapsed >= COOLDOWN_DURATION_SECS;
        if finished {
            self.on_cooldown = false;
            self.elapsed = 0.0;
        }
        Some(CooldownStep { progress, finished })
    }
}
