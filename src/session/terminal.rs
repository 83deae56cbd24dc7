//! Terminal front end.
//!
//! Redraws the board and a one-line HUD on every change, prints sound cues as text
//! and reports the end of the session to the menu loop over a channel.

use log::debug;
use serde::Serialize;
use tokio::sync::mpsc::UnboundedSender;

use crate::config::game::SPAWN;
use crate::game::clock::format_timer;
use crate::game::grid::Grid;
use crate::game::systems::render_grid;
use crate::game::types::{Position, SoundKind, UrgencyState};
use super::frontend::Frontend;

/// What the menu shows after a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub played: bool,
    pub won: bool,
}

impl SessionSummary {
    pub fn headline(&self) -> &'static str {
        match (self.played, self.won) {
            (true, true) => "You made it home in time!",
            (true, false) => "Too late... better luck next time.",
            (false, _) => "Back at the menu.",
        }
    }
}

pub struct TerminalFrontend {
    grid: Option<Grid>,
    position: Position,
    remaining: i32,
    low_time: bool,
    urgency: UrgencyState,
    cooldown: f64,
    ended: UnboundedSender<SessionSummary>,
}

impl TerminalFrontend {
    pub fn new(ended: UnboundedSender<SessionSummary>) -> Self {
        Self {
            grid: None,
            position: Position::from_const(SPAWN),
            remaining: 0,
            low_time: false,
            urgency: UrgencyState::Calm,
            cooldown: 1.0,
            ended,
        }
    }

    fn trace<T: Serialize>(&self, kind: &str, payload: &T) {
        match serde_json::to_string(payload) {
            Ok(json) => debug!("[Frontend] {} {}", kind, json),
            Err(e) => debug!("[Frontend] {} <unserializable: {}>", kind, e),
        }
    }

    fn hud(&self) -> String {
        let timer = format_timer(self.remaining);
        let timer = if self.low_time { format!("!! {} !!", timer) } else { timer };
        let face = match self.urgency {
            UrgencyState::Calm => "(^_^)",
            UrgencyState::Warning => "(o_o)",
            UrgencyState::Panic => "(>_<)",
        };
        let filled = (self.cooldown.clamp(0.0, 1.0) * 10.0).round() as usize;
        format!(
            "{}  {}  special [{}{}]",
            timer,
            face,
            "#".repeat(filled),
            "-".repeat(10 - filled)
        )
    }

    fn redraw(&self) {
        if let Some(grid) = &self.grid {
            println!("\n{}", render_grid(grid, self.position));
        }
        println!("{}", self.hud());
    }
}

impl Frontend for TerminalFrontend {
    fn on_session_started(&mut self, grid: &Grid, position: Position, remaining: i32) {
        self.trace("session_started", &(position, remaining));
        self.grid = Some(grid.clone());
        self.position = position;
        self.remaining = remaining;
        println!("Reach the house (HH) before the timer runs out. w/a/s/d + Enter to move, f to use the special action, q for the menu.");
        self.redraw();
    }

    fn on_position_changed(&mut self, position: Position) {
        self.trace("position_changed", &position);
        self.position = position;
        // Pickups are used up on arrival.
        if let Some(grid) = &mut self.grid {
            grid.consume_pickup(position);
        }
        self.redraw();
    }

    fn on_urgency_changed(&mut self, state: UrgencyState) {
        self.trace("urgency_changed", &state);
        self.urgency = state;
        println!("{}", self.hud());
    }

    fn on_timer_tick(&mut self, remaining: i32, low_time: bool) {
        self.trace("timer_tick", &(remaining, low_time));
        self.remaining = remaining;
        self.low_time = low_time;
        println!("{}", self.hud());
    }

    fn on_cooldown_progress(&mut self, fraction: f64) {
        self.trace("cooldown_progress", &fraction);
        self.cooldown = fraction;
    }

    fn on_session_ended(&mut self, played: bool, won: bool) {
        let summary = SessionSummary { played, won };
        self.trace("session_ended", &summary);
        if self.ended.send(summary).is_err() {
            debug!("[Frontend] menu loop gone, summary dropped");
        }
    }

    fn play_sound(&mut self, kind: SoundKind) {
        self.trace("sound", &kind);
        if kind == SoundKind::SpecialAction {
            self.cooldown = 0.0;
        }
        let cue = match kind {
            SoundKind::Collision => "*bonk*",
            SoundKind::Pickup => "*gulp* +3s",
            SoundKind::SpecialAction => "*pfffrt*",
        };
        println!("{}", cue);
    }
}
