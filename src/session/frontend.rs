//! Collaborator interface implemented by whatever draws and plays the game.
//!
//! Every callback defaults to a no-op; the core never depends on a callback
//! doing anything. Callbacks run on the session's execution context and must
//! not block.

use crate::game::grid::Grid;
use crate::game::state::GameEvent;
use crate::game::types::{Position, SoundKind, UrgencyState};

pub trait Frontend: Send {
    /// Initial layout; afterwards the front end only observes changes.
    fn on_session_started(&mut self, _grid: &Grid, _position: Position, _remaining: i32) {}
    fn on_position_changed(&mut self, _position: Position) {}
    fn on_urgency_changed(&mut self, _state: UrgencyState) {}
    fn on_timer_tick(&mut self, _remaining: i32, _low_time: bool) {}
    fn on_cooldown_progress(&mut self, _fraction: f64) {}
    /// Called exactly once per session.
    fn on_session_ended(&mut self, _played: bool, _won: bool) {}
    fn play_sound(&mut self, _kind: SoundKind) {}
}

/// Front end that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullFrontend;

impl Frontend for NullFrontend {}

/// Route one core event to the matching callback.
pub fn dispatch(frontend: &mut dyn Frontend, event: &GameEvent) {
    match event {
        GameEvent::SessionStarted { grid, position, remaining } => {
            frontend.on_session_started(grid, *position, *remaining)
        }
        GameEvent::PositionChanged(position) => frontend.on_position_changed(*position),
        GameEvent::UrgencyChanged(state) => frontend.on_urgency_changed(*state),
        GameEvent::TimerTick { remaining, low_time } => frontend.on_timer_tick(*remaining, *low_time),
        GameEvent::CooldownProgress(fraction) => frontend.on_cooldown_progress(*fraction),
        GameEvent::Sound(kind) => frontend.play_sound(*kind),
        GameEvent::SessionEnded { played, won } => frontend.on_session_ended(*played, *won),
    }
}
