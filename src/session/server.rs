//! Session actors.
//!
//! `GameSession` owns one `GameState` and its two periodic tasks (countdown tick and
//! cooldown progress). Actor messages are handled one at a time, so a tick, a move and
//! a special action resolution never interleave. `GameSessionManager` hands out fresh
//! sessions; a finished session is never reset in place.

use actix::prelude::*;
use std::collections::HashMap;
use std::time::Duration;
use uuid::Uuid;
use log::{debug, info, warn};

use crate::config::timing::{TICK_INTERVAL, COOLDOWN_STEP_INTERVAL};
use crate::error::{GameError, Result};
use crate::game::state::{GameEvent, GameState};
use crate::game::types::PlayerInput;
use super::frontend::{dispatch, Frontend};
use super::messages::{ActiveSessions, Command, CooldownStep, CreateGame, GetSnapshot, Tick};

pub struct GameSession {
    pub game_id: Uuid,
    state: GameState,
    frontend: Box<dyn Frontend>,
    /// `None` when the session is driven externally through `Tick`/`CooldownStep`.
    intervals: Option<(Duration, Duration)>,
    tick_timer: Option<SpawnHandle>,
    cooldown_timer: Option<SpawnHandle>,
}

impl GameSession {
    pub fn new(state: GameState, frontend: Box<dyn Frontend>) -> Self {
        Self {
            game_id: Uuid::new_v4(),
            state,
            frontend,
            intervals: Some((TICK_INTERVAL, COOLDOWN_STEP_INTERVAL)),
            tick_timer: None,
            cooldown_timer: None,
        }
    }

    /// Override the periods of the countdown and cooldown tasks.
    pub fn with_intervals(mut self, tick: Duration, cooldown_step: Duration) -> Self {
        self.intervals = Some((tick, cooldown_step));
        self
    }

    /// Schedule nothing; the owner sends `Tick` and `CooldownStep` itself.
    pub fn manual(mut self) -> Self {
        self.intervals = None;
        self
    }

    fn start_clock(&mut self, ctx: &mut Context<Self>) {
        if let Some((tick, _)) = self.intervals {
            let handle = ctx.run_interval(tick, |act, ctx| act.on_tick(ctx));
            self.tick_timer = Some(handle);
        }
    }

    fn start_cooldown_timer(&mut self, ctx: &mut Context<Self>) {
        if self.cooldown_timer.is_some() {
            return;
        }
        if let Some((_, step)) = self.intervals {
            let handle = ctx.run_interval(step, |act, ctx| act.on_cooldown_step(ctx));
            self.cooldown_timer = Some(handle);
        }
    }

    fn cancel_cooldown_timer(&mut self, ctx: &mut Context<Self>) {
        if let Some(handle) = self.cooldown_timer.take() {
            ctx.cancel_future(handle);
        }
    }

    /// Cancel both periodic tasks and stop the actor.
    fn shutdown(&mut self, ctx: &mut Context<Self>) {
        if let Some(handle) = self.tick_timer.take() {
            ctx.cancel_future(handle);
        }
        self.cancel_cooldown_timer(ctx);
        ctx.stop();
    }

    fn on_tick(&mut self, ctx: &mut Context<Self>) {
        let events = self.state.tick();
        self.publish(events, ctx);
    }

    fn on_cooldown_step(&mut self, ctx: &mut Context<Self>) {
        let events = self.state.step_cooldown();
        self.publish(events, ctx);
        if !self.state.board.is_on_cooldown() {
            self.cancel_cooldown_timer(ctx);
        }
    }

    fn on_input(&mut self, input: PlayerInput, ctx: &mut Context<Self>) -> Result<()> {
        if self.state.is_ended() {
            warn!("[GameSession] game_id={} input {:?} after session end", self.game_id, input);
            return Err(GameError::SessionClosed);
        }
        let events = self.state.apply_input(input);
        if input == PlayerInput::SpecialAction && self.state.board.is_on_cooldown() && self.state.is_playing() {
            self.start_cooldown_timer(ctx);
        }
        self.publish(events, ctx);
        Ok(())
    }

    /// Forward events to the front end in order; a terminal event tears the session down.
    fn publish(&mut self, events: Vec<GameEvent>, ctx: &mut Context<Self>) {
        for event in &events {
            debug!("[GameSession] game_id={} event={:?}", self.game_id, event);
            dispatch(self.frontend.as_mut(), event);
            if let GameEvent::SessionEnded { played, won } = event {
                info!(
                    "[GameSession] game_id={} ended (played={}, won={})",
                    self.game_id, played, won
                );
                self.shutdown(ctx);
            }
        }
    }
}

impl Actor for GameSession {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!("[GameSession] game_id={} started", self.game_id);
        let events = self.state.start();
        self.publish(events, ctx);
        self.start_clock(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        debug!("[GameSession] game_id={} stopped", self.game_id);
    }
}

impl Handler<Command> for GameSession {
    type Result = Result<()>;

    fn handle(&mut self, msg: Command, ctx: &mut Context<Self>) -> Self::Result {
        self.on_input(msg.0, ctx)
    }
}

impl Handler<Tick> for GameSession {
    type Result = ();

    fn handle(&mut self, _: Tick, ctx: &mut Context<Self>) -> Self::Result {
        self.on_tick(ctx);
    }
}

impl Handler<CooldownStep> for GameSession {
    type Result = ();

    fn handle(&mut self, _: CooldownStep, ctx: &mut Context<Self>) -> Self::Result {
        self.on_cooldown_step(ctx);
    }
}

impl Handler<GetSnapshot> for GameSession {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _: GetSnapshot, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.state.snapshot())
    }
}

/// Creates sessions and keeps track of the live ones.
pub struct GameSessionManager {
    sessions: HashMap<Uuid, Addr<GameSession>>,
}

impl GameSessionManager {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    pub fn create_game(&mut self, frontend: Box<dyn Frontend>, seed: Option<u64>) -> (Uuid, Addr<GameSession>) {
        self.prune();

        let state = match seed {
            Some(seed) => GameState::with_seed(seed),
            None => GameState::new(),
        };
        let session = GameSession::new(state, frontend);
        let game_id = session.game_id;
        let addr = session.start();

        self.sessions.insert(game_id, addr.clone());
        info!("[SessionManager] created game_id={} ({} live)", game_id, self.sessions.len());
        (game_id, addr)
    }

    /// Forget sessions whose actor has stopped.
    fn prune(&mut self) {
        self.sessions.retain(|_, addr| addr.connected());
    }
}

impl Default for GameSessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Actor for GameSessionManager {
    type Context = Context<Self>;
}

impl Handler<CreateGame> for GameSessionManager {
    type Result = MessageResult<CreateGame>;

    fn handle(&mut self, msg: CreateGame, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.create_game(msg.frontend, msg.seed))
    }
}

impl Handler<ActiveSessions> for GameSessionManager {
    type Result = usize;

    fn handle(&mut self, _: ActiveSessions, _: &mut Context<Self>) -> Self::Result {
        self.prune();
        self.sessions.len()
    }
}
