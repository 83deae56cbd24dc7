//! Board state: layout, player token, movement and the special action.
//!
//! The countdown lives in [`GameClock`]; operations that touch it take the clock
//! by `&mut` so a move or an action and its timer side effect happen as one step.

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::game::{OBSTACLE_PENALTY_SECS, PICKUP_BONUS_SECS, ACTION_BONUS_SECS};
use crate::game::clock::GameClock;
use crate::game::entities::{CooldownStep, Player};
use crate::game::grid::{generate_grid, CellContent, Grid};
use crate::game::systems::{roll_special_action, step_position, ActionRoll};
use crate::game::types::{ActionOutcome, BlockReason, Direction, MoveOutcome, Position};

#[derive(Debug, Clone)]
pub struct GameBoard {
    grid: Grid,
    player: Player,
    rng: StdRng,
}

impl GameBoard {
    /// A board with a freshly generated layout.
    pub fn new() -> Self {
        Self::generated(StdRng::from_rng(&mut rand::rng()))
    }

    /// Reproducible board: the seed drives both layout and action rolls.
    pub fn with_seed(seed: u64) -> Self {
        Self::generated(StdRng::seed_from_u64(seed))
    }

    fn generated(mut rng: StdRng) -> Self {
        let grid = generate_grid(&mut rng);
        Self::with_grid(grid, rng)
    }

    /// Board over a caller-supplied layout.
    pub fn with_grid(grid: Grid, rng: StdRng) -> Self {
        Self {
            grid,
            player: Player::spawn(),
            rng,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn position(&self) -> Position {
        self.player.pos
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn reset_position(&mut self) {
        self.player.reset_position();
    }

    pub fn has_obstacle_at(&self, pos: Position) -> bool {
        self.grid.get(pos).is_obstacle()
    }

    pub fn is_pickup_at(&self, pos: Position) -> bool {
        self.grid.get(pos) == CellContent::Pickup
    }

    pub fn is_goal_at(&self, pos: Position) -> bool {
        self.grid.get(pos) == CellContent::Goal
    }

    pub fn is_on_cooldown(&self) -> bool {
        self.player.cooldown.is_active()
    }

    pub fn cooldown_progress(&self) -> f64 {
        self.player.cooldown.progress()
    }

    /// Try to move one cell.
    ///
    /// A move off the grid or into an obstacle leaves the player in place and costs
    /// the penalty. Otherwise the win check runs on the target cell, the position is
    /// committed and a pickup on the target is consumed.
    pub fn move_player(&mut self, direction: Direction, clock: &mut GameClock) -> MoveOutcome {
        let target = match step_position(self.player.pos, direction) {
            None => Err(BlockReason::OutOfBounds),
            Some(candidate) if self.has_obstacle_at(candidate) => Err(BlockReason::Obstacle),
            Some(candidate) => Ok(candidate),
        };

        let candidate = match target {
            Ok(candidate) => candidate,
            Err(reason) => {
                let remaining = clock.adjust_seconds(-OBSTACLE_PENALTY_SECS);
                debug!("[GameBoard] move {:?} blocked ({:?}), {}s left", direction, reason, remaining);
                return MoveOutcome {
                    position: self.player.pos,
                    blocked: Some(reason),
                    pickup_collected: false,
                    won: false,
                };
            }
        };

        let won = self.is_goal_at(candidate);
        self.player.pos = candidate;

        let pickup_collected = self.grid.consume_pickup(candidate);
        if pickup_collected {
            let remaining = clock.adjust_seconds(PICKUP_BONUS_SECS);
            debug!("[GameBoard] pickup at {}, {}s left", candidate, remaining);
        }

        MoveOutcome {
            position: candidate,
            blocked: None,
            pickup_collected,
            won,
        }
    }

    /// Fire the special action if the cooldown allows it.
    ///
    /// Starting the cooldown happens before the roll. With time left, the roll either
    /// extends the countdown or forces it to zero.
    pub fn use_special_action(&mut self, clock: &mut GameClock) -> ActionOutcome {
        if !self.player.cooldown.start() {
            debug!("[GameBoard] special action on cooldown ({:.0}%)", self.cooldown_progress() * 100.0);
            return ActionOutcome::OnCooldown;
        }

        if clock.remaining_seconds() <= 0 {
            info!("[GameBoard] special action fired with no time left");
            return ActionOutcome::TooLate;
        }

        match roll_special_action(&mut self.rng) {
            ActionRoll::Success => {
                let remaining = clock.adjust_seconds(ACTION_BONUS_SECS);
                info!("[GameBoard] special action succeeded, {}s left", remaining);
                ActionOutcome::Extended { remaining }
            }
            ActionRoll::Failure => {
                clock.set_seconds(0);
                info!("[GameBoard] special action failed, countdown forced to zero");
                ActionOutcome::ForcedLoss
            }
        }
    }

    /// Advance the cooldown by one half-second step.
    pub fn step_cooldown(&mut self) -> Option<CooldownStep> {
        let step = self.player.cooldown.step();
        if let Some(CooldownStep { finished: true, .. }) = step {
            debug!("[GameBoard] special action cooldown expired");
        }
        step
    }
}

impl Default for GameBoard {
    fn default() -> Self {
        Self::new()
    }
}
