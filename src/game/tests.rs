use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use crate::config::game::{GRID_SIZE, GOAL, INITIAL_SECONDS, SPAWN};
use crate::game::board::GameBoard;
use crate::game::clock::GameClock;
use crate::game::grid::{generate_grid, CellContent, Grid, ObstacleKind};
use crate::game::state::{EndReason, GameEvent, GamePhase, GameState};
use crate::game::types::*;

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col).expect("test position in bounds")
}

fn board_with(cells: &[((usize, usize), CellContent)]) -> GameBoard {
    let mut grid = Grid::empty();
    for &((row, col), content) in cells {
        grid.set(pos(row, col), content);
    }
    GameBoard::with_grid(grid, StdRng::seed_from_u64(7))
}

fn started(board: GameBoard) -> GameState {
    let mut state = GameState::from_parts(board, GameClock::new());
    state.start();
    state
}

fn session_ends(events: &[GameEvent]) -> Vec<(bool, bool)> {
    events
        .iter()
        .filter_map(|e| match e {
            GameEvent::SessionEnded { played, won } => Some((*played, *won)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_grid_generation_fixed_cells() {
    for seed in 0..50 {
        let grid = generate_grid(&mut StdRng::seed_from_u64(seed));
        assert_eq!(grid.size(), GRID_SIZE);
        assert!(grid.rows().all(|row| row.len() == GRID_SIZE));
        assert_eq!(grid.get(pos(GOAL.0, GOAL.1)), CellContent::Goal);
        assert_eq!(grid.get(pos(SPAWN.0, SPAWN.1)), CellContent::Empty);
        let goals = grid.rows().flatten().filter(|&&c| c == CellContent::Goal).count();
        assert_eq!(goals, 1);
    }
}

#[test]
fn test_grid_generation_rates() {
    let mut rng = StdRng::seed_from_u64(42);
    let (mut obstacles, mut pickups, mut cells) = (0usize, 0usize, 0usize);
    for _ in 0..200 {
        let grid = generate_grid(&mut rng);
        for cell in grid.rows().flatten() {
            cells += 1;
            match cell {
                CellContent::Obstacle(_) => obstacles += 1,
                CellContent::Pickup => pickups += 1,
                _ => {}
            }
        }
    }
    // 0.1 + 0.9 * 0.1 = 0.19 obstacles, 0.81 * 0.05 = 0.0405 pickups
    let obstacle_rate = obstacles as f64 / cells as f64;
    let pickup_rate = pickups as f64 / cells as f64;
    assert!((obstacle_rate - 0.19).abs() < 0.02, "obstacle rate {}", obstacle_rate);
    assert!((pickup_rate - 0.0405).abs() < 0.01, "pickup rate {}", pickup_rate);
}

#[test]
fn test_goal_cell_cannot_be_overwritten() {
    let mut grid = Grid::empty();
    grid.set(pos(GOAL.0, GOAL.1), CellContent::Pickup);
    grid.set(pos(3, 3), CellContent::Goal);
    assert_eq!(grid.get(pos(GOAL.0, GOAL.1)), CellContent::Goal);
    assert_eq!(grid.get(pos(3, 3)), CellContent::Empty);
}

#[test]
fn test_board_queries() {
    let board = board_with(&[
        ((7, 0), CellContent::Obstacle(ObstacleKind::Rock)),
        ((7, 1), CellContent::Obstacle(ObstacleKind::Panel)),
        ((8, 1), CellContent::Pickup),
    ]);
    assert!(board.has_obstacle_at(pos(7, 0)));
    assert!(board.has_obstacle_at(pos(7, 1)));
    assert!(!board.has_obstacle_at(pos(8, 1)));
    assert!(board.is_pickup_at(pos(8, 1)));
    assert!(board.is_goal_at(pos(0, 5)));
    assert!(!board.is_goal_at(pos(8, 0)));
    assert_eq!(board.position(), pos(8, 0));
}

#[test]
fn test_move_into_obstacle_applies_one_penalty() {
    for kind in [ObstacleKind::Rock, ObstacleKind::Panel] {
        let mut board = board_with(&[((7, 0), CellContent::Obstacle(kind))]);
        let mut clock = GameClock::new();

        let outcome = board.move_player(Direction::Up, &mut clock);

        assert_eq!(outcome.position, pos(8, 0));
        assert_eq!(outcome.blocked, Some(BlockReason::Obstacle));
        assert!(outcome.penalty_applied());
        assert!(!outcome.won && !outcome.pickup_collected);
        assert_eq!(board.position(), pos(8, 0));
        assert_eq!(clock.remaining_seconds(), INITIAL_SECONDS - 2);
    }
}

#[test]
fn test_move_off_grid_applies_penalty() {
    let mut board = board_with(&[]);
    let mut clock = GameClock::new();

    let outcome = board.move_player(Direction::Left, &mut clock);

    assert_eq!(outcome.blocked, Some(BlockReason::OutOfBounds));
    assert_eq!(board.position(), pos(8, 0));
    assert_eq!(clock.remaining_seconds(), INITIAL_SECONDS - 2);
}

#[test]
fn test_pickup_adds_time_once() {
    let mut board = board_with(&[((8, 1), CellContent::Pickup)]);
    let mut clock = GameClock::new();

    let outcome = board.move_player(Direction::Right, &mut clock);
    assert!(outcome.pickup_collected);
    assert_eq!(clock.remaining_seconds(), INITIAL_SECONDS + 3);
    assert!(!board.is_pickup_at(pos(8, 1)));

    board.move_player(Direction::Left, &mut clock);
    let again = board.move_player(Direction::Right, &mut clock);
    assert!(!again.pickup_collected);
    assert_eq!(clock.remaining_seconds(), INITIAL_SECONDS + 3);
}

#[test]
fn test_reset_position_returns_to_spawn() {
    let mut board = board_with(&[]);
    let mut clock = GameClock::new();
    board.move_player(Direction::Up, &mut clock);
    board.move_player(Direction::Right, &mut clock);
    assert_eq!(board.position(), pos(7, 1));

    board.reset_position();
    assert_eq!(board.position(), pos(SPAWN.0, SPAWN.1));
    assert_eq!(board.player().pos, board.position());
}

#[test]
fn test_position_stays_in_bounds_for_random_walks() {
    let mut rng = StdRng::seed_from_u64(3);
    let directions = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
    for seed in 0..20 {
        let mut board = GameBoard::with_seed(seed);
        let mut clock = GameClock::with_seconds(10_000);
        for _ in 0..500 {
            let direction = directions[rng.random_range(0..directions.len())];
            let before = board.position();
            let outcome = board.move_player(direction, &mut clock);
            let after = board.position();
            assert!(after.row() < GRID_SIZE && after.col() < GRID_SIZE);
            assert!(!board.has_obstacle_at(after));
            if outcome.blocked.is_some() {
                assert_eq!(before, after);
            }
        }
    }
}

#[test]
fn test_special_action_gated_by_cooldown() {
    let mut board = board_with(&[]);
    let mut clock = GameClock::new();

    let first = board.use_special_action(&mut clock);
    assert_ne!(first, ActionOutcome::OnCooldown);
    let after_first = clock.remaining_seconds();
    let urgency = clock.urgency();

    board.step_cooldown();
    let second = board.use_special_action(&mut clock);

    assert_eq!(second, ActionOutcome::OnCooldown);
    assert_eq!(clock.remaining_seconds(), after_first);
    assert_eq!(clock.urgency(), urgency);
    assert_eq!(board.player().cooldown.elapsed(), 0.5);
}

#[test]
fn test_special_action_too_late() {
    let mut board = board_with(&[]);
    let mut clock = GameClock::with_seconds(0);

    assert_eq!(board.use_special_action(&mut clock), ActionOutcome::TooLate);
    assert!(board.is_on_cooldown());
    assert_eq!(clock.remaining_seconds(), 0);
}

#[test]
fn test_special_action_failure_frequency() {
    let mut board = GameBoard::with_seed(2024);
    let fires = 10_000;
    let mut failures = 0;

    for _ in 0..fires {
        let mut clock = GameClock::new();
        match board.use_special_action(&mut clock) {
            ActionOutcome::Extended { remaining } => assert_eq!(remaining, INITIAL_SECONDS + 5),
            ActionOutcome::ForcedLoss => {
                assert_eq!(clock.remaining_seconds(), 0);
                failures += 1;
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        while board.step_cooldown().is_some() {}
    }

    let rate = failures as f64 / fires as f64;
    assert!((rate - 0.2).abs() < 0.02, "failure rate {}", rate);
}

#[test]
fn test_fresh_session_initial_state() {
    let mut state = GameState::with_seed(11);
    assert_eq!(state.phase(), GamePhase::Ready);

    let events = state.start();
    let snapshot = state.snapshot();

    assert!(matches!(events.as_slice(), [GameEvent::SessionStarted { remaining: 17, .. }]));
    assert_eq!(snapshot.position, pos(8, 0));
    assert_eq!(snapshot.remaining, INITIAL_SECONDS);
    assert_eq!(snapshot.urgency, UrgencyState::Calm);
    assert!(!snapshot.on_cooldown);
    assert!(state.start().is_empty());
}

#[test]
fn test_input_before_start_is_ignored() {
    let mut state = GameState::from_parts(board_with(&[]), GameClock::new());
    assert!(state.apply_input(PlayerInput::Move(Direction::Up)).is_empty());
    assert!(state.tick().is_empty());
    assert_eq!(state.board.position(), pos(8, 0));
}

#[test]
fn test_reaching_goal_ends_session_once() {
    // Straight column from (8, 5) up to the goal at (0, 5).
    let mut state = started(board_with(&[]));
    let mut events = Vec::new();
    for _ in 0..5 {
        events.extend(state.apply_input(PlayerInput::Move(Direction::Right)));
    }
    for _ in 0..8 {
        events.extend(state.apply_input(PlayerInput::Move(Direction::Up)));
    }
    events.extend(state.apply_input(PlayerInput::Move(Direction::Down)));
    events.extend(state.tick());

    assert_eq!(session_ends(&events), vec![(true, true)]);
    assert_eq!(state.phase(), GamePhase::Ended(EndReason::Won));
    assert_eq!(state.board.position(), pos(0, 5));
    assert!(!state.clock.is_running());
    assert_eq!(events.last(), Some(&GameEvent::SessionEnded { played: true, won: true }));
}

#[test]
fn test_natural_timeout_ends_session_once() {
    let mut state = started(board_with(&[]));
    let mut events = Vec::new();
    for _ in 0..(INITIAL_SECONDS + 5) {
        events.extend(state.tick());
    }

    assert_eq!(session_ends(&events), vec![(true, false)]);
    assert_eq!(state.phase(), GamePhase::Ended(EndReason::TimeExpired));
    let ticks = events.iter().filter(|e| matches!(e, GameEvent::TimerTick { .. })).count();
    assert_eq!(ticks, (INITIAL_SECONDS - 1) as usize);
    assert!(state.apply_input(PlayerInput::SpecialAction).is_empty());
}

#[test]
fn test_twelve_ticks_reach_panic() {
    let mut state = started(board_with(&[]));
    let mut urgency = Vec::new();
    for _ in 0..12 {
        for event in state.tick() {
            if let GameEvent::UrgencyChanged(s) = event {
                urgency.push(s);
            }
        }
    }
    assert_eq!(state.clock.remaining_seconds(), 5);
    assert_eq!(state.clock.urgency(), UrgencyState::Panic);
    assert_eq!(urgency.first(), Some(&UrgencyState::Warning));
    assert_eq!(urgency.last(), Some(&UrgencyState::Panic));
}

#[test]
fn test_obstacle_move_plays_collision_without_moving() {
    let mut state = started(board_with(&[((7, 0), CellContent::Obstacle(ObstacleKind::Rock))]));
    let events = state.apply_input(PlayerInput::Move(Direction::Up));
    assert_eq!(events, vec![GameEvent::Sound(SoundKind::Collision)]);

    let events = state.apply_input(PlayerInput::Move(Direction::Left));
    assert!(events.is_empty());
    assert_eq!(state.clock.remaining_seconds(), INITIAL_SECONDS - 4);
}

#[test]
fn test_pickup_move_events() {
    let mut state = started(board_with(&[((8, 1), CellContent::Pickup)]));
    let events = state.apply_input(PlayerInput::Move(Direction::Right));
    assert_eq!(
        events,
        vec![GameEvent::PositionChanged(pos(8, 1)), GameEvent::Sound(SoundKind::Pickup)]
    );
}

#[test]
fn test_forced_loss_ends_session() {
    let mut found = false;
    for seed in 0..500 {
        let mut state = GameState::with_seed(seed);
        state.start();
        let events = state.apply_input(PlayerInput::SpecialAction);
        if session_ends(&events).is_empty() {
            continue;
        }
        assert_eq!(events[0], GameEvent::Sound(SoundKind::SpecialAction));
        assert_eq!(session_ends(&events), vec![(true, false)]);
        assert_eq!(state.phase(), GamePhase::Ended(EndReason::ForcedLoss));
        assert_eq!(state.clock.remaining_seconds(), 0);
        assert!(state.tick().is_empty());
        found = true;
        break;
    }
    assert!(found, "no forced loss in 500 seeds");
}

#[test]
fn test_cooldown_progress_events_until_reset() {
    let mut state = started(board_with(&[]));
    state.apply_input(PlayerInput::SpecialAction);

    let mut progress = Vec::new();
    for _ in 0..12 {
        for event in state.step_cooldown() {
            if let GameEvent::CooldownProgress(p) = event {
                progress.push(p);
            }
        }
    }

    assert_eq!(progress.len(), 10);
    assert_eq!(progress.last(), Some(&1.0));
    assert!(progress.windows(2).all(|w| w[0] < w[1]));
    assert!(!state.board.is_on_cooldown());
}

#[test]
fn test_quit_reports_not_played() {
    let mut state = started(board_with(&[]));
    let events = state.apply_input(PlayerInput::Quit);
    assert_eq!(session_ends(&events), vec![(false, false)]);
    assert!(state.apply_input(PlayerInput::Quit).is_empty());
}

#[test]
fn test_snapshot_serializes() {
    let mut state = started(board_with(&[]));
    state.tick();
    let json = serde_json::to_value(state.snapshot()).expect("snapshot serializes");
    assert_eq!(json["remaining"], 16);
    assert_eq!(json["urgency"], "Warning");
    assert_eq!(json["position"]["row"], 8);
}

#[test]
fn test_direction_parsing_fails_fast() {
    assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
    assert_eq!("D".parse::<Direction>(), Ok(Direction::Right));
    assert_eq!("\x1b[B".parse::<Direction>(), Ok(Direction::Down));
    assert!(matches!("north".parse::<Direction>(), Err(crate::error::GameError::InvalidDirection(_))));
}

#[test]
fn test_position_rejects_out_of_bounds() {
    assert!(Position::new(GRID_SIZE, 0).is_err());
    assert!(Position::new(0, GRID_SIZE).is_err());
    assert!(Position::new(GRID_SIZE - 1, GRID_SIZE - 1).is_ok());
}

#[test]
fn test_position_deserialization_checks_bounds() {
    let inside: Position = serde_json::from_str(r#"{"row":8,"col":0}"#).expect("in-grid position");
    assert_eq!(inside, pos(8, 0));
    assert_eq!(serde_json::to_string(&inside).expect("serializable"), r#"{"row":8,"col":0}"#);

    assert!(serde_json::from_str::<Position>(r#"{"row":12,"col":3}"#).is_err());
    assert!(serde_json::from_str::<Position>(r#"{"row":0,"col":10}"#).is_err());
}

#[test]
fn test_board_queries_total_on_partial_layout() {
    let grid: Grid = serde_json::from_str(r#"{"cells":[["Pickup"]]}"#).expect("grid json");
    let mut board = GameBoard::with_grid(grid, StdRng::seed_from_u64(7));
    let corner = pos(GRID_SIZE - 1, GRID_SIZE - 1);

    assert!(!board.has_obstacle_at(corner));
    assert!(!board.is_pickup_at(corner));
    assert!(!board.is_goal_at(pos(GOAL.0, GOAL.1)));
    assert!(board.is_pickup_at(pos(0, 0)));

    let mut clock = GameClock::new();
    let outcome = board.move_player(Direction::Up, &mut clock);
    assert_eq!(outcome.position, pos(7, 0));
    assert!(!outcome.pickup_collected);
}
