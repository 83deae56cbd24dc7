use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::config::game::{GRID_SIZE, GOAL, SPAWN, ROCK_CHANCE, PANEL_CHANCE, PICKUP_CHANCE};
use crate::game::types::Position;

/// Cosmetic obstacle variants. Movement treats both the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    Rock,
    Panel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellContent {
    Empty,
    Obstacle(ObstacleKind),
    Pickup,
    Goal,
}

impl CellContent {
    pub fn is_obstacle(&self) -> bool {
        matches!(self, CellContent::Obstacle(_))
    }
}

/// Static content of every cell, indexed `[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Vec<CellContent>>,
}

impl Grid {
    /// An all-empty grid with only the goal placed.
    pub fn empty() -> Self {
        let mut cells = vec![vec![CellContent::Empty; GRID_SIZE]; GRID_SIZE];
        cells[GOAL.0][GOAL.1] = CellContent::Goal;
        Self { cells }
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Content at `pos`. A layout with missing rows or columns reads as empty there.
    pub fn get(&self, pos: Position) -> CellContent {
        self.cell(pos).copied().unwrap_or(CellContent::Empty)
    }

    fn cell(&self, pos: Position) -> Option<&CellContent> {
        self.cells.get(pos.row()).and_then(|row| row.get(pos.col()))
    }

    fn cell_mut(&mut self, pos: Position) -> Option<&mut CellContent> {
        self.cells.get_mut(pos.row()).and_then(|row| row.get_mut(pos.col()))
    }

    /// Overwrite a cell. The goal cell is fixed and cannot be replaced.
    pub fn set(&mut self, pos: Position, content: CellContent) {
        if pos == Position::from_const(GOAL) || content == CellContent::Goal {
            return;
        }
        if let Some(cell) = self.cell_mut(pos) {
            *cell = content;
        }
    }

    /// Mark a pickup as used so it never triggers again.
    pub fn consume_pickup(&mut self, pos: Position) -> bool {
        match self.cell_mut(pos) {
            Some(cell) if *cell == CellContent::Pickup => {
                *cell = CellContent::Empty;
                true
            }
            _ => false,
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellContent]> {
        self.cells.iter().map(|row| row.as_slice())
    }
}

/// Draw a fresh layout.
///
/// Every cell but the goal gets a rock (10%), else a panel (10%), else a pickup (5%),
/// else stays empty. The spawn cell is cleared afterwards so the player never
/// starts on top of anything.
pub fn generate_grid<R: Rng>(rng: &mut R) -> Grid {
    let mut grid = Grid::empty();

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            if (row, col) == GOAL {
                continue;
            }
            let content = if rng.random::<f64>() < ROCK_CHANCE {
                CellContent::Obstacle(ObstacleKind::Rock)
            } else if rng.random::<f64>() < PANEL_CHANCE {
                CellContent::Obstacle(ObstacleKind::Panel)
            } else if rng.random::<f64>() < PICKUP_CHANCE {
                CellContent::Pickup
            } else {
                CellContent::Empty
            };
            grid.cells[row][col] = content;
        }
    }

    grid.cells[SPAWN.0][SPAWN.1] = CellContent::Empty;
    grid
}
