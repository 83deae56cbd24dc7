//! Text rendering of the board, used by the terminal front end.

use crate::game::grid::{CellContent, Grid, ObstacleKind};
use crate::game::types::Position;

fn cell_symbol(cell: CellContent) -> &'static str {
    match cell {
        CellContent::Empty => "..",
        CellContent::Obstacle(ObstacleKind::Rock) => "██",
        CellContent::Obstacle(ObstacleKind::Panel) => "▒▒",
        CellContent::Pickup => "++",
        CellContent::Goal => "HH",
    }
}

/// Render the grid one row per line, the player drawn over its cell.
pub fn render_grid(grid: &Grid, player: Position) -> String {
    let mut out = String::new();
    for (row, cells) in grid.rows().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            // Player drawn on top of whatever is below.
            let symbol = if player.row() == row && player.col() == col {
                "P1"
            } else {
                cell_symbol(*cell)
            };
            out.push_str(&format!("{:<3}", symbol));
        }
        out.push('\n');
    }
    out
}
