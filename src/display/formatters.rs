// Display formatting utilities for text hosts

use crate::board::Grid;
use crate::session::GameSession;
use std::fmt::Write;

pub const LIT_CELL: &str = " O ";
pub const UNLIT_CELL: &str = " . ";
pub const WIN_MESSAGE: &str = "You've won!";

/// Column header line for a grid
pub fn format_column_headers(cols: usize) -> String {
    let mut line = String::from("    ");
    for col in 0..cols {
        let _ = write!(line, " {:2}", col);
    }
    line
}

/// Row prefix for grid rows
pub fn format_row_prefix(row: usize) -> String {
    format!("{:2}: ", row)
}

/// Render a grid with column headers and row prefixes
pub fn format_grid(grid: &Grid) -> String {
    let mut out = format_column_headers(grid.cols());
    out.push('\n');
    for (row, cells) in grid.as_rows().iter().enumerate() {
        out.push_str(&format_row_prefix(row));
        for &lit in cells {
            out.push_str(if lit { LIT_CELL } else { UNLIT_CELL });
        }
        out.push('\n');
    }
    out
}

/// Win message shown instead of the board
pub fn format_win_message() -> &'static str {
    WIN_MESSAGE
}

/// Header line with board size, lit cells and move count
pub fn format_session_header(session: &GameSession) -> String {
    let grid = session.grid();
    format!(
        "=== LIGHTS OUT ({} x {}) === lit: {}  moves: {}",
        grid.rows(),
        grid.cols(),
        grid.lit_count(),
        session.moves()
    )
}

/// Print the session: the board while playing, the win message once won
pub fn print_session(session: &GameSession) {
    println!();
    println!("{}", format_session_header(session));
    if session.is_won() {
        println!("{}", format_win_message());
    } else {
        print!("{}", format_grid(session.grid()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grid_layout() {
        let grid = Grid::from_rows(vec![vec![true, false], vec![false, true]]).unwrap();
        let expected = "      0  1\n 0:  O  . \n 1:  .  O \n";
        assert_eq!(format_grid(&grid), expected);
    }

    #[test]
    fn test_session_header() {
        let session = GameSession::new(Grid::from_rows(vec![vec![true, true]]).unwrap());
        assert_eq!(
            format_session_header(&session),
            "=== LIGHTS OUT (1 x 2) === lit: 2  moves: 0"
        );
    }
}
