// Game session - the caller-owned Playing/Won state machine around a Grid

use crate::board::{has_won, toggle_around, Grid};
use log::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    Won,
}

/// One game: the current grid, its state and how many moves were made.
///
/// The held grid is replaced wholesale after every toggle, so grids handed
/// out earlier through [`GameSession::grid`] clones never change.
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    state: SessionState,
    moves: u32,
}

impl GameSession {
    pub fn new(grid: Grid) -> Self {
        let state = Self::evaluate(&grid);
        info!(
            "new {}x{} session, {} lit, state {:?}",
            grid.rows(),
            grid.cols(),
            grid.lit_count(),
            state
        );
        Self {
            grid,
            state,
            moves: 0,
        }
    }

    /// Toggle the cross at (row, col). Once the game is won further toggles
    /// are ignored until [`GameSession::restart`].
    pub fn toggle(&mut self, row: isize, col: isize) -> SessionState {
        if self.state == SessionState::Won {
            debug!("ignoring toggle at ({}, {}): session already won", row, col);
            return self.state;
        }

        self.grid = toggle_around(&self.grid, row, col);
        self.moves += 1;
        self.state = Self::evaluate(&self.grid);

        if self.state == SessionState::Won {
            info!("session won after {} moves", self.moves);
        }
        self.state
    }

    /// Start a new game with a freshly generated grid
    pub fn restart(&mut self, grid: Grid) {
        *self = Self::new(grid);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state == SessionState::Won
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    fn evaluate(grid: &Grid) -> SessionState {
        if has_won(grid) {
            SessionState::Won
        } else {
            SessionState::Playing
        }
    }
}
