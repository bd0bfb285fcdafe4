// Lights Out - board engine library
//
// An n x m grid of lit/unlit cells. Toggling a cell also toggles its
// orthogonal neighbours; the game is won when every cell is off.

pub mod board;
pub mod config;
pub mod display;
pub mod session;

// Re-export the main types for easy access
pub use board::{
    create_random_grid, create_solvable_grid, has_won, toggle_around, BoardError, BoardResult,
    Grid, RandomSource, SequenceSource,
};
pub use config::{GameConfig, GenerationStrategy, GridConfig};
pub use session::{GameSession, SessionState};
