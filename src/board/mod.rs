// Board module - the Lights Out board engine
// Grid value type, random sources, generators, toggles and the win check

pub mod engine;
pub mod errors;
pub mod grid;
pub mod random;

// Re-export the main board types for easy access
pub use engine::{
    affected_cells, create_random_grid, create_solvable_grid, has_won, toggle_around,
};
pub use errors::{BoardError, BoardResult};
pub use grid::Grid;
pub use random::{RandomSource, SequenceSource};
