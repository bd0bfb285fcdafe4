// Configuration module - board size, generation strategy and seed

pub mod game_config;
pub mod grid_config;

pub use game_config::{GameConfig, GenerationStrategy};
pub use grid_config::GridConfig;
