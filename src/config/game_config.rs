use crate::board::errors::{validate_chance, validate_difficulty, validate_dimensions};
use crate::board::{create_random_grid, create_solvable_grid, BoardResult, Grid, RandomSource};
use crate::config::grid_config::GridConfig;
use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// How the starting board is generated
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum GenerationStrategy {
    /// Light each cell independently with this probability
    Random { chance_lit_at_start: f64 },
    /// Apply this many random cross toggles to an all-off board
    Solvable { difficulty: i64 },
}

impl Default for GenerationStrategy {
    fn default() -> Self {
        GenerationStrategy::Random {
            chance_lit_at_start: 0.5,
        }
    }
}

/// Complete configuration for a game
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub generation: GenerationStrategy,
    /// Fixed seed for reproducible boards; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Load configuration from file
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` but reading values through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(rows) = parse_var::<usize, _>(&lookup, "LIGHTS_OUT_ROWS") {
            config.grid.rows = rows;
        }
        if let Some(cols) = parse_var::<usize, _>(&lookup, "LIGHTS_OUT_COLS") {
            config.grid.cols = cols;
        }

        // Difficulty wins over chance when both are set
        if let Some(chance) = parse_var::<f64, _>(&lookup, "LIGHTS_OUT_CHANCE") {
            config.generation = GenerationStrategy::Random {
                chance_lit_at_start: chance,
            };
        }
        if let Some(difficulty) = parse_var::<i64, _>(&lookup, "LIGHTS_OUT_DIFFICULTY") {
            config.generation = GenerationStrategy::Solvable { difficulty };
        }

        if let Some(seed) = parse_var::<u64, _>(&lookup, "LIGHTS_OUT_SEED") {
            config.seed = Some(seed);
        }

        config
    }

    /// Validate configuration values with the same rules as the generators
    pub fn validate(&self) -> BoardResult<()> {
        validate_dimensions(self.grid.rows, self.grid.cols)?;
        match self.generation {
            GenerationStrategy::Random { chance_lit_at_start } => {
                validate_chance(chance_lit_at_start)
            }
            GenerationStrategy::Solvable { difficulty } => validate_difficulty(difficulty),
        }
    }

    /// Generate a starting board with the configured strategy
    pub fn create_grid<R>(&self, rng: &mut R) -> BoardResult<Grid>
    where
        R: RandomSource + ?Sized,
    {
        let GridConfig { rows, cols } = self.grid;
        match self.generation {
            GenerationStrategy::Random { chance_lit_at_start } => {
                create_random_grid(rows, cols, chance_lit_at_start, rng)
            }
            GenerationStrategy::Solvable { difficulty } => {
                create_solvable_grid(rows, cols, difficulty, rng)
            }
        }
    }

    /// Random source for this configuration: seeded when `seed` is set
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}
