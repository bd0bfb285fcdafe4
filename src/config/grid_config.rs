// Board dimensions for a game
use serde::{Deserialize, Serialize};

/// Board dimensions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { rows: 5, cols: 5 }
    }
}

impl GridConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_classic_five_by_five() {
        let config = GridConfig::default();
        assert_eq!((config.rows, config.cols), (5, 5));
        assert_eq!(config.cell_count(), 25);
    }

    #[test]
    fn test_json_shape() {
        let config: GridConfig = serde_json::from_str(r#"{"rows":2,"cols":9}"#).unwrap();
        assert_eq!(config, GridConfig::new(2, 9));
    }
}
