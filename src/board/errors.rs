// Error types shared by the board engine and everything built on it

/// Result type for board operations
pub type BoardResult<T> = Result<T, BoardError>;

/// Errors that can occur while building a board
#[derive(Debug, Clone, PartialEq)]
pub enum BoardError {
    /// A construction parameter was outside its valid range
    InvalidArgument(String),
}

impl BoardError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        BoardError::InvalidArgument(msg.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, BoardError::InvalidArgument(_))
    }
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for BoardError {}

/// Validate board dimensions before anything is allocated
pub fn validate_dimensions(rows: usize, cols: usize) -> BoardResult<()> {
    if rows == 0 || cols == 0 {
        return Err(BoardError::invalid(format!(
            "board dimensions must be positive, got {}x{}",
            rows, cols
        )));
    }
    Ok(())
}

/// Validate the probability used to light cells at creation
pub fn validate_chance(chance_lit_at_start: f64) -> BoardResult<()> {
    // NaN fails both comparisons, so it is rejected here too
    if !(0.0..=1.0).contains(&chance_lit_at_start) {
        return Err(BoardError::invalid(format!(
            "chance_lit_at_start must be within [0, 1], got {}",
            chance_lit_at_start
        )));
    }
    Ok(())
}

/// Validate the number of random toggles for a solvable board
pub fn validate_difficulty(difficulty: i64) -> BoardResult<()> {
    if difficulty < 0 {
        return Err(BoardError::invalid(format!(
            "difficulty must be non-negative, got {}",
            difficulty
        )));
    }
    Ok(())
}
