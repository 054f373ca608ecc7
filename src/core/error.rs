#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GameError {
    #[error("invalid column (expected: 0-{max_expected}, found: {found})")]
    InvalidColumn { max_expected: usize, found: usize },
    #[error("column {col} is full")]
    ColumnFull { col: usize },
    #[error("can't make a move in a finished game")]
    GameIsFinished,
    #[error("failed to find the player whose turn it is")]
    PlayerRotationCorrupted,
}

impl GameError {
    pub fn invalid_column(max_expected: usize, found: usize) -> Self {
        Self::InvalidColumn {
            max_expected,
            found,
        }
    }

    pub fn column_full(col: usize) -> Self {
        Self::ColumnFull { col }
    }
}
