use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid direction `{0}`, expected one of up, down, left, right")]
    InvalidDirection(String),
    #[error("invalid board shape: {0}")]
    InvalidBoardShape(#[from] ShapeViolation),
    #[error("cell index {0} is outside the board (0..16)")]
    InvalidCellIndex(usize),
    #[error("the game is over, start a new game to keep playing")]
    GameOver,
}

/// Why a candidate board was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ShapeViolation {
    #[error("expected 16 cells, got {0}")]
    Length(usize),
    #[error("cell {index} holds {value}, expected 0 or a power of two in 2..=131072")]
    Value { index: usize, value: i64 },
}
