use thiserror::Error;

/// Rejected moves. All of them leave the session as it was; the caller is
/// expected to prompt for another move or start a new game.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("position ({row}, {col}) is outside the board")]
    OutOfRange { row: usize, col: usize },
    #[error("cell ({row}, {col}) is already marked")]
    CellOccupied { row: usize, col: usize },
    #[error("game is already over")]
    SessionTerminated,
}
