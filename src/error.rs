use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u16,
        height: u16,
    },
    #[error("Too many mines: {mines} requested but the board only has {cells} cells")]
    TooManyMines { mines: u32, cells: u32 },
    #[error("Board must be at least 1x1")]
    EmptyBoard,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
