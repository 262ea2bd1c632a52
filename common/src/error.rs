use derive_more::{Display, Error};

/// Recoverable failures reported by the game core.
///
/// Illegal moves are not errors: `play` simply ignores them.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// A history jump targeted a move that does not exist.
    #[display("Move index {} is out of range (history has {} entries)", index, len)]
    OutOfRange { index: usize, len: usize },

    /// A difficulty name that is neither easy nor hard.
    #[display("Unsupported difficulty: {}", _0)]
    UnsupportedDifficulty(#[error(not(source))] String),

    /// User input that does not name a cell on the board.
    #[display("Invalid cell: {}", _0)]
    InvalidCell(#[error(not(source))] String),

    #[display("Config error: {}", _0)]
    Config(#[error(not(source))] String),
}
