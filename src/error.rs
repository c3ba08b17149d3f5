//! Failure results reported back to the input layer.

use thiserror::Error;

use crate::container::ContainerId;

/// Why a move, undo or redo did not happen.  None of these are fatal and
/// none leave the board partly changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The rules reject the move.
    #[error("illegal move: {0}")]
    IllegalMove(&'static str),

    /// Undo or redo with nothing recorded.
    #[error("nothing to undo or redo")]
    EmptyHistory,

    /// The container does not exist on this board.
    #[error("no such container: {0}")]
    MalformedContainer(ContainerId),
}

pub type Result<T> = std::result::Result<T, MoveError>;
