use thiserror::Error;

use crate::{Board, Player, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A strategy returned a square that is off the board or not legal for
    /// the player to move. `board` is the snapshot the strategy was given.
    #[error("{player} attempted illegal move {square}")]
    IllegalMove {
        player: Player,
        square: Square,
        board: Board,
    },

    #[error("{0} has no legal moves")]
    NoLegalMoves(Player),

    #[error("the game is already over")]
    GameOver,

    #[error("no move from {player}: {reason}")]
    Input { player: Player, reason: String },

    #[error("invalid board state: {0}")]
    InvalidState(String),
}
