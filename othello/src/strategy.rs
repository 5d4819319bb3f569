use crate::{Board, GameError, Player, Square};

/// Chooses a move for `player`.
///
/// The board is handed over by value: a strategy works on its own copy and
/// can never reach the authoritative board. Whatever it returns is checked
/// again by the turn controller before being played.
pub trait Strategy {
    /// Short label used in logs and console output.
    fn name(&self) -> &str;

    fn select(&mut self, player: Player, board: Board) -> Result<Square, GameError>;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn select(&mut self, player: Player, board: Board) -> Result<Square, GameError> {
        (**self).select(player, board)
    }
}
