//! Turn controller.
//!
//! [`Game`] owns the authoritative board. Strategies only ever see copies,
//! and every square they return is re-validated here before it is played.

use log::{debug, info, warn};

use crate::{is_valid, Board, GameError, Player, Square, Strategy};

/// Final board and score relative to black.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub board: Board,
    pub score: i32,
}

impl Outcome {
    /// Winner by piece count, None on a draw.
    pub fn winner(&self) -> Option<Player> {
        match self.score {
            s if s > 0 => Some(Player::Black),
            s if s < 0 => Some(Player::White),
            _ => None,
        }
    }
}

/// Read-only hooks for renderers. Every method defaults to doing nothing.
pub trait GameObserver {
    /// Called once before the first turn of [`Game::play`].
    fn on_game_start(&mut self, _black: &str, _white: &str) {}

    /// Called before `player` is asked for a move.
    fn on_turn(&mut self, _player: Player, _board: &Board, _legal_moves: &[Square]) {}

    /// Called after `square` has been played and flips applied.
    fn on_move(&mut self, _player: Player, _square: Square, _board: &Board) {}

    fn on_game_over(&mut self, _outcome: &Outcome) {}
}

pub struct NoopObserver;

impl GameObserver for NoopObserver {}

/// Ask `strategy` for a move on a copy of `board`, then verify the answer
/// against `board` itself.
pub fn get_move(
    strategy: &mut dyn Strategy,
    player: Player,
    board: &Board,
) -> Result<Square, GameError> {
    let snapshot = board.clone();
    let square = strategy.select(player, snapshot.clone())?;

    if !is_valid(square) || !board.is_legal(square, player) {
        warn!(
            "{} strategy returned illegal move {} for {}",
            strategy.name(),
            square,
            player
        );
        return Err(GameError::IllegalMove {
            player,
            square,
            board: snapshot,
        });
    }

    Ok(square)
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Option<Player>,
    plies: usize,
}

impl Game {
    /// Initial board, black to move.
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            to_move: Some(Player::Black),
            plies: 0,
        }
    }

    /// Start from an arbitrary position with `player` to move. If `player`
    /// has no move the pass rule applies straight away, and if neither side
    /// can move the game starts out finished.
    pub fn from_position(board: Board, player: Player) -> Self {
        let to_move = if board.any_legal_move(player) {
            Some(player)
        } else {
            board.next_player(player)
        };

        Game {
            board,
            to_move,
            plies: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move, None once the game is over.
    pub fn to_move(&self) -> Option<Player> {
        self.to_move
    }

    pub fn is_over(&self) -> bool {
        self.to_move.is_none()
    }

    /// Moves played so far through this controller.
    pub fn plies(&self) -> usize {
        self.plies
    }

    /// Legal moves for the player to move; empty when the game is over.
    pub fn legal_moves(&self) -> Vec<Square> {
        self.to_move
            .map(|player| self.board.legal_moves(player))
            .unwrap_or_default()
    }

    /// Score relative to black.
    pub fn score(&self) -> i32 {
        self.board.score(Player::Black)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_over() {
            return None;
        }
        Some(Outcome {
            board: self.board.clone(),
            score: self.score(),
        })
    }

    /// Play `square` for the player to move. The board is left untouched if
    /// the move is off the board or illegal.
    pub fn apply(&mut self, square: Square) -> Result<Player, GameError> {
        let player = self.to_move.ok_or(GameError::GameOver)?;

        if !self.board.check(square, player) {
            return Err(GameError::IllegalMove {
                player,
                square,
                board: self.board.clone(),
            });
        }

        self.board.make_move(square, player);
        self.plies += 1;
        self.to_move = self.board.next_player(player);
        debug!("{} plays {}", player, square);

        match self.to_move {
            Some(next) if next == player => debug!("{} passes", player.opponent()),
            None => info!("game over after {} plies, score {}", self.plies, self.score()),
            _ => {}
        }

        Ok(player)
    }

    /// Get a validated move from `strategy` for the player to move and play
    /// it.
    pub fn step(&mut self, strategy: &mut dyn Strategy) -> Result<Square, GameError> {
        let player = self.to_move.ok_or(GameError::GameOver)?;
        let square = get_move(strategy, player, &self.board)?;
        self.apply(square)?;
        Ok(square)
    }

    /// Drive the game to the end. An illegal move from either strategy stops
    /// play and is returned as is.
    pub fn play(
        &mut self,
        black: &mut dyn Strategy,
        white: &mut dyn Strategy,
        observer: &mut dyn GameObserver,
    ) -> Result<Outcome, GameError> {
        info!("starting game: {} (black) vs {} (white)", black.name(), white.name());
        observer.on_game_start(black.name(), white.name());

        while let Some(player) = self.to_move {
            observer.on_turn(player, &self.board, &self.board.legal_moves(player));

            let strategy: &mut dyn Strategy = match player {
                Player::Black => &mut *black,
                Player::White => &mut *white,
            };
            let square = self.step(strategy)?;

            observer.on_move(player, square, &self.board);
        }

        let outcome = Outcome {
            board: self.board.clone(),
            score: self.score(),
        };
        observer.on_game_over(&outcome);
        Ok(outcome)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
