use ndarray::Array2;
use numpy::PyArray2;
use othello::{Board, Game, GameError, Player, Strategy, VALID_SQUARES};
/// PyO3 bindings for the Othello engine
/// Exposes the Rust game controller and strategies to Python
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::StrategyKind;

fn to_py_err(err: GameError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn player_from_code(player: u8) -> PyResult<Player> {
    match player {
        1 => Ok(Player::Black),
        2 => Ok(Player::White),
        other => Err(PyValueError::new_err(format!(
            "Player must be 1 (black) or 2 (white), got {}",
            other
        ))),
    }
}

fn player_code(player: Player) -> u8 {
    match player {
        Player::Black => 1,
        Player::White => 2,
    }
}

/// Python wrapper for an Othello game
///
/// Squares are board indices `10 * row + col` with row and col in 1..=8.
#[pyclass]
pub struct OthelloGame {
    game: Game,
}

#[pymethods]
impl OthelloGame {
    /// Create a new game with the standard initial setup, black to move
    #[new]
    pub fn new() -> Self {
        Self { game: Game::new() }
    }

    /// Reset the game to the initial position
    pub fn reset(&mut self) {
        self.game = Game::new();
    }

    /// Play a square for the player to move
    ///
    /// Returns:
    ///     tuple: (valid, game_over)
    ///         - valid (bool): whether the move was legal and applied
    ///         - game_over (bool): whether the game has ended
    pub fn step(&mut self, square: usize) -> (bool, bool) {
        let valid = self.game.apply(square).is_ok();
        (valid, self.game.is_over())
    }

    /// Let a named strategy ("random", "maximizer", "alphabeta:N") move
    ///
    /// Returns:
    ///     int: the square played
    pub fn step_strategy(&mut self, strategy: &str, seed: Option<u64>) -> PyResult<usize> {
        let kind = parse_engine(strategy)?;
        let mut engine = kind.build(seed);
        self.game.step(engine.as_mut()).map_err(to_py_err)
    }

    /// Board as an (8, 8) uint8 array: 0 = empty, 1 = black, 2 = white
    pub fn get_board<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray2<u8>> {
        let state = self.game.board().state();
        let array = Array2::from_shape_fn((8, 8), |(row, col)| state[row * 8 + col]);
        Ok(PyArray2::from_owned_array(py, array))
    }

    /// Legal squares for the player to move
    pub fn get_valid_moves(&self) -> Vec<usize> {
        self.game.legal_moves()
    }

    /// 1 for black, 2 for white, None once the game is over
    pub fn get_current_player(&self) -> Option<u8> {
        self.game.to_move().map(player_code)
    }

    /// Black's piece count minus white's
    pub fn get_score(&self) -> i32 {
        self.game.score()
    }

    pub fn is_game_over(&self) -> bool {
        self.game.is_over()
    }

    fn __str__(&self) -> String {
        self.game.board().to_string()
    }
}

fn parse_engine(strategy: &str) -> PyResult<StrategyKind> {
    let kind: StrategyKind = strategy
        .parse()
        .map_err(|e: crate::config::ParseStrategyError| PyValueError::new_err(e.to_string()))?;
    if kind.is_human() {
        return Err(PyValueError::new_err(
            "the human strategy reads from stdin and is not available from Python",
        ));
    }
    Ok(kind)
}

/// Compute a move with a named strategy
///
/// Args:
///     board (list): Flat board state as 64 elements (0=Empty, 1=Black, 2=White)
///     player (int): Current player (1=Black, 2=White)
///     strategy (str): "random", "maximizer" or "alphabeta[:depth]"
///
/// Returns:
///     int: Square index (10 * row + col), or None if the player cannot move
#[pyfunction]
#[pyo3(signature = (board, player, strategy = "alphabeta", seed = None))]
fn compute_move(
    board: Vec<u8>,
    player: u8,
    strategy: &str,
    seed: Option<u64>,
) -> PyResult<Option<usize>> {
    let board = Board::from_state(&board).map_err(to_py_err)?;
    let player = player_from_code(player)?;
    if !board.any_legal_move(player) {
        return Ok(None);
    }

    let mut engine = parse_engine(strategy)?.build(seed);
    engine.select(player, board).map(Some).map_err(to_py_err)
}

/// Score every legal move with the greedy evaluator
///
/// Args:
///     board (list): Flat board state as 64 elements (0=Empty, 1=Black, 2=White)
///     player (int): Current player (1=Black, 2=White)
///
/// Returns:
///     list: (square, score) pairs in increasing square order, empty if the
///     player cannot move
#[pyfunction]
fn compute_move_scores(board: Vec<u8>, player: u8) -> PyResult<Vec<(usize, i32)>> {
    let board = Board::from_state(&board).map_err(to_py_err)?;
    let player = player_from_code(player)?;
    Ok(crate::maximizer::move_scores(player, &board))
}

/// Map a flat 0-63 index to the board square it names
#[pyfunction]
fn square_from_index(index: usize) -> PyResult<usize> {
    VALID_SQUARES.get(index).copied().ok_or_else(|| {
        PyValueError::new_err(format!(
            "Index {} is out of range. Must be between 0 and 63 (inclusive).",
            index
        ))
    })
}

/// Python module definition
///
/// This module can be imported in Python as `othello_engines`
#[pymodule]
fn othello_engines(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<OthelloGame>()?;
    m.add_function(wrap_pyfunction!(compute_move, m)?)?;
    m.add_function(wrap_pyfunction!(compute_move_scores, m)?)?;
    m.add_function(wrap_pyfunction!(square_from_index, m)?)?;
    Ok(())
}
