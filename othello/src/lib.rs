//! Core types and game logic for Othello (Reversi)
//!
//! The board is a flat 100-cell array: the 64 playable squares sit inside a
//! permanent ring of `Outer` sentinels, so directional scans never need a
//! bounds check.
//!
//! ```text
//! ? ? ? ? ? ? ? ? ? ?    00 01 02 03 04 05 06 07 08 09
//! ? . . . . . . . . ?    10 11 ...                  19
//! ? . . . . . . . . ?    20 21 ...
//! ? . . . . . . . . ?    30
//! ? . . . o @ . . . ?    40
//! ? . . . @ o . . . ?    50
//! ? . . . . . . . . ?    60
//! ? . . . . . . . . ?    70
//! ? . . . . . . . . ?    80 81 ...                  89
//! ? ? ? ? ? ? ? ? ? ?    90 91 ...                  99
//! ```

use std::fmt;

pub mod error;
pub mod eval;
pub mod game;
pub mod strategy;

pub use error::GameError;
pub use eval::{Evaluator, EMPTY_THRESHOLD, MAX_VALUE, MIN_VALUE};
pub use game::{get_move, Game, GameObserver, NoopObserver, Outcome};
pub use strategy::Strategy;

/// A linear board index, `10 * row + col`. Playable squares have row and
/// column in `1..=8`.
pub type Square = usize;

/// Number of cells including the sentinel border.
pub const BOARD_CELLS: usize = 100;

pub const UP: isize = -10;
pub const DOWN: isize = 10;
pub const LEFT: isize = -1;
pub const RIGHT: isize = 1;
pub const UP_RIGHT: isize = -9;
pub const DOWN_RIGHT: isize = 11;
pub const DOWN_LEFT: isize = 9;
pub const UP_LEFT: isize = -11;

/// The eight compass directions as linear-index deltas on the 10-wide grid.
pub const DIRECTIONS: [isize; 8] = [
    UP, UP_RIGHT, RIGHT, DOWN_RIGHT, DOWN, DOWN_LEFT, LEFT, UP_LEFT,
];

const fn interior_squares() -> [Square; 64] {
    let mut squares = [0; 64];
    let mut i = 0;
    let mut row = 1;
    while row <= 8 {
        let mut col = 1;
        while col <= 8 {
            squares[i] = 10 * row + col;
            i += 1;
            col += 1;
        }
        row += 1;
    }
    squares
}

/// The 64 playable squares in increasing index order.
pub const VALID_SQUARES: [Square; 64] = interior_squares();

/// All playable squares, in increasing index order.
pub fn valid_squares() -> &'static [Square; 64] {
    &VALID_SQUARES
}

/// Is `square` one of the 64 playable squares?
pub fn is_valid(square: Square) -> bool {
    square < BOARD_CELLS && (1..=8).contains(&(square / 10)) && (1..=8).contains(&(square % 10))
}

/// 1-based (row, col) of a playable square, as used by external renderers.
pub fn to_row_col(square: Square) -> (usize, usize) {
    (square / 10, square % 10)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(&self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Convert player to cell representation
    pub fn to_cell(&self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Player::Black => "Black",
            Player::White => "White",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Black,
    White,
    Outer,
}

impl Cell {
    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => '@',
            Cell::White => 'o',
            Cell::Outer => '?',
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create a new board with initial Othello setup
    /// Initial setup has 4 pieces in the center:
    /// - 44 and 55 are White
    /// - 45 and 54 are Black
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.cells[44] = Cell::White;
        board.cells[45] = Cell::Black;
        board.cells[54] = Cell::Black;
        board.cells[55] = Cell::White;
        board
    }

    /// A board with every playable square empty.
    pub fn empty() -> Self {
        let mut cells = [Cell::Outer; BOARD_CELLS];
        for &square in VALID_SQUARES.iter() {
            cells[square] = Cell::Empty;
        }
        Board { cells }
    }

    /// Build a board from a row-major 64-cell state (0 = empty, 1 = black,
    /// 2 = white).
    pub fn from_state(state: &[u8]) -> Result<Self, GameError> {
        if state.len() != VALID_SQUARES.len() {
            return Err(GameError::InvalidState(format!(
                "expected 64 cells, got {}",
                state.len()
            )));
        }

        let mut board = Self::empty();
        for (&code, &square) in state.iter().zip(VALID_SQUARES.iter()) {
            board.cells[square] = match code {
                0 => Cell::Empty,
                1 => Cell::Black,
                2 => Cell::White,
                other => {
                    return Err(GameError::InvalidState(format!(
                        "unknown cell code {} at square {}",
                        other, square
                    )))
                }
            };
        }
        Ok(board)
    }

    /// Current state as a row-major 64-cell array [0=empty, 1=black, 2=white]
    pub fn state(&self) -> [u8; 64] {
        let mut state = [0u8; 64];
        for (slot, &square) in state.iter_mut().zip(VALID_SQUARES.iter()) {
            *slot = match self.cells[square] {
                Cell::Black => 1,
                Cell::White => 2,
                Cell::Empty | Cell::Outer => 0,
            };
        }
        state
    }

    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Cell at `square`; anything outside the array reads as `Outer`.
    pub fn get(&self, square: Square) -> Cell {
        self.cells.get(square).copied().unwrap_or(Cell::Outer)
    }

    /// Overwrite a playable square. Used to set up positions; gameplay goes
    /// through [`Board::make_move`].
    ///
    /// # Panics
    /// If `square` is not playable or `cell` is `Outer`.
    pub fn set(&mut self, square: Square, cell: Cell) {
        assert!(is_valid(square), "square {} is not on the board", square);
        assert!(cell != Cell::Outer, "sentinel cells cannot be placed");
        self.cells[square] = cell;
    }

    /// Number of empty playable squares
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// Number of squares held by `player`
    pub fn count(&self, player: Player) -> usize {
        let cell = player.to_cell();
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Find the square that brackets a run of opponent pieces starting next
    /// to `square` in `direction`. Returns None if the neighbour is already
    /// the player's own piece, or if the run ends on an empty or sentinel
    /// cell.
    pub fn find_bracket(&self, square: Square, player: Player, direction: isize) -> Option<Square> {
        let mine = player.to_cell();
        let theirs = player.opponent().to_cell();

        let mut bracket = square.wrapping_add_signed(direction);
        if self.get(bracket) == mine {
            return None;
        }
        while self.get(bracket) == theirs {
            bracket = bracket.wrapping_add_signed(direction);
        }

        match self.get(bracket) {
            Cell::Empty | Cell::Outer => None,
            _ => Some(bracket),
        }
    }

    /// Check if a move is legal for `player`
    /// A move is legal if:
    /// 1. The cell is empty
    /// 2. At least one direction brackets opponent pieces
    pub fn is_legal(&self, square: Square, player: Player) -> bool {
        self.get(square) == Cell::Empty
            && DIRECTIONS
                .iter()
                .any(|&d| self.find_bracket(square, player, d).is_some())
    }

    /// `square` is a playable square and a legal move for `player`.
    pub fn check(&self, square: Square, player: Player) -> bool {
        is_valid(square) && self.is_legal(square, player)
    }

    /// All legal moves for `player`, in increasing index order
    pub fn legal_moves(&self, player: Player) -> Vec<Square> {
        VALID_SQUARES
            .iter()
            .copied()
            .filter(|&sq| self.is_legal(sq, player))
            .collect()
    }

    pub fn any_legal_move(&self, player: Player) -> bool {
        VALID_SQUARES.iter().any(|&sq| self.is_legal(sq, player))
    }

    /// Place a piece for `player` at `square` and flip every bracketed run.
    ///
    /// The move is assumed legal; use [`Board::check`] first when that is not
    /// already known.
    ///
    /// # Panics
    /// If `square` is not playable.
    pub fn make_move(&mut self, square: Square, player: Player) {
        assert!(is_valid(square), "square {} is not on the board", square);
        self.cells[square] = player.to_cell();
        for direction in DIRECTIONS {
            self.make_flips(square, player, direction);
        }
    }

    fn make_flips(&mut self, square: Square, player: Player, direction: isize) {
        let Some(bracket) = self.find_bracket(square, player, direction) else {
            return;
        };

        let cell = player.to_cell();
        let mut current = square.wrapping_add_signed(direction);
        while current != bracket {
            self.cells[current] = cell;
            current = current.wrapping_add_signed(direction);
        }
    }

    /// Player's piece count minus the opponent's
    pub fn score(&self, player: Player) -> i32 {
        let mine = player.to_cell();
        let theirs = player.opponent().to_cell();

        VALID_SQUARES.iter().fold(0, |total, &sq| match self.cells[sq] {
            c if c == mine => total + 1,
            c if c == theirs => total - 1,
            _ => total,
        })
    }

    /// Which player moves after `prev` has moved: the opponent if they can,
    /// otherwise `prev` again, otherwise nobody (game over).
    pub fn next_player(&self, prev: Player) -> Option<Player> {
        let opponent = prev.opponent();
        if self.any_legal_move(opponent) {
            Some(opponent)
        } else if self.any_legal_move(prev) {
            Some(prev)
        } else {
            None
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  1 2 3 4 5 6 7 8")?;
        for row in 1..=8 {
            write!(f, "{}", row)?;
            for col in 1..=8 {
                write!(f, " {}", self.cells[10 * row + col].symbol())?;
            }
            writeln!(f)?;
        }
        writeln!(f, "pieces left: {}", self.empty_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_new_initial_setup() {
        let board = Board::new();

        assert_eq!(board.get(44), Cell::White);
        assert_eq!(board.get(45), Cell::Black);
        assert_eq!(board.get(54), Cell::Black);
        assert_eq!(board.get(55), Cell::White);

        let occupied = VALID_SQUARES
            .iter()
            .filter(|&&sq| board.get(sq) != Cell::Empty)
            .count();
        assert_eq!(occupied, 4);
        assert_eq!(board.empty_count(), 60);
        assert_eq!(board.count(Player::Black), 2);
        assert_eq!(board.count(Player::White), 2);
    }

    #[test]
    fn test_sentinel_ring() {
        let board = Board::new();
        for square in 0..BOARD_CELLS {
            if is_valid(square) {
                assert_ne!(board.get(square), Cell::Outer);
            } else {
                assert_eq!(board.get(square), Cell::Outer, "square {}", square);
            }
        }
        assert_eq!(board.get(150), Cell::Outer);
    }

    #[test]
    fn test_valid_squares() {
        assert_eq!(VALID_SQUARES.len(), 64);
        assert_eq!(VALID_SQUARES[0], 11);
        assert_eq!(VALID_SQUARES[63], 88);
        assert!(VALID_SQUARES.windows(2).all(|w| w[0] < w[1]));
        assert!(VALID_SQUARES.iter().all(|&sq| is_valid(sq)));

        assert!(!is_valid(0));
        assert!(!is_valid(19));
        assert!(!is_valid(90));
        assert!(!is_valid(100));
        assert!(!is_valid(usize::MAX));
    }

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.opponent(), Player::Black);
    }

    #[test]
    fn test_player_to_cell() {
        assert_eq!(Player::Black.to_cell(), Cell::Black);
        assert_eq!(Player::White.to_cell(), Cell::White);
    }

    #[test]
    fn test_legal_moves_initial_board() {
        let board = Board::new();
        assert_eq!(board.legal_moves(Player::Black), vec![34, 43, 56, 65]);
        assert_eq!(board.legal_moves(Player::White), vec![35, 46, 53, 64]);
    }

    #[test]
    fn test_find_bracket() {
        let board = Board::new();
        // 34 looks down through white 44 to black 54
        assert_eq!(board.find_bracket(34, Player::Black, DOWN), Some(54));
        // own piece adjacent
        assert_eq!(board.find_bracket(35, Player::Black, DOWN), None);
        // empty neighbour
        assert_eq!(board.find_bracket(34, Player::Black, UP), None);
    }

    #[test]
    fn test_find_bracket_stops_at_sentinel() {
        let mut board = Board::empty();
        board.set(11, Cell::White);
        board.set(12, Cell::White);
        board.set(13, Cell::White);
        // run of white reaches the left border without a black piece
        assert_eq!(board.find_bracket(14, Player::Black, LEFT), None);
        assert!(!board.is_legal(14, Player::Black));
    }

    #[test]
    fn test_is_legal_initial_board() {
        let board = Board::new();
        assert!(board.is_legal(34, Player::Black));
        assert!(!board.is_legal(33, Player::Black));
        // occupied
        assert!(!board.is_legal(44, Player::Black));
        // sentinel and out of range
        assert!(!board.is_legal(0, Player::Black));
        assert!(!board.is_legal(500, Player::Black));
    }

    #[test]
    fn test_check() {
        let board = Board::new();
        assert!(board.check(34, Player::Black));
        assert!(!board.check(34, Player::White));
        assert!(!board.check(9, Player::Black));
        assert!(!board.check(1000, Player::Black));
    }

    #[test]
    fn test_make_move_flips() {
        let mut board = Board::new();
        board.make_move(34, Player::Black);

        assert_eq!(board.get(34), Cell::Black);
        assert_eq!(board.get(44), Cell::Black);
        assert_eq!(board.count(Player::Black), 4);
        assert_eq!(board.count(Player::White), 1);
        assert_eq!(board.empty_count(), 59);
    }

    #[test]
    fn test_make_move_flips_several_directions() {
        let mut board = Board::empty();
        board.set(11, Cell::Black);
        board.set(12, Cell::White);
        board.set(13, Cell::White);
        board.set(15, Cell::White);
        board.set(16, Cell::Black);
        board.set(24, Cell::White);
        board.set(34, Cell::Black);
        board.set(25, Cell::White);

        board.make_move(14, Player::Black);

        for sq in [11, 12, 13, 14, 15, 16, 24, 34] {
            assert_eq!(board.get(sq), Cell::Black, "square {}", sq);
        }
        // the diagonal run through 25 ends on an empty square
        assert_eq!(board.get(25), Cell::White);
    }

    #[test]
    fn test_score() {
        let mut board = Board::new();
        assert_eq!(board.score(Player::Black), 0);
        board.make_move(34, Player::Black);
        assert_eq!(board.score(Player::Black), 3);
        assert_eq!(board.score(Player::White), -3);
    }

    #[test]
    fn test_next_player_alternates() {
        let mut board = Board::new();
        board.make_move(34, Player::Black);
        assert_eq!(board.next_player(Player::Black), Some(Player::White));
    }

    #[test]
    fn test_next_player_forced_pass() {
        // White has nothing to bracket, black can still capture at 13
        let mut board = Board::empty();
        board.set(11, Cell::Black);
        board.set(12, Cell::White);
        assert!(!board.any_legal_move(Player::White));
        assert!(board.any_legal_move(Player::Black));
        assert_eq!(board.next_player(Player::Black), Some(Player::Black));
    }

    #[test]
    fn test_next_player_double_pass() {
        let mut board = Board::empty();
        board.set(11, Cell::Black);
        board.set(88, Cell::White);
        assert_eq!(board.next_player(Player::Black), None);
        assert_eq!(board.next_player(Player::White), None);
    }

    #[test]
    fn test_state_round_trip_initial() {
        let board = Board::new();
        let state = board.state();
        assert_eq!(state[27], 2); // row 4, col 4
        assert_eq!(state[28], 1);
        assert_eq!(state[35], 1);
        assert_eq!(state[36], 2);
        assert_eq!(Board::from_state(&state), Ok(board));
    }

    #[test]
    fn test_from_state_rejects_bad_input() {
        assert!(matches!(
            Board::from_state(&[0u8; 10]),
            Err(GameError::InvalidState(_))
        ));
        let mut state = [0u8; 64];
        state[5] = 7;
        assert!(matches!(
            Board::from_state(&state),
            Err(GameError::InvalidState(_))
        ));
    }

    #[test]
    fn test_display() {
        let rendered = Board::new().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "  1 2 3 4 5 6 7 8");
        assert_eq!(lines[4], "4 . . . o @ . . .");
        assert_eq!(lines[5], "5 . . . @ o . . .");
        assert_eq!(lines[9], "pieces left: 60");
    }

    #[test]
    #[should_panic]
    fn test_set_rejects_sentinel() {
        Board::empty().set(10, Cell::Black);
    }

    #[test]
    #[should_panic(expected = "square 19 is not on the board")]
    fn test_make_move_rejects_sentinel() {
        Board::new().make_move(19, Player::Black);
    }

    #[test]
    #[should_panic(expected = "square 100 is not on the board")]
    fn test_make_move_rejects_out_of_range() {
        Board::new().make_move(100, Player::White);
    }
}
