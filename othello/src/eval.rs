//! Position evaluation.
//!
//! Two evaluators exist and are chosen by game phase: the positional
//! [`weighted_score`] while the board is still open, and the saturated
//! [`final_value`] once [`EMPTY_THRESHOLD`] or fewer squares remain.

use crate::{Board, Player, VALID_SQUARES};

/// Relative worth of each square, indexed like the board.
#[rustfmt::skip]
pub const SQUARE_WEIGHTS: [i32; 100] = [
    0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
    0, 120, -20,  20,   5,   5,  20, -20, 120,   0,
    0, -20, -40,  -5,  -5,  -5,  -5, -40, -20,   0,
    0,  20,  -5,  15,   3,   3,  15,  -5,  20,   0,
    0,   5,  -5,   3,   3,   3,   3,  -5,   5,   0,
    0,   5,  -5,   3,   3,   3,   3,  -5,   5,   0,
    0,  20,  -5,  15,   3,   3,  15,  -5,  20,   0,
    0, -20, -40,  -5,  -5,  -5,  -5, -40, -20,   0,
    0, 120, -20,  20,   5,   5,  20, -20, 120,   0,
    0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
];

const fn total_weight() -> i32 {
    let mut total = 0;
    let mut i = 0;
    while i < SQUARE_WEIGHTS.len() {
        total += SQUARE_WEIGHTS[i].abs();
        i += 1;
    }
    total
}

/// Score of a won game; no weighted score can exceed it.
pub const MAX_VALUE: i32 = total_weight();
pub const MIN_VALUE: i32 = -MAX_VALUE;

/// Above this many empty squares positions are scored by square weights;
/// at or below it, by the final outcome.
pub const EMPTY_THRESHOLD: usize = 18;

/// Sum of square weights held by `player` minus those held by the opponent.
pub fn weighted_score(player: Player, board: &Board) -> i32 {
    let mine = player.to_cell();
    let theirs = player.opponent().to_cell();

    VALID_SQUARES.iter().fold(0, |total, &sq| match board.get(sq) {
        c if c == mine => total + SQUARE_WEIGHTS[sq],
        c if c == theirs => total - SQUARE_WEIGHTS[sq],
        _ => total,
    })
}

/// `MAX_VALUE` if `player` is ahead on pieces, `MIN_VALUE` if behind, 0 on
/// a tie.
pub fn final_value(player: Player, board: &Board) -> i32 {
    match board.score(player) {
        diff if diff > 0 => MAX_VALUE,
        diff if diff < 0 => MIN_VALUE,
        _ => 0,
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Evaluator {
    Weighted,
    Final,
}

impl Evaluator {
    /// Pick the evaluator for the phase `board` is in.
    pub fn for_board(board: &Board) -> Self {
        if board.empty_count() > EMPTY_THRESHOLD {
            Evaluator::Weighted
        } else {
            Evaluator::Final
        }
    }

    pub fn evaluate(&self, player: Player, board: &Board) -> i32 {
        match self {
            Evaluator::Weighted => weighted_score(player, board),
            Evaluator::Final => final_value(player, board),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_weights_are_symmetric() {
        for row in 0..10 {
            for col in 0..10 {
                let w = SQUARE_WEIGHTS[10 * row + col];
                assert_eq!(w, SQUARE_WEIGHTS[10 * col + row]);
                assert_eq!(w, SQUARE_WEIGHTS[10 * (9 - row) + col]);
                assert_eq!(w, SQUARE_WEIGHTS[10 * row + (9 - col)]);
            }
        }
    }

    #[test]
    fn test_max_value() {
        assert_eq!(MAX_VALUE, 1176);
        assert_eq!(MIN_VALUE, -1176);
    }

    #[test]
    fn test_weighted_score_initial_board() {
        let board = Board::new();
        assert_eq!(weighted_score(Player::Black, &board), 0);
        assert_eq!(weighted_score(Player::White, &board), 0);
    }

    #[test]
    fn test_weighted_score_corner() {
        let mut board = Board::empty();
        board.set(11, Cell::Black);
        board.set(22, Cell::White);
        assert_eq!(weighted_score(Player::Black, &board), 160);
        assert_eq!(weighted_score(Player::White, &board), -160);
    }

    #[test]
    fn test_final_value() {
        let mut board = Board::new();
        assert_eq!(final_value(Player::Black, &board), 0);

        board.make_move(34, Player::Black);
        assert_eq!(final_value(Player::Black, &board), MAX_VALUE);
        assert_eq!(final_value(Player::White, &board), MIN_VALUE);
    }

    #[test]
    fn test_evaluator_for_board() {
        assert_eq!(Evaluator::for_board(&Board::new()), Evaluator::Weighted);

        let mut board = Board::empty();
        for &sq in VALID_SQUARES.iter().take(64 - EMPTY_THRESHOLD) {
            board.set(sq, Cell::Black);
        }
        assert_eq!(board.empty_count(), EMPTY_THRESHOLD);
        assert_eq!(Evaluator::for_board(&board), Evaluator::Final);

        board.set(VALID_SQUARES[63 - EMPTY_THRESHOLD], Cell::Empty);
        assert_eq!(Evaluator::for_board(&board), Evaluator::Weighted);
    }
}
