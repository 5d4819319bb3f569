//! Maximizer - greedy one-ply search
//!
//! Algorithm Strategy:
//! - Play every legal move on a throwaway copy of the board
//! - Score each resulting position with the evaluator for the current phase
//!   (square weights while the board is open, final outcome near the end)
//! - Select the highest score; ties go to the lowest square index
//!
//! Key characteristics:
//! - Deterministic: same board state always produces same move
//! - No lookahead beyond the move itself

use othello::{Board, Evaluator, GameError, Player, Square, Strategy};

/// Every legal move for `player` with the phase-evaluated score of the
/// position it leads to, in increasing square order.
pub fn move_scores(player: Player, board: &Board) -> Vec<(Square, i32)> {
    let evaluate = Evaluator::for_board(board);

    board
        .legal_moves(player)
        .into_iter()
        .map(|square| {
            let mut child = board.clone();
            child.make_move(square, player);
            (square, evaluate.evaluate(player, &child))
        })
        .collect()
}

/// Best one-ply move, or None if `player` has no legal move.
pub fn compute_move(player: Player, board: &Board) -> Option<Square> {
    let mut best: Option<(Square, i32)> = None;

    for (square, score) in move_scores(player, board) {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((square, score)),
        }
    }

    best.map(|(square, _)| square)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Maximizer;

impl Strategy for Maximizer {
    fn name(&self) -> &str {
        "maximizer"
    }

    fn select(&mut self, player: Player, board: Board) -> Result<Square, GameError> {
        compute_move(player, &board).ok_or(GameError::NoLegalMoves(player))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello::eval::weighted_score;
    use othello::Cell;

    #[test]
    fn test_move_scores_initial_board() {
        let board = Board::new();
        let scores = move_scores(Player::Black, &board);
        let squares: Vec<Square> = scores.iter().map(|&(sq, _)| sq).collect();
        assert_eq!(squares, vec![34, 43, 56, 65]);
        // opening moves are mirror images of each other
        assert!(scores.iter().all(|&(_, s)| s == scores[0].1));
    }

    #[test]
    fn test_tie_goes_to_lowest_square() {
        assert_eq!(compute_move(Player::Black, &Board::new()), Some(34));
        assert_eq!(compute_move(Player::White, &Board::new()), Some(35));
    }

    #[test]
    fn test_prefers_corner() {
        // 11 and 15 both capture 13; 11 is a corner
        let mut board = Board::empty();
        board.set(12, Cell::White);
        board.set(13, Cell::Black);
        board.set(14, Cell::White);
        board.set(16, Cell::Black);

        let best = compute_move(Player::Black, &board);
        assert_eq!(best, Some(11));

        let mut expected = board.clone();
        expected.make_move(11, Player::Black);
        let scores = move_scores(Player::Black, &board);
        assert!(scores.contains(&(11, weighted_score(Player::Black, &expected))));
    }

    #[test]
    fn test_endgame_uses_final_value() {
        // nearly full board: every move is judged by the outcome only
        let mut board = Board::empty();
        for &sq in othello::VALID_SQUARES.iter() {
            board.set(sq, Cell::White);
        }
        board.set(11, Cell::Empty);
        board.set(88, Cell::Black);
        board.set(18, Cell::Black);

        let scores = move_scores(Player::Black, &board);
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0], (11, othello::MIN_VALUE));
    }

    #[test]
    fn test_no_moves_fails_fast() {
        let mut board = Board::empty();
        board.set(11, Cell::Black);
        assert_eq!(
            Maximizer.select(Player::White, board),
            Err(GameError::NoLegalMoves(Player::White))
        );
    }
}
