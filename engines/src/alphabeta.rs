//! Alpha-Beta Searcher - depth-limited negamax with alpha-beta pruning
//!
//! Every call scores the position from the point of view of the player to
//! move; a parent negates its child's score instead of alternating between
//! maximizing and minimizing code paths.
//!
//! Algorithm Details:
//! - `depth == 0`: the leaf heuristic is returned as is
//! - mover cannot play but the opponent can: the mover passes, the opponent
//!   is searched one ply shallower and the score negated
//! - neither side can play: the exact outcome (`final_value`) is returned
//!   whatever depth remains
//! - otherwise moves are tried in increasing square order on throwaway
//!   copies of the board, and scanning stops once `alpha >= beta`
//!
//! Ties keep the earlier move: a later move only replaces the current best
//! when it scores strictly higher. Pruning changes how much of the tree is
//! visited, never the score or move returned from a full window.

use log::trace;
use othello::eval::final_value;
use othello::{Board, Evaluator, GameError, Player, Square, Strategy, MAX_VALUE, MIN_VALUE};

/// Lookahead used by the strongest console level.
pub const DEFAULT_DEPTH: u32 = 5;

/// Search `board` for `player` to `depth` plies inside the window
/// `(alpha, beta)`, scoring leaves with `evaluate`.
///
/// Returns the score and the chosen move; the move is None at a depth
/// cutoff, at a pass and at the end of the game.
pub fn alphabeta(
    player: Player,
    board: &Board,
    alpha: i32,
    beta: i32,
    depth: u32,
    evaluate: Evaluator,
) -> (i32, Option<Square>) {
    Search::new(evaluate).run(player, board, alpha, beta, depth)
}

/// Full-window search from the root, as used by [`AlphaBetaSearcher`].
/// Like the searcher, a depth of 0 is searched as 1; None means `player`
/// has no legal move.
pub fn compute_move(player: Player, board: &Board, depth: u32) -> Option<Square> {
    let evaluate = Evaluator::for_board(board);
    alphabeta(player, board, MIN_VALUE, MAX_VALUE, depth.max(1), evaluate).1
}

struct Search {
    evaluate: Evaluator,
    nodes: u64,
}

impl Search {
    fn new(evaluate: Evaluator) -> Self {
        Search { evaluate, nodes: 0 }
    }

    fn run(
        &mut self,
        player: Player,
        board: &Board,
        mut alpha: i32,
        beta: i32,
        depth: u32,
    ) -> (i32, Option<Square>) {
        self.nodes += 1;

        if depth == 0 {
            return (self.evaluate.evaluate(player, board), None);
        }

        let opponent = player.opponent();
        let moves = board.legal_moves(player);

        if moves.is_empty() {
            if !board.any_legal_move(opponent) {
                return (final_value(player, board), None);
            }
            let (value, _) = self.run(opponent, board, -beta, -alpha, depth - 1);
            return (-value, None);
        }

        let mut best_move = moves[0];
        for square in moves {
            if alpha >= beta {
                break;
            }

            let mut child = board.clone();
            child.make_move(square, player);
            let (value, _) = self.run(opponent, &child, -beta, -alpha, depth - 1);
            let value = -value;

            if value > alpha {
                alpha = value;
                best_move = square;
            }
        }

        (alpha, Some(best_move))
    }
}

/// Plays the move found by a full-window search of fixed depth. The leaf
/// evaluator is picked from the phase of the board it is handed.
#[derive(Debug, Clone)]
pub struct AlphaBetaSearcher {
    depth: u32,
    name: String,
}

impl AlphaBetaSearcher {
    /// A depth of 0 is treated as 1: the searcher always looks at least one
    /// move ahead.
    pub fn new(depth: u32) -> Self {
        let depth = depth.max(1);
        AlphaBetaSearcher {
            depth,
            name: format!("alphabeta:{}", depth),
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Default for AlphaBetaSearcher {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Strategy for AlphaBetaSearcher {
    fn name(&self) -> &str {
        &self.name
    }

    fn select(&mut self, player: Player, board: Board) -> Result<Square, GameError> {
        if !board.any_legal_move(player) {
            return Err(GameError::NoLegalMoves(player));
        }

        let evaluate = Evaluator::for_board(&board);
        let mut search = Search::new(evaluate);
        let (score, best) = search.run(player, &board, MIN_VALUE, MAX_VALUE, self.depth);
        trace!(
            "{}: {:?} eval, {} nodes, score {}, move {:?}",
            self.name,
            evaluate,
            search.nodes,
            score,
            best
        );

        best.ok_or(GameError::NoLegalMoves(player))
    }
}
