use othello::{Board, GameError, Player, Square, Strategy};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Picks uniformly among the legal moves.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Reproducible sequence of choices for a given seed.
    pub fn seeded(seed: u64) -> Self {
        RandomStrategy {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        RandomStrategy {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "random"
    }

    fn select(&mut self, player: Player, board: Board) -> Result<Square, GameError> {
        board
            .legal_moves(player)
            .choose(&mut self.rng)
            .copied()
            .ok_or(GameError::NoLegalMoves(player))
    }
}
