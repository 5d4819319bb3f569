//! Consecutive games between two strategies.

use log::info;
use othello::{Game, GameError, GameObserver, Outcome, Player, Strategy};

/// Results of a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub black_wins: usize,
    pub white_wins: usize,
    pub draws: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome.winner() {
            Some(Player::Black) => self.black_wins += 1,
            Some(Player::White) => self.white_wins += 1,
            None => self.draws += 1,
        }
    }

    pub fn games(&self) -> usize {
        self.black_wins + self.white_wins + self.draws
    }
}

/// A game of the series stopped on an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("game {round} aborted: {source}")]
pub struct AbortedGame {
    pub round: usize,
    /// Games completed before the failing one.
    pub tally: Tally,
    pub source: GameError,
}

/// Play `games` games from the initial position, black strategy first.
pub fn run_games(
    black: &mut dyn Strategy,
    white: &mut dyn Strategy,
    games: usize,
    observer: &mut dyn GameObserver,
) -> Result<Tally, AbortedGame> {
    let mut tally = Tally::default();

    for round in 1..=games {
        let outcome = Game::new()
            .play(black, white, observer)
            .map_err(|source| AbortedGame {
                round,
                tally,
                source,
            })?;
        tally.record(&outcome);
        info!("game {} finished with score {}", round, outcome.score);
    }

    Ok(tally)
}
