//! Othello Move-Selection Strategies
//!
//! This crate contains the strategies that can sit on either side of an
//! [`othello::Game`]:
//! - `random`: uniform choice among the legal moves
//! - `maximizer`: greedy one-ply search over the phase evaluator
//! - `alphabeta`: depth-limited negamax with alpha-beta pruning
//! - `human`: moves typed on a console
//!
//! `runner` plays a series of games between two strategies and tallies the
//! results.
//!
//! Each engine also exports a `compute_move(player, board)` style function
//! returning the chosen square without going through the [`Strategy`] trait.
//!
//! [`Strategy`]: othello::Strategy

pub mod alphabeta;
pub mod config;
pub mod human;
pub mod maximizer;
pub mod random;
pub mod runner;

#[cfg(feature = "python")]
pub mod bindings;

pub use alphabeta::{AlphaBetaSearcher, DEFAULT_DEPTH};
pub use config::{ParseStrategyError, StrategyKind};
pub use human::HumanStrategy;
pub use maximizer::Maximizer;
pub use random::RandomStrategy;
pub use runner::{run_games, AbortedGame, Tally};

pub use alphabeta::compute_move as compute_move_alphabeta;
pub use maximizer::compute_move as compute_move_maximizer;
pub use maximizer::move_scores as move_scores_maximizer;
