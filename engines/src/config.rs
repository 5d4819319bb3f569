//! Strategy selection by name, as used on the command line.

use std::fmt;
use std::str::FromStr;

use othello::Strategy;
use thiserror::Error;

use crate::alphabeta::{AlphaBetaSearcher, DEFAULT_DEPTH};
use crate::human::HumanStrategy;
use crate::maximizer::Maximizer;
use crate::random::RandomStrategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Human,
    Random,
    Maximizer,
    AlphaBeta { depth: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseStrategyError {
    #[error("unknown strategy `{0}` (expected human, random, maximizer or alphabeta[:depth])")]
    Unknown(String),

    #[error("invalid search depth `{0}`: expected a positive integer")]
    InvalidDepth(String),
}

impl StrategyKind {
    /// Build the strategy. `seed` only affects the random strategy.
    pub fn build(&self, seed: Option<u64>) -> Box<dyn Strategy> {
        match *self {
            StrategyKind::Human => Box::new(HumanStrategy::stdio()),
            StrategyKind::Random => Box::new(RandomStrategy::new(seed)),
            StrategyKind::Maximizer => Box::new(Maximizer),
            StrategyKind::AlphaBeta { depth } => Box::new(AlphaBetaSearcher::new(depth)),
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, StrategyKind::Human)
    }
}

impl FromStr for StrategyKind {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        let (name, depth) = match s.split_once(':') {
            Some((name, depth)) => (name, Some(depth)),
            None => (s.as_str(), None),
        };

        let kind = match (name, depth) {
            ("human", None) => StrategyKind::Human,
            ("random" | "ia0", None) => StrategyKind::Random,
            ("maximizer" | "greedy" | "ia1", None) => StrategyKind::Maximizer,
            ("alphabeta" | "ia2", None) => StrategyKind::AlphaBeta {
                depth: DEFAULT_DEPTH,
            },
            ("alphabeta", Some(depth)) => match depth.parse::<u32>() {
                Ok(depth) if depth > 0 => StrategyKind::AlphaBeta { depth },
                _ => return Err(ParseStrategyError::InvalidDepth(depth.to_string())),
            },
            _ => return Err(ParseStrategyError::Unknown(s.clone())),
        };
        Ok(kind)
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Human => f.write_str("human"),
            StrategyKind::Random => f.write_str("random"),
            StrategyKind::Maximizer => f.write_str("maximizer"),
            StrategyKind::AlphaBeta { depth } => write!(f, "alphabeta:{}", depth),
        }
    }
}
