use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use super::board::Board;
use super::minimax::MinimaxPolicy;
use super::types::{Mark, Position, Snapshot};

/// What an opponent policy sees when it is asked for a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotInput {
    pub board: Snapshot,
    pub empty_cells: Vec<Position>,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn from_board(board: &Board, bot_mark: Mark) -> Self {
        Self {
            board: board.snapshot(),
            empty_cells: board.empty_cells().collect(),
            bot_mark,
        }
    }
}

/// Picks the opponent's reply. Implementations must return one of
/// `input.empty_cells` whenever that list is non-empty.
pub trait OpponentPolicy {
    fn choose(&mut self, input: &BotInput) -> Option<Position>;
}

impl<P: OpponentPolicy + ?Sized> OpponentPolicy for Box<P> {
    fn choose(&mut self, input: &BotInput) -> Option<Position> {
        (**self).choose(input)
    }
}

/// Uniform choice among the empty cells.
pub struct RandomPolicy {
    rng: SessionRng,
}

impl RandomPolicy {
    pub fn new(rng: SessionRng) -> Self {
        Self { rng }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(SessionRng::new(seed))
    }

    pub fn from_random() -> Self {
        Self::new(SessionRng::from_random())
    }
}

impl OpponentPolicy for RandomPolicy {
    fn choose(&mut self, input: &BotInput) -> Option<Position> {
        self.rng.choose(&input.empty_cells).copied()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FirstEmptyPolicy;

impl OpponentPolicy for FirstEmptyPolicy {
    fn choose(&mut self, input: &BotInput) -> Option<Position> {
        input.empty_cells.first().copied()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpponentKind {
    #[default]
    Random,
    Minimax,
    FirstEmpty,
}

impl OpponentKind {
    /// `seed` only matters for the random policy; without one the policy
    /// seeds itself from the thread RNG.
    pub fn create_policy(self, seed: Option<u64>) -> Box<dyn OpponentPolicy> {
        match self {
            OpponentKind::Random => match seed {
                Some(seed) => Box::new(RandomPolicy::from_seed(seed)),
                None => Box::new(RandomPolicy::from_random()),
            },
            OpponentKind::Minimax => Box::new(MinimaxPolicy),
            OpponentKind::FirstEmpty => Box::new(FirstEmptyPolicy),
        }
    }
}

impl fmt::Display for OpponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OpponentKind::Random => "random",
            OpponentKind::Minimax => "minimax",
            OpponentKind::FirstEmpty => "first-empty",
        };
        f.write_str(name)
    }
}

impl FromStr for OpponentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "random" => Ok(OpponentKind::Random),
            "minimax" => Ok(OpponentKind::Minimax),
            "first-empty" => Ok(OpponentKind::FirstEmpty),
            other => Err(format!(
                "unknown opponent '{}', expected random, minimax or first-empty",
                other
            )),
        }
    }
}
