//! Win/draw/loss tallies for simulated games
//!
//! The [`Outcome`] triple is the unit of statistical aggregation in the
//! search tree. Every outcome is relative to the player about to move at
//! the node it is attached to; crossing a parent/child edge requires the
//! perspective flip provided by [`Outcome::flipped`].

use std::fmt;
use std::ops::{Add, AddAssign};

/// Tally of simulated game results from the perspective of the player to move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Simulations the player to move went on to win
    pub wins: u64,

    /// Simulations that ended with a full board and no winner
    pub draws: u64,

    /// Simulations the player to move went on to lose
    pub losses: u64,
}

impl Outcome {
    /// The empty tally
    pub const NONE: Outcome = Outcome::new(0, 0, 0);

    /// One win for the player to move
    pub const WIN: Outcome = Outcome::new(1, 0, 0);

    /// One draw
    pub const DRAW: Outcome = Outcome::new(0, 1, 0);

    /// One loss for the player to move
    pub const LOSS: Outcome = Outcome::new(0, 0, 1);

    /// Creates an outcome with the given tallies
    pub const fn new(wins: u64, draws: u64, losses: u64) -> Self {
        Outcome {
            wins,
            draws,
            losses,
        }
    }

    /// Returns this outcome seen from the other player's side
    ///
    /// Wins and losses swap, draws stay. Applying the flip twice returns
    /// the original outcome.
    pub const fn flipped(self) -> Self {
        Outcome {
            wins: self.losses,
            draws: self.draws,
            losses: self.wins,
        }
    }

    /// Total number of simulated games recorded in this tally
    pub const fn total(self) -> u64 {
        self.wins + self.draws + self.losses
    }

    /// Caps every component at one game
    ///
    /// Rollout deltas must inject exactly one unit of win/draw/loss into
    /// the path, even if a terminal tally were ever non-unit.
    pub fn clamped_unit(self) -> Self {
        Outcome {
            wins: self.wins.min(1),
            draws: self.draws.min(1),
            losses: self.losses.min(1),
        }
    }
}

impl Add for Outcome {
    type Output = Outcome;

    fn add(self, rhs: Outcome) -> Outcome {
        Outcome {
            wins: self.wins + rhs.wins,
            draws: self.draws + rhs.draws,
            losses: self.losses + rhs.losses,
        }
    }
}

impl AddAssign for Outcome {
    fn add_assign(&mut self, rhs: Outcome) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}W/{}D/{}L",
            self.wins, self.draws, self.losses
        )
    }
}
