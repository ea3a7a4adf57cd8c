//! # tally-mcts
//!
//! A Monte Carlo tree search engine for two-player, perfect-information,
//! turn-alternating games. The engine estimates which move from a position
//! is most likely to lead to a win by playing many randomized games to
//! completion and tallying their results as (wins, draws, losses) triples
//! on an incrementally grown tree.
//!
//! ## Features
//!
//! - Generic over the game: anything implementing the [`Position`]
//!   capability interface plugs into the same search tree
//! - Outcome tallies are always relative to the player to move, with an
//!   explicit perspective flip at every parent/child edge
//! - Two interchangeable strategies: a random-rollout baseline and a
//!   bandit (UCT) policy whose selection rule also guides its rollouts
//! - A ready-made connect-four implementation of the position interface
//!
//! ## Basic Usage
//!
//! ```
//! use tally_mcts::connect_four::{ConnectFour, Token};
//! use tally_mcts::{RandomStrategy, SearchNode, Strategy};
//!
//! fn main() -> tally_mcts::Result<()> {
//!     // Search the opening position with a small simulation budget.
//!     let mut node = SearchNode::new(ConnectFour::new(Token::X));
//!     let mut strategy = RandomStrategy::new(200);
//!
//!     strategy.explore(&mut node)?;
//!
//!     // Diagnostic listing of the explored moves and their tallies.
//!     for (freedom, child) in node.expanded() {
//!         println!("freedom {freedom}: {}", child.outcome());
//!     }
//!
//!     // Commit to the best-looking move; the child becomes the new
//!     // current node for the next turn.
//!     let (freedom, node) = strategy.advance(node)?;
//!     println!("played freedom {freedom}:\n{}", node.position());
//!     Ok(())
//! }
//! ```
//!
//! ## How It Works
//!
//! Each `explore` call runs a fixed budget of rollouts. One rollout:
//!
//! 1. **Descend**: from the starting node, repeatedly pick a freedom index
//!    with the strategy's rollout selector and expand it, until a terminal
//!    node is reached. Children are created lazily and memoized, so later
//!    rollouts through the same line reuse the same nodes.
//!
//! 2. **Tally**: the terminal result, clamped to one unit of win, draw or
//!    loss, walks back up the visited path. At every step the delta is
//!    flipped to the current player's perspective before being added to
//!    that node's tally, which is what lets a single tree serve both
//!    players of a zero-sum game.
//!
//! After exploration, `advance` scores the children of the current node
//! from their tallies and returns the chosen move index together with the
//! corresponding child node.
//!
//! Exploration intensity is governed entirely by the simulation budget:
//! there is no background work, no time-based cutoff, and a search never
//! touches anything outside the tree handed to it.

pub mod connect_four;
pub mod outcome;
pub mod position;
pub mod strategy;
pub mod tree;

pub use outcome::Outcome;
pub use position::Position;
pub use strategy::{RandomStrategy, Strategy, UctStrategy};
pub use tree::SearchNode;

/// Error types for the search engine
#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    /// A collaborator reported a move outside its legal set
    #[error("illegal move: {0}")]
    InvalidMove(String),

    /// A freedom index outside the currently legal range; misuse by the
    /// caller rather than a recoverable condition
    #[error("freedom index {index} out of range ({count} legal moves)")]
    IndexOutOfRange { index: usize, count: usize },

    /// Move selection was requested before exploration recorded any
    /// outcomes to select from
    #[error("move requested before exploration recorded any outcomes")]
    DegenerateSelection,
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, SearchError>;
