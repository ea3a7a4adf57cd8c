//! Tree data structure for the Monte Carlo search
//!
//! This module defines [`SearchNode`], the memoized tree node wrapping one
//! game position. The tree is never built eagerly: children come into
//! existence on first visit and are owned exclusively by their parent, so
//! no back-references or sharing are ever needed.

use std::collections::btree_map::{BTreeMap, Entry};

use crate::{outcome::Outcome, position::Position, Result, SearchError};

/// A node in the search tree
///
/// Wraps one game position together with the aggregated [`Outcome`] of all
/// simulations through the subtree rooted here, and a memo of the children
/// expanded so far, keyed by freedom index.
///
/// The freedom index is a dense `0..k-1` enumeration of the currently legal
/// moves, distinct from the game's native move encoding. It is resolved to
/// a native move against [`Position::legal_moves`] at expansion time and is
/// never cached, which is why the legal-move ordering contract matters.
#[derive(Debug)]
pub struct SearchNode<P: Position> {
    /// The game position at this node
    position: P,

    /// Whether the game is over at this node
    terminal: bool,

    /// Aggregated simulation results, relative to the player to move here
    outcome: Outcome,

    /// Children expanded so far, keyed by freedom index
    children: BTreeMap<usize, SearchNode<P>>,
}

impl<P: Position> SearchNode<P> {
    /// Creates a root node from an externally supplied position
    ///
    /// A root with no legal moves is terminal with a draw tally; whether the
    /// previous move won is knowledge only expansion has, so a driver should
    /// check its own game state before handing a won position to the engine.
    pub fn new(position: P) -> Self {
        Self::classify(position, false)
    }

    fn classify(position: P, winning_move: bool) -> Self {
        let (terminal, outcome) = if winning_move {
            // The mover who reached this node won, so the player to move
            // here has lost.
            (true, Outcome::LOSS)
        } else if position.legal_moves().is_empty() {
            (true, Outcome::DRAW)
        } else {
            (false, Outcome::NONE)
        };

        SearchNode {
            position,
            terminal,
            outcome,
            children: BTreeMap::new(),
        }
    }

    /// Returns the wrapped game position
    pub fn position(&self) -> &P {
        &self.position
    }

    /// Returns true if the game is over at this node
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Returns the aggregated outcome for the subtree rooted here
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Number of legal moves in this position, 0 for terminal nodes
    pub fn legal_move_count(&self) -> usize {
        if self.terminal {
            return 0;
        }
        self.position.legal_moves().len()
    }

    /// Resolves a native move to its freedom index, if currently legal
    pub fn freedom_of(&self, mv: &P::Move) -> Option<usize> {
        if self.terminal {
            return None;
        }
        self.position.legal_moves().iter().position(|m| m == mv)
    }

    /// Expands the child for a freedom index, creating it on first visit
    ///
    /// The index is resolved to a native move via the position's legal-move
    /// enumeration, the move is applied, and the resulting node is
    /// classified: a winning move makes the child terminal with a loss
    /// tally (the mover at the child is the opponent of the winner), a
    /// moveless child is a terminal draw. Subsequent calls with the same
    /// index return the memoized child.
    ///
    /// Fails with [`SearchError::IndexOutOfRange`] when `freedom` is not in
    /// `[0, legal_move_count())`.
    pub fn expand(&mut self, freedom: usize) -> Result<&mut SearchNode<P>> {
        let count = self.legal_move_count();
        if freedom >= count {
            return Err(SearchError::IndexOutOfRange {
                index: freedom,
                count,
            });
        }

        match self.children.entry(freedom) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let mv = self.position.legal_moves().swap_remove(freedom);
                let next = self.position.apply(&mv)?;
                let winning = next.is_winning_move(&mv);
                Ok(entry.insert(SearchNode::classify(next, winning)))
            }
        }
    }

    /// Consumes this node and returns the child for `freedom`
    ///
    /// Expands the child first if it was never visited. This is the
    /// ownership-transfer form used when a chosen move makes a child the
    /// new current node; the rest of the tree is dropped.
    pub fn into_child(mut self, freedom: usize) -> Result<SearchNode<P>> {
        self.expand(freedom)?;
        Ok(self
            .children
            .remove(&freedom)
            .expect("expand memoizes the child"))
    }

    /// Reads a child's outcome from this node's perspective
    ///
    /// The fundamental zero-sum transform between alternating players:
    /// wins and losses swap, draws stay. Every outcome read from a child
    /// for aggregation at the parent must pass through this.
    pub fn child_outcome(&self, child: &SearchNode<P>) -> Outcome {
        child.outcome.flipped()
    }

    /// Adds a rollout delta to this node's tally
    ///
    /// Used by backpropagation only; the delta must already be expressed
    /// from this node's perspective.
    pub fn accumulate(&mut self, delta: Outcome) {
        self.outcome += delta;
    }

    /// Iterates over the expanded children in freedom-index order
    ///
    /// This is the diagnostic surface a driver can display between moves;
    /// the outcomes yielded are the children's own untransformed tallies.
    pub fn expanded(&self) -> impl Iterator<Item = (usize, &SearchNode<P>)> {
        self.children.iter().map(|(&freedom, child)| (freedom, child))
    }

    /// Total number of simulated games recorded across expanded children
    ///
    /// The `N` of both move-selection policies. Zero means no exploration
    /// has happened yet and move selection would be degenerate.
    pub fn sampled_total(&self) -> u64 {
        self.children
            .values()
            .map(|child| child.outcome.total())
            .sum()
    }
}
