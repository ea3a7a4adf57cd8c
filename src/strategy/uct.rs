//! Bandit (UCT) strategy

use log::debug;
use rand::seq::SliceRandom;

use crate::{position::Position, strategy::Strategy, tree::SearchNode, Result, SearchError};

/// Upper-confidence-bound move selection over every legal move
///
/// Unlike the random baseline, `choose_move` considers all legal freedom
/// indices, expanding any not yet visited. Each candidate is scored by
/// `(wins - losses) / n + sqrt(t / n)` with a one-game smoothing added to
/// both `n` and the grand total behind `t = 2 ln total`, so fresh children
/// score on the exploration term alone instead of dividing by zero. Ties
/// are broken uniformly at random among the maximizers.
///
/// The same selection rule doubles as the rollout move: with no statistics
/// yet, every candidate ties and the tie-break degenerates to a uniform
/// random choice, and as tallies build up the rollouts grow more informed.
#[derive(Debug, Clone)]
pub struct UctStrategy {
    /// Number of rollouts per `explore` call
    tryouts: usize,
}

impl UctStrategy {
    /// Creates a strategy playing `tryouts` bandit-guided games per
    /// exploration
    pub fn new(tryouts: usize) -> Self {
        UctStrategy { tryouts }
    }
}

impl<P: Position> Strategy<P> for UctStrategy {
    fn explore(&mut self, node: &mut SearchNode<P>) -> Result<()> {
        for _ in 0..self.tryouts {
            self.rollout(node)?;
        }
        debug!(
            "explored {} rollouts, node tally now {}",
            self.tryouts,
            node.outcome()
        );
        Ok(())
    }

    fn choose_move(&mut self, node: &mut SearchNode<P>) -> Result<usize> {
        let count = node.legal_move_count();
        if count == 0 {
            return Err(SearchError::IndexOutOfRange { index: 0, count: 0 });
        }
        for freedom in 0..count {
            node.expand(freedom)?;
        }

        let scored: Vec<_> = node
            .expanded()
            .map(|(freedom, child)| (freedom, node.child_outcome(child)))
            .collect();

        let total = 1 + scored.iter().map(|(_, o)| o.total()).sum::<u64>();
        let t = 2.0 * (total as f64).ln();

        let mut best: Vec<usize> = Vec::new();
        let mut best_cost = f64::NEG_INFINITY;
        for (freedom, outcome) in scored {
            let n = (1 + outcome.total()) as f64;
            let cost = (outcome.wins as f64 - outcome.losses as f64) / n + (t / n).sqrt();
            if best.is_empty() || cost > best_cost {
                best.clear();
                best.push(freedom);
                best_cost = cost;
            } else if cost == best_cost {
                best.push(freedom);
            }
        }

        Ok(*best
            .choose(&mut rand::thread_rng())
            .expect("at least one legal move scored"))
    }
}
