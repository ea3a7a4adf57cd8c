//! Random-rollout baseline strategy

use log::debug;
use rand::Rng;

use crate::{position::Position, strategy::Strategy, tree::SearchNode, Result, SearchError};

/// Pure randomized exploration with a win-rate-plus-confidence final choice
///
/// Rollout moves are drawn uniformly from the legal set. The final move
/// maximizes `wins / n + sqrt(t / n)` over the children exploration has
/// actually visited, with `t = 2 ln N` and `N` the total number of
/// simulated games recorded under the node. Ties go to the first child
/// encountered, in freedom-index order; callers can rely on that.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    /// Number of rollouts per `explore` call
    tryouts: usize,
}

impl RandomStrategy {
    /// Creates a strategy playing `tryouts` random games per exploration
    pub fn new(tryouts: usize) -> Self {
        RandomStrategy { tryouts }
    }
}

impl<P: Position> Strategy<P> for RandomStrategy {
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

    fn rollout_move(&mut self, node: &mut SearchNode<P>) -> Result<usize> {
        match node.legal_move_count() {
            0 => Err(SearchError::IndexOutOfRange { index: 0, count: 0 }),
            count => Ok(rand::thread_rng().gen_range(0..count)),
        }
    }

    fn choose_move(&mut self, node: &mut SearchNode<P>) -> Result<usize> {
        let total = node.sampled_total();
        if total == 0 {
            return Err(SearchError::DegenerateSelection);
        }
        let t = 2.0 * (total as f64).ln();

        let mut best: Option<(usize, f64)> = None;
        for (freedom, child) in node.expanded() {
            let outcome = node.child_outcome(child);
            let n = outcome.total();
            if n == 0 {
                continue;
            }
            let n = n as f64;
            let cost = outcome.wins as f64 / n + (t / n).sqrt();
            if best.map_or(true, |(_, best_cost)| cost > best_cost) {
                best = Some((freedom, cost));
            }
        }

        best.map(|(freedom, _)| freedom)
            .ok_or(SearchError::DegenerateSelection)
    }
}
