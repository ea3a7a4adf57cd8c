//! Move-selection strategies for the search engine
//!
//! A [`Strategy`] drives both halves of a turn: `explore` grows the tree by
//! running simulated games, `advance` consults the gathered statistics and
//! commits to a move. The rollout procedure shared by every strategy lives
//! here as a provided method.

pub mod random;
pub mod uct;

pub use random::RandomStrategy;
pub use uct::UctStrategy;

use log::debug;

use crate::{outcome::Outcome, position::Position, tree::SearchNode, Result, SearchError};

/// A pluggable play strategy
///
/// For a given node: `explore` first, then `advance` to pick a move and
/// obtain the child that becomes the new current node. A strategy must be
/// used in one mode consistently per search; mixing rollout styles over the
/// same tree blends statistics gathered under different assumptions.
pub trait Strategy<P: Position> {
    /// Runs this strategy's exploration budget from `node`
    ///
    /// Each unit of budget is one rollout: a simulated game from `node` to
    /// a terminal position whose result is tallied along the visited path.
    fn explore(&mut self, node: &mut SearchNode<P>) -> Result<()>;

    /// Picks the best freedom index for real play
    fn choose_move(&mut self, node: &mut SearchNode<P>) -> Result<usize>;

    /// Picks a freedom index during a rollout
    ///
    /// Defaults to [`choose_move`], which makes deeper simulations
    /// progressively more informed; strategies with a cheaper simulation
    /// move (pure random, say) override this.
    ///
    /// [`choose_move`]: Strategy::choose_move
    fn rollout_move(&mut self, node: &mut SearchNode<P>) -> Result<usize> {
        self.choose_move(node)
    }

    /// Commits to a move: returns the chosen freedom index and the child
    /// node that becomes the new current node
    ///
    /// Fails with [`SearchError::DegenerateSelection`] when no exploration
    /// has recorded any statistics under `node` yet.
    fn advance(&mut self, node: SearchNode<P>) -> Result<(usize, SearchNode<P>)> {
        if node.sampled_total() == 0 {
            return Err(SearchError::DegenerateSelection);
        }

        let mut node = node;
        let freedom = self.choose_move(&mut node)?;
        debug!("advancing along freedom {freedom}");
        let child = node.into_child(freedom)?;
        Ok((freedom, child))
    }

    /// Runs one rollout from `node` and returns the delta tallied there
    ///
    /// Descends by repeatedly asking [`rollout_move`] for a freedom index
    /// and expanding it, until a terminal node is reached. The terminal
    /// node contributes its outcome clamped to a single unit and is not
    /// itself updated; every shallower node on the path accumulates the
    /// perspective-flipped delta of its child and hands the flipped value
    /// up, so exactly one unit of win/draw/loss reaches each ancestor,
    /// expressed from that ancestor's own side.
    ///
    /// [`rollout_move`]: Strategy::rollout_move
    fn rollout(&mut self, node: &mut SearchNode<P>) -> Result<Outcome> {
        if node.is_terminal() {
            return Ok(node.outcome().clamped_unit());
        }

        let freedom = self.rollout_move(node)?;
        let child_delta = {
            let child = node.expand(freedom)?;
            self.rollout(child)?
        };

        let delta = child_delta.flipped();
        node.accumulate(delta);
        Ok(delta)
    }
}
