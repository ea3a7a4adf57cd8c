//! Trait defining the position interface required by the search engine
//!
//! The [`Position`] trait is the only view the engine has of a game. Any
//! alternating two-player, perfect-information game can plug into the same
//! search tree by implementing it.

use std::fmt::Debug;

use crate::Result;

/// Capability interface a concrete game position must satisfy
///
/// The engine never inspects a position beyond these three operations, and
/// it relies on their determinism: as long as the position itself does not
/// change, repeated calls must behave identically.
pub trait Position: Sized {
    /// The game's native move encoding (for connect four, a column index)
    type Move: Clone + Debug + PartialEq;

    /// Returns the moves legal in this position
    ///
    /// The order of the returned sequence is a contract: the engine
    /// addresses moves by their index into this list (the freedom index),
    /// so the ordering must be stable for an unchanged position.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Applies a move, returning the successor position
    ///
    /// Must be pure: the receiver is not modified, and the successor owns
    /// its own state. Fails with [`SearchError::InvalidMove`] when the move
    /// is not in the legal set.
    ///
    /// [`SearchError::InvalidMove`]: crate::SearchError::InvalidMove
    fn apply(&self, mv: &Self::Move) -> Result<Self>;

    /// Reports whether `mv` completed a win
    ///
    /// Evaluated on the position *after* `mv` was applied, i.e. the
    /// receiver is the successor and `mv` is the move that produced it.
    fn is_winning_move(&self, mv: &Self::Move) -> bool;
}
