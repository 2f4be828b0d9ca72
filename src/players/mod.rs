//! Move-selection strategies.
//!
//! Strategies are trait-based so hosts can mix opponents freely:
//! - `RandomPlayer`: uniform choice over legal moves, seeded
//! - `AlphaBetaPlayer`: depth-limited minimax with alpha-beta pruning

use crate::core::{GameState, Move};

pub mod minimax;
pub mod random;

pub use minimax::AlphaBetaPlayer;
pub use random::RandomPlayer;

/// A strategy that picks the next move for the player to act.
pub trait Agent {
    /// Pick a move for the current position.
    ///
    /// Returns `None` when the game is over and no move exists.
    fn pick_move(&mut self, state: &GameState) -> Option<Move>;
}
