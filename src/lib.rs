//! # rust-mancala
//!
//! A Mancala (Kalah) game engine built around trace replay: fold a
//! sequence of pit selections into a final board, then hand the board to
//! a renderer or a search player.
//!
//! ## Design Principles
//!
//! 1. **Explicit state**: a simulation is one owned `GameState` value.
//!    No globals; concurrent simulations never share mutable data.
//!
//! 2. **Validated boundaries**: move tokens are checked when a `Move` is
//!    constructed, so the rules engine never sees an out-of-range pit.
//!
//! 3. **Rules in one place**: sowing, store skipping, captures, turn
//!    alternation, and the terminal sweep all live in
//!    [`GameState::apply_move`].
//!
//! ## Modules
//!
//! - `core`: board, moves, players, RNG, and the simulation engine
//! - `players`: move-selection strategies (random, alpha-beta minimax)
//! - `render`: HTML table and plain-text board rendering
//!
//! ## Example
//!
//! ```
//! use rust_mancala::{GameState, Player};
//!
//! let state = GameState::replay_trace("25").unwrap();
//! assert_eq!(state.turn(), Player::North);
//! assert_eq!(state.board().total(), 48);
//! ```

pub mod core;
pub mod players;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    Board, GameResult, GameRng, GameRngState, GameState, Move, MoveError, Player,
    PITS_PER_SIDE, SLOT_COUNT, STARTING_STONES,
};

pub use crate::players::{Agent, AlphaBetaPlayer, RandomPlayer};

pub use crate::render::{board_table, replay_table};
