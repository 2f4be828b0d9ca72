//! Core engine types: board, moves, players, RNG, and game state.
//!
//! This module contains the simulation itself. Rendering lives in
//! `crate::render` and move-selection strategies in `crate::players`.

pub mod board;
pub mod moves;
pub mod player;
pub mod rng;
pub mod state;

pub use board::{Board, PITS_PER_SIDE, SLOT_COUNT, STARTING_STONES};
pub use moves::{Move, MoveError};
pub use player::Player;
pub use rng::{GameRng, GameRngState};
pub use state::{GameResult, GameState};
