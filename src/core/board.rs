//! The Mancala board: 14 slots holding stone counts.
//!
//! ## Layout
//!
//! Slots are indexed clockwise from South's leftmost pit:
//! - 0–5: South's pits
//! - 6: South's store
//! - 7–12: North's pits
//! - 13: North's store
//!
//! Stones are only ever moved between slots, never created or destroyed,
//! so the total across all 14 slots stays constant for the life of a game.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::player::Player;

/// Number of slots on the board: six pits and a store per side.
pub const SLOT_COUNT: usize = 14;

/// Playable pits per side.
pub const PITS_PER_SIDE: usize = 6;

/// Stones in each pit at the standard start.
pub const STARTING_STONES: u8 = 4;

/// A Mancala board as a flat array of stone counts.
///
/// ## Example
///
/// ```
/// use rust_mancala::{Board, Player};
///
/// let board = Board::new();
/// assert_eq!(board.total(), 48);
/// assert_eq!(board.store(Player::South), 0);
/// assert_eq!(board[0], 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    slots: [u8; SLOT_COUNT],
}

impl Board {
    /// Create a board with the standard starting layout: four stones in each
    /// of the twelve pits, both stores empty.
    #[must_use]
    pub fn new() -> Self {
        Self::with_stones(STARTING_STONES)
    }

    /// Create a board with `stones` in each pit instead of the standard four.
    ///
    /// Panics if `stones` is zero or the board total would not fit a slot.
    #[must_use]
    pub fn with_stones(stones: u8) -> Self {
        assert!(stones > 0, "Each pit must start with at least 1 stone");
        assert!(
            stones as usize * 2 * PITS_PER_SIDE <= u8::MAX as usize,
            "Board total must fit in a single slot"
        );

        let mut slots = [stones; SLOT_COUNT];
        slots[Player::South.store()] = 0;
        slots[Player::North.store()] = 0;
        Self { slots }
    }

    /// Create a board from explicit slot counts.
    #[must_use]
    pub fn from_slots(slots: [u8; SLOT_COUNT]) -> Self {
        Self { slots }
    }

    /// All 14 slot counts in index order.
    #[must_use]
    pub fn slots(&self) -> &[u8; SLOT_COUNT] {
        &self.slots
    }

    /// A player's six pits in index order.
    #[must_use]
    pub fn pits(&self, player: Player) -> &[u8] {
        let start = player.index() * (PITS_PER_SIDE + 1);
        &self.slots[start..start + PITS_PER_SIDE]
    }

    /// A player's store count.
    #[must_use]
    pub fn store(&self, player: Player) -> u8 {
        self.slots[player.store()]
    }

    /// Total stones in a player's six pits (excludes the store).
    #[must_use]
    pub fn side_total(&self, player: Player) -> u8 {
        self.pits(player).iter().map(|&s| s as u16).sum::<u16>() as u8
    }

    /// Total stones on the board, stores included.
    #[must_use]
    pub fn total(&self) -> u16 {
        self.slots.iter().map(|&s| s as u16).sum()
    }

    /// The pit directly opposite a pit slot. Not defined for stores.
    #[must_use]
    pub const fn across(slot: usize) -> usize {
        12 - slot
    }

    /// Sweep both sides' remaining pit stones into their stores.
    ///
    /// Runs when either side's pits are all empty; after the sweep every
    /// pit is zero and the game cannot change further.
    pub(crate) fn sweep(&mut self) {
        for player in [Player::South, Player::North] {
            let remaining = self.side_total(player);
            self.slots[player.store()] += remaining;
            let start = player.index() * (PITS_PER_SIDE + 1);
            for slot in start..start + PITS_PER_SIDE {
                self.slots[slot] = 0;
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Board {
    type Output = u8;

    fn index(&self, slot: usize) -> &u8 {
        &self.slots[slot]
    }
}

impl IndexMut<usize> for Board {
    fn index_mut(&mut self, slot: usize) -> &mut u8 {
        &mut self.slots[slot]
    }
}
