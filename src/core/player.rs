//! Player identification and board-side arithmetic.

use serde::{Deserialize, Serialize};

use super::moves::Move;

/// One of the two players, named for the side of the board they own.
///
/// South owns slots 0–5 with the store at 6 and moves first; North owns
/// slots 7–12 with the store at 13.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    South,
    North,
}

impl Player {
    /// The opposing player.
    ///
    /// ```
    /// use rust_mancala::Player;
    ///
    /// assert_eq!(Player::South.opponent(), Player::North);
    /// assert_eq!(Player::North.opponent(), Player::South);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::South => Player::North,
            Player::North => Player::South,
        }
    }

    /// The raw side index (0 for South, 1 for North).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::South => 0,
            Player::North => 1,
        }
    }

    /// The slot index of this player's store.
    #[must_use]
    pub const fn store(self) -> usize {
        self.index() * 7 + 6
    }

    /// The slot index of this player's pit for a move offset.
    #[must_use]
    pub const fn pit(self, mv: Move) -> usize {
        self.index() * 7 + mv.index()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::South => write!(f, "South"),
            Player::North => write!(f, "North"),
        }
    }
}
