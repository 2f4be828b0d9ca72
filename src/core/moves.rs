//! Move representation and the error taxonomy for applying moves.
//!
//! A move is a pit offset relative to the mover's own row, so both players
//! pick from the same range `0..6`. Construction validates the range up
//! front; the engine never sees an offset that could index outside a row.

use serde::{Deserialize, Serialize};

use super::board::PITS_PER_SIDE;

/// A validated pit selection: an offset in `0..6` into the mover's row.
///
/// ## Example
///
/// ```
/// use rust_mancala::{Move, MoveError};
///
/// let mv = Move::new(2).unwrap();
/// assert_eq!(mv.index(), 2);
/// assert_eq!(Move::new(6), Err(MoveError::OutOfRange { value: 6 }));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move(u8);

impl Move {
    /// All six pit offsets in order.
    pub const ALL: [Move; PITS_PER_SIDE] =
        [Move(0), Move(1), Move(2), Move(3), Move(4), Move(5)];

    /// Create a move, rejecting offsets outside `0..6`.
    pub fn new(offset: u8) -> Result<Self, MoveError> {
        if (offset as usize) < PITS_PER_SIDE {
            Ok(Self(offset))
        } else {
            Err(MoveError::OutOfRange { value: offset })
        }
    }

    /// The pit offset as an index into the mover's row.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Parse a textual trace, one digit per move, into a move sequence.
    ///
    /// ```
    /// use rust_mancala::Move;
    ///
    /// let moves = Move::parse_trace("250").unwrap();
    /// assert_eq!(moves.len(), 3);
    /// assert_eq!(moves[0].index(), 2);
    /// ```
    pub fn parse_trace(trace: &str) -> Result<Vec<Move>, MoveError> {
        trace.chars().map(Move::try_from).collect()
    }
}

impl TryFrom<u8> for Move {
    type Error = MoveError;

    fn try_from(offset: u8) -> Result<Self, Self::Error> {
        Move::new(offset)
    }
}

impl TryFrom<char> for Move {
    type Error = MoveError;

    fn try_from(token: char) -> Result<Self, Self::Error> {
        match token.to_digit(10) {
            Some(digit) => Move::new(digit as u8),
            None => Err(MoveError::BadToken { token }),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a move could not be applied.
///
/// Rule outcomes (captures, extra turns, the terminal sweep) are normal
/// control flow, not errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The move offset does not name one of the six pits.
    #[error("move offset {value} is outside 0..6")]
    OutOfRange { value: u8 },

    /// The selected pit holds no stones.
    #[error("pit {pit} is empty")]
    EmptyPit { pit: usize },

    /// A trace character is not a digit.
    #[error("trace token {token:?} is not a digit")]
    BadToken { token: char },
}
