//! Plain-text rendering, as a `Display` impl on `GameState`.

use std::fmt;

use crate::core::GameState;

/// Three-line layout matching the physical board: North's pits reversed on
/// top, the two stores on the middle line, South's pits on the bottom.
impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.board();
        write!(f, "  ")?;
        for slot in (7..13).rev() {
            write!(f, " {}", board[slot])?;
        }
        writeln!(f)?;
        writeln!(f, "{}\t\t  {}", board[13], board[6])?;
        write!(f, "  ")?;
        for slot in 0..6 {
            write!(f, " {}", board[slot])?;
        }
        Ok(())
    }
}
