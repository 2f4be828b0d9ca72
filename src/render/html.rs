//! HTML table rendering.
//!
//! The table mirrors the physical board: North's pits run right-to-left
//! along the top row with North's store on the left, South's pits run
//! left-to-right along the bottom with South's store on the right. Both
//! stores span the two rows.

use crate::core::{GameState, MoveError, Player};

/// Render the current board as a two-row HTML table.
#[must_use]
pub fn board_table(state: &GameState) -> String {
    let board = state.board();
    let north: String = (7..13)
        .rev()
        .map(|slot| format!("<td>{}</td>", board[slot]))
        .collect();
    let south: String = (0..6)
        .map(|slot| format!("<td>{}</td>", board[slot]))
        .collect();
    format!(
        "<table class=\"mancala\">\n<tr><td rowspan=\"2\">{}</td>{}<td rowspan=\"2\">{}</td></tr>\n<tr>{}</tr></table>\n",
        board.store(Player::North),
        north,
        board.store(Player::South),
        south,
    )
}

/// Replay a textual trace from the standard start and render the result.
pub fn replay_table(trace: &str) -> Result<String, MoveError> {
    Ok(board_table(&GameState::replay_trace(trace)?))
}
