//! Game state and the move-simulation engine.
//!
//! ## GameState
//!
//! Owns everything one simulation needs:
//! - The board and the player to move
//! - A terminal flag set by the end-of-game sweep
//! - An undo history of pre-move snapshots
//! - The trace of applied moves
//!
//! All rules live in [`GameState::apply_move`]: sowing, opponent-store
//! skipping, the capture rule, turn alternation, and terminal detection.
//! Two states never share mutable data; cloning yields an independent
//! simulation (the undo history shares structure via `im` persistently).

use im::Vector;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::hash::{Hash, Hasher};
use tracing::debug;

use super::board::{Board, PITS_PER_SIDE, SLOT_COUNT};
use super::moves::{Move, MoveError};
use super::player::Player;

/// Result of a finished game: the fuller store wins, equal stores draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Winner(Player),
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Pre-move snapshot for undo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Snapshot {
    board: Board,
    turn: Player,
}

/// A single Mancala simulation: board, turn, and replay bookkeeping.
///
/// ## Example
///
/// ```
/// use rust_mancala::{GameState, Player};
///
/// // South's opening move from pit 2 ends in the store: extra turn.
/// let state = GameState::replay_trace("2").unwrap();
/// assert_eq!(state.board().slots(), &[4, 4, 0, 5, 5, 5, 1, 4, 4, 4, 4, 4, 4, 0]);
/// assert_eq!(state.turn(), Player::South);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Player,
    game_over: bool,
    history: Vector<Snapshot>,
    trace: Vec<Move>,
}

impl GameState {
    /// Create a game at the standard start: four stones per pit, South to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::new(), Player::South)
    }

    /// Create a game with `stones` per pit instead of the standard four.
    #[must_use]
    pub fn with_stones(stones: u8) -> Self {
        Self::from_board(Board::with_stones(stones), Player::South)
    }

    /// Create a game from an arbitrary position.
    ///
    /// The terminal flag is derived from the board: a side with no stones
    /// in play means the game is already over.
    #[must_use]
    pub fn from_board(board: Board, turn: Player) -> Self {
        Self {
            game_over: Self::is_terminal(&board),
            board,
            turn,
            history: Vector::new(),
            trace: Vec::new(),
        }
    }

    /// Replay a move sequence from the standard start.
    pub fn replay(moves: impl IntoIterator<Item = Move>) -> Result<Self, MoveError> {
        let mut state = Self::new();
        state.apply_all(moves)?;
        Ok(state)
    }

    /// Replay a textual trace (one digit per move) from the standard start.
    pub fn replay_trace(trace: &str) -> Result<Self, MoveError> {
        Self::replay(Move::parse_trace(trace)?)
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Whether the terminal sweep has run.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// The applied moves, in order.
    #[must_use]
    pub fn trace(&self) -> &[Move] {
        &self.trace
    }

    /// The applied moves as a digit string.
    #[must_use]
    pub fn trace_string(&self) -> String {
        self.trace.iter().map(Move::to_string).collect()
    }

    /// Whether a move is legal: the game is still running and the mover's
    /// selected pit holds at least one stone.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        !self.game_over && self.board[self.turn.pit(mv)] > 0
    }

    /// All legal moves for the player to move.
    #[must_use]
    pub fn legal_moves(&self) -> SmallVec<[Move; PITS_PER_SIDE]> {
        Move::ALL.iter().copied().filter(|&mv| self.is_legal(mv)).collect()
    }

    /// The game's result, or `None` while it is still running.
    #[must_use]
    pub fn winner(&self) -> Option<GameResult> {
        if !self.game_over {
            return None;
        }
        let south = self.board.store(Player::South);
        let north = self.board.store(Player::North);
        Some(match south.cmp(&north) {
            std::cmp::Ordering::Greater => GameResult::Winner(Player::South),
            std::cmp::Ordering::Less => GameResult::Winner(Player::North),
            std::cmp::Ordering::Equal => GameResult::Draw,
        })
    }

    /// A 64-bit key over (board, turn) for transposition tables.
    #[must_use]
    pub fn state_key(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.board.hash(&mut hasher);
        self.turn.hash(&mut hasher);
        hasher.finish()
    }

    /// Apply a single move, mutating the board and turn in place.
    ///
    /// Rules, in order:
    /// 1. Empty the selected pit and sow its stones one per slot around the
    ///    14-slot ring, skipping the opponent's store.
    /// 2. If the last stone landed in the mover's own store the mover keeps
    ///    the turn; otherwise run the capture check and flip the turn.
    /// 3. If either side's pits are now all empty, sweep the remaining
    ///    stones into their owners' stores; the game is over.
    ///
    /// A move on a finished game is accepted and leaves every slot
    /// unchanged, so traces that run past the final sweep replay cleanly.
    /// Selecting an empty pit in a live game is an error and leaves the
    /// state untouched.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        if self.game_over {
            self.record(mv);
            return Ok(());
        }

        let mover = self.turn;
        let source = mover.pit(mv);
        if self.board[source] == 0 {
            return Err(MoveError::EmptyPit { pit: source });
        }
        self.record(mv);

        let mut slot = source;
        let mut stones = self.board[source];
        self.board[source] = 0;
        while stones > 0 {
            // Skip the opponent's store, otherwise advance one slot.
            if (slot == 5 && mover == Player::North) || (slot == 12 && mover == Player::South) {
                slot += 2;
            } else {
                slot += 1;
            }
            slot %= SLOT_COUNT;
            self.board[slot] += 1;
            stones -= 1;
        }

        if slot == Player::South.store() || slot == Player::North.store() {
            debug!(player = %mover, "last stone landed in own store, extra turn");
        } else {
            let side = if slot < 7 { Player::South } else { Player::North };
            let across = Board::across(slot);
            if side == mover && self.board[slot] == 1 && self.board[across] > 0 {
                let captured = 1 + self.board[across];
                self.board[mover.store()] += captured;
                self.board[slot] = 0;
                self.board[across] = 0;
                debug!(player = %mover, pit = slot, captured, "capture");
            }
            self.turn = mover.opponent();
        }

        if Self::is_terminal(&self.board) {
            self.board.sweep();
            self.game_over = true;
            debug!(
                south = self.board.store(Player::South),
                north = self.board.store(Player::North),
                "terminal sweep"
            );
        }
        Ok(())
    }

    /// Apply every move in a sequence, stopping at the first error.
    pub fn apply_all(&mut self, moves: impl IntoIterator<Item = Move>) -> Result<(), MoveError> {
        for mv in moves {
            self.apply_move(mv)?;
        }
        Ok(())
    }

    /// Undo the most recent move, restoring the pre-move board and turn.
    ///
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop_back() else {
            return false;
        };
        self.trace.pop();
        self.board = snapshot.board;
        self.turn = snapshot.turn;
        self.game_over = Self::is_terminal(&self.board);
        true
    }

    fn record(&mut self, mv: Move) {
        self.history.push_back(Snapshot {
            board: self.board,
            turn: self.turn,
        });
        self.trace.push(mv);
    }

    fn is_terminal(board: &Board) -> bool {
        board.side_total(Player::South) == 0 || board.side_total(Player::North) == 0
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
