//! Depth-limited minimax with alpha-beta pruning.
//!
//! South maximizes, North minimizes. Scores are absolute: a forced South
//! win is always `WIN_SCORE` no matter whose turn the search starts on.
//! Repeated positions are cached in a transposition table keyed by
//! `GameState::state_key`, with exact/lower/upper bound entries so cached
//! windows stay sound under pruning.

use rustc_hash::FxHashMap;

use crate::core::{Board, GameResult, GameState, Move, Player, SLOT_COUNT};

use super::Agent;

/// Score of a position South has won.
pub const WIN_SCORE: i32 = 2_000;

/// Score of a position North has won.
pub const LOSS_SCORE: i32 = -2_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Clone, Copy, Debug)]
struct TableEntry {
    depth: u32,
    score: i32,
    bound: Bound,
}

/// Minimax player with alpha-beta pruning and a transposition table.
///
/// Deterministic: no randomness, stable move ordering. The table persists
/// across calls, so repeated searches of the same game speed up.
#[derive(Clone, Debug)]
pub struct AlphaBetaPlayer {
    max_depth: u32,
    table: FxHashMap<u64, TableEntry>,
}

impl AlphaBetaPlayer {
    /// Create a player searching to the given depth in plies.
    #[must_use]
    pub fn new(max_depth: u32) -> Self {
        assert!(max_depth > 0, "Search depth must be at least 1");
        Self {
            max_depth,
            table: FxHashMap::default(),
        }
    }

    fn alpha_beta(&mut self, state: &mut GameState, depth: u32, mut alpha: i32, mut beta: i32) -> i32 {
        if let Some(result) = state.winner() {
            return match result {
                GameResult::Winner(Player::South) => WIN_SCORE,
                GameResult::Winner(Player::North) => LOSS_SCORE,
                GameResult::Draw => 0,
            };
        }
        if depth == 0 {
            return heuristic(state);
        }

        let alpha_in = alpha;
        let beta_in = beta;
        let key = state.state_key();
        if let Some(entry) = self.table.get(&key) {
            if entry.depth >= depth {
                match entry.bound {
                    Bound::Exact => return entry.score,
                    Bound::Lower => alpha = alpha.max(entry.score),
                    Bound::Upper => beta = beta.min(entry.score),
                }
                if alpha >= beta {
                    return entry.score;
                }
            }
        }

        let maximizing = state.turn() == Player::South;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        for mv in state.legal_moves() {
            state
                .apply_move(mv)
                .expect("legal_moves only yields applicable moves");
            let score = self.alpha_beta(state, depth - 1, alpha, beta);
            state.undo();

            if maximizing {
                best_score = best_score.max(score);
                alpha = alpha.max(score);
            } else {
                best_score = best_score.min(score);
                beta = beta.min(score);
            }
            if alpha >= beta {
                break;
            }
        }

        let bound = if best_score <= alpha_in {
            Bound::Upper
        } else if best_score >= beta_in {
            Bound::Lower
        } else {
            Bound::Exact
        };
        let entry = TableEntry {
            depth,
            score: best_score,
            bound,
        };
        self.table
            .entry(key)
            .and_modify(|existing| {
                if depth >= existing.depth {
                    *existing = entry;
                }
            })
            .or_insert(entry);

        best_score
    }
}

impl Agent for AlphaBetaPlayer {
    fn pick_move(&mut self, state: &GameState) -> Option<Move> {
        if state.is_over() {
            return None;
        }
        // The root loop stays outside alpha_beta so a transposition hit can
        // never swallow the move that produced the cached score.
        let mut scratch = state.clone();
        let maximizing = scratch.turn() == Player::South;
        let mut alpha = i32::MIN;
        let mut beta = i32::MAX;
        let mut best: Option<(Move, i32)> = None;
        for mv in scratch.legal_moves() {
            scratch
                .apply_move(mv)
                .expect("legal_moves only yields applicable moves");
            let score = self.alpha_beta(&mut scratch, self.max_depth - 1, alpha, beta);
            scratch.undo();

            let better = match best {
                None => true,
                Some((_, s)) => {
                    if maximizing {
                        score > s
                    } else {
                        score < s
                    }
                }
            };
            if better {
                best = Some((mv, score));
            }
            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
        }
        best.map(|(mv, _)| mv)
    }
}

/// Static evaluation from South's point of view.
///
/// Store differential dominates, stones still in play break ties, and a
/// scan of the mover's capture threats rewards tactical pressure. A store
/// holding more than half the stones is a clinched win.
fn heuristic(state: &GameState) -> i32 {
    let board = state.board();
    let south_store = board.store(Player::South) as i32;
    let north_store = board.store(Player::North) as i32;
    let half = (board.total() / 2) as i32;

    if south_store > half {
        return WIN_SCORE - 1;
    }
    if north_store > half {
        return LOSS_SCORE + 1;
    }

    let mut score = (south_store - north_store) * 15;
    score += board.side_total(Player::South) as i32;
    score -= board.side_total(Player::North) as i32;

    let mover = state.turn();
    let sign = if mover == Player::South { 1 } else { -1 };
    for mv in Move::ALL {
        let source = mover.pit(mv);
        let mut stones = board[source];
        if stones == 0 {
            continue;
        }
        // Walk the sow to find where the last stone would land.
        let mut slot = source;
        while stones > 0 {
            if (slot == 5 && mover == Player::North) || (slot == 12 && mover == Player::South) {
                slot += 2;
            } else {
                slot += 1;
            }
            slot %= SLOT_COUNT;
            stones -= 1;
        }
        if slot == mover.store() {
            continue;
        }
        let side = if slot < 7 { Player::South } else { Player::North };
        if side == mover && board[slot] == 0 && board[Board::across(slot)] > 0 {
            score += sign * (board[Board::across(slot)] as i32 + 1);
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(offset: u8) -> Move {
        Move::new(offset).unwrap()
    }

    #[test]
    fn test_heuristic_start_is_balanced_except_threats() {
        let state = GameState::new();
        // From the standard start the only asymmetry is South's threat scan.
        assert!(heuristic(&state) >= 0);
    }

    #[test]
    fn test_heuristic_prefers_fuller_store() {
        let ahead = GameState::from_board(
            Board::from_slots([4, 4, 4, 4, 4, 4, 10, 4, 4, 4, 4, 4, 4, 0]),
            Player::South,
        );
        let behind = GameState::from_board(
            Board::from_slots([4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 10]),
            Player::South,
        );

        assert!(heuristic(&ahead) > heuristic(&behind));
    }

    #[test]
    fn test_heuristic_clinched_win() {
        let state = GameState::from_board(
            Board::from_slots([1, 0, 0, 0, 0, 0, 25, 4, 4, 4, 4, 4, 2, 0]),
            Player::North,
        );

        assert_eq!(heuristic(&state), WIN_SCORE - 1);
    }

    #[test]
    fn test_depth_one_takes_capture() {
        let board = Board::from_slots([1, 0, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0]);
        let state = GameState::from_board(board, Player::South);
        let mut player = AlphaBetaPlayer::new(1);

        assert_eq!(player.pick_move(&state), Some(mv(0)));
    }

    #[test]
    fn test_finds_winning_move() {
        // South's lone stone reaches the store, empties the row, and wins
        // 25 to 23 after the sweep.
        let board = Board::from_slots([0, 0, 0, 0, 0, 1, 24, 2, 2, 2, 2, 1, 1, 13]);
        let state = GameState::from_board(board, Player::South);

        for depth in [1, 4] {
            let mut player = AlphaBetaPlayer::new(depth);
            assert_eq!(player.pick_move(&state), Some(mv(5)));
        }
    }

    #[test]
    fn test_deterministic() {
        let state = GameState::new();
        let mut a = AlphaBetaPlayer::new(5);
        let mut b = AlphaBetaPlayer::new(5);

        assert_eq!(a.pick_move(&state), b.pick_move(&state));
        // A warm transposition table must not change the answer.
        assert_eq!(a.pick_move(&state), b.pick_move(&state));
    }

    #[test]
    fn test_only_picks_legal_moves() {
        let mut player = AlphaBetaPlayer::new(3);
        let mut state = GameState::new();

        for _ in 0..30 {
            let Some(mv) = player.pick_move(&state) else {
                assert!(state.is_over());
                break;
            };
            assert!(state.is_legal(mv));
            state.apply_move(mv).unwrap();
        }
    }

    #[test]
    fn test_no_move_when_over() {
        let board = Board::from_slots([0, 0, 0, 0, 0, 0, 30, 0, 0, 0, 0, 0, 0, 18]);
        let state = GameState::from_board(board, Player::South);
        let mut player = AlphaBetaPlayer::new(3);

        assert_eq!(player.pick_move(&state), None);
    }
}
