//! Uniform random move selection.

use crate::core::{GameRng, GameState, Move};

use super::Agent;

/// Picks uniformly among legal moves using a seeded RNG.
///
/// The same seed always produces the same sequence of picks, which keeps
/// random-opponent playouts reproducible.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    /// Create a player with the given RNG seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Agent for RandomPlayer {
    fn pick_move(&mut self, state: &GameState) -> Option<Move> {
        let moves = state.legal_moves();
        self.rng.choose(&moves).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_picks_legal_moves() {
        let mut player = RandomPlayer::new(7);
        let mut state = GameState::new();

        for _ in 0..50 {
            let Some(mv) = player.pick_move(&state) else {
                assert!(state.is_over());
                break;
            };
            assert!(state.is_legal(mv));
            state.apply_move(mv).unwrap();
        }
    }

    #[test]
    fn test_deterministic_per_seed() {
        let mut a = RandomPlayer::new(42);
        let mut b = RandomPlayer::new(42);
        let state = GameState::new();

        for _ in 0..20 {
            assert_eq!(a.pick_move(&state), b.pick_move(&state));
        }
    }

    #[test]
    fn test_no_move_when_over() {
        use crate::core::{Board, Player};

        let board = Board::from_slots([0, 0, 0, 0, 0, 0, 24, 0, 0, 0, 0, 0, 0, 24]);
        let state = GameState::from_board(board, Player::South);
        let mut player = RandomPlayer::new(1);

        assert_eq!(player.pick_move(&state), None);
    }
}
