//! End-to-end trace replay tests.

use rust_mancala::{GameResult, GameState, Move, MoveError, Player};

// =============================================================================
// Opening Scenarios
// =============================================================================

#[test]
fn test_opening_into_store_keeps_turn() {
    let state = GameState::replay_trace("2").unwrap();

    assert_eq!(
        state.board().slots(),
        &[4, 4, 0, 5, 5, 5, 1, 4, 4, 4, 4, 4, 4, 0]
    );
    assert_eq!(state.turn(), Player::South);
    assert!(!state.is_over());
}

#[test]
fn test_opening_past_store_flips_turn() {
    let state = GameState::replay_trace("5").unwrap();

    assert_eq!(
        state.board().slots(),
        &[4, 4, 4, 4, 4, 0, 1, 5, 5, 5, 4, 4, 4, 0]
    );
    assert_eq!(state.turn(), Player::North);
}

// =============================================================================
// Full Game
// =============================================================================

/// A complete game: South double-moves into a capture on move four, North
/// claws back with a capture that empties its own row, and the sweep hands
/// South the rest of the board, 41 to 7.
const FULL_GAME: &str = "25201212304505";

#[test]
fn test_full_game_to_sweep() {
    let state = GameState::replay_trace(FULL_GAME).unwrap();

    assert!(state.is_over());
    assert_eq!(
        state.board().slots(),
        &[0, 0, 0, 0, 0, 0, 41, 0, 0, 0, 0, 0, 0, 7]
    );
    assert_eq!(state.winner(), Some(GameResult::Winner(Player::South)));
    assert_eq!(state.trace_string(), FULL_GAME);
}

#[test]
fn test_full_game_midpoint() {
    let state = GameState::replay_trace("2520").unwrap();

    // South's fourth move landed in its empty pit 5 and captured pit 7.
    assert_eq!(
        state.board().slots(),
        &[0, 5, 1, 6, 6, 0, 8, 0, 5, 0, 6, 5, 5, 1]
    );
    assert_eq!(state.turn(), Player::North);
}

#[test]
fn test_conservation_through_full_game() {
    let mut state = GameState::new();
    for mv in Move::parse_trace(FULL_GAME).unwrap() {
        state.apply_move(mv).unwrap();
        assert_eq!(state.board().total(), 48);
    }
}

#[test]
fn test_stores_never_shrink() {
    let mut state = GameState::new();
    let mut south = 0;
    let mut north = 0;
    for mv in Move::parse_trace(FULL_GAME).unwrap() {
        state.apply_move(mv).unwrap();
        assert!(state.board().store(Player::South) >= south);
        assert!(state.board().store(Player::North) >= north);
        south = state.board().store(Player::South);
        north = state.board().store(Player::North);
    }
}

#[test]
fn test_moves_past_the_sweep_are_inert() {
    let finished = GameState::replay_trace(FULL_GAME).unwrap();
    let overshot = GameState::replay_trace(&format!("{FULL_GAME}305")).unwrap();

    assert_eq!(overshot.board(), finished.board());
    assert_eq!(overshot.winner(), finished.winner());
    assert_eq!(overshot.trace().len(), finished.trace().len() + 3);
}

#[test]
fn test_undo_rewinds_to_start() {
    let mut state = GameState::replay_trace(FULL_GAME).unwrap();

    let mut undone = 0;
    while state.undo() {
        undone += 1;
    }

    assert_eq!(undone, FULL_GAME.len());
    assert_eq!(state, GameState::new());
}

// =============================================================================
// Rejected Traces
// =============================================================================

#[test]
fn test_out_of_range_digit_rejected() {
    assert_eq!(
        GameState::replay_trace("29"),
        Err(MoveError::OutOfRange { value: 9 })
    );
}

#[test]
fn test_non_digit_rejected() {
    assert_eq!(
        GameState::replay_trace("2a"),
        Err(MoveError::BadToken { token: 'a' })
    );
}

#[test]
fn test_empty_pit_move_rejected() {
    // Pit 2 was just emptied and the extra turn means South moves again.
    assert_eq!(
        GameState::replay_trace("22"),
        Err(MoveError::EmptyPit { pit: 2 })
    );
}

#[test]
fn test_empty_trace_is_initial_position() {
    let state = GameState::replay_trace("").unwrap();

    assert_eq!(state, GameState::new());
    assert_eq!(state.board().slots(), &[4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0]);
}
