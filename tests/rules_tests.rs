//! Scoring rules integration tests.
//!
//! These tests pin the classification table at its boundaries: ties,
//! the 21-point two-point lead, the 29-all final point, and the 30 cap.

use badminton_scoreboard::core::{MatchFormat, Slot};
use badminton_scoreboard::rules::{
    classify_game_state, game_winner, is_doubles_format, match_winner, serve_side, GameState,
    ServeSide, MAX_DEUCE_POINTS,
};

// =============================================================================
// Tied Scores
// =============================================================================

/// Every tie classifies by its level alone.
#[test]
fn test_all_ties() {
    for s in 0..=29 {
        let expected = match s {
            0..=19 => GameState::Playing,
            20..=28 => GameState::Deuce,
            _ => GameState::FinalPoint,
        };
        for sets in [(0, 0), (1, 0), (1, 1)] {
            assert_eq!(classify_game_state(s, s, sets.0, sets.1), expected, "{s}-{s} sets {sets:?}");
        }
    }
}

// =============================================================================
// Winners
// =============================================================================

#[test]
fn test_winning_scores() {
    assert_eq!(classify_game_state(21, 19, 0, 0), GameState::Winner);
    assert_eq!(classify_game_state(22, 20, 1, 1), GameState::Winner);
    assert_eq!(classify_game_state(30, 29, 0, 1), GameState::Winner);
    assert_ne!(classify_game_state(29, 28, 0, 0), GameState::Winner);
}

/// Any score at the cap is a win, whatever the lead.
#[test]
fn test_cap_always_wins() {
    for other in 0..MAX_DEUCE_POINTS {
        assert_eq!(classify_game_state(MAX_DEUCE_POINTS, other, 0, 0), GameState::Winner);
        assert_eq!(game_winner(other, MAX_DEUCE_POINTS), Some(Slot::B));
    }
}

/// Below 21 nobody wins, however big the lead.
#[test]
fn test_no_winner_below_21() {
    for a in 0..21 {
        for b in 0..21 {
            assert_ne!(classify_game_state(a, b, 0, 0), GameState::Winner, "{a}-{b}");
        }
    }
}

// =============================================================================
// Alerts
// =============================================================================

#[test]
fn test_game_point_and_match_point() {
    assert_eq!(classify_game_state(20, 19, 0, 0), GameState::GamePoint);
    assert_eq!(classify_game_state(20, 19, 1, 0), GameState::MatchPoint);
    assert_eq!(classify_game_state(19, 20, 1, 0), GameState::GamePoint);
    assert_eq!(classify_game_state(5, 20, 1, 1), GameState::MatchPoint);
    assert_eq!(classify_game_state(20, 0, 0, 0), GameState::GamePoint);
}

/// With both slots on 20 or more, a one-point lead is still deuce.
#[test]
fn test_lead_past_20_all_is_deuce() {
    assert_eq!(classify_game_state(21, 20, 1, 0), GameState::Deuce);
    assert_eq!(classify_game_state(29, 28, 0, 0), GameState::Deuce);
    assert_eq!(classify_game_state(23, 24, 1, 1), GameState::Deuce);
}

// =============================================================================
// Serve Side, Match Winner, Formats
// =============================================================================

#[test]
fn test_serve_side_parity() {
    assert_eq!(serve_side(0), ServeSide::Right);
    assert_eq!(serve_side(1), ServeSide::Left);
    assert_eq!(serve_side(30), ServeSide::Right);
    assert_eq!(serve_side(29), ServeSide::Left);
}

#[test]
fn test_match_winner_table() {
    assert_eq!(match_winner(0, 0), None);
    assert_eq!(match_winner(1, 1), None);
    assert_eq!(match_winner(2, 0), Some(Slot::A));
    assert_eq!(match_winner(2, 1), Some(Slot::A));
    assert_eq!(match_winner(1, 2), Some(Slot::B));
}

#[test]
fn test_doubles_formats() {
    let doubles: Vec<_> = MatchFormat::ALL
        .into_iter()
        .filter(|f| is_doubles_format(*f))
        .collect();

    assert_eq!(
        doubles,
        vec![MatchFormat::MensDoubles, MatchFormat::WomensDoubles, MatchFormat::MixedDoubles]
    );
}
