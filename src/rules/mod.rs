//! Scoring rules for 21-point, best-of-three badminton.
//!
//! The rules are pure functions of scores and set counts. The match
//! store calls into them to validate actions and to derive what the
//! scoreboard shows; nothing here holds state.

pub mod engine;

pub use engine::{
    classify_game_state, game_winner, is_doubles_format, match_winner, serve_side, GameState,
    ServeSide, DEUCE_THRESHOLD, FINAL_POINT_SCORE, MAX_DEUCE_POINTS, MAX_POINTS, SETS_TO_WIN,
};
