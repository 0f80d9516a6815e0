//! Rules bindings for Python.

use pyo3::prelude::*;

use crate::rules;

use super::py_core::{game_state_str, parse_format, serve_side_str, slot_str};

/// Classify a game score: "PLAYING", "DEUCE", "FINAL_POINT",
/// "GAME_POINT", "MATCH_POINT" or "WINNER".
#[pyfunction]
#[pyo3(signature = (score_a, score_b, sets_a = 0, sets_b = 0))]
pub fn classify_game_state(score_a: u32, score_b: u32, sets_a: u32, sets_b: u32) -> &'static str {
    game_state_str(rules::classify_game_state(score_a, score_b, sets_a, sets_b))
}

/// "RIGHT" on an even score, "LEFT" on an odd one.
#[pyfunction]
pub fn serve_side(own_score: u32) -> &'static str {
    serve_side_str(rules::serve_side(own_score))
}

/// "A", "B" or None.
#[pyfunction]
pub fn match_winner(sets_a: u32, sets_b: u32) -> Option<&'static str> {
    rules::match_winner(sets_a, sets_b).map(slot_str)
}

/// "A", "B" or None.
#[pyfunction]
pub fn game_winner(score_a: u32, score_b: u32) -> Option<&'static str> {
    rules::game_winner(score_a, score_b).map(slot_str)
}

#[pyfunction]
pub fn is_doubles_format(format: &str) -> PyResult<bool> {
    Ok(rules::is_doubles_format(parse_format(format)?))
}
