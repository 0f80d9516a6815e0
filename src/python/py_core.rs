//! Conversions between Python strings and core types.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{MatchFormat, Slot};
use crate::rules::{GameState, ServeSide};

/// Parse `"A"` / `"B"` (case-insensitive).
pub fn parse_slot(slot: &str) -> PyResult<Slot> {
    match slot {
        "A" | "a" => Ok(Slot::A),
        "B" | "b" => Ok(Slot::B),
        other => Err(PyValueError::new_err(format!(
            "slot must be 'A' or 'B', got '{other}'"
        ))),
    }
}

/// Parse a snake-case format key such as `"mixed_doubles"`.
pub fn parse_format(format: &str) -> PyResult<MatchFormat> {
    MatchFormat::from_key(format)
        .ok_or_else(|| PyValueError::new_err(format!("unknown match format '{format}'")))
}

pub fn slot_str(slot: Slot) -> &'static str {
    match slot {
        Slot::A => "A",
        Slot::B => "B",
    }
}

pub fn game_state_str(state: GameState) -> &'static str {
    match state {
        GameState::Playing => "PLAYING",
        GameState::Deuce => "DEUCE",
        GameState::FinalPoint => "FINAL_POINT",
        GameState::GamePoint => "GAME_POINT",
        GameState::MatchPoint => "MATCH_POINT",
        GameState::Winner => "WINNER",
    }
}

pub fn serve_side_str(side: ServeSide) -> &'static str {
    match side {
        ServeSide::Left => "LEFT",
        ServeSide::Right => "RIGHT",
    }
}
