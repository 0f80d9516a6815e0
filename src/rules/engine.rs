//! Badminton scoring rules.
//!
//! Every function here is pure: the same scores always give the same
//! answer and nothing is mutated. Inputs are assumed to be in range
//! (scores 0-30, sets 0-2); the store never produces anything else.
//!
//! - `classify_game_state`: alert/winner tag for the current score
//! - `game_winner`, `match_winner`: who, if anyone, has won
//! - `serve_side`: service court from the server's own score
//! - `is_doubles_format`: singles vs doubles events

use serde::{Deserialize, Serialize};

use crate::core::format::MatchFormat;
use crate::core::slot::Slot;

/// Points needed to win a game outright (with a two-point lead).
pub const MAX_POINTS: u32 = 21;

/// Hard cap: the first slot to reach this wins regardless of lead.
pub const MAX_DEUCE_POINTS: u32 = 30;

/// Games needed to win the match.
pub const SETS_TO_WIN: u32 = 2;

/// Score at which game point and deuce become possible.
pub const DEUCE_THRESHOLD: u32 = 20;

/// Tied score where the next rally decides the game.
pub const FINAL_POINT_SCORE: u32 = 29;

/// Classification of the current game score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    /// Normal play, nothing to announce.
    Playing,
    /// Tied at 20-all or above (below 29-all).
    Deuce,
    /// 29-all: next point wins the game.
    FinalPoint,
    /// Leader is one point from the game and has no game banked.
    GamePoint,
    /// Leader is one point from the game and already has one banked.
    MatchPoint,
    /// The game is over.
    Winner,
}

impl GameState {
    /// True for states the scoreboard announces with a banner.
    #[must_use]
    pub const fn is_alert(self) -> bool {
        matches!(
            self,
            GameState::Deuce | GameState::FinalPoint | GameState::GamePoint | GameState::MatchPoint
        )
    }

    /// Banner text, if this state has one.
    #[must_use]
    pub const fn label(self) -> Option<&'static str> {
        match self {
            GameState::Deuce => Some("DEUCE"),
            GameState::FinalPoint => Some("FINAL POINT"),
            GameState::GamePoint => Some("GAME POINT"),
            GameState::MatchPoint => Some("MATCH POINT"),
            GameState::Playing | GameState::Winner => None,
        }
    }
}

/// Service court. Derived from the server's score, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServeSide {
    Left,
    Right,
}

/// Classify a game score.
///
/// Checks run in a fixed order and the first match wins:
/// Winner, FinalPoint, Deuce, MatchPoint/GamePoint, Playing.
///
/// ```
/// use badminton_scoreboard::rules::{classify_game_state, GameState};
///
/// assert_eq!(classify_game_state(20, 19, 0, 0), GameState::GamePoint);
/// assert_eq!(classify_game_state(20, 19, 1, 0), GameState::MatchPoint);
/// assert_eq!(classify_game_state(29, 29, 1, 1), GameState::FinalPoint);
/// assert_eq!(classify_game_state(30, 29, 0, 0), GameState::Winner);
/// ```
#[must_use]
pub fn classify_game_state(score_a: u32, score_b: u32, sets_a: u32, sets_b: u32) -> GameState {
    let max = score_a.max(score_b);
    let diff = score_a.abs_diff(score_b);

    if max >= MAX_DEUCE_POINTS || (max >= MAX_POINTS && diff >= 2) {
        return GameState::Winner;
    }

    if score_a == FINAL_POINT_SCORE && score_b == FINAL_POINT_SCORE {
        return GameState::FinalPoint;
    }

    if score_a >= DEUCE_THRESHOLD && score_b >= DEUCE_THRESHOLD {
        return GameState::Deuce;
    }

    if max >= DEUCE_THRESHOLD && diff >= 1 {
        let leader_sets = if score_a > score_b { sets_a } else { sets_b };
        if leader_sets == SETS_TO_WIN - 1 {
            return GameState::MatchPoint;
        }
        return GameState::GamePoint;
    }

    GameState::Playing
}

/// Winner of the current game, if the score is decided.
#[must_use]
pub fn game_winner(score_a: u32, score_b: u32) -> Option<Slot> {
    if classify_game_state(score_a, score_b, 0, 0) != GameState::Winner {
        return None;
    }
    Some(if score_a > score_b { Slot::A } else { Slot::B })
}

/// Winner of the match, if either slot has banked enough games.
#[must_use]
pub fn match_winner(sets_a: u32, sets_b: u32) -> Option<Slot> {
    if sets_a >= SETS_TO_WIN {
        Some(Slot::A)
    } else if sets_b >= SETS_TO_WIN {
        Some(Slot::B)
    } else {
        None
    }
}

/// Service court for a server with `own_score` points: even serves from
/// the right, odd from the left.
#[must_use]
pub const fn serve_side(own_score: u32) -> ServeSide {
    if own_score % 2 == 0 {
        ServeSide::Right
    } else {
        ServeSide::Left
    }
}

/// True for the three doubles events.
#[must_use]
pub const fn is_doubles_format(format: MatchFormat) -> bool {
    matches!(
        format,
        MatchFormat::MensDoubles | MatchFormat::WomensDoubles | MatchFormat::MixedDoubles
    )
}
