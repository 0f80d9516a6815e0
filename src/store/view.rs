//! Read-only projection of a match for the presentation layer.
//!
//! A `ScoreboardView` answers every question a screen asks: names and
//! scores, who serves and from which court, which banner to show, and
//! which buttons are live. It is rebuilt from `MatchState` on demand.

use serde::{Deserialize, Serialize};

use crate::core::format::MatchFormat;
use crate::core::slot::{Slot, SlotPair};
use crate::core::state::{GameScore, MatchState};
use crate::rules::{self, GameState, ServeSide};

/// One side of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotView {
    pub name: String,
    pub score: u32,
    pub sets_won: u32,
    pub is_serving: bool,
    /// Court this slot would serve from at its current score.
    pub serve_side: ServeSide,
    pub is_game_winner: bool,
}

/// Everything the scoreboard renders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScoreboardView {
    pub started: bool,
    pub format: MatchFormat,
    pub format_name: &'static str,
    pub slots: SlotPair<SlotView>,
    pub server: Slot,
    pub game_state: GameState,
    /// Banner text for deuce, final point, game point, match point.
    pub alert: Option<&'static str>,
    pub game_winner: Option<Slot>,
    pub match_winner: Option<Slot>,
    /// One-based number of the game in progress.
    pub current_set: u32,
    pub can_score: bool,
    pub can_undo: bool,
    pub can_reset_game: bool,
    /// Game won, match not: the UI should offer "next game".
    pub awaiting_set_confirmation: bool,
    pub completed_games: Vec<GameScore>,
}

impl ScoreboardView {
    /// Derive the view from a state.
    #[must_use]
    pub fn from_state(state: &MatchState) -> Self {
        let game_state = state.game_state();
        let game_winner = state.game_winner();
        let match_winner = state.match_winner();
        let decided = state.is_decided();

        let slots = state.players().map(|slot, player| SlotView {
            name: player.name.clone(),
            score: player.score,
            sets_won: player.sets_won,
            is_serving: state.current_server() == slot,
            serve_side: rules::serve_side(player.score),
            is_game_winner: game_winner == Some(slot),
        });

        Self {
            started: state.is_started(),
            format: state.format(),
            format_name: state.format().display_name(),
            slots,
            server: state.current_server(),
            game_state,
            alert: game_state.label(),
            game_winner,
            match_winner,
            current_set: state.current_set(),
            can_score: !decided,
            can_undo: !decided && !state.history().is_empty(),
            can_reset_game: match_winner.is_none(),
            awaiting_set_confirmation: game_state == GameState::Winner && match_winner.is_none(),
            completed_games: state.completed_games().to_vec(),
        }
    }

    /// The serving slot's side of the board.
    #[must_use]
    pub fn serving(&self) -> &SlotView {
        &self.slots[self.server]
    }
}

impl From<&MatchState> for ScoreboardView {
    fn from(state: &MatchState) -> Self {
        Self::from_state(state)
    }
}
