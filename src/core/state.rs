//! Match state: the single entity the scoreboard displays.
//!
//! ## MatchState
//!
//! Everything needed to redraw the board or resume after a restart:
//! - Setup (started flag, format, names, doubles rosters)
//! - Current game score and games won per slot
//! - Current server
//! - Point history for undo (current game only)
//! - Final scores of confirmed games
//!
//! Derived values (game state, winners, serve side) are recomputed from
//! the fields on every call and never stored.
//!
//! The point history is an `im::Vector`, so cloning a `MatchState` for a
//! listener snapshot is O(1) regardless of how long the game has run.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::default_player_name;
use super::format::{DoublesTeam, MatchFormat};
use super::slot::{Slot, SlotPair};
use crate::rules::{self, GameState, ServeSide};

/// One contestant's running totals.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerSlot {
    /// Scoreboard name (player, or `"p1 / p2"` for a doubles pair).
    pub name: String,

    /// Points in the current game (0-30).
    pub score: u32,

    /// Games won this match (0-2).
    pub sets_won: u32,
}

impl PlayerSlot {
    /// Fresh slot with zero points and games.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            sets_won: 0,
        }
    }
}

/// Snapshot taken before a point is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub score_a_before: u32,
    pub score_b_before: u32,
    pub server_before: Slot,
}

/// Final score of a confirmed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameScore {
    pub score_a: u32,
    pub score_b: u32,
}

impl GameScore {
    #[must_use]
    pub const fn new(score_a: u32, score_b: u32) -> Self {
        Self { score_a, score_b }
    }
}

/// Completed games fit inline: a best-of-three never exceeds three.
pub type CompletedGames = SmallVec<[GameScore; 3]>;

/// The live match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub(crate) started: bool,
    pub(crate) format: MatchFormat,
    pub(crate) players: SlotPair<PlayerSlot>,
    pub(crate) teams: SlotPair<Option<DoublesTeam>>,
    pub(crate) current_server: Slot,
    pub(crate) history: Vector<HistoryEntry>,
    pub(crate) completed_games: CompletedGames,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// Pre-match defaults: not started, men's singles, `"Player A"` vs
    /// `"Player B"`, A to serve, everything zeroed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            started: false,
            format: MatchFormat::default(),
            players: SlotPair::from_fn(|slot| PlayerSlot::new(default_player_name(slot))),
            teams: SlotPair::default(),
            current_server: Slot::A,
            history: Vector::new(),
            completed_games: CompletedGames::new(),
        }
    }

    // === Setup ===

    /// Has `start_match` been called since the last `back_to_setup`?
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[must_use]
    pub fn format(&self) -> MatchFormat {
        self.format
    }

    /// Doubles roster for a slot, if one was entered.
    #[must_use]
    pub fn team(&self, slot: Slot) -> Option<&DoublesTeam> {
        self.teams[slot].as_ref()
    }

    // === Slots ===

    #[must_use]
    pub fn player(&self, slot: Slot) -> &PlayerSlot {
        &self.players[slot]
    }

    #[must_use]
    pub fn players(&self) -> &SlotPair<PlayerSlot> {
        &self.players
    }

    #[must_use]
    pub fn name(&self, slot: Slot) -> &str {
        &self.players[slot].name
    }

    #[must_use]
    pub fn score(&self, slot: Slot) -> u32 {
        self.players[slot].score
    }

    #[must_use]
    pub fn sets_won(&self, slot: Slot) -> u32 {
        self.players[slot].sets_won
    }

    #[must_use]
    pub fn current_server(&self) -> Slot {
        self.current_server
    }

    // === History ===

    /// Pre-point snapshots for the current game, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<HistoryEntry> {
        &self.history
    }

    /// Final scores of confirmed games, in play order.
    #[must_use]
    pub fn completed_games(&self) -> &[GameScore] {
        &self.completed_games
    }

    /// One-based number of the game in progress.
    #[must_use]
    pub fn current_set(&self) -> u32 {
        self.sets_won(Slot::A) + self.sets_won(Slot::B) + 1
    }

    // === Derived ===

    /// Classification of the current game score.
    #[must_use]
    pub fn game_state(&self) -> GameState {
        rules::classify_game_state(
            self.score(Slot::A),
            self.score(Slot::B),
            self.sets_won(Slot::A),
            self.sets_won(Slot::B),
        )
    }

    /// Winner of the current game, if decided.
    #[must_use]
    pub fn game_winner(&self) -> Option<Slot> {
        rules::game_winner(self.score(Slot::A), self.score(Slot::B))
    }

    /// Winner of the match, if decided.
    #[must_use]
    pub fn match_winner(&self) -> Option<Slot> {
        rules::match_winner(self.sets_won(Slot::A), self.sets_won(Slot::B))
    }

    /// Court the current server serves from.
    #[must_use]
    pub fn serve_side(&self) -> ServeSide {
        rules::serve_side(self.score(self.current_server))
    }

    /// True when the game or match is over and scoring is frozen.
    #[must_use]
    pub fn is_decided(&self) -> bool {
        self.match_winner().is_some() || self.game_state() == GameState::Winner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_state_defaults() {
        let state = MatchState::new();

        assert!(!state.is_started());
        assert_eq!(state.format(), MatchFormat::MensSingles);
        assert_eq!(state.name(Slot::A), "Player A");
        assert_eq!(state.name(Slot::B), "Player B");
        assert_eq!(state.current_server(), Slot::A);
        assert!(state.history().is_empty());
        assert!(state.completed_games().is_empty());
        assert!(state.team(Slot::A).is_none());
        assert_eq!(state.current_set(), 1);
    }

    #[test]
    fn test_derived_values() {
        let mut state = MatchState::new();
        state.players[Slot::A].score = 20;
        state.players[Slot::B].score = 17;
        state.players[Slot::A].sets_won = 1;
        state.current_server = Slot::A;

        assert_eq!(state.game_state(), GameState::MatchPoint);
        assert_eq!(state.serve_side(), ServeSide::Right);
        assert_eq!(state.game_winner(), None);
        assert_eq!(state.match_winner(), None);
        assert!(!state.is_decided());
        assert_eq!(state.current_set(), 2);

        state.players[Slot::A].score = 21;
        assert_eq!(state.game_winner(), Some(Slot::A));
        assert!(state.is_decided());
    }

    #[test]
    fn test_match_state_serialization() {
        let mut state = MatchState::new();
        state.started = true;
        state.history.push_back(HistoryEntry {
            score_a_before: 0,
            score_b_before: 0,
            server_before: Slot::A,
        });
        state.completed_games.push(GameScore::new(21, 15));

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: MatchState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
