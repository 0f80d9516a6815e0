//! The match store: sole owner and writer of a `MatchState`.
//!
//! Each action either applies in full or is ignored without touching
//! the state. After an applied action every registered listener sees
//! the new state, in registration order.
//!
//! ## Example
//!
//! ```
//! use badminton_scoreboard::core::{MatchFormat, MatchSetup, Slot};
//! use badminton_scoreboard::rules::GameState;
//! use badminton_scoreboard::store::MatchStore;
//!
//! let mut store = MatchStore::new();
//! store.start_match(MatchSetup::new(MatchFormat::WomensSingles).with_names("Mei", "Ana"));
//!
//! for _ in 0..20 {
//!     store.score_point(Slot::A);
//! }
//! assert_eq!(store.game_state(), GameState::GamePoint);
//!
//! store.undo();
//! assert_eq!(store.state().score(Slot::A), 19);
//! ```

use crate::core::action::{ActionOutcome, IgnoreReason, MatchAction};
use crate::core::config::{MatchSetup, StoreConfig};
use crate::core::slot::{Slot, SlotPair};
use crate::core::state::{GameScore, HistoryEntry, MatchState, PlayerSlot};
use crate::rules::{GameState, ServeSide, SETS_TO_WIN};

use super::persist::{Persister, StateListener, StateStorage};
use super::view::ScoreboardView;

/// Owns the live match and applies actions to it.
pub struct MatchStore {
    state: MatchState,
    listeners: Vec<Box<dyn StateListener>>,
}

impl std::fmt::Debug for MatchStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for MatchStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchStore {
    /// Store holding pre-match defaults, with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(MatchState::new())
    }

    /// Store resuming from an existing state.
    #[must_use]
    pub fn with_state(state: MatchState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
        }
    }

    /// Store restored from `storage` that persists every change back to it.
    ///
    /// A missing or unreadable record yields pre-match defaults.
    pub fn rehydrate<S>(storage: S, config: &StoreConfig) -> Self
    where
        S: StateStorage + 'static,
    {
        let persister = Persister::new(storage, config);
        let state = persister.load_or_default();
        Self::with_state(state).with_listener(persister)
    }

    /// Register a post-action listener.
    #[must_use]
    pub fn with_listener(mut self, listener: impl StateListener + 'static) -> Self {
        self.add_listener(listener);
        self
    }

    /// Register a post-action listener.
    pub fn add_listener(&mut self, listener: impl StateListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // === Reads ===

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Owned copy of the current state. O(1) for the point history.
    #[must_use]
    pub fn snapshot(&self) -> MatchState {
        self.state.clone()
    }

    /// Derived scoreboard view.
    #[must_use]
    pub fn view(&self) -> ScoreboardView {
        ScoreboardView::from_state(&self.state)
    }

    #[must_use]
    pub fn game_state(&self) -> GameState {
        self.state.game_state()
    }

    #[must_use]
    pub fn game_winner(&self) -> Option<Slot> {
        self.state.game_winner()
    }

    #[must_use]
    pub fn match_winner(&self) -> Option<Slot> {
        self.state.match_winner()
    }

    /// Court the current server serves from.
    #[must_use]
    pub fn serve_side(&self) -> ServeSide {
        self.state.serve_side()
    }

    // === Actions ===

    /// Apply an action and notify listeners if it changed anything.
    pub fn apply(&mut self, action: MatchAction) -> ActionOutcome {
        let name = action.name();
        let outcome = self.transition(action);

        match outcome {
            ActionOutcome::Applied => {
                for listener in &mut self.listeners {
                    listener.on_state_changed(&self.state);
                }
            }
            ActionOutcome::Ignored(reason) => {
                log::debug!("Ignored {}: {}", name, reason);
            }
        }

        outcome
    }

    /// Begin a new match. Always applies.
    pub fn start_match(&mut self, setup: MatchSetup) -> ActionOutcome {
        self.apply(MatchAction::StartMatch(setup))
    }

    /// Award a rally to `slot`. Ignored once the game or match is decided.
    pub fn score_point(&mut self, slot: Slot) -> ActionOutcome {
        self.apply(MatchAction::ScorePoint(slot))
    }

    /// Revert the most recent point of the current game.
    pub fn undo(&mut self) -> ActionOutcome {
        self.apply(MatchAction::Undo)
    }

    /// Bank the current game for `winner`; the loser serves next.
    pub fn confirm_set_win(&mut self, winner: Slot) -> ActionOutcome {
        self.apply(MatchAction::ConfirmSetWin(winner))
    }

    /// Zero the current game.
    pub fn reset_game(&mut self) -> ActionOutcome {
        self.apply(MatchAction::ResetGame)
    }

    /// Zero scores, games and completed-game list; keep names and format.
    pub fn reset_match(&mut self) -> ActionOutcome {
        self.apply(MatchAction::ResetMatch)
    }

    /// Restore pre-match defaults.
    pub fn back_to_setup(&mut self) -> ActionOutcome {
        self.apply(MatchAction::BackToSetup)
    }

    /// Rename a slot.
    pub fn set_name(&mut self, slot: Slot, name: impl Into<String>) -> ActionOutcome {
        self.apply(MatchAction::SetName(slot, name.into()))
    }

    // === Transitions ===

    fn transition(&mut self, action: MatchAction) -> ActionOutcome {
        match action {
            MatchAction::StartMatch(setup) => self.apply_start(&setup),
            MatchAction::ScorePoint(slot) => self.apply_point(slot),
            MatchAction::Undo => self.apply_undo(),
            MatchAction::ConfirmSetWin(winner) => self.apply_confirm(winner),
            MatchAction::ResetGame => {
                self.clear_game();
                ActionOutcome::Applied
            }
            MatchAction::ResetMatch => {
                self.clear_game();
                for slot in Slot::BOTH {
                    self.state.players[slot].sets_won = 0;
                }
                self.state.completed_games.clear();
                log::info!("Match reset");
                ActionOutcome::Applied
            }
            MatchAction::BackToSetup => {
                self.state = MatchState::new();
                log::info!("Returned to setup");
                ActionOutcome::Applied
            }
            MatchAction::SetName(slot, name) => {
                self.state.players[slot].name = name;
                ActionOutcome::Applied
            }
        }
    }

    fn apply_start(&mut self, setup: &MatchSetup) -> ActionOutcome {
        self.state = MatchState {
            started: true,
            format: setup.format,
            players: SlotPair::from_fn(|slot| PlayerSlot::new(setup.resolved_name(slot))),
            teams: setup.resolved_teams(),
            ..MatchState::new()
        };

        log::info!(
            "Match started: {} ({} vs {})",
            setup.format,
            self.state.name(Slot::A),
            self.state.name(Slot::B)
        );
        ActionOutcome::Applied
    }

    fn apply_point(&mut self, slot: Slot) -> ActionOutcome {
        if let Some(reason) = self.frozen_reason() {
            return ActionOutcome::Ignored(reason);
        }

        self.state.history.push_back(HistoryEntry {
            score_a_before: self.state.score(Slot::A),
            score_b_before: self.state.score(Slot::B),
            server_before: self.state.current_server,
        });
        self.state.players[slot].score += 1;
        self.state.current_server = slot;

        ActionOutcome::Applied
    }

    fn apply_undo(&mut self) -> ActionOutcome {
        if let Some(reason) = self.frozen_reason() {
            return ActionOutcome::Ignored(reason);
        }

        let Some(entry) = self.state.history.pop_back() else {
            return ActionOutcome::Ignored(IgnoreReason::NothingToUndo);
        };

        self.state.players[Slot::A].score = entry.score_a_before;
        self.state.players[Slot::B].score = entry.score_b_before;
        self.state.current_server = entry.server_before;

        ActionOutcome::Applied
    }

    fn apply_confirm(&mut self, winner: Slot) -> ActionOutcome {
        if self.state.match_winner().is_some() {
            return ActionOutcome::Ignored(IgnoreReason::MatchDecided);
        }

        let final_score = GameScore::new(self.state.score(Slot::A), self.state.score(Slot::B));
        self.state.completed_games.push(final_score);

        let sets = &mut self.state.players[winner].sets_won;
        *sets = (*sets + 1).min(SETS_TO_WIN);

        for slot in Slot::BOTH {
            self.state.players[slot].score = 0;
        }
        self.state.history.clear();
        self.state.current_server = winner.opponent();

        log::info!(
            "Game {} to {} ({}-{})",
            self.state.completed_games.len(),
            self.state.name(winner),
            final_score.score_a,
            final_score.score_b
        );
        if let Some(champion) = self.state.match_winner() {
            log::info!("Match won by {}", self.state.name(champion));
        }

        ActionOutcome::Applied
    }

    /// Zero both scores, give A the serve, drop the point history.
    fn clear_game(&mut self) {
        for slot in Slot::BOTH {
            self.state.players[slot].score = 0;
        }
        self.state.current_server = Slot::A;
        self.state.history.clear();
    }

    /// Why scoring and undo are currently frozen, if they are.
    fn frozen_reason(&self) -> Option<IgnoreReason> {
        if self.state.match_winner().is_some() {
            Some(IgnoreReason::MatchDecided)
        } else if self.state.game_state() == GameState::Winner {
            Some(IgnoreReason::GameDecided)
        } else {
            None
        }
    }
}
