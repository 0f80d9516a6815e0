//! # badminton-scoreboard
//!
//! Scoring engine and state store for a badminton scoreboard display.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: Game classification, winners, and serve side are
//!    pure functions of scores. Nothing derived is ever stored.
//!
//! 2. **Single Writer**: `MatchStore` is the only code that mutates a
//!    match. Illegal actions are ignored, never half-applied.
//!
//! 3. **Injected Persistence**: The store reports every applied action
//!    to its listeners; persistence is just one listener over a
//!    caller-supplied `StateStorage`.
//!
//! ## Rules
//!
//! Games to 21 with a two-point lead, capped at 30. Best of three games.
//! The rally winner serves next; the loser of a game serves first in the
//! following one. The server serves from the right court on an even
//! score and the left on an odd one.
//!
//! ## Modules
//!
//! - `core`: Slots, formats, setup config, match state, actions
//! - `rules`: Pure scoring rules
//! - `store`: Match store, persistence, scoreboard view

pub mod core;
pub mod rules;
pub mod store;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Slot, SlotPair,
    MatchFormat, DoublesTeam,
    MatchSetup, StoreConfig,
    MatchState, PlayerSlot, HistoryEntry, GameScore,
    MatchAction, ActionOutcome, IgnoreReason,
};

pub use crate::rules::{GameState, ServeSide};

pub use crate::store::{
    MatchStore, ScoreboardView, SlotView,
    StateListener, StateStorage, MemoryStorage, Persister,
    PersistError, PersistResult,
};
