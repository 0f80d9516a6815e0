//! Core types: slots, formats, configuration, match state, actions.
//!
//! These are plain data. The rules that interpret them live in `rules`
//! and the only code that mutates them lives in `store`.

pub mod slot;
pub mod format;
pub mod config;
pub mod state;
pub mod action;

pub use slot::{Slot, SlotPair};
pub use format::{DoublesTeam, MatchFormat};
pub use config::{
    default_player_name, default_team_name, MatchSetup, StoreConfig, DEFAULT_STORAGE_KEY,
};
pub use state::{CompletedGames, GameScore, HistoryEntry, MatchState, PlayerSlot};
pub use action::{ActionOutcome, IgnoreReason, MatchAction};
