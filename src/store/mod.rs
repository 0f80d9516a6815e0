//! Match state store and its collaborators.
//!
//! - `match_store`: owns the live match and applies actions
//! - `persist`: storage capability, snapshot codec, post-action listeners
//! - `view`: derived scoreboard projection

pub mod match_store;
pub mod persist;
pub mod view;

pub use match_store::MatchStore;
pub use persist::{
    decode_state, encode_state, MemoryStorage, PersistError, PersistResult, Persister,
    StateListener, StateStorage,
};
pub use view::{ScoreboardView, SlotView};
