//! Match and store configuration.
//!
//! - `MatchSetup`: what the setup screen hands to `start_match`
//!   (format, slot names, doubles rosters).
//! - `StoreConfig`: how a `MatchStore` persists itself.
//!
//! Both follow the builder style: construct with `new`, refine with
//! `with_*` methods.

use serde::{Deserialize, Serialize};

use super::format::{DoublesTeam, MatchFormat};
use super::slot::{Slot, SlotPair};

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "badminton-storage";

/// Fallback name for a singles slot with no name entered.
#[must_use]
pub const fn default_player_name(slot: Slot) -> &'static str {
    match slot {
        Slot::A => "Player A",
        Slot::B => "Player B",
    }
}

/// Fallback name for a doubles slot with an incomplete roster.
#[must_use]
pub const fn default_team_name(slot: Slot) -> &'static str {
    match slot {
        Slot::A => "Team A",
        Slot::B => "Team B",
    }
}

/// Configuration for a new match.
///
/// ```
/// use badminton_scoreboard::core::{DoublesTeam, MatchFormat, MatchSetup, Slot};
///
/// let setup = MatchSetup::new(MatchFormat::MixedDoubles)
///     .with_team(Slot::A, DoublesTeam::new("Ana", "Ben"));
///
/// assert_eq!(setup.resolved_name(Slot::A), "Ana / Ben");
/// assert_eq!(setup.resolved_name(Slot::B), "Team B");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSetup {
    /// Event type.
    pub format: MatchFormat,

    /// Names as typed on the setup screen. May be blank.
    pub names: SlotPair<String>,

    /// Doubles rosters. Ignored for singles formats.
    pub teams: SlotPair<Option<DoublesTeam>>,
}

impl MatchSetup {
    /// Create a setup for the given format with blank names.
    pub fn new(format: MatchFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// Set both slot names.
    #[must_use]
    pub fn with_names(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.names = SlotPair::new(a.into(), b.into());
        self
    }

    /// Set one slot's name.
    #[must_use]
    pub fn with_name(mut self, slot: Slot, name: impl Into<String>) -> Self {
        self.names[slot] = name.into();
        self
    }

    /// Set one slot's doubles roster.
    #[must_use]
    pub fn with_team(mut self, slot: Slot, team: DoublesTeam) -> Self {
        self.teams[slot] = Some(team);
        self
    }

    /// Name shown on the scoreboard for a slot.
    ///
    /// Doubles: a complete roster wins, then a typed name, then `"Team X"`.
    /// Singles: the trimmed typed name, then `"Player X"`.
    #[must_use]
    pub fn resolved_name(&self, slot: Slot) -> String {
        let typed = self.names[slot].trim();

        if self.format.is_doubles() {
            match &self.teams[slot] {
                Some(team) if team.is_complete() => team.label(),
                _ if !typed.is_empty() => typed.to_string(),
                _ => default_team_name(slot).to_string(),
            }
        } else if typed.is_empty() {
            default_player_name(slot).to_string()
        } else {
            typed.to_string()
        }
    }

    /// Rosters to keep on the match: only doubles formats carry them.
    #[must_use]
    pub fn resolved_teams(&self) -> SlotPair<Option<DoublesTeam>> {
        if self.format.is_doubles() {
            self.teams.clone()
        } else {
            SlotPair::default()
        }
    }
}

/// Store-level configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Key under which the match snapshot is stored.
    pub storage_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl StoreConfig {
    /// Create a config with the default storage key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different storage key (one record per scoreboard).
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}
