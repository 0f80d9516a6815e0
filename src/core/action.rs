//! Store actions and their outcomes.
//!
//! Every change to a match goes through one `MatchAction`. Applying an
//! action yields an `ActionOutcome`: either it changed the state, or it
//! was ignored and the state is exactly as before. Ignored actions are
//! not errors; the reason is there so a UI can explain a disabled button.

use serde::{Deserialize, Serialize};

use super::config::MatchSetup;
use super::slot::Slot;

/// A scoreboard action.
///
/// ```
/// use badminton_scoreboard::core::{MatchAction, MatchFormat, MatchSetup, Slot};
///
/// let start = MatchAction::StartMatch(MatchSetup::new(MatchFormat::MensSingles));
/// let point = MatchAction::ScorePoint(Slot::A);
/// assert!(point.is_scoring());
/// assert!(!start.is_scoring());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchAction {
    /// Begin a new match from the setup screen.
    StartMatch(MatchSetup),
    /// Award a rally to a slot.
    ScorePoint(Slot),
    /// Revert the most recent point.
    Undo,
    /// Bank the current game for the winning slot and start the next.
    ConfirmSetWin(Slot),
    /// Zero the current game.
    ResetGame,
    /// Zero the whole match, keeping names and format.
    ResetMatch,
    /// Discard the match and return to pre-match defaults.
    BackToSetup,
    /// Rename a slot.
    SetName(Slot, String),
}

impl MatchAction {
    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            MatchAction::StartMatch(_) => "start_match",
            MatchAction::ScorePoint(_) => "score_point",
            MatchAction::Undo => "undo",
            MatchAction::ConfirmSetWin(_) => "confirm_set_win",
            MatchAction::ResetGame => "reset_game",
            MatchAction::ResetMatch => "reset_match",
            MatchAction::BackToSetup => "back_to_setup",
            MatchAction::SetName(..) => "set_name",
        }
    }

    /// True for the rally action on the hot path.
    #[must_use]
    pub fn is_scoring(&self) -> bool {
        matches!(self, MatchAction::ScorePoint(_))
    }
}

/// Why an action left the state untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// A slot has already won the match.
    MatchDecided,
    /// The current game is won and awaits confirmation or reset.
    GameDecided,
    /// No points recorded in the current game.
    NothingToUndo,
}

impl std::fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IgnoreReason::MatchDecided => write!(f, "match already decided"),
            IgnoreReason::GameDecided => write!(f, "game already decided"),
            IgnoreReason::NothingToUndo => write!(f, "nothing to undo"),
        }
    }
}

/// Result of applying an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// The state changed.
    Applied,
    /// The state is unchanged.
    Ignored(IgnoreReason),
}

impl ActionOutcome {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, ActionOutcome::Applied)
    }
}
