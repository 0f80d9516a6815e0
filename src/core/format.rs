//! Match formats and doubles team rosters.

use serde::{Deserialize, Serialize};

/// Badminton event type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFormat {
    #[default]
    MensSingles,
    WomensSingles,
    MensDoubles,
    WomensDoubles,
    MixedDoubles,
}

impl MatchFormat {
    /// Every format, in setup-screen order.
    pub const ALL: [MatchFormat; 5] = [
        MatchFormat::MensSingles,
        MatchFormat::WomensSingles,
        MatchFormat::MensDoubles,
        MatchFormat::WomensDoubles,
        MatchFormat::MixedDoubles,
    ];

    /// Human-readable event name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            MatchFormat::MensSingles => "Men's Singles",
            MatchFormat::WomensSingles => "Women's Singles",
            MatchFormat::MensDoubles => "Men's Doubles",
            MatchFormat::WomensDoubles => "Women's Doubles",
            MatchFormat::MixedDoubles => "Mixed Doubles",
        }
    }

    /// True for the three doubles events. See [`crate::rules::is_doubles_format`].
    #[must_use]
    pub fn is_doubles(self) -> bool {
        crate::rules::is_doubles_format(self)
    }

    /// Snake-case identifier, matching the serialized form.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            MatchFormat::MensSingles => "mens_singles",
            MatchFormat::WomensSingles => "womens_singles",
            MatchFormat::MensDoubles => "mens_doubles",
            MatchFormat::WomensDoubles => "womens_doubles",
            MatchFormat::MixedDoubles => "mixed_doubles",
        }
    }

    /// Look up a format by its snake-case identifier.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl std::fmt::Display for MatchFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The two members of a doubles pair.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoublesTeam {
    pub player1: String,
    pub player2: String,
}

impl DoublesTeam {
    /// Create a team from two member names.
    pub fn new(player1: impl Into<String>, player2: impl Into<String>) -> Self {
        Self {
            player1: player1.into(),
            player2: player2.into(),
        }
    }

    /// True when both members have a non-blank name.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.player1.trim().is_empty() && !self.player2.trim().is_empty()
    }

    /// Scoreboard label: `"player1 / player2"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} / {}", self.player1, self.player2)
    }
}
