//! Filter and sort selections for the players view.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which players the roster view keeps.
///
/// Selecting anything other than `All` also switches the view into stat
/// mode: season stats are fetched for the kept role and the table shows
/// role-specific columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum, Serialize, Deserialize)]
pub enum RoleFilter {
    /// Everyone on the roster
    #[default]
    All,
    /// Position players only
    #[value(alias = "bat")]
    BattersOnly,
    /// Pitchers only
    #[value(alias = "pit")]
    PitchersOnly,
}

impl fmt::Display for RoleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoleFilter::All => "전체",
            RoleFilter::BattersOnly => "타자",
            RoleFilter::PitchersOnly => "투수",
        };
        write!(f, "{}", s)
    }
}

/// Ordering applied to the filtered roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum, Serialize, Deserialize)]
pub enum SortKey {
    /// Team name, then jersey number
    #[default]
    Default,
    Avg,
    Obp,
    Slg,
    Ops,
    Hr,
    Rbi,
    Era,
    /// Strikeouts
    So,
    Whip,
    /// Strikeouts per nine innings
    K9,
}

impl SortKey {
    /// Lower-is-better metrics.
    pub fn is_ascending(&self) -> bool {
        matches!(self, SortKey::Era | SortKey::Whip)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Default => "기본",
            SortKey::Avg => "AVG",
            SortKey::Obp => "OBP",
            SortKey::Slg => "SLG",
            SortKey::Ops => "OPS",
            SortKey::Hr => "HR",
            SortKey::Rbi => "RBI",
            SortKey::Era => "ERA",
            SortKey::So => "SO",
            SortKey::Whip => "WHIP",
            SortKey::K9 => "K/9",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
