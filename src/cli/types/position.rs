//! Player roles derived from roster positions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::filters::RoleFilter;

/// Batter or Pitcher, derived from a player's listed position.
///
/// # Examples
///
/// ```rust
/// use mlb_ko::Role;
///
/// assert_eq!(Role::classify(Some("Pitcher"), Some("P")), Role::Pitcher);
/// assert_eq!(Role::classify(Some("Two-Way Player"), Some("TWP")), Role::Batter);
/// assert_eq!(Role::classify(None, None), Role::Batter);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Batter,
    Pitcher,
}

impl Role {
    /// Pitcher iff the position type is "Pitcher" or its abbreviation is "P".
    pub fn classify(position_type: Option<&str>, abbreviation: Option<&str>) -> Self {
        if position_type == Some("Pitcher") || abbreviation == Some("P") {
            Role::Pitcher
        } else {
            Role::Batter
        }
    }

    pub fn matches(&self, filter: RoleFilter) -> bool {
        match filter {
            RoleFilter::All => true,
            RoleFilter::BattersOnly => *self == Role::Batter,
            RoleFilter::PitchersOnly => *self == Role::Pitcher,
        }
    }

    /// Stat group name used by the `/stats` endpoints.
    pub fn stat_group(&self) -> StatGroup {
        match self {
            Role::Batter => StatGroup::Hitting,
            Role::Pitcher => StatGroup::Pitching,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Batter => "타자",
            Role::Pitcher => "투수",
        };
        write!(f, "{}", s)
    }
}

/// `group=` query values for player and team season stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatGroup {
    Hitting,
    Pitching,
}

impl StatGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatGroup::Hitting => "hitting",
            StatGroup::Pitching => "pitching",
        }
    }
}

impl fmt::Display for StatGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_abbreviation_only() {
        assert_eq!(Role::classify(Some("Unknown"), Some("P")), Role::Pitcher);
        assert_eq!(Role::classify(Some("Pitcher"), None), Role::Pitcher);
        assert_eq!(Role::classify(Some("Catcher"), Some("C")), Role::Batter);
    }

    #[test]
    fn test_role_matches_filter() {
        assert!(Role::Batter.matches(RoleFilter::All));
        assert!(Role::Pitcher.matches(RoleFilter::All));
        assert!(Role::Batter.matches(RoleFilter::BattersOnly));
        assert!(!Role::Batter.matches(RoleFilter::PitchersOnly));
        assert!(Role::Pitcher.matches(RoleFilter::PitchersOnly));
    }

    #[test]
    fn test_stat_group() {
        assert_eq!(Role::Batter.stat_group().as_str(), "hitting");
        assert_eq!(Role::Pitcher.stat_group().as_str(), "pitching");
    }
}
