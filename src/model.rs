//! Normalized domain entities.
//!
//! Everything here is built at the client edge from upstream JSON (see
//! [`crate::mlb::types`]) and is immutable afterwards. Views and the engine
//! only ever see these shapes.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cli::types::{GamePk, PlayerId, Role, TeamId};

pub mod game;
pub mod team;

pub use game::{BatterLine, GameDetail, Highlight, Linescore, PitchingDecision, Play};
pub use team::{DivisionStandings, PlayerProfile, StandingRow, TeamInfo, Venue, WikiSummary};

/// Team id plus the upstream (English) display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamRef {
    pub id: TeamId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub full_name: String,
    /// `None` when upstream sends no number or a non-numeric one.
    pub jersey_number: Option<u32>,
    pub role: Role,
    /// Short position label such as "SS" or "P".
    pub position: Option<String>,
    pub team: TeamRef,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamRecord {
    pub team: TeamRef,
    pub players: Vec<Player>,
}

/// Season totals for a hitter. Rate stats are `None` when upstream sends a
/// placeholder such as ".---".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BattingStat {
    pub games: u32,
    pub avg: Option<f64>,
    pub obp: Option<f64>,
    pub slg: Option<f64>,
    pub ops: Option<f64>,
    pub home_runs: u32,
    pub rbi: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PitchingStat {
    pub games: u32,
    pub era: Option<f64>,
    pub strike_outs: u32,
    pub walks: u32,
    pub whip: Option<f64>,
    /// Upstream encoding: "6.1" is six and one third innings.
    pub innings_pitched: Option<String>,
    pub wins: Option<u32>,
    pub losses: Option<u32>,
    pub saves: Option<u32>,
}

impl PitchingStat {
    /// Innings pitched as a real number of innings.
    pub fn innings(&self) -> f64 {
        self.innings_pitched
            .as_deref()
            .map(parse_innings)
            .unwrap_or(0.0)
    }

    /// Strikeouts per nine innings; zero when no innings were recorded.
    pub fn strikeouts_per_nine(&self) -> f64 {
        let ip = self.innings();
        if ip <= 0.0 {
            return 0.0;
        }
        f64::from(self.strike_outs) * 9.0 / ip
    }
}

/// Exactly one stat shape per record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "group", rename_all = "lowercase")]
pub enum SeasonStat {
    Batting(BattingStat),
    Pitching(PitchingStat),
}

impl SeasonStat {
    pub fn as_batting(&self) -> Option<&BattingStat> {
        match self {
            SeasonStat::Batting(b) => Some(b),
            SeasonStat::Pitching(_) => None,
        }
    }

    pub fn as_pitching(&self) -> Option<&PitchingStat> {
        match self {
            SeasonStat::Pitching(p) => Some(p),
            SeasonStat::Batting(_) => None,
        }
    }
}

/// Parse an innings-pitched string where the fractional digit counts outs.
///
/// "6.1" → 6⅓, "6.2" → 6⅔, "7" → 7. Anything unparseable is zero innings.
pub fn parse_innings(raw: &str) -> f64 {
    let raw = raw.trim();
    let (whole, outs) = match raw.split_once('.') {
        Some((w, f)) => (w, f),
        None => (raw, "0"),
    };
    let Ok(whole) = whole.parse::<u32>() else {
        return 0.0;
    };
    match outs.parse::<u32>() {
        Ok(outs @ 0..=2) => f64::from(whole) + f64::from(outs) / 3.0,
        _ => raw.parse::<f64>().unwrap_or(0.0),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameTeam {
    pub team: TeamRef,
    pub score: Option<u32>,
    pub is_winner: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameStatus {
    /// Short code, e.g. "F" for final, "I" for in progress.
    pub code: Option<String>,
    pub detailed_state: String,
    pub abstract_state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledGame {
    pub pk: GamePk,
    pub home: GameTeam,
    pub away: GameTeam,
    pub status: GameStatus,
    pub scheduled_at: Option<DateTime<Utc>>,
}

impl ScheduledGame {
    pub fn side(&self, side: Side) -> &GameTeam {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    /// Which side `team` played on, if either.
    pub fn side_of(&self, team: TeamId) -> Option<Side> {
        if self.home.team.id == team {
            Some(Side::Home)
        } else if self.away.team.id == team {
            Some(Side::Away)
        } else {
            None
        }
    }
}

/// Outcome of a game from one side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
    NoDecision,
}

impl GameResult {
    /// One- or two-letter code used in the team schedule table.
    pub fn code(&self) -> &'static str {
        match self {
            GameResult::Win => "W",
            GameResult::Loss => "L",
            GameResult::Draw => "D",
            GameResult::NoDecision => "ND",
        }
    }

    /// Korean badge shown next to a team in the game list.
    pub fn badge_ko(&self) -> &'static str {
        match self {
            GameResult::Win => "승",
            GameResult::Loss => "패",
            GameResult::Draw => "무",
            GameResult::NoDecision => "-",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonRef {
    pub id: PlayerId,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderCandidate {
    pub player: Option<PersonRef>,
    pub value: Option<String>,
}

/// Upstream-ranked candidates for one category, best first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderCategory {
    pub key: String,
    pub candidates: Vec<LeaderCandidate>,
}

/// Leading player for one statistical category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderEntry {
    pub category: String,
    pub label: &'static str,
    pub player: Option<PersonRef>,
    /// Display value as sent upstream (".312", "41").
    pub value: String,
    pub numeric: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_innings_thirds() {
        assert!((parse_innings("6.1") - 6.333).abs() < 0.001);
        assert!((parse_innings("6.2") - 6.667).abs() < 0.001);
        assert_eq!(parse_innings("7"), 7.0);
        assert_eq!(parse_innings("0.0"), 0.0);
        assert_eq!(parse_innings("-.--"), 0.0);
    }

    #[test]
    fn test_strikeouts_per_nine() {
        let stat = PitchingStat {
            strike_outs: 8,
            innings_pitched: Some("6.2".to_string()),
            ..Default::default()
        };
        assert!((stat.strikeouts_per_nine() - 10.8).abs() < 0.01);
    }

    #[test]
    fn test_strikeouts_per_nine_without_innings() {
        let stat = PitchingStat {
            strike_outs: 3,
            innings_pitched: None,
            ..Default::default()
        };
        assert_eq!(stat.strikeouts_per_nine(), 0.0);

        let zero = PitchingStat {
            strike_outs: 3,
            innings_pitched: Some("0.0".to_string()),
            ..Default::default()
        };
        assert_eq!(zero.strikeouts_per_nine(), 0.0);
    }

    #[test]
    fn test_result_labels() {
        assert_eq!(GameResult::NoDecision.code(), "ND");
        assert_ne!(GameResult::NoDecision.badge_ko(), GameResult::Loss.badge_ko());
    }
}
