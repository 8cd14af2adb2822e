//! Game detail entities: linescore, decisions, plays and highlights.

use serde::Serialize;

use super::{PersonRef, ScheduledGame, Side};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineTotals {
    pub runs: Option<u32>,
    pub hits: Option<u32>,
    pub errors: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinescoreInning {
    pub num: u32,
    pub home_runs: Option<u32>,
    pub away_runs: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Linescore {
    pub innings: Vec<LinescoreInning>,
    pub home: LineTotals,
    pub away: LineTotals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DecisionKind {
    Winner,
    Loser,
    Save,
}

impl DecisionKind {
    pub fn label_ko(&self) -> &'static str {
        match self {
            DecisionKind::Winner => "승리 투수",
            DecisionKind::Loser => "패전 투수",
            DecisionKind::Save => "세이브",
        }
    }
}

/// Pitcher of record with the boxscore line, when available.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PitchingDecision {
    pub kind: DecisionKind,
    pub pitcher: PersonRef,
    pub side: Option<Side>,
    pub innings_pitched: Option<String>,
    pub hits: Option<u32>,
    pub runs: Option<u32>,
    pub strike_outs: Option<u32>,
}

/// A batter's boxscore line for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatterLine {
    pub player: PersonRef,
    pub side: Side,
    pub hits: u32,
    pub home_runs: u32,
    pub rbi: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HalfInning {
    Top,
    Bottom,
}

impl HalfInning {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "top" => Some(HalfInning::Top),
            "bottom" => Some(HalfInning::Bottom),
            _ => None,
        }
    }

    pub fn label_ko(&self) -> &'static str {
        match self {
            HalfInning::Top => "초",
            HalfInning::Bottom => "말",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Play {
    pub at_bat_index: Option<u32>,
    pub inning: Option<u32>,
    pub half: Option<HalfInning>,
    pub description: Option<String>,
    pub batter: Option<String>,
    pub pitcher: Option<String>,
    pub balls: Option<u32>,
    pub strikes: Option<u32>,
    pub outs: Option<u32>,
    pub is_scoring_play: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlight {
    pub id: String,
    pub title: String,
    pub blurb: String,
    pub duration: Option<String>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
}

/// Everything the game detail view loads in one go.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameDetail {
    pub game: ScheduledGame,
    pub venue_name: Option<String>,
    pub linescore: Linescore,
    pub decisions: Vec<PitchingDecision>,
    /// Away batters first, each side in lineup order.
    pub batting: Vec<BatterLine>,
    pub plays: Vec<Play>,
}
