//! Team, person, venue and standings entities.

use chrono::NaiveDate;
use serde::Serialize;

use super::TeamRef;
use crate::cli::types::{PlayerId, VenueId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamInfo {
    pub team: TeamRef,
    pub abbreviation: Option<String>,
    pub location_name: Option<String>,
    pub first_year_of_play: Option<String>,
    pub venue: Option<VenueRef>,
    pub league: Option<String>,
    pub division: Option<String>,
    pub active: bool,
    pub sport_id: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueRef {
    pub id: VenueId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerProfile {
    pub id: PlayerId,
    pub full_name: String,
    pub primary_number: Option<String>,
    pub position: Option<String>,
    pub position_type: Option<String>,
    pub position_abbreviation: Option<String>,
    pub bats: Option<String>,
    pub throws: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub birth_place: Option<String>,
    pub height: Option<String>,
    pub weight: Option<u32>,
    pub current_team: Option<TeamRef>,
    pub mlb_debut: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub capacity: Option<u32>,
    pub turf_type: Option<String>,
    pub roof_type: Option<String>,
}

/// Encyclopedia page summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WikiSummary {
    pub title: String,
    pub description: Option<String>,
    pub extract: Option<String>,
    pub thumbnail_url: Option<String>,
    pub page_url: Option<String>,
}

/// One team's line in a division table, with display fallbacks resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingRow {
    pub team: TeamRef,
    pub wins: u32,
    pub losses: u32,
    pub pct: String,
    pub games_back: String,
    pub run_differential: Option<i32>,
    pub last_ten: String,
    pub streak: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum League {
    American,
    National,
}

impl League {
    pub fn title(&self) -> &'static str {
        match self {
            League::American => "AMERICAN LEAGUE",
            League::National => "NATIONAL LEAGUE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivisionStandings {
    pub division_id: Option<u32>,
    pub league: Option<League>,
    pub label: String,
    pub rows: Vec<StandingRow>,
}
