//! Wire shapes for the MLB stats API and their normalization into
//! [`crate::model`] entities.
//!
//! Upstream payloads are loose: most fields are optional and rate stats
//! arrive as strings (".312", "-.--"). Everything is parsed here so the
//! engine and views never touch raw JSON.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{
    cli::types::{GamePk, PlayerId, Role, StatGroup, TeamId, VenueId},
    model::{
        team::VenueRef, BattingStat, DivisionStandings, GameStatus, GameTeam, LeaderCandidate,
        LeaderCategory, PersonRef, PitchingStat, Player, PlayerProfile, ScheduledGame, SeasonStat,
        StandingRow, TeamInfo, TeamRef, Venue, WikiSummary,
    },
};

#[cfg(test)]
mod tests;

/// Rate stats come as strings, numbers, or placeholders like ".---".
fn de_opt_rate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    })
}

/// Display values (leaders) may be strings or bare numbers.
fn de_opt_display<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

pub(crate) fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawIdName {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
}

impl RawIdName {
    pub fn into_team_ref(self) -> TeamRef {
        TeamRef {
            id: TeamId::new(self.id),
            name: self.name.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTeam {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub first_year_of_play: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub sport: Option<RawIdName>,
    #[serde(default)]
    pub venue: Option<RawIdName>,
    #[serde(default)]
    pub league: Option<RawIdName>,
    #[serde(default)]
    pub division: Option<RawIdName>,
}

impl RawTeam {
    pub fn into_info(self) -> TeamInfo {
        TeamInfo {
            team: TeamRef {
                id: TeamId::new(self.id),
                name: self.name,
            },
            abbreviation: self.abbreviation,
            location_name: self.location_name,
            first_year_of_play: self.first_year_of_play,
            venue: self.venue.map(|v| VenueRef {
                id: VenueId::new(v.id),
                name: v.name.unwrap_or_default(),
            }),
            league: self.league.and_then(|l| l.name),
            division: self.division.and_then(|d| d.name),
            active: self.active.unwrap_or(false),
            sport_id: self.sport.map(|s| s.id),
        }
    }
}

/// Top-level envelope for `/teams` and `/teams/{id}`
#[derive(Debug, Deserialize)]
pub struct TeamsEnvelope {
    #[serde(default)]
    pub teams: Vec<RawTeam>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPerson {
    pub id: u64,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl RawPerson {
    pub fn into_ref(self) -> PersonRef {
        PersonRef {
            id: PlayerId::new(self.id),
            full_name: self.full_name.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawPosition {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub position_type: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
}

impl RawPosition {
    pub fn role(&self) -> Role {
        Role::classify(self.position_type.as_deref(), self.abbreviation.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRosterEntry {
    #[serde(default)]
    pub person: Option<RawPerson>,
    #[serde(default)]
    pub jersey_number: Option<String>,
    #[serde(default)]
    pub position: Option<RawPosition>,
}

impl RawRosterEntry {
    /// Entries without a person id are dropped.
    pub fn into_player(self, team: &TeamRef) -> Option<Player> {
        let person = self.person?;
        let role = self
            .position
            .as_ref()
            .map(RawPosition::role)
            .unwrap_or(Role::Batter);
        Some(Player {
            id: PlayerId::new(person.id),
            full_name: person.full_name.unwrap_or_default(),
            jersey_number: self
                .jersey_number
                .as_deref()
                .and_then(|n| n.trim().parse::<u32>().ok()),
            role,
            position: self.position.and_then(|p| p.abbreviation),
            team: team.clone(),
        })
    }
}

/// Top-level envelope for `/teams/{id}/roster`
#[derive(Debug, Deserialize)]
pub struct RosterEnvelope {
    #[serde(default)]
    pub roster: Vec<RawRosterEntry>,
}

/// Union of hitting and pitching season stat fields.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStat {
    #[serde(default)]
    pub games_played: Option<u32>,
    #[serde(default)]
    pub games_pitched: Option<u32>,
    #[serde(default, deserialize_with = "de_opt_rate")]
    pub avg: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_rate")]
    pub obp: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_rate")]
    pub slg: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_rate")]
    pub ops: Option<f64>,
    #[serde(default)]
    pub home_runs: Option<u32>,
    #[serde(default)]
    pub rbi: Option<u32>,
    #[serde(default, deserialize_with = "de_opt_rate")]
    pub era: Option<f64>,
    #[serde(default)]
    pub strike_outs: Option<u32>,
    #[serde(default)]
    pub base_on_balls: Option<u32>,
    #[serde(default, deserialize_with = "de_opt_rate")]
    pub whip: Option<f64>,
    #[serde(default)]
    pub innings_pitched: Option<String>,
    #[serde(default)]
    pub wins: Option<u32>,
    #[serde(default)]
    pub losses: Option<u32>,
    #[serde(default)]
    pub saves: Option<u32>,
}

impl RawStat {
    /// Shape the record for the group it was requested with.
    pub fn into_season_stat(self, group: StatGroup) -> SeasonStat {
        match group {
            StatGroup::Pitching => SeasonStat::Pitching(PitchingStat {
                games: self.games_pitched.or(self.games_played).unwrap_or(0),
                era: self.era,
                strike_outs: self.strike_outs.unwrap_or(0),
                walks: self.base_on_balls.unwrap_or(0),
                whip: self.whip,
                innings_pitched: self.innings_pitched,
                wins: self.wins,
                losses: self.losses,
                saves: self.saves,
            }),
            StatGroup::Hitting => SeasonStat::Batting(BattingStat {
                games: self.games_played.unwrap_or(0),
                avg: self.avg,
                obp: self.obp,
                slg: self.slg,
                ops: self.ops,
                home_runs: self.home_runs.unwrap_or(0),
                rbi: self.rbi.unwrap_or(0),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StatSplit {
    pub stat: RawStat,
}

#[derive(Debug, Deserialize)]
pub struct StatBlock {
    #[serde(default)]
    pub splits: Vec<StatSplit>,
}

/// Envelope for `/people/{id}/stats` and `/teams/{id}/stats`
#[derive(Debug, Deserialize)]
pub struct StatsEnvelope {
    #[serde(default)]
    pub stats: Vec<StatBlock>,
}

impl StatsEnvelope {
    /// First split of the first stat block; `None` when the season is empty.
    pub fn into_first_stat(self) -> Option<RawStat> {
        self.stats
            .into_iter()
            .next()
            .and_then(|block| block.splits.into_iter().next())
            .map(|split| split.stat)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCodeDescription {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPersonDetail {
    pub id: u64,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub primary_number: Option<String>,
    #[serde(default)]
    pub primary_position: Option<RawPosition>,
    #[serde(default)]
    pub bat_side: Option<RawCodeDescription>,
    #[serde(default)]
    pub pitch_hand: Option<RawCodeDescription>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub birth_city: Option<String>,
    #[serde(default)]
    pub birth_country: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub weight: Option<u32>,
    #[serde(default)]
    pub current_team: Option<RawIdName>,
    #[serde(default)]
    pub mlb_debut_date: Option<String>,
}

impl RawPersonDetail {
    pub fn into_profile(self) -> PlayerProfile {
        let birth_place = match (self.birth_city, self.birth_country) {
            (Some(city), Some(country)) => Some(format!("{city}, {country}")),
            (city, country) => city.or(country),
        };
        let (position, position_type, position_abbreviation) = match self.primary_position {
            Some(p) => (p.name, p.position_type, p.abbreviation),
            None => (None, None, None),
        };
        PlayerProfile {
            id: PlayerId::new(self.id),
            full_name: self.full_name.unwrap_or_default(),
            primary_number: self.primary_number,
            position,
            position_type,
            position_abbreviation,
            bats: self.bat_side.and_then(|s| s.description.or(s.code)),
            throws: self.pitch_hand.and_then(|s| s.description.or(s.code)),
            birth_date: parse_date(self.birth_date.as_deref()),
            birth_place,
            height: self.height,
            weight: self.weight,
            current_team: self.current_team.map(RawIdName::into_team_ref),
            mlb_debut: parse_date(self.mlb_debut_date.as_deref()),
        }
    }
}

/// Envelope for `/people/{id}`
#[derive(Debug, Deserialize)]
pub struct PeopleEnvelope {
    #[serde(default)]
    pub people: Vec<RawPersonDetail>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStatus {
    #[serde(default)]
    pub abstract_game_state: Option<String>,
    #[serde(default)]
    pub detailed_state: Option<String>,
    #[serde(default)]
    pub status_code: Option<String>,
}

impl RawStatus {
    pub fn into_status(self) -> GameStatus {
        GameStatus {
            code: self.status_code,
            detailed_state: self.detailed_state.unwrap_or_default(),
            abstract_state: self.abstract_game_state,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGameTeam {
    pub team: RawIdName,
    #[serde(default)]
    pub score: Option<u32>,
    #[serde(default)]
    pub is_winner: Option<bool>,
}

impl RawGameTeam {
    fn into_game_team(self) -> GameTeam {
        GameTeam {
            team: self.team.into_team_ref(),
            score: self.score,
            is_winner: self.is_winner,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawGameTeams {
    pub home: RawGameTeam,
    pub away: RawGameTeam,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGame {
    pub game_pk: u64,
    #[serde(default)]
    pub game_date: Option<String>,
    #[serde(default)]
    pub status: RawStatus,
    pub teams: RawGameTeams,
}

impl RawGame {
    pub fn into_game(self) -> ScheduledGame {
        ScheduledGame {
            pk: GamePk::new(self.game_pk),
            home: self.teams.home.into_game_team(),
            away: self.teams.away.into_game_team(),
            status: self.status.into_status(),
            scheduled_at: parse_timestamp(self.game_date.as_deref()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ScheduleDate {
    #[serde(default)]
    pub games: Vec<RawGame>,
}

/// Envelope for `/schedule`
#[derive(Debug, Deserialize)]
pub struct ScheduleEnvelope {
    #[serde(default)]
    pub dates: Vec<ScheduleDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLeader {
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default, deserialize_with = "de_opt_display")]
    pub value: Option<String>,
    #[serde(default)]
    pub person: Option<RawPerson>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLeaderCategory {
    pub leader_category: String,
    #[serde(default)]
    pub leaders: Vec<RawLeader>,
}

impl RawLeaderCategory {
    pub fn into_category(self) -> LeaderCategory {
        LeaderCategory {
            key: self.leader_category,
            candidates: self
                .leaders
                .into_iter()
                .map(|l| LeaderCandidate {
                    player: l.person.map(RawPerson::into_ref),
                    value: l.value,
                })
                .collect(),
        }
    }
}

/// Envelope for `/teams/{id}/leaders`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadersEnvelope {
    #[serde(default)]
    pub team_leaders: Vec<RawLeaderCategory>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSplitRecord {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub wins: Option<u32>,
    #[serde(default)]
    pub losses: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSplitRecords {
    #[serde(default)]
    pub split_records: Vec<RawSplitRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStreak {
    #[serde(default)]
    pub streak_code: Option<String>,
    #[serde(default)]
    pub streak_type: Option<String>,
    #[serde(default)]
    pub streak_number: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTeamRecord {
    pub team: RawIdName,
    #[serde(default)]
    pub wins: Option<u32>,
    #[serde(default)]
    pub losses: Option<u32>,
    #[serde(default)]
    pub winning_percentage: Option<String>,
    #[serde(default)]
    pub games_back: Option<String>,
    #[serde(default)]
    pub division_games_back: Option<String>,
    #[serde(default)]
    pub run_differential: Option<i32>,
    #[serde(default)]
    pub runs_scored: Option<i32>,
    #[serde(default)]
    pub runs_allowed: Option<i32>,
    #[serde(default)]
    pub records: Option<RawSplitRecords>,
    #[serde(default)]
    pub streak: Option<RawStreak>,
}

impl RawTeamRecord {
    /// Resolve every display fallback the standings table needs.
    pub fn into_row(self) -> StandingRow {
        let wins = self.wins.unwrap_or(0);
        let losses = self.losses.unwrap_or(0);
        let pct = self.winning_percentage.unwrap_or_else(|| {
            if wins + losses > 0 {
                format!("{:.3}", f64::from(wins) / f64::from(wins + losses))
            } else {
                "0.000".to_string()
            }
        });
        let run_differential = self.run_differential.or(match (self.runs_scored, self.runs_allowed) {
            (Some(scored), Some(allowed)) => Some(scored - allowed),
            _ => None,
        });
        let last_ten = self
            .records
            .unwrap_or_default()
            .split_records
            .into_iter()
            .find(|r| r.kind.as_deref() == Some("lastTen"))
            .map(|r| format!("{}-{}", r.wins.unwrap_or(0), r.losses.unwrap_or(0)))
            .unwrap_or_else(|| "-".to_string());
        let streak = self
            .streak
            .and_then(|s| {
                s.streak_code.or(match (s.streak_type, s.streak_number) {
                    (Some(kind), Some(n)) if n > 0 => Some(format!("{kind}{n}")),
                    _ => None,
                })
            })
            .unwrap_or_else(|| "-".to_string());

        StandingRow {
            team: self.team.into_team_ref(),
            wins,
            losses,
            pct,
            games_back: self
                .games_back
                .or(self.division_games_back)
                .unwrap_or_else(|| "-".to_string()),
            run_differential,
            last_ten,
            streak,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDivisionRecord {
    #[serde(default)]
    pub division: Option<RawIdName>,
    #[serde(default)]
    pub team_records: Vec<RawTeamRecord>,
}

impl RawDivisionRecord {
    /// League and Korean label are left for the standings grouping to fill.
    pub fn into_division(self) -> DivisionStandings {
        let (division_id, label) = match self.division {
            Some(d) => (Some(d.id), d.name.unwrap_or_default()),
            None => (None, String::new()),
        };
        DivisionStandings {
            division_id,
            league: None,
            label,
            rows: self
                .team_records
                .into_iter()
                .map(RawTeamRecord::into_row)
                .collect(),
        }
    }
}

/// Envelope for `/standings`
#[derive(Debug, Deserialize)]
pub struct StandingsEnvelope {
    #[serde(default)]
    pub records: Vec<RawDivisionRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLocation {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFieldInfo {
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub turf_type: Option<String>,
    #[serde(default)]
    pub roof_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVenue {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<RawLocation>,
    #[serde(default)]
    pub field_info: Option<RawFieldInfo>,
}

impl RawVenue {
    pub fn into_venue(self) -> Venue {
        let (city, state, country) = match self.location {
            Some(l) => (l.city, l.state, l.country),
            None => (None, None, None),
        };
        let (capacity, turf_type, roof_type) = match self.field_info {
            Some(f) => (f.capacity, f.turf_type, f.roof_type),
            None => (None, None, None),
        };
        Venue {
            id: VenueId::new(self.id),
            name: self.name.unwrap_or_default(),
            city,
            state,
            country,
            capacity,
            turf_type,
            roof_type,
        }
    }
}

/// Envelope for `/venues/{id}`
#[derive(Debug, Deserialize)]
pub struct VenuesEnvelope {
    #[serde(default)]
    pub venues: Vec<RawVenue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawThumbnail {
    pub source: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawContentUrl {
    #[serde(default)]
    pub page: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawContentUrls {
    #[serde(default)]
    pub desktop: Option<RawContentUrl>,
}

/// Wikipedia REST `page/summary` response
#[derive(Debug, Clone, Deserialize)]
pub struct RawWikiSummary {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub extract: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<RawThumbnail>,
    #[serde(default)]
    pub content_urls: Option<RawContentUrls>,
}

impl RawWikiSummary {
    /// `None` when the page carries neither a title nor an extract.
    pub fn into_summary(self) -> Option<WikiSummary> {
        if self.title.is_none() && self.extract.is_none() {
            return None;
        }
        Some(WikiSummary {
            title: self.title.unwrap_or_default(),
            description: self.description,
            extract: self.extract,
            thumbnail_url: self.thumbnail.map(|t| t.source),
            page_url: self.content_urls.and_then(|c| c.desktop).and_then(|d| d.page),
        })
    }
}
