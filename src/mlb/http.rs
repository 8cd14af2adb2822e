//! HTTP client for the MLB stats API.
//!
//! Every method issues one `GET`, checks the status, and normalizes the
//! payload into [`crate::model`] types. Transport and status failures come
//! back as [`MlbError::Http`]; a successful response that lacks the entity
//! asked for is [`MlbError::NotFound`].

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    cli::types::{GameDate, GamePk, PlayerId, Season, StatGroup, TeamId, VenueId},
    core::config::ClientConfig,
    error::{MlbError, Result},
    mlb::{
        feed::{ContentEnvelope, LiveFeed},
        types::{
            LeadersEnvelope, PeopleEnvelope, RawLeaderCategory, RawRosterEntry, RosterEnvelope,
            ScheduleEnvelope, StandingsEnvelope, StatsEnvelope, TeamsEnvelope, VenuesEnvelope,
        },
    },
    model::{
        DivisionStandings, GameDetail, Highlight, LeaderCategory, PlayerProfile, ScheduledGame,
        SeasonStat, TeamInfo, TeamRecord, TeamRef, Venue,
    },
};


/// MLB sport id; every query is scoped to it.
pub const SPORT_ID_MLB: u32 = 1;

/// American (103) and National (104) leagues.
const STANDINGS_LEAGUE_IDS: &str = "103,104";

/// Categories requested for the team leaders panel.
pub const LEADER_CATEGORIES: &str = "homeRuns,avg,rbi,ops,era,strikeOuts,wins,saves";

const USER_AGENT: &str = concat!("mlb-ko/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct MlbClient {
    http: Client,
    config: ClientConfig,
}

impl MlbClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> Result<T> {
        debug!(%url, ?query, "GET");
        let res = self
            .http
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;
        Ok(res)
    }

    fn stats_url(&self, path: &str) -> String {
        format!("{}{}", self.config.stats_base_url, path)
    }

    /// Active MLB clubs.
    pub async fn teams(&self) -> Result<Vec<TeamInfo>> {
        let env: TeamsEnvelope = self
            .get_json(
                &self.stats_url("/teams"),
                &[
                    ("sportId", SPORT_ID_MLB.to_string()),
                    ("activeStatus", "Y".to_string()),
                ],
            )
            .await?;
        Ok(env.teams.into_iter().map(|t| t.into_info()).collect())
    }

    pub async fn team_info(&self, team_id: TeamId) -> Result<TeamInfo> {
        let env: TeamsEnvelope = self
            .get_json(
                &self.stats_url(&format!("/teams/{team_id}")),
                &[("sportId", SPORT_ID_MLB.to_string())],
            )
            .await?;
        env.teams
            .into_iter()
            .next()
            .map(|t| t.into_info())
            .ok_or_else(|| MlbError::not_found("team", team_id))
    }

    /// Current roster, each player tagged with `team`.
    pub async fn team_roster(&self, team: &TeamRef) -> Result<TeamRecord> {
        let env: RosterEnvelope = self
            .get_json(&self.stats_url(&format!("/teams/{}/roster", team.id)), &[])
            .await?;
        Ok(TeamRecord {
            team: team.clone(),
            players: env
                .roster
                .into_iter()
                .filter_map(|entry: RawRosterEntry| entry.into_player(team))
                .collect(),
        })
    }

    /// One player's season line for `group`; `None` when the season has no split.
    pub async fn player_season_stats(
        &self,
        player_id: PlayerId,
        season: Season,
        group: StatGroup,
    ) -> Result<Option<SeasonStat>> {
        let env: StatsEnvelope = self
            .get_json(
                &self.stats_url(&format!("/people/{player_id}/stats")),
                &[
                    ("stats", "season".to_string()),
                    ("group", group.to_string()),
                    ("season", season.to_string()),
                ],
            )
            .await?;
        Ok(env.into_first_stat().map(|s| s.into_season_stat(group)))
    }

    pub async fn player_info(&self, player_id: PlayerId) -> Result<PlayerProfile> {
        let env: PeopleEnvelope = self
            .get_json(&self.stats_url(&format!("/people/{player_id}")), &[])
            .await?;
        env.people
            .into_iter()
            .next()
            .map(|p| p.into_profile())
            .ok_or_else(|| MlbError::not_found("player", player_id))
    }

    pub async fn team_stats(
        &self,
        team_id: TeamId,
        season: Season,
        group: StatGroup,
    ) -> Result<Option<SeasonStat>> {
        let env: StatsEnvelope = self
            .get_json(
                &self.stats_url(&format!("/teams/{team_id}/stats")),
                &[
                    ("stats", "season".to_string()),
                    ("group", group.to_string()),
                    ("season", season.to_string()),
                ],
            )
            .await?;
        Ok(env.into_first_stat().map(|s| s.into_season_stat(group)))
    }

    /// Regular-season leader categories for a team.
    pub async fn team_leaders(&self, team_id: TeamId, season: Season) -> Result<Vec<LeaderCategory>> {
        let env: LeadersEnvelope = self
            .get_json(
                &self.stats_url(&format!("/teams/{team_id}/leaders")),
                &[
                    ("leaderCategories", LEADER_CATEGORIES.to_string()),
                    ("season", season.to_string()),
                    ("leaderGameTypes", "R".to_string()),
                ],
            )
            .await?;
        Ok(env
            .team_leaders
            .into_iter()
            .map(RawLeaderCategory::into_category)
            .collect())
    }

    /// Games on one day, optionally only those involving `team_id`.
    pub async fn schedule_for_date(
        &self,
        date: GameDate,
        team_id: Option<TeamId>,
    ) -> Result<Vec<ScheduledGame>> {
        let mut query = vec![
            ("sportId", SPORT_ID_MLB.to_string()),
            ("date", date.to_string()),
        ];
        if let Some(team_id) = team_id {
            query.push(("teamId", team_id.to_string()));
        }
        let env: ScheduleEnvelope = self.get_json(&self.stats_url("/schedule"), &query).await?;
        Ok(env
            .dates
            .into_iter()
            .next()
            .map(|d| d.games.into_iter().map(|g| g.into_game()).collect())
            .unwrap_or_default())
    }

    /// A team's whole season, flattened across dates and ordered by start time.
    pub async fn team_season_schedule(
        &self,
        team_id: TeamId,
        season: Season,
    ) -> Result<Vec<ScheduledGame>> {
        let env: ScheduleEnvelope = self
            .get_json(
                &self.stats_url("/schedule"),
                &[
                    ("sportId", SPORT_ID_MLB.to_string()),
                    ("teamId", team_id.to_string()),
                    ("season", season.to_string()),
                ],
            )
            .await?;
        let mut games: Vec<ScheduledGame> = env
            .dates
            .into_iter()
            .flat_map(|d| d.games)
            .map(|g| g.into_game())
            .collect();
        games.sort_by_key(|g| g.scheduled_at);
        Ok(games)
    }

    pub async fn standings(&self, season: Season) -> Result<Vec<DivisionStandings>> {
        let env: StandingsEnvelope = self
            .get_json(
                &self.stats_url("/standings"),
                &[
                    ("leagueId", STANDINGS_LEAGUE_IDS.to_string()),
                    ("season", season.to_string()),
                    ("standingsType", "regularSeason".to_string()),
                ],
            )
            .await?;
        Ok(env.records.into_iter().map(|r| r.into_division()).collect())
    }

    pub async fn venue(&self, venue_id: VenueId) -> Result<Venue> {
        let env: VenuesEnvelope = self
            .get_json(
                &self.stats_url(&format!("/venues/{venue_id}")),
                &[("hydrate", "location,fieldInfo".to_string())],
            )
            .await?;
        env.venues
            .into_iter()
            .next()
            .map(|v| v.into_venue())
            .ok_or_else(|| MlbError::not_found("venue", venue_id))
    }

    pub async fn game_detail(&self, game_pk: GamePk) -> Result<GameDetail> {
        let url = format!("{}/game/{game_pk}/feed/live", self.config.live_base_url);
        let feed: LiveFeed = self.get_json(&url, &[]).await?;
        Ok(feed.into_detail(game_pk))
    }

    pub async fn game_highlights(&self, game_pk: GamePk) -> Result<Vec<Highlight>> {
        let content: ContentEnvelope = self
            .get_json(&self.stats_url(&format!("/game/{game_pk}/content")), &[])
            .await?;
        Ok(content.into_highlights())
    }
}
