//! Roster merge and default ordering.

use std::{cmp::Ordering, future::Future};

use tracing::{info, warn};

use super::gather::scatter_gather;
use crate::{
    core::lookup::TeamLookup,
    error::Result,
    mlb::http::SPORT_ID_MLB,
    model::{Player, TeamInfo, TeamRecord, TeamRef},
};


/// Active MLB club.
pub fn is_league_team(team: &TeamInfo) -> bool {
    team.active && team.sport_id == Some(SPORT_ID_MLB)
}

/// Teams that take part in the league-wide merge.
pub fn league_teams(teams: Vec<TeamInfo>) -> Vec<TeamRef> {
    teams
        .into_iter()
        .filter(is_league_team)
        .map(|t| t.team)
        .collect()
}

/// Fetch every team's roster concurrently and concatenate them in team order.
///
/// A team whose roster request fails contributes no players; the rest of
/// the league is still returned.
pub async fn merge_rosters<F, Fut>(teams: Vec<TeamRef>, fetch_roster: F) -> Vec<Player>
where
    F: Fn(TeamRef) -> Fut,
    Fut: Future<Output = Result<TeamRecord>>,
{
    let team_count = teams.len();
    let keyed: Vec<TeamKey> = teams.into_iter().map(TeamKey).collect();
    let gathered = scatter_gather(keyed, |key| fetch_roster(key.0)).await;

    if gathered.is_partial() {
        warn!(
            failed = gathered.failure_count(),
            teams = team_count,
            "some rosters could not be loaded"
        );
    }

    let players: Vec<Player> = gathered
        .into_values()
        .flat_map(|record| record.players)
        .collect();
    info!(players = players.len(), teams = team_count, "merged rosters");
    players
}

/// Order by localized team name, then jersey number. Players without a
/// number go after numbered teammates; the sort is stable.
pub fn default_order(players: &mut [Player], lookup: &dyn TeamLookup) {
    players.sort_by_cached_key(|p| {
        (
            lookup.display_name(&p.team),
            p.jersey_number.is_none(),
            p.jersey_number.unwrap_or(0),
        )
    });
}

/// Single-team view: jersey number only.
pub fn jersey_order(players: &mut [Player]) {
    players.sort_by(compare_jersey);
}

pub(crate) fn compare_jersey(a: &Player, b: &Player) -> Ordering {
    match (a.jersey_number, b.jersey_number) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Displays as the team id in failure logs.
#[derive(Debug, Clone)]
struct TeamKey(TeamRef);

impl std::fmt::Display for TeamKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.0.id, self.0.name)
    }
}
