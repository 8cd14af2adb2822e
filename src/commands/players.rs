//! Players table: merged rosters with role filter, name search and sorting.
//!
//! Rosters for every active club are fetched concurrently (or one club's
//! when `--team` is given). Season stats are only looked up once a role
//! filter is chosen, and only for players of that role.

use std::fmt::Write as _;

use serde::Serialize;
use tracing::info;

use super::common::{emit, format_fixed2, format_rate, or_dash, CommandContext};
use crate::{
    cli::types::{Role, RoleFilter, Season, SortKey, TeamId},
    engine::{
        attach_stats, default_order, filter_players, jersey_order, league_teams, merge_rosters,
        sort_players, stat_for,
    },
    model::{Player, SeasonStat},
    Result,
};

/// Options for the players command.
#[derive(Debug, Clone, Default)]
pub struct PlayersParams {
    pub team: Option<TeamId>,
    pub role: RoleFilter,
    pub search: Option<String>,
    pub sort: SortKey,
    pub season: Season,
    pub as_json: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRow {
    pub id: u64,
    pub jersey_number: Option<u32>,
    pub team: String,
    pub name: String,
    pub position: Option<String>,
    pub role: Role,
    pub stat: Option<SeasonStat>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayersView {
    pub season: Season,
    pub role: RoleFilter,
    pub sort: SortKey,
    /// Size of the merged roster before filtering.
    pub roster_size: usize,
    pub rows: Vec<PlayerRow>,
}

/// Load, filter and order the players table.
pub async fn load_players(ctx: CommandContext<'_>, params: &PlayersParams) -> Result<PlayersView> {
    let roster = load_roster(ctx, params.team).await?;

    let season = params.season;
    let stats = attach_stats(&roster, params.role, |id, group| async move {
        ctx.client.player_season_stats(id, season, group).await
    })
    .await;

    let mut players = filter_players(&roster, params.role, params.search.as_deref().unwrap_or(""));
    sort_players(&mut players, params.sort, params.role, &stats, ctx.lookup);

    let rows = players
        .into_iter()
        .map(|p| PlayerRow {
            id: p.id.as_u64(),
            jersey_number: p.jersey_number,
            team: ctx.lookup.display_name(&p.team),
            stat: stat_for(&stats, p.id).cloned(),
            name: p.full_name,
            position: p.position,
            role: p.role,
        })
        .collect();

    Ok(PlayersView {
        season,
        role: params.role,
        sort: params.sort,
        roster_size: roster.len(),
        rows,
    })
}

async fn load_roster(ctx: CommandContext<'_>, team: Option<TeamId>) -> Result<Vec<Player>> {
    match team {
        Some(team_id) => {
            let info = ctx.client.team_info(team_id).await?;
            let mut players = ctx.client.team_roster(&info.team).await?.players;
            jersey_order(&mut players);
            Ok(players)
        }
        None => {
            let teams = league_teams(ctx.client.teams().await?);
            let mut players =
                merge_rosters(teams, |team| async move { ctx.client.team_roster(&team).await })
                    .await;
            default_order(&mut players, ctx.lookup);
            Ok(players)
        }
    }
}

/// Handle the players command
pub async fn handle_players(ctx: CommandContext<'_>, params: PlayersParams) -> Result<()> {
    let view = load_players(ctx, &params).await?;
    info!(rows = view.rows.len(), roster = view.roster_size, "players loaded");
    emit(&view, params.as_json, render_players)
}

pub fn render_players(view: &PlayersView) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "✓ {}명 / 전체 {}명 · {} 시즌 · 필터: {} · 정렬: {}",
        view.rows.len(),
        view.roster_size,
        view.season,
        view.role,
        view.sort
    );
    if view.rows.is_empty() {
        let _ = writeln!(out, "조건에 맞는 선수가 없습니다.");
        return out;
    }

    match view.role {
        RoleFilter::All => {
            let _ = writeln!(out, "{:>4}  {:<16} {:<24} {:<4}", "#", "팀", "이름", "POS");
        }
        RoleFilter::BattersOnly => {
            let _ = writeln!(
                out,
                "{:>4}  {:<16} {:<24} {:>4} {:>6} {:>6} {:>6} {:>6} {:>4} {:>4}",
                "#", "팀", "이름", "G", "AVG", "OBP", "SLG", "OPS", "HR", "RBI"
            );
        }
        RoleFilter::PitchersOnly => {
            let _ = writeln!(
                out,
                "{:>4}  {:<16} {:<24} {:>4} {:>6} {:>4} {:>4} {:>6} {:>7} {:>6}",
                "#", "팀", "이름", "G", "ERA", "SO", "BB", "WHIP", "IP", "K/9"
            );
        }
    }

    for row in &view.rows {
        let lead = format!(
            "{:>4}  {:<16} {:<24}",
            or_dash(row.jersey_number),
            row.team,
            row.name
        );
        let line = match (view.role, row.stat.as_ref()) {
            (RoleFilter::All, _) => format!("{lead} {:<4}", row.position.as_deref().unwrap_or("-")),
            (_, Some(SeasonStat::Batting(b))) => format!(
                "{lead} {:>4} {:>6} {:>6} {:>6} {:>6} {:>4} {:>4}",
                b.games,
                format_rate(b.avg),
                format_rate(b.obp),
                format_rate(b.slg),
                format_rate(b.ops),
                b.home_runs,
                b.rbi
            ),
            (_, Some(SeasonStat::Pitching(p))) => format!(
                "{lead} {:>4} {:>6} {:>4} {:>4} {:>6} {:>7} {:>6}",
                p.games,
                format_fixed2(p.era),
                p.strike_outs,
                p.walks,
                format_fixed2(p.whip),
                p.innings_pitched.as_deref().unwrap_or("-"),
                format!("{:.2}", p.strikeouts_per_nine())
            ),
            (_, None) => format!("{lead} 기록 없음"),
        };
        let _ = writeln!(out, "{line}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BattingStat, PitchingStat};

    fn row(name: &str, role: Role, stat: Option<SeasonStat>) -> PlayerRow {
        PlayerRow {
            id: 1,
            jersey_number: Some(7),
            team: "LA 다저스".to_string(),
            name: name.to_string(),
            position: Some("SS".to_string()),
            role,
            stat,
        }
    }

    fn view(role: RoleFilter, rows: Vec<PlayerRow>) -> PlayersView {
        PlayersView {
            season: Season::new(2024),
            role,
            sort: SortKey::Default,
            roster_size: 40,
            rows,
        }
    }

    #[test]
    fn test_render_batting_columns() {
        let stat = SeasonStat::Batting(BattingStat {
            games: 150,
            avg: Some(0.31),
            ops: Some(1.036),
            home_runs: 54,
            rbi: 130,
            ..Default::default()
        });
        let out = render_players(&view(
            RoleFilter::BattersOnly,
            vec![row("Shohei Ohtani", Role::Batter, Some(stat))],
        ));
        assert!(out.contains("OPS"));
        assert!(out.contains(".310"));
        assert!(out.contains("1.036"));
        assert!(out.contains("LA 다저스"));
    }

    #[test]
    fn test_render_pitching_columns_and_missing_stat() {
        let stat = SeasonStat::Pitching(PitchingStat {
            games: 1,
            era: Some(2.5),
            strike_outs: 8,
            innings_pitched: Some("6.2".to_string()),
            ..Default::default()
        });
        let out = render_players(&view(
            RoleFilter::PitchersOnly,
            vec![
                row("Kim", Role::Pitcher, Some(stat)),
                row("Lee", Role::Pitcher, None),
            ],
        ));
        assert!(out.contains("K/9"));
        assert!(out.contains("10.80"));
        assert!(out.contains("2.50"));
        assert!(out.contains("기록 없음"));
    }

    #[test]
    fn test_render_empty() {
        let out = render_players(&view(RoleFilter::All, Vec::new()));
        assert!(out.contains("선수가 없습니다"));
    }
}
