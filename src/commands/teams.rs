//! Teams list and team detail.

use std::fmt::Write as _;

use serde::Serialize;
use tracing::warn;

use super::common::{emit, format_fixed2, format_kst, format_rate, or_dash, CommandContext, TeamBadge};
use crate::{
    cli::types::{Season, StatGroup, TeamId},
    core::{division::localize_division, lookup::TeamLookup},
    engine::{default_order, derive_result, is_league_team, pick_leaders, BATTING_CATEGORIES, PITCHING_CATEGORIES},
    model::{GameResult, LeaderEntry, Player, ScheduledGame, SeasonStat, Side, TeamInfo, TeamRef},
    Result,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamCard {
    pub badge: TeamBadge,
    pub abbreviation: Option<String>,
    pub venue: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamGroup {
    pub label: String,
    pub teams: Vec<TeamCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamsView {
    pub groups: Vec<TeamGroup>,
}

/// Localized "league division" label, e.g. "아메리칸리그 서부지구".
pub fn group_label(team: &TeamInfo) -> String {
    let league = team.league.as_deref().unwrap_or("기타");
    let raw = format!("{} {}", league, team.division.as_deref().unwrap_or(""));
    localize_division(raw.trim())
}

/// Group active clubs by division, groups in first-seen order and teams
/// within a group by Korean name.
pub fn group_teams(ctx: CommandContext<'_>, teams: Vec<TeamInfo>) -> Vec<TeamGroup> {
    let mut groups: Vec<TeamGroup> = Vec::new();
    for team in teams.into_iter().filter(is_league_team) {
        let label = group_label(&team);
        let card = TeamCard {
            badge: ctx.badge(&team.team),
            abbreviation: team.abbreviation,
            venue: team.venue.map(|v| v.name),
        };
        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.teams.push(card),
            None => groups.push(TeamGroup {
                label,
                teams: vec![card],
            }),
        }
    }
    for group in &mut groups {
        group.teams.sort_by(|a, b| a.badge.name.cmp(&b.badge.name));
    }
    groups
}

pub async fn load_teams(ctx: CommandContext<'_>) -> Result<TeamsView> {
    let teams = ctx.client.teams().await?;
    Ok(TeamsView {
        groups: group_teams(ctx, teams),
    })
}

/// Handle the teams command
pub async fn handle_teams(ctx: CommandContext<'_>, as_json: bool) -> Result<()> {
    let view = load_teams(ctx).await?;
    emit(&view, as_json, render_teams)
}

pub fn render_teams(view: &TeamsView) -> String {
    let mut out = String::new();
    for group in &view.groups {
        let _ = writeln!(out, "{}", group.label);
        for card in &group.teams {
            let _ = writeln!(
                out,
                "  {:>3}  {:<20} {:<4} {}  {}",
                card.badge.id,
                card.badge.name,
                card.abbreviation.as_deref().unwrap_or("-"),
                card.badge.color,
                card.venue.as_deref().unwrap_or("-")
            );
        }
    }
    if view.groups.is_empty() {
        let _ = writeln!(out, "표시할 팀이 없습니다.");
    }
    out
}

/// One game of a team's season from that team's side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleRow {
    pub game_pk: u64,
    pub start: String,
    pub opponent: String,
    pub home: bool,
    /// "away - home", or "-" before both scores exist.
    pub score: String,
    pub result: GameResult,
}

/// Schedule rows for `team_id`; games it did not play in are skipped.
pub fn schedule_rows(games: &[ScheduledGame], team_id: TeamId, lookup: &dyn TeamLookup) -> Vec<ScheduleRow> {
    games
        .iter()
        .filter_map(|game| {
            let side = game.side_of(team_id)?;
            let opponent = &game.side(side.opponent()).team;
            let score = match (game.away.score, game.home.score) {
                (Some(away), Some(home)) => format!("{away} - {home}"),
                _ => "-".to_string(),
            };
            Some(ScheduleRow {
                game_pk: game.pk.as_u64(),
                start: format_kst(game.scheduled_at),
                opponent: lookup.display_name(opponent),
                home: side == Side::Home,
                score,
                result: derive_result(game, side),
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamDetailView {
    pub season: Season,
    pub info: TeamInfo,
    pub badge: TeamBadge,
    pub division: Option<String>,
    pub hitting: Option<SeasonStat>,
    pub pitching: Option<SeasonStat>,
    pub batting_leaders: Vec<LeaderEntry>,
    pub pitching_leaders: Vec<LeaderEntry>,
    pub roster: Vec<Player>,
    /// `None` when the schedule could not be loaded.
    pub schedule: Option<Vec<ScheduleRow>>,
}

/// Info, stats, leaders and roster load together and fail together; the
/// schedule is loaded afterwards on a best-effort basis.
pub async fn load_team_detail(ctx: CommandContext<'_>, team_id: TeamId, season: Season) -> Result<TeamDetailView> {
    let placeholder = TeamRef {
        id: team_id,
        name: String::new(),
    };
    let (info, hitting, pitching, leaders, record) = tokio::try_join!(
        ctx.client.team_info(team_id),
        ctx.client.team_stats(team_id, season, StatGroup::Hitting),
        ctx.client.team_stats(team_id, season, StatGroup::Pitching),
        ctx.client.team_leaders(team_id, season),
        ctx.client.team_roster(&placeholder),
    )?;

    let mut roster: Vec<Player> = record
        .players
        .into_iter()
        .map(|mut p| {
            p.team = info.team.clone();
            p
        })
        .collect();
    default_order(&mut roster, ctx.lookup);

    let schedule = match ctx.client.team_season_schedule(team_id, season).await {
        Ok(games) => Some(schedule_rows(&games, team_id, ctx.lookup)),
        Err(e) => {
            warn!(team = %team_id, error = %e, "failed to load team schedule");
            None
        }
    };

    Ok(TeamDetailView {
        season,
        badge: ctx.badge(&info.team),
        division: info.division.as_deref().map(localize_division),
        hitting,
        pitching,
        batting_leaders: pick_leaders(&leaders, BATTING_CATEGORIES),
        pitching_leaders: pick_leaders(&leaders, PITCHING_CATEGORIES),
        roster,
        schedule,
        info,
    })
}

/// Handle the team command
pub async fn handle_team(ctx: CommandContext<'_>, team_id: TeamId, season: Season, as_json: bool) -> Result<()> {
    let view = load_team_detail(ctx, team_id, season).await?;
    emit(&view, as_json, render_team_detail)
}

fn render_leaders(out: &mut String, title: &str, leaders: &[LeaderEntry]) {
    let _ = writeln!(out, "{title}");
    if leaders.is_empty() {
        let _ = writeln!(out, "  -");
    }
    for entry in leaders {
        let name = entry.player.as_ref().map_or("-", |p| p.full_name.as_str());
        let _ = writeln!(out, "  {:<6} {:<24} {}", entry.label, name, entry.value);
    }
}

pub fn render_team_detail(view: &TeamDetailView) -> String {
    let mut out = String::new();
    let info = &view.info;
    let _ = writeln!(
        out,
        "{} ({}) · {} 시즌",
        view.badge.name,
        info.abbreviation.as_deref().unwrap_or("-"),
        view.season
    );
    let _ = writeln!(out, "  지구: {}", view.division.as_deref().unwrap_or("-"));
    let _ = writeln!(
        out,
        "  홈구장: {}",
        info.venue.as_ref().map_or("-", |v| v.name.as_str())
    );
    let _ = writeln!(out, "  창단: {}", info.first_year_of_play.as_deref().unwrap_or("-"));
    let _ = writeln!(out, "  로고: {}", view.badge.logo_url);

    if let Some(b) = view.hitting.as_ref().and_then(SeasonStat::as_batting) {
        let _ = writeln!(
            out,
            "\n팀 타격  AVG {} · OBP {} · SLG {} · OPS {} · HR {} · RBI {}",
            format_rate(b.avg),
            format_rate(b.obp),
            format_rate(b.slg),
            format_rate(b.ops),
            b.home_runs,
            b.rbi
        );
    }
    if let Some(p) = view.pitching.as_ref().and_then(SeasonStat::as_pitching) {
        let _ = writeln!(
            out,
            "팀 투구  ERA {} · WHIP {} · SO {} · BB {}",
            format_fixed2(p.era),
            format_fixed2(p.whip),
            p.strike_outs,
            p.walks
        );
    }

    out.push('\n');
    render_leaders(&mut out, "타격 리더", &view.batting_leaders);
    render_leaders(&mut out, "투수 리더", &view.pitching_leaders);

    let _ = writeln!(out, "\n로스터 ({}명)", view.roster.len());
    for p in &view.roster {
        let _ = writeln!(
            out,
            "  {:>3}  {:<24} {}",
            or_dash(p.jersey_number),
            p.full_name,
            p.position.as_deref().unwrap_or("-")
        );
    }

    let _ = writeln!(out, "\n일정");
    match &view.schedule {
        None => {
            let _ = writeln!(out, "  ⚠ 일정을 불러오지 못했습니다.");
        }
        Some(rows) if rows.is_empty() => {
            let _ = writeln!(out, "  경기가 없습니다.");
        }
        Some(rows) => {
            for row in rows {
                let _ = writeln!(
                    out,
                    "  {}  {:<4} vs {:<20} {:<7} {}",
                    row.start,
                    if row.home { "홈" } else { "원정" },
                    row.opponent,
                    row.score,
                    row.result.code()
                );
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cli::types::GamePk,
        core::lookup::KoreanTeamLookup,
        model::{GameStatus, GameTeam},
    };

    fn game(pk: u64, home: (u32, Option<u32>), away: (u32, Option<u32>), code: &str) -> ScheduledGame {
        ScheduledGame {
            pk: GamePk::new(pk),
            home: GameTeam {
                team: TeamRef {
                    id: TeamId::new(home.0),
                    name: String::new(),
                },
                score: home.1,
                is_winner: None,
            },
            away: GameTeam {
                team: TeamRef {
                    id: TeamId::new(away.0),
                    name: String::new(),
                },
                score: away.1,
                is_winner: None,
            },
            status: GameStatus {
                code: Some(code.to_string()),
                detailed_state: String::new(),
                abstract_state: None,
            },
            scheduled_at: None,
        }
    }

    #[test]
    fn test_schedule_rows_from_team_side() {
        let lookup = KoreanTeamLookup::new();
        let games = vec![
            game(1, (119, Some(5)), (147, Some(3)), "F"),
            game(2, (147, Some(2)), (119, Some(2)), "F"),
            game(3, (147, None), (119, None), "S"),
            game(4, (121, Some(1)), (110, Some(0)), "F"),
        ];

        let rows = schedule_rows(&games, TeamId::new(119), &lookup);
        assert_eq!(rows.len(), 3);

        assert!(rows[0].home);
        assert_eq!(rows[0].score, "3 - 5");
        assert_eq!(rows[0].result, GameResult::Win);
        assert_eq!(rows[0].opponent, "뉴욕 양키스");

        assert!(!rows[1].home);
        assert_eq!(rows[1].result, GameResult::Draw);

        assert_eq!(rows[2].score, "-");
        assert_eq!(rows[2].result, GameResult::NoDecision);
    }

    #[test]
    fn test_group_label() {
        let info = TeamInfo {
            team: TeamRef {
                id: TeamId::new(119),
                name: "Los Angeles Dodgers".to_string(),
            },
            abbreviation: None,
            location_name: None,
            first_year_of_play: None,
            venue: None,
            league: Some("National League".to_string()),
            division: Some("National League West".to_string()),
            active: true,
            sport_id: Some(1),
        };
        assert_eq!(group_label(&info), "내셔널리그 서부지구");

        let bare = TeamInfo {
            league: None,
            division: None,
            ..info
        };
        assert_eq!(group_label(&bare), "기타");
    }
}
