//! Division standings, AL then NL.

use std::fmt::Write as _;

use serde::Serialize;

use super::common::{emit, CommandContext};
use crate::{
    cli::types::Season,
    engine::{group_by_league, LeagueStandings},
    model::StandingRow,
    Result,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingLine {
    pub team_name: String,
    pub color: String,
    #[serde(flatten)]
    pub row: StandingRow,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivisionView {
    pub label: String,
    pub rows: Vec<StandingLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueView {
    pub title: &'static str,
    pub divisions: Vec<DivisionView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingsView {
    pub season: Season,
    pub leagues: Vec<LeagueView>,
}

pub fn league_view(ctx: CommandContext<'_>, league: LeagueStandings) -> LeagueView {
    LeagueView {
        title: league.league.title(),
        divisions: league
            .divisions
            .into_iter()
            .map(|d| DivisionView {
                label: d.label,
                rows: d
                    .rows
                    .into_iter()
                    .map(|row| StandingLine {
                        team_name: ctx.lookup.display_name(&row.team),
                        color: ctx.lookup.color_for(row.team.id).to_string(),
                        row,
                    })
                    .collect(),
            })
            .collect(),
    }
}

pub async fn load_standings(ctx: CommandContext<'_>, season: Season) -> Result<StandingsView> {
    let divisions = ctx.client.standings(season).await?;
    Ok(StandingsView {
        season,
        leagues: group_by_league(divisions)
            .into_iter()
            .map(|league| league_view(ctx, league))
            .collect(),
    })
}

/// Handle the standings command
pub async fn handle_standings(ctx: CommandContext<'_>, season: Season, as_json: bool) -> Result<()> {
    let view = load_standings(ctx, season).await?;
    emit(&view, as_json, render_standings)
}

pub fn render_standings(view: &StandingsView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} 시즌 순위", view.season);
    for league in &view.leagues {
        let _ = writeln!(out, "\n{}", league.title);
        if league.divisions.is_empty() {
            let _ = writeln!(out, "  순위 정보가 없습니다.");
        }
        for division in &league.divisions {
            let _ = writeln!(out, "  {}", division.label);
            let _ = writeln!(
                out,
                "    {:<22} {:>3} {:>3} {:>6} {:>5} {:>5} {:>6} {:>5}",
                "팀", "W", "L", "PCT", "GB", "RD", "L10", "STRK"
            );
            for line in &division.rows {
                let r = &line.row;
                let rd = r.run_differential.map_or_else(|| "-".to_string(), |d| format!("{d:+}"));
                let _ = writeln!(
                    out,
                    "    {:<22} {:>3} {:>3} {:>6} {:>5} {:>5} {:>6} {:>5}",
                    line.team_name, r.wins, r.losses, r.pct, r.games_back, rd, r.last_ten, r.streak
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
        cli::types::TeamId,
        core::lookup::KoreanTeamLookup,
        mlb::MlbClient,
        model::{team::League, DivisionStandings, TeamRef},
        ClientConfig,
    };

    fn row(id: u32, wins: u32, losses: u32) -> StandingRow {
        StandingRow {
            team: TeamRef {
                id: TeamId::new(id),
                name: "Upstream".to_string(),
            },
            wins,
            losses,
            pct: "0.600".to_string(),
            games_back: "-".to_string(),
            run_differential: Some(-3),
            last_ten: "6-4".to_string(),
            streak: "W2".to_string(),
        }
    }

    #[test]
    fn test_league_view_uses_korean_names() {
        let client = MlbClient::new(ClientConfig::default()).unwrap();
        let lookup = KoreanTeamLookup::new();
        let ctx = CommandContext::new(&client, &lookup);

        let league = LeagueStandings {
            league: League::National,
            divisions: vec![DivisionStandings {
                division_id: Some(203),
                league: Some(League::National),
                label: "서부지구".to_string(),
                rows: vec![row(119, 98, 64), row(9999, 50, 112)],
            }],
        };
        let view = league_view(ctx, league);
        assert_eq!(view.title, "NATIONAL LEAGUE");
        assert_eq!(view.divisions[0].rows[0].team_name, "LA 다저스");
        assert_eq!(view.divisions[0].rows[1].team_name, "Upstream");

        let text = render_standings(&StandingsView {
            season: Season::new(2024),
            leagues: vec![view],
        });
        assert!(text.contains("서부지구"));
        assert!(text.contains("-3"));
    }
}
