//! Player detail: profile plus the season's hitting and pitching lines.

use std::fmt::Write as _;

use serde::Serialize;

use super::common::{emit, format_fixed2, format_rate, or_dash, CommandContext};
use crate::{
    cli::types::{PlayerId, Role, Season, StatGroup},
    model::{PlayerProfile, SeasonStat},
    Result,
};

const HEADSHOT_URL: &str = "https://img.mlbstatic.com/mlb-photos/image/upload/w_256,q_100/v1/people";

pub fn headshot_url(id: PlayerId) -> String {
    format!("{HEADSHOT_URL}/{id}/headshot/silo/current")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub profile: PlayerProfile,
    pub role: Role,
    pub team_name: Option<String>,
    pub headshot_url: String,
    pub season: Season,
    pub hitting: Option<SeasonStat>,
    pub pitching: Option<SeasonStat>,
}

/// Profile and both stat groups, loaded together; any failure fails the view.
pub async fn load_player(ctx: CommandContext<'_>, id: PlayerId, season: Season) -> Result<PlayerView> {
    let (profile, hitting, pitching) = tokio::try_join!(
        ctx.client.player_info(id),
        ctx.client.player_season_stats(id, season, StatGroup::Hitting),
        ctx.client.player_season_stats(id, season, StatGroup::Pitching),
    )?;

    Ok(PlayerView {
        role: Role::classify(
            profile.position_type.as_deref(),
            profile.position_abbreviation.as_deref(),
        ),
        team_name: profile.current_team.as_ref().map(|t| ctx.lookup.display_name(t)),
        headshot_url: headshot_url(id),
        season,
        hitting,
        pitching,
        profile,
    })
}

/// Handle the player command
pub async fn handle_player(ctx: CommandContext<'_>, id: PlayerId, season: Season, as_json: bool) -> Result<()> {
    let view = load_player(ctx, id, season).await?;
    emit(&view, as_json, render_player)
}

pub fn render_player(view: &PlayerView) -> String {
    let p = &view.profile;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} #{} {} ({})",
        p.full_name,
        p.primary_number.as_deref().unwrap_or("-"),
        p.position_abbreviation.as_deref().unwrap_or("-"),
        view.role
    );
    let _ = writeln!(out, "  소속: {}", view.team_name.as_deref().unwrap_or("-"));
    let _ = writeln!(
        out,
        "  투타: {} / {}",
        p.bats.as_deref().unwrap_or("-"),
        p.throws.as_deref().unwrap_or("-")
    );
    let _ = writeln!(
        out,
        "  생년월일: {} ({})",
        or_dash(p.birth_date),
        p.birth_place.as_deref().unwrap_or("-")
    );
    let _ = writeln!(
        out,
        "  신장/체중: {} / {}",
        p.height.as_deref().unwrap_or("-"),
        or_dash(p.weight)
    );
    let _ = writeln!(out, "  데뷔: {}", or_dash(p.mlb_debut));
    let _ = writeln!(out, "  사진: {}", view.headshot_url);

    let _ = writeln!(out, "\n{} 시즌", view.season);
    match view.hitting.as_ref().and_then(SeasonStat::as_batting) {
        Some(b) => {
            let _ = writeln!(
                out,
                "  타격  G {} · AVG {} · OBP {} · SLG {} · OPS {} · HR {} · RBI {}",
                b.games,
                format_rate(b.avg),
                format_rate(b.obp),
                format_rate(b.slg),
                format_rate(b.ops),
                b.home_runs,
                b.rbi
            );
        }
        None => {
            let _ = writeln!(out, "  타격 기록 없음");
        }
    }
    match view.pitching.as_ref().and_then(SeasonStat::as_pitching) {
        Some(s) => {
            let _ = writeln!(
                out,
                "  투구  G {} · ERA {} · W-L {}-{} · SV {} · IP {} · SO {} · WHIP {}",
                s.games,
                format_fixed2(s.era),
                or_dash(s.wins),
                or_dash(s.losses),
                or_dash(s.saves),
                s.innings_pitched.as_deref().unwrap_or("-"),
                s.strike_outs,
                format_fixed2(s.whip)
            );
        }
        None => {
            let _ = writeln!(out, "  투구 기록 없음");
        }
    }
    out
}
