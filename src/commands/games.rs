//! Game list for one date and the single game page.

use std::fmt::Write as _;

use serde::Serialize;

use super::common::{emit, format_kst, or_dash, CommandContext, TeamBadge};
use crate::{
    cli::types::{GameDate, GamePk, TeamId},
    engine::{
        derive_result, group_plays,
        highlights::{page, page_count, standout_batters, HIGHLIGHTS_PER_PAGE},
        is_final,
        plays::innings_played,
        winner_side, HalfInningPlays,
    },
    model::{BatterLine, Highlight, Linescore, PitchingDecision, ScheduledGame, Side},
    Result,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSideView {
    pub badge: TeamBadge,
    pub score: Option<u32>,
    /// "승", "패", "무" or "-".
    pub result: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameCard {
    pub game_pk: u64,
    pub start: String,
    pub status: String,
    pub is_final: bool,
    pub away: GameSideView,
    pub home: GameSideView,
    /// Brand colour of the winning club, once decided.
    pub winner_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GamesView {
    pub date: GameDate,
    pub games: Vec<GameCard>,
}

fn side_view(ctx: CommandContext<'_>, game: &ScheduledGame, side: Side) -> GameSideView {
    let team = game.side(side);
    GameSideView {
        badge: ctx.badge(&team.team),
        score: team.score,
        result: derive_result(game, side).badge_ko(),
    }
}

pub fn game_card(ctx: CommandContext<'_>, game: &ScheduledGame) -> GameCard {
    GameCard {
        game_pk: game.pk.as_u64(),
        start: format_kst(game.scheduled_at),
        status: game.status.detailed_state.clone(),
        is_final: is_final(&game.status),
        away: side_view(ctx, game, Side::Away),
        home: side_view(ctx, game, Side::Home),
        winner_color: winner_side(game)
            .map(|side| ctx.lookup.color_for(game.side(side).team.id).to_string()),
    }
}

/// Games on `date`, ordered by start time.
pub async fn load_games(ctx: CommandContext<'_>, date: GameDate, team: Option<TeamId>) -> Result<GamesView> {
    let mut games = ctx.client.schedule_for_date(date, team).await?;
    games.sort_by_key(|g| g.scheduled_at);
    Ok(GamesView {
        date,
        games: games.iter().map(|g| game_card(ctx, g)).collect(),
    })
}

/// Handle the games command
pub async fn handle_games(ctx: CommandContext<'_>, date: GameDate, team: Option<TeamId>, as_json: bool) -> Result<()> {
    let view = load_games(ctx, date, team).await?;
    emit(&view, as_json, render_games)
}

pub fn render_games(view: &GamesView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} 경기 ({}경기)", view.date, view.games.len());
    if view.games.is_empty() {
        let _ = writeln!(out, "예정된 경기가 없습니다.");
        return out;
    }
    for card in &view.games {
        let _ = writeln!(
            out,
            "  [{}] {}  {} {} {}  vs  {} {} {}  ({})",
            card.game_pk,
            card.start,
            card.away.badge.name,
            or_dash(card.away.score),
            card.away.result,
            or_dash(card.home.score),
            card.home.badge.name,
            card.home.result,
            card.status
        );
    }
    out
}

/// Options for the game command.
#[derive(Debug, Clone, Default)]
pub struct GameParams {
    pub inning: Option<u32>,
    /// One-based highlight page.
    pub page: usize,
    pub as_json: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameDetailView {
    pub card: GameCard,
    pub venue_name: Option<String>,
    pub linescore: Linescore,
    pub decisions: Vec<PitchingDecision>,
    pub away_standouts: Vec<BatterLine>,
    pub home_standouts: Vec<BatterLine>,
    pub innings: Vec<u32>,
    pub plays: Vec<HalfInningPlays>,
    pub highlights: Vec<Highlight>,
    /// One-based page shown, after clamping.
    pub highlight_page: usize,
    pub highlight_pages: usize,
    pub highlight_total: usize,
}

/// Live feed and highlights load together; either failing fails the page.
pub async fn load_game(ctx: CommandContext<'_>, pk: GamePk, params: &GameParams) -> Result<GameDetailView> {
    let (detail, highlights) = tokio::try_join!(ctx.client.game_detail(pk), ctx.client.game_highlights(pk))?;

    let pages = page_count(highlights.len(), HIGHLIGHTS_PER_PAGE);
    let index = params.page.saturating_sub(1).min(pages - 1);
    let shown = page(&highlights, index, HIGHLIGHTS_PER_PAGE).to_vec();

    Ok(GameDetailView {
        card: game_card(ctx, &detail.game),
        venue_name: detail.venue_name,
        away_standouts: standout_batters(&detail.batting, Side::Away),
        home_standouts: standout_batters(&detail.batting, Side::Home),
        innings: innings_played(&detail.plays),
        plays: group_plays(&detail.plays, params.inning),
        linescore: detail.linescore,
        decisions: detail.decisions,
        highlights: shown,
        highlight_page: index + 1,
        highlight_pages: pages,
        highlight_total: highlights.len(),
    })
}

/// Handle the game command
pub async fn handle_game(ctx: CommandContext<'_>, pk: GamePk, params: GameParams) -> Result<()> {
    let view = load_game(ctx, pk, &params).await?;
    emit(&view, params.as_json, render_game)
}

fn render_linescore(out: &mut String, view: &GameDetailView) {
    let ls = &view.linescore;
    let mut header = format!("{:<20}", "");
    let mut away = format!("{:<20}", view.card.away.badge.name);
    let mut home = format!("{:<20}", view.card.home.badge.name);
    for inning in &ls.innings {
        let _ = write!(header, "{:>3}", inning.num);
        let _ = write!(away, "{:>3}", or_dash(inning.away_runs));
        let _ = write!(home, "{:>3}", or_dash(inning.home_runs));
    }
    let _ = write!(header, " {:>3}{:>3}{:>3}", "R", "H", "E");
    let _ = write!(
        away,
        " {:>3}{:>3}{:>3}",
        or_dash(ls.away.runs),
        or_dash(ls.away.hits),
        or_dash(ls.away.errors)
    );
    let _ = write!(
        home,
        " {:>3}{:>3}{:>3}",
        or_dash(ls.home.runs),
        or_dash(ls.home.hits),
        or_dash(ls.home.errors)
    );
    let _ = writeln!(out, "{header}\n{away}\n{home}");
}

fn render_standouts(out: &mut String, team: &str, lines: &[BatterLine]) {
    let _ = writeln!(out, "  {team}");
    if lines.is_empty() {
        let _ = writeln!(out, "    -");
    }
    for line in lines {
        let _ = writeln!(
            out,
            "    {:<24} {}안타 {}홈런 {}타점",
            line.player.full_name, line.hits, line.home_runs, line.rbi
        );
    }
}

pub fn render_game(view: &GameDetailView) -> String {
    let mut out = String::new();
    let card = &view.card;
    let _ = writeln!(
        out,
        "{} {} - {} {}  ({})",
        card.away.badge.name,
        or_dash(card.away.score),
        or_dash(card.home.score),
        card.home.badge.name,
        card.status
    );
    let _ = writeln!(
        out,
        "{} · {}\n",
        card.start,
        view.venue_name.as_deref().unwrap_or("-")
    );

    render_linescore(&mut out, view);

    if !view.decisions.is_empty() {
        let _ = writeln!(out, "\n투수 기록");
        for d in &view.decisions {
            let _ = writeln!(
                out,
                "  {:<6} {:<24} IP {} · H {} · R {} · SO {}",
                d.kind.label_ko(),
                d.pitcher.full_name,
                d.innings_pitched.as_deref().unwrap_or("-"),
                or_dash(d.hits),
                or_dash(d.runs),
                or_dash(d.strike_outs)
            );
        }
    }

    let _ = writeln!(out, "\n주요 타자");
    render_standouts(&mut out, &card.away.badge.name, &view.away_standouts);
    render_standouts(&mut out, &card.home.badge.name, &view.home_standouts);

    let _ = writeln!(out, "\n플레이 로그");
    if view.plays.is_empty() {
        let _ = writeln!(out, "  기록된 플레이가 없습니다.");
    }
    for half in &view.plays {
        let _ = writeln!(out, "  {}", half.heading());
        for play in &half.plays {
            let marker = if play.is_scoring_play { "★" } else { "·" };
            let _ = writeln!(
                out,
                "    {marker} {}",
                play.description.as_deref().unwrap_or("-")
            );
        }
    }

    let _ = writeln!(
        out,
        "\n하이라이트 ({}/{} 페이지, 총 {}개)",
        view.highlight_page, view.highlight_pages, view.highlight_total
    );
    for h in &view.highlights {
        let _ = writeln!(out, "  {} {}", h.title, h.duration.as_deref().unwrap_or(""));
        if let Some(url) = &h.video_url {
            let _ = writeln!(out, "    {url}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::lookup::KoreanTeamLookup, engine::fixtures::game, mlb::MlbClient, ClientConfig};

    #[test]
    fn test_game_card_badges_and_winner_color() {
        let client = MlbClient::new(ClientConfig::default()).unwrap();
        let lookup = KoreanTeamLookup::new();
        let ctx = CommandContext::new(&client, &lookup);

        let final_game = game("F", "Final", (Some(5), Some(true)), (Some(3), Some(false)));
        let card = game_card(ctx, &final_game);
        assert!(card.is_final);
        assert_eq!(card.home.result, "승");
        assert_eq!(card.away.result, "패");
        assert_eq!(card.home.badge.name, "LA 다저스");
        assert_eq!(card.winner_color.as_deref(), Some("#005A9C"));

        let unflagged = game("F", "Final", (Some(5), None), (Some(3), None));
        let card = game_card(ctx, &unflagged);
        assert_eq!(card.home.result, "승");
        assert_eq!(card.winner_color, None);

        let live = game("I", "In Progress", (Some(1), None), (Some(0), None));
        let card = game_card(ctx, &live);
        assert_eq!(card.home.result, "-");
        assert_eq!(card.winner_color, None);
    }

    #[test]
    fn test_render_games_empty() {
        let view = GamesView {
            date: "2025-04-01".parse().unwrap(),
            games: Vec::new(),
        };
        assert!(render_games(&view).contains("예정된 경기가 없습니다"));
    }
}
