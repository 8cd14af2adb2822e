//! Ballparks: the list derived from active clubs and the venue page.

use std::{collections::HashMap, fmt::Write as _};

use serde::Serialize;
use tracing::debug;

use super::common::{emit, or_dash, CommandContext};
use crate::{
    cli::types::VenueId,
    core::lookup::TeamLookup,
    engine::is_league_team,
    model::{TeamInfo, Venue, WikiSummary},
    Result,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueEntry {
    pub id: VenueId,
    pub name: String,
    /// Korean names of the clubs playing here.
    pub teams: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenuesView {
    pub venues: Vec<VenueEntry>,
}

/// One entry per home venue of the active clubs, sorted by venue name.
pub fn home_venues(teams: &[TeamInfo], lookup: &dyn TeamLookup) -> Vec<VenueEntry> {
    let mut by_id: HashMap<VenueId, VenueEntry> = HashMap::new();
    for team in teams.iter().filter(|t| is_league_team(t)) {
        let Some(venue) = &team.venue else {
            debug!(team = %team.team.id, "team without venue");
            continue;
        };
        by_id
            .entry(venue.id)
            .or_insert_with(|| VenueEntry {
                id: venue.id,
                name: venue.name.clone(),
                teams: Vec::new(),
            })
            .teams
            .push(lookup.display_name(&team.team));
    }

    let mut venues: Vec<VenueEntry> = by_id.into_values().collect();
    for venue in &mut venues {
        venue.teams.sort();
    }
    venues.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
    venues
}

pub async fn load_venues(ctx: CommandContext<'_>) -> Result<VenuesView> {
    let teams = ctx.client.teams().await?;
    Ok(VenuesView {
        venues: home_venues(&teams, ctx.lookup),
    })
}

/// Handle the venues command
pub async fn handle_venues(ctx: CommandContext<'_>, as_json: bool) -> Result<()> {
    let view = load_venues(ctx).await?;
    emit(&view, as_json, render_venues)
}

pub fn render_venues(view: &VenuesView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "구장 {}곳", view.venues.len());
    for venue in &view.venues {
        let _ = writeln!(out, "  {:>5}  {:<32} {}", venue.id, venue.name, venue.teams.join(", "));
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueView {
    pub venue: Venue,
    /// Encyclopedia summary, when one could be found.
    pub summary: Option<WikiSummary>,
}

/// The venue must load; the encyclopedia summary is optional.
pub async fn load_venue(ctx: CommandContext<'_>, id: VenueId) -> Result<VenueView> {
    let venue = ctx.client.venue(id).await?;
    let summary = ctx.client.wiki_summary(&venue.name).await;
    Ok(VenueView { venue, summary })
}

/// Handle the venue command
pub async fn handle_venue(ctx: CommandContext<'_>, id: VenueId, as_json: bool) -> Result<()> {
    let view = load_venue(ctx, id).await?;
    emit(&view, as_json, render_venue)
}

pub fn render_venue(view: &VenueView) -> String {
    let v = &view.venue;
    let mut out = String::new();
    let _ = writeln!(out, "{}", v.name);
    let location: Vec<&str> = [v.city.as_deref(), v.state.as_deref(), v.country.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    let _ = writeln!(
        out,
        "  위치: {}",
        if location.is_empty() { "-".to_string() } else { location.join(", ") }
    );
    let _ = writeln!(out, "  수용 인원: {}", or_dash(v.capacity));
    let _ = writeln!(out, "  잔디: {}", v.turf_type.as_deref().unwrap_or("-"));
    let _ = writeln!(out, "  지붕: {}", v.roof_type.as_deref().unwrap_or("-"));

    match &view.summary {
        Some(s) => {
            let _ = writeln!(out, "\n{}", s.title);
            if let Some(description) = &s.description {
                let _ = writeln!(out, "  {description}");
            }
            if let Some(extract) = &s.extract {
                let _ = writeln!(out, "\n{extract}");
            }
            if let Some(url) = &s.page_url {
                let _ = writeln!(out, "\n  {url}");
            }
        }
        None => {
            let _ = writeln!(out, "\n  백과사전 정보가 없습니다.");
        }
    }
    out
}
