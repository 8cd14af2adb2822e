//! Live game feed (`/game/{pk}/feed/live`) and game content
//! (`/game/{pk}/content`) wire shapes.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use super::types::{parse_timestamp, RawIdName, RawPerson, RawStatus};
use crate::{
    cli::types::GamePk,
    model::{
        game::{BatterLine, DecisionKind, HalfInning, LineTotals, LinescoreInning},
        GameDetail, GameTeam, Highlight, Linescore, PitchingDecision, Play, ScheduledGame, Side,
    },
};

/// Preferred thumbnail sizes, best first.
const PREFERRED_CUTS: &[&str] = &["320x180", "480x270"];

/// Preferred playback encodings, any of which wins over the first listed.
const PREFERRED_PLAYBACKS: &[&str] = &["HTTP_CLOUD_MOBILE", "HTTP_CLOUD_TABLET", "FLASH_2500K_1280X720"];

const DEFAULT_HIGHLIGHT_TITLE: &str = "하이라이트";

#[derive(Debug, Clone, Deserialize)]
pub struct RawFeedTeams {
    pub home: RawIdName,
    pub away: RawIdName,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDateTime {
    #[serde(default)]
    pub date_time: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawGameData {
    pub teams: RawFeedTeams,
    #[serde(default)]
    pub status: RawStatus,
    #[serde(default)]
    pub datetime: Option<RawDateTime>,
    #[serde(default)]
    pub venue: Option<RawIdName>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RawLineTotals {
    #[serde(default)]
    pub runs: Option<u32>,
    #[serde(default)]
    pub hits: Option<u32>,
    #[serde(default)]
    pub errors: Option<u32>,
}

impl From<RawLineTotals> for LineTotals {
    fn from(raw: RawLineTotals) -> Self {
        LineTotals {
            runs: raw.runs,
            hits: raw.hits,
            errors: raw.errors,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawInning {
    pub num: u32,
    #[serde(default)]
    pub home: Option<RawLineTotals>,
    #[serde(default)]
    pub away: Option<RawLineTotals>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLineTeams {
    #[serde(default)]
    pub home: RawLineTotals,
    #[serde(default)]
    pub away: RawLineTotals,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLinescore {
    #[serde(default)]
    pub innings: Vec<RawInning>,
    #[serde(default)]
    pub teams: RawLineTeams,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBoxPitching {
    #[serde(default)]
    pub innings_pitched: Option<String>,
    #[serde(default)]
    pub hits: Option<u32>,
    #[serde(default)]
    pub runs: Option<u32>,
    #[serde(default)]
    pub strike_outs: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBoxBatting {
    #[serde(default)]
    pub hits: Option<u32>,
    #[serde(default)]
    pub home_runs: Option<u32>,
    #[serde(default)]
    pub rbi: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBoxStats {
    #[serde(default)]
    pub pitching: Option<RawBoxPitching>,
    #[serde(default)]
    pub batting: Option<RawBoxBatting>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawBoxPlayer {
    #[serde(default)]
    pub person: Option<RawPerson>,
    #[serde(default)]
    pub stats: RawBoxStats,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBoxTeam {
    /// Keyed `"ID<personId>"`.
    #[serde(default)]
    pub players: HashMap<String, RawBoxPlayer>,
    /// Person ids in lineup order.
    #[serde(default)]
    pub batters: Vec<u64>,
}

impl RawBoxTeam {
    fn batter_lines(&self, side: Side) -> impl Iterator<Item = BatterLine> + '_ {
        self.batters.iter().filter_map(move |id| {
            let player = self.players.get(&format!("ID{id}"))?;
            let batting = player.stats.batting.as_ref()?;
            let person = player.person.clone()?;
            Some(BatterLine {
                player: person.into_ref(),
                side,
                hits: batting.hits.unwrap_or(0),
                home_runs: batting.home_runs.unwrap_or(0),
                rbi: batting.rbi.unwrap_or(0),
            })
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBoxTeams {
    #[serde(default)]
    pub home: RawBoxTeam,
    #[serde(default)]
    pub away: RawBoxTeam,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBoxscore {
    #[serde(default)]
    pub teams: RawBoxTeams,
}

impl RawBoxscore {
    fn find_pitcher(&self, person_id: u64) -> Option<(Side, Option<&RawBoxPitching>)> {
        let key = format!("ID{person_id}");
        if let Some(p) = self.teams.home.players.get(&key) {
            return Some((Side::Home, p.stats.pitching.as_ref()));
        }
        self.teams
            .away
            .players
            .get(&key)
            .map(|p| (Side::Away, p.stats.pitching.as_ref()))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDecisions {
    #[serde(default)]
    pub winner: Option<RawPerson>,
    #[serde(default)]
    pub loser: Option<RawPerson>,
    #[serde(default)]
    pub save: Option<RawPerson>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlayResult {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_scoring_play: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAbout {
    #[serde(default)]
    pub inning: Option<u32>,
    #[serde(default)]
    pub half_inning: Option<String>,
    #[serde(default)]
    pub is_scoring_play: Option<bool>,
    #[serde(default)]
    pub outs_after_play: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMatchup {
    #[serde(default)]
    pub batter: Option<RawPerson>,
    #[serde(default)]
    pub pitcher: Option<RawPerson>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCount {
    #[serde(default)]
    pub balls: Option<u32>,
    #[serde(default)]
    pub strikes: Option<u32>,
    #[serde(default)]
    pub outs: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlay {
    #[serde(default)]
    pub at_bat_index: Option<u32>,
    #[serde(default)]
    pub result: RawPlayResult,
    #[serde(default)]
    pub about: RawAbout,
    #[serde(default)]
    pub matchup: RawMatchup,
    #[serde(default)]
    pub count: Option<RawCount>,
}

impl RawPlay {
    fn into_play(self) -> Play {
        let count = self.count.unwrap_or_default();
        Play {
            at_bat_index: self.at_bat_index,
            inning: self.about.inning,
            half: self.about.half_inning.as_deref().and_then(HalfInning::parse),
            description: self.result.description,
            batter: self.matchup.batter.and_then(|p| p.full_name),
            pitcher: self.matchup.pitcher.and_then(|p| p.full_name),
            balls: count.balls,
            strikes: count.strikes,
            outs: count.outs.or(self.about.outs_after_play),
            is_scoring_play: self.result.is_scoring_play.unwrap_or(false)
                || self.about.is_scoring_play.unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlays {
    #[serde(default)]
    pub all_plays: Vec<RawPlay>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLiveData {
    #[serde(default)]
    pub linescore: RawLinescore,
    #[serde(default)]
    pub boxscore: RawBoxscore,
    #[serde(default)]
    pub decisions: RawDecisions,
    #[serde(default)]
    pub plays: RawPlays,
}

/// `v1.1/game/{pk}/feed/live`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveFeed {
    #[serde(default)]
    pub game_pk: Option<u64>,
    pub game_data: RawGameData,
    #[serde(default)]
    pub live_data: RawLiveData,
}

impl LiveFeed {
    pub fn into_detail(self, requested: GamePk) -> GameDetail {
        let live = self.live_data;
        let data = self.game_data;

        let decisions = [
            (DecisionKind::Winner, live.decisions.winner),
            (DecisionKind::Loser, live.decisions.loser),
            (DecisionKind::Save, live.decisions.save),
        ]
        .into_iter()
        .filter_map(|(kind, person)| person.map(|p| (kind, p)))
        .map(|(kind, person)| {
            let found = live.boxscore.find_pitcher(person.id);
            let line = found.and_then(|(_, line)| line);
            PitchingDecision {
                kind,
                side: found.map(|(side, _)| side),
                innings_pitched: line.and_then(|l| l.innings_pitched.clone()),
                hits: line.and_then(|l| l.hits),
                runs: line.and_then(|l| l.runs),
                strike_outs: line.and_then(|l| l.strike_outs),
                pitcher: person.into_ref(),
            }
        })
        .collect();

        let batting = live
            .boxscore
            .teams
            .away
            .batter_lines(Side::Away)
            .chain(live.boxscore.teams.home.batter_lines(Side::Home))
            .collect();

        let totals = &live.linescore.teams;
        let game = ScheduledGame {
            pk: self.game_pk.map(GamePk::new).unwrap_or(requested),
            home: GameTeam {
                team: data.teams.home.into_team_ref(),
                score: totals.home.runs,
                is_winner: None,
            },
            away: GameTeam {
                team: data.teams.away.into_team_ref(),
                score: totals.away.runs,
                is_winner: None,
            },
            status: data.status.into_status(),
            scheduled_at: parse_timestamp(data.datetime.and_then(|d| d.date_time).as_deref()),
        };

        let linescore = Linescore {
            innings: live
                .linescore
                .innings
                .iter()
                .map(|i| LinescoreInning {
                    num: i.num,
                    home_runs: i.home.and_then(|t| t.runs),
                    away_runs: i.away.and_then(|t| t.runs),
                })
                .collect(),
            home: live.linescore.teams.home.into(),
            away: live.linescore.teams.away.into(),
        };

        GameDetail {
            game,
            venue_name: data.venue.and_then(|v| v.name),
            linescore,
            decisions,
            batting,
            plays: live.plays.all_plays.into_iter().map(RawPlay::into_play).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPlayback {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawImage {
    /// Either an object keyed by "WxH" or an array of cuts with width/height.
    #[serde(default)]
    pub cuts: Option<Value>,
}

impl RawImage {
    fn cut_src(cut: &Value) -> Option<String> {
        cut.get("src").and_then(Value::as_str).map(str::to_string)
    }

    fn preferred_src(&self) -> Option<String> {
        match self.cuts.as_ref()? {
            Value::Object(map) => PREFERRED_CUTS
                .iter()
                .find_map(|k| map.get(*k))
                .or_else(|| map.values().next())
                .and_then(Self::cut_src),
            Value::Array(cuts) => {
                let sized = |key: &str| {
                    cuts.iter().find(|c| {
                        let w = c.get("width").and_then(Value::as_u64);
                        let h = c.get("height").and_then(Value::as_u64);
                        matches!((w, h), (Some(w), Some(h)) if format!("{w}x{h}") == key)
                    })
                };
                PREFERRED_CUTS
                    .iter()
                    .find_map(|k| sized(k))
                    .or_else(|| cuts.first())
                    .and_then(Self::cut_src)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawHighlightItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub guid: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub blurb: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub image: RawImage,
    #[serde(default)]
    pub playbacks: Vec<RawPlayback>,
}

impl RawHighlightItem {
    fn into_highlight(self, index: usize) -> Highlight {
        let video_url = self
            .playbacks
            .iter()
            .find(|p| {
                p.name
                    .as_deref()
                    .is_some_and(|n| PREFERRED_PLAYBACKS.contains(&n))
            })
            .or_else(|| self.playbacks.first())
            .and_then(|p| p.url.clone());

        Highlight {
            id: self
                .id
                .or(self.guid)
                .or(self.slug)
                .unwrap_or_else(|| index.to_string()),
            title: self
                .title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_HIGHLIGHT_TITLE.to_string()),
            blurb: self.blurb.or(self.description).unwrap_or_default(),
            duration: self.duration,
            image_url: self.image.preferred_src(),
            video_url,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawItemList {
    #[serde(default)]
    pub items: Vec<RawHighlightItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawHighlightsBlock {
    #[serde(default)]
    pub highlights: Option<RawItemList>,
    #[serde(default)]
    pub live: Option<RawItemList>,
    #[serde(default)]
    pub items: Option<Vec<RawHighlightItem>>,
}

/// `/game/{pk}/content`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentEnvelope {
    #[serde(default)]
    pub highlights: Option<RawHighlightsBlock>,
}

impl ContentEnvelope {
    /// Items from the first list present: curated, then live, then flat.
    pub fn into_highlights(self) -> Vec<Highlight> {
        let Some(block) = self.highlights else {
            return Vec::new();
        };
        let items = block
            .highlights
            .map(|l| l.items)
            .or(block.live.map(|l| l.items))
            .or(block.items)
            .unwrap_or_default();
        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| item.into_highlight(i))
            .collect()
    }
}
