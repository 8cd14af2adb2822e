//! Common utilities shared across commands.
//!
//! Every command follows the same shape: a `load_*` function builds a
//! serializable view from the API, and a `handle_*` function prints that
//! view either as text or as JSON. Load failures propagate to `main`, which
//! hands them to [`report_load_error`].

use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;
use tracing::error;

use crate::{
    core::lookup::TeamLookup,
    error::{MlbError, Result},
    mlb::MlbClient,
    model::TeamRef,
};

/// Korea Standard Time, UTC+9.
const KST_OFFSET_SECS: i32 = 9 * 3600;

/// Resources every command needs: the API client and the team lookup.
#[derive(Clone, Copy)]
pub struct CommandContext<'a> {
    pub client: &'a MlbClient,
    pub lookup: &'a dyn TeamLookup,
}

impl<'a> CommandContext<'a> {
    pub fn new(client: &'a MlbClient, lookup: &'a dyn TeamLookup) -> Self {
        Self { client, lookup }
    }

    /// Display card for a team: Korean name, colour and logo.
    pub fn badge(&self, team: &TeamRef) -> TeamBadge {
        TeamBadge {
            id: team.id.as_u32(),
            name: self.lookup.display_name(team),
            color: self.lookup.color_for(team.id).to_string(),
            logo_url: self.lookup.logo_url_for(team.id),
        }
    }
}

/// Team decorations resolved for output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamBadge {
    pub id: u32,
    pub name: String,
    pub color: String,
    pub logo_url: String,
}

/// Print `view` as pretty JSON, or as its text rendering.
pub fn emit<T: Serialize>(view: &T, as_json: bool, render: impl FnOnce(&T) -> String) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(view)?); // tarpaulin::skip
    } else {
        print!("{}", render(view)); // tarpaulin::skip
    }
    Ok(())
}

/// User-facing line for a failed load.
pub fn load_error_message(err: &MlbError) -> String {
    match err {
        MlbError::NotFound { entity, id } => {
            format!("⚠ {}을(를) 찾을 수 없습니다: {id}", entity_ko(entity))
        }
        e if e.is_data_fetch() => "⚠ 데이터를 불러오지 못했습니다. 잠시 후 다시 시도해 주세요.".to_string(),
        e => format!("⚠ {e}"),
    }
}

/// Log a failed load and tell the user, without a backtrace.
pub fn report_load_error(err: &MlbError) {
    error!(error = %err, "load failed");
    eprintln!("{}", load_error_message(err)); // tarpaulin::skip
}

fn entity_ko(entity: &str) -> &str {
    match entity {
        "team" => "팀",
        "player" => "선수",
        "venue" => "구장",
        "game" => "경기",
        other => other,
    }
}

/// Start time in KST, e.g. "10/26 09:08".
pub fn format_kst(at: Option<DateTime<Utc>>) -> String {
    match (at, FixedOffset::east_opt(KST_OFFSET_SECS)) {
        (Some(at), Some(kst)) => at.with_timezone(&kst).format("%m/%d %H:%M").to_string(),
        _ => "-".to_string(),
    }
}

/// Rate stat in baseball style: ".312", "1.045"; "-" when missing.
pub fn format_rate(value: Option<f64>) -> String {
    match value {
        Some(v) if (0.0..1.0).contains(&v) => {
            let s = format!("{v:.3}");
            s.trim_start_matches('0').to_string()
        }
        Some(v) => format!("{v:.3}"),
        None => "-".to_string(),
    }
}

/// Two-decimal stat such as ERA or WHIP; "-" when missing.
pub fn format_fixed2(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}

pub fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
