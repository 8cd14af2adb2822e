//! Metric ordering for the players table.
//!
//! Direction depends on the metric: ERA and WHIP read lower-is-better and
//! sort ascending, everything else descending. Players without an attached
//! stat always trail players with one. Within players that have a stat, a
//! value that cannot be read for the chosen metric (a ".---" rate, or a
//! batting line asked for ERA) trails usable values. Equal values fall back
//! to the full name. All sorts are stable.

use std::cmp::Ordering;

use super::{
    roster::default_order,
    stats::{stat_for, StatMap},
};
use crate::{
    cli::types::{RoleFilter, SortKey},
    core::lookup::TeamLookup,
    model::{Player, SeasonStat},
};

/// Numeric value of `key` for one stat line.
pub fn metric_value(stat: &SeasonStat, key: SortKey) -> Option<f64> {
    match (stat, key) {
        (SeasonStat::Batting(b), SortKey::Avg) => b.avg,
        (SeasonStat::Batting(b), SortKey::Obp) => b.obp,
        (SeasonStat::Batting(b), SortKey::Slg) => b.slg,
        (SeasonStat::Batting(b), SortKey::Ops) => b.ops,
        (SeasonStat::Batting(b), SortKey::Hr) => Some(f64::from(b.home_runs)),
        (SeasonStat::Batting(b), SortKey::Rbi) => Some(f64::from(b.rbi)),
        (SeasonStat::Pitching(p), SortKey::Era) => p.era,
        (SeasonStat::Pitching(p), SortKey::So) => Some(f64::from(p.strike_outs)),
        (SeasonStat::Pitching(p), SortKey::Whip) => p.whip,
        (SeasonStat::Pitching(p), SortKey::K9) => Some(p.strikeouts_per_nine()),
        _ => None,
    }
}

/// Order `players` for display.
///
/// `SortKey::Default`, or any key while the role filter is `All` (no stats
/// are loaded then), falls back to team name and jersey number.
pub fn sort_players(
    players: &mut [Player],
    key: SortKey,
    filter: RoleFilter,
    stats: &StatMap,
    lookup: &dyn TeamLookup,
) {
    if key == SortKey::Default || filter == RoleFilter::All {
        default_order(players, lookup);
        return;
    }
    players.sort_by(|a, b| compare_by_metric(a, b, key, stats));
}

fn compare_by_metric(a: &Player, b: &Player, key: SortKey, stats: &StatMap) -> Ordering {
    let (stat_a, stat_b) = match (stat_for(stats, a.id), stat_for(stats, b.id)) {
        (None, None) => return Ordering::Equal,
        (None, Some(_)) => return Ordering::Greater,
        (Some(_), None) => return Ordering::Less,
        (Some(x), Some(y)) => (x, y),
    };

    let by_value = match (metric_value(stat_a, key), metric_value(stat_b, key)) {
        (Some(x), Some(y)) if key.is_ascending() => x.total_cmp(&y),
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_value.then_with(|| a.full_name.cmp(&b.full_name))
}
