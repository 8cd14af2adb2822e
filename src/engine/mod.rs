//! Aggregation and ordering over normalized entities.
//!
//! Nothing in here talks to the network directly: the async pieces take
//! the fetch as a closure so the same code runs against [`crate::mlb`] or a
//! test double.

pub mod filters;
pub mod gather;
pub mod highlights;
pub mod leaders;
pub mod plays;
pub mod results;
pub mod roster;
pub mod sort;
pub mod standings;
pub mod stats;

#[cfg(test)]
pub(crate) mod fixtures;

pub use filters::filter_players;
pub use gather::{scatter_gather, Gathered};
pub use leaders::{pick_leaders, BATTING_CATEGORIES, PITCHING_CATEGORIES};
pub use plays::{group_plays, HalfInningPlays};
pub use results::{derive_result, is_final, winner_side};
pub use roster::{default_order, is_league_team, jersey_order, league_teams, merge_rosters};
pub use sort::{metric_value, sort_players};
pub use standings::{group_by_league, LeagueStandings};
pub use stats::{attach_stats, stat_for, StatMap};
