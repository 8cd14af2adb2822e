//! Per-player season stat attachment.

use std::{collections::HashMap, fmt, future::Future};

use tracing::{debug, warn};

use super::gather::scatter_gather;
use crate::{
    cli::types::{PlayerId, RoleFilter, StatGroup},
    error::Result,
    model::{Player, SeasonStat},
};

/// Player id to season stat. A present key with `None` means the lookup
/// ran but produced nothing usable.
pub type StatMap = HashMap<PlayerId, Option<SeasonStat>>;

/// Stat attached to `id`, if any.
pub fn stat_for(stats: &StatMap, id: PlayerId) -> Option<&SeasonStat> {
    stats.get(&id).and_then(Option::as_ref)
}

#[derive(Debug, Clone, Copy)]
struct StatRequest {
    id: PlayerId,
    group: StatGroup,
}

impl fmt::Display for StatRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {} ({})", self.id, self.group)
    }
}

/// Look up season stats for every player kept by `filter`.
///
/// With [`RoleFilter::All`] nothing is fetched and the map is empty. Each
/// player is queried in their own role's group; a failed lookup is recorded
/// as `None` instead of failing the batch.
pub async fn attach_stats<F, Fut>(players: &[Player], filter: RoleFilter, fetch_stat: F) -> StatMap
where
    F: Fn(PlayerId, StatGroup) -> Fut,
    Fut: Future<Output = Result<Option<SeasonStat>>>,
{
    if filter == RoleFilter::All {
        return StatMap::new();
    }

    let requests: Vec<StatRequest> = players
        .iter()
        .filter(|p| p.role.matches(filter))
        .map(|p| StatRequest {
            id: p.id,
            group: p.role.stat_group(),
        })
        .collect();
    debug!(requests = requests.len(), %filter, "fetching season stats");

    let gathered = scatter_gather(requests, |req| fetch_stat(req.id, req.group)).await;
    if gathered.is_partial() {
        warn!(failed = gathered.failure_count(), "some season stats could not be loaded");
    }

    let mut stats: StatMap = gathered
        .failed
        .into_iter()
        .map(|(req, _)| (req.id, None))
        .collect();
    stats.extend(gathered.settled.into_iter().map(|(req, stat)| (req.id, stat)));
    stats
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::{
        cli::types::Role,
        engine::fixtures::{batting, create_test_player, pitching, team},
        error::MlbError,
    };

    fn roster() -> Vec<Player> {
        let dodgers = team(119, "Los Angeles Dodgers");
        vec![
            create_test_player(1, "Batter One", Role::Batter, Some(1), &dodgers),
            create_test_player(2, "Pitcher Two", Role::Pitcher, Some(2), &dodgers),
            create_test_player(3, "Batter Three", Role::Batter, Some(3), &dodgers),
        ]
    }

    #[tokio::test]
    async fn test_all_filter_skips_lookups() {
        let calls = AtomicUsize::new(0);
        let stats = attach_stats(&roster(), RoleFilter::All, |_, _| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok(None) }
        })
        .await;

        assert!(stats.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_only_matching_role_is_queried_in_its_group() {
        let stats = attach_stats(&roster(), RoleFilter::PitchersOnly, |id, group| async move {
            assert_eq!(group, StatGroup::Pitching);
            assert_eq!(id, PlayerId::new(2));
            Ok(Some(pitching(Some(3.10), 150, "160.0")))
        })
        .await;

        assert_eq!(stats.len(), 1);
        assert!(stat_for(&stats, PlayerId::new(2)).is_some());
        assert!(stat_for(&stats, PlayerId::new(1)).is_none());
    }

    #[tokio::test]
    async fn test_failed_lookup_attaches_absent_stat() {
        let stats = attach_stats(&roster(), RoleFilter::BattersOnly, |id, group| async move {
            assert_eq!(group, StatGroup::Hitting);
            if id == PlayerId::new(3) {
                Err(MlbError::not_found("stats", id))
            } else {
                Ok(Some(batting(Some(0.300), 20)))
            }
        })
        .await;

        assert_eq!(stats.len(), 2);
        assert!(stat_for(&stats, PlayerId::new(1)).is_some());
        assert_eq!(stats.get(&PlayerId::new(3)), Some(&None));
    }
}
