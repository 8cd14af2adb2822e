//! Highlight paging and standout batters for the game page.

use crate::model::{BatterLine, Side};

/// Highlights shown per page.
pub const HIGHLIGHTS_PER_PAGE: usize = 3;

/// Standout batters listed per side.
pub const STANDOUTS_PER_SIDE: usize = 3;

/// Number of pages for `total` items; an empty list still has one page.
pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    total.div_ceil(per_page).max(1)
}

/// Zero-based `page` of `items`, clamped to the last page.
pub fn page<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    if per_page == 0 || items.is_empty() {
        return &[];
    }
    let last = page_count(items.len(), per_page) - 1;
    let start = page.min(last) * per_page;
    let end = (start + per_page).min(items.len());
    &items[start..end]
}

/// Batters on `side` with a home run, two or more RBI, or three or more
/// hits. Ordered by RBI, then home runs, then hits; at most
/// [`STANDOUTS_PER_SIDE`].
pub fn standout_batters(lines: &[BatterLine], side: Side) -> Vec<BatterLine> {
    let mut standouts: Vec<BatterLine> = lines
        .iter()
        .filter(|l| l.side == side)
        .filter(|l| l.home_runs > 0 || l.rbi >= 2 || l.hits >= 3)
        .cloned()
        .collect();
    standouts.sort_by(|a, b| {
        b.rbi
            .cmp(&a.rbi)
            .then(b.home_runs.cmp(&a.home_runs))
            .then(b.hits.cmp(&a.hits))
    });
    standouts.truncate(STANDOUTS_PER_SIDE);
    standouts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cli::types::PlayerId, model::PersonRef};

    fn line(id: u64, side: Side, hits: u32, home_runs: u32, rbi: u32) -> BatterLine {
        BatterLine {
            player: PersonRef {
                id: PlayerId::new(id),
                full_name: format!("Batter {id}"),
            },
            side,
            hits,
            home_runs,
            rbi,
        }
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, HIGHLIGHTS_PER_PAGE), 1);
        assert_eq!(page_count(3, HIGHLIGHTS_PER_PAGE), 1);
        assert_eq!(page_count(7, HIGHLIGHTS_PER_PAGE), 3);
    }

    #[test]
    fn test_page_slices_and_clamps() {
        let items: Vec<u32> = (1..=7).collect();
        assert_eq!(page(&items, 0, 3), &[1, 2, 3]);
        assert_eq!(page(&items, 2, 3), &[7]);
        assert_eq!(page(&items, 9, 3), &[7]);
        assert!(page::<u32>(&[], 0, 3).is_empty());
    }

    #[test]
    fn test_standouts_threshold_and_order() {
        let lines = vec![
            line(1, Side::Home, 1, 0, 1),
            line(2, Side::Home, 3, 0, 0),
            line(3, Side::Home, 1, 1, 1),
            line(4, Side::Home, 2, 0, 3),
            line(5, Side::Away, 4, 2, 5),
        ];

        let ids: Vec<u64> = standout_batters(&lines, Side::Home)
            .iter()
            .map(|l| l.player.id.as_u64())
            .collect();
        assert_eq!(ids, vec![4, 3, 2]);
    }

    #[test]
    fn test_standouts_capped_per_side() {
        let lines: Vec<BatterLine> = (1..=5).map(|i| line(i, Side::Away, 1, 1, 0)).collect();
        assert_eq!(standout_batters(&lines, Side::Away).len(), STANDOUTS_PER_SIDE);
        assert!(standout_batters(&lines, Side::Home).is_empty());
    }
}
