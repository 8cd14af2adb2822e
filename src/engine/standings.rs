//! Standings grouping: divisions split by league, East, Central, West.

use tracing::debug;

use crate::{
    core::division::localize_division,
    model::{team::League, DivisionStandings},
};

/// (division id, league, Korean label), in display order.
const DIVISION_META: &[(u32, League, &str)] = &[
    (201, League::American, "동부지구"),
    (202, League::American, "중부지구"),
    (200, League::American, "서부지구"),
    (204, League::National, "동부지구"),
    (205, League::National, "중부지구"),
    (203, League::National, "서부지구"),
];

/// Standings for one league, divisions in display order.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct LeagueStandings {
    pub league: League,
    pub divisions: Vec<DivisionStandings>,
}

fn meta_for(division_id: Option<u32>) -> Option<(usize, League, &'static str)> {
    let id = division_id?;
    DIVISION_META
        .iter()
        .enumerate()
        .find(|(_, (meta_id, _, _))| *meta_id == id)
        .map(|(rank, (_, league, label))| (rank, *league, *label))
}

/// Tag divisions with league and Korean label and order them for display.
///
/// Unknown divisions keep a localized upstream name and sort last.
pub fn arrange_divisions(divisions: Vec<DivisionStandings>) -> Vec<DivisionStandings> {
    let mut ranked: Vec<(usize, DivisionStandings)> = divisions
        .into_iter()
        .map(|mut d| match meta_for(d.division_id) {
            Some((rank, league, label)) => {
                d.league = Some(league);
                d.label = label.to_string();
                (rank, d)
            }
            None => {
                debug!(division = ?d.division_id, name = %d.label, "unknown division");
                d.label = localize_division(&d.label);
                (usize::MAX, d)
            }
        })
        .collect();
    ranked.sort_by_key(|(rank, _)| *rank);
    ranked.into_iter().map(|(_, d)| d).collect()
}

/// AL first, then NL. Divisions outside both leagues are dropped.
pub fn group_by_league(divisions: Vec<DivisionStandings>) -> Vec<LeagueStandings> {
    let arranged = arrange_divisions(divisions);
    [League::American, League::National]
        .into_iter()
        .map(|league| LeagueStandings {
            league,
            divisions: arranged
                .iter()
                .filter(|d| d.league == Some(league))
                .cloned()
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn division(id: Option<u32>, name: &str) -> DivisionStandings {
        DivisionStandings {
            division_id: id,
            league: None,
            label: name.to_string(),
            rows: Vec::new(),
        }
    }

    #[test]
    fn test_arrange_orders_east_central_west() {
        let arranged = arrange_divisions(vec![
            division(Some(203), "National League West"),
            division(Some(200), "American League West"),
            division(Some(204), "National League East"),
            division(Some(201), "American League East"),
            division(Some(205), "National League Central"),
            division(Some(202), "American League Central"),
        ]);

        let ids: Vec<u32> = arranged.iter().filter_map(|d| d.division_id).collect();
        assert_eq!(ids, vec![201, 202, 200, 204, 205, 203]);
        assert_eq!(arranged[0].label, "동부지구");
        assert_eq!(arranged[0].league, Some(League::American));
    }

    #[test]
    fn test_unknown_division_sorts_last_with_localized_label() {
        let arranged = arrange_divisions(vec![
            division(Some(999), "American League West"),
            division(Some(204), "National League East"),
        ]);
        assert_eq!(arranged[0].division_id, Some(204));
        assert_eq!(arranged[1].league, None);
        assert_eq!(arranged[1].label, "아메리칸리그 서부");
    }

    #[test]
    fn test_group_by_league() {
        let grouped = group_by_league(vec![
            division(Some(203), "National League West"),
            division(Some(201), "American League East"),
            division(None, ""),
        ]);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].league, League::American);
        assert_eq!(grouped[0].divisions.len(), 1);
        assert_eq!(grouped[1].league, League::National);
        assert_eq!(grouped[1].divisions[0].division_id, Some(203));
    }

    #[test]
    fn test_empty_standings() {
        let grouped = group_by_league(Vec::new());
        assert!(grouped.iter().all(|l| l.divisions.is_empty()));
    }
}
