//! Play log grouping by half inning.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{game::HalfInning, Play};

/// Plays of one half inning, in feed order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HalfInningPlays {
    pub inning: u32,
    pub half: HalfInning,
    pub plays: Vec<Play>,
}

impl HalfInningPlays {
    /// "3회 초"
    pub fn heading(&self) -> String {
        format!("{}회 {}", self.inning, self.half.label_ko())
    }
}

/// Group plays by inning, top before bottom. With `only_inning` set, other
/// innings are dropped. Plays missing an inning or half are skipped.
pub fn group_plays(plays: &[Play], only_inning: Option<u32>) -> Vec<HalfInningPlays> {
    let mut groups: BTreeMap<(u32, HalfInning), Vec<Play>> = BTreeMap::new();
    for play in plays {
        let (Some(inning), Some(half)) = (play.inning, play.half) else {
            continue;
        };
        if only_inning.is_some_and(|wanted| wanted != inning) {
            continue;
        }
        groups.entry((inning, half)).or_default().push(play.clone());
    }

    groups
        .into_iter()
        .map(|((inning, half), plays)| HalfInningPlays { inning, half, plays })
        .collect()
}

/// Innings present in the log, ascending.
pub fn innings_played(plays: &[Play]) -> Vec<u32> {
    let mut innings: Vec<u32> = plays.iter().filter_map(|p| p.inning).collect();
    innings.sort_unstable();
    innings.dedup();
    innings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(index: u32, inning: Option<u32>, half: Option<HalfInning>) -> Play {
        Play {
            at_bat_index: Some(index),
            inning,
            half,
            description: Some(format!("play {index}")),
            batter: None,
            pitcher: None,
            balls: None,
            strikes: None,
            outs: None,
            is_scoring_play: false,
        }
    }

    fn log() -> Vec<Play> {
        vec![
            play(0, Some(1), Some(HalfInning::Top)),
            play(1, Some(1), Some(HalfInning::Top)),
            play(2, Some(1), Some(HalfInning::Bottom)),
            play(3, Some(2), Some(HalfInning::Top)),
            play(4, None, Some(HalfInning::Top)),
            play(5, Some(2), Some(HalfInning::Bottom)),
            play(6, Some(10), Some(HalfInning::Top)),
        ]
    }

    #[test]
    fn test_groups_in_inning_then_half_order() {
        let groups = group_plays(&log(), None);
        let keys: Vec<(u32, HalfInning)> = groups.iter().map(|g| (g.inning, g.half)).collect();
        assert_eq!(
            keys,
            vec![
                (1, HalfInning::Top),
                (1, HalfInning::Bottom),
                (2, HalfInning::Top),
                (2, HalfInning::Bottom),
                (10, HalfInning::Top),
            ]
        );
        let first: Vec<Option<u32>> = groups[0].plays.iter().map(|p| p.at_bat_index).collect();
        assert_eq!(first, vec![Some(0), Some(1)]);
    }

    #[test]
    fn test_inning_filter() {
        let groups = group_plays(&log(), Some(2));
        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| g.inning == 2));
        assert_eq!(groups[0].heading(), "2회 초");

        assert!(group_plays(&log(), Some(7)).is_empty());
    }

    #[test]
    fn test_innings_played() {
        assert_eq!(innings_played(&log()), vec![1, 2, 10]);
        assert!(innings_played(&[]).is_empty());
    }
}
