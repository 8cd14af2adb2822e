//! Unit tests for roster filtering

use super::*;

#[cfg(test)]
mod filter_tests {
    use super::*;
    use crate::{
        cli::types::Role,
        engine::fixtures::{create_test_player, team},
    };

    fn roster() -> Vec<Player> {
        let dodgers = team(119, "Los Angeles Dodgers");
        vec![
            create_test_player(1, "Mookie Betts", Role::Batter, Some(50), &dodgers),
            create_test_player(2, "Clayton Kershaw", Role::Pitcher, Some(22), &dodgers),
            create_test_player(3, "Shohei Ohtani", Role::Batter, Some(17), &dodgers),
            create_test_player(4, "Yoshinobu Yamamoto", Role::Pitcher, Some(18), &dodgers),
        ]
    }

    #[test]
    fn test_all_with_blank_query_keeps_everyone() {
        let players = roster();
        assert_eq!(filter_players(&players, RoleFilter::All, "").len(), players.len());
        assert_eq!(filter_players(&players, RoleFilter::All, "   ").len(), players.len());
    }

    #[test]
    fn test_role_filter() {
        let players = roster();
        let pitchers = filter_players(&players, RoleFilter::PitchersOnly, "");
        assert!(pitchers.iter().all(|p| p.role == Role::Pitcher));
        assert_eq!(pitchers.len(), 2);

        let batters = filter_players(&players, RoleFilter::BattersOnly, "");
        assert!(batters.iter().all(|p| p.role == Role::Batter));
        assert_eq!(batters.len(), 2);
    }

    #[test]
    fn test_name_query_is_trimmed_and_case_insensitive() {
        let players = roster();
        let found = filter_players(&players, RoleFilter::All, "  OHTANI ");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].full_name, "Shohei Ohtani");
    }

    #[test]
    fn test_filters_compose() {
        let players = roster();
        let found = filter_players(&players, RoleFilter::PitchersOnly, "ya");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].full_name, "Yoshinobu Yamamoto");

        assert!(filter_players(&players, RoleFilter::BattersOnly, "kershaw").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent_and_leaves_input() {
        let players = roster();
        let once = filter_players(&players, RoleFilter::BattersOnly, "o");
        let twice = filter_players(&once, RoleFilter::BattersOnly, "o");
        assert_eq!(once, twice);
        assert_eq!(players, roster());
    }

    #[test]
    fn test_keeps_input_order() {
        let players = roster();
        let ids: Vec<u64> = filter_players(&players, RoleFilter::All, "o")
            .iter()
            .map(|p| p.id.as_u64())
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
