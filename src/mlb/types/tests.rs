//! Unit tests for MLB wire types and their normalization

use super::*;
use serde_json::json;

#[cfg(test)]
mod types_tests {
    use super::*;

    fn dodgers() -> TeamRef {
        TeamRef {
            id: TeamId::new(119),
            name: "Los Angeles Dodgers".to_string(),
        }
    }

    #[test]
    fn test_rate_stats_from_strings_and_placeholders() {
        let raw: RawStat = serde_json::from_value(json!({
            "gamesPlayed": 150,
            "avg": ".310",
            "obp": 0.402,
            "slg": "-.--",
            "ops": ".---",
            "homeRuns": 41,
            "rbi": 110
        }))
        .unwrap();

        assert_eq!(raw.avg, Some(0.31));
        assert_eq!(raw.obp, Some(0.402));
        assert_eq!(raw.slg, None);
        assert_eq!(raw.ops, None);

        let stat = raw.into_season_stat(StatGroup::Hitting);
        let batting = stat.as_batting().unwrap();
        assert_eq!(batting.games, 150);
        assert_eq!(batting.home_runs, 41);
        assert!(stat.as_pitching().is_none());
    }

    #[test]
    fn test_pitching_group_shapes_pitching_stat() {
        let raw: RawStat = serde_json::from_value(json!({
            "gamesPitched": 30,
            "era": "2.91",
            "strikeOuts": 200,
            "baseOnBalls": 40,
            "whip": "1.02",
            "inningsPitched": "180.1",
            "wins": 14
        }))
        .unwrap();

        let stat = raw.into_season_stat(StatGroup::Pitching);
        let pitching = stat.as_pitching().unwrap();
        assert_eq!(pitching.games, 30);
        assert_eq!(pitching.era, Some(2.91));
        assert_eq!(pitching.walks, 40);
        assert_eq!(pitching.innings_pitched.as_deref(), Some("180.1"));
        assert_eq!(pitching.saves, None);
    }

    #[test]
    fn test_roster_entry_classifies_role_and_jersey() {
        let entry: RawRosterEntry = serde_json::from_value(json!({
            "person": {"id": 477132, "fullName": "Clayton Kershaw"},
            "jerseyNumber": "22",
            "position": {"code": "1", "name": "Pitcher", "type": "Pitcher", "abbreviation": "P"}
        }))
        .unwrap();

        let player = entry.into_player(&dodgers()).unwrap();
        assert_eq!(player.role, Role::Pitcher);
        assert_eq!(player.jersey_number, Some(22));
        assert_eq!(player.position.as_deref(), Some("P"));
        assert_eq!(player.team.id, TeamId::new(119));
    }

    #[test]
    fn test_roster_entry_two_way_player_is_batter() {
        let entry: RawRosterEntry = serde_json::from_value(json!({
            "person": {"id": 660271, "fullName": "Shohei Ohtani"},
            "jerseyNumber": "",
            "position": {"type": "Two-Way Player", "abbreviation": "TWP"}
        }))
        .unwrap();

        let player = entry.into_player(&dodgers()).unwrap();
        assert_eq!(player.role, Role::Batter);
        assert_eq!(player.jersey_number, None);
    }

    #[test]
    fn test_roster_entry_without_person_is_dropped() {
        let entry: RawRosterEntry =
            serde_json::from_value(json!({"jerseyNumber": "5"})).unwrap();
        assert!(entry.into_player(&dodgers()).is_none());
    }

    #[test]
    fn test_standing_row_uses_upstream_values() {
        let record: RawTeamRecord = serde_json::from_value(json!({
            "team": {"id": 147, "name": "New York Yankees"},
            "wins": 94,
            "losses": 68,
            "winningPercentage": ".580",
            "gamesBack": "-",
            "runDifferential": 165,
            "records": {"splitRecords": [
                {"type": "home", "wins": 44, "losses": 37},
                {"type": "lastTen", "wins": 6, "losses": 4}
            ]},
            "streak": {"streakCode": "W2"}
        }))
        .unwrap();

        let row = record.into_row();
        assert_eq!(row.pct, ".580");
        assert_eq!(row.games_back, "-");
        assert_eq!(row.run_differential, Some(165));
        assert_eq!(row.last_ten, "6-4");
        assert_eq!(row.streak, "W2");
    }

    #[test]
    fn test_standing_row_fallbacks() {
        let record: RawTeamRecord = serde_json::from_value(json!({
            "team": {"id": 110, "name": "Baltimore Orioles"},
            "wins": 2,
            "losses": 1,
            "divisionGamesBack": "1.5",
            "runsScored": 12,
            "runsAllowed": 15,
            "streak": {"streakType": "L", "streakNumber": 3}
        }))
        .unwrap();

        let row = record.into_row();
        assert_eq!(row.pct, "0.667");
        assert_eq!(row.games_back, "1.5");
        assert_eq!(row.run_differential, Some(-3));
        assert_eq!(row.last_ten, "-");
        assert_eq!(row.streak, "L3");
    }

    #[test]
    fn test_standing_row_without_games() {
        let record: RawTeamRecord =
            serde_json::from_value(json!({"team": {"id": 1}})).unwrap();

        let row = record.into_row();
        assert_eq!(row.pct, "0.000");
        assert_eq!(row.games_back, "-");
        assert_eq!(row.run_differential, None);
        assert_eq!(row.streak, "-");
        assert_eq!(row.team.name, "");
    }

    #[test]
    fn test_person_detail_into_profile() {
        let person: RawPersonDetail = serde_json::from_value(json!({
            "id": 592450,
            "fullName": "Aaron Judge",
            "primaryNumber": "99",
            "primaryPosition": {"name": "Outfielder", "type": "Outfielder", "abbreviation": "RF"},
            "batSide": {"code": "R", "description": "Right"},
            "pitchHand": {"code": "R"},
            "birthDate": "1992-04-26",
            "birthCity": "Linden",
            "birthCountry": "USA",
            "height": "6' 7\"",
            "weight": 282,
            "currentTeam": {"id": 147, "name": "New York Yankees"},
            "mlbDebutDate": "2016-08-13"
        }))
        .unwrap();

        let profile = person.into_profile();
        assert_eq!(profile.primary_number.as_deref(), Some("99"));
        assert_eq!(profile.position_abbreviation.as_deref(), Some("RF"));
        assert_eq!(profile.bats.as_deref(), Some("Right"));
        assert_eq!(profile.throws.as_deref(), Some("R"));
        assert_eq!(profile.birth_place.as_deref(), Some("Linden, USA"));
        assert_eq!(
            profile.birth_date,
            NaiveDate::from_ymd_opt(1992, 4, 26)
        );
        assert_eq!(profile.current_team.unwrap().id, TeamId::new(147));
    }

    #[test]
    fn test_schedule_game_normalization() {
        let env: ScheduleEnvelope = serde_json::from_value(json!({
            "dates": [{"games": [{
                "gamePk": 745804,
                "gameDate": "2024-10-26T00:08:00Z",
                "status": {"statusCode": "F", "detailedState": "Final"},
                "teams": {
                    "home": {"team": {"id": 119, "name": "Los Angeles Dodgers"}, "score": 6, "isWinner": true},
                    "away": {"team": {"id": 147, "name": "New York Yankees"}, "score": 3, "isWinner": false}
                }
            }]}]
        }))
        .unwrap();

        let mut date = env.dates.into_iter().next().unwrap();
        let game = date.games.remove(0).into_game();
        assert_eq!(game.pk, GamePk::new(745804));
        assert_eq!(game.home.score, Some(6));
        assert_eq!(game.away.is_winner, Some(false));
        assert_eq!(game.status.code.as_deref(), Some("F"));
        assert!(game.scheduled_at.is_some());
    }

    #[test]
    fn test_leader_values_accept_numbers() {
        let category: RawLeaderCategory = serde_json::from_value(json!({
            "leaderCategory": "homeRuns",
            "leaders": [
                {"rank": 1, "value": 40, "person": {"id": 1, "fullName": "A"}},
                {"rank": 2, "value": "35"}
            ]
        }))
        .unwrap();

        let category = category.into_category();
        assert_eq!(category.key, "homeRuns");
        assert_eq!(category.candidates[0].value.as_deref(), Some("40"));
        assert!(category.candidates[1].player.is_none());
    }

    #[test]
    fn test_venue_flattens_location_and_field_info() {
        let venue: RawVenue = serde_json::from_value(json!({
            "id": 22,
            "name": "Dodger Stadium",
            "location": {"city": "Los Angeles", "state": "California"},
            "fieldInfo": {"capacity": 56000, "roofType": "Open"}
        }))
        .unwrap();

        let venue = venue.into_venue();
        assert_eq!(venue.city.as_deref(), Some("Los Angeles"));
        assert_eq!(venue.country, None);
        assert_eq!(venue.capacity, Some(56000));
        assert_eq!(venue.turf_type, None);
    }

    #[test]
    fn test_wiki_summary_requires_title_or_extract() {
        let empty: RawWikiSummary = serde_json::from_value(json!({"type": "standard"})).unwrap();
        assert!(empty.into_summary().is_none());

        let page: RawWikiSummary = serde_json::from_value(json!({
            "title": "Dodger Stadium",
            "extract": "Dodger Stadium is a baseball stadium.",
            "thumbnail": {"source": "https://upload.example/thumb.jpg"},
            "content_urls": {"desktop": {"page": "https://en.wikipedia.org/wiki/Dodger_Stadium"}}
        }))
        .unwrap();
        let summary = page.into_summary().unwrap();
        assert_eq!(summary.title, "Dodger Stadium");
        assert_eq!(
            summary.page_url.as_deref(),
            Some("https://en.wikipedia.org/wiki/Dodger_Stadium")
        );
        assert!(summary.thumbnail_url.is_some());
    }

    #[test]
    fn test_team_into_info() {
        let team: RawTeam = serde_json::from_value(json!({
            "id": 119,
            "name": "Los Angeles Dodgers",
            "abbreviation": "LAD",
            "active": true,
            "sport": {"id": 1},
            "venue": {"id": 22, "name": "Dodger Stadium"},
            "division": {"id": 203, "name": "National League West"}
        }))
        .unwrap();

        let info = team.into_info();
        assert!(info.active);
        assert_eq!(info.sport_id, Some(1));
        assert_eq!(info.venue.unwrap().id, VenueId::new(22));
        assert_eq!(info.division.as_deref(), Some("National League West"));
    }

    #[test]
    fn test_id_name_into_team_ref() {
        let named: RawIdName = serde_json::from_value(json!({"id": 119, "name": "Los Angeles Dodgers"})).unwrap();
        assert_eq!(named.into_team_ref(), dodgers());

        let bare: RawIdName = serde_json::from_value(json!({"id": 147})).unwrap();
        let team = bare.into_team_ref();
        assert_eq!(team.id, TeamId::new(147));
        assert_eq!(team.name, "");
    }
}
