//! Builders shared by the engine tests.

use crate::{
    cli::types::{GamePk, PlayerId, Role, TeamId},
    model::{
        BattingStat, GameStatus, GameTeam, PitchingStat, Player, ScheduledGame, SeasonStat,
        TeamRef,
    },
};

pub fn team(id: u32, name: &str) -> TeamRef {
    TeamRef {
        id: TeamId::new(id),
        name: name.to_string(),
    }
}

pub fn create_test_player(id: u64, name: &str, role: Role, jersey: Option<u32>, team: &TeamRef) -> Player {
    Player {
        id: PlayerId::new(id),
        full_name: name.to_string(),
        jersey_number: jersey,
        role,
        position: Some(match role {
            Role::Pitcher => "P".to_string(),
            Role::Batter => "SS".to_string(),
        }),
        team: team.clone(),
    }
}

pub fn batting(avg: Option<f64>, home_runs: u32) -> SeasonStat {
    SeasonStat::Batting(BattingStat {
        games: 100,
        avg,
        home_runs,
        ..Default::default()
    })
}

pub fn pitching(era: Option<f64>, strike_outs: u32, innings: &str) -> SeasonStat {
    SeasonStat::Pitching(PitchingStat {
        games: 30,
        era,
        strike_outs,
        innings_pitched: Some(innings.to_string()),
        ..Default::default()
    })
}

pub fn game(
    code: &str,
    detailed: &str,
    home: (Option<u32>, Option<bool>),
    away: (Option<u32>, Option<bool>),
) -> ScheduledGame {
    ScheduledGame {
        pk: GamePk::new(1),
        home: GameTeam {
            team: team(119, "Los Angeles Dodgers"),
            score: home.0,
            is_winner: home.1,
        },
        away: GameTeam {
            team: team(147, "New York Yankees"),
            score: away.0,
            is_winner: away.1,
        },
        status: GameStatus {
            code: Some(code.to_string()),
            detailed_state: detailed.to_string(),
            abstract_state: None,
        },
        scheduled_at: None,
    }
}
