//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{GameDate, GamePk, PlayerId, RoleFilter, Season, SortKey, TeamId, VenueId};

/// Arguments of the players table.
#[derive(Debug, Args)]
pub struct PlayersArgs {
    /// Only this club's roster (team id, e.g. 119).
    #[clap(long, short)]
    pub team: Option<TeamId>,

    /// Role filter; anything but `all` also loads season stats.
    #[clap(long, short, value_enum, default_value_t = RoleFilter::All)]
    pub role: RoleFilter,

    /// Case-insensitive substring of the player name.
    #[clap(long, short = 'n')]
    pub search: Option<String>,

    /// Sort metric; ignored unless a role filter is set.
    #[clap(long, value_enum, default_value_t = SortKey::Default)]
    pub sort: SortKey,

    /// Season year (e.g. 2025).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Players across every club, or one club, with stats when filtered by role
    Players(PlayersArgs),

    /// One player's profile and season lines
    Player {
        id: PlayerId,

        #[clap(long, short, default_value_t = Season::default())]
        season: Season,
    },

    /// Active clubs grouped by division
    Teams,

    /// One club: stats, leaders, roster and schedule
    Team {
        id: TeamId,

        #[clap(long, short, default_value_t = Season::default())]
        season: Season,
    },

    /// Games on one date (YYYY-MM-DD, default today)
    Games {
        #[clap(long, short, default_value_t = GameDate::today())]
        date: GameDate,

        /// Only games involving this club.
        #[clap(long, short)]
        team: Option<TeamId>,
    },

    /// One game: linescore, decisions, plays and highlights
    Game {
        pk: GamePk,

        /// Only show plays from this inning.
        #[clap(long, short)]
        inning: Option<u32>,

        /// Highlight page, starting at 1.
        #[clap(long, short, default_value_t = 1)]
        page: usize,
    },

    /// Division standings for a season
    Standings {
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,
    },

    /// Home ballparks of the active clubs
    Venues,

    /// One ballpark with its encyclopedia summary
    Venue { id: VenueId },
}

#[derive(Debug, Parser)]
#[clap(name = "mlb-ko", about = "MLB 기록 조회 CLI", version)]
pub struct MlbKo {
    /// Output results as JSON instead of text lines.
    #[clap(long, global = true)]
    pub json: bool,

    /// Debug-level logging (overridden by `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
