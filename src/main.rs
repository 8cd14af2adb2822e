//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use mlb_ko::{
    cli::{Commands, MlbKo},
    commands::{
        common::{report_load_error, CommandContext},
        games::{handle_game, handle_games, GameParams},
        player::handle_player,
        players::{handle_players, PlayersParams},
        standings::handle_standings,
        teams::{handle_team, handle_teams},
        venues::{handle_venue, handle_venues},
    },
    logging::init_tracing,
    ClientConfig, KoreanTeamLookup, MlbClient, Result,
};

/// Run the CLI.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let app = MlbKo::parse();
    init_tracing(app.verbose)?;

    let client = MlbClient::new(ClientConfig::from_env()).context("failed to build HTTP client")?;
    let lookup = KoreanTeamLookup::new();
    let ctx = CommandContext::new(&client, &lookup);

    // Load failures are reported, not propagated; only argument errors exit non-zero.
    if let Err(e) = dispatch(ctx, app.command, app.json).await {
        report_load_error(&e);
    }
    Ok(())
}

async fn dispatch(ctx: CommandContext<'_>, command: Commands, json: bool) -> Result<()> {
    match command {
        Commands::Players(args) => {
            handle_players(
                ctx,
                PlayersParams {
                    team: args.team,
                    role: args.role,
                    search: args.search,
                    sort: args.sort,
                    season: args.season,
                    as_json: json,
                },
            )
            .await
        }
        Commands::Player { id, season } => handle_player(ctx, id, season, json).await,
        Commands::Teams => handle_teams(ctx, json).await,
        Commands::Team { id, season } => handle_team(ctx, id, season, json).await,
        Commands::Games { date, team } => handle_games(ctx, date, team, json).await,
        Commands::Game { pk, inning, page } => {
            handle_game(
                ctx,
                pk,
                GameParams {
                    inning,
                    page,
                    as_json: json,
                },
            )
            .await
        }
        Commands::Standings { season } => handle_standings(ctx, season, json).await,
        Commands::Venues => handle_venues(ctx, json).await,
        Commands::Venue { id } => handle_venue(ctx, id, json).await,
    }
}
