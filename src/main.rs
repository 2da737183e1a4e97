//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nba_fantasy_sync::{
    cli::{Cli, Commands, TeamCmd, UserCmd},
    commands::{
        handle_full_sync,
        player_stats::handle_player_stats,
        players::{handle_list_players, ListPlayersParams},
        roster_sync::handle_roster_sync,
        stats_sync::handle_stats_sync,
        users::{handle_add_user, handle_set_team, handle_show_team},
        CommandContext,
    },
    core::{initialize_logging, SyncConfig},
    Result,
};
use tracing::info;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = Cli::parse();
    initialize_logging(app.verbose);

    let config = SyncConfig::resolve(app.season, app.db_path, app.timeout)?;
    info!(season = %config.season, db = %config.db_path.display(), "starting");
    let ctx = CommandContext::new(config)?;

    // Sync jobs log their own failures and roll back; only setup errors exit non-zero.
    match app.command {
        None => {
            handle_full_sync(&ctx).await;
        }
        Some(Commands::Sync) => {
            handle_roster_sync(&ctx).await;
        }
        Some(Commands::Stats { date }) => {
            handle_stats_sync(&ctx, date).await;
        }
        Some(Commands::Player { player_id }) => {
            handle_player_stats(&ctx, player_id).await;
        }
        Some(Commands::Players {
            json,
            active_only,
            team,
            limit,
        }) => handle_list_players(
            &ctx.db,
            ListPlayersParams {
                as_json: json,
                active_only,
                team,
                limit,
            },
        )?,
        Some(Commands::User {
            cmd: UserCmd::Add { email },
        }) => handle_add_user(&ctx.db, &email)?,
        Some(Commands::Team { cmd }) => match cmd {
            TeamCmd::Set { email, player_ids } => handle_set_team(&ctx.db, &email, &player_ids)?,
            TeamCmd::Show { email, json } => handle_show_team(&ctx.db, &email, json)?,
        },
    }

    info!("Done.");
    Ok(())
}
