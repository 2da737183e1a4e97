//! Single-player fetch: record a player's most recent game of the season.
//!
//! Goes through the same incremental path as stats sync, so running it twice
//! is a no-op and associated users are credited exactly once.

use tracing::{error, info};

use crate::{cli::types::PlayerId, error::SyncError, Result};

use super::{
    common::CommandContext,
    stats_sync::{record_game, RecordedGame},
};

/// Player fetched when no id is given: LeBron James.
///
/// His stats id is `2544`; `1642883` belongs to a different player.
pub const DEFAULT_PLAYER_ID: PlayerId = PlayerId(2544);

/// Outcome of a single-player fetch that did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerStatsOutcome {
    Recorded(RecordedGame),
    AlreadyStored,
    NoGames,
}

/// Fetch the player's game log and record the newest game.
pub async fn sync_player_stats(
    ctx: &CommandContext,
    player_id: PlayerId,
) -> Result<PlayerStatsOutcome> {
    let mut state = ctx
        .db
        .player_sync_state(player_id)?
        .ok_or(SyncError::PlayerNotFound {
            id: player_id.as_i64(),
        })?;

    info!(
        "Fetching latest stats for {} ({})...",
        state.player.full_name, player_id
    );
    let log = ctx
        .client
        .get_player_game_log(player_id, &ctx.config.season)
        .await?;

    // The game log lists the most recent game first.
    let Some(latest) = log.into_iter().next() else {
        info!("No games found for {} in {}.", state.player.full_name, ctx.config.season);
        return Ok(PlayerStatsOutcome::NoGames);
    };

    let recorded = ctx
        .db
        .run_in_transaction(|db| record_game(db, &mut state, &latest))?;

    Ok(match recorded {
        Some(game) => PlayerStatsOutcome::Recorded(game),
        None => {
            info!(
                "Game {} already stored for {}.",
                latest.game_id, state.player.full_name
            );
            PlayerStatsOutcome::AlreadyStored
        }
    })
}

/// Run the single-player fetch as a job: errors are logged, never raised.
pub async fn handle_player_stats(
    ctx: &CommandContext,
    player_id: Option<PlayerId>,
) -> Option<PlayerStatsOutcome> {
    let player_id = player_id.unwrap_or(DEFAULT_PLAYER_ID);
    match sync_player_stats(ctx, player_id).await {
        Ok(outcome) => Some(outcome),
        Err(e) => {
            error!("An error occurred while fetching player {}: {}", player_id, e);
            None
        }
    }
}
