//! Stats sync: record yesterday's games for every active player.
//!
//! The league game log for one date is fetched before the transaction opens.
//! Each tracked player gets at most one new game row; a game already stored
//! for that player is skipped so re-running the same date changes nothing.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::{debug, error, info};

use crate::{
    cli::types::{GameDate, GameId, PlayerId},
    nba::{average_fantasy_points, first_game_per_player, GameLogRow, ResultSet},
    storage::{NewGameStats, PlayerDatabase, PlayerSyncState},
    Result,
};

use super::common::CommandContext;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatsSummary {
    pub date: Option<GameDate>,
    pub active_players: usize,
    pub recorded: usize,
    pub already_stored: usize,
}

/// A game newly written for one player
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordedGame {
    pub player_id: PlayerId,
    pub game_id: GameId,
    pub fantasy_points: f64,
    pub average_fantasy_points: f64,
    pub users_credited: usize,
}

/// Record one game for a player unless it is already stored.
///
/// On insert the player's average is recomputed over all stored games and
/// every associated user is credited with the game's fantasy points.
/// Returns `None` when the game was already present. Call inside a transaction.
pub fn record_game(
    db: &PlayerDatabase,
    state: &mut PlayerSyncState,
    game: &GameLogRow,
) -> Result<Option<RecordedGame>> {
    if state.has_game(&game.game_id) {
        debug!(
            player = %state.player.full_name,
            game_id = %game.game_id,
            "game already stored"
        );
        return Ok(None);
    }

    let fantasy_points = game.fantasy_points();
    let stored = db.insert_game_stats(&NewGameStats {
        player_id: state.player.id,
        game_id: game.game_id.clone(),
        game_date: game.game_date,
        points: game.points,
        rebounds: game.rebounds,
        assists: game.assists,
        fantasy_points,
    })?;
    state.games.push(stored);

    let average = average_fantasy_points(&state.fantasy_points());
    db.set_average_fantasy_points(state.player.id, average)?;
    state.player.average_fantasy_points = average;

    for user_id in &state.user_ids {
        let user = db.add_user_fantasy_points(*user_id, fantasy_points)?;
        info!(
            "Updated user {} total FP: {:.2}",
            user.email, user.total_fantasy_points
        );
    }

    info!(
        "Updated {} ({}), FP: {:.2}, avg FP: {:.2}",
        state.player.full_name, game.game_date, fantasy_points, average
    );

    Ok(Some(RecordedGame {
        player_id: state.player.id,
        game_id: game.game_id.clone(),
        fantasy_points,
        average_fantasy_points: average,
        users_credited: state.user_ids.len(),
    }))
}

/// Apply one date's league log to the loaded player states. Call inside a transaction.
///
/// Rows for players outside `states` are skipped without being parsed.
pub fn apply_game_logs(
    db: &PlayerDatabase,
    states: Vec<PlayerSyncState>,
    log: &ResultSet,
) -> Result<StatsSummary> {
    let mut summary = StatsSummary {
        active_players: states.len(),
        ..Default::default()
    };

    let mut by_player: HashMap<PlayerId, PlayerSyncState> = states
        .into_iter()
        .map(|state| (state.player.id, state))
        .collect();
    let tracked: HashSet<PlayerId> = by_player.keys().copied().collect();

    for game in first_game_per_player(log, &tracked)? {
        let Some(state) = by_player.get_mut(&game.player_id) else {
            continue;
        };
        match record_game(db, state, &game)? {
            Some(_) => summary.recorded += 1,
            None => summary.already_stored += 1,
        }
    }

    Ok(summary)
}

/// Fetch and store stats for `date` (default: the previous UTC day).
pub async fn sync_stats(ctx: &CommandContext, date: Option<GameDate>) -> Result<StatsSummary> {
    let states = ctx.db.active_player_states()?;
    if states.is_empty() {
        info!("No active players found.");
        return Ok(StatsSummary::default());
    }
    info!("Found {} active players.", states.len());

    let date = date.unwrap_or_else(GameDate::previous_utc_day);
    info!("Fetching stats for games on {}...", date);
    let log = ctx
        .client
        .get_league_game_log(&ctx.config.season, date)
        .await?;
    debug!(rows = log.row_set.len(), "league game log fetched");

    let mut summary = ctx
        .db
        .run_in_transaction(|db| apply_game_logs(db, states, &log))?;
    summary.date = Some(date);

    Ok(summary)
}

/// Run stats sync as a job: errors are logged and rolled back, never raised.
pub async fn handle_stats_sync(ctx: &CommandContext, date: Option<GameDate>) -> Option<StatsSummary> {
    match sync_stats(ctx, date).await {
        Ok(summary) => {
            if summary.active_players > 0 {
                info!(
                    "Stats sync completed. Recorded: {}, Already stored: {}",
                    summary.recorded, summary.already_stored
                );
            }
            Some(summary)
        }
        Err(e) => {
            error!("An error occurred during stats sync: {}", e);
            None
        }
    }
}
