//! Roster sync: refresh player identity, team, position and activity.
//!
//! Pulls the season's player list plus every team roster (for positions),
//! then upserts all players in one transaction. Stale players are never
//! deleted and stored averages are never touched.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{error, info, warn};

use crate::{
    cli::types::PlayerId,
    nba::{teams::NBA_TEAMS, AllPlayersRow},
    storage::{PlayerDatabase, PlayerProfile, UpsertOutcome},
    Result,
};

use super::common::CommandContext;

/// Position stored for players that appear on no team roster.
pub const UNKNOWN_POSITION: &str = "N/A";

/// Roster position per player; `None` when the roster lists no position.
pub type RosterPositions = HashMap<PlayerId, Option<String>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RosterSummary {
    pub added: usize,
    pub updated: usize,
    pub teams_failed: usize,
}

/// Fetch every team roster, skipping teams whose request fails.
///
/// Returns the collected positions and the number of failed teams.
pub async fn fetch_roster_positions(ctx: &CommandContext) -> (RosterPositions, usize) {
    let mut positions = RosterPositions::new();
    let mut failed = 0;

    info!("Fetching team rosters to get player positions...");
    for team in NBA_TEAMS.iter() {
        match ctx
            .client
            .get_team_roster(team.id, &ctx.config.season)
            .await
        {
            Ok(roster) => {
                for row in roster {
                    positions.insert(row.player_id, row.position);
                }
                if !ctx.config.roster_delay.is_zero() {
                    tokio::time::sleep(ctx.config.roster_delay).await;
                }
            }
            Err(e) => {
                warn!("Could not fetch roster for team {}: {}", team.full_name, e);
                failed += 1;
            }
        }
    }

    (positions, failed)
}

/// Build the profile written for one upstream player.
pub fn player_profile(row: &AllPlayersRow, positions: &RosterPositions) -> PlayerProfile {
    let position = match positions.get(&row.player_id) {
        Some(position) => position.clone(),
        None => Some(UNKNOWN_POSITION.to_string()),
    };

    PlayerProfile {
        id: row.player_id,
        full_name: row.full_name.clone(),
        is_active: row.is_active,
        team_name: row.team_abbreviation.clone(),
        position,
    }
}

/// Upsert every player. Call inside a transaction.
pub fn apply_roster(
    db: &PlayerDatabase,
    players: &[AllPlayersRow],
    positions: &RosterPositions,
) -> Result<RosterSummary> {
    let mut summary = RosterSummary::default();

    for row in players {
        match db.upsert_player(&player_profile(row, positions))? {
            UpsertOutcome::Inserted => summary.added += 1,
            UpsertOutcome::Updated => summary.updated += 1,
        }
    }

    Ok(summary)
}

/// Fetch and store the roster, propagating any failure.
pub async fn sync_roster(ctx: &CommandContext) -> Result<RosterSummary> {
    info!("Syncing all players from NBA API...");
    let players = ctx.client.get_all_players(&ctx.config.season).await?;
    info!(count = players.len(), season = %ctx.config.season, "Fetched player list");

    let (positions, teams_failed) = fetch_roster_positions(ctx).await;

    info!("Updating database with player info...");
    let mut summary = ctx
        .db
        .run_in_transaction(|db| apply_roster(db, &players, &positions))?;
    summary.teams_failed = teams_failed;

    Ok(summary)
}

/// Run roster sync as a job: errors are logged and rolled back, never raised.
pub async fn handle_roster_sync(ctx: &CommandContext) -> Option<RosterSummary> {
    match sync_roster(ctx).await {
        Ok(summary) => {
            info!(
                "Sync completed. Added: {}, Updated: {}",
                summary.added, summary.updated
            );
            if summary.teams_failed > 0 {
                warn!("{} team rosters could not be fetched", summary.teams_failed);
            }
            Some(summary)
        }
        Err(e) => {
            error!("An error occurred during player sync: {}", e);
            None
        }
    }
}
