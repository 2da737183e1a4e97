//! Command implementations for the NBA fantasy sync CLI

pub mod common;
pub mod player_stats;
pub mod players;
pub mod roster_sync;
pub mod stats_sync;
pub mod users;

use tracing::info;

pub use common::CommandContext;

use roster_sync::{handle_roster_sync, RosterSummary};
use stats_sync::{handle_stats_sync, StatsSummary};

/// Outcome of a full sync; `None` marks a job that failed and was rolled back.
#[derive(Debug, Default)]
pub struct FullSyncSummary {
    pub roster: Option<RosterSummary>,
    pub stats: Option<StatsSummary>,
}

/// Roster sync followed by stats sync for the previous UTC day.
///
/// The stats job runs even when the roster job failed.
pub async fn handle_full_sync(ctx: &CommandContext) -> FullSyncSummary {
    info!("Running full sync (players and stats)...");
    let roster = handle_roster_sync(ctx).await;
    let stats = handle_stats_sync(ctx, None).await;
    FullSyncSummary { roster, stats }
}
