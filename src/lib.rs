//! NBA Fantasy Sync Library
//!
//! Fetches NBA player rosters and daily box scores from the stats API,
//! stores them in SQLite, and keeps fantasy point averages and user
//! running totals current.
//!
//! ## Features
//!
//! - **Roster Sync**: Upsert every player's name, team, position and active flag
//! - **Stats Sync**: Record yesterday's games for active players, idempotently
//! - **Fantasy Scoring**: `points + 1.2 * rebounds + 1.5 * assists`
//! - **User Totals**: Credit each user for every new game of a player they follow
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_fantasy_sync::{commands::{handle_full_sync, CommandContext}, core::SyncConfig};
//!
//! # async fn example() -> nba_fantasy_sync::Result<()> {
//! let config = SyncConfig::resolve(None, None, None)?;
//! let ctx = CommandContext::new(config)?;
//! let summary = handle_full_sync(&ctx).await;
//! println!("{:?}", summary.stats);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export NBA_FANTASY_SEASON=2025-26
//! export NBA_FANTASY_DB_PATH=/var/lib/nba/fantasy.db
//! export RUST_LOG=nba_fantasy_sync=debug
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod nba;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{GameDate, GameId, PlayerId, Season, TeamId, UserId};
pub use error::{Result, SyncError};
pub use nba::{fantasy_points, StatsClient};
