//! Common resources shared by every command.

use tracing::debug;

use crate::{core::SyncConfig, nba::StatsClient, storage::PlayerDatabase, Result};

/// Context containing the resources a command needs: resolved config,
/// the single database connection and the upstream client.
pub struct CommandContext {
    pub config: SyncConfig,
    pub db: PlayerDatabase,
    pub client: StatsClient,
}

impl CommandContext {
    /// Open the database (creating tables if needed) and build the HTTP client.
    pub fn new(config: SyncConfig) -> Result<Self> {
        debug!(path = %config.db_path.display(), "opening database");
        let db = PlayerDatabase::open(&config.db_path)?;
        let client = StatsClient::new(&config)?;
        Ok(Self { config, db, client })
    }

    /// Assemble a context from parts; tests use this with an in-memory database.
    pub fn from_parts(config: SyncConfig, db: PlayerDatabase, client: StatsClient) -> Self {
        Self { config, db, client }
    }
}
