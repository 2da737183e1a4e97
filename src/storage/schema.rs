//! Database schema and connection management

use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

/// Database connection manager for players, game stats and users
pub struct PlayerDatabase {
    pub(crate) conn: Connection,
}

impl PlayerDatabase {
    /// Open (or create) the database file and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Fresh in-memory database, used by tests
    pub fn new_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", true)?;
        let db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS players (
                id INTEGER PRIMARY KEY,
                full_name TEXT NOT NULL,
                is_active INTEGER NOT NULL DEFAULT 0,
                team_name TEXT,
                position TEXT,
                average_fantasy_points REAL NOT NULL DEFAULT 0
            );

            CREATE TABLE IF NOT EXISTS player_game_stats (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                player_id INTEGER NOT NULL,
                game_id TEXT NOT NULL,
                game_date TEXT NOT NULL,
                points INTEGER NOT NULL,
                rebounds INTEGER NOT NULL,
                assists INTEGER NOT NULL,
                fantasy_points REAL NOT NULL,
                FOREIGN KEY (player_id) REFERENCES players(id)
            );

            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY,
                email TEXT NOT NULL UNIQUE,
                total_fantasy_points REAL NOT NULL DEFAULT 0
            );

            CREATE TABLE IF NOT EXISTS user_players (
                user_id INTEGER NOT NULL,
                player_id INTEGER NOT NULL,
                PRIMARY KEY (user_id, player_id),
                FOREIGN KEY (user_id) REFERENCES users(id),
                FOREIGN KEY (player_id) REFERENCES players(id)
            );

            -- Lookup only; (player_id, game_id) uniqueness is checked before insert.
            CREATE INDEX IF NOT EXISTS idx_game_stats_player_game
                ON player_game_stats(player_id, game_id);

            CREATE INDEX IF NOT EXISTS idx_players_active
                ON players(is_active);",
        )?;

        Ok(())
    }

    /// Run `f` inside one transaction: commit on `Ok`, roll back on `Err`.
    ///
    /// Queries issued through `self` inside `f` join the transaction, since
    /// SQLite transactions are scoped to the connection.
    pub fn run_in_transaction<T, E, F>(&self, f: F) -> std::result::Result<T, E>
    where
        F: FnOnce(&Self) -> std::result::Result<T, E>,
        E: From<rusqlite::Error>,
    {
        let tx = self.conn.unchecked_transaction()?;
        match f(self) {
            Ok(value) => {
                tx.commit()?;
                Ok(value)
            }
            Err(e) => {
                tx.rollback()?;
                Err(e)
            }
        }
    }
}
