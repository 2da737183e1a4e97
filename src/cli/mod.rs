//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use types::{GameDate, PlayerId, Season};

#[derive(Debug, Parser)]
#[clap(
    name = "nba-fantasy-sync",
    about = "Sync NBA players and box scores into a local fantasy points database"
)]
pub struct Cli {
    /// SQLite database file (or set `NBA_FANTASY_DB_PATH`).
    #[clap(long, global = true)]
    pub db_path: Option<PathBuf>,

    /// Season, e.g. 2025-26 (or set `NBA_FANTASY_SEASON`).
    #[clap(long, short, global = true)]
    pub season: Option<Season>,

    /// Per-request timeout in seconds.
    #[clap(long, global = true)]
    pub timeout: Option<u64>,

    /// Debug-level logging (overridden by `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    /// With no command, runs `sync` followed by `stats`.
    #[clap(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Refresh every player's name, team, position and active flag.
    Sync,

    /// Record one day's games for all active players.
    Stats {
        /// Game date (YYYY-MM-DD); defaults to yesterday in UTC.
        #[clap(long)]
        date: Option<GameDate>,
    },

    /// Record the most recent game for a single player.
    Player {
        /// NBA player id; defaults to 2544.
        #[clap(long = "player-id")]
        player_id: Option<PlayerId>,
    },

    /// List stored players ordered by average fantasy points.
    Players {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Only players on an active roster.
        #[clap(long)]
        active_only: bool,

        /// Filter by team abbreviation, e.g. LAL.
        #[clap(long, short)]
        team: Option<String>,

        /// Maximum number of players to print.
        #[clap(long, short)]
        limit: Option<u32>,
    },

    /// Manage users.
    User {
        #[clap(subcommand)]
        cmd: UserCmd,
    },

    /// Manage the players a user follows.
    Team {
        #[clap(subcommand)]
        cmd: TeamCmd,
    },
}

#[derive(Debug, Subcommand)]
pub enum UserCmd {
    /// Register a user by email.
    Add { email: String },
}

#[derive(Debug, Subcommand)]
pub enum TeamCmd {
    /// Replace the user's team with the given player ids.
    Set {
        #[clap(long)]
        email: String,

        #[clap(required = true)]
        player_ids: Vec<PlayerId>,
    },

    /// Show the user's team and running total.
    Show {
        #[clap(long)]
        email: String,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
