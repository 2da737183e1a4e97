//! Data models for the storage layer

use crate::cli::types::{GameDate, GameId, PlayerId, UserId};
use serde::{Deserialize, Serialize};

/// Player row (`players`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub full_name: String,
    pub is_active: bool,
    pub team_name: Option<String>,
    pub position: Option<String>,
    pub average_fantasy_points: f64,
}

/// Identity fields written by roster sync; the average is owned by stats sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub id: PlayerId,
    pub full_name: String,
    pub is_active: bool,
    pub team_name: Option<String>,
    pub position: Option<String>,
}

/// Whether an upsert created a new row or overwrote an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

/// One stored game (`player_game_stats`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerGameStats {
    pub id: i64,
    pub player_id: PlayerId,
    pub game_id: GameId,
    pub game_date: GameDate,
    pub points: i64,
    pub rebounds: i64,
    pub assists: i64,
    pub fantasy_points: f64,
}

/// A game about to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewGameStats {
    pub player_id: PlayerId,
    pub game_id: GameId,
    pub game_date: GameDate,
    pub points: i64,
    pub rebounds: i64,
    pub assists: i64,
    pub fantasy_points: f64,
}

/// User row (`users`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub total_fantasy_points: f64,
}

/// Everything stats sync needs to know about one player, loaded up front
#[derive(Debug, Clone)]
pub struct PlayerSyncState {
    pub player: Player,
    /// Stored games in insertion order.
    pub games: Vec<PlayerGameStats>,
    pub user_ids: Vec<UserId>,
}

impl PlayerSyncState {
    pub fn has_game(&self, game_id: &GameId) -> bool {
        self.games.iter().any(|g| &g.game_id == game_id)
    }

    pub fn fantasy_points(&self) -> Vec<f64> {
        self.games.iter().map(|g| g.fantasy_points).collect()
    }
}

/// Listing row: player plus the fantasy points of their latest stored game
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub full_name: String,
    pub position: Option<String>,
    pub team_name: Option<String>,
    pub is_active: bool,
    pub average_fantasy_points: f64,
    pub last_game_fantasy_points: Option<f64>,
    pub games_played: u32,
}
