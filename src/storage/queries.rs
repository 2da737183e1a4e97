//! Basic database query operations

use super::{models::*, schema::PlayerDatabase};
use crate::cli::types::{GameDate, GameId, PlayerId, UserId};
use crate::error::SyncError;
use anyhow::Result;
use rusqlite::{params, types::Type, OptionalExtension, Row};
use std::collections::{BTreeSet, HashMap};

const PLAYER_COLUMNS: &str =
    "id, full_name, is_active, team_name, position, average_fantasy_points";

const GAME_COLUMNS: &str =
    "id, player_id, game_id, game_date, points, rebounds, assists, fantasy_points";

/// Optional narrowing for [`PlayerDatabase::list_player_summaries`]
#[derive(Debug, Clone, Default)]
pub struct PlayerListFilter {
    pub active_only: bool,
    /// Team abbreviation, matched case-insensitively.
    pub team: Option<String>,
    pub limit: Option<u32>,
}

impl PlayerDatabase {
    /// Insert a player, or overwrite name/active flag/team/position of an existing one.
    /// The stored average is left alone.
    pub fn upsert_player(&self, profile: &PlayerProfile) -> Result<UpsertOutcome> {
        let exists: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM players WHERE id = ?1)",
            params![profile.id.as_i64()],
            |row| row.get(0),
        )?;

        if exists {
            self.conn.execute(
                "UPDATE players
                 SET full_name = ?2, is_active = ?3, team_name = ?4, position = ?5
                 WHERE id = ?1",
                params![
                    profile.id.as_i64(),
                    profile.full_name,
                    profile.is_active,
                    profile.team_name,
                    profile.position
                ],
            )?;
            Ok(UpsertOutcome::Updated)
        } else {
            self.conn.execute(
                "INSERT INTO players (id, full_name, is_active, team_name, position, average_fantasy_points)
                 VALUES (?1, ?2, ?3, ?4, ?5, 0)",
                params![
                    profile.id.as_i64(),
                    profile.full_name,
                    profile.is_active,
                    profile.team_name,
                    profile.position
                ],
            )?;
            Ok(UpsertOutcome::Inserted)
        }
    }

    pub fn get_player(&self, id: PlayerId) -> Result<Option<Player>> {
        let player = self
            .conn
            .query_row(
                &format!("SELECT {PLAYER_COLUMNS} FROM players WHERE id = ?1"),
                params![id.as_i64()],
                row_to_player,
            )
            .optional()?;
        Ok(player)
    }

    pub fn player_count(&self) -> Result<u32> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))?)
    }

    /// All stored games for a player in insertion order
    pub fn game_stats_for_player(&self, id: PlayerId) -> Result<Vec<PlayerGameStats>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {GAME_COLUMNS} FROM player_game_stats WHERE player_id = ?1 ORDER BY id"
        ))?;
        let rows = stmt.query_map(params![id.as_i64()], row_to_game_stats)?;

        let mut games = Vec::new();
        for row in rows {
            games.push(row?);
        }
        Ok(games)
    }

    fn user_ids_for_player(&self, id: PlayerId) -> Result<Vec<UserId>> {
        let mut stmt = self
            .conn
            .prepare("SELECT user_id FROM user_players WHERE player_id = ?1 ORDER BY user_id")?;
        let rows = stmt.query_map(params![id.as_i64()], |row| Ok(UserId::new(row.get(0)?)))?;

        let mut ids = Vec::new();
        for row in rows {
            ids.push(row?);
        }
        Ok(ids)
    }

    /// Load every active player together with their stored games and associated users.
    ///
    /// Three queries regardless of player count; results ordered by player id.
    pub fn active_player_states(&self) -> Result<Vec<PlayerSyncState>> {
        let mut states = Vec::new();
        let mut index = HashMap::new();

        let mut stmt = self.conn.prepare(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players WHERE is_active = 1 ORDER BY id"
        ))?;
        for player in stmt.query_map([], row_to_player)? {
            let player = player?;
            index.insert(player.id, states.len());
            states.push(PlayerSyncState {
                player,
                games: Vec::new(),
                user_ids: Vec::new(),
            });
        }

        let mut stmt = self.conn.prepare(
            "SELECT g.id, g.player_id, g.game_id, g.game_date, g.points, g.rebounds, g.assists, g.fantasy_points
             FROM player_game_stats g
             JOIN players p ON p.id = g.player_id
             WHERE p.is_active = 1
             ORDER BY g.id",
        )?;
        for game in stmt.query_map([], row_to_game_stats)? {
            let game = game?;
            if let Some(&i) = index.get(&game.player_id) {
                states[i].games.push(game);
            }
        }

        let mut stmt = self.conn.prepare(
            "SELECT up.player_id, up.user_id
             FROM user_players up
             JOIN players p ON p.id = up.player_id
             WHERE p.is_active = 1
             ORDER BY up.user_id",
        )?;
        let links = stmt.query_map([], |row| {
            Ok((PlayerId::new(row.get(0)?), UserId::new(row.get(1)?)))
        })?;
        for link in links {
            let (player_id, user_id) = link?;
            if let Some(&i) = index.get(&player_id) {
                states[i].user_ids.push(user_id);
            }
        }

        Ok(states)
    }

    /// Sync state for a single player regardless of the active flag
    pub fn player_sync_state(&self, id: PlayerId) -> Result<Option<PlayerSyncState>> {
        let Some(player) = self.get_player(id)? else {
            return Ok(None);
        };
        Ok(Some(PlayerSyncState {
            games: self.game_stats_for_player(id)?,
            user_ids: self.user_ids_for_player(id)?,
            player,
        }))
    }

    /// Insert a game row. Callers check for an existing (player, game) pair first.
    pub fn insert_game_stats(&self, game: &NewGameStats) -> Result<PlayerGameStats> {
        self.conn.execute(
            "INSERT INTO player_game_stats
             (player_id, game_id, game_date, points, rebounds, assists, fantasy_points)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                game.player_id.as_i64(),
                game.game_id.as_str(),
                game.game_date.to_string(),
                game.points,
                game.rebounds,
                game.assists,
                game.fantasy_points
            ],
        )?;

        Ok(PlayerGameStats {
            id: self.conn.last_insert_rowid(),
            player_id: game.player_id,
            game_id: game.game_id.clone(),
            game_date: game.game_date,
            points: game.points,
            rebounds: game.rebounds,
            assists: game.assists,
            fantasy_points: game.fantasy_points,
        })
    }

    pub fn set_average_fantasy_points(&self, id: PlayerId, average: f64) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE players SET average_fantasy_points = ?2 WHERE id = ?1",
            params![id.as_i64(), average],
        )?;
        if changed == 0 {
            return Err(SyncError::PlayerNotFound { id: id.as_i64() }.into());
        }
        Ok(())
    }

    /// Add `delta` to a user's running total and return the updated user.
    pub fn add_user_fantasy_points(&self, id: UserId, delta: f64) -> Result<User> {
        let user = self
            .conn
            .query_row(
                "UPDATE users SET total_fantasy_points = total_fantasy_points + ?2
                 WHERE id = ?1
                 RETURNING id, email, total_fantasy_points",
                params![id.as_i64(), delta],
                row_to_user,
            )
            .optional()?;
        user.ok_or_else(|| anyhow::anyhow!("user {id} vanished while crediting fantasy points"))
    }

    pub fn create_user(&self, email: &str) -> Result<User> {
        if self.get_user_by_email(email)?.is_some() {
            return Err(SyncError::UserExists {
                email: email.to_string(),
            }
            .into());
        }
        self.conn.execute(
            "INSERT INTO users (email, total_fantasy_points) VALUES (?1, 0)",
            params![email],
        )?;
        Ok(User {
            id: UserId::new(self.conn.last_insert_rowid()),
            email: email.to_string(),
            total_fantasy_points: 0.0,
        })
    }

    pub fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = self
            .conn
            .query_row(
                "SELECT id, email, total_fantasy_points FROM users WHERE email = ?1",
                params![email],
                row_to_user,
            )
            .optional()?;
        Ok(user)
    }

    /// Replace the set of players associated with a user.
    pub fn set_user_players(&self, user_id: UserId, player_ids: &[PlayerId]) -> Result<()> {
        self.conn.execute(
            "DELETE FROM user_players WHERE user_id = ?1",
            params![user_id.as_i64()],
        )?;

        let unique: BTreeSet<PlayerId> = player_ids.iter().copied().collect();
        let mut stmt = self
            .conn
            .prepare("INSERT INTO user_players (user_id, player_id) VALUES (?1, ?2)")?;
        for player_id in unique {
            stmt.execute(params![user_id.as_i64(), player_id.as_i64()])?;
        }
        Ok(())
    }

    pub fn players_for_user(&self, user_id: UserId) -> Result<Vec<Player>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.id, p.full_name, p.is_active, p.team_name, p.position, p.average_fantasy_points
             FROM players p
             JOIN user_players up ON up.player_id = p.id
             WHERE up.user_id = ?1
             ORDER BY p.average_fantasy_points DESC, p.full_name",
        )?;
        let rows = stmt.query_map(params![user_id.as_i64()], row_to_player)?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Players ordered by average fantasy points, with last-game points attached
    pub fn list_player_summaries(&self, filter: &PlayerListFilter) -> Result<Vec<PlayerSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.id, p.full_name, p.position, p.team_name, p.is_active, p.average_fantasy_points,
                    (SELECT g.fantasy_points FROM player_game_stats g
                     WHERE g.player_id = p.id
                     ORDER BY g.game_date DESC, g.id DESC LIMIT 1),
                    (SELECT COUNT(*) FROM player_game_stats g WHERE g.player_id = p.id)
             FROM players p
             WHERE (?1 = 0 OR p.is_active = 1)
               AND (?2 IS NULL OR p.team_name = ?2 COLLATE NOCASE)
             ORDER BY p.average_fantasy_points DESC, p.full_name ASC
             LIMIT ?3",
        )?;

        // SQLite treats a negative LIMIT as "no limit".
        let limit = filter.limit.map(i64::from).unwrap_or(-1);
        let rows = stmt.query_map(
            params![filter.active_only, filter.team, limit],
            |row| {
                Ok(PlayerSummary {
                    id: PlayerId::new(row.get(0)?),
                    full_name: row.get(1)?,
                    position: row.get(2)?,
                    team_name: row.get(3)?,
                    is_active: row.get(4)?,
                    average_fantasy_points: row.get(5)?,
                    last_game_fantasy_points: row.get(6)?,
                    games_played: row.get(7)?,
                })
            },
        )?;

        let mut summaries = Vec::new();
        for row in rows {
            summaries.push(row?);
        }
        Ok(summaries)
    }
}

fn row_to_player(row: &Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: PlayerId::new(row.get(0)?),
        full_name: row.get(1)?,
        is_active: row.get(2)?,
        team_name: row.get(3)?,
        position: row.get(4)?,
        average_fantasy_points: row.get(5)?,
    })
}

fn row_to_game_stats(row: &Row) -> rusqlite::Result<PlayerGameStats> {
    let raw_date: String = row.get(3)?;
    let game_date = raw_date
        .parse::<GameDate>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

    Ok(PlayerGameStats {
        id: row.get(0)?,
        player_id: PlayerId::new(row.get(1)?),
        game_id: GameId::new(row.get::<_, String>(2)?),
        game_date,
        points: row.get(4)?,
        rebounds: row.get(5)?,
        assists: row.get(6)?,
        fantasy_points: row.get(7)?,
    })
}

fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: UserId::new(row.get(0)?),
        email: row.get(1)?,
        total_fantasy_points: row.get(2)?,
    })
}
