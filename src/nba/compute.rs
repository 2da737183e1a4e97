use std::collections::HashSet;

use crate::cli::types::PlayerId;
use crate::error::Result;
use crate::nba::types::{GameLogRow, ResultSet};


pub const REBOUND_WEIGHT: f64 = 1.2;
pub const ASSIST_WEIGHT: f64 = 1.5;

/// Fantasy points for one stat line: `points + 1.2 * rebounds + 1.5 * assists`.
///
/// Evaluated left to right in `f64`; stored values depend on the exact
/// rounding, so keep the operand order.
pub fn fantasy_points(points: i64, rebounds: i64, assists: i64) -> f64 {
    points as f64 + REBOUND_WEIGHT * rebounds as f64 + ASSIST_WEIGHT * assists as f64
}

/// Arithmetic mean of a player's stored fantasy points, `0.0` with no games.
pub fn average_fantasy_points(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Keep the first game row per tracked player, in response order.
///
/// Only the kept rows are converted, so a malformed row for an untracked
/// player is never read. The league log can list a player twice on one date
/// (e.g. a suspended game resumed later); only the first row is recorded.
pub fn first_game_per_player(
    set: &ResultSet,
    tracked: &HashSet<PlayerId>,
) -> Result<Vec<GameLogRow>> {
    set.column_index("PLAYER_ID")?;

    let mut seen = HashSet::new();
    let mut games = Vec::new();
    for row in set.rows() {
        let Ok(Some(id)) = row.opt_i64("PLAYER_ID") else {
            continue;
        };
        let id = PlayerId::new(id);
        if tracked.contains(&id) && seen.insert(id) {
            games.push(GameLogRow::try_from(row)?);
        }
    }
    Ok(games)
}

impl GameLogRow {
    pub fn fantasy_points(&self) -> f64 {
        fantasy_points(self.points, self.rebounds, self.assists)
    }
}
