//! Wire types for the NBA stats API.
//!
//! Every endpoint we use answers with the same envelope: a list of named
//! result sets, each a table of `headers` plus positional `rowSet` rows.
//! Columns are resolved by header name so that column reordering upstream
//! does not silently shift values.

use crate::cli::types::{GameDate, GameId, PlayerId};
use crate::error::{Result, SyncError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg(test)]
mod tests;

pub const COMMON_ALL_PLAYERS: &str = "CommonAllPlayers";
pub const COMMON_TEAM_ROSTER: &str = "CommonTeamRoster";
pub const LEAGUE_GAME_LOG: &str = "LeagueGameLog";
pub const PLAYER_GAME_LOG: &str = "PlayerGameLog";

static NULL: Value = Value::Null;

/// Top-level envelope returned by `stats.nba.com/stats/<endpoint>`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatsResponse {
    #[serde(rename = "resultSets", default)]
    pub result_sets: Vec<ResultSet>,
}

impl StatsResponse {
    /// Find a result set by name.
    pub fn result_set(&self, name: &str) -> Result<&ResultSet> {
        self.result_sets
            .iter()
            .find(|set| set.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| SyncError::MissingResultSet {
                name: name.to_string(),
            })
    }

    /// Take ownership of a result set by name.
    pub fn into_result_set(self, name: &str) -> Result<ResultSet> {
        self.result_sets
            .into_iter()
            .find(|set| set.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| SyncError::MissingResultSet {
                name: name.to_string(),
            })
    }
}

/// One table inside a [`StatsResponse`]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet", default)]
    pub row_set: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Position of a column, matched case-insensitively
    /// (`playergamelog` spells it `Player_ID`, `leaguegamelog` `PLAYER_ID`).
    pub fn column_index(&self, column: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(column))
            .ok_or_else(|| SyncError::MissingColumn {
                result_set: self.name.clone(),
                column: column.to_string(),
            })
    }

    pub fn rows(&self) -> impl Iterator<Item = TableRow<'_>> {
        self.row_set.iter().map(move |values| TableRow { set: self, values })
    }

    /// Convert every row into a typed record, failing on the first bad row.
    pub fn parse_rows<T>(&self) -> Result<Vec<T>>
    where
        T: for<'a> TryFrom<TableRow<'a>, Error = SyncError>,
    {
        self.rows().map(T::try_from).collect()
    }
}

/// Borrowed view of one `rowSet` entry with header-based accessors
#[derive(Debug, Clone, Copy)]
pub struct TableRow<'a> {
    set: &'a ResultSet,
    values: &'a [Value],
}

impl<'a> TableRow<'a> {
    pub fn get(&self, column: &str) -> Result<&'a Value> {
        let idx = self.set.column_index(column)?;
        // Short rows are treated as trailing nulls.
        Ok(self.values.get(idx).unwrap_or(&NULL))
    }

    fn invalid(column: &str, value: &Value) -> SyncError {
        SyncError::InvalidField {
            column: column.to_string(),
            value: value.to_string(),
        }
    }

    /// Integer column; tolerates `25.0` and `"25"`.
    pub fn i64(&self, column: &str) -> Result<i64> {
        let value = self.get(column)?;
        self.opt_i64(column)?
            .ok_or_else(|| Self::invalid(column, value))
    }

    /// Integer column where null means "absent".
    pub fn opt_i64(&self, column: &str) -> Result<Option<i64>> {
        let value = self.get(column)?;
        match value {
            Value::Null => Ok(None),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Some(i))
                } else {
                    match n.as_f64() {
                        Some(f) if f.fract() == 0.0 => Ok(Some(f as i64)),
                        _ => Err(Self::invalid(column, value)),
                    }
                }
            }
            Value::String(s) if s.trim().is_empty() => Ok(None),
            Value::String(s) => s
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| Self::invalid(column, value)),
            _ => Err(Self::invalid(column, value)),
        }
    }

    /// Text column; numbers are rendered, null is an error.
    pub fn string(&self, column: &str) -> Result<String> {
        let value = self.get(column)?;
        self.opt_string(column)?
            .ok_or_else(|| Self::invalid(column, value))
    }

    /// Text column where null and blank mean "absent".
    pub fn opt_string(&self, column: &str) -> Result<Option<String>> {
        match self.get(column)? {
            Value::Null => Ok(None),
            Value::String(s) if s.trim().is_empty() => Ok(None),
            Value::String(s) => Ok(Some(s.trim().to_string())),
            Value::Number(n) => Ok(Some(n.to_string())),
            other => Err(Self::invalid(column, other)),
        }
    }
}

/// Row of `commonallplayers`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllPlayersRow {
    pub player_id: PlayerId,
    pub full_name: String,
    pub is_active: bool,
    pub team_abbreviation: Option<String>,
}

impl TryFrom<TableRow<'_>> for AllPlayersRow {
    type Error = SyncError;

    fn try_from(row: TableRow<'_>) -> Result<Self> {
        Ok(Self {
            player_id: PlayerId::new(row.i64("PERSON_ID")?),
            full_name: row.string("DISPLAY_FIRST_LAST")?,
            is_active: row.opt_i64("ROSTERSTATUS")? == Some(1),
            team_abbreviation: row.opt_string("TEAM_ABBREVIATION")?,
        })
    }
}

/// Row of `commonteamroster`; only the position is used
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterRow {
    pub player_id: PlayerId,
    pub position: Option<String>,
}

impl TryFrom<TableRow<'_>> for RosterRow {
    type Error = SyncError;

    fn try_from(row: TableRow<'_>) -> Result<Self> {
        Ok(Self {
            player_id: PlayerId::new(row.i64("PLAYER_ID")?),
            position: row.opt_string("POSITION")?,
        })
    }
}

/// Row of `leaguegamelog` (player mode) or `playergamelog`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameLogRow {
    pub player_id: PlayerId,
    pub game_id: GameId,
    pub game_date: GameDate,
    pub points: i64,
    pub rebounds: i64,
    pub assists: i64,
}

impl TryFrom<TableRow<'_>> for GameLogRow {
    type Error = SyncError;

    fn try_from(row: TableRow<'_>) -> Result<Self> {
        Ok(Self {
            player_id: PlayerId::new(row.i64("PLAYER_ID")?),
            game_id: GameId::new(row.string("GAME_ID")?),
            game_date: GameDate::parse_api(&row.string("GAME_DATE")?)?,
            points: row.i64("PTS")?,
            rebounds: row.i64("REB")?,
            assists: row.i64("AST")?,
        })
    }
}
