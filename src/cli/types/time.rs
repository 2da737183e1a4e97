//! Season and game-date types.

use crate::error::{Result, SyncError};
use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Current season used when nothing else is configured.
pub const DEFAULT_SEASON: &str = "2025-26";

/// NBA season in the stats API's `YYYY-YY` form (e.g. `2025-26`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Season(String);

impl Season {
    /// Build a season from its starting year: `Season::starting(2025)` is `2025-26`.
    pub fn starting(year: u16) -> Self {
        Self(format!("{}-{:02}", year, (year + 1) % 100))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(DEFAULT_SEASON.to_string())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Season {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || SyncError::InvalidSeason {
            value: s.to_string(),
        };
        let (start, end) = s.trim().split_once('-').ok_or_else(invalid)?;
        if start.len() != 4 || end.len() != 2 {
            return Err(invalid());
        }
        let start: u16 = start.parse().map_err(|_| invalid())?;
        let end: u16 = end.parse().map_err(|_| invalid())?;
        if (start + 1) % 100 != end {
            return Err(invalid());
        }
        Ok(Self::starting(start))
    }
}

impl TryFrom<String> for Season {
    type Error = SyncError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Calendar date of a game, stored and sent upstream as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameDate(pub NaiveDate);

impl GameDate {
    /// The calendar day before today, in UTC.
    pub fn previous_utc_day() -> Self {
        Self((Utc::now() - Duration::days(1)).date_naive())
    }

    /// Parse the date formats the stats API emits:
    /// `2025-10-21`, `2025-10-21T00:00:00` (league log) and `OCT 21, 2025` (player log).
    pub fn parse_api(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Ok(Self(date));
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
            return Ok(Self(dt.date()));
        }
        Ok(Self(NaiveDate::parse_from_str(raw, "%b %d, %Y")?))
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for GameDate {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?))
    }
}
