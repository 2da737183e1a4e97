//! Runtime configuration: CLI flags first, then environment, then defaults.

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::types::Season;
use crate::error::{Result, SyncError};
use crate::nba::http::NBA_STATS_BASE_URL;

pub const SEASON_ENV_VAR: &str = "NBA_FANTASY_SEASON";
pub const DB_PATH_ENV_VAR: &str = "NBA_FANTASY_DB_PATH";
pub const BASE_URL_ENV_VAR: &str = "NBA_STATS_BASE_URL";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
/// Pause after each team roster request; the stats API throttles bursts.
pub const DEFAULT_ROSTER_DELAY: Duration = Duration::from_secs(1);

/// Settings shared by every sync command
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub season: Season,
    pub base_url: String,
    pub request_timeout: Duration,
    pub roster_delay: Duration,
    pub db_path: PathBuf,
}

impl SyncConfig {
    /// Resolve the configuration from optional CLI overrides plus the environment.
    pub fn resolve(
        season: Option<Season>,
        db_path: Option<PathBuf>,
        timeout_secs: Option<u64>,
    ) -> Result<Self> {
        Ok(Self {
            season: resolve_season(season)?,
            base_url: resolve_base_url(),
            request_timeout: timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT),
            roster_delay: DEFAULT_ROSTER_DELAY,
            db_path: resolve_db_path(db_path)?,
        })
    }
}

/// Resolve season from the flag or `NBA_FANTASY_SEASON`, falling back to the current season.
pub fn resolve_season(season: Option<Season>) -> Result<Season> {
    if let Some(season) = season {
        return Ok(season);
    }
    match std::env::var(SEASON_ENV_VAR) {
        Ok(raw) => raw.parse(),
        Err(_) => Ok(Season::default()),
    }
}

pub fn resolve_base_url() -> String {
    std::env::var(BASE_URL_ENV_VAR)
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| NBA_STATS_BASE_URL.to_string())
}

/// Resolve the SQLite path from the flag or `NBA_FANTASY_DB_PATH`,
/// defaulting to `<cache dir>/nba-fantasy-sync/fantasy.db`.
pub fn resolve_db_path(db_path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = db_path {
        return Ok(path);
    }
    if let Ok(path) = std::env::var(DB_PATH_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }
    default_db_path()
}

fn default_db_path() -> Result<PathBuf> {
    let cache_dir = dirs::cache_dir().ok_or(SyncError::NoDatabasePath)?;
    Ok(cache_dir.join("nba-fantasy-sync").join("fantasy.db"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_season_prefers_flag() {
        let season = resolve_season(Some(Season::starting(2023))).unwrap();
        assert_eq!(season.as_str(), "2023-24");
    }

    #[test]
    fn test_resolve_db_path_prefers_flag() {
        let path = resolve_db_path(Some(PathBuf::from("/tmp/fantasy-test.db"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/fantasy-test.db"));
    }

    #[test]
    fn test_default_db_path_location() {
        if let Ok(path) = default_db_path() {
            assert!(path.ends_with("nba-fantasy-sync/fantasy.db"));
        }
    }

    #[test]
    fn test_resolve_with_overrides() {
        let config = SyncConfig::resolve(
            Some(Season::starting(2024)),
            Some(PathBuf::from("/tmp/override.db")),
            Some(5),
        )
        .unwrap();

        assert_eq!(config.season.as_str(), "2024-25");
        assert_eq!(config.db_path, PathBuf::from("/tmp/override.db"));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.roster_delay, DEFAULT_ROSTER_DELAY);
    }
}
