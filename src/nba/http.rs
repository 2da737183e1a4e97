//! HTTP client for the NBA stats endpoints used by the sync jobs.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::{
    cli::types::{GameDate, PlayerId, Season, TeamId},
    core::{http::stats_header_map, SyncConfig},
    nba::types::{
        AllPlayersRow, GameLogRow, ResultSet, RosterRow, StatsResponse, COMMON_ALL_PLAYERS,
        COMMON_TEAM_ROSTER, LEAGUE_GAME_LOG, PLAYER_GAME_LOG,
    },
    Result,
};

#[cfg(test)]
mod tests;

/// Base path for the NBA stats API.
pub const NBA_STATS_BASE_URL: &str = "https://stats.nba.com/stats";

/// `LeagueID` for the NBA (as opposed to the WNBA / G League).
pub const NBA_LEAGUE_ID: &str = "00";

const REGULAR_SEASON: &str = "Regular Season";

/// Thin wrapper over `reqwest::Client` bound to one base URL.
pub struct StatsClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl StatsClient {
    pub fn new(config: &SyncConfig) -> Result<Self> {
        Self::with_base_url(&config.base_url, config.request_timeout)
    }

    /// Point the client at another host (a mock server in tests).
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .default_headers(stats_header_map()?)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    async fn get_endpoint(&self, endpoint: &str, params: &[(&str, String)]) -> Result<StatsResponse> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, ?params, "requesting stats endpoint");

        let res = self
            .client
            .get(&url)
            .query(params)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?
            .json::<StatsResponse>()
            .await?;

        Ok(res)
    }

    /// Every player known for the season (`commonallplayers`, current season only).
    pub async fn get_all_players(&self, season: &Season) -> Result<Vec<AllPlayersRow>> {
        let params = [
            ("IsOnlyCurrentSeason", "1".to_string()),
            ("LeagueID", NBA_LEAGUE_ID.to_string()),
            ("Season", season.to_string()),
        ];
        let res = self.get_endpoint("commonallplayers", &params).await?;
        res.result_set(COMMON_ALL_PLAYERS)?.parse_rows()
    }

    /// One team's roster for the season (`commonteamroster`).
    pub async fn get_team_roster(&self, team_id: TeamId, season: &Season) -> Result<Vec<RosterRow>> {
        let params = [
            ("LeagueID", NBA_LEAGUE_ID.to_string()),
            ("Season", season.to_string()),
            ("TeamID", team_id.to_string()),
        ];
        let res = self.get_endpoint("commonteamroster", &params).await?;
        res.result_set(COMMON_TEAM_ROSTER)?.parse_rows()
    }

    /// League-wide player game log for a single date (`leaguegamelog`, player mode).
    ///
    /// Rows come back unconverted; callers pick the players they track first.
    pub async fn get_league_game_log(&self, season: &Season, date: GameDate) -> Result<ResultSet> {
        let params = [
            ("Counter", "0".to_string()),
            ("DateFrom", date.to_string()),
            ("DateTo", date.to_string()),
            ("Direction", "ASC".to_string()),
            ("LeagueID", NBA_LEAGUE_ID.to_string()),
            ("PlayerOrTeam", "P".to_string()),
            ("Season", season.to_string()),
            ("SeasonType", REGULAR_SEASON.to_string()),
            ("Sorter", "DATE".to_string()),
        ];
        let res = self.get_endpoint("leaguegamelog", &params).await?;
        res.into_result_set(LEAGUE_GAME_LOG)
    }

    /// Full season game log for one player, most recent game first (`playergamelog`).
    pub async fn get_player_game_log(
        &self,
        player_id: PlayerId,
        season: &Season,
    ) -> Result<Vec<GameLogRow>> {
        let params = [
            ("LeagueID", NBA_LEAGUE_ID.to_string()),
            ("PlayerID", player_id.to_string()),
            ("Season", season.to_string()),
            ("SeasonType", REGULAR_SEASON.to_string()),
        ];
        let res = self.get_endpoint("playergamelog", &params).await?;
        res.result_set(PLAYER_GAME_LOG)?.parse_rows()
    }
}
