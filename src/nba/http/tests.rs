//! HTTP tests against a mocked stats API

use super::*;
use crate::SyncError;
use serde_json::json;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn client_for(server: &MockServer) -> StatsClient {
    StatsClient::with_base_url(&server.uri(), Duration::from_secs(5)).unwrap()
}

#[cfg(test)]
mod http_tests {
    use super::*;

    #[test]
    fn test_base_url_constant() {
        assert_eq!(NBA_STATS_BASE_URL, "https://stats.nba.com/stats");
        assert_eq!(NBA_LEAGUE_ID, "00");
    }

    #[tokio::test]
    async fn test_base_url_trailing_slash_trimmed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/commonallplayers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "resultSets": [{
                    "name": "CommonAllPlayers",
                    "headers": ["PERSON_ID", "DISPLAY_FIRST_LAST", "ROSTERSTATUS", "TEAM_ABBREVIATION"],
                    "rowSet": []
                }]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client =
            StatsClient::with_base_url(&format!("{}/", mock_server.uri()), Duration::from_secs(5))
                .unwrap();
        let players = client.get_all_players(&Season::default()).await.unwrap();
        assert!(players.is_empty());
    }

    #[tokio::test]
    async fn test_get_all_players() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/commonallplayers"))
            .and(query_param("IsOnlyCurrentSeason", "1"))
            .and(query_param("Season", "2025-26"))
            .and(header("x-nba-stats-token", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "resultSets": [{
                    "name": "CommonAllPlayers",
                    "headers": ["PERSON_ID", "DISPLAY_FIRST_LAST", "ROSTERSTATUS", "TEAM_ABBREVIATION"],
                    "rowSet": [
                        [2544, "LeBron James", 1, "LAL"],
                        [203999, "Nikola Jokic", 1, "DEN"]
                    ]
                }]
            })))
            .mount(&mock_server)
            .await;

        let players = client_for(&mock_server)
            .get_all_players(&Season::default())
            .await
            .unwrap();

        assert_eq!(players.len(), 2);
        assert_eq!(players[1].full_name, "Nikola Jokic");
        assert_eq!(players[1].team_abbreviation.as_deref(), Some("DEN"));
    }

    #[tokio::test]
    async fn test_get_team_roster() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/commonteamroster"))
            .and(query_param("TeamID", "1610612747"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "resultSets": [
                    {
                        "name": "CommonTeamRoster",
                        "headers": ["TeamID", "PLAYER", "POSITION", "PLAYER_ID"],
                        "rowSet": [[1610612747, "LeBron James", "F", 2544]]
                    },
                    {"name": "Coaches", "headers": ["COACH_ID"], "rowSet": [["1"]]}
                ]
            })))
            .mount(&mock_server)
            .await;

        let roster = client_for(&mock_server)
            .get_team_roster(TeamId::new(1610612747), &Season::default())
            .await
            .unwrap();

        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].player_id, PlayerId::new(2544));
        assert_eq!(roster[0].position.as_deref(), Some("F"));
    }

    #[tokio::test]
    async fn test_get_league_game_log_sends_date_window() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/leaguegamelog"))
            .and(query_param("PlayerOrTeam", "P"))
            .and(query_param("DateFrom", "2025-10-21"))
            .and(query_param("DateTo", "2025-10-21"))
            .and(query_param("SeasonType", "Regular Season"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "resultSets": [{
                    "name": "LeagueGameLog",
                    "headers": ["PLAYER_ID", "GAME_ID", "GAME_DATE", "PTS", "REB", "AST"],
                    "rowSet": [[2544, "0022500001", "2025-10-21", 27, 8, 9]]
                }]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let date: GameDate = "2025-10-21".parse().unwrap();
        let set = client_for(&mock_server)
            .get_league_game_log(&Season::default(), date)
            .await
            .unwrap();

        let games: Vec<GameLogRow> = set.parse_rows().unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].fantasy_points(), 27.0 + 1.2 * 8.0 + 1.5 * 9.0);
    }

    #[tokio::test]
    async fn test_get_player_game_log() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/playergamelog"))
            .and(query_param("PlayerID", "2544"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "resultSets": [{
                    "name": "PlayerGameLog",
                    "headers": ["SEASON_ID", "Player_ID", "Game_ID", "GAME_DATE", "PTS", "REB", "AST"],
                    "rowSet": [
                        ["22025", 2544, "0022500040", "OCT 28, 2025", 30, 10, 8],
                        ["22025", 2544, "0022500001", "OCT 21, 2025", 27, 8, 9]
                    ]
                }]
            })))
            .mount(&mock_server)
            .await;

        let log = client_for(&mock_server)
            .get_player_game_log(PlayerId::new(2544), &Season::default())
            .await
            .unwrap();

        assert_eq!(log.len(), 2);
        assert_eq!(log[0].game_id.as_str(), "0022500040");
        assert_eq!(log[0].game_date.to_string(), "2025-10-28");
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/commonallplayers"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server)
            .get_all_players(&Season::default())
            .await;

        assert!(matches!(result, Err(SyncError::Http(_))));
    }

    #[tokio::test]
    async fn test_missing_result_set() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/leaguegamelog"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"resultSets": []})))
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server)
            .get_league_game_log(&Season::default(), "2025-10-21".parse().unwrap())
            .await;

        assert!(matches!(result, Err(SyncError::MissingResultSet { .. })));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/commonteamroster"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>blocked</html>"))
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server)
            .get_team_roster(TeamId::new(1610612737), &Season::default())
            .await;

        // reqwest reports JSON decode failures as its own error type
        assert!(matches!(result, Err(SyncError::Http(_))));
    }

    #[tokio::test]
    async fn test_request_timeout() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/commonallplayers"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"resultSets": []}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let client =
            StatsClient::with_base_url(&mock_server.uri(), Duration::from_millis(50)).unwrap();
        let result = client.get_all_players(&Season::default()).await;

        match result {
            Err(SyncError::Http(e)) => assert!(e.is_timeout()),
            other => panic!("Expected timeout, got {other:?}"),
        }
    }
}
