//! Unit tests for NBA stats wire types

use super::*;
use serde_json::json;

fn league_game_log_response() -> Value {
    json!({
        "resource": "leaguegamelog",
        "parameters": {"PlayerOrTeam": "P", "DateFrom": "2025-10-21"},
        "resultSets": [{
            "name": "LeagueGameLog",
            "headers": [
                "SEASON_ID", "PLAYER_ID", "PLAYER_NAME", "TEAM_ABBREVIATION",
                "GAME_ID", "GAME_DATE", "MATCHUP", "WL", "MIN",
                "REB", "AST", "STL", "BLK", "PTS"
            ],
            "rowSet": [
                ["22025", 2544, "LeBron James", "LAL", "0022500001", "2025-10-21",
                 "LAL vs. GSW", "W", 35, 8, 9, 1, 1, 27],
                ["22025", 201939, "Stephen Curry", "GSW", "0022500001", "2025-10-21",
                 "GSW @ LAL", "L", 34, 4, 6, 2, 0, 31]
            ]
        }]
    })
}

#[cfg(test)]
mod envelope_tests {
    use super::*;

    #[test]
    fn test_result_set_lookup_by_name() {
        let response: StatsResponse = serde_json::from_value(league_game_log_response()).unwrap();
        let set = response.result_set(LEAGUE_GAME_LOG).unwrap();
        assert_eq!(set.row_set.len(), 2);
    }

    #[test]
    fn test_result_set_missing() {
        let response: StatsResponse = serde_json::from_value(league_game_log_response()).unwrap();
        match response.result_set(PLAYER_GAME_LOG) {
            Err(SyncError::MissingResultSet { name }) => assert_eq!(name, "PlayerGameLog"),
            other => panic!("Expected MissingResultSet, got {other:?}"),
        }
    }

    #[test]
    fn test_into_result_set_takes_named_table() {
        let response: StatsResponse = serde_json::from_value(league_game_log_response()).unwrap();
        let set = response.clone().into_result_set("leaguegamelog").unwrap();
        assert_eq!(set.name, LEAGUE_GAME_LOG);
        assert_eq!(set.row_set.len(), 2);
        assert!(matches!(
            response.into_result_set(PLAYER_GAME_LOG),
            Err(SyncError::MissingResultSet { .. })
        ));
    }

    #[test]
    fn test_envelope_without_result_sets() {
        let response: StatsResponse = serde_json::from_value(json!({"resource": "x"})).unwrap();
        assert!(response.result_sets.is_empty());
    }

    #[test]
    fn test_column_index_case_insensitive() {
        let set = ResultSet {
            name: "PlayerGameLog".to_string(),
            headers: vec!["SEASON_ID".into(), "Player_ID".into(), "Game_ID".into()],
            row_set: vec![],
        };
        assert_eq!(set.column_index("PLAYER_ID").unwrap(), 1);
        assert_eq!(set.column_index("game_id").unwrap(), 2);
        assert!(matches!(
            set.column_index("PTS"),
            Err(SyncError::MissingColumn { .. })
        ));
    }
}

#[cfg(test)]
mod row_tests {
    use super::*;

    fn single_row_set(headers: &[&str], row: Value) -> ResultSet {
        ResultSet {
            name: "Test".to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            row_set: vec![row.as_array().unwrap().clone()],
        }
    }

    #[test]
    fn test_game_log_rows_parse() {
        let response: StatsResponse = serde_json::from_value(league_game_log_response()).unwrap();
        let rows: Vec<GameLogRow> = response
            .result_set(LEAGUE_GAME_LOG)
            .unwrap()
            .parse_rows()
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].player_id, PlayerId::new(2544));
        assert_eq!(rows[0].game_id, GameId::new("0022500001"));
        assert_eq!(rows[0].game_date.to_string(), "2025-10-21");
        assert_eq!((rows[0].points, rows[0].rebounds, rows[0].assists), (27, 8, 9));
        assert_eq!(rows[1].points, 31);
    }

    #[test]
    fn test_player_game_log_row_parse() {
        let set = single_row_set(
            &["SEASON_ID", "Player_ID", "Game_ID", "GAME_DATE", "REB", "AST", "PTS"],
            json!(["22025", 2544, "0022500015", "OCT 24, 2025", 10, 12, 30]),
        );
        let rows: Vec<GameLogRow> = set.parse_rows().unwrap();
        assert_eq!(rows[0].game_id.as_str(), "0022500015");
        assert_eq!(rows[0].game_date.to_string(), "2025-10-24");
        assert_eq!(rows[0].assists, 12);
    }

    #[test]
    fn test_numeric_columns_accept_floats_and_strings() {
        let set = single_row_set(
            &["PLAYER_ID", "GAME_ID", "GAME_DATE", "PTS", "REB", "AST"],
            json!(["2544", "0022500001", "2025-10-21", 27.0, "8", 9]),
        );
        let row: GameLogRow = set.parse_rows().unwrap().remove(0);
        assert_eq!(row.player_id, PlayerId::new(2544));
        assert_eq!((row.points, row.rebounds, row.assists), (27, 8, 9));
    }

    #[test]
    fn test_null_points_is_invalid() {
        let set = single_row_set(
            &["PLAYER_ID", "GAME_ID", "GAME_DATE", "PTS", "REB", "AST"],
            json!([2544, "0022500001", "2025-10-21", null, 8, 9]),
        );
        match set.parse_rows::<GameLogRow>() {
            Err(SyncError::InvalidField { column, .. }) => assert_eq!(column, "PTS"),
            other => panic!("Expected InvalidField, got {other:?}"),
        }
    }

    #[test]
    fn test_fractional_points_is_invalid() {
        let set = single_row_set(
            &["PLAYER_ID", "GAME_ID", "GAME_DATE", "PTS", "REB", "AST"],
            json!([2544, "0022500001", "2025-10-21", 27.5, 8, 9]),
        );
        assert!(matches!(
            set.parse_rows::<GameLogRow>(),
            Err(SyncError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_short_row_reads_as_null() {
        let set = single_row_set(&["PLAYER_ID", "POSITION"], json!([1630162]));
        let rows: Vec<RosterRow> = set.parse_rows().unwrap();
        assert_eq!(rows[0].position, None);
    }

    #[test]
    fn test_all_players_row_roster_status() {
        let set = ResultSet {
            name: COMMON_ALL_PLAYERS.to_string(),
            headers: vec![
                "PERSON_ID".into(),
                "DISPLAY_LAST_COMMA_FIRST".into(),
                "DISPLAY_FIRST_LAST".into(),
                "ROSTERSTATUS".into(),
                "TEAM_ABBREVIATION".into(),
            ],
            row_set: vec![
                json!([2544, "James, LeBron", "LeBron James", 1, "LAL"])
                    .as_array()
                    .unwrap()
                    .clone(),
                json!([1629029, "Doncic, Luka", "Luka Doncic", 0, ""])
                    .as_array()
                    .unwrap()
                    .clone(),
                json!([1641705, "Wembanyama, Victor", "Victor Wembanyama", null, null])
                    .as_array()
                    .unwrap()
                    .clone(),
            ],
        };

        let rows: Vec<AllPlayersRow> = set.parse_rows().unwrap();
        assert!(rows[0].is_active);
        assert_eq!(rows[0].team_abbreviation.as_deref(), Some("LAL"));
        assert_eq!(rows[0].full_name, "LeBron James");
        assert!(!rows[1].is_active);
        assert_eq!(rows[1].team_abbreviation, None);
        assert!(!rows[2].is_active);
    }

    #[test]
    fn test_roster_row_missing_column() {
        let set = single_row_set(&["PLAYER_ID"], json!([2544]));
        match set.parse_rows::<RosterRow>() {
            Err(SyncError::MissingColumn { column, result_set }) => {
                assert_eq!(column, "POSITION");
                assert_eq!(result_set, "Test");
            }
            other => panic!("Expected MissingColumn, got {other:?}"),
        }
    }
}
