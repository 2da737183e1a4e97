//! Read-only listing of stored players and their fantasy averages.

use crate::{
    error::SyncError,
    nba::teams::find_by_abbreviation,
    storage::{PlayerDatabase, PlayerListFilter, PlayerSummary},
    Result,
};

/// Options for the `players` command
#[derive(Debug, Default, Clone)]
pub struct ListPlayersParams {
    pub as_json: bool,
    pub active_only: bool,
    pub team: Option<String>,
    pub limit: Option<u32>,
}

/// Validate the team filter against the league's abbreviations.
pub fn resolve_team_filter(team: Option<&str>) -> Result<Option<String>> {
    let Some(team) = team else {
        return Ok(None);
    };
    match find_by_abbreviation(team) {
        Some(team) => Ok(Some(team.abbreviation.to_string())),
        None => Err(SyncError::InvalidField {
            column: "team".to_string(),
            value: team.to_string(),
        }),
    }
}

/// One line per player: id, name, position, team, status, average and last game.
pub fn format_player_line(player: &PlayerSummary) -> String {
    let status = if player.is_active { "Active" } else { "Inactive" };
    let last = match player.last_game_fantasy_points {
        Some(points) => format!("{points:.2}"),
        None => "-".to_string(),
    };

    format!(
        "{} {} ({}) [{}] [{}] avg {:.2} last {} ({} games)",
        player.id,
        player.full_name,
        player.position.as_deref().unwrap_or("N/A"),
        player.team_name.as_deref().unwrap_or("FA"),
        status,
        player.average_fantasy_points,
        last,
        player.games_played,
    )
}

pub fn handle_list_players(db: &PlayerDatabase, params: ListPlayersParams) -> Result<()> {
    let filter = PlayerListFilter {
        active_only: params.active_only,
        team: resolve_team_filter(params.team.as_deref())?,
        limit: params.limit,
    };
    let players = db.list_player_summaries(&filter)?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&players)?); // tarpaulin::skip
    } else if players.is_empty() {
        println!("No players stored. Run `sync` first."); // tarpaulin::skip
    } else {
        for player in &players {
            println!("{}", format_player_line(player)); // tarpaulin::skip
        }
    }

    Ok(())
}
