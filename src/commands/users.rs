//! User management: register users and pick the players they follow.
//!
//! Users are credited with each new game's fantasy points for every
//! player on their team during stats sync.

use serde::Serialize;
use tracing::info;

use crate::{
    cli::types::PlayerId,
    error::SyncError,
    storage::{Player, PlayerDatabase, User},
    Result,
};

/// A user together with the players they follow
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserTeam {
    pub user: User,
    pub players: Vec<Player>,
}

fn require_user(db: &PlayerDatabase, email: &str) -> Result<User> {
    let email = email.trim();
    db.get_user_by_email(email)?
        .ok_or_else(|| SyncError::UserNotFound {
            email: email.to_string(),
        })
}

pub fn add_user(db: &PlayerDatabase, email: &str) -> Result<User> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(SyncError::InvalidField {
            column: "email".to_string(),
            value: email.to_string(),
        });
    }
    let user = db.create_user(email)?;
    info!("Created user {} (id {})", user.email, user.id);
    Ok(user)
}

/// Replace the user's team. Every player must already be stored.
pub fn set_team(db: &PlayerDatabase, email: &str, player_ids: &[PlayerId]) -> Result<UserTeam> {
    db.run_in_transaction(|db| {
        let user = require_user(db, email)?;
        for id in player_ids {
            if db.get_player(*id)?.is_none() {
                return Err(SyncError::PlayerNotFound { id: id.as_i64() });
            }
        }
        db.set_user_players(user.id, player_ids)?;
        let players = db.players_for_user(user.id)?;
        info!("Set {} players for {}", players.len(), user.email);
        Ok(UserTeam { user, players })
    })
}

pub fn show_team(db: &PlayerDatabase, email: &str) -> Result<UserTeam> {
    let user = require_user(db, email)?;
    let players = db.players_for_user(user.id)?;
    Ok(UserTeam { user, players })
}

pub fn handle_add_user(db: &PlayerDatabase, email: &str) -> Result<()> {
    let user = add_user(db, email)?;
    println!("✓ Created user {} (id {})", user.email, user.id); // tarpaulin::skip
    Ok(())
}

pub fn handle_set_team(db: &PlayerDatabase, email: &str, player_ids: &[PlayerId]) -> Result<()> {
    let team = set_team(db, email, player_ids)?;
    println!(
        "✓ {} now follows {} players",
        team.user.email,
        team.players.len()
    ); // tarpaulin::skip
    Ok(())
}

pub fn handle_show_team(db: &PlayerDatabase, email: &str, as_json: bool) -> Result<()> {
    let team = show_team(db, email)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&team)?); // tarpaulin::skip
        return Ok(());
    }

    // tarpaulin::skip - console output
    println!(
        "{} total FP: {:.2}",
        team.user.email, team.user.total_fantasy_points
    );
    for player in &team.players {
        println!(
            "  {} {} ({}) avg {:.2}",
            player.id,
            player.full_name,
            player.team_name.as_deref().unwrap_or("FA"),
            player.average_fantasy_points
        );
    }
    Ok(())
}
