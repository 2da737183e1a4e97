//! NBA stats API access: wire types, HTTP client, static team table and
//! fantasy scoring.

pub mod compute;
pub mod http;
pub mod teams;
pub mod types;

pub use compute::{average_fantasy_points, fantasy_points, first_game_per_player};
pub use http::StatsClient;
pub use types::{AllPlayersRow, GameLogRow, ResultSet, RosterRow, StatsResponse};
