//! Type-safe wrappers for NBA stats data.

pub mod ids;
pub mod time;

pub use ids::{GameId, PlayerId, TeamId, UserId};
pub use time::{GameDate, Season};
