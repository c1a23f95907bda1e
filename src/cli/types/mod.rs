//! Type-safe wrappers and enums for MLB stats data.

pub mod ids;
pub mod position;
pub mod time;

pub use ids::{GameId, LeagueId, PlayerId, TeamId};
pub use position::StatGroup;
pub use time::Season;
