//! MLB Stats Query Library
//!
//! Answers single baseball statistics queries against the MLB stats
//! service: pass-through lookups for games, box scores, teams and
//! standings, and name-based player lookups that resolve a typed name to a
//! player and reshape year-by-year statistics into a typed report.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mlb_stats::{commands::handle_request, config::Settings, mlb::http::StatsClient};
//!
//! # async fn example() -> mlb_stats::Result<()> {
//! let client = StatsClient::new(&Settings::default())?;
//! let response = handle_request(
//!     &client,
//!     r#"{"action": "player_season_stats", "playerName": "Aaron Judge"}"#,
//! )
//! .await;
//!
//! println!("{}", response.body);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export MLB_STATS_BASE_URL=https://statsapi.mlb.com
//! export MLB_STATS_SEARCH_TIMEOUT_SECS=10
//! export RUST_LOG=mlb_stats=debug
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod mlb;

// Re-export commonly used types
pub use cli::types::{GameId, LeagueId, PlayerId, Season, StatGroup, TeamId};
pub use error::{Result, StatsError};
pub use mlb::types::{PlayerSeasonReport, ResolvedPlayer, SeasonRecord};

pub const BASE_URL_ENV_VAR: &str = "MLB_STATS_BASE_URL";
pub const SEARCH_TIMEOUT_ENV_VAR: &str = "MLB_STATS_SEARCH_TIMEOUT_SECS";
