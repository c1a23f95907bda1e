//! Season years.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Season used by `player_stats` when the request does not name one.
pub const DEFAULT_PLAYER_STATS_SEASON: i64 = 2024;

/// Earliest and latest season accepted in a request.
pub const MIN_SEASON: i64 = 1900;
pub const MAX_SEASON: i64 = 2100;

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Season(pub i64);

impl Season {
    pub fn new(year: i64) -> Self {
        Self(year)
    }

    /// The current calendar year on the local clock.
    pub fn current() -> Self {
        Self(i64::from(chrono::Local::now().year()))
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Whether the year falls inside the range a request may ask for.
    pub fn is_in_request_range(&self) -> bool {
        (MIN_SEASON..=MAX_SEASON).contains(&self.0)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
