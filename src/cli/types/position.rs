//! Statistic groups and how a player's position selects one.

use std::fmt;

/// Position abbreviation the stats service uses for pitchers.
pub const PITCHER_ABBREVIATION: &str = "P";

/// Position reported when the upstream record carries none.
pub const UNKNOWN_POSITION: &str = "Unknown";

/// Which family of statistics to request for a player.
///
/// Pitchers (`"P"`) get pitching stats; every other abbreviation,
/// including two-way and unknown players, is treated as a batter.
///
/// # Examples
///
/// ```rust
/// use mlb_stats::StatGroup;
///
/// assert_eq!(StatGroup::for_position("P"), StatGroup::Pitching);
/// assert_eq!(StatGroup::for_position("RF"), StatGroup::Hitting);
/// assert_eq!(StatGroup::Hitting.to_string(), "hitting");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatGroup {
    Pitching,
    Hitting,
}

impl StatGroup {
    pub fn for_position(position: &str) -> Self {
        if position == PITCHER_ABBREVIATION {
            StatGroup::Pitching
        } else {
            StatGroup::Hitting
        }
    }

    /// Name used in upstream query parameters and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatGroup::Pitching => "pitching",
            StatGroup::Hitting => "hitting",
        }
    }
}

impl fmt::Display for StatGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
