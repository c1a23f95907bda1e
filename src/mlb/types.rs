use crate::cli::types::{position::UNKNOWN_POSITION, PlayerId};
use serde::{Deserialize, Serialize};
use serde_json::Value;


/// A person record as returned by the roster listing and the people search.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PersonRecord {
    pub id: PlayerId,
    #[serde(rename = "fullName")]
    pub full_name: String,
    /// Kept untyped: the position block is sometimes missing or malformed.
    #[serde(rename = "primaryPosition", default)]
    pub primary_position: Value,
}

impl PersonRecord {
    /// Position abbreviation, or `"Unknown"` when absent or malformed.
    pub fn position_abbreviation(&self) -> String {
        self.primary_position
            .get("abbreviation")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_POSITION)
            .to_string()
    }

    pub fn into_resolved(self) -> ResolvedPlayer {
        let primary_position = self.position_abbreviation();
        ResolvedPlayer {
            id: self.id,
            full_name: self.full_name,
            primary_position,
        }
    }
}

/// Envelope shared by `/sports/{id}/players` and `/people/search`.
///
/// Entries stay untyped; callers decode only the records they look at.
#[derive(Debug, Clone, Deserialize)]
pub struct PeopleEnvelope {
    #[serde(default)]
    pub people: Vec<Value>,
}

/// The canonical identity a free-text name resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPlayer {
    pub id: PlayerId,
    pub full_name: String,
    pub primary_position: String,
}

/// Year-by-year statistics for one player, flattened to one entry per
/// upstream split.
///
/// Each entry in `stats` is `{type, group, season, stats}` exactly as the
/// service reported it; a player who changed teams mid-season has several
/// entries for that year. Entries stay untyped until the normalizer
/// coerces them.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlayerStatData {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub stats: Vec<Value>,
}

/// One pitching season
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchingSeason {
    pub position: String,
    pub year: i64,
    pub wins: i64,
    pub losses: i64,
    pub era: f64,
    pub innings_pitched: f64,
    pub strike_outs: i64,
    pub walks: i64,
    pub hits_allowed: i64,
    pub home_runs_allowed: i64,
    pub games_started: i64,
    pub games: i64,
    /// (walks + hits allowed) / innings pitched, 0.0 without innings
    pub whip: f64,
}

/// One batting season
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BattingSeason {
    pub position: String,
    pub year: i64,
    pub hits: i64,
    pub doubles: i64,
    pub triples: i64,
    pub home_runs: i64,
    pub rbis: i64,
    pub walks: i64,
    pub avg: f64,
    pub obp: f64,
    pub slg: f64,
    pub games: i64,
    pub at_bats: i64,
}

/// A season in the schema selected by the player's position.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SeasonRecord {
    Pitcher(PitchingSeason),
    Batter(BattingSeason),
}

impl SeasonRecord {
    pub fn year(&self) -> i64 {
        match self {
            SeasonRecord::Pitcher(s) => s.year,
            SeasonRecord::Batter(s) => s.year,
        }
    }
}

/// Career totals for a pitcher.
///
/// `innings_pitched` is in real innings (`180.2` in box-score notation is
/// 180 and two thirds).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchingCareer {
    pub games: i64,
    pub wins: i64,
    pub losses: i64,
    pub strike_outs: i64,
    pub walks: i64,
    pub hits_allowed: i64,
    pub innings_pitched: f64,
    pub era: f64,
    pub whip: f64,
}

/// Career totals for a batter
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BattingCareer {
    pub games: i64,
    pub hits: i64,
    pub home_runs: i64,
    pub rbis: i64,
    pub at_bats: i64,
    pub avg: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CareerSummary {
    Pitching(PitchingCareer),
    Batting(BattingCareer),
}

/// Successful payload of the `player_season_stats` action.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSeasonReport {
    pub player_name: String,
    pub player_id: PlayerId,
    pub position: String,
    /// Ascending by year
    pub seasons: Vec<SeasonRecord>,
    pub career: CareerSummary,
}
