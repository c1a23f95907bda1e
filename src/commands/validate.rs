//! Request validation.
//!
//! Turns the untyped request object into a [`ValidatedRequest`]. Fields are
//! checked in a fixed order and the first failure ends validation; its
//! message is what the caller sees.

use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::{
    cli::types::{
        ids::DEFAULT_LEAGUE_ID,
        time::{DEFAULT_PLAYER_STATS_SEASON, MAX_SEASON, MIN_SEASON},
        GameId, LeagueId, Season, TeamId,
    },
    Result, StatsError,
};

#[cfg(test)]
mod tests;

/// Longest accepted player name, in characters, after trimming.
pub const MAX_PLAYER_NAME_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Game,
    Boxscore,
    Standings,
    Team,
    PlayerStats,
    PlayerSeasonStats,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Game,
        Action::Boxscore,
        Action::Standings,
        Action::Team,
        Action::PlayerStats,
        Action::PlayerSeasonStats,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Game => "game",
            Action::Boxscore => "boxscore",
            Action::Standings => "standings",
            Action::Team => "team",
            Action::PlayerStats => "player_stats",
            Action::PlayerSeasonStats => "player_season_stats",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Action {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        Action::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = Action::ALL.iter().map(Action::as_str).collect();
                StatsError::validation(format!(
                    "Invalid action '{s}'. Valid actions: {}",
                    valid.join(", ")
                ))
            })
    }
}

/// A request whose fields have all been checked and typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedRequest {
    Game(GameId),
    Boxscore(GameId),
    Standings(LeagueId),
    Team(TeamId),
    PlayerStats { player_name: String, season: Season },
    PlayerSeasonStats { player_name: String },
}

impl ValidatedRequest {
    pub fn action(&self) -> Action {
        match self {
            ValidatedRequest::Game(_) => Action::Game,
            ValidatedRequest::Boxscore(_) => Action::Boxscore,
            ValidatedRequest::Standings(_) => Action::Standings,
            ValidatedRequest::Team(_) => Action::Team,
            ValidatedRequest::PlayerStats { .. } => Action::PlayerStats,
            ValidatedRequest::PlayerSeasonStats { .. } => Action::PlayerSeasonStats,
        }
    }
}

/// Validate a parsed request payload.
pub fn validate_request(payload: &Value) -> Result<ValidatedRequest> {
    let payload = payload
        .as_object()
        .ok_or_else(|| StatsError::validation("Invalid payload - must be a JSON object"))?;

    Ok(match validate_action(payload)? {
        Action::Game => ValidatedRequest::Game(GameId::new(positive_id(payload, "gameId")?)),
        Action::Boxscore => {
            ValidatedRequest::Boxscore(GameId::new(positive_id(payload, "gameId")?))
        }
        Action::Standings => ValidatedRequest::Standings(league_id(payload)?),
        Action::Team => ValidatedRequest::Team(TeamId::new(positive_id(payload, "teamId")?)),
        Action::PlayerStats => ValidatedRequest::PlayerStats {
            player_name: player_name(payload)?,
            season: season(payload)?,
        },
        Action::PlayerSeasonStats => ValidatedRequest::PlayerSeasonStats {
            player_name: player_name(payload)?,
        },
    })
}

/// Null, false, zero and empty values count as absent.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn validate_action(payload: &Map<String, Value>) -> Result<Action> {
    let action = match payload.get("action") {
        Some(v) if !is_blank(v) => v,
        _ => return Err(StatsError::validation("Missing required field: action")),
    };
    let action = action
        .as_str()
        .ok_or_else(|| StatsError::validation("Invalid action type - must be a string"))?;
    action.parse()
}

/// Integer value of a request field: JSON integers, floats (truncated
/// toward zero) and numeric strings. Anything else is `None`.
pub fn request_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            let f = n.as_f64()?;
            (f.is_finite() && f.abs() < i64::MAX as f64).then(|| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn positive_id(payload: &Map<String, Value>, field: &str) -> Result<u64> {
    let raw = payload
        .get(field)
        .ok_or_else(|| StatsError::validation(format!("Missing required field: {field}")))?;
    let id = request_int(raw).ok_or_else(|| {
        StatsError::validation(format!("Invalid {field} - must be a valid integer"))
    })?;
    if id <= 0 {
        return Err(StatsError::validation(format!(
            "{field} must be a positive integer"
        )));
    }
    Ok(id as u64)
}

fn league_id(payload: &Map<String, Value>) -> Result<LeagueId> {
    let Some(raw) = payload.get("leagueId") else {
        return Ok(LeagueId::new(DEFAULT_LEAGUE_ID));
    };
    request_int(raw)
        .map(LeagueId::new)
        .ok_or_else(|| StatsError::validation("Invalid leagueId - must be an integer"))
}

fn player_name(payload: &Map<String, Value>) -> Result<String> {
    let raw = payload
        .get("playerName")
        .ok_or_else(|| StatsError::validation("Missing required field: playerName"))?;
    let name = raw
        .as_str()
        .ok_or_else(|| StatsError::validation("playerName must be a string"))?
        .trim();

    if name.is_empty() {
        return Err(StatsError::validation("playerName cannot be empty"));
    }
    if name.chars().count() > MAX_PLAYER_NAME_CHARS {
        return Err(StatsError::validation(format!(
            "playerName is too long (max {MAX_PLAYER_NAME_CHARS} characters)"
        )));
    }
    Ok(name.to_string())
}

fn season(payload: &Map<String, Value>) -> Result<Season> {
    let Some(raw) = payload.get("season") else {
        return Ok(Season::new(DEFAULT_PLAYER_STATS_SEASON));
    };
    let season = request_int(raw)
        .map(Season::new)
        .ok_or_else(|| StatsError::validation("Invalid season - must be an integer"))?;
    if !season.is_in_request_range() {
        return Err(StatsError::validation(format!(
            "season must be between {MIN_SEASON} and {MAX_SEASON}"
        )));
    }
    Ok(season)
}
