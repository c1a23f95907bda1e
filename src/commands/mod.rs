//! Request dispatch.
//!
//! One raw request in, one [`Response`] out. Parsing and validation
//! failures short-circuit before any upstream call and exit non-zero.
//! Dispatched requests exit zero, including lookups that found nothing;
//! anything else that escapes a handler is logged and answered with a
//! generic message and a non-zero exit.

pub mod player_stats;
pub mod validate;

use serde_json::{json, Value};
use std::io::Read;
use std::path::Path;
use tracing::{error, info};

use crate::{
    cli::types::Season,
    error::GENERIC_ERROR_MESSAGE,
    mlb::http::StatsClient,
    Result, StatsError,
};

use player_stats::{handle_player_season_stats, handle_player_stats};
use validate::{validate_request, ValidatedRequest};

/// Process exit status for a request that was dispatched.
pub const EXIT_SUCCESS: u8 = 0;
/// Process exit status for invalid input or an unexpected failure.
pub const EXIT_FAILURE: u8 = 1;

/// Exactly one JSON object to emit, and the status to exit with.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub body: Value,
    pub exit_code: u8,
}

impl Response {
    pub fn success(body: Value) -> Self {
        Self {
            body,
            exit_code: EXIT_SUCCESS,
        }
    }

    pub fn error(message: impl Into<String>, exit_code: u8) -> Self {
        Self {
            body: json!({ "error": message.into() }),
            exit_code,
        }
    }

    /// The catch-all answer for failures the caller should not see details of.
    pub fn unexpected() -> Self {
        Self::error(GENERIC_ERROR_MESSAGE, EXIT_FAILURE)
    }
}

/// Read the raw request from a file, or from stdin when no path is given.
pub fn read_request(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Run a validated request against the stats service.
pub async fn dispatch(client: &StatsClient, request: ValidatedRequest) -> Result<Value> {
    info!(action = %request.action(), "dispatching request");

    match request {
        ValidatedRequest::Game(game_id) => client.get_game(game_id).await,
        ValidatedRequest::Boxscore(game_id) => client.get_boxscore(game_id).await,
        ValidatedRequest::Team(team_id) => client.get_team(team_id).await,
        ValidatedRequest::Standings(league_id) => {
            client.get_standings(league_id, Season::current()).await
        }
        ValidatedRequest::PlayerStats {
            player_name,
            season,
        } => handle_player_stats(client, &player_name, season).await,
        ValidatedRequest::PlayerSeasonStats { player_name } => {
            handle_player_season_stats(client, &player_name).await
        }
    }
}

/// Parse, validate and dispatch one raw request.
pub async fn handle_request(client: &StatsClient, raw: &str) -> Response {
    let payload: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(_) => return Response::error(StatsError::InvalidJson.to_string(), EXIT_FAILURE),
    };

    let request = match validate_request(&payload) {
        Ok(r) => r,
        Err(e) => return Response::error(e.to_string(), EXIT_FAILURE),
    };

    match dispatch(client, request).await {
        Ok(body) => Response::success(body),
        Err(e) if e.is_not_found() => Response::error(e.public_message(), EXIT_SUCCESS),
        Err(e) => {
            error!(error = %e, "unexpected error");
            Response::unexpected()
        }
    }
}
