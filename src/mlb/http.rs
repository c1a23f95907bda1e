//! HTTP client for the MLB stats service.
//!
//! Every call is a single blocking-style request with no retries. Payloads
//! for pass-through lookups are returned untouched; the roster, search and
//! year-by-year endpoints are decoded just far enough for the resolver and
//! normalizer.

use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

use crate::{
    cli::types::{GameId, LeagueId, PlayerId, Season, StatGroup, TeamId},
    config::Settings,
    core::build_http_client,
    mlb::types::{PeopleEnvelope, PersonRecord, PlayerStatData},
    Result, StatsError,
};


/// Sport id of Major League Baseball on the stats service.
pub const MLB_SPORT_ID: u32 = 1;

#[derive(Debug, Clone)]
pub struct StatsClient {
    http: Client,
    base_url: String,
    search_timeout: Duration,
}

impl StatsClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            http: build_http_client()?,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            search_timeout: settings.search_timeout,
        })
    }

    async fn get_json(&self, path: &str, params: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?params, "GET");

        let v = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        Ok(v)
    }

    /// Live feed for one game.
    pub async fn get_game(&self, game_id: GameId) -> Result<Value> {
        self.get_json(&format!("/api/v1.1/game/{game_id}/feed/live"), &[])
            .await
    }

    pub async fn get_boxscore(&self, game_id: GameId) -> Result<Value> {
        self.get_json(&format!("/api/v1/game/{game_id}/boxscore"), &[])
            .await
    }

    pub async fn get_team(&self, team_id: TeamId) -> Result<Value> {
        self.get_json(&format!("/api/v1/teams/{team_id}"), &[]).await
    }

    /// Regular-season standings for a league, with division info hydrated.
    pub async fn get_standings(&self, league_id: LeagueId, season: Season) -> Result<Value> {
        let params = [
            ("leagueId", league_id.to_string()),
            ("season", season.to_string()),
            ("standingsTypes", "regularSeason".to_string()),
            ("hydrate", "team(division)".to_string()),
        ];
        self.get_json("/api/v1/standings", &params).await
    }

    /// Every player rostered in MLB for a season and game type.
    pub async fn get_sports_players(
        &self,
        season: Season,
        game_type: &str,
    ) -> Result<Vec<Value>> {
        let params = [
            ("season", season.to_string()),
            ("gameType", game_type.to_string()),
        ];
        let raw = self
            .get_json(&format!("/api/v1/sports/{MLB_SPORT_ID}/players"), &params)
            .await?;
        let envelope: PeopleEnvelope = serde_json::from_value(raw)?;
        Ok(envelope.people)
    }

    /// First hit of a free-text people search, bounded by the configured
    /// search timeout. Candidates after the first are never decoded.
    ///
    /// The URL is assembled here rather than through [`Self::get_json`] so the
    /// name is percent-encoded exactly once and the timeout applies to this
    /// request only.
    pub async fn search_person(&self, name: &str) -> Result<Option<PersonRecord>> {
        let mut url = Url::parse(&format!("{}/api/v1/people/search", self.base_url)).map_err(
            |e| StatsError::Config {
                message: format!("invalid base URL '{}': {e}", self.base_url),
            },
        )?;
        url.query_pairs_mut()
            .append_pair("names", name)
            .append_pair("sportIds", &MLB_SPORT_ID.to_string());
        debug!(%url, timeout = ?self.search_timeout, "people search");

        let envelope = self
            .http
            .get(url)
            .timeout(self.search_timeout)
            .send()
            .await?
            .error_for_status()?
            .json::<PeopleEnvelope>()
            .await?;
        let first = envelope
            .people
            .first()
            .map(PersonRecord::deserialize)
            .transpose()?;
        Ok(first)
    }

    /// Year-by-year statistics for a player in one stat group.
    pub async fn get_player_stat_data(
        &self,
        player_id: PlayerId,
        group: StatGroup,
    ) -> Result<PlayerStatData> {
        let hydrate = format!(
            "stats(group=[{group}],type=[yearByYear],sportId={MLB_SPORT_ID}),currentTeam"
        );
        let raw = self
            .get_json(&format!("/api/v1/people/{player_id}"), &[("hydrate", hydrate)])
            .await?;
        flatten_player_stats(&raw)
    }
}

fn str_field(v: &Value, key: &str) -> Option<String> {
    v.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Flatten a hydrated `/people/{id}` response into [`PlayerStatData`].
///
/// Splits that are not objects are carried through unchanged so the
/// normalizer can decide what to do with them.
pub fn flatten_player_stats(raw: &Value) -> Result<PlayerStatData> {
    let person = raw
        .get("people")
        .and_then(Value::as_array)
        .and_then(|people| people.first())
        .ok_or_else(|| StatsError::UnexpectedShape {
            context: "person lookup returned no people".to_string(),
        })?;

    let id = person
        .get("id")
        .and_then(Value::as_u64)
        .map(PlayerId::new)
        .ok_or_else(|| StatsError::UnexpectedShape {
            context: "person record has no numeric id".to_string(),
        })?;

    let mut stats = Vec::new();
    for block in person
        .get("stats")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
    {
        let stat_type = block.pointer("/type/displayName").cloned().unwrap_or(Value::Null);
        let group = block.pointer("/group/displayName").cloned().unwrap_or(Value::Null);
        for split in block
            .get("splits")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
        {
            if !split.is_object() {
                stats.push(split.clone());
                continue;
            }
            stats.push(json!({
                "type": stat_type,
                "group": group,
                "season": split.get("season").cloned().unwrap_or(Value::Null),
                "stats": split.get("stat").cloned().unwrap_or(Value::Null),
            }));
        }
    }

    Ok(PlayerStatData {
        id,
        first_name: str_field(person, "useName")
            .or_else(|| str_field(person, "firstName"))
            .unwrap_or_default(),
        last_name: str_field(person, "lastName").unwrap_or_default(),
        stats,
    })
}
