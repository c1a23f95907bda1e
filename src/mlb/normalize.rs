//! Season stat normalization.
//!
//! Turns the untyped year-by-year payload for a resolved player into a
//! [`PlayerSeasonReport`]: one typed record per valid season, in the
//! pitching or batting schema picked by the player's position, sorted by
//! year. Nothing untyped leaves this module.

use serde_json::{Map, Value};
use tracing::{error, info};

use crate::{
    cli::types::StatGroup,
    core::{safe_float, safe_int},
    mlb::{
        http::StatsClient,
        resolve::resolve_player,
        summary::career_summary,
        types::{
            BattingSeason, PitchingSeason, PlayerSeasonReport, PlayerStatData, ResolvedPlayer,
            SeasonRecord,
        },
    },
    Result, StatsError,
};


type StatMap = Map<String, Value>;

fn int(stats: &StatMap, key: &str) -> i64 {
    safe_int(stats.get(key), 0)
}

fn float(stats: &StatMap, key: &str) -> f64 {
    safe_float(stats.get(key), 0.0)
}

/// Walks plus hits per inning pitched; 0.0 when no innings were recorded.
pub fn whip(walks: i64, hits_allowed: i64, innings_pitched: f64) -> f64 {
    if innings_pitched > 0.0 {
        (walks + hits_allowed) as f64 / innings_pitched
    } else {
        0.0
    }
}

impl PitchingSeason {
    pub fn from_stats(position: &str, year: i64, stats: &StatMap) -> Self {
        let walks = int(stats, "baseOnBalls");
        let hits_allowed = int(stats, "hits");
        let innings_pitched = float(stats, "inningsPitched");
        Self {
            position: position.to_string(),
            year,
            wins: int(stats, "wins"),
            losses: int(stats, "losses"),
            era: float(stats, "era"),
            innings_pitched,
            strike_outs: int(stats, "strikeOuts"),
            walks,
            hits_allowed,
            home_runs_allowed: int(stats, "homeRuns"),
            games_started: int(stats, "gamesStarted"),
            games: int(stats, "gamesPlayed"),
            whip: whip(walks, hits_allowed, innings_pitched),
        }
    }
}

impl BattingSeason {
    pub fn from_stats(position: &str, year: i64, stats: &StatMap) -> Self {
        Self {
            position: position.to_string(),
            year,
            hits: int(stats, "hits"),
            doubles: int(stats, "doubles"),
            triples: int(stats, "triples"),
            home_runs: int(stats, "homeRuns"),
            rbis: int(stats, "rbi"),
            walks: int(stats, "baseOnBalls"),
            avg: float(stats, "avg"),
            obp: float(stats, "obp"),
            slg: float(stats, "slg"),
            games: int(stats, "gamesPlayed"),
            at_bats: int(stats, "atBats"),
        }
    }
}

/// Build one season record from a `{season, stats}` entry.
///
/// Returns `None` for entries that are not objects, whose season is not a
/// positive year, or whose `stats` is missing or not an object.
pub fn season_record(position: &str, group: StatGroup, entry: &Value) -> Option<SeasonRecord> {
    let entry = entry.as_object()?;
    let year = safe_int(entry.get("season"), 0);
    if year <= 0 {
        return None;
    }
    let stats = entry.get("stats")?.as_object()?;

    Some(match group {
        StatGroup::Pitching => {
            SeasonRecord::Pitcher(PitchingSeason::from_stats(position, year, stats))
        }
        StatGroup::Hitting => {
            SeasonRecord::Batter(BattingSeason::from_stats(position, year, stats))
        }
    })
}

/// Display name from the upstream first and last names, or `fallback`
/// unless both are present.
pub fn display_name(first_name: &str, last_name: &str, fallback: &str) -> String {
    let (first, last) = (first_name.trim(), last_name.trim());
    if first.is_empty() || last.is_empty() {
        fallback.to_string()
    } else {
        format!("{first} {last}")
    }
}

/// Shape fetched year-by-year data into a report.
///
/// `requested_name` is the name the caller typed; it is used in errors and
/// as the display name when the upstream does not supply one.
pub fn build_report(
    player: &ResolvedPlayer,
    requested_name: &str,
    data: &PlayerStatData,
) -> Result<PlayerSeasonReport> {
    if data.stats.is_empty() {
        return Err(StatsError::NoStatistics {
            name: requested_name.to_string(),
        });
    }

    let position = player.primary_position.as_str();
    let group = StatGroup::for_position(position);

    let mut seasons: Vec<SeasonRecord> = data
        .stats
        .iter()
        .filter_map(|entry| season_record(position, group, entry))
        .collect();

    if seasons.is_empty() {
        return Err(StatsError::NoSeasonStatistics {
            name: requested_name.to_string(),
        });
    }

    // Stable, so split seasons keep their upstream order
    seasons.sort_by_key(SeasonRecord::year);

    let career = career_summary(group, &seasons);
    Ok(PlayerSeasonReport {
        player_name: display_name(&data.first_name, &data.last_name, requested_name),
        player_id: player.id,
        position: position.to_string(),
        seasons,
        career,
    })
}

/// Fetch and normalize every season for an already-resolved player.
pub async fn normalize(
    client: &StatsClient,
    player: &ResolvedPlayer,
    requested_name: &str,
) -> Result<PlayerSeasonReport> {
    let group = StatGroup::for_position(&player.primary_position);
    let data = client.get_player_stat_data(player.id, group).await?;
    build_report(player, requested_name, &data)
}

/// Full name-to-report pipeline used by the `player_season_stats` action.
///
/// Lookup misses come back as their own not-found errors. Any other failure
/// is logged here and replaced by [`StatsError::RetrievalFailed`] so no
/// upstream detail reaches the caller.
pub async fn season_report(client: &StatsClient, name: &str) -> Result<PlayerSeasonReport> {
    let outcome = async {
        let player = resolve_player(client, name).await?;
        normalize(client, &player, name).await
    }
    .await;

    match outcome {
        Ok(report) => {
            info!(
                player = %report.player_name,
                seasons = report.seasons.len(),
                "built season report"
            );
            Ok(report)
        }
        Err(e) if e.is_not_found() => Err(e),
        Err(e) => {
            error!(error = %e, player = name, "error retrieving player season stats");
            Err(StatsError::RetrievalFailed {
                name: name.to_string(),
            })
        }
    }
}
