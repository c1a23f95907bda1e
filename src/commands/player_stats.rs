//! Name-based player actions.

use serde_json::{json, Value};

use crate::{
    cli::types::{Season, StatGroup},
    core::safe_int,
    mlb::{
        http::StatsClient,
        normalize::season_report,
        resolve::resolve_player,
        types::PlayerStatData,
    },
    Result, StatsError,
};

/// Raw stat mapping of the first entry for `season`, if any.
pub fn select_season_stats(data: &PlayerStatData, season: Season) -> Option<Value> {
    data.stats
        .iter()
        .filter(|entry| entry.is_object())
        .find(|entry| safe_int(entry.get("season"), 0) == season.as_i64())
        .map(|entry| entry.get("stats").cloned().unwrap_or_else(|| json!({})))
}

/// `player_stats`: one season's upstream stat mapping, returned verbatim.
///
/// Resolution misses become [`StatsError::PlayerNotFound`]. Upstream
/// failures while fetching stats are not caught here.
pub async fn handle_player_stats(
    client: &StatsClient,
    player_name: &str,
    season: Season,
) -> Result<Value> {
    let player = resolve_player(client, player_name).await?;
    let group = StatGroup::for_position(&player.primary_position);
    let data = client.get_player_stat_data(player.id, group).await?;

    select_season_stats(&data, season).ok_or_else(|| StatsError::NoSeasonStats {
        stat_type: group.to_string(),
        name: player_name.to_string(),
        season: season.as_i64(),
    })
}

/// `player_season_stats`: the full normalized season report.
pub async fn handle_player_season_stats(client: &StatsClient, player_name: &str) -> Result<Value> {
    let report = season_report(client, player_name).await?;
    Ok(serde_json::to_value(report)?)
}
