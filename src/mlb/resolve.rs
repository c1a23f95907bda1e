//! Player-name resolution.
//!
//! A typed name becomes a [`ResolvedPlayer`] through an ordered list of
//! lookups. The roster scan is fast and exact but only knows players on a
//! current roster; the people search reaches retired and inactive players
//! and takes its first hit without disambiguating. The first lookup to
//! produce a player wins. A lookup that fails is logged and skipped; it is
//! never reported to the caller.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    cli::types::Season,
    mlb::{
        http::StatsClient,
        types::{PersonRecord, ResolvedPlayer},
    },
    Result, StatsError,
};

/// Game type used for the roster listing.
pub const ROSTER_GAME_TYPE: &str = "W";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupTier {
    /// Case-insensitive exact match against this season's rostered players
    Roster,
    /// Free-text search; the first result is taken as-is
    Search,
}

impl LookupTier {
    pub const CASCADE: [LookupTier; 2] = [LookupTier::Roster, LookupTier::Search];

    async fn attempt(self, client: &StatsClient, name: &str) -> Result<Option<ResolvedPlayer>> {
        match self {
            LookupTier::Roster => {
                let people = client
                    .get_sports_players(Season::current(), ROSTER_GAME_TYPE)
                    .await?;
                find_on_roster(&people, name)
            }
            LookupTier::Search => {
                let person = client.search_person(name).await?;
                Ok(person.map(PersonRecord::into_resolved))
            }
        }
    }
}

/// First roster entry whose full name equals `name`, ignoring case.
///
/// Entries are decoded one at a time while scanning. A malformed entry
/// fails the scan only if it is reached before a match.
pub fn find_on_roster(people: &[Value], name: &str) -> Result<Option<ResolvedPlayer>> {
    let wanted = name.to_lowercase();
    for entry in people {
        let person = PersonRecord::deserialize(entry)?;
        if person.full_name.to_lowercase() == wanted {
            return Ok(Some(person.into_resolved()));
        }
    }
    Ok(None)
}

/// Resolve a free-text player name, or fail with [`StatsError::PlayerNotFound`].
pub async fn resolve_player(client: &StatsClient, name: &str) -> Result<ResolvedPlayer> {
    for tier in LookupTier::CASCADE {
        match tier.attempt(client, name).await {
            Ok(Some(player)) => {
                debug!(?tier, id = %player.id, position = %player.primary_position, "resolved player");
                return Ok(player);
            }
            Ok(None) => debug!(?tier, player = name, "no match"),
            Err(e) if tier == LookupTier::Roster => {
                debug!(error = %e, "roster lookup failed, trying people search")
            }
            Err(e) => warn!(error = %e, ?tier, "people search failed"),
        }
    }

    Err(StatsError::PlayerNotFound {
        name: name.to_string(),
    })
}
