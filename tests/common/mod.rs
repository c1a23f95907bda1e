//! Shared mock-server fixtures for integration tests

#![allow(dead_code)]

use mlb_stats::{config::Settings, mlb::http::StatsClient};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

pub fn client_for(server: &MockServer) -> StatsClient {
    StatsClient::new(&Settings {
        base_url: server.uri(),
        search_timeout: Duration::from_secs(2),
    })
    .unwrap()
}

/// Current-season roster containing a batter and a pitcher
pub fn roster_response() -> Value {
    json!({
        "people": [
            {
                "id": 592450,
                "fullName": "Aaron Judge",
                "primaryPosition": {"code": "9", "abbreviation": "RF"}
            },
            {
                "id": 543037,
                "fullName": "Gerrit Cole",
                "primaryPosition": {"code": "1", "abbreviation": "P"}
            }
        ]
    })
}

pub fn judge_stats_response() -> Value {
    json!({
        "people": [{
            "id": 592450,
            "fullName": "Aaron Judge",
            "firstName": "Aaron",
            "lastName": "Judge",
            "useName": "Aaron",
            "primaryPosition": {"abbreviation": "RF"},
            "stats": [{
                "type": {"displayName": "yearByYear"},
                "group": {"displayName": "hitting"},
                "splits": [
                    {
                        "season": "2022",
                        "stat": {
                            "gamesPlayed": 157, "atBats": 570, "hits": 177, "doubles": 28,
                            "triples": 0, "homeRuns": 62, "rbi": 131, "baseOnBalls": 111,
                            "avg": ".311", "obp": ".425", "slg": ".686"
                        }
                    },
                    {
                        "season": "2017",
                        "stat": {
                            "gamesPlayed": 155, "atBats": 542, "hits": 154, "doubles": 24,
                            "triples": 3, "homeRuns": 52, "rbi": 114, "baseOnBalls": 127,
                            "avg": ".284", "obp": ".422", "slg": ".627"
                        }
                    }
                ]
            }]
        }]
    })
}

pub fn cole_stats_response() -> Value {
    json!({
        "people": [{
            "id": 543037,
            "fullName": "Gerrit Cole",
            "firstName": "Gerrit",
            "lastName": "Cole",
            "primaryPosition": {"abbreviation": "P"},
            "stats": [{
                "type": {"displayName": "yearByYear"},
                "group": {"displayName": "pitching"},
                "splits": [
                    {
                        "season": "2023",
                        "stat": {
                            "gamesPlayed": 33, "gamesStarted": 33, "wins": 15, "losses": 4,
                            "era": "2.63", "inningsPitched": "209.0", "strikeOuts": 222,
                            "baseOnBalls": 48, "hits": 157, "homeRuns": 20
                        }
                    },
                    {
                        "season": "2024",
                        "stat": {
                            "gamesPlayed": 17, "gamesStarted": 17, "wins": 8, "losses": 5,
                            "era": "3.41", "inningsPitched": "95.0", "strikeOuts": 99,
                            "baseOnBalls": 31, "hits": 77, "homeRuns": 14
                        }
                    }
                ]
            }]
        }]
    })
}

pub async fn mount_roster(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/api/v1/sports/1/players"))
        .and(query_param("gameType", "W"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_search(server: &MockServer, name: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path("/api/v1/people/search"))
        .and(query_param("names", name))
        .and(query_param("sportIds", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_player_stats(server: &MockServer, id: u64, group: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/people/{id}")))
        .and(query_param(
            "hydrate",
            format!("stats(group=[{group}],type=[yearByYear],sportId=1),currentTeam"),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
