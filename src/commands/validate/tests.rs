//! Unit tests for request validation

use super::*;
use serde_json::json;

fn error_message(payload: Value) -> String {
    validate_request(&payload).unwrap_err().to_string()
}

#[cfg(test)]
mod action_tests {
    use super::*;

    #[test]
    fn test_non_object_payload() {
        assert_eq!(error_message(json!([1, 2])), "Invalid payload - must be a JSON object");
        assert_eq!(error_message(json!("team")), "Invalid payload - must be a JSON object");
        assert_eq!(error_message(Value::Null), "Invalid payload - must be a JSON object");
    }

    #[test]
    fn test_missing_action() {
        assert_eq!(error_message(json!({})), "Missing required field: action");
        assert_eq!(error_message(json!({"action": ""})), "Missing required field: action");
        assert_eq!(error_message(json!({"action": null})), "Missing required field: action");
        assert_eq!(error_message(json!({"action": 0})), "Missing required field: action");
    }

    #[test]
    fn test_action_must_be_string() {
        assert_eq!(
            error_message(json!({"action": 5})),
            "Invalid action type - must be a string"
        );
        assert_eq!(
            error_message(json!({"action": ["team"]})),
            "Invalid action type - must be a string"
        );
    }

    #[test]
    fn test_unknown_action_lists_valid_ones() {
        assert_eq!(
            error_message(json!({"action": "schedule"})),
            "Invalid action 'schedule'. Valid actions: game, boxscore, standings, team, player_stats, player_season_stats"
        );
    }

    #[test]
    fn test_action_is_case_sensitive() {
        assert!(error_message(json!({"action": "Team", "teamId": 147})).starts_with("Invalid action 'Team'"));
    }

    #[test]
    fn test_action_round_trip() {
        for action in Action::ALL {
            assert_eq!(action.as_str().parse::<Action>().unwrap(), action);
        }
    }
}

#[cfg(test)]
mod id_tests {
    use super::*;

    #[test]
    fn test_team_id_valid() {
        let request = validate_request(&json!({"action": "team", "teamId": 147})).unwrap();
        assert_eq!(request, ValidatedRequest::Team(TeamId::new(147)));
        assert_eq!(request.action(), Action::Team);
    }

    #[test]
    fn test_team_id_negative() {
        assert_eq!(
            error_message(json!({"action": "team", "teamId": -1})),
            "teamId must be a positive integer"
        );
        assert_eq!(
            error_message(json!({"action": "team", "teamId": 0})),
            "teamId must be a positive integer"
        );
    }

    #[test]
    fn test_team_id_missing_or_invalid() {
        assert_eq!(
            error_message(json!({"action": "team"})),
            "Missing required field: teamId"
        );
        assert_eq!(
            error_message(json!({"action": "team", "teamId": "yankees"})),
            "Invalid teamId - must be a valid integer"
        );
        assert_eq!(
            error_message(json!({"action": "team", "teamId": null})),
            "Invalid teamId - must be a valid integer"
        );
        assert_eq!(
            error_message(json!({"action": "team", "teamId": true})),
            "Invalid teamId - must be a valid integer"
        );
    }

    #[test]
    fn test_game_id_accepts_numeric_strings_and_floats() {
        assert_eq!(
            validate_request(&json!({"action": "game", "gameId": "716463"})).unwrap(),
            ValidatedRequest::Game(GameId::new(716463))
        );
        assert_eq!(
            validate_request(&json!({"action": "boxscore", "gameId": 716463.9})).unwrap(),
            ValidatedRequest::Boxscore(GameId::new(716463))
        );
    }

    #[test]
    fn test_game_id_errors() {
        assert_eq!(
            error_message(json!({"action": "boxscore"})),
            "Missing required field: gameId"
        );
        assert_eq!(
            error_message(json!({"action": "game", "gameId": "12.5"})),
            "Invalid gameId - must be a valid integer"
        );
        assert_eq!(
            error_message(json!({"action": "game", "gameId": 0.5})),
            "gameId must be a positive integer"
        );
    }

    #[test]
    fn test_league_id_defaults_and_validation() {
        assert_eq!(
            validate_request(&json!({"action": "standings"})).unwrap(),
            ValidatedRequest::Standings(LeagueId::new(103))
        );
        assert_eq!(
            validate_request(&json!({"action": "standings", "leagueId": "104"})).unwrap(),
            ValidatedRequest::Standings(LeagueId::new(104))
        );
        assert_eq!(
            error_message(json!({"action": "standings", "leagueId": "AL"})),
            "Invalid leagueId - must be an integer"
        );
        assert_eq!(
            error_message(json!({"action": "standings", "leagueId": null})),
            "Invalid leagueId - must be an integer"
        );
    }

    #[test]
    fn test_request_int() {
        assert_eq!(request_int(&json!(42)), Some(42));
        assert_eq!(request_int(&json!(-3)), Some(-3));
        assert_eq!(request_int(&json!(3.7)), Some(3));
        assert_eq!(request_int(&json!(" 17 ")), Some(17));
        assert_eq!(request_int(&json!("1e3")), None);
        assert_eq!(request_int(&json!(1e300)), None);
        assert_eq!(request_int(&json!({})), None);
    }
}

#[cfg(test)]
mod player_tests {
    use super::*;

    #[test]
    fn test_player_stats_defaults_season() {
        let request =
            validate_request(&json!({"action": "player_stats", "playerName": "  Aaron Judge "}))
                .unwrap();
        assert_eq!(
            request,
            ValidatedRequest::PlayerStats {
                player_name: "Aaron Judge".to_string(),
                season: Season::new(2024),
            }
        );
    }

    #[test]
    fn test_player_stats_season_range() {
        assert_eq!(
            error_message(json!({"action": "player_stats", "playerName": "A", "season": 1899})),
            "season must be between 1900 and 2100"
        );
        assert_eq!(
            error_message(json!({"action": "player_stats", "playerName": "A", "season": "2101"})),
            "season must be between 1900 and 2100"
        );
        assert_eq!(
            error_message(json!({"action": "player_stats", "playerName": "A", "season": "last"})),
            "Invalid season - must be an integer"
        );
        assert!(validate_request(
            &json!({"action": "player_stats", "playerName": "A", "season": 1900})
        )
        .is_ok());
    }

    #[test]
    fn test_player_name_checked_before_season() {
        assert_eq!(
            error_message(json!({"action": "player_stats", "season": 3000})),
            "Missing required field: playerName"
        );
    }

    #[test]
    fn test_player_name_errors() {
        assert_eq!(
            error_message(json!({"action": "player_season_stats"})),
            "Missing required field: playerName"
        );
        assert_eq!(
            error_message(json!({"action": "player_season_stats", "playerName": 99})),
            "playerName must be a string"
        );
        assert_eq!(
            error_message(json!({"action": "player_season_stats", "playerName": "   "})),
            "playerName cannot be empty"
        );
        assert_eq!(
            error_message(json!({"action": "player_season_stats", "playerName": "x".repeat(101)})),
            "playerName is too long (max 100 characters)"
        );
    }

    #[test]
    fn test_player_name_length_counts_characters() {
        let name = "é".repeat(100);
        let request =
            validate_request(&json!({"action": "player_season_stats", "playerName": name}));
        assert!(request.is_ok());
    }

    #[test]
    fn test_player_season_stats_ignores_season() {
        let request = validate_request(
            &json!({"action": "player_season_stats", "playerName": "Gerrit Cole", "season": "x"}),
        )
        .unwrap();
        assert_eq!(
            request,
            ValidatedRequest::PlayerSeasonStats {
                player_name: "Gerrit Cole".to_string()
            }
        );
    }
}
