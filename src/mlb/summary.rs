//! Career totals over a player's normalized seasons.

use crate::{
    cli::types::StatGroup,
    mlb::types::{BattingCareer, CareerSummary, PitchingCareer, SeasonRecord},
};

/// Convert box-score innings (`.1` = one out, `.2` = two outs) to real innings.
pub fn real_innings(innings_pitched: f64) -> f64 {
    let whole = innings_pitched.floor();
    let outs = ((innings_pitched - whole) * 10.0).round();
    whole + outs / 3.0
}

pub fn career_summary(group: StatGroup, seasons: &[SeasonRecord]) -> CareerSummary {
    match group {
        StatGroup::Pitching => CareerSummary::Pitching(pitching_career(seasons)),
        StatGroup::Hitting => CareerSummary::Batting(batting_career(seasons)),
    }
}

fn pitching_career(seasons: &[SeasonRecord]) -> PitchingCareer {
    let mut career = PitchingCareer {
        games: 0,
        wins: 0,
        losses: 0,
        strike_outs: 0,
        walks: 0,
        hits_allowed: 0,
        innings_pitched: 0.0,
        era: 0.0,
        whip: 0.0,
    };
    // Sum of ERA weighted by real innings
    let mut weighted_era = 0.0;

    for season in seasons {
        let SeasonRecord::Pitcher(s) = season else {
            continue;
        };
        career.games += s.games;
        career.wins += s.wins;
        career.losses += s.losses;
        career.strike_outs += s.strike_outs;
        career.walks += s.walks;
        career.hits_allowed += s.hits_allowed;

        let innings = real_innings(s.innings_pitched);
        career.innings_pitched += innings;
        if innings > 0.0 {
            weighted_era += s.era * innings;
        }
    }

    if career.innings_pitched > 0.0 {
        career.era = weighted_era / career.innings_pitched;
        career.whip = (career.walks + career.hits_allowed) as f64 / career.innings_pitched;
    }
    career
}

fn batting_career(seasons: &[SeasonRecord]) -> BattingCareer {
    let mut career = BattingCareer {
        games: 0,
        hits: 0,
        home_runs: 0,
        rbis: 0,
        at_bats: 0,
        avg: 0.0,
    };

    for season in seasons {
        let SeasonRecord::Batter(s) = season else {
            continue;
        };
        career.games += s.games;
        career.hits += s.hits;
        career.home_runs += s.home_runs;
        career.rbis += s.rbis;
        career.at_bats += s.at_bats;
    }

    if career.at_bats > 0 {
        career.avg = career.hits as f64 / career.at_bats as f64;
    }
    career
}
