// Aggregation of decided matchups into ranked team records.

use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    league::League,
    season::{ranking::rank_records, streak::{collapse_streak, ResultToken}, team::TeamRecord},
};

// Build one record per registered team and rank them.
// Only decided matchups between two registered teams count. Byes never do.
pub fn compute_standings(league: &League) -> Vec<TeamRecord> {
    let mut records: Vec<TeamRecord> = Vec::with_capacity(league.teams.len());
    let mut index: HashMap<&str, usize> = HashMap::new();

    for team in league.teams.iter() {
        if index.contains_key(team.id.as_str()) { continue; }
        index.insert(team.id.as_str(), records.len());
        records.push(TeamRecord::build(&team.id));
    }

    // Results in schedule order, used for the streaks.
    let mut results: Vec<Vec<ResultToken>> = vec![Vec::new(); records.len()];
    let mut counted = 0;

    for week in league.schedule.iter() {
        for matchup in week.matchups.iter() {
            if matchup.is_bye() { continue; }
            let Some((home_score, away_score)) = matchup.decided_scores() else { continue };

            let (Some(&home), Some(&away)) = (index.get(matchup.home_id.as_str()), index.get(matchup.away_id.as_str())) else {
                trace!("Skipping week {} matchup {} vs {}: unregistered team", week.week, matchup.home_id, matchup.away_id);
                continue;
            };

            let home_result = records[home].update(home_score, away_score);
            let away_result = records[away].update(away_score, home_score);
            results[home].push(home_result);
            results[away].push(away_result);
            counted += 1;
        }
    }

    for (record, tokens) in records.iter_mut().zip(results.iter()) {
        record.streak = collapse_streak(tokens);
    }

    rank_records(&mut records, league);

    debug!(
        "Ranked {} teams from {counted} decided matchups using the {} tiebreaker",
        records.len(), league.settings.tiebreaker.as_str()
    );
    return records;
}
