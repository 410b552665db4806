// Functions for ranking team records within a season.
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{
    league::{settings::Tiebreaker, League},
    season::{head_to_head::head_to_head, team::TeamRecord},
};

// What a ranking compares, in order of priority.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Eq, Hash, PartialEq)]
#[derive(Clone, Copy)]
pub enum RankCriteria {
    Wins,
    Losses,         // Lower is better.
    Ties,
    PointsFor,
    PointsAgainst,  // Lower is better.
    HeadToHead,
    PointDifferential,

    // Last resort so the order is always deterministic.
    TeamName,
}

type CmpFunc = fn (&TeamRecord, &TeamRecord, &League) -> Ordering;

// Compare functions here.

fn compare_wins(a: &TeamRecord, b: &TeamRecord, _league: &League) -> Ordering {
    b.wins.cmp(&a.wins)
}

fn compare_losses(a: &TeamRecord, b: &TeamRecord, _league: &League) -> Ordering {
    a.losses.cmp(&b.losses)
}

fn compare_ties(a: &TeamRecord, b: &TeamRecord, _league: &League) -> Ordering {
    b.ties.cmp(&a.ties)
}

fn compare_points_for(a: &TeamRecord, b: &TeamRecord, _league: &League) -> Ordering {
    b.points_for.total_cmp(&a.points_for)
}

fn compare_points_against(a: &TeamRecord, b: &TeamRecord, _league: &League) -> Ordering {
    a.points_against.total_cmp(&b.points_against)
}

fn compare_head_to_head(a: &TeamRecord, b: &TeamRecord, league: &League) -> Ordering {
    head_to_head(&league.schedule, &a.team_id, &b.team_id).as_ordering()
}

fn compare_point_differential(a: &TeamRecord, b: &TeamRecord, _league: &League) -> Ordering {
    b.point_differential().total_cmp(&a.point_differential())
}

// Case-insensitive. Byte order only settles names that differ in case alone.
fn compare_team_name(a: &TeamRecord, b: &TeamRecord, league: &League) -> Ordering {
    let a_name: &str = league.team_name(&a.team_id);
    let b_name: &str = league.team_name(&b.team_id);

    return a_name.to_lowercase().cmp(&b_name.to_lowercase()).then_with(|| a_name.cmp(b_name));
}

// Get the compare function of a criterion.
pub fn get_sort_function(criteria: &RankCriteria) -> CmpFunc {
    match criteria {
        RankCriteria::Wins => compare_wins,
        RankCriteria::Losses => compare_losses,
        RankCriteria::Ties => compare_ties,
        RankCriteria::PointsFor => compare_points_for,
        RankCriteria::PointsAgainst => compare_points_against,
        RankCriteria::HeadToHead => compare_head_to_head,
        RankCriteria::PointDifferential => compare_point_differential,
        RankCriteria::TeamName => compare_team_name,
    }
}

impl Tiebreaker {
    // Get the full list of ranking criteria for this tiebreaker.
    pub fn rank_criteria(&self) -> Vec<RankCriteria> {
        let mut criteria = vec![RankCriteria::Wins, RankCriteria::Losses, RankCriteria::Ties];

        match self {
            Tiebreaker::Pf => criteria.push(RankCriteria::PointsFor),
            Tiebreaker::Pa => criteria.push(RankCriteria::PointsAgainst),
            Tiebreaker::H2h => {
                criteria.push(RankCriteria::HeadToHead);
                criteria.push(RankCriteria::PointsFor);
            }
        }

        criteria.push(RankCriteria::PointDifferential);
        criteria.push(RankCriteria::TeamName);
        return criteria;
    }
}

// Compare two records criterion by criterion until one separates them.
pub fn compare_records(a: &TeamRecord, b: &TeamRecord, league: &League, criteria: &[RankCriteria]) -> Ordering {
    for criterion in criteria {
        let ordering = get_sort_function(criterion)(a, b, league);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    return Ordering::Equal;
}

// Sort the records from best to worst with the league's tiebreaker.
// Stable insertion sort: head-to-head results can be circular, which slice sorting does not accept.
pub fn rank_records(records: &mut [TeamRecord], league: &League) {
    let criteria = league.settings.tiebreaker.rank_criteria();

    for i in 1..records.len() {
        let mut j = i;
        while j > 0 && compare_records(&records[j - 1], &records[j], league, &criteria) == Ordering::Greater {
            records.swap(j - 1, j);
            j -= 1;
        }
    }
}
