// A season is the weekly schedule of matchups and everything derived from it.
pub mod head_to_head;
pub mod ranking;
pub mod schedule_generator;
pub mod standings;
pub mod streak;
pub mod team;

use serde::{Deserialize, Serialize};

use crate::types::{is_bye, Score, TeamId, WeekNumber};

pub type Schedule = Vec<Week>;

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Matchup {
    pub home_id: TeamId,
    pub away_id: TeamId,
    pub home_score: Option<Score>,
    pub away_score: Option<Score>,

    // Bye pairings are always completed.
    pub completed: bool,
}

// Basics.
impl Matchup {
    // Build an unplayed matchup between two teams.
    pub fn build(home_id: &str, away_id: &str) -> Self {
        Self {
            home_id: home_id.to_string(),
            away_id: away_id.to_string(),
            home_score: None,
            away_score: None,
            completed: is_bye(home_id) || is_bye(away_id),
        }
    }

    // Get a fresh copy with home and away swapped and no scores.
    pub fn mirrored(&self) -> Self {
        Self::build(&self.away_id, &self.home_id)
    }
}

// Functional
impl Matchup {
    pub fn is_bye(&self) -> bool {
        is_bye(&self.home_id) || is_bye(&self.away_id)
    }

    pub fn involves(&self, team_id: &str) -> bool {
        self.home_id == team_id || self.away_id == team_id
    }

    // Check if the matchup is strictly between the two teams, in either direction.
    pub fn is_between(&self, a: &str, b: &str) -> bool {
        (self.home_id == a && self.away_id == b) || (self.home_id == b && self.away_id == a)
    }

    // Get both scores if the matchup has been played to the end.
    pub fn decided_scores(&self) -> Option<(Score, Score)> {
        if !self.completed { return None; }
        match (self.home_score, self.away_score) {
            (Some(home), Some(away)) => Some((home, away)),
            _ => None,
        }
    }

    pub fn is_decided(&self) -> bool {
        self.decided_scores().is_some()
    }

    // Get the score of the given team and its opponent, if the team plays in a decided matchup.
    pub fn scores_for(&self, team_id: &str) -> Option<(Score, Score)> {
        let (home, away) = self.decided_scores()?;
        if self.home_id == team_id {
            return Some((home, away));
        }
        if self.away_id == team_id {
            return Some((away, home));
        }
        return None;
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, PartialEq)]
pub struct Week {
    pub week: WeekNumber,
    pub matchups: Vec<Matchup>,
}

impl Week {
    pub fn build(week: WeekNumber, matchups: Vec<Matchup>) -> Self {
        Self { week, matchups }
    }

    // Get the matchups with two real teams.
    pub fn real_matchups(&self) -> impl Iterator<Item = &Matchup> {
        self.matchups.iter().filter(|m| !m.is_bye())
    }
}

// Find a week by its number.
pub fn find_week(schedule: &[Week], week: WeekNumber) -> Option<&Week> {
    schedule.iter().find(|w| w.week == week)
}

// Find a week by its number for editing.
pub fn find_week_mut(schedule: &mut [Week], week: WeekNumber) -> Option<&mut Week> {
    schedule.iter_mut().find(|w| w.week == week)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BYE;

    #[test]
    fn bye_matchups_start_completed() {
        let matchup = Matchup::build("a", BYE);
        assert!(matchup.completed);
        assert!(matchup.is_bye());
        assert!(!matchup.is_decided());

        let mirrored = matchup.mirrored();
        assert_eq!(mirrored.home_id, BYE);
        assert!(mirrored.completed);
    }

    #[test]
    fn decided_needs_completion_and_both_scores() {
        let mut matchup = Matchup::build("a", "b");
        assert!(!matchup.completed);

        matchup.home_score = Some(101.5);
        matchup.away_score = Some(99.0);
        assert!(!matchup.is_decided());

        matchup.completed = true;
        assert_eq!(matchup.decided_scores(), Some((101.5, 99.0)));
        assert_eq!(matchup.scores_for("b"), Some((99.0, 101.5)));
        assert_eq!(matchup.scores_for("c"), None);

        matchup.away_score = None;
        assert!(!matchup.is_decided());
    }

    #[test]
    fn matchup_serialises_with_camel_case_keys() {
        let json = serde_json::to_value(Matchup::build("a", "b")).unwrap();
        assert_eq!(json["homeId"], "a");
        assert_eq!(json["awayId"], "b");
        assert!(json["homeScore"].is_null());
        assert_eq!(json["completed"], false);
    }
}
