// Edits to a league. Each edit returns a new league and leaves the original untouched.

use log::debug;
use rand::Rng;

use crate::{
    error::LeagueError,
    league::{clip_abbrev, new_team_id, settings::LeagueSettings, League, Team},
    season::{find_week_mut, schedule_generator::{generate_schedule_with_rng, ScheduleOptions}, Matchup, Week},
    types::{Score, TeamId, WeekNumber, BYE},
};

// A schedule needs at least this many teams.
pub const MIN_SCHEDULE_TEAMS: usize = 2;

// Get a mutable matchup from the given week, or the matching error.
fn matchup_mut(league: &mut League, week: WeekNumber, index: usize) -> Result<&mut Matchup, LeagueError> {
    let found = find_week_mut(&mut league.schedule, week).ok_or(LeagueError::WeekNotFound(week))?;
    found.matchups.get_mut(index).ok_or(LeagueError::MatchupNotFound { week, index })
}

fn checked_score(score: Option<Score>) -> Result<Score, LeagueError> {
    let score = score.ok_or(LeagueError::MissingScore)?;
    match score.is_finite() {
        true => Ok(score),
        false => Err(LeagueError::InvalidScore),
    }
}

// Schedule edits.
impl League {
    // Record the final score of a matchup.
    pub fn with_result_recorded(&self, week: WeekNumber, index: usize, home_score: Option<Score>, away_score: Option<Score>) -> Result<Self, LeagueError> {
        let home_score = checked_score(home_score)?;
        let away_score = checked_score(away_score)?;

        let mut league = self.clone();
        let matchup = matchup_mut(&mut league, week, index)?;
        if matchup.is_bye() {
            return Err(LeagueError::ByeMatchup);
        }

        matchup.home_score = Some(home_score);
        matchup.away_score = Some(away_score);
        matchup.completed = true;

        debug!("Recorded week {week} {} {home_score} - {away_score} {}", matchup.home_id, matchup.away_id);
        return Ok(league);
    }

    // Replace the schedule with a newly generated one and go back to week 1.
    pub fn with_generated_schedule<R: Rng + ?Sized>(&self, options: &ScheduleOptions, rng: &mut R) -> Result<Self, LeagueError> {
        if self.teams.len() < MIN_SCHEDULE_TEAMS {
            return Err(LeagueError::NotEnoughTeams { needed: MIN_SCHEDULE_TEAMS, found: self.teams.len() });
        }

        let mut league = self.clone();
        league.schedule = generate_schedule_with_rng(&self.team_ids(), options, rng)?;
        league.settings.current_week = 1;
        return Ok(league);
    }

    // Put different teams into a matchup. Team inputs are resolved like free text.
    // Any entered scores are cleared.
    pub fn with_matchup_replaced(&self, week: WeekNumber, index: usize, home_input: &str, away_input: &str) -> Result<Self, LeagueError> {
        let mut valid_ids: Vec<TeamId> = vec![BYE.to_string()];
        valid_ids.extend(self.team_ids());

        let home_id = self.resolve_team_input(home_input, &valid_ids)
            .ok_or_else(|| LeagueError::TeamNotFound(home_input.trim().to_string()))?;
        let away_id = self.resolve_team_input(away_input, &valid_ids)
            .ok_or_else(|| LeagueError::TeamNotFound(away_input.trim().to_string()))?;

        if home_id == away_id {
            return Err(LeagueError::SameTeamTwice(home_id));
        }

        let mut league = self.clone();
        let matchup = matchup_mut(&mut league, week, index)?;
        *matchup = Matchup::build(&home_id, &away_id);
        return Ok(league);
    }

    pub fn without_matchup(&self, week: WeekNumber, index: usize) -> Result<Self, LeagueError> {
        let mut league = self.clone();
        let found = find_week_mut(&mut league.schedule, week).ok_or(LeagueError::WeekNotFound(week))?;
        if index >= found.matchups.len() {
            return Err(LeagueError::MatchupNotFound { week, index });
        }

        found.matchups.remove(index);
        return Ok(league);
    }

    // Append an empty week after the last one and make it the current week.
    pub fn with_blank_week(&self) -> Result<Self, LeagueError> {
        let next = match self.schedule.iter().map(|w| w.week).max() {
            Some(last) => last.checked_add(1).ok_or(LeagueError::NoWeekAfter(last))?,
            None => 1,
        };

        let mut league = self.clone();
        league.schedule.push(Week::build(next, Vec::new()));
        league.settings.current_week = next;
        return Ok(league);
    }

    pub fn with_current_week(&self, week: WeekNumber) -> Self {
        let mut league = self.clone();
        league.settings.current_week = self.clamp_week(week);
        return league;
    }
}

// Team and settings edits.
impl League {
    // Add a team, or replace the team with the same ID.
    pub fn with_team_upserted(&self, team: Team) -> Result<Self, LeagueError> {
        let name = team.name.trim();
        if name.is_empty() {
            return Err(LeagueError::EmptyTeamName);
        }

        let team = Team {
            id: match team.id.trim() {
                "" => new_team_id(),
                id => id.to_string(),
            },
            name: name.to_string(),
            owner: team.owner.trim().to_string(),
            abbrev: clip_abbrev(&team.abbrev),
            color: team.color.trim().to_string(),
        };

        let mut league = self.clone();
        match league.teams.iter_mut().find(|t| t.id == team.id) {
            Some(existing) => *existing = team,
            None => league.teams.push(team),
        }

        return Ok(league);
    }

    // Remove a team along with every matchup it plays in.
    pub fn without_team(&self, id: &str) -> Result<Self, LeagueError> {
        if self.team_by_id(id).is_none() {
            return Err(LeagueError::TeamNotFound(id.to_string()));
        }

        let mut league = self.clone();
        league.teams.retain(|t| t.id != id);
        for week in league.schedule.iter_mut() {
            week.matchups.retain(|m| !m.involves(id));
        }

        return Ok(league);
    }

    // Apply new settings, filling blanks with defaults.
    pub fn with_settings(&self, settings: LeagueSettings) -> Self {
        let mut league = self.clone();
        league.settings = settings.normalized();

        league.settings.current_week = league.clamp_week(league.settings.current_week);
        return league;
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn team(id: &str, name: &str, abbrev: &str) -> Team {
        Team { id: id.to_string(), name: name.to_string(), abbrev: abbrev.to_string(), ..Default::default() }
    }

    fn league() -> League {
        let teams = vec![team("a", "Alpha", "ALP"), team("b", "Bravo", ""), team("c", "Charlie", ""), team("d", "Delta", "")];
        let schedule = vec![
            Week::build(1, vec![Matchup::build("a", "d"), Matchup::build("b", "c")]),
            Week::build(2, vec![Matchup::build("d", "b"), Matchup::build("c", "a")]),
        ];
        League::build(LeagueSettings::default(), teams, schedule)
    }

    #[test]
    fn recording_a_result_leaves_the_original_alone() {
        let original = league();
        let updated = original.with_result_recorded(1, 1, Some(88.5), Some(92.0)).unwrap();

        let matchup = &updated.schedule[0].matchups[1];
        assert_eq!(matchup.home_score, Some(88.5));
        assert_eq!(matchup.away_score, Some(92.0));
        assert!(matchup.completed);

        assert!(!original.schedule[0].matchups[1].completed);
        assert_eq!(original.schedule[0].matchups[1].home_score, None);

        let standings = updated.standings();
        assert_eq!(standings[0].team_id, "c");
        assert_eq!(standings[0].streak, "W1");
    }

    #[test]
    fn recording_needs_valid_scores_and_targets() {
        let league = league();
        assert!(matches!(league.with_result_recorded(1, 0, None, Some(1.0)), Err(LeagueError::MissingScore)));
        assert!(matches!(league.with_result_recorded(1, 0, Some(f64::NAN), Some(1.0)), Err(LeagueError::InvalidScore)));
        assert!(matches!(league.with_result_recorded(9, 0, Some(1.0), Some(1.0)), Err(LeagueError::WeekNotFound(9))));
        assert!(matches!(
            league.with_result_recorded(1, 5, Some(1.0), Some(1.0)),
            Err(LeagueError::MatchupNotFound { week: 1, index: 5 })
        ));

        let with_bye = league.with_matchup_replaced(1, 0, "Alpha", "bye").unwrap();
        assert!(matches!(with_bye.with_result_recorded(1, 0, Some(1.0), Some(0.0)), Err(LeagueError::ByeMatchup)));
    }

    #[test]
    fn generating_resets_the_current_week() {
        let league = league().with_current_week(2);
        assert_eq!(league.settings.current_week, 2);

        let options = ScheduleOptions::build(5, false, true);
        let generated = league.with_generated_schedule(&options, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(generated.schedule.len(), 5);
        assert_eq!(generated.settings.current_week, 1);
    }

    #[test]
    fn generating_needs_two_teams() {
        let mut league = league();
        league.teams.truncate(1);

        let result = league.with_generated_schedule(&ScheduleOptions::build(3, false, false), &mut StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(LeagueError::NotEnoughTeams { needed: 2, found: 1 })));
    }

    #[test]
    fn replacing_a_matchup() {
        let league = league();

        let swapped = league.with_matchup_replaced(1, 0, "Alpha (ALP)", "charlie").unwrap();
        let matchup = &swapped.schedule[0].matchups[0];
        assert_eq!((matchup.home_id.as_str(), matchup.away_id.as_str()), ("a", "c"));
        assert!(!matchup.completed);

        let bye = league.with_matchup_replaced(1, 0, "BYE", "delta").unwrap();
        assert!(bye.schedule[0].matchups[0].completed);

        assert!(matches!(league.with_matchup_replaced(1, 0, "alp", "Alpha"), Err(LeagueError::SameTeamTwice(id)) if id == "a"));
        assert!(matches!(league.with_matchup_replaced(1, 0, "Zulu", "Alpha"), Err(LeagueError::TeamNotFound(name)) if name == "Zulu"));
    }

    #[test]
    fn deleting_a_matchup() {
        let league = league().without_matchup(2, 0).unwrap();
        assert_eq!(league.schedule[1].matchups.len(), 1);
        assert_eq!(league.schedule[1].matchups[0].home_id, "c");

        assert!(matches!(league.without_matchup(2, 1), Err(LeagueError::MatchupNotFound { week: 2, index: 1 })));
    }

    #[test]
    fn blank_weeks_follow_the_last_week() {
        let league = league().with_blank_week().unwrap();
        assert_eq!(league.schedule.len(), 3);
        assert_eq!(league.schedule[2].week, 3);
        assert!(league.schedule[2].matchups.is_empty());
        assert_eq!(league.settings.current_week, 3);

        let empty = League::default().with_blank_week().unwrap();
        assert_eq!(empty.schedule[0].week, 1);
    }

    #[test]
    fn no_blank_week_after_the_last_possible_one() {
        let league = League::from_json(r#"{"schedule":[{"week":4294967295,"matchups":[]}]}"#).unwrap();
        assert_eq!(league.schedule[0].week, WeekNumber::MAX);

        assert!(matches!(league.with_blank_week(), Err(LeagueError::NoWeekAfter(week)) if week == WeekNumber::MAX));
        assert_eq!(league.schedule.len(), 1);
    }

    #[test]
    fn upserting_teams() {
        let league = league();

        let added = league.with_team_upserted(team("", " Echo ", "echoes")).unwrap();
        assert_eq!(added.teams.len(), 5);
        assert_eq!(added.teams[4].name, "Echo");
        assert_eq!(added.teams[4].abbrev, "echo");
        assert!(!added.teams[4].id.is_empty());

        let renamed = league.with_team_upserted(team("b", "Bravo Two", "")).unwrap();
        assert_eq!(renamed.teams.len(), 4);
        assert_eq!(renamed.teams[1].name, "Bravo Two");

        assert!(matches!(league.with_team_upserted(team("b", "  ", "")), Err(LeagueError::EmptyTeamName)));
    }

    #[test]
    fn removing_a_team_drops_its_matchups() {
        let league = league().without_team("a").unwrap();
        assert_eq!(league.teams.len(), 3);
        assert!(league.schedule.iter().flat_map(|w| w.matchups.iter()).all(|m| !m.involves("a")));
        assert_eq!(league.total_matchups(), 2);

        assert!(matches!(league.without_team("a"), Err(LeagueError::TeamNotFound(_))));
    }

    #[test]
    fn settings_fill_blanks() {
        let settings = LeagueSettings {
            name: "  ".to_string(),
            regular_weeks: 0,
            current_week: 40,
            ..Default::default()
        };

        let league = league().with_settings(settings);
        assert_eq!(league.settings.name, "Fantasy Football League");
        assert_eq!(league.settings.regular_weeks, 14);
        assert_eq!(league.settings.current_week, 2);
    }
}
