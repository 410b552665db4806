// Round robin schedule generation using the circle method.

mod rotation;

use log::debug;
use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

use crate::{
    error::LeagueError,
    league::settings::LeagueSettings,
    season::{Matchup, Schedule, Week},
    types::{is_bye, TeamId, WeekNumber, BYE},
};

pub use rotation::rotate;

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ScheduleOptions {
    pub weeks: WeekNumber,

    // Mirror the whole cycle with home and away swapped.
    pub double: bool,

    // Randomise the roster order before pairing.
    pub shuffle: bool,
}

impl ScheduleOptions {
    pub fn build(weeks: WeekNumber, double: bool, shuffle: bool) -> Self {
        Self { weeks, double, shuffle }
    }

    // Options covering the regular season of a league.
    pub fn for_league(settings: &LeagueSettings, double: bool, shuffle: bool) -> Self {
        Self::build(settings.regular_weeks, double, shuffle)
    }
}

// Get how many rounds one full cycle has before pairings repeat.
pub fn cycle_length(team_count: usize, double: bool) -> usize {
    let padded = team_count + team_count % 2;
    let rounds = padded.saturating_sub(1);

    match double {
        true => rounds * 2,
        false => rounds,
    }
}

// Generate a weekly schedule using the thread-local random generator for shuffling.
pub fn generate_schedule(team_ids: &[TeamId], options: &ScheduleOptions) -> Result<Schedule, LeagueError> {
    let mut rng = rand::rng();
    generate_schedule_with_rng(team_ids, options, &mut rng)
}

// Generate a weekly schedule.
// Weeks beyond the cycle length repeat the cycle from the start.
pub fn generate_schedule_with_rng<R: Rng + ?Sized>(team_ids: &[TeamId], options: &ScheduleOptions, rng: &mut R) -> Result<Schedule, LeagueError> {
    if options.weeks < 1 {
        return Err(LeagueError::InvalidWeekCount(options.weeks));
    }

    if team_ids.iter().any(|id| is_bye(id)) {
        return Err(LeagueError::ReservedTeamId);
    }

    let mut entries = team_ids.to_vec();
    if options.shuffle {
        entries.shuffle(rng);
    }

    if entries.len() % 2 == 1 {
        entries.push(BYE.to_string());
    }

    let mut cycle = rotation::single_cycle(&entries);
    if options.double {
        let mirrored: Vec<Vec<Matchup>> = cycle.iter()
            .map(|round| round.iter().map(Matchup::mirrored).collect())
            .collect();

        cycle.extend(mirrored);
    }

    debug!(
        "Generating {} weeks for {} teams from a {}-round cycle",
        options.weeks, team_ids.len(), cycle.len()
    );

    let mut schedule = Vec::with_capacity(options.weeks as usize);
    for week in 1..=options.weeks {
        let matchups = match cycle.is_empty() {
            true => Vec::new(),
            false => cycle[(week as usize - 1) % cycle.len()].clone(),
        };

        schedule.push(Week::build(week, matchups));
    }

    return Ok(schedule);
}
