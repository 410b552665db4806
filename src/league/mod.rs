// The league document: settings, the team registry and the season schedule.
pub mod editing;
pub mod settings;
pub mod validation;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::LeagueError,
    league::settings::LeagueSettings,
    season::{standings, team::TeamRecord, Schedule},
    types::{is_bye, TeamId, WeekNumber, BYE},
};

// Team abbreviations are cut to this many characters.
pub const ABBREV_LENGTH: usize = 4;

#[derive(Debug, Serialize, Deserialize)]
#[derive(Default, Clone, PartialEq)]
#[serde(default)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub owner: String,
    pub abbrev: String,
    pub color: String,
}

// Basics.
impl Team {
    // Build a team with a freshly generated ID.
    pub fn build(name: &str) -> Self {
        Self {
            id: new_team_id(),
            name: name.trim().to_string(),
            ..Default::default()
        }
    }

    // Display label, with the abbreviation appended if there is one.
    pub fn label(&self) -> String {
        match self.abbrev.is_empty() {
            true => self.name.clone(),
            false => format!("{} ({})", self.name, self.abbrev.to_uppercase()),
        }
    }
}

// Generate a unique team ID.
pub fn new_team_id() -> TeamId {
    Uuid::new_v4().to_string()
}

// Cut an abbreviation to its maximum length.
pub fn clip_abbrev(abbrev: &str) -> String {
    abbrev.trim().chars().take(ABBREV_LENGTH).collect()
}

#[derive(Debug, Serialize, Deserialize)]
#[derive(Default, Clone, PartialEq)]
#[serde(default)]
pub struct League {
    #[serde(rename = "league")]
    pub settings: LeagueSettings,
    pub teams: Vec<Team>,
    pub schedule: Schedule,
}

// Basics.
impl League {
    pub fn build(settings: LeagueSettings, teams: Vec<Team>, schedule: Schedule) -> Self {
        Self { settings, teams, schedule }
    }

    // Parse a league document, cleaning up anything malformed.
    pub fn from_json(json: &str) -> Result<Self, LeagueError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        return Ok(validation::normalize(value));
    }

    pub fn to_json(&self) -> Result<String, LeagueError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    // Rank the teams by their records.
    pub fn standings(&self) -> Vec<TeamRecord> {
        standings::compute_standings(self)
    }
}

// Queries.
impl League {
    pub fn team_by_id(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn team_ids(&self) -> Vec<TeamId> {
        self.teams.iter().map(|t| t.id.clone()).collect()
    }

    // Get the name of a team, or its ID if the team is not registered or has no name.
    pub fn team_name<'a>(&'a self, id: &'a str) -> &'a str {
        match self.team_by_id(id) {
            Some(team) if !team.name.is_empty() => team.name.as_str(),
            _ => id,
        }
    }

    // Get a human readable label for a team ID.
    pub fn label_team(&self, id: &str) -> String {
        if is_bye(id) {
            return BYE.to_string();
        }

        match self.team_by_id(id) {
            Some(team) => team.label(),
            None => "(Unknown)".to_string(),
        }
    }

    // Resolve free text to a team ID.
    // Tries the bye keyword, exact name, label, abbreviation and partial name in that order,
    // then the raw input if it is one of the valid IDs.
    pub fn resolve_team_input(&self, input: &str, valid_ids: &[TeamId]) -> Option<TeamId> {
        let raw = input.trim();
        if raw.is_empty() {
            return None;
        }

        if raw.eq_ignore_ascii_case(BYE) {
            return Some(BYE.to_string());
        }

        let needle = raw.to_lowercase();
        let found = self.teams.iter().find(|t| t.name.to_lowercase() == needle)
            .or_else(|| self.teams.iter().find(|t| t.label().to_lowercase() == needle))
            .or_else(|| self.teams.iter().find(|t| !t.abbrev.is_empty() && t.abbrev.to_lowercase() == needle))
            .or_else(|| self.teams.iter().find(|t| t.name.to_lowercase().contains(&needle)));

        if let Some(team) = found {
            return Some(team.id.clone());
        }

        return valid_ids.iter().find(|id| id.as_str() == raw).cloned();
    }

    // Count matchups that need no more input: byes and completed games.
    pub fn count_completed_matchups(&self) -> usize {
        self.schedule.iter()
            .flat_map(|w| w.matchups.iter())
            .filter(|m| m.is_bye() || m.completed)
            .count()
    }

    pub fn total_matchups(&self) -> usize {
        self.schedule.iter().map(|w| w.matchups.len()).sum()
    }

    // Get the highest week the current week may point to.
    pub fn last_selectable_week(&self) -> WeekNumber {
        let weeks = match self.schedule.is_empty() {
            true => self.settings.regular_weeks,
            false => u32::try_from(self.schedule.len()).unwrap_or(WeekNumber::MAX),
        };
        return weeks.max(1);
    }

    // Clamp a week number into the selectable range.
    pub fn clamp_week(&self, week: WeekNumber) -> WeekNumber {
        week.clamp(1, self.last_selectable_week())
    }
}
