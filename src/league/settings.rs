// League-wide settings.

use log::warn;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::types::WeekNumber;

pub const DEFAULT_LEAGUE_NAME: &str = "Fantasy Football League";
pub const DEFAULT_REGULAR_WEEKS: WeekNumber = 14;

// How teams with equal records are separated.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tiebreaker {
    #[default] Pf,  // Higher points for.
    Pa,             // Lower points against.
    H2h,            // Head-to-head wins, then points for.
}

impl Tiebreaker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tiebreaker::Pf => "pf",
            Tiebreaker::Pa => "pa",
            Tiebreaker::H2h => "h2h",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pf" => Some(Tiebreaker::Pf),
            "pa" => Some(Tiebreaker::Pa),
            "h2h" => Some(Tiebreaker::H2h),
            _ => None,
        }
    }

    // Parse a stored setting, falling back to points for.
    pub fn from_setting(value: &str) -> Self {
        Self::parse(value).unwrap_or_else(|| {
            warn!("Unknown tiebreaker \"{value}\", using {}", Tiebreaker::Pf.as_str());
            Tiebreaker::default()
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LeagueSettings {
    pub name: String,
    pub season_year: i32,
    pub regular_weeks: WeekNumber,
    pub tiebreaker: Tiebreaker,
    pub playoff_notes: String,
    pub notes: String,

    // The week the commissioner is looking at. Always at least 1.
    pub current_week: WeekNumber,
}

impl Default for LeagueSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_LEAGUE_NAME.to_string(),
            season_year: current_year(),
            regular_weeks: DEFAULT_REGULAR_WEEKS,
            tiebreaker: Tiebreaker::default(),
            playoff_notes: String::new(),
            notes: String::new(),
            current_week: 1,
        }
    }
}

// Cleanup shared by loaded documents and settings forms.
impl LeagueSettings {
    // Fill blank or unusable values with defaults.
    pub fn normalized(self) -> Self {
        Self {
            name: normalize_league_name(&self.name),
            regular_weeks: match self.regular_weeks {
                0 => DEFAULT_REGULAR_WEEKS,
                weeks => weeks,
            },
            current_week: self.current_week.max(1),
            ..self
        }
    }
}

pub fn normalize_league_name(name: &str) -> String {
    match name.trim() {
        "" => DEFAULT_LEAGUE_NAME.to_string(),
        trimmed => trimmed.to_string(),
    }
}

// Get the current calendar year in UTC.
pub fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}
