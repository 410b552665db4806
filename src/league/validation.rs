// Cleaning up league documents of unknown quality.
// Every entry that cannot be used is dropped or replaced with a default instead of failing.

use log::warn;
use serde_json::{Map, Value};

use crate::{
    league::{clip_abbrev, settings::{LeagueSettings, Tiebreaker}, League, Team},
    season::{Matchup, Week},
    types::{is_bye, Score, WeekNumber},
};

// Turn any JSON value into a usable league.
pub fn normalize(value: Value) -> League {
    let Value::Object(root) = value else {
        warn!("League document is not an object, using defaults");
        return League::default();
    };

    let settings = match root.get("league") {
        Some(Value::Object(league)) => normalize_settings(league),
        _ => LeagueSettings::default(),
    };

    let teams = match root.get("teams") {
        Some(Value::Array(teams)) => teams.iter().filter_map(normalize_team).collect(),
        _ => Vec::new(),
    };

    let schedule = match root.get("schedule") {
        Some(Value::Array(weeks)) => weeks.iter().filter_map(normalize_week).collect(),
        _ => Vec::new(),
    };

    let mut league = League::build(settings, teams, schedule);
    league.settings.current_week = league.clamp_week(league.settings.current_week);
    return league;
}

fn normalize_settings(raw: &Map<String, Value>) -> LeagueSettings {
    let defaults = LeagueSettings::default();

    let name = match raw.get("name") {
        Some(Value::String(name)) => name.clone(),
        _ => defaults.name,
    };

    let tiebreaker = match raw.get("tiebreaker") {
        Some(Value::String(tiebreaker)) => Tiebreaker::from_setting(tiebreaker),
        _ => defaults.tiebreaker,
    };

    let settings = LeagueSettings {
        name,
        season_year: raw.get("seasonYear").and_then(as_whole_number).and_then(|n| i32::try_from(n).ok()).unwrap_or(defaults.season_year),
        regular_weeks: raw.get("regularWeeks").and_then(as_week_number).unwrap_or(defaults.regular_weeks),
        tiebreaker,
        playoff_notes: string_or_empty(raw.get("playoffNotes")),
        notes: string_or_empty(raw.get("notes")),
        current_week: raw.get("currentWeek").and_then(as_week_number).unwrap_or(1),
    };

    return settings.normalized();
}

fn normalize_team(value: &Value) -> Option<Team> {
    let (Some(Value::String(id)), Some(Value::String(name))) = (value.get("id"), value.get("name")) else {
        warn!("Dropping team without a string id and name");
        return None;
    };

    let name = match name.trim() {
        "" => "Unnamed".to_string(),
        trimmed => trimmed.to_string(),
    };

    Some(Team {
        id: id.clone(),
        name,
        owner: string_or_empty(value.get("owner")).trim().to_string(),
        abbrev: clip_abbrev(&string_or_empty(value.get("abbrev"))),
        color: string_or_empty(value.get("color")).trim().to_string(),
    })
}

fn normalize_week(value: &Value) -> Option<Week> {
    let (Some(week), Some(Value::Array(matchups))) = (value.get("week").and_then(as_week_number), value.get("matchups")) else {
        warn!("Dropping week without a valid number and matchup list");
        return None;
    };

    Some(Week::build(week, matchups.iter().filter_map(normalize_matchup).collect()))
}

fn normalize_matchup(value: &Value) -> Option<Matchup> {
    let (Some(Value::String(home_id)), Some(Value::String(away_id))) = (value.get("homeId"), value.get("awayId")) else {
        warn!("Dropping matchup without string team ids");
        return None;
    };

    let completed = matches!(value.get("completed"), Some(Value::Bool(true)))
        || is_bye(home_id) || is_bye(away_id);

    Some(Matchup {
        home_id: home_id.clone(),
        away_id: away_id.clone(),
        home_score: value.get("homeScore").and_then(as_score),
        away_score: value.get("awayScore").and_then(as_score),
        completed,
    })
}

// Read a number, accepting numeric strings as well.
fn as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    return number.is_finite().then_some(number);
}

fn as_whole_number(value: &Value) -> Option<i64> {
    let number = as_number(value)?;
    if number.fract() != 0.0 {
        return None;
    }
    return Some(number as i64);
}

fn as_week_number(value: &Value) -> Option<WeekNumber> {
    as_whole_number(value).and_then(|n| WeekNumber::try_from(n).ok())
}

// Null, missing and empty scores all mean "not entered".
fn as_score(value: &Value) -> Option<Score> {
    match value {
        Value::String(s) if s.trim().is_empty() => None,
        other => as_number(other),
    }
}

fn string_or_empty(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}
