// Errors returned by league operations.

use thiserror::Error;

use crate::types::{TeamId, WeekNumber};

#[derive(Debug, Error)]
pub enum LeagueError {
    #[error("a schedule needs at least one week, got {0}")]
    InvalidWeekCount(u32),

    #[error("team id \"BYE\" is reserved for the bye placeholder")]
    ReservedTeamId,

    #[error("need at least {needed} teams, found {found}")]
    NotEnoughTeams { needed: usize, found: usize },

    #[error("week {0} does not exist")]
    WeekNotFound(WeekNumber),

    #[error("no week can follow week {0}")]
    NoWeekAfter(WeekNumber),

    #[error("week {week} has no matchup at index {index}")]
    MatchupNotFound { week: WeekNumber, index: usize },

    #[error("no team matches \"{0}\"")]
    TeamNotFound(String),

    #[error("{0} cannot play against itself")]
    SameTeamTwice(TeamId),

    #[error("team name is required")]
    EmptyTeamName,

    #[error("bye matchups have no score")]
    ByeMatchup,

    #[error("both scores are required")]
    MissingScore,

    #[error("score must be a finite number")]
    InvalidScore,

    #[error("invalid league document: {0}")]
    Json(#[from] serde_json::Error),
}
