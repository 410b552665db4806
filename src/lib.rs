// Single league season management: round robin schedules and standings.
pub mod error;
pub mod league;
pub mod season;
pub mod types;

pub use error::LeagueError;
pub use league::{settings::{LeagueSettings, Tiebreaker}, League, Team};
pub use season::{
    head_to_head::{head_to_head, HeadToHead},
    schedule_generator::{generate_schedule, generate_schedule_with_rng, ScheduleOptions},
    standings::compute_standings,
    streak::collapse_streak,
    team::TeamRecord,
    Matchup, Schedule, Week,
};
pub use types::{TeamId, BYE};
