// Custom types that are widely used are defined here.

pub type TeamId = String;
pub type WeekNumber = u32;

// Fantasy scores carry decimals.
pub type Score = f64;

// Placeholder opponent for odd rosters. Never a real team.
pub const BYE: &str = "BYE";

// Check whether the given ID is the bye sentinel.
pub fn is_bye(id: &str) -> bool {
    id == BYE
}
