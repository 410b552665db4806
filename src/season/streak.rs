// Per-game result tokens and the trailing streak built from them.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ResultToken {
    #[serde(rename = "W")] Win,
    #[serde(rename = "L")] Loss,
    #[serde(rename = "T")] Tie,
}

impl ResultToken {
    pub fn letter(&self) -> char {
        match self {
            ResultToken::Win => 'W',
            ResultToken::Loss => 'L',
            ResultToken::Tie => 'T',
        }
    }
}

impl fmt::Display for ResultToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

// Collapse the trailing run of identical results into e.g. "W3".
// An empty sequence gives an empty string.
pub fn collapse_streak(results: &[ResultToken]) -> String {
    let Some(last) = results.last() else { return String::new() };
    let count = results.iter().rev().take_while(|token| *token == last).count();

    return format!("{last}{count}");
}
