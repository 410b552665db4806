// Season record of a single team.

use serde::{Deserialize, Serialize};

use crate::{season::streak::ResultToken, types::{Score, TeamId}};

#[derive(Debug, Serialize, Deserialize)]
#[derive(PartialEq)]
#[derive(Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub team_id: TeamId,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: Score,
    pub points_against: Score,

    // Trailing run of identical results, e.g. "W3". Empty before the first decided game.
    pub streak: String,
}

// Basics.
impl TeamRecord {
    pub fn build(team_id: &str) -> Self {
        Self {
            team_id: team_id.to_string(),
            ..Default::default()
        }
    }
}

// Functional
impl TeamRecord {
    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    pub fn point_differential(&self) -> Score {
        self.points_for - self.points_against
    }

    // Win-loss record, with ties only shown when there are any.
    pub fn record_label(&self) -> String {
        match self.ties {
            0 => format!("{}-{}", self.wins, self.losses),
            ties => format!("{}-{}-{}", self.wins, self.losses, ties),
        }
    }

    // Add a decided game to the record and return its result token.
    pub fn update(&mut self, scored: Score, conceded: Score) -> ResultToken {
        self.points_for += scored;
        self.points_against += conceded;

        if scored > conceded {
            self.wins += 1;
            return ResultToken::Win;
        }
        if scored < conceded {
            self.losses += 1;
            return ResultToken::Loss;
        }

        self.ties += 1;
        return ResultToken::Tie;
    }
}
