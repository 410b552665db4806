// Head-to-head comparison between two teams.

use std::cmp::Ordering;

use crate::season::Week;

#[derive(Debug)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum HeadToHead {
    FirstBetter,
    SecondBetter,
    Even,
}

impl HeadToHead {
    // Ordering for sorting, with the better team first.
    pub fn as_ordering(&self) -> Ordering {
        match self {
            HeadToHead::FirstBetter => Ordering::Less,
            HeadToHead::SecondBetter => Ordering::Greater,
            HeadToHead::Even => Ordering::Equal,
        }
    }
}

// Get the wins of each team in decided matchups played strictly between them.
// Tied games count for neither.
pub fn head_to_head_wins(schedule: &[Week], a: &str, b: &str) -> (u32, u32) {
    let mut a_wins = 0;
    let mut b_wins = 0;

    for week in schedule {
        for matchup in week.matchups.iter().filter(|m| m.is_between(a, b)) {
            let Some((a_score, b_score)) = matchup.scores_for(a) else { continue };

            if a_score > b_score { a_wins += 1; }
            else if b_score > a_score { b_wins += 1; }
        }
    }

    return (a_wins, b_wins);
}

// Compare two teams by their head-to-head wins only.
pub fn head_to_head(schedule: &[Week], a: &str, b: &str) -> HeadToHead {
    let (a_wins, b_wins) = head_to_head_wins(schedule, a, b);

    match a_wins.cmp(&b_wins) {
        Ordering::Greater => HeadToHead::FirstBetter,
        Ordering::Less => HeadToHead::SecondBetter,
        Ordering::Equal => HeadToHead::Even,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::Matchup;

    fn played(home: &str, away: &str, home_score: f64, away_score: f64) -> Matchup {
        let mut matchup = Matchup::build(home, away);
        matchup.home_score = Some(home_score);
        matchup.away_score = Some(away_score);
        matchup.completed = true;
        matchup
    }

    #[test]
    fn counts_only_games_between_the_pair() {
        let schedule = vec![
            Week::build(1, vec![played("x", "y", 100.0, 90.0), played("x", "z", 50.0, 80.0)]),
            Week::build(2, vec![played("y", "x", 70.0, 75.0)]),
            Week::build(3, vec![played("y", "x", 120.0, 110.0)]),
        ];

        assert_eq!(head_to_head_wins(&schedule, "x", "y"), (2, 1));
        assert_eq!(head_to_head(&schedule, "x", "y"), HeadToHead::FirstBetter);
        assert_eq!(head_to_head(&schedule, "y", "x"), HeadToHead::SecondBetter);
    }

    #[test]
    fn ties_and_undecided_games_are_ignored() {
        let mut pending = Matchup::build("x", "y");
        pending.home_score = Some(10.0);
        pending.away_score = Some(0.0);

        let schedule = vec![
            Week::build(1, vec![played("x", "y", 90.0, 90.0)]),
            Week::build(2, vec![pending]),
        ];

        assert_eq!(head_to_head_wins(&schedule, "x", "y"), (0, 0));
        assert_eq!(head_to_head(&schedule, "x", "y"), HeadToHead::Even);
    }

    #[test]
    fn split_series_is_even() {
        let schedule = vec![
            Week::build(1, vec![played("x", "y", 1.0, 0.0)]),
            Week::build(2, vec![played("x", "y", 0.0, 1.0)]),
        ];

        assert_eq!(head_to_head(&schedule, "x", "y").as_ordering(), Ordering::Equal);
    }
}
