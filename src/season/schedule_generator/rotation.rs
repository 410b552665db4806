// Circle method helpers for pairing and rotating a padded roster.

use crate::{season::Matchup, types::TeamId};

// Rotate every entry except the first one step, so the last entry becomes the second.
pub fn rotate(entries: &mut [TeamId]) {
    if entries.len() > 2 {
        entries[1..].rotate_right(1);
    }
}

// Pair the entries from both ends towards the middle.
// Home and away are flipped on odd rounds so no team hosts every week.
pub fn pair_round(entries: &[TeamId], round: usize) -> Vec<Matchup> {
    let n = entries.len();
    let flip = round % 2 == 1;

    let mut matchups = Vec::with_capacity(n / 2);
    for i in 0..n / 2 {
        let home = &entries[i];
        let away = &entries[n - 1 - i];

        matchups.push(match flip {
            true => Matchup::build(away, home),
            false => Matchup::build(home, away),
        });
    }

    return matchups;
}

// Generate one full single round-robin cycle of n - 1 rounds.
pub fn single_cycle(entries: &[TeamId]) -> Vec<Vec<Matchup>> {
    if entries.len() < 2 {
        return Vec::new();
    }

    let rounds = entries.len() - 1;
    let mut working = entries.to_vec();
    let mut cycle = Vec::with_capacity(rounds);

    for round in 0..rounds {
        cycle.push(pair_round(&working, round));
        rotate(&mut working);
    }

    return cycle;
}
