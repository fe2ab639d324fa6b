use crate::Percent;
use crate::evaluation::ranking::Ranking;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Hero's result against the whole table in one dealt hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Tie,
    Loss,
}

impl Outcome {
    /// Hero wins by beating every opponent outright, ties if nobody beats
    /// hero but somebody matches, and loses as soon as anybody is stronger.
    pub fn showdown(hero: u32, villains: impl IntoIterator<Item = u32>) -> Self {
        let mut outcome = Outcome::Win;
        for villain in villains {
            match hero.cmp(&villain) {
                Ordering::Less => return Outcome::Loss,
                Ordering::Equal => outcome = Outcome::Tie,
                Ordering::Greater => continue,
            }
        }
        outcome
    }
}

/// Running counts over simulated hands.
///
/// The category histogram counts hero's made hand in every hand played,
/// whatever the outcome. A second histogram counts only outright wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tally {
    wins: u32,
    ties: u32,
    losses: u32,
    hands: [u32; Ranking::COUNT],
    winners: [u32; Ranking::COUNT],
}

impl Tally {
    pub fn witness(&mut self, hero: Ranking, outcome: Outcome) {
        let i = u8::from(hero) as usize;
        self.hands[i] += 1;
        match outcome {
            Outcome::Win => {
                self.wins += 1;
                self.winners[i] += 1;
            }
            Outcome::Tie => self.ties += 1,
            Outcome::Loss => self.losses += 1,
        }
    }

    pub fn played(&self) -> u32 {
        self.wins + self.ties + self.losses
    }
    pub fn wins(&self) -> u32 {
        self.wins
    }
    pub fn ties(&self) -> u32 {
        self.ties
    }

    pub fn win(&self) -> Percent {
        Self::percent(self.wins, self.played())
    }
    pub fn tie(&self) -> Percent {
        Self::percent(self.ties, self.played())
    }
    /// whatever is not won or tied, floored at zero
    pub fn loss(&self) -> Percent {
        match self.played() {
            0 => 0.0,
            _ => (100.0 - self.win() - self.tie()).max(0.0),
        }
    }
    /// ties count as half a win
    pub fn equity(&self) -> Percent {
        match self.played() {
            0 => 0.0,
            n => 100.0 * (self.wins as f32 + self.ties as f32 / 2.0) / n as f32,
        }
    }

    /// How often hero ends up with each category, over hands played.
    pub fn distribution(&self) -> BTreeMap<Ranking, Percent> {
        Self::normalize(&self.hands, self.played())
    }
    /// Which categories hero's outright wins came from.
    pub fn winning(&self) -> BTreeMap<Ranking, Percent> {
        Self::normalize(&self.winners, self.wins)
    }

    fn normalize(counts: &[u32; Ranking::COUNT], total: u32) -> BTreeMap<Ranking, Percent> {
        Ranking::all()
            .into_iter()
            .zip(counts.iter())
            .filter(|(_, n)| **n > 0)
            .map(|(ranking, n)| (ranking, Self::percent(*n, total)))
            .collect()
    }
    fn percent(n: u32, total: u32) -> Percent {
        match total {
            0 => 0.0,
            total => 100.0 * n as f32 / total as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showdown_outcomes() {
        assert_eq!(Outcome::showdown(10, [3, 9, 1]), Outcome::Win);
        assert_eq!(Outcome::showdown(10, [3, 10, 1]), Outcome::Tie);
        assert_eq!(Outcome::showdown(10, [10, 11, 1]), Outcome::Loss);
        assert_eq!(Outcome::showdown(10, [0u32; 0]), Outcome::Win);
    }

    #[test]
    fn percentages() {
        let mut tally = Tally::default();
        tally.witness(Ranking::OnePair, Outcome::Win);
        tally.witness(Ranking::OnePair, Outcome::Loss);
        tally.witness(Ranking::Flush, Outcome::Tie);
        tally.witness(Ranking::HighCard, Outcome::Loss);
        assert_eq!(tally.played(), 4);
        assert_eq!(tally.win(), 25.0);
        assert_eq!(tally.tie(), 25.0);
        assert_eq!(tally.loss(), 50.0);
        assert_eq!(tally.equity(), 37.5);
        let distribution = tally.distribution();
        assert_eq!(distribution.len(), 3);
        assert_eq!(distribution[&Ranking::OnePair], 50.0);
        assert_eq!(distribution[&Ranking::Flush], 25.0);
        let winning = tally.winning();
        assert_eq!(winning.len(), 1);
        assert_eq!(winning[&Ranking::OnePair], 100.0);
    }

    #[test]
    fn empty_tally_is_all_zero() {
        let tally = Tally::default();
        assert_eq!(tally.win(), 0.0);
        assert_eq!(tally.tie(), 0.0);
        assert_eq!(tally.loss(), 0.0);
        assert!(tally.distribution().is_empty());
    }
}
