use super::evaluator::Evaluator;
use super::kicks::Kickers;
use super::ranking::Ranking;
use crate::cards::hand::Hand;

/// A hand's strength.
///
/// Ordered by [`Ranking`] first and [`Kickers`] second, which is exactly the
/// order of the combined `u32` score: category in the high byte, tie-break in
/// the low 20 bits. Hot loops compare the `u32`.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    ranking: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub const SHIFT: u32 = 24;

    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
    pub fn kicks(&self) -> Kickers {
        self.kicks
    }
}

/// evaluate any set of 5 to 7 cards
impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((ranking, kicks): (Ranking, Kickers)) -> Self {
        Self { ranking, kicks }
    }
}

/// combined score isomorphism
impl From<Strength> for u32 {
    fn from(s: Strength) -> Self {
        (u8::from(s.ranking) as u32) << Strength::SHIFT | u32::from(s.kicks)
    }
}
impl From<u32> for Strength {
    fn from(n: u32) -> Self {
        Self {
            ranking: Ranking::from((n >> Strength::SHIFT) as u8),
            kicks: Kickers::from(n & ((1 << Strength::SHIFT) - 1)),
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<14}", self.ranking.to_string())?;
        for rank in self.kicks.ranks(self.ranking) {
            write!(f, "{} ", rank)?;
        }
        Ok(())
    }
}

impl serde::Serialize for Strength {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let ranks = self
            .kicks
            .ranks(self.ranking)
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        serializer.collect_str(&format!("{} {}", self.ranking, ranks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Card;

    fn strength(s: &str) -> Strength {
        Strength::from(Hand::from(Card::parse(s).unwrap().as_slice()))
    }

    #[test]
    fn bijective_u32() {
        let s = strength("As Ah Kd Qc Js 4d 2h");
        assert_eq!(s, Strength::from(u32::from(s)));
    }

    #[test]
    fn combined_score_agrees_with_ord() {
        let a = strength("2c 3d 4h 5s 7c");
        let b = strength("2c 2d 4h 5s 7c");
        let c = strength("Ac Kd Qh Js 9c");
        assert!(a < c && c < b);
        assert!(u32::from(a) < u32::from(c) && u32::from(c) < u32::from(b));
    }

    #[test]
    fn display_wheel_as_five_high() {
        assert_eq!(strength("As 2h 3d 4c 5s").to_string().trim_end(), "Straight      5");
    }
}
