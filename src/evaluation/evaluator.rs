use super::kicks::Kickers;
use super::ranking::Ranking;
use super::strength::Strength;
use crate::cards::hand::Hand;

/// suit field of the packed card encoding
const SUITS: u32 = 0xF000;
/// A-5-4-3-2, as sorted rank indices
const WHEEL: [u8; 5] = [12, 3, 2, 1, 0];
/// the wheel plays as a five-high straight
const WHEEL_HIGH: u8 = 3;

/// every 5-card subset of 7, 6 and 5 held cards, as index sets
const SUBSETS_7: [[usize; 5]; 21] = [
    [0, 1, 2, 3, 4],
    [0, 1, 2, 3, 5],
    [0, 1, 2, 3, 6],
    [0, 1, 2, 4, 5],
    [0, 1, 2, 4, 6],
    [0, 1, 2, 5, 6],
    [0, 1, 3, 4, 5],
    [0, 1, 3, 4, 6],
    [0, 1, 3, 5, 6],
    [0, 1, 4, 5, 6],
    [0, 2, 3, 4, 5],
    [0, 2, 3, 4, 6],
    [0, 2, 3, 5, 6],
    [0, 2, 4, 5, 6],
    [0, 3, 4, 5, 6],
    [1, 2, 3, 4, 5],
    [1, 2, 3, 4, 6],
    [1, 2, 3, 5, 6],
    [1, 2, 4, 5, 6],
    [1, 3, 4, 5, 6],
    [2, 3, 4, 5, 6],
];
const SUBSETS_6: [[usize; 5]; 6] = [
    [0, 1, 2, 3, 4],
    [0, 1, 2, 3, 5],
    [0, 1, 2, 4, 5],
    [0, 1, 3, 4, 5],
    [0, 2, 3, 4, 5],
    [1, 2, 3, 4, 5],
];
const SUBSETS_5: [[usize; 5]; 1] = [
    [0, 1, 2, 3, 4],
];

/// A best-five-of-many hand evaluator.
///
/// Holds 5 to 7 packed cards and searches every 5-card subset: 21 for a
/// river hand, 6 on the turn, 1 for exactly five. Each subset is scored in
/// closed form from the packed suit and rank fields, no lookup tables.
pub struct Evaluator {
    cards: [u32; 7],
    n: usize,
}

impl From<Hand> for Evaluator {
    fn from(hand: Hand) -> Self {
        let n = hand.size();
        assert!((5..=7).contains(&n), "evaluate 5 to 7 cards, not {}", n);
        let mut cards = [0u32; 7];
        hand.zip(cards.iter_mut())
            .for_each(|(card, slot)| *slot = u32::from(card));
        Self { cards, n }
    }
}

impl From<Evaluator> for Strength {
    fn from(evaluator: Evaluator) -> Self {
        evaluator.find_strength()
    }
}

impl Evaluator {
    /// The strongest 5-card hand among the held cards.
    ///
    /// Every subset is scored; no subset order allows an early exit.
    pub fn find_strength(&self) -> Strength {
        Self::subsets(self.n)
            .iter()
            .copied()
            .map(|subset| subset.map(|i| self.cards[i]))
            .map(Self::evaluate5)
            .max_by_key(|strength| u32::from(*strength))
            .expect("at least one 5-card subset")
    }

    /// Scores exactly five packed cards.
    pub fn evaluate5(cards: [u32; 5]) -> Strength {
        let flush = cards.iter().fold(SUITS, |acc, card| acc & card) != 0;
        let mut ranks = cards.map(|card| ((card >> 8) & 0xF) as u8);
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        let distinct = ranks.windows(2).all(|w| w[0] != w[1]);
        let straight = match distinct {
            true if ranks[0] - ranks[4] == 4 => Some(ranks[0]),
            true if ranks == WHEEL => Some(WHEEL_HIGH),
            _ => None,
        };
        match (flush, straight) {
            (true, Some(high)) => Strength::from((Ranking::StraightFlush, Kickers::pack([high]))),
            (false, Some(high)) => Strength::from((Ranking::Straight, Kickers::pack([high]))),
            (true, None) => Strength::from((Ranking::Flush, Kickers::pack(ranks))),
            (false, None) => Self::evaluate_groups(ranks),
        }
    }

    /// Pairs, trips, quads and high cards from the rank histogram.
    ///
    /// Rank groups are ordered by multiplicity, then by rank. Packing the
    /// group ranks in that order yields every category's tie-break layout,
    /// e.g. `pair << 12 | k1 << 8 | k2 << 4 | k3`.
    fn evaluate_groups(ranks: [u8; 5]) -> Strength {
        let mut counts = [0u8; 13];
        ranks.iter().for_each(|&r| counts[r as usize] += 1);
        let mut groups = [(0u8, 0u8); 5];
        let mut n = 0;
        for rank in (0..13u8).rev() {
            let count = counts[rank as usize];
            if count > 0 {
                groups[n] = (count, rank);
                n += 1;
            }
        }
        let groups = &mut groups[..n];
        groups.sort_by(|a, b| b.0.cmp(&a.0)); // stable, ranks stay descending
        let ranking = match (groups[0].0, groups[1].0) {
            (4, _) => Ranking::FourOAK,
            (3, 2) => Ranking::FullHouse,
            (3, _) => Ranking::ThreeOAK,
            (2, 2) => Ranking::TwoPair,
            (2, _) => Ranking::OnePair,
            _ => Ranking::HighCard,
        };
        let kicks = Kickers::pack(groups.iter().map(|&(_, rank)| rank));
        Strength::from((ranking, kicks))
    }

    /// index sets of every 5-card subset of n cards
    fn subsets(n: usize) -> &'static [[usize; 5]] {
        match n {
            7 => &SUBSETS_7,
            6 => &SUBSETS_6,
            5 => &SUBSETS_5,
            _ => unreachable!("evaluate 5 to 7 cards, not {}", n),
        }
    }
}
