use super::scenario::Scenario;
use super::tally::Outcome;
use super::tally::Tally;
use crate::Percent;
use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::evaluation::strength::Strength;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Hero's estimated equity for each card that could fall next.
pub type Heatmap = BTreeMap<Card, Percent>;

impl Scenario {
    /// Equity after each possible next card.
    ///
    /// Only defined on the flop and turn: preflop has too many unknowns and
    /// the river has no cards to come, so both return an empty map. Every
    /// unseen card gets an entry.
    pub fn heatmap(&self, iterations: usize) -> Heatmap {
        match self.board().street() {
            Some(street) if street.is_drawing() => {}
            _ => return Heatmap::new(),
        }
        let start = std::time::Instant::now();
        let candidates = Vec::<Card>::from(Hand::from(self.deck()));
        #[cfg(feature = "parallel")]
        let candidates = candidates.into_par_iter();
        #[cfg(not(feature = "parallel"))]
        let candidates = candidates.into_iter();
        let heatmap = candidates
            .map(|card| (card, self.impact(card, iterations)))
            .collect::<Heatmap>();
        log::debug!(
            "heatmap of {} cards x{} in {:?}",
            heatmap.len(),
            iterations,
            start.elapsed()
        );
        heatmap
    }

    /// Equity once `card` falls. The board stays at that size: only the
    /// opponents' hole cards are sampled, and ties count half.
    fn impact(&self, card: Card, iterations: usize) -> Percent {
        let board = Hand::from(self.board().with(card));
        let hero = Strength::from(Hand::add(Hand::from(self.hero()), board));
        let score = u32::from(hero);
        let mut deck = self.deck();
        deck.remove(card);
        let mut tally = Tally::default();
        for _ in 0..iterations {
            let mut deck = deck;
            let villains = (0..self.opponents())
                .map(|_| Hand::from(deck.hole()))
                .map(|villain| Strength::from(Hand::add(villain, board)))
                .map(u32::from);
            tally.witness(hero.ranking(), Outcome::showdown(score, villains));
        }
        tally.equity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(hero: &str, board: &str, dead: &str, opponents: usize) -> Scenario {
        let hero = Card::parse(hero).unwrap();
        let board = Card::parse(board).unwrap();
        let dead = Card::parse(dead).unwrap();
        Scenario::new(&hero, &board, &dead, opponents).unwrap()
    }

    #[test]
    fn empty_off_the_flop_and_turn() {
        for board in ["", "2c", "2c 7d", "2c 7d 9h Qs Kd"] {
            assert!(scenario("Ah Kh", board, "", 1).heatmap(10).is_empty(), "{}", board);
        }
    }

    #[test]
    fn covers_every_unseen_card() {
        let flop = scenario("Ah Kh", "Qh Jh 2c", "3d 4d", 2);
        let heatmap = flop.heatmap(10);
        assert_eq!(heatmap.len(), 52 - 2 - 3 - 2);
        assert!(!heatmap.contains_key(&Card::try_from("3d").unwrap()));
        assert!(!heatmap.contains_key(&Card::try_from("Qh").unwrap()));
        let turn = scenario("Ah Kh", "Qh Jh 2c 5s", "", 1);
        assert_eq!(turn.heatmap(10).len(), 52 - 2 - 4);
    }

    #[test]
    fn equities_are_percentages() {
        let heatmap = scenario("9c 8c", "7c 6d 2h", "", 3).heatmap(20);
        assert!(heatmap.values().all(|e| (0.0..=100.0).contains(e)));
    }

    /// statistical: the ten makes a royal flush, which cannot lose
    #[test]
    fn nut_cards_score_full_equity() {
        let heatmap = scenario("Ah Kh", "Qh Jh 2c", "", 1).heatmap(50);
        assert_eq!(heatmap[&Card::try_from("Th").unwrap()], 100.0);
        assert!(heatmap[&Card::try_from("3s").unwrap()] < 100.0);
    }
}
