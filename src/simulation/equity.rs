use super::scenario::Scenario;
use super::tally::Outcome;
use super::tally::Tally;
use crate::cards::hand::Hand;
use crate::evaluation::strength::Strength;

impl Scenario {
    /// Monte Carlo equity against uniformly random opponents.
    ///
    /// Every iteration deals from a fresh copy of the unseen cards: two hole
    /// cards per opponent, then the rest of the board. Iterations are
    /// independent and sample without replacement within themselves.
    pub fn simulate(&self, iterations: usize) -> Tally {
        if iterations == 0 {
            log::warn!("simulating {} with no iterations", self);
        }
        let start = std::time::Instant::now();
        let deck = self.deck();
        let hole = Hand::from(self.hero());
        let known = Hand::from(self.board());
        let missing = self.board().missing();
        let mut villains = Vec::with_capacity(self.opponents());
        let mut tally = Tally::default();
        for _ in 0..iterations {
            let mut deck = deck;
            villains.clear();
            villains.extend((0..self.opponents()).map(|_| Hand::from(deck.hole())));
            let board = Hand::add(known, deck.deal(missing));
            let hero = Strength::from(Hand::add(hole, board));
            let outcome = Outcome::showdown(
                u32::from(hero),
                villains
                    .iter()
                    .map(|villain| Strength::from(Hand::add(*villain, board)))
                    .map(u32::from),
            );
            tally.witness(hero.ranking(), outcome);
        }
        log::debug!(
            "simulated {} x{} in {:?}: win {:.2}% tie {:.2}%",
            self,
            iterations,
            start.elapsed(),
            tally.win(),
            tally.tie(),
        );
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Card;
    use crate::evaluation::ranking::Ranking;

    fn scenario(hero: &str, board: &str, opponents: usize) -> Scenario {
        let hero = Card::parse(hero).unwrap();
        let board = Card::parse(board).unwrap();
        Scenario::new(&hero, &board, &[], opponents).unwrap()
    }

    /// statistical: heads-up pocket aces hold about 85% of the time
    #[test]
    fn pocket_aces_heads_up() {
        let tally = scenario("As Ad", "", 1).simulate(20_000);
        assert_eq!(tally.played(), 20_000);
        assert!((80.0..=87.0).contains(&tally.win()), "win {}", tally.win());
        assert!(tally.tie() < 3.0, "tie {}", tally.tie());
    }

    /// statistical: more opponents, less equity
    #[test]
    fn crowded_tables_cost_equity() {
        let heads_up = scenario("As Ad", "", 1).simulate(5_000);
        let crowded = scenario("As Ad", "", 5).simulate(5_000);
        assert!(crowded.win() + 10.0 < heads_up.win());
    }

    #[test]
    fn royal_flush_always_wins() {
        let tally = scenario("As Ks", "Qs Js Ts 2c 3d", 3).simulate(500);
        assert_eq!(tally.win(), 100.0);
        assert_eq!(tally.distribution()[&Ranking::StraightFlush], 100.0);
    }

    #[test]
    fn royal_board_always_ties() {
        let tally = scenario("2c 3d", "Ts Js Qs Ks As", 2).simulate(500);
        assert_eq!(tally.tie(), 100.0);
        assert_eq!(tally.win(), 0.0);
        assert_eq!(tally.loss(), 0.0);
    }

    #[test]
    fn distribution_covers_every_hand_played() {
        let tally = scenario("7c 2d", "Kh", 2).simulate(2_000);
        let total = tally.distribution().values().sum::<f32>();
        assert!((total - 100.0).abs() < 0.01);
        assert!((tally.win() + tally.tie() + tally.loss() - 100.0).abs() < 0.01);
    }

    #[test]
    fn zero_iterations() {
        let tally = scenario("As Ad", "", 1).simulate(0);
        assert_eq!(tally.played(), 0);
        assert_eq!(tally.win(), 0.0);
        assert!(tally.distribution().is_empty());
    }
}
