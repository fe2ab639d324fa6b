use crate::Percent;
use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::evaluation::strength::Strength;
use crate::simulation::scenario::Scenario;
use serde::Serialize;

/// Unseen cards that would improve hero's made hand if they fell next.
///
/// Only meaningful with a made 5-card hand and cards still to come, i.e. on
/// the flop or turn. Elsewhere the set is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Outs {
    cards: Vec<Card>,
    probability: Percent,
}

impl Outs {
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn len(&self) -> usize {
        self.cards.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
    /// chance the very next card is an out
    pub fn probability(&self) -> Percent {
        self.probability
    }
}

impl From<&Scenario> for Outs {
    fn from(scenario: &Scenario) -> Self {
        match scenario.board().street() {
            Some(street) if street.is_drawing() => {}
            _ => return Self::default(),
        }
        let pocket = scenario.pocket();
        let current = u32::from(Strength::from(pocket));
        let cards = scenario
            .deck()
            .into_iter()
            .filter(|card| u32::from(Strength::from(Hand::add(pocket, Hand::from(*card)))) > current)
            .collect::<Vec<Card>>();
        let probability = 100.0 * cards.len() as Percent / scenario.unknown() as Percent;
        Self { cards, probability }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::suit::Suit;

    fn outs(hero: &str, board: &str, dead: &str) -> Outs {
        let hero = Card::parse(hero).unwrap();
        let board = Card::parse(board).unwrap();
        let dead = Card::parse(dead).unwrap();
        Outs::from(&Scenario::new(&hero, &board, &dead, 1).unwrap())
    }

    #[test]
    fn broadway_and_flush_outs() {
        let outs = outs("Ah Kh", "Qh Jh 2c", "");
        assert!(outs.contains(&Card::try_from("Th").unwrap()));
        assert!(outs.contains(&Card::try_from("Tc").unwrap()));
        let hearts = (0..52u8)
            .map(Card::from)
            .filter(|c| c.suit() == Suit::Heart)
            .filter(|c| !["Ah", "Kh", "Qh", "Jh"].contains(&c.to_string().as_str()))
            .collect::<Vec<Card>>();
        assert_eq!(hearts.len(), 9);
        assert!(hearts.iter().all(|h| outs.contains(h)));
        assert!(!outs.contains(&Card::try_from("Qh").unwrap()));
    }

    #[test]
    fn cards_below_the_kickers_are_not_outs() {
        let outs = outs("Ah Kd", "Qh Jc 9s", "");
        assert!(outs.contains(&Card::try_from("Td").unwrap()));
        assert!(outs.contains(&Card::try_from("9d").unwrap()));
        assert!(!outs.contains(&Card::try_from("2d").unwrap()));
        assert!(!outs.contains(&Card::try_from("7c").unwrap()));
    }

    #[test]
    fn dead_cards_are_not_outs() {
        let outs = outs("Ah Kh", "Qh Jh 2c", "Th 5h");
        assert!(!outs.contains(&Card::try_from("Th").unwrap()));
        assert!(!outs.contains(&Card::try_from("5h").unwrap()));
        assert!(outs.contains(&Card::try_from("9h").unwrap()));
    }

    #[test]
    fn hit_probability() {
        let outs = outs("Ah Kh", "Qh Jh 2c", "");
        let expected = 100.0 * outs.len() as f32 / 47.0;
        assert!((outs.probability() - expected).abs() < 1e-4);
        assert!(outs.probability() <= 100.0);
    }

    #[test]
    fn nothing_to_improve_without_a_flop_or_with_a_river() {
        assert!(outs("Ah Kh", "", "").is_empty());
        assert!(outs("Ah Kh", "Qh Jh", "").is_empty());
        assert!(outs("Ah Kh", "Qh Jh 2c 3d 4s", "").is_empty());
    }

    #[test]
    fn nuts_have_no_outs() {
        assert!(outs("Ah Kh", "Qh Jh Th", "").is_empty());
    }
}
