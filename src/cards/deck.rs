use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;

/// A deck of the cards nobody has seen yet, supporting random draws.
///
/// Wraps a [`Hand`] of the remaining cards. Because it is `Copy`, a Monte
/// Carlo loop keeps one pristine Deck per request and draws from a fresh
/// copy every iteration, so iterations never share dealt cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh 52-card deck.
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }
    /// Creates a deck holding every card except the known ones.
    pub fn without(known: Hand) -> Self {
        Self(known.complement())
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// Tests whether a card is still in the deck.
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Removes a specific card, if present.
    pub fn remove(&mut self, card: Card) {
        self.0.remove(card);
    }
    /// Draws and removes a uniformly random card from the deck.
    pub fn draw(&mut self) -> Card {
        debug_assert!(self.0.size() > 0);
        let n = self.0.size();
        let i = rand::random_range(0..n) as u8;
        let mut ones = 0u8;
        let mut deck = u64::from(self.0);
        while ones < i {
            deck = deck & (deck - 1);
            ones = ones + 1;
        }
        let card = Card::from(deck.trailing_zeros() as u8);
        self.0.remove(card);
        card
    }
    /// Deals two cards as a player's hole cards.
    pub fn hole(&mut self) -> Hole {
        let a = self.draw();
        let b = self.draw();
        Hole::from((a, b))
    }
    /// Deals n cards as a set.
    pub fn deal(&mut self, n: usize) -> Hand {
        (0..n)
            .map(|_| self.draw())
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}

/// iterates the remaining cards in ascending order
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = Hand;
    fn into_iter(self) -> Self::IntoIter {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_known_cards() {
        let known = Hand::from(Card::parse("As Ad 7h").unwrap().as_slice());
        let deck = Deck::without(known);
        assert_eq!(deck.size(), 49);
        assert!(!deck.contains(&Card::try_from("As").unwrap()));
        assert!(deck.contains(&Card::try_from("Ah").unwrap()));
    }

    #[test]
    fn draws_without_replacement() {
        let mut deck = Deck::new();
        let drawn = (0..52).map(|_| deck.draw()).map(Hand::from).fold(Hand::empty(), Hand::add);
        assert_eq!(drawn.size(), 52);
        assert_eq!(deck.size(), 0);
    }

    #[test]
    fn copies_are_independent() {
        let pristine = Deck::new();
        let mut copy = pristine;
        copy.deal(10);
        assert_eq!(copy.size(), 42);
        assert_eq!(pristine.size(), 52);
    }

    #[test]
    fn draw_respects_removals() {
        let mut deck = Deck::new();
        let card = Card::try_from("Kc").unwrap();
        deck.remove(card);
        assert!((0..51).map(|_| deck.draw()).all(|c| c != card));
    }
}
