use super::card::Card;
use super::hand::Hand;
use super::street::Street;

/// The community cards, anywhere from none to all five.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Board(Hand);

impl Board {
    pub const MAX: usize = 5;

    pub fn empty() -> Self {
        Self(Hand::empty())
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// cards still to come before showdown
    pub fn missing(&self) -> usize {
        Self::MAX - self.size()
    }
    /// None while the flop is only partially known
    pub fn street(&self) -> Option<Street> {
        Street::try_from(self.size()).ok()
    }
    /// the same board with one more card turned
    pub fn with(&self, card: Card) -> Self {
        Self::from(Hand::add(self.0, Hand::from(card)))
    }
}

impl From<Hand> for Board {
    fn from(hand: Hand) -> Self {
        assert!(hand.size() <= Self::MAX);
        Self(hand)
    }
}
impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        board.0
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn street_follows_size() {
        let flop = Board::from(Hand::from(Card::parse("2c 7d Ks").unwrap().as_slice()));
        assert_eq!(flop.street(), Some(Street::Flop));
        assert_eq!(flop.missing(), 2);
        let turn = flop.with(Card::try_from("9h").unwrap());
        assert_eq!(turn.street(), Some(Street::Turn));
        let partial = Board::from(Hand::from(Card::parse("2c 7d").unwrap().as_slice()));
        assert_eq!(partial.street(), None);
        assert_eq!(Board::empty().street(), Some(Street::Pref));
    }
}
