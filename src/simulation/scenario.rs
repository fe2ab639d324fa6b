use crate::Error;
use crate::Result;
use crate::cards::board::Board;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;

/// A validated question: hero's hole cards, the known board, cards known to
/// be out of play, and how many uniformly random opponents to beat.
///
/// Construction rejects malformed inputs and any table that the unseen cards
/// cannot deal out, so simulations never run short of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    hero: Hole,
    board: Board,
    dead: Hand,
    opponents: usize,
}

impl Scenario {
    pub fn new(hero: &[Card], board: &[Card], dead: &[Card], opponents: usize) -> Result<Self> {
        if hero.len() != 2 {
            return Err(Error::HoleSize(hero.len()));
        }
        if board.len() > Board::MAX {
            return Err(Error::BoardSize(board.len()));
        }
        if opponents == 0 {
            return Err(Error::NoOpponents);
        }
        let mut known = Hand::empty();
        for card in hero.iter().chain(board).chain(dead) {
            if known.contains(card) {
                return Err(Error::DuplicateCard(*card));
            }
            known = Hand::add(known, Hand::from(*card));
        }
        let available = known.complement().size();
        let needed = 2 * opponents + Board::MAX - board.len();
        if needed > available {
            return Err(Error::InsufficientDeck { needed, available });
        }
        Ok(Self {
            hero: Hole::from((hero[0], hero[1])),
            board: Board::from(Hand::from(board)),
            dead: Hand::from(dead),
            opponents,
        })
    }

    pub fn hero(&self) -> Hole {
        self.hero
    }
    pub fn board(&self) -> Board {
        self.board
    }
    pub fn dead(&self) -> Hand {
        self.dead
    }
    pub fn opponents(&self) -> usize {
        self.opponents
    }
    /// hero's hole cards together with the board
    pub fn pocket(&self) -> Hand {
        Hand::add(Hand::from(self.hero), Hand::from(self.board))
    }
    /// every card whose location is known
    pub fn known(&self) -> Hand {
        Hand::add(self.pocket(), self.dead)
    }
    /// the cards that can still be dealt
    pub fn deck(&self) -> Deck {
        Deck::without(self.known())
    }
    pub fn unknown(&self) -> usize {
        self.deck().size()
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}~ {}vs {}", self.hero, self.board, self.opponents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        Card::parse(s).unwrap()
    }

    #[test]
    fn counts_unknown_cards() {
        let scenario = Scenario::new(&cards("Ah Kh"), &cards("Qh Jh 2c"), &cards("3d"), 2).unwrap();
        assert_eq!(scenario.unknown(), 52 - 2 - 3 - 1);
        assert_eq!(scenario.known().size(), 6);
        assert_eq!(scenario.pocket().size(), 5);
    }

    #[test]
    fn rejects_wrong_hole_size() {
        let err = Scenario::new(&cards("Ah"), &[], &[], 1).unwrap_err();
        assert_eq!(err, Error::HoleSize(1));
        let err = Scenario::new(&cards("Ah Kh Qh"), &[], &[], 1).unwrap_err();
        assert_eq!(err, Error::HoleSize(3));
    }

    #[test]
    fn rejects_oversized_board() {
        let err = Scenario::new(&cards("Ah Kh"), &cards("2c 3c 4c 5c 6c 7c"), &[], 1).unwrap_err();
        assert_eq!(err, Error::BoardSize(6));
    }

    #[test]
    fn rejects_duplicates_across_sets() {
        let err = Scenario::new(&cards("Ah Kh"), &cards("Ah 2c 3c"), &[], 1).unwrap_err();
        assert_eq!(err, Error::DuplicateCard(Card::try_from("Ah").unwrap()));
        let err = Scenario::new(&cards("Ah Kh"), &[], &cards("7d 7d"), 1).unwrap_err();
        assert_eq!(err, Error::DuplicateCard(Card::try_from("7d").unwrap()));
        let err = Scenario::new(&cards("Ah Ah"), &[], &[], 1).unwrap_err();
        assert_eq!(err, Error::DuplicateCard(Card::try_from("Ah").unwrap()));
    }

    #[test]
    fn rejects_empty_table() {
        let err = Scenario::new(&cards("Ah Kh"), &[], &[], 0).unwrap_err();
        assert_eq!(err, Error::NoOpponents);
    }

    #[test]
    fn rejects_tables_the_deck_cannot_deal() {
        assert!(Scenario::new(&cards("Ah Kh"), &[], &[], 22).is_ok());
        let err = Scenario::new(&cards("Ah Kh"), &[], &[], 23).unwrap_err();
        assert_eq!(err, Error::InsufficientDeck { needed: 51, available: 50 });
    }
}
