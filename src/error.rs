use crate::cards::card::Card;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything a caller can get wrong about a scenario.
///
/// Each variant is raised before any simulation work begins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid card '{0}': expected a rank (2-9, T, J, Q, K, A) then a suit (s, h, d, c)")]
    InvalidCard(String),

    #[error("hero must hold exactly 2 cards, got {0}")]
    HoleSize(usize),

    #[error("board holds at most 5 cards, got {0}")]
    BoardSize(usize),

    #[error("card {0} appears more than once")]
    DuplicateCard(Card),

    #[error("at least one opponent is required")]
    NoOpponents,

    #[error("deck too small: {needed} cards needed to deal, {available} unseen")]
    InsufficientDeck { needed: usize, available: usize },
}
