use crate::cards::board::Board;
use crate::cards::hand::Hand;

/// A danger signal read off the board alone.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Texture {
    /// three or more cards of one suit
    FlushDanger,
    /// exactly two cards of one suit
    FlushDraw,
    PairedBoard,
    TripsOnBoard,
    /// three distinct ranks within a span of four
    StraightDraw,
}

impl Texture {
    /// Board alerts, empty before the flop.
    pub fn read(board: Board) -> Vec<Self> {
        if board.size() < 3 {
            return Vec::new();
        }
        let mut suits = [0u8; 4];
        let mut ranks = [0u8; 13];
        for card in Hand::from(board) {
            suits[u8::from(card.suit()) as usize] += 1;
            ranks[u8::from(card.rank()) as usize] += 1;
        }
        let mut alerts = Vec::new();
        match suits.iter().max().copied().unwrap_or_default() {
            3.. => alerts.push(Texture::FlushDanger),
            2 => alerts.push(Texture::FlushDraw),
            _ => {}
        }
        let most = ranks.iter().max().copied().unwrap_or_default();
        if most >= 2 {
            alerts.push(Texture::PairedBoard);
        }
        if most >= 3 {
            alerts.push(Texture::TripsOnBoard);
        }
        let distinct = (0..13u8)
            .filter(|&r| ranks[r as usize] > 0)
            .collect::<Vec<u8>>();
        if distinct.windows(3).any(|w| w[2] - w[0] <= 4) {
            alerts.push(Texture::StraightDraw);
        }
        alerts
    }
}

impl std::fmt::Display for Texture {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Texture::FlushDanger => write!(f, "flush danger (3+ suited)"),
            Texture::FlushDraw => write!(f, "flush draw possible"),
            Texture::PairedBoard => write!(f, "paired board"),
            Texture::TripsOnBoard => write!(f, "trips on board"),
            Texture::StraightDraw => write!(f, "straight draw possible"),
        }
    }
}

impl serde::Serialize for Texture {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
