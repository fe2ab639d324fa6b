/// A poker hand's category.
///
/// Categories are ordered weakest to strongest and always dominate
/// [`Kickers`](super::kicks::Kickers): any pair beats any high card.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    #[default]
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOAK = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOAK = 7,
    StraightFlush = 8,
}

impl Ranking {
    pub const COUNT: usize = 9;

    pub const fn all() -> [Self; Self::COUNT] {
        [
            Ranking::HighCard,
            Ranking::OnePair,
            Ranking::TwoPair,
            Ranking::ThreeOAK,
            Ranking::Straight,
            Ranking::Flush,
            Ranking::FullHouse,
            Ranking::FourOAK,
            Ranking::StraightFlush,
        ]
    }

    /// how many 4-bit rank fields the tie-break of this category packs
    pub const fn n_fields(&self) -> usize {
        match self {
            Ranking::HighCard | Ranking::Flush => 5,
            Ranking::OnePair => 4,
            Ranking::TwoPair | Ranking::ThreeOAK => 3,
            Ranking::FullHouse | Ranking::FourOAK => 2,
            Ranking::Straight | Ranking::StraightFlush => 1,
        }
    }
}

impl From<u8> for Ranking {
    fn from(n: u8) -> Self {
        Self::all()
            .get(n as usize)
            .copied()
            .unwrap_or_else(|| panic!("Invalid ranking u8: {}", n))
    }
}
impl From<Ranking> for u8 {
    fn from(r: Ranking) -> u8 {
        r as u8
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::HighCard => write!(f, "HighCard"),
            Ranking::OnePair => write!(f, "OnePair"),
            Ranking::TwoPair => write!(f, "TwoPair"),
            Ranking::ThreeOAK => write!(f, "ThreeOfAKind"),
            Ranking::Straight => write!(f, "Straight"),
            Ranking::Flush => write!(f, "Flush"),
            Ranking::FullHouse => write!(f, "FullHouse"),
            Ranking::FourOAK => write!(f, "FourOfAKind"),
            Ranking::StraightFlush => write!(f, "StraightFlush"),
        }
    }
}

impl serde::Serialize for Ranking {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
