use super::rank::Rank;
use super::suit::Suit;
use crate::Error;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. This yields a natural ordering where cards are sorted
/// first by rank, then by suit within each rank.
///
/// # Representations
///
/// - `u8`: Compact index `0..52` for array indexing
/// - `u32`: Packed prime / rank / suit / rank-bit fields for fast evaluation
/// - `u64`: Single-bit representation for set membership in [`Hand`]
///
/// # Parsing
///
/// Cards are parsed from two-character strings like `"As"` (ace of spades)
/// or `"tc"` (ten of clubs), case-insensitively. Use [`Card::parse`] for
/// multiple cards.
///
/// [`Hand`]: super::hand::Hand
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Extracts the rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    /// Extracts the suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
    /// Parses a list of card notations separated by whitespace or commas.
    ///
    /// Fails on the first token that is not exactly one rank symbol
    /// followed by one suit symbol.
    pub fn parse(s: &str) -> Result<Vec<Self>, Error> {
        s.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(Self::try_from)
            .collect()
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!(n < 52, "Invalid card u8: {}", n);
        Self(n)
    }
}

/// u32 packed encoding. fields never overlap, so AND across cards
/// tests for a common suit and OR across cards collects ranks.
/// Ts
/// xxx AKQJT98765432 shdc rank prime
/// 000 0000100000000 1000 1000 00010111
impl From<Card> for u32 {
    fn from(c: Card) -> u32 {
        let rank = c.rank();
        let prime = rank.prime();
        let index = (u8::from(rank) as u32) << 8;
        let suit = c.suit().mask() << 12;
        let bits = (u16::from(rank) as u32) << 16;
        prime | index | suit | bits
    }
}
impl From<u32> for Card {
    fn from(n: u32) -> Self {
        let rank = Rank::from(((n >> 8) & 0xF) as u8);
        let suit = Suit::from(((n >> 12) & 0xF).trailing_zeros() as u8);
        Self::from((rank, suit))
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Ts
/// xxxxxxxxxxxx 0000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str parsing, case-insensitive
impl TryFrom<&str> for Card {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let token = s.trim();
        let mut chars = token.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => {
                let rank = Rank::try_from(r).map_err(|_| Error::InvalidCard(token.to_string()))?;
                let suit = Suit::try_from(s).map_err(|_| Error::InvalidCard(token.to_string()))?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(Error::InvalidCard(token.to_string())),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl crate::Arbitrary for Card {
    fn random() -> Self {
        Self(rand::random_range(0..52u8))
    }
}

/// serialized as its two-character notation, so cards can key JSON maps
impl serde::Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
impl<'de> serde::Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Card::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}
