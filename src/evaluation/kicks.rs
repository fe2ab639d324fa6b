use super::ranking::Ranking;
use crate::cards::rank::Rank;

/// A hand's tie-break within its category.
///
/// Rank indices packed in 4-bit fields, most significant first: for a pair,
/// the paired rank in bits 12..16 then three kickers. Fields never exceed 12,
/// so integer comparison orders hands of the *same* [`Ranking`]. Values from
/// different categories are not comparable.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers(u32);

impl Kickers {
    /// widest layout is five fields
    pub const BITS: u32 = 20;

    /// pack rank indices, most significant first
    pub fn pack(ranks: impl IntoIterator<Item = u8>) -> Self {
        Self(ranks.into_iter().fold(0u32, |acc, r| acc << 4 | r as u32))
    }
    /// unpack the fields a category is known to carry
    pub fn ranks(&self, ranking: Ranking) -> Vec<Rank> {
        (0..ranking.n_fields())
            .rev()
            .map(|i| (self.0 >> (4 * i)) & 0xF)
            .map(|n| Rank::from(n as u8))
            .collect()
    }
}

/// u32 isomorphism
impl From<Kickers> for u32 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<u32> for Kickers {
    fn from(n: u32) -> Self {
        Self(n)
    }
}
