use crate::Config;
use crate::Percent;
use crate::cards::card::Card;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;
use crate::simulation::heatmap::Heatmap;
use serde::ser::SerializeStruct;
use std::collections::BTreeSet;

/// What a named draw is waiting for.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Want {
    Rank(Rank),
    Suit(Suit),
}

impl Want {
    /// every rank, then every suit
    pub fn all() -> impl Iterator<Item = Self> {
        Rank::all()
            .into_iter()
            .map(Want::Rank)
            .chain(Suit::all().into_iter().map(Want::Suit))
    }
    pub fn matches(&self, card: &Card) -> bool {
        match self {
            Want::Rank(rank) => card.rank() == *rank,
            Want::Suit(suit) => card.suit() == *suit,
        }
    }
    /// fewest beneficial cards before the group earns a name
    fn minimum(&self, config: &Config) -> usize {
        match self {
            Want::Rank(_) => config.rank_group_min,
            Want::Suit(_) => config.suit_group_min,
        }
    }
    fn kind(&self) -> &'static str {
        match self {
            Want::Rank(_) => "rank",
            Want::Suit(_) => "suit",
        }
    }
}

impl std::fmt::Display for Want {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Want::Rank(rank) => write!(f, "any {}", rank.name()),
            Want::Suit(suit) => write!(f, "any {}", suit.name()),
        }
    }
}

/// A family of next cards that would lift hero's equity, like "any Five".
#[derive(Debug, Clone, PartialEq)]
pub struct Draw {
    want: Want,
    cards: Vec<Card>,
    probability: Percent,
}

impl Draw {
    pub fn want(&self) -> Want {
        self.want
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    /// chance the next card belongs to this draw
    pub fn probability(&self) -> Percent {
        self.probability
    }
}

impl std::fmt::Display for Draw {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({:.1}%)", self.want, self.probability)
    }
}

impl serde::Serialize for Draw {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut s = serializer.serialize_struct("Draw", 4)?;
        s.serialize_field("name", &self.want.to_string())?;
        s.serialize_field("type", self.want.kind())?;
        s.serialize_field("probability", &self.probability)?;
        s.serialize_field("cards", &self.cards)?;
        s.end()
    }
}

/// Named draws distilled from a heatmap.
///
/// A card is beneficial when its equity beats current win% by more than the
/// configured margin. Ranks and suits whose tested cards are mostly
/// beneficial become named draws. The cumulative probability counts each
/// grouped card once, however many draws it belongs to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draws {
    draws: Vec<Draw>,
    probability: Percent,
}

impl Draws {
    pub fn group(heatmap: &Heatmap, win: Percent, unknown: usize, config: &Config) -> Self {
        if heatmap.is_empty() || unknown == 0 {
            return Self::default();
        }
        let beneficial = heatmap
            .iter()
            .filter(|(_, equity)| **equity > win + config.beneficial_margin)
            .map(|(card, _)| *card)
            .collect::<BTreeSet<Card>>();
        let mut draws = Want::all()
            .filter_map(|want| Self::named(want, heatmap, &beneficial, unknown, config))
            .collect::<Vec<Draw>>();
        draws.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        let union = draws
            .iter()
            .flat_map(|draw| draw.cards.iter().copied())
            .collect::<BTreeSet<Card>>();
        let probability = Self::percent(union.len(), unknown);
        log::trace!("{} draws cover {} cards", draws.len(), union.len());
        Self { draws, probability }
    }

    pub fn draws(&self) -> &[Draw] {
        &self.draws
    }
    pub fn len(&self) -> usize {
        self.draws.len()
    }
    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }
    /// chance the next card completes at least one draw
    pub fn probability(&self) -> Percent {
        self.probability
    }

    fn named(
        want: Want,
        heatmap: &Heatmap,
        beneficial: &BTreeSet<Card>,
        unknown: usize,
        config: &Config,
    ) -> Option<Draw> {
        let tested = heatmap.keys().filter(|c| want.matches(c)).count();
        let cards = beneficial
            .iter()
            .filter(|c| want.matches(c))
            .copied()
            .collect::<Vec<Card>>();
        let share = cards.len() as f32 / tested.max(1) as f32;
        match cards.len() >= want.minimum(config) && share >= config.group_share {
            false => None,
            true => Some(Draw {
                want,
                probability: Self::percent(cards.len(), unknown),
                cards,
            }),
        }
    }

    fn percent(n: usize, unknown: usize) -> Percent {
        (100.0 * n as Percent / unknown as Percent).min(100.0)
    }
}

impl From<Draws> for Vec<Draw> {
    fn from(draws: Draws) -> Self {
        draws.draws
    }
}
