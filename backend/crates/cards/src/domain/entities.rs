//! Domain Entities
//!
//! Cards, the deck they form, and the hands they are dealt into.
//! Everything here is request-scoped and owned by the caller.

use crate::domain::value_objects::{Rank, Suit};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Card
// ============================================================================

/// A single playing card, rendered as `"<suit>-<rank>"` (e.g. `S-A`, `H-X`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.suit, self.rank)
    }
}

/// Error returned when a card string is not in `"<suit>-<rank>"` form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardParseError(pub String);

impl fmt::Display for CardParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid card '{}'", self.0)
    }
}

impl std::error::Error for CardParseError {}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (suit, rank) = s
            .split_once('-')
            .ok_or_else(|| CardParseError(s.to_string()))?;
        match (Suit::from_code(suit), Rank::from_code(rank)) {
            (Some(suit), Some(rank)) => Ok(Card::new(suit, rank)),
            _ => Err(CardParseError(s.to_string())),
        }
    }
}

// ============================================================================
// Deck
// ============================================================================

/// Error returned when a card set cannot form a complete deck
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// Not exactly 52 distinct cards
    Incomplete { len: usize, distinct: usize },
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete { .. } => write!(f, "Deck is incomplete"),
        }
    }
}

impl std::error::Error for DeckError {}

/// A complete 52-card deck
///
/// # Invariants
/// - Exactly [`Deck::SIZE`] cards
/// - No duplicates, so every suit × rank combination appears once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub const SIZE: usize = Suit::ALL.len() * Rank::ALL.len();

    /// Unshuffled deck in canonical order (S, H, D, C × A..K)
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(suit, rank)))
            .collect();
        Self { cards }
    }

    /// Build a deck from cards supplied by a card source
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        let distinct = cards.iter().collect::<HashSet<_>>().len();
        if cards.len() != Self::SIZE || distinct != Self::SIZE {
            return Err(DeckError::Incomplete {
                len: cards.len(),
                distinct,
            });
        }
        Ok(Self { cards })
    }

    /// Uniform in-place permutation (Fisher-Yates)
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

// ============================================================================
// Hand / Distribution
// ============================================================================

/// Error returned when a hand per participant cannot be allocated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandAllocationError {
    pub requested: usize,
}

impl fmt::Display for HandAllocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot allocate {} hands", self.requested)
    }
}

impl std::error::Error for HandAllocationError {}

/// Why a set of cards could not be dealt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DealError {
    Deck(DeckError),
    Allocation(HandAllocationError),
}

impl fmt::Display for DealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deck(e) => e.fmt(f),
            Self::Allocation(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for DealError {}

impl From<DeckError> for DealError {
    fn from(e: DeckError) -> Self {
        Self::Deck(e)
    }
}

impl From<HandAllocationError> for DealError {
    fn from(e: HandAllocationError) -> Self {
        Self::Allocation(e)
    }
}

/// Cards dealt to one participant, in deal order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Hands indexed by participant, 0-based and contiguous
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    hands: Vec<Hand>,
}

impl Distribution {
    pub(crate) fn new(hands: Vec<Hand>) -> Self {
        Self { hands }
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn into_hands(self) -> Vec<Hand> {
        self.hands
    }

    /// Number of participants
    pub fn len(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    /// Total number of cards across all hands
    pub fn card_count(&self) -> usize {
        self.hands.iter().map(Hand::len).sum()
    }
}
