//! In-memory card source
//!
//! Used when no database is configured, and in tests.

use crate::domain::entities::{Card, Deck};
use crate::domain::repository::CardRepository;
use crate::error::CardsResult;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct InMemoryCardRepository {
    cards: Arc<[Card]>,
}

impl InMemoryCardRepository {
    /// The 52 canonical cards
    pub fn standard() -> Self {
        Self::from_cards(Deck::standard().into_cards())
    }

    /// Serve exactly these cards, complete or not
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }
}

impl Default for InMemoryCardRepository {
    fn default() -> Self {
        Self::standard()
    }
}

impl CardRepository for InMemoryCardRepository {
    async fn list_cards(&self) -> CardsResult<Vec<Card>> {
        Ok(self.cards.to_vec())
    }
}
