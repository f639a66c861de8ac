//! Repository Traits
//!
//! Interfaces for the card source. Implementations live in the infra layer.

use crate::domain::entities::Card;
use crate::error::CardsResult;

/// Card source trait
#[trait_variant::make(CardRepository: Send)]
pub trait LocalCardRepository {
    /// List the canonical cards in a stable order
    ///
    /// A healthy source yields exactly 52 distinct cards; the caller checks.
    async fn list_cards(&self) -> CardsResult<Vec<Card>>;
}
