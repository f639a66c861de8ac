//! PostgreSQL Repository Implementations

use crate::domain::entities::Card;
use crate::domain::repository::CardRepository;
use crate::domain::value_objects::{Rank, Suit};
use crate::error::{CardsError, CardsResult};
use sqlx::PgPool;

/// PostgreSQL-backed card source reading the seeded `cards` table
#[derive(Clone)]
pub struct PgCardRepository {
    pool: PgPool,
}

impl PgCardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Number of stored card rows
    pub async fn count(&self) -> CardsResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM cards")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

impl CardRepository for PgCardRepository {
    async fn list_cards(&self) -> CardsResult<Vec<Card>> {
        let rows = sqlx::query_as::<_, CardRow>(
            r#"
            SELECT suit, rank
            FROM cards
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(rows = rows.len(), "Loaded cards");

        rows.into_iter().map(CardRow::into_card).collect()
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct CardRow {
    suit: String,
    rank: String,
}

impl CardRow {
    fn into_card(self) -> CardsResult<Card> {
        match (
            Suit::from_code(self.suit.trim()),
            Rank::from_code(self.rank.trim()),
        ) {
            (Some(suit), Some(rank)) => Ok(Card::new(suit, rank)),
            _ => Err(CardsError::InvalidCardRecord {
                suit: self.suit,
                rank: self.rank,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(suit: &str, rank: &str) -> CardRow {
        CardRow {
            suit: suit.to_string(),
            rank: rank.to_string(),
        }
    }

    #[test]
    fn test_row_into_card() {
        let card = row("H", "X").into_card().unwrap();
        assert_eq!(card, Card::new(Suit::Hearts, Rank::Ten));
    }

    #[test]
    fn test_row_with_unknown_code() {
        let err = row("Z", "A").into_card().unwrap_err();
        assert!(matches!(err, CardsError::InvalidCardRecord { .. }));
        assert!(!err.is_irregularity());
    }
}
