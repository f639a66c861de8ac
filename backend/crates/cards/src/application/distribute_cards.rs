//! Distribute Cards Use Case

use crate::application::config::CardsConfig;
use crate::domain::entities::{Card, Distribution};
use crate::domain::repository::CardRepository;
use crate::domain::services;
use crate::domain::value_objects::NumberOfPeople;
use crate::error::CardsResult;
use rand::Rng;
use std::sync::Arc;

/// Distribute Cards Use Case
///
/// Stateless: every call loads its own deck, so concurrent requests never
/// share one.
pub struct DistributeCardsUseCase<C>
where
    C: CardRepository,
{
    card_repo: Arc<C>,
    config: Arc<CardsConfig>,
}

impl<C> DistributeCardsUseCase<C>
where
    C: CardRepository,
{
    pub fn new(card_repo: Arc<C>, config: Arc<CardsConfig>) -> Self {
        Self { card_repo, config }
    }

    /// Deal a freshly shuffled deck using the thread-local RNG
    pub async fn execute(&self, number_of_people: i64) -> CardsResult<Distribution> {
        let (number_of_people, cards) = self.load(number_of_people).await?;
        let distribution = services::distribute(cards, number_of_people, &mut rand::rng())?;
        Self::record(&distribution);
        Ok(distribution)
    }

    /// Same as [`execute`](Self::execute) with a caller-supplied RNG
    pub async fn execute_with_rng<R>(
        &self,
        number_of_people: i64,
        rng: &mut R,
    ) -> CardsResult<Distribution>
    where
        R: Rng + ?Sized,
    {
        let (number_of_people, cards) = self.load(number_of_people).await?;
        let distribution = services::distribute(cards, number_of_people, rng)?;
        Self::record(&distribution);
        Ok(distribution)
    }

    /// Validate first so a bad count never touches the card source
    async fn load(&self, number_of_people: i64) -> CardsResult<(NumberOfPeople, Vec<Card>)> {
        let number_of_people =
            NumberOfPeople::new(number_of_people, self.config.max_number_of_people)?;
        let cards = self.card_repo.list_cards().await?;
        Ok((number_of_people, cards))
    }

    fn record(distribution: &Distribution) {
        tracing::info!(
            people = distribution.len(),
            cards = distribution.card_count(),
            "Distributed cards"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Deck;
    use crate::error::CardsError;
    use crate::infra::memory::InMemoryCardRepository;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Card source that counts how often it is asked
    #[derive(Default)]
    struct CountingRepository {
        calls: AtomicUsize,
    }

    impl CardRepository for CountingRepository {
        async fn list_cards(&self) -> CardsResult<Vec<Card>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Deck::standard().into_cards())
        }
    }

    fn use_case(repo: InMemoryCardRepository) -> DistributeCardsUseCase<InMemoryCardRepository> {
        DistributeCardsUseCase::new(Arc::new(repo), Arc::new(CardsConfig::default()))
    }

    #[tokio::test]
    async fn test_execute_deals_full_deck() {
        let distribution = use_case(InMemoryCardRepository::standard())
            .execute(4)
            .await
            .unwrap();
        assert_eq!(distribution.len(), 4);
        assert_eq!(distribution.card_count(), 52);
    }

    #[tokio::test]
    async fn test_execute_with_seeded_rng_is_reproducible() {
        let use_case = use_case(InMemoryCardRepository::standard());
        let a = use_case
            .execute_with_rng(5, &mut StdRng::seed_from_u64(1))
            .await
            .unwrap();
        let b = use_case
            .execute_with_rng(5, &mut StdRng::seed_from_u64(1))
            .await
            .unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_invalid_count_skips_card_source() {
        let repo = Arc::new(CountingRepository::default());
        let use_case = DistributeCardsUseCase::new(repo.clone(), Arc::new(CardsConfig::default()));

        for n in [0, -1, -5] {
            let err = use_case.execute(n).await.unwrap_err();
            assert!(matches!(err, CardsError::Validation(_)));
        }
        assert_eq!(repo.calls.load(Ordering::SeqCst), 0);

        use_case.execute(2).await.unwrap();
        assert_eq!(repo.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_incomplete_source_is_irregular() {
        let mut cards = Deck::standard().into_cards();
        cards.truncate(51);
        let err = use_case(InMemoryCardRepository::from_cards(cards))
            .execute(4)
            .await
            .unwrap_err();

        assert!(err.is_irregularity());
        assert_eq!(err.to_string(), "Irregularity occurred: Deck is incomplete");
    }

    #[tokio::test]
    async fn test_configured_cap() {
        let use_case = DistributeCardsUseCase::new(
            Arc::new(InMemoryCardRepository::standard()),
            Arc::new(CardsConfig::with_max_number_of_people(10)),
        );
        assert!(use_case.execute(10).await.is_ok());
        assert!(matches!(
            use_case.execute(11).await,
            Err(CardsError::Validation(_))
        ));
    }
}
