//! Domain Services
//!
//! Pure dealing logic. No I/O; randomness is supplied by the caller.

use crate::domain::entities::{Card, DealError, Deck, Distribution, Hand, HandAllocationError};
use crate::domain::value_objects::NumberOfPeople;
use rand::Rng;

/// Deal a deck round-robin: the card at position `i` goes to hand `i % n`.
///
/// When 52 is not divisible by `n` the lowest-indexed hands get the extra
/// card. Participants past the 52nd get an empty hand.
///
/// The hand list is reserved up front and an unsatisfiable count is
/// reported instead of aborting the process.
pub fn deal(
    deck: Deck,
    number_of_people: NumberOfPeople,
) -> Result<Distribution, HandAllocationError> {
    let n = number_of_people.get();
    let mut hands = Vec::new();
    hands
        .try_reserve_exact(n)
        .map_err(|_| HandAllocationError { requested: n })?;
    hands.resize_with(n, Hand::default);
    for (index, card) in deck.into_cards().into_iter().enumerate() {
        hands[index % n].push(card);
    }
    Ok(Distribution::new(hands))
}

/// Check the supplied cards form a complete deck, shuffle it and deal it.
///
/// Nothing is dealt when the deck check fails.
pub fn distribute<R: Rng + ?Sized>(
    cards: Vec<Card>,
    number_of_people: NumberOfPeople,
    rng: &mut R,
) -> Result<Distribution, DealError> {
    let mut deck = Deck::from_cards(cards)?;
    deck.shuffle(rng);
    deal(deck, number_of_people).map_err(DealError::from)
}
