//! A standard 52-card deck.

use alloc::vec::Vec;

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// A single deck of playing cards.
///
/// Cards are dealt from the end of the internal vector, so a freshly built
/// [`Deck::standard`] deals the king of spades first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled deck in suit-major order.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck shuffled with the given seed.
    ///
    /// ```
    /// use cribrs::Deck;
    ///
    /// assert_eq!(Deck::shuffled(7), Deck::shuffled(7));
    /// ```
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Self::standard();
        deck.shuffle(&mut rng);
        deck
    }

    /// Shuffles the cards still in the deck.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals the top card.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the cards still in the deck.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards of this deck that are not in `held`.
    ///
    /// This is the `remaining_deck` the discard selector samples from.
    #[must_use]
    pub fn without(&self, held: &[Card]) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|card| !held.contains(card))
            .copied()
            .collect()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
