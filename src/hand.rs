//! Hand representation.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::breakdown::Score;
use crate::card::Card;
use crate::error::ScoreError;
use crate::scoring::score_hand;

/// An ordered set of cards held by a player, or the crib.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in the order they were received.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// Adds a card to the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes the first card equal to `card`, returning it if it was held.
    pub fn discard(&mut self, card: Card) -> Option<Card> {
        let index = self.cards.iter().position(|held| *held == card)?;
        Some(self.cards.remove(index))
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Scores the hand with the given starter.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand does not hold four cards or a card is
    /// repeated. See [`score_hand`].
    pub fn score(&self, starter: Card, is_crib: bool) -> Result<Score, ScoreError> {
        score_hand(&self.cards, starter, is_crib)
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

/// Lists the cards as `a, b and c`.
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((last, rest)) = self.cards.split_last() else {
            return f.write_str("an empty hand");
        };
        for (i, card) in rest.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        if rest.is_empty() {
            write!(f, "{last}")
        } else {
            write!(f, " and {last}")
        }
    }
}
