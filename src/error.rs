//! Error types for scoring and discard selection.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while scoring a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The hand does not hold the required number of cards.
    #[error("hand must hold {expected} cards, found {found}")]
    InvalidHandSize {
        /// Required number of cards.
        expected: usize,
        /// Number of cards supplied.
        found: usize,
    },
    /// A card appears more than once across hand and starter.
    #[error("{0} appears more than once")]
    DuplicateCard(Card),
}

/// Errors that can occur while picking discards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiscardError {
    /// The hand does not hold the required number of cards.
    #[error("hand must hold {expected} cards, found {found}")]
    InvalidHandSize {
        /// Required number of cards.
        expected: usize,
        /// Number of cards supplied.
        found: usize,
    },
    /// A card appears twice in the hand, or the remaining deck holds a hand card.
    #[error("{0} appears more than once")]
    DuplicateCard(Card),
    /// Not enough cards left to draw the sample from.
    #[error("need {needed} cards to sample from, only {available} remain")]
    InsufficientDeck {
        /// Cards required (`sample_size + 2`).
        needed: usize,
        /// Cards supplied.
        available: usize,
    },
    /// Scoring a simulated hand failed.
    #[error(transparent)]
    Score(#[from] ScoreError),
}
