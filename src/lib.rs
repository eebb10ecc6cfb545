//! A cribbage hand-scoring engine and discard advisor with optional `no_std`
//! support.
//!
//! [`score_hand`] counts a four-card hand or crib with its starter and returns
//! an itemized [`Score`]. [`recommend_discard`] estimates, by sampling the
//! unseen cards, which two cards of a six-card deal are best thrown to the
//! crib.
//!
//! # Example
//!
//! ```
//! use cribrs::{Card, Category, Suit, score_hand};
//!
//! let hand = [
//!     Card::new(Suit::Clubs, 5),
//!     Card::new(Suit::Hearts, 5),
//!     Card::new(Suit::Diamonds, 5),
//!     Card::new(Suit::Spades, 11),
//! ];
//! let score = score_hand(&hand, Card::new(Suit::Spades, 5), false).unwrap();
//! assert_eq!(score.total, 29);
//! assert_eq!(score.events.last().map(|e| e.category), Some(Category::Nobs));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod breakdown;
pub mod card;
pub mod combinations;
pub mod deck;
pub mod discard;
pub mod error;
pub mod hand;
pub mod options;
pub mod scoring;

// Re-export main types
pub use breakdown::{Category, Descriptor, Score, ScoreEvent};
pub use card::{Card, DECK_SIZE, Suit};
pub use combinations::{combinations, index_combinations};
pub use deck::Deck;
#[cfg(feature = "std")]
pub use discard::recommend_discard_seeded;
pub use discard::{
    Candidate, DEAL_SIZE, DISCARD_COUNT, DiscardSelector, Sample, best_candidate, draw_sample,
    evaluate_discards, recommend_discard,
};
pub use error::{DiscardError, ScoreError};
pub use hand::Hand;
pub use options::DiscardOptions;
pub use scoring::{HAND_SIZE, his_heels, score_hand};
