//! Monte-Carlo discard selection.
//!
//! Each of the fifteen ways to throw two cards from a six-card deal is
//! evaluated against the same sample of simulated starters. The kept four
//! cards are scored as a hand, the thrown pair plus two simulated filler cards
//! as the crib, and the crib counts for or against the player depending on who
//! owns it.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use rand::Rng;
use rand::SeedableRng;
use rand::seq::index;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, first_duplicate};
use crate::combinations::index_combinations;
use crate::error::DiscardError;
use crate::options::DiscardOptions;
use crate::scoring::{HAND_SIZE, score_hand};

/// Number of cards dealt to each player before the discard.
pub const DEAL_SIZE: usize = 6;

/// Number of simulated cards added to the thrown pair to complete a crib.
const FILLER_COUNT: usize = 2;

/// Number of two-card discards from a six-card deal.
pub const DISCARD_COUNT: usize = 15;

/// Cards drawn from the remaining deck for one discard decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// Simulated starter cards.
    pub starters: Vec<Card>,
    /// Simulated cards completing the crib.
    pub fillers: [Card; FILLER_COUNT],
}

/// A two-card discard with its accumulated expected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// The thrown cards, in hand order.
    pub discards: (Card, Card),
    /// Sum over simulated starters of hand points plus (or minus) crib points.
    pub expected_value: i64,
    /// Number of simulated starters the value was accumulated over.
    pub samples: usize,
}

impl Candidate {
    /// Returns the expected net points per starter.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "sampled totals are far below f64 precision limits"
    )]
    pub fn mean(&self) -> f64 {
        if self.samples == 0 {
            0.0
        } else {
            self.expected_value as f64 / self.samples as f64
        }
    }
}

fn check_hand(hand: &[Card]) -> Result<(), DiscardError> {
    if hand.len() != DEAL_SIZE {
        return Err(DiscardError::InvalidHandSize {
            expected: DEAL_SIZE,
            found: hand.len(),
        });
    }
    first_duplicate(hand).map_or(Ok(()), |card| Err(DiscardError::DuplicateCard(card)))
}

fn check_remaining(hand: &[Card], remaining_deck: &[Card]) -> Result<(), DiscardError> {
    let mut seen: HashSet<Card> = hand.iter().copied().collect();
    for card in remaining_deck {
        if !seen.insert(*card) {
            return Err(DiscardError::DuplicateCard(*card));
        }
    }
    Ok(())
}

/// Draws `sample_size` starters and two crib fillers without replacement.
///
/// # Errors
///
/// Returns [`DiscardError::InsufficientDeck`] if `remaining_deck` holds fewer
/// than `sample_size + 2` cards.
pub fn draw_sample<R: Rng + ?Sized>(
    remaining_deck: &[Card],
    sample_size: usize,
    rng: &mut R,
) -> Result<Sample, DiscardError> {
    let needed = sample_size.saturating_add(FILLER_COUNT);
    if remaining_deck.len() < needed {
        return Err(DiscardError::InsufficientDeck {
            needed,
            available: remaining_deck.len(),
        });
    }

    let drawn: Vec<Card> = index::sample(rng, remaining_deck.len(), needed)
        .into_iter()
        .map(|i| remaining_deck[i])
        .collect();

    Ok(Sample {
        starters: drawn[..sample_size].to_vec(),
        fillers: [drawn[sample_size], drawn[sample_size + 1]],
    })
}

/// Evaluates all fifteen discards of `hand` against fixed starters and fillers.
///
/// Candidates are returned in enumeration order: pairs of hand positions in
/// lexicographic order.
///
/// # Errors
///
/// Returns an error if the hand does not hold six distinct cards, or if a
/// starter or filler collides with a hand card.
pub fn evaluate_discards(
    hand: &[Card],
    owns_crib: bool,
    starters: &[Card],
    fillers: [Card; FILLER_COUNT],
) -> Result<[Candidate; DISCARD_COUNT], DiscardError> {
    check_hand(hand)?;

    let mut candidates = [Candidate {
        discards: (hand[0], hand[1]),
        expected_value: 0,
        samples: starters.len(),
    }; DISCARD_COUNT];

    for (slot, pair) in candidates.iter_mut().zip(index_combinations(DEAL_SIZE, 2)) {
        let (first, second) = (hand[pair[0]], hand[pair[1]]);
        let kept: Vec<Card> = hand
            .iter()
            .enumerate()
            .filter(|(i, _)| !pair.contains(i))
            .map(|(_, card)| *card)
            .collect();
        debug_assert_eq!(kept.len(), HAND_SIZE);
        let crib = [first, second, fillers[0], fillers[1]];

        let mut expected_value: i64 = 0;
        for &starter in starters {
            let hand_points = i64::from(score_hand(&kept, starter, false)?.total);
            let crib_points = i64::from(score_hand(&crib, starter, true)?.total);
            expected_value += if owns_crib {
                hand_points + crib_points
            } else {
                hand_points - crib_points
            };
        }

        log::trace!("discarding {first} and {second}: {expected_value}");

        slot.discards = (first, second);
        slot.expected_value = expected_value;
    }

    Ok(candidates)
}

/// Returns the candidate with the strictly greatest expected value.
///
/// Ties keep the earliest candidate.
#[must_use]
pub fn best_candidate(candidates: &[Candidate; DISCARD_COUNT]) -> &Candidate {
    let [first, rest @ ..] = candidates;
    rest.iter().fold(first, |best, candidate| {
        if candidate.expected_value > best.expected_value {
            candidate
        } else {
            best
        }
    })
}

/// Recommends which two cards to throw from a six-card deal.
///
/// `remaining_deck` is every card the player cannot see; `sample_size`
/// starters and two crib fillers are drawn from it using `rng`. Neither the
/// hand nor the deck is modified.
///
/// # Errors
///
/// Returns [`DiscardError::InvalidHandSize`] if the hand does not hold six
/// cards, [`DiscardError::DuplicateCard`] if a card is repeated in the hand or
/// also appears in the remaining deck, and [`DiscardError::InsufficientDeck`]
/// if fewer than `sample_size + 2` cards remain.
///
/// # Example
///
/// ```
/// use cribrs::{Deck, recommend_discard};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut deck = Deck::shuffled(3);
/// let hand: Vec<_> = (0..6).filter_map(|_| deck.deal()).collect();
/// let remaining = Deck::standard().without(&hand);
///
/// let mut rng = ChaCha8Rng::seed_from_u64(11);
/// let (a, b) = recommend_discard(&hand, true, &remaining, 10, &mut rng).unwrap();
/// assert!(hand.contains(&a) && hand.contains(&b) && a != b);
/// ```
pub fn recommend_discard<R: Rng + ?Sized>(
    hand: &[Card],
    owns_crib: bool,
    remaining_deck: &[Card],
    sample_size: usize,
    rng: &mut R,
) -> Result<(Card, Card), DiscardError> {
    check_hand(hand)?;
    check_remaining(hand, remaining_deck)?;

    let sample = draw_sample(remaining_deck, sample_size, rng)?;
    let candidates = evaluate_discards(hand, owns_crib, &sample.starters, sample.fillers)?;
    let best = best_candidate(&candidates);

    log::debug!(
        "throwing {} and {} (expected {:.2} per starter, {} crib)",
        best.discards.0,
        best.discards.1,
        best.mean(),
        if owns_crib { "own" } else { "opponent's" }
    );

    Ok(best.discards)
}

/// Recommends a discard with a reproducible seed, or OS entropy when `seed`
/// is `None`.
///
/// # Errors
///
/// See [`recommend_discard`].
#[cfg(feature = "std")]
pub fn recommend_discard_seeded(
    hand: &[Card],
    owns_crib: bool,
    remaining_deck: &[Card],
    sample_size: usize,
    seed: Option<u64>,
) -> Result<(Card, Card), DiscardError> {
    let mut rng = seed.map_or_else(ChaCha8Rng::from_os_rng, ChaCha8Rng::seed_from_u64);
    recommend_discard(hand, owns_crib, remaining_deck, sample_size, &mut rng)
}

/// A discard advisor that owns its random source.
///
/// Two selectors built with the same options and seed give the same
/// recommendations for the same sequence of calls.
#[derive(Debug, Clone)]
pub struct DiscardSelector {
    /// Selector options.
    pub options: DiscardOptions,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl DiscardSelector {
    /// Creates a selector seeded with `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::{DiscardOptions, DiscardSelector};
    ///
    /// let selector = DiscardSelector::new(DiscardOptions::default(), 42);
    /// assert_eq!(selector.options.sample_size, 10);
    /// ```
    #[must_use]
    pub fn new(options: DiscardOptions, seed: u64) -> Self {
        Self {
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Recommends which two cards to throw. See [`recommend_discard`].
    ///
    /// # Errors
    ///
    /// See [`recommend_discard`].
    pub fn recommend(
        &mut self,
        hand: &[Card],
        owns_crib: bool,
        remaining_deck: &[Card],
    ) -> Result<(Card, Card), DiscardError> {
        recommend_discard(
            hand,
            owns_crib,
            remaining_deck,
            self.options.sample_size,
            &mut self.rng,
        )
    }
}
