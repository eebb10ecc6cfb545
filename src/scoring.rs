//! Hand scoring.
//!
//! A hand is counted together with the starter as a five-card evaluation set.
//! Fifteens count every qualifying subset. Sets and runs are scanned from the
//! largest size down, and anything already covered by a larger match is
//! skipped, so a three of a kind is not also counted as three pairs and a run
//! of four is not also counted as two runs of three.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::breakdown::{Category, Descriptor, Score, ScoreEvent};
use crate::card::{Card, first_duplicate};
use crate::combinations::index_combinations;
use crate::error::ScoreError;

/// Number of cards in a scored hand or crib, starter excluded.
pub const HAND_SIZE: usize = 4;

const EVAL_SIZE: usize = HAND_SIZE + 1;

/// Bitmask over positions of the evaluation set.
type Mask = u8;

fn mask_of(indices: &[usize]) -> Mask {
    indices.iter().fold(0, |mask, &i| mask | (1u8 << i))
}

/// Scores a four-card hand (or crib) with its starter.
///
/// With `is_crib` set, a four-card flush only counts when the starter
/// matches as well.
///
/// # Errors
///
/// Returns [`ScoreError::InvalidHandSize`] if `hand` does not hold exactly
/// four cards, and [`ScoreError::DuplicateCard`] if any card appears twice
/// across hand and starter.
///
/// # Example
///
/// ```
/// use cribrs::{Card, Suit, score_hand};
///
/// let hand = [
///     Card::new(Suit::Clubs, 5),
///     Card::new(Suit::Hearts, 6),
///     Card::new(Suit::Diamonds, 7),
///     Card::new(Suit::Spades, 8),
/// ];
/// let score = score_hand(&hand, Card::new(Suit::Clubs, 9), false).unwrap();
/// assert_eq!(score.total, 9);
/// ```
pub fn score_hand(hand: &[Card], starter: Card, is_crib: bool) -> Result<Score, ScoreError> {
    if hand.len() != HAND_SIZE {
        return Err(ScoreError::InvalidHandSize {
            expected: HAND_SIZE,
            found: hand.len(),
        });
    }

    let mut cards = [starter; EVAL_SIZE];
    cards[..HAND_SIZE].copy_from_slice(hand);
    check_unique(&cards)?;

    let mut score = Score::default();
    score_fifteens(&cards, &mut score);
    score_flush(hand, starter, is_crib, &mut score);
    score_kinds(&cards, &mut score);
    score_runs(&cards, &mut score);
    score_nobs(hand, starter, &mut score);

    log::trace!("scored {} event(s) for {}", score.events.len(), score.total);

    Ok(score)
}

/// Points pegged by the dealer when the cut starter is a jack ("his heels").
///
/// This is scored at the cut, not as part of any hand.
#[must_use]
pub const fn his_heels(starter: Card) -> u32 {
    if starter.is_jack() { 2 } else { 0 }
}

fn check_unique(cards: &[Card]) -> Result<(), ScoreError> {
    first_duplicate(cards).map_or(Ok(()), |card| Err(ScoreError::DuplicateCard(card)))
}

fn score_fifteens(cards: &[Card; EVAL_SIZE], score: &mut Score) {
    let count = (2..=EVAL_SIZE)
        .flat_map(|size| index_combinations(EVAL_SIZE, size))
        .filter(|indices| indices.iter().map(|&i| u32::from(cards[i].points())).sum::<u32>() == 15)
        .count() as u8;

    if count > 0 {
        score.push(ScoreEvent::new(
            Category::Fifteens { count },
            None,
            2 * u32::from(count),
        ));
    }
}

fn score_flush(hand: &[Card], starter: Card, is_crib: bool, score: &mut Score) {
    let suit = hand[0].suit;
    if hand.iter().any(|card| card.suit != suit) {
        return;
    }

    if starter.suit == suit {
        score.push(ScoreEvent::new(
            Category::FlushRoyal,
            Some(Descriptor::Suit(suit)),
            5,
        ));
    } else if !is_crib {
        score.push(ScoreEvent::new(Category::Flush, Some(Descriptor::Suit(suit)), 4));
    }
}

const fn kind_points(size: usize) -> u32 {
    match size {
        4 => 12,
        3 => 6,
        2 => 2,
        _ => 0,
    }
}

fn score_kinds(cards: &[Card; EVAL_SIZE], score: &mut Score) {
    let mut excluded: HashSet<Mask> = HashSet::new();

    for size in (2..=HAND_SIZE).rev() {
        for indices in index_combinations(EVAL_SIZE, size) {
            if excluded.contains(&mask_of(&indices)) {
                continue;
            }
            let rank = cards[indices[0]].rank;
            if indices.iter().any(|&i| cards[i].rank != rank) {
                continue;
            }

            score.push(ScoreEvent::new(
                Category::OfAKind(size as u8),
                Some(Descriptor::Rank(rank)),
                kind_points(size),
            ));

            for smaller in 2..size {
                for sub in index_combinations(size, smaller) {
                    let members: Vec<usize> = sub.iter().map(|&j| indices[j]).collect();
                    excluded.insert(mask_of(&members));
                }
            }
        }
    }
}

fn is_run(sorted: &[Card]) -> bool {
    sorted.windows(2).all(|pair| pair[0].rank.checked_add(1) == Some(pair[1].rank))
}

fn score_runs(cards: &[Card; EVAL_SIZE], score: &mut Score) {
    let mut sorted = *cards;
    sorted.sort_unstable();

    let mut excluded: HashSet<Mask> = HashSet::new();

    for size in (3..=EVAL_SIZE).rev() {
        for indices in index_combinations(EVAL_SIZE, size) {
            if excluded.contains(&mask_of(&indices)) {
                continue;
            }
            let run: Vec<Card> = indices.iter().map(|&i| sorted[i]).collect();
            if !is_run(&run) {
                continue;
            }

            score.push(ScoreEvent::new(
                Category::Run(size as u8),
                Some(Descriptor::Span {
                    low: run[0].rank,
                    high: run[size - 1].rank,
                }),
                size as u32,
            ));

            for width in 3..size {
                for window in indices.windows(width) {
                    excluded.insert(mask_of(window));
                }
            }
        }
    }
}

fn score_nobs(hand: &[Card], starter: Card, score: &mut Score) {
    if starter.is_jack() {
        return;
    }
    if hand
        .iter()
        .any(|card| card.is_jack() && card.suit == starter.suit)
    {
        score.push(ScoreEvent::new(Category::Nobs, None, 1));
    }
}
