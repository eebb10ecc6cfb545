//! Card types and rank names.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in deck order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Hearts, Self::Diamonds, Self::Spades];

    /// Returns the lowercase plural name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "clubs",
            Self::Hearts => "hearts",
            Self::Diamonds => "diamonds",
            Self::Spades => "spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Cards order ace-low by rank first and by suit second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    /// The suit of the card.
    pub suit: Suit,
}

/// Rank of the jack.
pub const JACK: u8 = 11;

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but count for zero points when scoring.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { rank, suit }
    }

    /// Returns the counting value of the card: aces are 1, faces are 10.
    ///
    /// ```
    /// use cribrs::{Card, Suit};
    ///
    /// assert_eq!(Card::new(Suit::Hearts, 1).points(), 1);
    /// assert_eq!(Card::new(Suit::Hearts, 7).points(), 7);
    /// assert_eq!(Card::new(Suit::Hearts, 12).points(), 10);
    /// ```
    #[must_use]
    pub const fn points(&self) -> u8 {
        match self.rank {
            1..=9 => self.rank,
            10..=13 => 10,
            _ => 0,
        }
    }

    /// Returns whether the card is a jack.
    #[must_use]
    pub const fn is_jack(&self) -> bool {
        self.rank == JACK
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", rank_name(self.rank), self.suit)
    }
}

/// Returns the first card that appears again later in `cards`.
pub(crate) fn first_duplicate(cards: &[Card]) -> Option<Card> {
    cards
        .iter()
        .enumerate()
        .find(|&(i, card)| cards[i + 1..].contains(card))
        .map(|(_, card)| *card)
}

/// Returns the spoken name of a rank ("ace", "deuce", ... "king").
#[must_use]
pub const fn rank_name(rank: u8) -> &'static str {
    match rank {
        1 => "ace",
        2 => "deuce",
        3 => "three",
        4 => "four",
        5 => "five",
        6 => "six",
        7 => "seven",
        8 => "eight",
        9 => "nine",
        10 => "ten",
        11 => "jack",
        12 => "queen",
        13 => "king",
        _ => "unknown",
    }
}

/// Returns the plural spoken name of a rank ("aces", "sixes").
#[must_use]
pub const fn rank_plural(rank: u8) -> &'static str {
    match rank {
        1 => "aces",
        2 => "deuces",
        3 => "threes",
        4 => "fours",
        5 => "fives",
        6 => "sixes",
        7 => "sevens",
        8 => "eights",
        9 => "nines",
        10 => "tens",
        11 => "jacks",
        12 => "queens",
        13 => "kings",
        _ => "unknowns",
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
