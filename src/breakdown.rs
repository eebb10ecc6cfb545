//! Itemized score breakdown types.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Suit, rank_name, rank_plural};

/// Scoring category of a breakdown event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Every card subset summing to fifteen, counted together.
    Fifteens {
        /// Number of distinct subsets summing to fifteen.
        count: u8,
    },
    /// Four hand cards of one suit, starter excluded.
    Flush,
    /// All five cards of one suit.
    FlushRoyal,
    /// Two, three or four cards of one rank.
    OfAKind(u8),
    /// A run of three, four or five consecutive ranks.
    Run(u8),
    /// The jack of the starter's suit held in hand.
    Nobs,
}

/// Extra detail attached to a breakdown event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Descriptor {
    /// The rank shared by a pair or set.
    Rank(u8),
    /// The suit of a flush.
    Suit(Suit),
    /// The lowest and highest rank of a run.
    Span {
        /// Lowest rank in the run.
        low: u8,
        /// Highest rank in the run.
        high: u8,
    },
}

/// A single scoring event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreEvent {
    /// What scored.
    pub category: Category,
    /// Optional detail (rank, suit or run span).
    pub descriptor: Option<Descriptor>,
    /// Points awarded for this event.
    pub points: u32,
}

impl ScoreEvent {
    pub(crate) const fn new(category: Category, descriptor: Option<Descriptor>, points: u32) -> Self {
        Self {
            category,
            descriptor,
            points,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Fifteens { count: 1 } => f.write_str("1 fifteen"),
            Self::Fifteens { count } => write!(f, "{count} fifteens"),
            Self::Flush => f.write_str("flush"),
            Self::FlushRoyal => f.write_str("flush royal"),
            Self::OfAKind(2) => f.write_str("pair"),
            Self::OfAKind(n) => write!(f, "{n} of a kind"),
            Self::Run(n) => write!(f, "run of {n}"),
            Self::Nobs => f.write_str("nobs"),
        }
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Rank(rank) => f.write_str(rank_plural(rank)),
            Self::Suit(suit) => write!(f, "{suit}"),
            Self::Span { low, high } => write!(f, "{} to {}", rank_name(low), rank_name(high)),
        }
    }
}

/// Renders narration such as `pair of fives for 2` or `2 fifteens for 4`.
impl fmt::Display for ScoreEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.descriptor {
            Some(span @ Descriptor::Span { .. }) => {
                write!(f, "{} from {} for {}", self.category, span, self.points)
            }
            Some(descriptor) => write!(f, "{} of {} for {}", self.category, descriptor, self.points),
            None => write!(f, "{} for {}", self.category, self.points),
        }
    }
}

/// Result of scoring one hand with its starter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Score {
    /// Sum of all event points.
    pub total: u32,
    /// Events in the order fifteens, flush, n-of-a-kind, runs, nobs.
    pub events: Vec<ScoreEvent>,
}

impl Score {
    pub(crate) fn push(&mut self, event: ScoreEvent) {
        self.total += event.points;
        self.events.push(event);
    }

    /// Returns the points scored in events matching `predicate`.
    #[must_use]
    pub fn points_where(&self, predicate: impl Fn(&Category) -> bool) -> u32 {
        self.events
            .iter()
            .filter(|event| predicate(&event.category))
            .map(|event| event.points)
            .sum()
    }
}
