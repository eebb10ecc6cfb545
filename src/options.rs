//! Discard selector configuration.

/// Default number of simulated starters per discard decision.
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// Configuration options for a [`DiscardSelector`](crate::DiscardSelector).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cribrs::DiscardOptions;
///
/// let options = DiscardOptions::default().with_sample_size(24);
/// assert_eq!(options.sample_size, 24);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiscardOptions {
    /// Number of starter cards to simulate. Two more cards are drawn as crib
    /// fillers, so the remaining deck must hold at least `sample_size + 2`.
    pub sample_size: usize,
}

impl Default for DiscardOptions {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl DiscardOptions {
    /// Sets the number of simulated starters.
    #[must_use]
    pub const fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }
}
