//! Lazy k-combination enumeration.
//!
//! Combinations are chosen by position and come out in lexicographic order of
//! their indices, so each one keeps the relative order of `items`:
//!
//! ```
//! use cribrs::combinations;
//!
//! let pairs: Vec<Vec<char>> = combinations(&['a', 'b', 'c'], 2).collect();
//! assert_eq!(pairs, vec![vec!['a', 'b'], vec!['a', 'c'], vec!['b', 'c']]);
//! ```

use alloc::vec::Vec;

/// Iterator over the k-subsets of positions `0..n`.
#[derive(Debug, Clone)]
pub struct IndexCombinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl IndexCombinations {
    fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            done: k > n,
        }
    }

    /// Moves `indices` to the next combination, or marks the iterator done.
    fn advance(&mut self) {
        let k = self.indices.len();
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) else {
            self.done = true;
            return;
        };
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
    }
}

impl Iterator for IndexCombinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();
        self.advance();
        Some(current)
    }
}

/// Returns every k-subset of the positions `0..n`.
///
/// `k == 0` yields a single empty combination; `k > n` yields nothing.
#[must_use]
pub fn index_combinations(n: usize, k: usize) -> IndexCombinations {
    IndexCombinations::new(n, k)
}

/// Iterator over the k-combinations of a slice.
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: IndexCombinations,
}

impl<T: Clone> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.indices
            .next()
            .map(|indices| indices.iter().map(|&i| self.items[i].clone()).collect())
    }
}

/// Returns every k-element combination of `items`.
///
/// Each call starts a fresh enumeration; nothing is shared between iterators.
#[must_use]
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Combinations<'_, T> {
    Combinations {
        items,
        indices: index_combinations(items.len(), k),
    }
}
