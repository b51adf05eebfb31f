//! The mutable integer sequence being sorted.
//!
//! `SequenceModel` owns the values and their derived bounds. Bounds are
//! recomputed only on wholesale replacement: a swap never changes the
//! multiset of values, so it never changes the bounds either.

use serde::{Deserialize, Serialize};

use super::Direction;

/// An ordered, in-place mutable sequence of integers with cached bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceModel {
    values: Vec<i64>,
    /// `(min, max)`; `None` when the sequence is empty.
    bounds: Option<(i64, i64)>,
}

impl SequenceModel {
    /// Create a model holding `values`.
    #[must_use]
    pub fn new(values: Vec<i64>) -> Self {
        let mut model = Self::default();
        model.replace(values);
        model
    }

    /// Install a new sequence and recompute the bounds.
    ///
    /// An empty sequence is accepted; its bounds are undefined and reported
    /// as `None`.
    pub fn replace(&mut self, values: Vec<i64>) {
        self.bounds = values
            .iter()
            .fold(None, |acc: Option<(i64, i64)>, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            });
        self.values = values;
    }

    /// Exchange the elements at positions `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range. Only a defective sort variant
    /// can trigger this; it is not a recoverable condition.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.values.swap(i, j);
    }

    /// Current values.
    #[must_use]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the sequence has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest value, or `None` for an empty sequence.
    #[must_use]
    pub fn min_value(&self) -> Option<i64> {
        self.bounds.map(|(lo, _)| lo)
    }

    /// Largest value, or `None` for an empty sequence.
    #[must_use]
    pub fn max_value(&self) -> Option<i64> {
        self.bounds.map(|(_, hi)| hi)
    }

    /// Whether every adjacent pair is ordered under `direction`.
    #[must_use]
    pub fn is_sorted(&self, direction: Direction) -> bool {
        self.values
            .windows(2)
            .all(|w| direction.is_ordered(w[0], w[1]))
    }

    /// Values in ascending order, independent of current arrangement.
    ///
    /// Two models hold the same multiset exactly when their fingerprints
    /// are equal.
    #[must_use]
    pub fn multiset_fingerprint(&self) -> Vec<i64> {
        let mut sorted = self.values.clone();
        sorted.sort_unstable();
        sorted
    }
}

impl From<Vec<i64>> for SequenceModel {
    fn from(values: Vec<i64>) -> Self {
        Self::new(values)
    }
}
