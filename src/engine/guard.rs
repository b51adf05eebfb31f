//! Invariant guard for step engines.
//!
//! Snapshots a sequence before a run and checks, after any step, that the
//! run has not broken the sequence contract:
//!
//! 1. **Multiset preservation**: the same values, only rearranged
//! 2. **Bounds**: cached min/max still enclose every value
//! 3. **Highlights in range**: reported indices address real elements
//!
//! The guard sits outside the `advance` path. The CLI `verify` command and
//! the test suites run it; the engines never consult it.

use crate::error::{SortError, SortResult};

use super::{Direction, SequenceModel, StepReport};

/// Post-step checker bound to the sequence it was armed on.
#[derive(Debug, Clone)]
pub struct InvariantGuard {
    fingerprint: Vec<i64>,
    len: usize,
    checks: u64,
}

impl InvariantGuard {
    /// Arm the guard on the current contents of `model`.
    #[must_use]
    pub fn arm(model: &SequenceModel) -> Self {
        Self {
            fingerprint: model.multiset_fingerprint(),
            len: model.len(),
            checks: 0,
        }
    }

    /// Number of successful checks so far.
    #[must_use]
    pub const fn checks(&self) -> u64 {
        self.checks
    }

    /// Check `model` and the report of the step that produced it.
    ///
    /// # Errors
    ///
    /// Returns `SortError::InvariantViolation` naming the first broken
    /// invariant.
    pub fn check(&mut self, model: &SequenceModel, report: &StepReport) -> SortResult<()> {
        if model.len() != self.len {
            return Err(SortError::invariant(
                "length",
                format!("expected {} values, found {}", self.len, model.len()),
            ));
        }

        if let Some(&index) = report.highlights.keys().find(|&&i| i >= self.len) {
            return Err(SortError::invariant(
                "highlight_range",
                format!("index {index} outside sequence of length {}", self.len),
            ));
        }

        if let (Some(lo), Some(hi)) = (model.min_value(), model.max_value()) {
            if let Some(v) = model.values().iter().find(|&&v| v < lo || v > hi) {
                return Err(SortError::invariant(
                    "bounds",
                    format!("value {v} outside [{lo}, {hi}]"),
                ));
            }
        }

        if model.multiset_fingerprint() != self.fingerprint {
            return Err(SortError::invariant(
                "multiset",
                "values were added, removed or altered",
            ));
        }

        self.checks += 1;
        Ok(())
    }

    /// Check that a finished run left the sequence ordered.
    ///
    /// # Errors
    ///
    /// Returns `SortError::InvariantViolation` at the first out-of-order
    /// pair.
    pub fn check_sorted(model: &SequenceModel, direction: Direction) -> SortResult<()> {
        match model
            .values()
            .windows(2)
            .position(|w| !direction.is_ordered(w[0], w[1]))
        {
            None => Ok(()),
            Some(index) => Err(SortError::invariant(
                "sorted",
                format!(
                    "{} and {} at index {index} not {}",
                    model.values()[index],
                    model.values()[index + 1],
                    direction.label().to_lowercase()
                ),
            )),
        }
    }
}
