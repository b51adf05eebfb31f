//! Insertion sort as a resumable state machine.
//!
//! Element `i` is walked left one swap per `advance` while it is out of order
//! with its left neighbour. The call that finds it in place (or at index 0)
//! moves on to `i + 1`. A run therefore takes one call per inversion plus
//! `n - 1` placement checks.

use serde::{Deserialize, Serialize};

use super::{Algorithm, Direction, EngineStatus, SequenceModel, StepReport, StepSort};

/// Resumable insertion sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertionSort {
    direction: Direction,
    status: EngineStatus,
    len: usize,
    /// Element being inserted, `1..=len - 1`.
    i: usize,
    /// Current walk-back position of that element.
    p: usize,
    steps: usize,
}

impl InsertionSort {
    /// Create an engine for `model`, sorting towards `direction`.
    #[must_use]
    pub fn new(direction: Direction, model: &SequenceModel) -> Self {
        Self {
            direction,
            status: EngineStatus::NotStarted,
            len: model.len(),
            i: 1,
            p: 1,
            steps: 0,
        }
    }

    /// `(i, p)`: element being inserted and its current position.
    #[must_use]
    pub const fn cursor(&self) -> (usize, usize) {
        (self.i, self.p)
    }
}

impl StepSort for InsertionSort {
    fn advance(&mut self, model: &mut SequenceModel) -> StepReport {
        if self.status == EngineStatus::Done {
            return StepReport::idle(true);
        }
        debug_assert_eq!(model.len(), self.len, "engine bound to a different sequence");

        self.steps += 1;
        if self.len < 2 {
            self.status = EngineStatus::Done;
            return StepReport::idle(true);
        }
        self.status = EngineStatus::Running;

        let p = self.p;
        if p > 0 {
            let values = model.values();
            if !self.direction.is_ordered(values[p - 1], values[p]) {
                model.swap(p - 1, p);
                self.p -= 1;
                return StepReport::swapped(p, p - 1, false);
            }
        }

        // Placed; move on to the next element.
        self.i += 1;
        self.p = self.i;
        if self.i > self.len - 1 {
            self.status = EngineStatus::Done;
        }
        StepReport::idle(self.status == EngineStatus::Done)
    }

    fn status(&self) -> EngineStatus {
        self.status
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Insertion
    }

    fn steps(&self) -> usize {
        self.steps
    }
}
