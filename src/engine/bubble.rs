//! Bubble sort as a resumable state machine.
//!
//! Pass `i` compares every adjacent pair `(j, j + 1)` for
//! `j in 0..=n - 2 - i`. Each `advance` is one such comparison, swap or no
//! swap, so a run takes exactly `n(n - 1) / 2` calls.

use serde::{Deserialize, Serialize};

use super::{Algorithm, Direction, EngineStatus, SequenceModel, StepReport, StepSort};

/// Resumable bubble sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BubbleSort {
    direction: Direction,
    status: EngineStatus,
    /// Length of the model this engine was built for.
    len: usize,
    /// Outer pass, `0..=len - 2`.
    i: usize,
    /// Left index of the next pair, `0..=len - 2 - i`.
    j: usize,
    steps: usize,
}

impl BubbleSort {
    /// Create an engine for `model`, sorting towards `direction`.
    #[must_use]
    pub fn new(direction: Direction, model: &SequenceModel) -> Self {
        Self {
            direction,
            status: EngineStatus::NotStarted,
            len: model.len(),
            i: 0,
            j: 0,
            steps: 0,
        }
    }

    /// `(i, j)` cursor of the next comparison.
    #[must_use]
    pub const fn cursor(&self) -> (usize, usize) {
        (self.i, self.j)
    }
}

impl StepSort for BubbleSort {
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

        let j = self.j;
        let values = model.values();
        let swap = !self.direction.is_ordered(values[j], values[j + 1]);
        if swap {
            model.swap(j, j + 1);
        }

        self.j += 1;
        if self.j > self.len - 2 - self.i {
            self.j = 0;
            self.i += 1;
        }
        if self.i > self.len - 2 {
            self.status = EngineStatus::Done;
        }

        let finished = self.status == EngineStatus::Done;
        if swap {
            StepReport::swapped(j, j + 1, finished)
        } else {
            StepReport::idle(finished)
        }
    }

    fn status(&self) -> EngineStatus {
        self.status
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Bubble
    }

    fn steps(&self) -> usize {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::HighlightRole;

    fn run(values: Vec<i64>, direction: Direction) -> (SequenceModel, usize) {
        let mut model = SequenceModel::new(values);
        let mut engine = BubbleSort::new(direction, &model);
        let mut calls = 0;
        loop {
            calls += 1;
            if engine.advance(&mut model).finished {
                break;
            }
        }
        (model, calls)
    }

    #[test]
    fn test_scenario_ascending() {
        let (model, calls) = run(vec![5, 3, 8, 1], Direction::Ascending);
        assert_eq!(model.values(), &[1, 3, 5, 8]);
        assert_eq!(calls, 6);
    }

    #[test]
    fn test_scenario_descending() {
        let (model, _) = run(vec![5, 3, 8, 1], Direction::Descending);
        assert_eq!(model.values(), &[8, 5, 3, 1]);
    }

    #[test]
    fn test_step_count_independent_of_swaps() {
        for n in 2..12 {
            let sorted: Vec<i64> = (0..n).collect();
            let reversed: Vec<i64> = (0..n).rev().collect();
            let expected = (n * (n - 1) / 2) as usize;
            assert_eq!(run(sorted, Direction::Ascending).1, expected, "sorted n={n}");
            assert_eq!(run(reversed, Direction::Ascending).1, expected, "reversed n={n}");
        }
    }

    #[test]
    fn test_first_step_highlights_swap() {
        let mut model = SequenceModel::new(vec![5, 3, 8, 1]);
        let mut engine = BubbleSort::new(Direction::Ascending, &model);
        assert_eq!(engine.status(), EngineStatus::NotStarted);

        let report = engine.advance(&mut model);
        assert_eq!(engine.status(), EngineStatus::Running);
        assert_eq!(model.values(), &[3, 5, 8, 1]);
        assert_eq!(report.role_of(0), Some(HighlightRole::Secondary));
        assert_eq!(report.role_of(1), Some(HighlightRole::Primary));
        assert!(!report.finished);
    }

    #[test]
    fn test_comparison_without_swap_reports_nothing() {
        let mut model = SequenceModel::new(vec![1, 2, 3]);
        let mut engine = BubbleSort::new(Direction::Ascending, &model);
        let report = engine.advance(&mut model);
        assert!(report.highlights.is_empty());
        assert!(!report.finished);
        assert_eq!(engine.cursor(), (0, 1));
    }

    #[test]
    fn test_cursor_wraps_to_next_pass() {
        let mut model = SequenceModel::new(vec![4, 3, 2, 1]);
        let mut engine = BubbleSort::new(Direction::Ascending, &model);
        for _ in 0..3 {
            engine.advance(&mut model);
        }
        assert_eq!(engine.cursor(), (1, 0));
        // Largest value has bubbled to the end after one pass.
        assert_eq!(model.values()[3], 4);
    }

    #[test]
    fn test_terminal_step_reports_swap_and_finished() {
        let mut model = SequenceModel::new(vec![2, 1]);
        let mut engine = BubbleSort::new(Direction::Ascending, &model);
        let report = engine.advance(&mut model);
        assert!(report.finished);
        assert!(report.is_swap());
        assert_eq!(engine.status(), EngineStatus::Done);
    }

    #[test]
    fn test_done_is_idempotent() {
        let mut model = SequenceModel::new(vec![3, 1, 2]);
        let mut engine = BubbleSort::new(Direction::Ascending, &model);
        while !engine.advance(&mut model).finished {}
        let snapshot = model.clone();
        let steps = engine.steps();

        for _ in 0..5 {
            let report = engine.advance(&mut model);
            assert!(report.finished);
            assert!(report.highlights.is_empty());
        }
        assert_eq!(model, snapshot);
        assert_eq!(engine.steps(), steps);
    }

    #[test]
    fn test_degenerate_sequences_finish_immediately() {
        for values in [vec![], vec![7]] {
            let mut model = SequenceModel::new(values.clone());
            let mut engine = BubbleSort::new(Direction::Descending, &model);
            let report = engine.advance(&mut model);
            assert!(report.finished);
            assert!(report.highlights.is_empty());
            assert_eq!(model.values(), values.as_slice());
            assert_eq!(engine.status(), EngineStatus::Done);
        }
    }

    #[test]
    fn test_equal_values_never_swap() {
        let mut model = SequenceModel::new(vec![4, 4, 4]);
        let mut engine = BubbleSort::new(Direction::Descending, &model);
        loop {
            let report = engine.advance(&mut model);
            assert!(!report.is_swap());
            if report.finished {
                break;
            }
        }
    }
}
