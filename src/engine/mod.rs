//! Interruptible step-sorting engine.
//!
//! A sort is modelled as an explicit state object whose `advance` method
//! performs exactly one comparison (with at most one accompanying swap) and
//! then returns. All traversal state lives in named fields, so the caller can
//! stop calling `advance` at any point and resume later with no observable
//! difference in the final order.
//!
//! - [`SequenceModel`]: the values being sorted
//! - [`StepSort`]: the `advance` contract shared by every variant
//! - [`BubbleSort`], [`InsertionSort`]: the two variants
//! - [`SortEngine`]: closed dispatch over the variants, held by the controller

pub mod bubble;
pub mod guard;
pub mod insertion;
pub mod report;
pub mod rng;
pub mod sequence;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use bubble::BubbleSort;
pub use guard::InvariantGuard;
pub use insertion::InsertionSort;
pub use report::{HighlightRole, StepReport};
pub use rng::SequenceRng;
pub use sequence::SequenceModel;

use crate::error::SortError;

/// Target ordering, fixed for an engine's lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl Direction {
    /// Whether `left` may precede `right` without a swap.
    #[must_use]
    pub fn is_ordered(self, left: i64, right: i64) -> bool {
        match self {
            Self::Ascending => left <= right,
            Self::Descending => left >= right,
        }
    }

    /// Upper-case label for status lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ascending => "ASCENDING",
            Self::Descending => "DESCENDING",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Direction {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(SortError::config(format!("unknown direction '{other}'"))),
        }
    }
}

/// Available step-sort variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Adjacent-pair bubble sort.
    #[default]
    Bubble,
    /// Walk-back insertion sort.
    Insertion,
}

impl Algorithm {
    /// Every variant, in menu order.
    pub const ALL: [Self; 2] = [Self::Bubble, Self::Insertion];

    /// Name shown in the title bar.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Bubble => "BUBBLE SORT",
            Self::Insertion => "INSERTION SORT",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bubble" => Ok(Self::Bubble),
            "insertion" => Ok(Self::Insertion),
            other => Err(SortError::config(format!("unknown algorithm '{other}'"))),
        }
    }
}

/// Engine lifecycle stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineStatus {
    /// No `advance` call yet.
    #[default]
    NotStarted,
    /// At least one unit of work done, more remain.
    Running,
    /// Terminal; further `advance` calls are no-ops.
    Done,
}

/// The resumable sort contract.
///
/// The engine is bound to one model for its lifetime but does not own it;
/// the caller lends the model on each call. Direction and variant are fixed
/// at construction and cannot change afterwards.
pub trait StepSort {
    /// Perform one comparison (and at most one swap) on `model`.
    ///
    /// Once the engine is [`EngineStatus::Done`] this performs no mutation
    /// and returns a finished report with no highlights.
    fn advance(&mut self, model: &mut SequenceModel) -> StepReport;

    /// Current lifecycle stage.
    fn status(&self) -> EngineStatus;

    /// Ordering this engine sorts towards.
    fn direction(&self) -> Direction;

    /// Which variant this is.
    fn algorithm(&self) -> Algorithm;

    /// Number of `advance` calls that did work (post-`Done` calls excluded).
    fn steps(&self) -> usize;

    /// Whether the engine has reached its terminal state.
    fn is_done(&self) -> bool {
        self.status() == EngineStatus::Done
    }
}

/// A step engine of either variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortEngine {
    /// Bubble variant.
    Bubble(BubbleSort),
    /// Insertion variant.
    Insertion(InsertionSort),
}

impl SortEngine {
    /// Build a fresh engine of `algorithm` over `model`.
    #[must_use]
    pub fn new(algorithm: Algorithm, direction: Direction, model: &SequenceModel) -> Self {
        log::debug!(
            "new {} engine ({}) over {} values",
            algorithm,
            direction,
            model.len()
        );
        match algorithm {
            Algorithm::Bubble => Self::Bubble(BubbleSort::new(direction, model)),
            Algorithm::Insertion => Self::Insertion(InsertionSort::new(direction, model)),
        }
    }

    /// Drive `advance` until a report is finished; returns the calls made.
    ///
    /// Returns 0 if the engine was already done.
    pub fn run_to_completion(&mut self, model: &mut SequenceModel) -> usize {
        let mut calls = 0;
        while !self.is_done() {
            calls += 1;
            if self.advance(model).finished {
                break;
            }
        }
        calls
    }
}

impl StepSort for SortEngine {
    fn advance(&mut self, model: &mut SequenceModel) -> StepReport {
        match self {
            Self::Bubble(engine) => engine.advance(model),
            Self::Insertion(engine) => engine.advance(model),
        }
    }

    fn status(&self) -> EngineStatus {
        match self {
            Self::Bubble(engine) => engine.status(),
            Self::Insertion(engine) => engine.status(),
        }
    }

    fn direction(&self) -> Direction {
        match self {
            Self::Bubble(engine) => engine.direction(),
            Self::Insertion(engine) => engine.direction(),
        }
    }

    fn algorithm(&self) -> Algorithm {
        match self {
            Self::Bubble(_) => Algorithm::Bubble,
            Self::Insertion(_) => Algorithm::Insertion,
        }
    }

    fn steps(&self) -> usize {
        match self {
            Self::Bubble(engine) => engine.steps(),
            Self::Insertion(engine) => engine.steps(),
        }
    }
}
