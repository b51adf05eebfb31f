//! Renderer boundary.
//!
//! The controller never draws. Each tick it produces a [`RenderFrame`], a
//! self-contained snapshot of everything a renderer needs, and hands it to
//! whatever implements [`Renderer`]:
//!
//! ```text
//! Controller::tick()
//!       ↓
//!   RenderFrame
//!       ↓            ↓
//!  ratatui TUI   RecordingRenderer (tests, headless)
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::engine::{Algorithm, Direction, HighlightRole};

/// Snapshot of controller state for one draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderFrame {
    /// Current sequence values.
    pub values: Vec<i64>,
    /// Smallest value, `None` for an empty sequence.
    pub min_value: Option<i64>,
    /// Largest value, `None` for an empty sequence.
    pub max_value: Option<i64>,
    /// Positions to highlight on this draw.
    pub highlights: BTreeMap<usize, HighlightRole>,
    /// Selected algorithm.
    pub algorithm: Algorithm,
    /// Selected direction.
    pub direction: Direction,
    /// Speed in ticks per second.
    pub speed: u32,
    /// Whether an engine is active after this tick.
    pub running: bool,
    /// Whether this tick's step completed a run.
    pub finished: bool,
    /// Scheduler tick counter.
    pub tick: u64,
}

impl RenderFrame {
    /// Title line, e.g. `BUBBLE SORT - ASCENDING - SPEED 60`.
    #[must_use]
    pub fn title(&self) -> String {
        format!(
            "{} - {} - SPEED {}",
            self.algorithm.display_name(),
            self.direction.label(),
            self.speed
        )
    }

    /// Highlight role of `index`, if any.
    #[must_use]
    pub fn role_of(&self, index: usize) -> Option<HighlightRole> {
        self.highlights.get(&index).copied()
    }

    /// Height of `value` relative to the frame's minimum, for bar layouts.
    ///
    /// Returns 0 for an empty frame.
    #[must_use]
    pub fn relative_height(&self, value: i64) -> u64 {
        self.min_value
            .map_or(0, |lo| value.saturating_sub(lo).unsigned_abs())
    }
}

/// A sink for render frames.
pub trait Renderer {
    /// Draw one frame.
    fn render(&mut self, frame: &RenderFrame);
}

/// Renderer that keeps every frame it receives.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    frames: Vec<RenderFrame>,
}

impl RecordingRenderer {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All frames received so far.
    #[must_use]
    pub fn frames(&self) -> &[RenderFrame] {
        &self.frames
    }

    /// The most recent frame.
    #[must_use]
    pub fn last(&self) -> Option<&RenderFrame> {
        self.frames.last()
    }

    /// Number of frames that highlighted at least one position.
    #[must_use]
    pub fn highlighted_frames(&self) -> usize {
        self.frames
            .iter()
            .filter(|f| !f.highlights.is_empty())
            .count()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &RenderFrame) {
        self.frames.push(frame.clone());
    }
}
