//! # stepsort
//!
//! Step-by-step sorting visualizer engine.
//!
//! Bubble sort and insertion sort are expressed as resumable state
//! machines: each call to [`StepSort::advance`](engine::StepSort::advance)
//! performs exactly one comparison, at most one swap, and reports which
//! positions to highlight. A [`Controller`](controller::Controller) owns
//! the sequence, the active engine and the playback speed, and turns each
//! scheduler tick into a [`RenderFrame`](renderers::RenderFrame).
//!
//! ## Example
//!
//! ```rust
//! use stepsort::prelude::*;
//!
//! let config = VisualizerConfig::builder().seed(7).length(16).build();
//! let mut controller = Controller::new(&config);
//! controller.start_run();
//! while controller.is_running() {
//!     controller.tick();
//! }
//! assert!(controller.model().is_sorted(Direction::Ascending));
//! assert_eq!(controller.total_steps(), 16 * 15 / 2);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::missing_const_for_fn, // Many functions can't be const in stable Rust
)]

pub mod cli;
pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod renderers;
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{SequenceConfig, SpeedConfig, VisualizerConfig, VisualizerConfigBuilder};
    pub use crate::controller::{CommandOutcome, ControlCommand, Controller, Speed};
    pub use crate::engine::{
        Algorithm, Direction, EngineStatus, HighlightRole, InvariantGuard, SequenceModel,
        SequenceRng, SortEngine, StepReport, StepSort,
    };
    pub use crate::error::{SortError, SortResult};
    pub use crate::renderers::{RecordingRenderer, RenderFrame, Renderer};
}

/// Re-export for public API
pub use error::{SortError, SortResult};
