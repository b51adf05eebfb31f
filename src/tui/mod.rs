//! TUI module for stepsort.
//!
//! Holds the testable application state for the terminal visualizer.
//! Terminal I/O and drawing stay in `bin/sort_tui.rs`; key handling and
//! tick pacing live here.

#[cfg(feature = "tui")]
pub mod sort_app;
