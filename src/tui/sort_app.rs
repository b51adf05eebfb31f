//! Sorting visualizer TUI application state and logic.
//!
//! Key handling and per-tick state live here so they can be tested without
//! a terminal; the `sort-tui` binary owns terminal I/O and drawing.
//!
//! ```bash
//! cargo run --bin sort-tui -- visualizer.yaml
//! ```

use crate::config::VisualizerConfig;
use crate::controller::{CommandOutcome, ControlCommand, Controller};
use crate::engine::{Algorithm, Direction, StepSort};
use crate::error::SortResult;
use crossterm::event::KeyCode;
use std::path::Path;
use std::time::Duration;

/// Application state for the sorting visualizer TUI.
pub struct SortApp {
    /// The session controller.
    pub controller: Controller,
    /// Frame counter.
    pub frame_count: u64,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Path of the loaded config file (if any).
    pub loaded_path: Option<String>,
}

impl SortApp {
    /// Create an application from a configuration.
    #[must_use]
    pub fn new(config: &VisualizerConfig) -> Self {
        Self {
            controller: Controller::new(config),
            frame_count: 0,
            should_quit: false,
            loaded_path: None,
        }
    }

    /// Create an application from a YAML config file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or the config is invalid.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> SortResult<Self> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let config = VisualizerConfig::load(&path)?;
        let mut app = Self::new(&config);
        app.loaded_path = Some(path_str);
        Ok(app)
    }

    /// Map a key to a controller command.
    #[must_use]
    pub const fn key_command(key: KeyCode) -> Option<ControlCommand> {
        match key {
            KeyCode::Char('r' | 'R') => Some(ControlCommand::Reset),
            KeyCode::Char(' ') => Some(ControlCommand::StartRun),
            KeyCode::Char('a' | 'A') => Some(ControlCommand::SetDirection(Direction::Ascending)),
            KeyCode::Char('d' | 'D') => Some(ControlCommand::SetDirection(Direction::Descending)),
            KeyCode::Char('b' | 'B') => Some(ControlCommand::SelectAlgorithm(Algorithm::Bubble)),
            KeyCode::Char('i' | 'I') => {
                Some(ControlCommand::SelectAlgorithm(Algorithm::Insertion))
            }
            KeyCode::Up => Some(ControlCommand::IncreaseSpeed),
            KeyCode::Down => Some(ControlCommand::DecreaseSpeed),
            _ => None,
        }
    }

    /// Handle a key press.
    ///
    /// Returns the outcome when the key maps to a controller command.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<CommandOutcome> {
        if matches!(key, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_quit = true;
            return None;
        }
        Self::key_command(key).map(|command| self.controller.apply(command))
    }

    /// Execute one scheduler tick.
    pub fn step(&mut self) {
        self.controller.tick();
        self.frame_count += 1;
    }

    /// Time until the next tick at the current speed.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.controller.speed().tick_interval()
    }

    /// Check if the app should quit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Status line: run state, step counters and sequence size.
    #[must_use]
    pub fn status_line(&self) -> String {
        let c = &self.controller;
        let state = match c.engine() {
            Some(engine) => format!("SORTING ({} steps)", engine.steps()),
            None if c.model().is_sorted(c.direction()) => "SORTED".to_string(),
            None => "IDLE".to_string(),
        };
        format!(
            "{state} | n = {} | runs: {} | total steps: {}",
            c.model().len(),
            c.completed_runs(),
            c.total_steps()
        )
    }
}
