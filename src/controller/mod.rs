//! Controller: the single context object behind a visualizer session.
//!
//! Holds the sequence, the active engine (if any), the selected algorithm
//! and direction, the playback speed and the sequence generator. Input
//! layers translate keys into [`ControlCommand`]s; the scheduler calls
//! [`Controller::tick`] once per frame and forwards the returned
//! [`RenderFrame`] to a renderer.
//!
//! Reconfiguration discipline: direction and algorithm changes are refused
//! while an engine is active. The engine has no way to change either, so a
//! new selection only takes effect for the next engine built.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::{SequenceConfig, SpeedConfig, VisualizerConfig};
use crate::engine::{
    Algorithm, Direction, SequenceModel, SequenceRng, SortEngine, StepReport, StepSort,
};
use crate::renderers::{RenderFrame, Renderer};

/// Discrete operator commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlCommand {
    /// Discard any run and draw a fresh random sequence.
    Reset,
    /// Build an engine and start sorting.
    StartRun,
    /// Select the direction for the next run.
    SetDirection(Direction),
    /// Select the algorithm for the next run.
    SelectAlgorithm(Algorithm),
    /// Raise speed by one step.
    IncreaseSpeed,
    /// Lower speed by one step, never below the floor.
    DecreaseSpeed,
}

/// Whether a command changed anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandOutcome {
    /// The command took effect.
    Applied,
    /// The command was refused in the current state.
    Ignored,
}

impl CommandOutcome {
    /// Whether the command took effect.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Playback speed in ticks per second, floored at a minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speed {
    value: u32,
    step: u32,
    min: u32,
}

impl Speed {
    /// Create a speed; `value` is raised to `min` if below it.
    #[must_use]
    pub fn new(value: u32, step: u32, min: u32) -> Self {
        let min = min.max(1);
        Self {
            value: value.max(min),
            step,
            min,
        }
    }

    /// Current ticks per second.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.value
    }

    /// Lowest permitted value.
    #[must_use]
    pub const fn min(self) -> u32 {
        self.min
    }

    /// Raise by one step.
    pub fn increase(&mut self) {
        self.value = self.value.saturating_add(self.step);
    }

    /// Lower by one step; returns false if already at the floor.
    pub fn decrease(&mut self) -> bool {
        if self.value <= self.min {
            return false;
        }
        self.value = self.value.saturating_sub(self.step).max(self.min);
        true
    }

    /// Time between scheduler ticks at this speed.
    #[must_use]
    pub fn tick_interval(self) -> Duration {
        Duration::from_secs(1) / self.value
    }
}

impl From<SpeedConfig> for Speed {
    fn from(config: SpeedConfig) -> Self {
        Self::new(config.initial, config.step, config.min)
    }
}

/// Session state for one visualizer.
#[derive(Debug, Clone)]
pub struct Controller {
    model: SequenceModel,
    engine: Option<SortEngine>,
    direction: Direction,
    algorithm: Algorithm,
    speed: Speed,
    rng: SequenceRng,
    sequence: SequenceConfig,
    last_report: StepReport,
    tick: u64,
    completed_runs: u64,
    total_steps: u64,
}

impl Controller {
    /// Create a controller with a fresh random sequence.
    #[must_use]
    pub fn new(config: &VisualizerConfig) -> Self {
        let mut rng = SequenceRng::new(config.seed);
        let values = rng.generate(
            config.sequence.length,
            config.sequence.min_value,
            config.sequence.max_value,
        );
        Self::assemble(config, rng, values)
    }

    /// Create a controller over explicit initial values.
    ///
    /// Later resets still draw from the seeded generator.
    #[must_use]
    pub fn with_values(config: &VisualizerConfig, values: Vec<i64>) -> Self {
        Self::assemble(config, SequenceRng::new(config.seed), values)
    }

    fn assemble(config: &VisualizerConfig, rng: SequenceRng, values: Vec<i64>) -> Self {
        Self {
            model: SequenceModel::new(values),
            engine: None,
            direction: config.direction,
            algorithm: config.algorithm,
            speed: Speed::from(config.speed),
            rng,
            sequence: config.sequence.clone(),
            last_report: StepReport::default(),
            tick: 0,
            completed_runs: 0,
            total_steps: 0,
        }
    }

    /// Apply an operator command.
    pub fn apply(&mut self, command: ControlCommand) -> CommandOutcome {
        match command {
            ControlCommand::Reset => self.reset(),
            ControlCommand::StartRun => self.start_run(),
            ControlCommand::SetDirection(direction) => self.set_direction(direction),
            ControlCommand::SelectAlgorithm(algorithm) => self.select_algorithm(algorithm),
            ControlCommand::IncreaseSpeed => {
                self.speed.increase();
                CommandOutcome::Applied
            }
            ControlCommand::DecreaseSpeed => {
                if self.speed.decrease() {
                    CommandOutcome::Applied
                } else {
                    CommandOutcome::Ignored
                }
            }
        }
    }

    /// Discard any active engine and install a new random sequence.
    pub fn reset(&mut self) -> CommandOutcome {
        let values = self.rng.generate(
            self.sequence.length,
            self.sequence.min_value,
            self.sequence.max_value,
        );
        if self.engine.take().is_some() {
            log::debug!("reset discarded an active run");
        }
        self.model.replace(values);
        self.last_report = StepReport::default();
        log::debug!("reset to {} new values", self.model.len());
        CommandOutcome::Applied
    }

    /// Build an engine for the current selection. Ignored while running.
    pub fn start_run(&mut self) -> CommandOutcome {
        if self.is_running() {
            return CommandOutcome::Ignored;
        }
        self.engine = Some(SortEngine::new(self.algorithm, self.direction, &self.model));
        self.last_report = StepReport::default();
        log::debug!("started {} ({})", self.algorithm, self.direction);
        CommandOutcome::Applied
    }

    /// Select the direction for the next run. Ignored while running.
    pub fn set_direction(&mut self, direction: Direction) -> CommandOutcome {
        if self.is_running() {
            log::warn!("direction change to {direction} refused during a run");
            return CommandOutcome::Ignored;
        }
        self.direction = direction;
        CommandOutcome::Applied
    }

    /// Select the algorithm for the next run. Ignored while running.
    pub fn select_algorithm(&mut self, algorithm: Algorithm) -> CommandOutcome {
        if self.is_running() {
            log::warn!("algorithm change to {algorithm} refused during a run");
            return CommandOutcome::Ignored;
        }
        self.algorithm = algorithm;
        CommandOutcome::Applied
    }

    /// One scheduler tick: advance the active engine at most once.
    ///
    /// A finished engine is dropped on the tick that finishes it; later ticks
    /// only redraw the static sequence.
    pub fn tick(&mut self) -> RenderFrame {
        self.tick += 1;
        let report = match self.engine.as_mut() {
            Some(engine) => {
                let report = engine.advance(&mut self.model);
                self.total_steps += 1;
                if report.finished {
                    log::debug!(
                        "{} finished after {} steps",
                        engine.algorithm(),
                        engine.steps()
                    );
                }
                report
            }
            None => StepReport::default(),
        };
        if report.finished {
            self.engine = None;
            self.completed_runs += 1;
        }
        self.last_report = report;
        self.frame()
    }

    /// Tick and hand the frame to `renderer`.
    pub fn tick_into<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        let frame = self.tick();
        renderer.render(&frame);
    }

    /// Current state as a frame, without advancing.
    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        RenderFrame {
            values: self.model.values().to_vec(),
            min_value: self.model.min_value(),
            max_value: self.model.max_value(),
            highlights: self.last_report.highlights.clone(),
            algorithm: self.algorithm,
            direction: self.direction,
            speed: self.speed.value(),
            running: self.is_running(),
            finished: self.last_report.finished,
            tick: self.tick,
        }
    }

    /// Whether an engine is active.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.engine.is_some()
    }

    /// The active engine, if any.
    #[must_use]
    pub fn engine(&self) -> Option<&SortEngine> {
        self.engine.as_ref()
    }

    /// The sequence.
    #[must_use]
    pub fn model(&self) -> &SequenceModel {
        &self.model
    }

    /// Selected direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Selected algorithm.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Current speed.
    #[must_use]
    pub const fn speed(&self) -> Speed {
        self.speed
    }

    /// Report from the most recent tick.
    #[must_use]
    pub fn last_report(&self) -> &StepReport {
        &self.last_report
    }

    /// Ticks so far.
    #[must_use]
    pub const fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Runs that reached completion.
    #[must_use]
    pub const fn completed_runs(&self) -> u64 {
        self.completed_runs
    }

    /// `advance` calls made across all runs.
    #[must_use]
    pub const fn total_steps(&self) -> u64 {
        self.total_steps
    }
}
