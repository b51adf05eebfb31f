//! CLI command handlers.
//!
//! Each handler has a pure core returning data (`execute_run`,
//! `verify_engines`) and a thin wrapper that prints and maps to an exit code.

use serde::Serialize;
use std::collections::BTreeMap;
use std::process::ExitCode;

use crate::config::VisualizerConfig;
use crate::controller::Controller;
use crate::engine::{
    Algorithm, Direction, HighlightRole, InvariantGuard, SequenceModel, SequenceRng, SortEngine,
    StepSort,
};
use crate::error::{SortError, SortResult};
use crate::renderers::RecordingRenderer;

use super::args::RunOptions;
use super::output::{print_help, print_run_summary, print_verify_report, print_version};
use super::{Args, Command};

/// Largest sequence `verify` generates.
const VERIFY_MAX_LENGTH: i64 = 64;

/// One recorded step of a headless run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    /// 1-based step number.
    pub step: u64,
    /// Highlights reported by the step.
    pub highlights: BTreeMap<usize, HighlightRole>,
    /// Sequence after the step.
    pub values: Vec<i64>,
}

/// Result of a headless run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Algorithm used.
    pub algorithm: Algorithm,
    /// Direction sorted into.
    pub direction: Direction,
    /// Generator seed.
    pub seed: u64,
    /// Sequence before sorting.
    pub initial: Vec<i64>,
    /// Sequence after sorting.
    #[serde(rename = "final")]
    pub sorted: Vec<i64>,
    /// Number of `advance` calls.
    pub steps: u64,
    /// Per-step trace, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<TraceStep>>,
}

/// Outcome of `verify`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyReport {
    /// Sequences generated.
    pub runs: usize,
    /// Engine runs checked (four per sequence).
    pub engine_runs: usize,
    /// Total `advance` calls checked.
    pub steps: u64,
    /// Failure descriptions.
    pub failures: Vec<String>,
}

impl VerifyReport {
    /// Whether every check passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Run(options) => run_sort(&options),
        Command::Verify { runs, seed } => run_verify(runs, seed),
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Run one sort and print the summary.
#[must_use]
pub fn run_sort(options: &RunOptions) -> ExitCode {
    match execute_run(options) {
        Ok(summary) => match print_run_summary(&summary, options.json) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::from(1)
            }
        },
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Run `verify` and print the report.
#[must_use]
pub fn run_verify(runs: usize, seed: u64) -> ExitCode {
    let report = verify_engines(runs, seed);
    print_verify_report(&report);
    if report.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

/// Resolve the configuration for a run: file (or defaults), then flags.
///
/// # Errors
///
/// Returns error if the config file cannot be loaded or the overridden
/// config fails validation.
pub fn resolve_config(options: &RunOptions) -> SortResult<VisualizerConfig> {
    let mut config = match &options.config_path {
        Some(path) => VisualizerConfig::load(path)?,
        None => VisualizerConfig::default(),
    };
    if let Some(algorithm) = options.algorithm {
        config.algorithm = algorithm;
    }
    if let Some(direction) = options.direction {
        config.direction = direction;
    }
    if let Some(length) = options.length {
        config.sequence.length = length;
    }
    if let Some(seed) = options.seed {
        config.seed = seed;
    }
    config.check()?;
    Ok(config)
}

/// Sort one generated sequence through the controller, one tick per step.
///
/// # Errors
///
/// Returns error if the configuration is invalid.
pub fn execute_run(options: &RunOptions) -> SortResult<RunSummary> {
    let config = resolve_config(options)?;
    let mut controller = Controller::new(&config);
    let initial = controller.model().values().to_vec();
    log::info!(
        "running {} {} on {} values (seed {})",
        config.algorithm,
        config.direction,
        initial.len(),
        config.seed
    );

    controller.start_run();
    let mut recorder = RecordingRenderer::new();
    while controller.is_running() {
        if options.verbose {
            controller.tick_into(&mut recorder);
        } else {
            controller.tick();
        }
    }

    let trace = options.verbose.then(|| {
        recorder
            .frames()
            .iter()
            .zip(1u64..)
            .map(|(frame, step)| TraceStep {
                step,
                highlights: frame.highlights.clone(),
                values: frame.values.clone(),
            })
            .collect()
    });

    Ok(RunSummary {
        algorithm: controller.algorithm(),
        direction: controller.direction(),
        seed: config.seed,
        initial,
        sorted: controller.model().values().to_vec(),
        steps: controller.total_steps(),
        trace,
    })
}

/// Number of inverted pairs in `values` for `direction`.
#[must_use]
pub fn count_inversions(values: &[i64], direction: Direction) -> usize {
    values
        .iter()
        .enumerate()
        .map(|(i, &a)| {
            values[i + 1..]
                .iter()
                .filter(|&&b| !direction.is_ordered(a, b))
                .count()
        })
        .sum()
}

/// Exact number of `advance` calls a run must take.
#[must_use]
pub fn expected_steps(algorithm: Algorithm, values: &[i64], direction: Direction) -> usize {
    let n = values.len();
    if n < 2 {
        return 1;
    }
    match algorithm {
        Algorithm::Bubble => n * (n - 1) / 2,
        Algorithm::Insertion => count_inversions(values, direction) + n - 1,
    }
}

/// Run one engine to completion under the invariant guard.
///
/// # Errors
///
/// Returns the first invariant violation, or a step-count mismatch.
pub fn check_engine_run(
    algorithm: Algorithm,
    direction: Direction,
    values: &[i64],
) -> SortResult<u64> {
    let mut model = SequenceModel::new(values.to_vec());
    let mut guard = InvariantGuard::arm(&model);
    let mut engine = SortEngine::new(algorithm, direction, &model);

    loop {
        let report = engine.advance(&mut model);
        guard.check(&model, &report)?;
        if report.finished {
            break;
        }
    }
    InvariantGuard::check_sorted(&model, direction)?;

    let expected = expected_steps(algorithm, values, direction);
    if engine.steps() != expected {
        return Err(SortError::invariant(
            "step_count",
            format!(
                "{algorithm} {direction} took {} steps, expected {expected}",
                engine.steps()
            ),
        ));
    }
    Ok(guard.checks())
}

/// Check both engines in both directions on `runs` seeded sequences.
#[must_use]
pub fn verify_engines(runs: usize, seed: u64) -> VerifyReport {
    let mut rng = SequenceRng::new(seed);
    let mut report = VerifyReport {
        runs,
        ..VerifyReport::default()
    };

    for run in 0..runs {
        let length = rng
            .generate(1, 0, VERIFY_MAX_LENGTH)
            .first()
            .map_or(0, |&n| usize::try_from(n).unwrap_or(0));
        let values = rng.generate(length, -50, 50);

        for algorithm in Algorithm::ALL {
            for direction in [Direction::Ascending, Direction::Descending] {
                report.engine_runs += 1;
                match check_engine_run(algorithm, direction, &values) {
                    Ok(steps) => report.steps += steps,
                    Err(e) => {
                        log::error!("run {run}: {e}");
                        report.failures.push(format!("run {run} ({values:?}): {e}"));
                    }
                }
            }
        }
    }

    report
}
