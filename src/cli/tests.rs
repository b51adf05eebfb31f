//! CLI module tests.

use super::args::{Args, Command, RunOptions, DEFAULT_VERIFY_RUNS, DEFAULT_VERIFY_SEED};
use super::commands::{
    check_engine_run, count_inversions, execute_run, expected_steps, resolve_config,
    verify_engines, VerifyReport,
};
use super::output::{format_run_summary, format_verify_report, version_string};
use crate::engine::{Algorithm, Direction, HighlightRole};
use crate::error::SortError;
use std::io::Write;
use std::path::PathBuf;

fn run_options(args: &[&str]) -> RunOptions {
    let mut argv = vec!["stepsort", "run"];
    argv.extend_from_slice(args);
    match Args::parse_from(argv).command {
        Command::Run(options) => options,
        other => unreachable!("expected run command, got {other:?}"),
    }
}

// ============================================================================
// Args parsing tests
// ============================================================================

#[test]
fn test_parse_no_args_shows_help() {
    let args = Args::parse_from(["stepsort"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_help_variants() {
    for flag in ["-h", "--help", "help"] {
        assert_eq!(Args::parse_from(["stepsort", flag]).command, Command::Help);
    }
}

#[test]
fn test_parse_version_variants() {
    for flag in ["-V", "--version", "version"] {
        assert_eq!(
            Args::parse_from(["stepsort", flag]).command,
            Command::Version
        );
    }
}

#[test]
fn test_parse_unknown_command() {
    let args = Args::parse_from(["stepsort", "shuffle"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_run_defaults() {
    assert_eq!(run_options(&[]), RunOptions::default());
}

#[test]
fn test_parse_run_all_options() {
    let options = run_options(&[
        "--config",
        "viz.yaml",
        "--algorithm",
        "insertion",
        "--direction",
        "desc",
        "--length",
        "25",
        "--seed",
        "99",
        "--json",
        "-v",
    ]);
    assert_eq!(options.config_path, Some(PathBuf::from("viz.yaml")));
    assert_eq!(options.algorithm, Some(Algorithm::Insertion));
    assert_eq!(options.direction, Some(Direction::Descending));
    assert_eq!(options.length, Some(25));
    assert_eq!(options.seed, Some(99));
    assert!(options.json);
    assert!(options.verbose);
}

#[test]
fn test_parse_run_bad_algorithm_shows_help() {
    let args = Args::parse_from(["stepsort", "run", "--algorithm", "quick"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_run_bad_length_shows_help() {
    let args = Args::parse_from(["stepsort", "run", "--length", "-3"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_run_missing_value_shows_help() {
    let args = Args::parse_from(["stepsort", "run", "--seed"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_run_unknown_option_shows_help() {
    let args = Args::parse_from(["stepsort", "run", "--fast"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_verify_defaults() {
    let args = Args::parse_from(["stepsort", "verify"]);
    assert_eq!(
        args.command,
        Command::Verify {
            runs: DEFAULT_VERIFY_RUNS,
            seed: DEFAULT_VERIFY_SEED,
        }
    );
}

#[test]
fn test_parse_verify_with_options() {
    let args = Args::parse_from(["stepsort", "verify", "--seed", "5", "--runs", "12"]);
    assert_eq!(args.command, Command::Verify { runs: 12, seed: 5 });
}

#[test]
fn test_parse_verify_bad_runs_shows_help() {
    let args = Args::parse_from(["stepsort", "verify", "--runs", "many"]);
    assert_eq!(args.command, Command::Help);
}

// ============================================================================
// Run command tests
// ============================================================================

#[test]
fn test_resolve_config_overrides() {
    let options = run_options(&["--length", "7", "--seed", "3", "--direction", "desc"]);
    let config = resolve_config(&options).expect("valid");
    assert_eq!(config.sequence.length, 7);
    assert_eq!(config.seed, 3);
    assert_eq!(config.direction, Direction::Descending);
    assert_eq!(config.algorithm, Algorithm::Bubble);
}

#[test]
fn test_resolve_config_rejects_oversized_length() {
    let options = run_options(&["--length", "50000"]);
    assert!(matches!(
        resolve_config(&options),
        Err(SortError::Validation(_))
    ));
}

#[test]
fn test_resolve_config_from_file_then_flags() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "seed: 8\nalgorithm: insertion\nsequence:\n  length: 9").expect("write");
    let options = RunOptions {
        config_path: Some(file.path().to_path_buf()),
        length: Some(4),
        ..RunOptions::default()
    };
    let config = resolve_config(&options).expect("valid");
    assert_eq!(config.seed, 8);
    assert_eq!(config.algorithm, Algorithm::Insertion);
    assert_eq!(config.sequence.length, 4);
}

#[test]
fn test_execute_run_sorts_and_counts() {
    let options = run_options(&["--length", "12", "--seed", "21"]);
    let summary = execute_run(&options).expect("run");
    assert_eq!(summary.initial.len(), 12);
    assert_eq!(summary.steps, 66);
    assert!(summary.sorted.windows(2).all(|w| w[0] <= w[1]));
    let mut expected = summary.initial.clone();
    expected.sort_unstable();
    assert_eq!(summary.sorted, expected);
    assert!(summary.trace.is_none());
}

#[test]
fn test_execute_run_insertion_descending_step_count() {
    let options = run_options(&[
        "--length",
        "15",
        "--algorithm",
        "insertion",
        "--direction",
        "descending",
    ]);
    let summary = execute_run(&options).expect("run");
    assert!(summary.sorted.windows(2).all(|w| w[0] >= w[1]));
    let expected = expected_steps(Algorithm::Insertion, &summary.initial, Direction::Descending);
    assert_eq!(summary.steps, expected as u64);
}

#[test]
fn test_execute_run_verbose_trace() {
    let options = run_options(&["--length", "5", "-v"]);
    let summary = execute_run(&options).expect("run");
    let trace = summary.trace.as_ref().expect("trace requested");
    assert_eq!(trace.len(), 10);
    assert_eq!(trace[0].step, 1);
    for step in trace.iter().filter(|t| !t.highlights.is_empty()) {
        let roles: Vec<_> = step.highlights.iter().collect();
        assert_eq!(roles.len(), 2);
        assert_eq!(*roles[0].0 + 1, *roles[1].0);
        assert_eq!(roles[0].1, &HighlightRole::Secondary);
        assert_eq!(roles[1].1, &HighlightRole::Primary);
    }
    assert_eq!(trace.last().map(|t| t.values.clone()), Some(summary.sorted));
}

#[test]
fn test_execute_run_empty_sequence() {
    let summary = execute_run(&run_options(&["--length", "0"])).expect("run");
    assert!(summary.initial.is_empty());
    assert_eq!(summary.steps, 1);
}

#[test]
fn test_execute_run_missing_config_fails() {
    let options = run_options(&["--config", "/nonexistent/viz.yaml"]);
    assert!(matches!(execute_run(&options), Err(SortError::Io(_))));
}

#[test]
fn test_run_summary_json_shape() {
    let summary = execute_run(&run_options(&["--length", "4", "--seed", "1"])).expect("run");
    let json = serde_json::to_value(&summary).expect("json");
    assert_eq!(json["algorithm"], "bubble");
    assert_eq!(json["direction"], "ascending");
    assert_eq!(json["seed"], 1);
    assert_eq!(json["steps"], 6);
    assert!(json["final"].is_array());
    assert!(json.get("trace").is_none());
}

#[test]
fn test_format_run_summary() {
    let summary = execute_run(&run_options(&["--length", "3", "-v"])).expect("run");
    let text = format_run_summary(&summary);
    assert!(text.starts_with("BUBBLE SORT - ASCENDING (seed 42)"));
    assert!(text.contains("steps:   3"));
    assert!(text.contains("#1"));
}

// ============================================================================
// Verify command tests
// ============================================================================

#[test]
fn test_count_inversions() {
    assert_eq!(count_inversions(&[1, 2, 3], Direction::Ascending), 0);
    assert_eq!(count_inversions(&[3, 2, 1], Direction::Ascending), 3);
    assert_eq!(count_inversions(&[3, 2, 1], Direction::Descending), 0);
    assert_eq!(count_inversions(&[2, 2, 1], Direction::Ascending), 2);
}

#[test]
fn test_expected_steps() {
    assert_eq!(expected_steps(Algorithm::Bubble, &[], Direction::Ascending), 1);
    assert_eq!(expected_steps(Algorithm::Bubble, &[7], Direction::Ascending), 1);
    assert_eq!(
        expected_steps(Algorithm::Bubble, &[5, 3, 8, 1], Direction::Ascending),
        6
    );
    assert_eq!(
        expected_steps(Algorithm::Insertion, &[3, 1, 2], Direction::Ascending),
        4
    );
}

#[test]
fn test_check_engine_run_each_variant() {
    let values = [4, -1, 9, 4, 0];
    for algorithm in Algorithm::ALL {
        for direction in [Direction::Ascending, Direction::Descending] {
            let checks = check_engine_run(algorithm, direction, &values).expect("passes");
            assert_eq!(checks, expected_steps(algorithm, &values, direction) as u64);
        }
    }
}

#[test]
fn test_verify_engines_passes() {
    let report = verify_engines(25, 7);
    assert!(report.passed(), "failures: {:?}", report.failures);
    assert_eq!(report.runs, 25);
    assert_eq!(report.engine_runs, 100);
    assert!(report.steps > 0);
}

#[test]
fn test_verify_engines_zero_runs() {
    let report = verify_engines(0, 1);
    assert!(report.passed());
    assert_eq!(report.engine_runs, 0);
}

#[test]
fn test_verify_engines_reproducible() {
    assert_eq!(verify_engines(10, 3), verify_engines(10, 3));
}

#[test]
fn test_format_verify_report() {
    let passed = verify_engines(2, 1);
    assert!(format_verify_report(&passed).starts_with("Verify: PASSED"));

    let failed = VerifyReport {
        runs: 1,
        engine_runs: 1,
        steps: 0,
        failures: vec!["run 0: broken".to_string()],
    };
    let text = format_verify_report(&failed);
    assert!(text.starts_with("Verify: FAILED"));
    assert!(text.contains("✗ run 0: broken"));
}

// ============================================================================
// Output tests
// ============================================================================

#[test]
fn test_version_string() {
    let version = version_string();
    assert!(version.starts_with("stepsort "));
    assert!(version.contains(env!("CARGO_PKG_VERSION")));
}
