//! CLI output formatting.
//!
//! Formatting is split from printing so the text can be tested.

use crate::error::SortResult;

use super::commands::{RunSummary, VerifyReport};

/// Version string, with the git hash when the build captured one.
#[must_use]
pub fn version_string() -> String {
    let version = option_env!("STEPSORT_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => {
            format!("stepsort {version} ({})", &hash[..hash.len().min(8)])
        }
        _ => format!("stepsort {version}"),
    }
}

/// Print version information.
pub fn print_version() {
    println!("{}", version_string());
}

/// Print help message.
pub fn print_help() {
    println!(
        r"stepsort - step-by-step sorting visualizer

USAGE:
    stepsort <COMMAND> [OPTIONS]

COMMANDS:
    run                         Sort one generated sequence headlessly
        --config <file.yaml>    Load settings from a YAML file
        --algorithm <NAME>      bubble | insertion
        --direction <DIR>       asc | desc
        --length <N>            Number of values
        --seed <N>              Generator seed
        --json                  Print a JSON document
        -v, --verbose           Include the per-step trace

    verify                      Check both engines on seeded sequences
        --runs <N>              Number of sequences (default: 100)
        --seed <N>              Generator seed (default: 42)

    help                        Show this help message
    version                     Show version information

EXAMPLES:
    stepsort run --algorithm insertion --direction desc --length 20
    stepsort run --config visualizer.yaml --json -v
    stepsort verify --runs 500 --seed 7

The interactive visualizer is the separate `sort-tui` binary.
"
    );
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a run summary as text.
#[must_use]
pub fn format_run_summary(summary: &RunSummary) -> String {
    let mut out = format!(
        "{} - {} (seed {})\n\
         initial: [{}]\n\
         final:   [{}]\n\
         steps:   {}\n",
        summary.algorithm.display_name(),
        summary.direction.label(),
        summary.seed,
        join(&summary.initial),
        join(&summary.sorted),
        summary.steps
    );
    if let Some(trace) = &summary.trace {
        for step in trace {
            let marks: Vec<String> = step
                .highlights
                .iter()
                .map(|(i, role)| format!("{i}:{role:?}"))
                .collect();
            out.push_str(&format!(
                "  #{:<5} {{{}}} [{}]\n",
                step.step,
                marks.join(", "),
                join(&step.values)
            ));
        }
    }
    out
}

/// Print a run summary as text or JSON.
///
/// # Errors
///
/// Returns error if JSON serialization fails.
pub fn print_run_summary(summary: &RunSummary, json: bool) -> SortResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        print!("{}", format_run_summary(summary));
    }
    Ok(())
}

/// Render a verify report as text.
#[must_use]
pub fn format_verify_report(report: &VerifyReport) -> String {
    let status = if report.passed() { "PASSED" } else { "FAILED" };
    let mut out = format!(
        "Verify: {status}\n  sequences:   {}\n  engine runs: {}\n  steps:       {}\n  failures:    {}\n",
        report.runs,
        report.engine_runs,
        report.steps,
        report.failures.len()
    );
    for failure in &report.failures {
        out.push_str(&format!("  ✗ {failure}\n"));
    }
    out
}

/// Print a verify report.
pub fn print_verify_report(report: &VerifyReport) {
    print!("{}", format_verify_report(report));
}
