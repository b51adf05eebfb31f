//! CLI module for stepsort.
//!
//! All CLI logic lives here so it can be tested; `main.rs` only parses
//! arguments and calls [`run_cli`].

mod args;
mod commands;
mod output;

pub use args::{Args, Command, RunOptions, DEFAULT_VERIFY_RUNS, DEFAULT_VERIFY_SEED};
pub use commands::{
    check_engine_run, count_inversions, execute_run, expected_steps, resolve_config, run_cli,
    run_sort, run_verify, verify_engines, RunSummary, TraceStep, VerifyReport,
};
pub use output::{
    format_run_summary, format_verify_report, print_help, print_run_summary, print_verify_report,
    print_version, version_string,
};

#[cfg(test)]
mod tests;
