//! stepsort CLI - headless step-sorting runs and engine verification.

use std::process::ExitCode;

use stepsort::cli::{run_cli, Args};

fn main() -> ExitCode {
    env_logger::init();
    run_cli(Args::parse())
}
