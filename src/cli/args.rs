//! CLI argument parsing.
//!
//! Hand-rolled parser for the `stepsort` binary. Accepts any iterator of
//! strings so parsing can be tested without touching the process args.

use std::path::PathBuf;

use crate::engine::{Algorithm, Direction};

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Options for a headless `run`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Optional YAML config file.
    pub config_path: Option<PathBuf>,
    /// Algorithm override.
    pub algorithm: Option<Algorithm>,
    /// Direction override.
    pub direction: Option<Direction>,
    /// Sequence length override.
    pub length: Option<usize>,
    /// Seed override.
    pub seed: Option<u64>,
    /// Emit a JSON document instead of text.
    pub json: bool,
    /// Include the per-step trace.
    pub verbose: bool,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Sort one generated sequence to completion
    Run(RunOptions),
    /// Check engine invariants over many seeded sequences
    Verify {
        /// Number of sequences to check.
        runs: usize,
        /// Seed for the sequence generator.
        seed: u64,
    },
    /// Show help
    Help,
    /// Show version
    Version,
}

/// Default number of `verify` runs.
pub const DEFAULT_VERIFY_RUNS: usize = 100;

/// Default `verify` seed.
pub const DEFAULT_VERIFY_SEED: u64 = 42;

impl Args {
    /// Parse command-line arguments from an iterator.
    ///
    /// This method is testable as it accepts any iterator of strings,
    /// not just `std::env::args()`.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "run" => Self::parse_run_command(&args[2..]),
            "verify" => Self::parse_verify_command(&args[2..]),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    /// Parse the 'run' command options.
    fn parse_run_command(rest: &[String]) -> Command {
        let mut options = RunOptions::default();
        let mut i = 0;
        while i < rest.len() {
            let flag = rest[i].as_str();
            match flag {
                "--json" => options.json = true,
                "-v" | "--verbose" => options.verbose = true,
                "--config" | "--algorithm" | "--direction" | "--length" | "--seed" => {
                    let Some(value) = rest.get(i + 1) else {
                        eprintln!("Error: '{flag}' requires a value");
                        return Command::Help;
                    };
                    if let Err(message) = Self::apply_run_value(&mut options, flag, value) {
                        eprintln!("Error: {message}");
                        return Command::Help;
                    }
                    i += 1;
                }
                other => {
                    eprintln!("Error: unknown option '{other}' for 'run'");
                    return Command::Help;
                }
            }
            i += 1;
        }
        Command::Run(options)
    }

    fn apply_run_value(options: &mut RunOptions, flag: &str, value: &str) -> Result<(), String> {
        match flag {
            "--config" => options.config_path = Some(PathBuf::from(value)),
            "--algorithm" => {
                options.algorithm = Some(value.parse().map_err(|e| format!("{e}"))?);
            }
            "--direction" => {
                options.direction = Some(value.parse().map_err(|e| format!("{e}"))?);
            }
            "--length" => {
                options.length = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid length '{value}'"))?,
                );
            }
            "--seed" => {
                options.seed = Some(value.parse().map_err(|_| format!("invalid seed '{value}'"))?);
            }
            _ => return Err(format!("unknown option '{flag}'")),
        }
        Ok(())
    }

    /// Parse the 'verify' command options.
    fn parse_verify_command(rest: &[String]) -> Command {
        let mut runs = DEFAULT_VERIFY_RUNS;
        let mut seed = DEFAULT_VERIFY_SEED;

        let mut i = 0;
        while i < rest.len() {
            match (rest[i].as_str(), rest.get(i + 1)) {
                ("--runs", Some(value)) => {
                    if let Ok(n) = value.parse() {
                        runs = n;
                    } else {
                        eprintln!("Error: invalid run count '{value}'");
                        return Command::Help;
                    }
                    i += 2;
                }
                ("--seed", Some(value)) => {
                    if let Ok(s) = value.parse() {
                        seed = s;
                    } else {
                        eprintln!("Error: invalid seed '{value}'");
                        return Command::Help;
                    }
                    i += 2;
                }
                (other, _) => {
                    eprintln!("Error: unexpected argument '{other}' for 'verify'");
                    return Command::Help;
                }
            }
        }

        Command::Verify { runs, seed }
    }
}
