//! Command-line entry points shared by `aoc2020` and the `dayNN` binaries.

use anyhow::{ensure, Context, Result};
use clap::{CommandFactory, FromArgMatches, Parser};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::input::InputFile;
use crate::{InputSource, Puzzle};

/// Solve one day of Advent of Code 2020.
#[derive(Debug, Parser)]
struct DayArgs {
    /// Puzzle input file; read from standard input when omitted
    input: Option<PathBuf>,
}

/// Solve any day of Advent of Code 2020 by number.
#[derive(Debug, Parser)]
#[command(name = "aoc2020")]
struct RunnerArgs {
    /// The day to run
    #[arg(value_parser = clap::value_parser!(u8).range(1..=8))]
    day: u8,

    /// Puzzle input file; read from standard input when omitted
    input: Option<PathBuf>,
}

/// Logs go to stderr, filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() -> Result<()> {
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))?;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;
    Ok(())
}

/// Reads the input, solves both parts and prints them.
pub fn run(puzzle: &Puzzle, path: Option<&Path>) -> Result<()> {
    if puzzle.input == InputSource::Path {
        ensure!(path.is_some(), "day {} reads its input from a file path argument", puzzle.day);
    }
    let input = InputFile::from_path_or_stdin(path)?;

    let time = Instant::now();
    let answers = (puzzle.solve)(&input.contents)
        .with_context(|| format!("failed to solve day {} from {}", puzzle.day, input.name))?;
    println!("{answers}");
    info!(day = puzzle.day, elapsed = ?time.elapsed(), "solved {}", puzzle.title);
    Ok(())
}

/// `main` of a single-day binary.
pub fn day_main(day: u8) -> Result<()> {
    let puzzle = crate::puzzle(day).with_context(|| format!("no solver for day {day}"))?;
    let mut command = DayArgs::command().about(puzzle.title);
    if puzzle.input == InputSource::Path {
        command = command.mut_arg("input", |arg| arg.required(true));
    }
    let args = DayArgs::from_arg_matches(&command.get_matches())?;
    init_logging()?;
    run(puzzle, args.input.as_deref())
}

/// `main` of the `aoc2020` runner.
pub fn runner_main() -> Result<()> {
    let args = RunnerArgs::parse();
    init_logging()?;
    let puzzle = crate::puzzle(args.day).with_context(|| format!("no solver for day {}", args.day))?;
    run(puzzle, args.input.as_deref())
}
