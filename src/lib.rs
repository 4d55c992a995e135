//! Advent of Code 2020, days 1 through 8.
//!
//! Every day lives in its own module with a `parse`, a `part_one`, a `part_two`
//! and a `solve` that glues them together. [`PUZZLES`] lists them by day number
//! for the runner binaries.

use std::fmt;

pub mod cli;
pub mod day01;
pub mod day02;
pub mod day03;
pub mod day04;
pub mod day05;
pub mod day06;
pub mod day07;
pub mod day08;
mod error;
pub mod input;

pub use error::Error;

/// Printed in place of a value when a part has no answer.
pub const NO_ANSWER: &str = "None";

/// Both answers of one puzzle, already rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub part_one: String,
    pub part_two: String,
}

impl Answers {
    pub fn new(part_one: impl ToString, part_two: impl ToString) -> Self {
        Self {part_one: part_one.to_string(), part_two: part_two.to_string()}
    }
}

impl fmt::Display for Answers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Part One: {}", self.part_one)?;
        write!(f, "Part Two: {}", self.part_two)
    }
}

/// Renders an optional answer, falling back to [`NO_ANSWER`].
pub fn answer<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| NO_ANSWER.to_string(), |value| value.to_string())
}

/// Where a puzzle expects its input to come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    /// A file path if given, standard input otherwise.
    StdinOrPath,
    /// A file path, always.
    Path,
}

pub type Solver = fn(&str) -> Result<Answers, Error>;

pub struct Puzzle {
    pub day: u8,
    pub title: &'static str,
    pub input: InputSource,
    pub solve: Solver,
}

pub static PUZZLES: [Puzzle; 8] = [
    Puzzle {day: 1, title: "Report Repair", input: InputSource::StdinOrPath, solve: day01::solve},
    Puzzle {day: 2, title: "Password Philosophy", input: InputSource::StdinOrPath, solve: day02::solve},
    Puzzle {day: 3, title: "Toboggan Trajectory", input: InputSource::StdinOrPath, solve: day03::solve},
    Puzzle {day: 4, title: "Passport Processing", input: InputSource::StdinOrPath, solve: day04::solve},
    Puzzle {day: 5, title: "Binary Boarding", input: InputSource::StdinOrPath, solve: day05::solve},
    Puzzle {day: 6, title: "Custom Customs", input: InputSource::StdinOrPath, solve: day06::solve},
    Puzzle {day: 7, title: "Handy Haversacks", input: InputSource::Path, solve: day07::solve},
    Puzzle {day: 8, title: "Handheld Halting", input: InputSource::StdinOrPath, solve: day08::solve},
];

pub fn puzzle(day: u8) -> Option<&'static Puzzle> {
    PUZZLES.iter().find(|puzzle| puzzle.day == day)
}
