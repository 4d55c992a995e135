//! Day 1: Report Repair.

use itertools::Itertools;
use tracing::debug;

use crate::{answer, Answers, Error};

const TARGET: i64 = 2020;

pub fn parse(input: &str) -> Result<Vec<i64>, Error> {
    input.lines().enumerate().map(|(ix, line)|
        line.trim().parse::<i64>().map_err(|e| Error::line(ix, format!("`{line}` is not an integer: {e}")))
    ).collect()
}

/// Product of the first `size` entries (at distinct positions) that sum to 2020.
/// A combination whose sum or product overflows `i64` does not count.
pub fn find_product(entries: &[i64], size: usize) -> Option<i64> {
    entries.iter().combinations(size).find_map(|combo| {
        let sum = combo.iter().try_fold(0i64, |sum, &&x| sum.checked_add(x))?;
        if sum != TARGET {return None}
        combo.iter().try_fold(1i64, |product, &&x| product.checked_mul(x))
    })
}

pub fn part_one(entries: &[i64]) -> Option<i64> {
    find_product(entries, 2)
}

pub fn part_two(entries: &[i64]) -> Option<i64> {
    find_product(entries, 3)
}

pub fn solve(input: &str) -> Result<Answers, Error> {
    let entries = parse(input)?;
    debug!(entries = entries.len(), "parsed expense report");
    Ok(Answers::new(answer(part_one(&entries)), answer(part_two(&entries))))
}
