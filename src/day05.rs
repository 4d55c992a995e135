//! Day 5: Binary Boarding.

use bitvec::prelude::*;
use itertools::Itertools;
use tracing::debug;

use crate::{answer, Answers, Error};

/// Reads `F`/`L` as 0 and `B`/`R` as 1, most significant first.
pub fn seat_id(boarding_pass: &str) -> Result<u32, String> {
    if boarding_pass.is_empty() {return Err("empty boarding pass".to_string())};
    boarding_pass.chars().try_fold(0u32, |id, c| {
        let bit = match c {'F' | 'L' => 0, 'B' | 'R' => 1, _ => return Err(format!("unexpected character '{c}'"))};
        id.checked_mul(2).map(|id| id + bit).ok_or_else(|| "boarding pass too long".to_string())
    })
}

pub fn parse(input: &str) -> Result<Vec<u32>, Error> {
    input.lines().enumerate().map(|(ix, line)|
        seat_id(line.trim()).map_err(|e| Error::line(ix, format!("`{line}`: {e}")))
    ).collect()
}

pub fn part_one(ids: &[u32]) -> Option<u32> {
    ids.iter().max().copied()
}

/// The lowest seat between the first and last taken seat that nobody took.
pub fn missing_seat(ids: &[u32]) -> Option<u32> {
    let (min, max) = ids.iter().copied().minmax().into_option()?;
    let mut taken = bitvec![0; (max - min) as usize + 1];
    for &id in ids {
        taken.set((id - min) as usize, true);
    }
    taken.first_zero().map(|ix| min + ix as u32)
}

pub fn part_two(ids: &[u32]) -> Option<u32> {
    missing_seat(ids)
}

pub fn solve(input: &str) -> Result<Answers, Error> {
    let ids = parse(input)?;
    debug!(boarding_passes = ids.len(), "decoded seat ids");
    Ok(Answers::new(answer(part_one(&ids)), answer(part_two(&ids))))
}
