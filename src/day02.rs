//! Day 2: Password Philosophy.

use regex::Regex;
use tracing::debug;

use crate::{Answers, Error};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy<'a> {
    pub low: usize,
    pub high: usize,
    pub letter: char,
    pub password: &'a str,
}

impl Policy<'_> {
    /// Sled rental rules: the letter occurs `low..=high` times.
    pub fn count_in_range(&self) -> bool {
        (self.low ..= self.high).contains(&self.password.chars().filter(|&c| c == self.letter).count())
    }

    /// Toboggan rules: exactly one of the two 1-indexed positions holds the letter.
    pub fn exactly_one_position(&self) -> bool {
        self.letter_at(self.low) ^ self.letter_at(self.high)
    }

    fn letter_at(&self, position: usize) -> bool {
        position.checked_sub(1).and_then(|ix| self.password.chars().nth(ix)) == Some(self.letter)
    }
}

pub fn parse(input: &str) -> Result<Vec<Policy<'_>>, Error> {
    let re = Regex::new(r"^(\d+)-(\d+) (\w): (\w+)$")?;
    input.lines().enumerate().map(|(ix, line)| {
        let Some(caps) = re.captures(line.trim()) else {
            return Err(Error::line(ix, format!("`{line}` is not a password policy")));
        };
        let bound = |group: usize| caps[group].parse::<usize>()
            .map_err(|e| Error::line(ix, format!("bad bound in `{line}`: {e}")));
        let (low, high) = (bound(1)?, bound(2)?);
        let letter = caps[3].chars().next().ok_or_else(|| Error::line(ix, "missing letter"))?;
        let password = caps.get(4).map_or("", |m| m.as_str());
        Ok(Policy {low, high, letter, password})
    }).collect()
}

pub fn part_one(policies: &[Policy]) -> usize {
    policies.iter().filter(|policy| policy.count_in_range()).count()
}

pub fn part_two(policies: &[Policy]) -> usize {
    policies.iter().filter(|policy| policy.exactly_one_position()).count()
}

pub fn solve(input: &str) -> Result<Answers, Error> {
    let policies = parse(input)?;
    debug!(policies = policies.len(), "parsed password database");
    Ok(Answers::new(part_one(&policies), part_two(&policies)))
}
