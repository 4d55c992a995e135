//! Day 6: Custom Customs.

use itertools::Itertools;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::{Answers, Error};

/// One set of answered questions per person.
#[derive(Debug)]
pub struct Group {
    people: Vec<FxHashSet<char>>,
}

impl Group {
    /// Questions anyone in the group answered.
    pub fn anyone(&self) -> usize {
        self.people.iter().cloned().reduce(|acc, person| &acc | &person).map_or(0, |set| set.len())
    }

    /// Questions everyone in the group answered.
    pub fn everyone(&self) -> usize {
        self.people.iter().cloned().reduce(|acc, person| &acc & &person).map_or(0, |set| set.len())
    }
}

pub fn parse(input: &str) -> Result<Vec<Group>, Error> {
    let chunks = input.trim_end().lines().chunk_by(|line| line.trim().is_empty());
    let mut groups = Vec::new();
    for (blank, mut lines) in &chunks {
        if blank {
            // one blank line separates groups, a second one starts an empty group
            if lines.nth(1).is_some() {return Err(Error::record(groups.len(), "group has nobody in it"))};
            continue;
        }
        let people: Vec<FxHashSet<char>> = lines.flat_map(|line| line.split_whitespace())
            .map(|person| person.chars().collect())
            .collect();
        if let Some(c) = people.iter().flatten().find(|c| !c.is_ascii_lowercase()) {
            return Err(Error::record(groups.len(), format!("'{c}' is not a question")));
        }
        groups.push(Group {people});
    }
    if groups.is_empty() {return Err(Error::record(0, "no groups"))};
    Ok(groups)
}

pub fn part_one(groups: &[Group]) -> usize {
    groups.iter().map(Group::anyone).sum()
}

pub fn part_two(groups: &[Group]) -> usize {
    groups.iter().map(Group::everyone).sum()
}

pub fn solve(input: &str) -> Result<Answers, Error> {
    let groups = parse(input)?;
    debug!(groups = groups.len(), "parsed customs declarations");
    Ok(Answers::new(part_one(&groups), part_two(&groups)))
}
