//! Day 7: Handy Haversacks.
//!
//! The rules form a DAG from container bags to the bags they hold. Both parts
//! are depth-first walks with a per-bag memo, so shared descendants are only
//! visited once.

use regex::Regex;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{answer, Answers, Error};

pub const TARGET: &str = "shiny gold";

#[derive(Debug)]
pub struct Rules<'a> {
    contents: FxHashMap<&'a str, Vec<(u64, &'a str)>>,
}

impl<'a> Rules<'a> {
    pub fn parse(input: &'a str) -> Result<Self, Error> {
        let content_re = Regex::new(r"(\d+)\s+([a-z\s]+?)\s+bags?")?;
        let mut contents: FxHashMap<&str, Vec<(u64, &str)>> = FxHashMap::default();
        for (ix, line) in input.lines().enumerate() {
            let Some((container, contents_str)) = line.trim().split_once(" bags contain ") else {
                return Err(Error::line(ix, format!("`{line}` is not a bag rule")));
            };
            let inner = content_re.captures_iter(contents_str).map(|caps| {
                let (Some(count), Some(bag)) = (caps.get(1), caps.get(2)) else {
                    return Err(Error::line(ix, "incomplete bag content"));
                };
                let count = count.as_str().parse::<u64>().map_err(|e| Error::line(ix, format!("bad quantity: {e}")))?;
                Ok((count, bag.as_str()))
            }).collect::<Result<Vec<_>, _>>()?;
            if contents.insert(container, inner).is_some() {
                return Err(Error::line(ix, format!("second rule for `{container}` bags")));
            }
        }

        if let Some(&(_, bag)) = contents.values().flatten().find(|(_, bag)| !contents.contains_key(bag)) {
            return Err(Error::UnknownBag(bag.to_string()));
        }
        Ok(Self {contents})
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn contents(&self, bag: &str) -> Option<&[(u64, &'a str)]> {
        self.contents.get(bag).map(Vec::as_slice)
    }
}

#[derive(Debug, Clone, Copy)]
enum Memo<T> {
    InProgress,
    Done(T),
}

/// Memoized containment queries about one target bag.
pub struct Containment<'r, 'a> {
    rules: &'r Rules<'a>,
    target: &'r str,
    reaches: FxHashMap<&'a str, Memo<bool>>,
    inside: FxHashMap<&'a str, Memo<u64>>,
}

impl<'r, 'a> Containment<'r, 'a> {
    pub fn new(rules: &'r Rules<'a>, target: &'r str) -> Self {
        Self {rules, target, reaches: FxHashMap::default(), inside: FxHashMap::default()}
    }

    /// Whether `bag` holds the target at any depth. A bag does not contain itself.
    pub fn eventually_contains(&mut self, bag: &str) -> Result<bool, Error> {
        match self.rules.contents.get_key_value(bag) {
            Some((&bag, _)) => self.reaches_target(bag),
            None => Ok(false),
        }
    }

    /// Number of bag colors, other than the target, that can hold the target.
    pub fn count_containers(&mut self) -> Result<usize, Error> {
        let rules = self.rules;
        let mut count = 0;
        for &bag in rules.contents.keys() {
            if bag != self.target && self.reaches_target(bag)? {count += 1}
        }
        debug!(memoized = self.reaches.len(), "counted containers of {}", self.target);
        Ok(count)
    }

    /// Total bags held inside `bag`, or `None` if there is no rule for it.
    pub fn bags_inside(&mut self, bag: &str) -> Result<Option<u64>, Error> {
        let Some((&bag, _)) = self.rules.contents.get_key_value(bag) else {return Ok(None)};
        let total = self.count_inside(bag)?;
        debug!(memoized = self.inside.len(), "counted bags inside {bag}");
        Ok(Some(total))
    }

    fn reaches_target(&mut self, bag: &'a str) -> Result<bool, Error> {
        match self.reaches.get(bag) {
            Some(Memo::Done(found)) => return Ok(*found),
            Some(Memo::InProgress) => return Err(Error::Cycle(bag.to_string())),
            None => (),
        }
        self.reaches.insert(bag, Memo::InProgress);
        let rules = self.rules;
        let mut found = false;
        for &(_, inner) in &rules.contents[bag] {
            if inner == self.target || self.reaches_target(inner)? {
                found = true;
                break;
            }
        }
        self.reaches.insert(bag, Memo::Done(found));
        Ok(found)
    }

    fn count_inside(&mut self, bag: &'a str) -> Result<u64, Error> {
        match self.inside.get(bag) {
            Some(Memo::Done(total)) => return Ok(*total),
            Some(Memo::InProgress) => return Err(Error::Cycle(bag.to_string())),
            None => (),
        }
        self.inside.insert(bag, Memo::InProgress);
        let rules = self.rules;
        let mut total = 0;
        for &(quantity, inner) in &rules.contents[bag] {
            total += quantity + quantity * self.count_inside(inner)?;
        }
        self.inside.insert(bag, Memo::Done(total));
        Ok(total)
    }
}

pub fn part_one(rules: &Rules) -> Result<usize, Error> {
    Containment::new(rules, TARGET).count_containers()
}

pub fn part_two(rules: &Rules) -> Result<Option<u64>, Error> {
    Containment::new(rules, TARGET).bags_inside(TARGET)
}

pub fn solve(input: &str) -> Result<Answers, Error> {
    let rules = Rules::parse(input)?;
    debug!(rules = rules.len(), "parsed luggage rules");
    let mut containment = Containment::new(&rules, TARGET);
    let containers = containment.count_containers()?;
    let inside = containment.bags_inside(TARGET)?;
    Ok(Answers::new(containers, answer(inside)))
}
