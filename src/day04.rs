//! Day 4: Passport Processing.

use arrayvec::ArrayVec;
use itertools::Itertools;
use regex::Regex;
use std::str::FromStr;
use tracing::debug;

use crate::{Answers, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    BirthYear,
    IssueYear,
    ExpirationYear,
    Height,
    HairColor,
    EyeColor,
    PassportId,
    CountryId,
}

impl Field {
    /// In discriminant order, so `field as usize` indexes into it.
    pub const ALL: [Field; 8] = [
        Field::BirthYear, Field::IssueYear, Field::ExpirationYear, Field::Height,
        Field::HairColor, Field::EyeColor, Field::PassportId, Field::CountryId,
    ];

    pub fn is_required(self) -> bool {
        self != Field::CountryId
    }

    /// Matched against the whole value.
    fn pattern(self) -> &'static str {
        match self {
            Field::BirthYear | Field::IssueYear | Field::ExpirationYear => r"([0-9]{4})",
            Field::Height => r"([0-9]+)(cm|in)",
            Field::HairColor => r"#[0-9a-f]{6}",
            Field::EyeColor => r"amb|blu|brn|gry|grn|hzl|oth",
            Field::PassportId => r"[0-9]{9}",
            Field::CountryId => r".*",
        }
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "byr" => Field::BirthYear,
            "iyr" => Field::IssueYear,
            "eyr" => Field::ExpirationYear,
            "hgt" => Field::Height,
            "hcl" => Field::HairColor,
            "ecl" => Field::EyeColor,
            "pid" => Field::PassportId,
            "cid" => Field::CountryId,
            _ => return Err(format!("unknown passport field `{s}`")),
        })
    }
}

#[derive(Debug, Default)]
pub struct Passport<'a> {
    fields: ArrayVec<(Field, &'a str), 8>,
    /// Keys that are not passport fields. They never pass validation.
    unknown: Vec<&'a str>,
}

impl<'a> Passport<'a> {
    /// A repeated field keeps its last value.
    pub fn insert(&mut self, field: Field, value: &'a str) {
        match self.fields.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = value,
            None => self.fields.push((field, value)),
        }
    }

    pub fn insert_unknown(&mut self, key: &'a str) {
        self.unknown.push(key);
    }

    pub fn unknown_keys(&self) -> &[&'a str] {
        &self.unknown
    }

    pub fn get(&self, field: Field) -> Option<&'a str> {
        self.fields.iter().find(|(f, _)| *f == field).map(|&(_, value)| value)
    }

    pub fn has_required_fields(&self) -> bool {
        Field::ALL.iter().filter(|field| field.is_required()).all(|&field| self.get(field).is_some())
    }

    pub fn is_valid(&self, validator: &Validator) -> bool {
        self.has_required_fields()
            && self.unknown.is_empty()
            && self.fields.iter().all(|&(field, value)| validator.is_valid(field, value))
    }
}

/// Compiled per-field patterns plus the numeric range checks.
pub struct Validator {
    patterns: Vec<Regex>,
}

impl Validator {
    pub fn new() -> Result<Self, regex::Error> {
        let patterns = Field::ALL.iter()
            .map(|field| Regex::new(&format!("^(?:{})$", field.pattern())))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {patterns})
    }

    pub fn is_valid(&self, field: Field, value: &str) -> bool {
        let Some(caps) = self.patterns[field as usize].captures(value) else {return false};
        let number = |group: usize| caps.get(group).and_then(|m| m.as_str().parse::<u32>().ok());
        match field {
            Field::BirthYear => number(1).is_some_and(|year| (1920 ..= 2002).contains(&year)),
            Field::IssueYear => number(1).is_some_and(|year| (2010 ..= 2020).contains(&year)),
            Field::ExpirationYear => number(1).is_some_and(|year| (2020 ..= 2030).contains(&year)),
            Field::Height => match (number(1), caps.get(2).map(|m| m.as_str())) {
                (Some(cm), Some("cm")) => (150 ..= 193).contains(&cm),
                (Some(inches), Some("in")) => (59 ..= 76).contains(&inches),
                _ => false,
            },
            Field::HairColor | Field::EyeColor | Field::PassportId | Field::CountryId => true,
        }
    }
}

pub fn parse(input: &str) -> Result<Vec<Passport<'_>>, Error> {
    let re = Regex::new(r"(\S+):(\S+)")?;
    let records = input.lines().chunk_by(|line| line.trim().is_empty());
    let mut passports = Vec::new();
    for (blank, lines) in &records {
        if blank {continue}
        let mut passport = Passport::default();
        for caps in lines.flat_map(|line| re.captures_iter(line)) {
            let (Some(key), Some(value)) = (caps.get(1), caps.get(2)) else {continue};
            match key.as_str().parse::<Field>() {
                Ok(field) => passport.insert(field, value.as_str()),
                Err(e) => {
                    debug!(record = passports.len() + 1, "{e}");
                    passport.insert_unknown(key.as_str());
                },
            }
        }
        passports.push(passport);
    }
    Ok(passports)
}

pub fn part_one(passports: &[Passport]) -> usize {
    passports.iter().filter(|passport| passport.has_required_fields()).count()
}

pub fn part_two(passports: &[Passport], validator: &Validator) -> usize {
    passports.iter().filter(|passport| passport.is_valid(validator)).count()
}

pub fn solve(input: &str) -> Result<Answers, Error> {
    let passports = parse(input)?;
    let validator = Validator::new()?;
    debug!(passports = passports.len(), "parsed batch file");
    Ok(Answers::new(part_one(&passports), part_two(&passports, &validator)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn count_valid(input: &str) -> usize {
        part_two(&parse(input).unwrap(), &Validator::new().unwrap())
    }

    #[test]
    fn example_works() {
        let input = indoc! {"
            ecl:gry pid:860033327 eyr:2020 hcl:#fffffd
            byr:1937 iyr:2017 cid:147 hgt:183cm

            iyr:2013 ecl:amb cid:350 eyr:2023 pid:028048884
            hcl:#cfa07d byr:1929

            hcl:#ae17e1 iyr:2013
            eyr:2024
            ecl:brn pid:760753108 byr:1931
            hgt:179cm

            hcl:#cfa07d eyr:2025 pid:166559648
            iyr:2011 ecl:brn hgt:59in
        "};
        let passports = parse(input).unwrap();
        assert_eq!(passports.len(), 4);
        assert_eq!(part_one(&passports), 2);
    }

    #[test]
    fn invalid_examples_are_rejected() {
        let input = indoc! {"
            eyr:1972 cid:100
            hcl:#18171d ecl:amb hgt:170 pid:186cm iyr:2018 byr:1926

            iyr:2019
            hcl:#602927 eyr:1967 hgt:170cm
            ecl:grn pid:012533040 byr:1946

            hcl:dab227 iyr:2012
            ecl:brn hgt:182cm pid:021572410 eyr:2020 byr:1992 cid:277

            hgt:59cm ecl:zzz
            eyr:2038 hcl:74454a iyr:2023
            pid:3556412378 byr:2007
        "};
        assert_eq!(part_one(&parse(input).unwrap()), 4);
        assert_eq!(count_valid(input), 0);
    }

    #[test]
    fn valid_examples_are_accepted() {
        let input = indoc! {"
            pid:087499704 hgt:74in ecl:grn iyr:2012 eyr:2030 byr:1980
            hcl:#623a2f

            eyr:2029 ecl:blu cid:129 byr:1989
            iyr:2014 pid:896056539 hcl:#a97842 hgt:165cm

            hcl:#888785
            hgt:164cm byr:2001 iyr:2015 cid:88
            pid:545766238 ecl:hzl
            eyr:2022

            iyr:2010 hgt:158cm hcl:#b6652a ecl:blu byr:1944 eyr:2021 pid:093154719
        "};
        assert_eq!(count_valid(input), 4);
    }

    #[test]
    fn field_rules() {
        let validator = Validator::new().unwrap();
        let cases = [
            (Field::BirthYear, "2002", true),
            (Field::BirthYear, "2003", false),
            (Field::BirthYear, "02002", false),
            (Field::Height, "60in", true),
            (Field::Height, "190cm", true),
            (Field::Height, "190in", false),
            (Field::Height, "190", false),
            (Field::Height, "99999999999cm", false),
            (Field::HairColor, "#123abc", true),
            (Field::HairColor, "#123abz", false),
            (Field::HairColor, "123abc", false),
            (Field::EyeColor, "brn", true),
            (Field::EyeColor, "wat", false),
            (Field::EyeColor, "brnbrn", false),
            (Field::PassportId, "000000001", true),
            (Field::PassportId, "0123456789", false),
            (Field::CountryId, "anything", true),
        ];
        for (field, value, expected) in cases {
            assert_eq!(validator.is_valid(field, value), expected, "{field:?}:{value}");
        }
    }

    #[test]
    fn out_of_range_birth_year_is_present_but_invalid() {
        let input = "byr:1900 iyr:2015 eyr:2025 hgt:170cm hcl:#abcdef ecl:grn pid:123456789\n";
        assert_eq!(part_one(&parse(input).unwrap()), 1);
        assert_eq!(count_valid(input), 0);
    }

    #[test]
    fn missing_required_field_is_invalid() {
        let input = "iyr:2015 eyr:2025 hgt:170cm hcl:#abcdef ecl:grn pid:123456789 cid:1\n";
        assert_eq!(part_one(&parse(input).unwrap()), 0);
        assert_eq!(count_valid(input), 0);
    }

    #[test]
    fn repeated_field_keeps_last_value() {
        let passports = parse("byr:1900 byr:1990").unwrap();
        assert_eq!(passports[0].get(Field::BirthYear), Some("1990"));
    }

    #[test]
    fn unknown_field_only_fails_validation() {
        let input = "byr:1990 iyr:2015 eyr:2025 hgt:170cm hcl:#abcdef ecl:grn pid:123456789 foo:bar\n";
        let passports = parse(input).unwrap();
        assert_eq!(passports[0].unknown_keys(), ["foo"]);
        assert_eq!(part_one(&passports), 1);
        assert_eq!(count_valid(input), 0);
        assert_eq!(count_valid(&input.replace(" foo:bar", "")), 1);
    }

    #[test]
    fn crlf_line_endings_split_records() {
        let input = "byr:1990 iyr:2015 eyr:2025 hgt:170cm\r\nhcl:#abcdef ecl:grn pid:123456789\r\n\r\n\
                     byr:1900 iyr:2015 eyr:2025 hgt:170cm hcl:#abcdef ecl:grn pid:123456789\r\n";
        let passports = parse(input).unwrap();
        assert_eq!(passports.len(), 2);
        assert_eq!(passports[0].get(Field::PassportId), Some("123456789"));
        assert_eq!(part_one(&passports), 2);
        assert_eq!(count_valid(input), 1);
    }
}
