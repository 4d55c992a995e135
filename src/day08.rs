//! Day 8: Handheld Halting.

use bitvec::prelude::*;
use std::str::FromStr;
use tracing::debug;

use crate::{answer, Answers, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {Acc(i64), Jmp(i64), Nop(i64)}

impl Op {
    /// The corrupted-instruction swap: `jmp` and `nop` trade places, `acc` has no counterpart.
    pub fn flipped(self) -> Option<Op> {
        match self {
            Op::Jmp(arg) => Some(Op::Nop(arg)),
            Op::Nop(arg) => Some(Op::Jmp(arg)),
            Op::Acc(_) => None,
        }
    }
}

impl FromStr for Op {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((op_str, arg_str)) = s.split_once(' ') else {return Err(format!("`{s}` has no argument"))};
        let arg = arg_str.trim().parse::<i64>().map_err(|e| format!("bad argument `{arg_str}`: {e}"))?;
        match op_str {
            "acc" => Ok(Op::Acc(arg)),
            "jmp" => Ok(Op::Jmp(arg)),
            "nop" => Ok(Op::Nop(arg)),
            _ => Err(format!("unknown operation `{op_str}`")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    /// The instruction pointer left the program.
    Terminated,
    /// The instruction pointer came back to an instruction it already ran.
    Looped,
}

pub struct Cpu<'a> {
    code: &'a [Op],
    ip: i64,
    acc: i64,
    visited: BitVec,
}

impl<'a> Cpu<'a> {
    pub fn new(code: &'a [Op]) -> Self {
        Cpu {code, ip: 0, acc: 0, visited: bitvec![0; code.len()]}
    }

    pub fn acc(&self) -> i64 {
        self.acc
    }

    pub fn ip(&self) -> i64 {
        self.ip
    }

    pub fn run(&mut self) -> Halt {
        loop {
            if let Some(halt) = self.step() {return halt}
        }
    }

    /// Executes one instruction, or reports why none can run.
    pub fn step(&mut self) -> Option<Halt> {
        let Some(ix) = usize::try_from(self.ip).ok().filter(|&ix| ix < self.code.len()) else {
            return Some(Halt::Terminated);
        };
        if self.visited.replace(ix, true) {return Some(Halt::Looped)};
        match self.code[ix] {
            Op::Acc(arg) => {
                self.acc += arg;
                self.ip += 1
            },
            Op::Jmp(arg) => {
                self.ip = self.ip.saturating_add(arg)
            },
            Op::Nop(_) => {
                self.ip += 1
            },
        }
        None
    }
}

pub fn parse(input: &str) -> Result<Vec<Op>, Error> {
    input.lines().enumerate().map(|(ix, line)|
        line.trim().parse::<Op>().map_err(|e| Error::line(ix, e))
    ).collect()
}

/// Accumulator when the unmodified program halts.
pub fn part_one(code: &[Op]) -> i64 {
    let mut cpu = Cpu::new(code);
    let halt = cpu.run();
    debug!(?halt, ip = cpu.ip(), "unmodified program halted");
    cpu.acc()
}

/// Accumulator of the first program, in instruction order, that terminates
/// once a single `jmp`/`nop` is swapped.
pub fn part_two(code: &[Op]) -> Option<i64> {
    code.iter().enumerate().find_map(|(ix, op)| {
        let flipped = op.flipped()?;
        let mut patched = code.to_vec();
        patched[ix] = flipped;
        let mut cpu = Cpu::new(&patched);
        let halt = cpu.run();
        debug!(ix, ?halt, "tried flipping {op:?}");
        (halt == Halt::Terminated).then(|| cpu.acc())
    })
}

pub fn solve(input: &str) -> Result<Answers, Error> {
    let code = parse(input)?;
    debug!(instructions = code.len(), "parsed boot code");
    Ok(Answers::new(part_one(&code), answer(part_two(&code))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        nop +0
        acc +1
        jmp +4
        acc +3
        jmp -3
        acc -99
        acc +1
        jmp -4
        acc +6
    "};

    #[test]
    fn parses_signed_arguments() {
        let code = parse(EXAMPLE).unwrap();
        assert_eq!(code.len(), 9);
        assert_eq!(code[0], Op::Nop(0));
        assert_eq!(code[4], Op::Jmp(-3));
        assert_eq!(code[8], Op::Acc(6));
    }

    #[test]
    fn example_works() {
        let code = parse(EXAMPLE).unwrap();
        let mut cpu = Cpu::new(&code);
        assert_eq!(cpu.run(), Halt::Looped);
        assert_eq!(cpu.acc(), 5);
        assert_eq!(part_one(&code), 5);
        assert_eq!(part_two(&code), Some(8));
    }

    #[test]
    fn two_instruction_loop() {
        let code = parse("acc +1\njmp -1\n").unwrap();
        let mut cpu = Cpu::new(&code);
        assert_eq!(cpu.run(), Halt::Looped);
        assert_eq!(cpu.acc(), 1);
        assert_eq!(part_two(&code), Some(1));
    }

    #[test]
    fn running_off_either_end_terminates() {
        let code = [Op::Acc(2), Op::Jmp(-5)];
        let mut cpu = Cpu::new(&code);
        assert_eq!(cpu.run(), Halt::Terminated);
        assert_eq!((cpu.acc(), cpu.ip()), (2, -4));

        let code = [Op::Jmp(7), Op::Acc(1)];
        let mut cpu = Cpu::new(&code);
        assert_eq!(cpu.run(), Halt::Terminated);
        assert_eq!((cpu.acc(), cpu.ip()), (0, 7));

        assert_eq!(Cpu::new(&[]).run(), Halt::Terminated);
    }

    #[test]
    fn first_terminating_flip_wins() {
        // flipping either instruction terminates; the earlier one is taken
        let code = parse("nop +3\njmp +0\nacc +10\n").unwrap();
        assert_eq!(part_two(&code), Some(0));
    }

    #[test]
    fn no_terminating_flip_means_no_answer() {
        let code = parse("acc +1\nacc +1\njmp -2\njmp -1\n").unwrap();
        assert_eq!(part_two(&code), None);
        assert_eq!(solve("acc +1\nacc +1\njmp -2\njmp -1\n").unwrap(), Answers::new(2, "None"));
    }

    #[test]
    fn trials_do_not_leak_into_each_other() {
        let code = parse(EXAMPLE).unwrap();
        let before = code.clone();
        part_two(&code);
        assert_eq!(code, before);
    }

    #[test]
    fn malformed_instruction_is_fatal() {
        assert!(matches!(parse("nop +0\nhcf +1\n"), Err(Error::Line {line: 2, ..})));
        assert!(matches!(parse("acc\n"), Err(Error::Line {line: 1, ..})));
        assert!(matches!(parse("acc +x\n"), Err(Error::Line {line: 1, ..})));
    }
}
