//! Day 3: Lobby
//!
//! Each line is a bank of batteries labelled with a joltage digit. Turning on
//! `n` batteries (kept in order) produces the number their digits spell; the
//! answer is the sum of each bank's best. Part 1 uses 2 batteries, part 2 uses 12.

use crate::utils::lines::parse_lines;
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use std::cmp::Reverse;
use std::str::FromStr;
use thiserror::Error;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 3, tags = ["greedy"])]
pub struct Day3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankParseError {
    #[error("invalid battery {0:?}, expected a digit")]
    InvalidDigit(char),
}

/// One row of batteries, as joltage digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank(Vec<u8>);

impl FromStr for Bank {
    type Err = BankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or(BankParseError::InvalidDigit(c))
            })
            .collect::<Result<_, _>>()
            .map(Bank)
    }
}

impl Bank {
    /// Largest number spelled by `batteries` digits picked in order, or 0 when
    /// the bank is too small.
    pub fn max_joltage(&self, batteries: usize) -> u64 {
        let digits = &self.0;
        if batteries == 0 || digits.len() < batteries {
            return 0;
        }

        let mut joltage = 0;
        let mut next = 0;
        for remaining in (1..=batteries).rev() {
            // leave room for the `remaining - 1` digits still to pick
            let window = &digits[next..=digits.len() - remaining];
            let (offset, &digit) = window
                .iter()
                .enumerate()
                .max_by_key(|&(i, &d)| (d, Reverse(i)))
                .unwrap_or((0, &0));
            joltage = joltage * 10 + u64::from(digit);
            next += offset + 1;
        }
        joltage
    }
}

pub fn total_joltage(banks: &[Bank], batteries: usize) -> u64 {
    banks.iter().map(|bank| bank.max_joltage(batteries)).sum()
}

impl AocParser for Day3 {
    type SharedData<'a> = Vec<Bank>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_lines(input, str::parse::<Bank>)
    }
}

impl PartSolver<1> for Day3 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_joltage(shared, 2).to_string())
    }
}

impl PartSolver<2> for Day3 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_joltage(shared, 12).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver;

    const EXAMPLE: &str = "987654321111111
811111111111119
234234234234278
818181911112111
";

    fn bank(s: &str) -> Bank {
        s.parse().unwrap()
    }

    #[test]
    fn test_two_batteries() {
        assert_eq!(bank("987654321111111").max_joltage(2), 98);
        assert_eq!(bank("811111111111119").max_joltage(2), 89);
        assert_eq!(bank("234234234234278").max_joltage(2), 78);
        assert_eq!(bank("818181911112111").max_joltage(2), 92);
    }

    #[test]
    fn test_twelve_batteries() {
        assert_eq!(bank("987654321111111").max_joltage(12), 987654321111);
        assert_eq!(bank("811111111111119").max_joltage(12), 811111111119);
        assert_eq!(bank("234234234234278").max_joltage(12), 434234234278);
        assert_eq!(bank("818181911112111").max_joltage(12), 888911112111);
    }

    #[test]
    fn test_short_bank() {
        assert_eq!(bank("7").max_joltage(2), 0);
        assert_eq!(bank("79").max_joltage(2), 79);
    }

    #[test]
    fn test_examples() {
        let mut shared = Day3::parse(EXAMPLE).unwrap();
        assert_eq!(Day3::solve_part(&mut shared, 1).unwrap(), "357");
        assert_eq!(Day3::solve_part(&mut shared, 2).unwrap(), "3121910778619");
    }

    #[test]
    fn test_rejects_non_digit() {
        let err = Day3::parse("1234\n12a4").unwrap_err();
        assert_eq!(err.line(), Some(2));
        assert!(err.to_string().contains("'a'"), "{err}");
    }
}
