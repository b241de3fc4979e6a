//! Day 2: Gift Shop
//!
//! Product id ranges (`11-22,95-115,...`) hide invalid ids made of a repeated
//! digit sequence. Part 1 sums ids repeated exactly twice, part 2 ids repeated
//! at least twice.

use crate::utils::lines::parse_lines;
use anyhow::{Context, anyhow, bail};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use std::ops::RangeInclusive;
use std::str::FromStr;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 2, tags = ["ids"])]
pub struct Day2;

/// Inclusive range of product ids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    start: u64,
    end: u64,
}

impl IdRange {
    pub fn new(start: u64, end: u64) -> anyhow::Result<Self> {
        if start > end {
            bail!("range start {start} is greater than end {end}");
        }
        Ok(Self { start, end })
    }

    pub fn ids(self) -> RangeInclusive<u64> {
        self.start..=self.end
    }
}

impl FromStr for IdRange {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| anyhow!("range {s:?} is missing '-'"))?;
        let start = start
            .trim()
            .parse()
            .with_context(|| format!("invalid range start in {s:?}"))?;
        let end = end
            .trim()
            .parse()
            .with_context(|| format!("invalid range end in {s:?}"))?;
        Self::new(start, end)
    }
}

/// Rule deciding which ids are invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPattern {
    /// Some digit sequence written exactly twice (`6464`)
    ExactlyTwice,
    /// Some digit sequence written two or more times (`121212`)
    AtLeastTwice,
}

impl IdPattern {
    pub fn is_invalid(self, id: u64) -> bool {
        let digits = id.to_string();
        let len = digits.len();
        match self {
            IdPattern::ExactlyTwice => len % 2 == 0 && repeats(&digits, len / 2),
            IdPattern::AtLeastTwice => {
                (1..=len / 2).any(|width| len % width == 0 && repeats(&digits, width))
            }
        }
    }
}

/// Whether `digits` is its first `width` digits over and over.
fn repeats(digits: &str, width: usize) -> bool {
    let bytes = digits.as_bytes();
    let unit = &bytes[..width];
    bytes.chunks(width).all(|chunk| chunk == unit)
}

/// Sum of every invalid id across `ranges`; overlapping ranges count twice.
pub fn sum_invalid(ranges: &[IdRange], pattern: IdPattern) -> u64 {
    ranges
        .iter()
        .flat_map(|range| range.ids())
        .filter(|&id| pattern.is_invalid(id))
        .sum()
}

fn parse_ranges(line: &str) -> anyhow::Result<Vec<IdRange>> {
    line.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

impl AocParser for Day2 {
    type SharedData<'a> = Vec<IdRange>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let ranges = parse_lines(input, parse_ranges)?;
        Ok(ranges.into_iter().flatten().collect())
    }
}

impl PartSolver<1> for Day2 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_invalid(shared, IdPattern::ExactlyTwice).to_string())
    }
}

impl PartSolver<2> for Day2 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_invalid(shared, IdPattern::AtLeastTwice).to_string())
    }
}
