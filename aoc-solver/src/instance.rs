//! Parsed, timed solver instances behind a type-erased interface

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// One part's answer with the wall-clock window it was computed in
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub solve_start: DateTime<Utc>,
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A day's parsed input plus when parsing ran.
///
/// Parts run against the same `shared` data in whatever order they are asked
/// for, so a day that mutates it must leave it usable by its other parts.
pub struct SolverInstance<'a, S: Solver> {
    day: u8,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` for `day`, timing the parse.
    pub fn new(day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            day,
            shared,
            parse_start,
            parse_end,
        })
    }
}

/// What the runner sees of a day: solve a part by number, read the timings.
///
/// ```
/// use aoc_solver::{DynSolver, RegistryBuilder};
/// # use aoc_solver::{AocParser, ParseError, SolveError, Solver};
/// # struct Rolls;
/// # impl AocParser for Rolls {
/// #     type SharedData<'a> = &'a str;
/// #     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> { Ok(input) }
/// # }
/// # impl Solver for Rolls {
/// #     const PARTS: u8 = 1;
/// #     fn solve_part(grid: &mut Self::SharedData<'_>, _: u8) -> Result<String, SolveError> {
/// #         Ok(grid.matches('@').count().to_string())
/// #     }
/// # }
///
/// let registry = RegistryBuilder::new().register::<Rolls>(4).unwrap().build();
/// let mut day4: Box<dyn DynSolver> = registry.create_solver(4, "@@.\n.@.").unwrap();
///
/// let part1 = day4.solve(1).unwrap();
/// assert_eq!(part1.answer, "3");
/// assert!(part1.duration() >= chrono::TimeDelta::zero());
/// assert!(day4.parse_duration() >= chrono::TimeDelta::zero());
/// assert!(day4.solve(2).is_err());
/// ```
pub trait DynSolver {
    /// Solve `part`, rejecting parts outside `1..=parts()`
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn parse_start(&self) -> DateTime<Utc>;

    fn parse_end(&self) -> DateTime<Utc>;

    fn day(&self) -> u8;

    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<'a, S: SolverExt> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
