//! Day 1: Secret Entrance
//!
//! A safe dial numbered 0-99 starts at 50 and is turned by a list of `L`/`R`
//! rotations. Part 1 counts rotations that leave it at 0, part 2 counts every
//! click that lands on 0.

mod dial;
mod rotation;

pub use dial::{Dial, ZeroCounter, count_zeros};
pub use rotation::{DIAL_SIZE, Direction, Position, Rotation, RotationParseError};

use crate::utils::lines::parse_lines;
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use tracing::debug;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 1, tags = ["dial"])]
pub struct Day1;

impl AocParser for Day1 {
    type SharedData<'a> = Vec<Rotation>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_lines(input, str::parse::<Rotation>)
    }
}

fn run(rotations: &[Rotation], counter: ZeroCounter) -> u64 {
    let mut dial = Dial::new(counter);
    dial.extend(rotations.iter().copied());
    debug!(
        rotations = rotations.len(),
        position = %dial.position(),
        count = dial.count(),
        ?counter,
        "dial finished"
    );
    dial.count()
}

impl PartSolver<1> for Day1 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(run(shared, ZeroCounter::EndsAtZero).to_string())
    }
}

impl PartSolver<2> for Day1 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(run(shared, ZeroCounter::CrossesZero).to_string())
    }
}
