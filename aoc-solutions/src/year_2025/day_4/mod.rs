//! Day 4: Printing Department
//!
//! Rolls of paper (`@`) sit on a grid; a forklift can reach a roll with fewer
//! than four rolls among its eight neighbours. Part 1 counts reachable rolls,
//! part 2 keeps removing them until none are reachable.

mod grid;

pub use grid::{CROWDED, CellParseError, Grid, GridPos};

use crate::utils::lines::parse_lines;
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 4, tags = ["grid"])]
pub struct Day4;

impl AocParser for Day4 {
    type SharedData<'a> = Grid;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_lines(input, Grid::parse_row).map(Grid::from_rows)
    }
}

impl PartSolver<1> for Day4 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.count_removable().to_string())
    }
}

impl PartSolver<2> for Day4 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // reduce a copy so part 1 still sees the original grid
        let mut grid = shared.clone();
        Ok(grid.reduce().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver;

    const EXAMPLE: &str = "..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.
";

    #[test]
    fn test_part1_example() {
        let mut shared = Day4::parse(EXAMPLE).unwrap();
        assert_eq!(Day4::solve_part(&mut shared, 1).unwrap(), "13");
    }

    #[test]
    fn test_part2_example() {
        let mut shared = Day4::parse(EXAMPLE).unwrap();
        assert_eq!(Day4::solve_part(&mut shared, 2).unwrap(), "43");
    }

    #[test]
    fn test_parts_in_any_order() {
        let mut shared = Day4::parse(EXAMPLE).unwrap();
        assert_eq!(Day4::solve_part(&mut shared, 2).unwrap(), "43");
        assert_eq!(Day4::solve_part(&mut shared, 1).unwrap(), "13");
    }

    #[test]
    fn test_invalid_character_reports_line() {
        let err = Day4::parse("@.@\n\n.@#\n").unwrap_err();
        assert_eq!(err.line(), Some(3));
        assert!(err.to_string().contains("'#'"), "{err}");
    }

    #[test]
    fn test_empty_grid() {
        let mut shared = Day4::parse("\n\n").unwrap();
        assert_eq!(Day4::solve_part(&mut shared, 1).unwrap(), "0");
        assert_eq!(Day4::solve_part(&mut shared, 2).unwrap(), "0");
    }
}
