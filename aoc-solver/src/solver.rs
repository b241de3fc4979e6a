//! Parsing and per-part solving traits

use crate::error::{ParseError, SolveError};

/// Turns a day's raw input into the data every part works on.
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// /// Each line is a bank of joltage digits.
/// struct Banks;
///
/// impl AocParser for Banks {
///     type SharedData<'a> = Vec<&'a str>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .enumerate()
///             .map(|(i, line)| match line.chars().find(|c| !c.is_ascii_digit()) {
///                 None => Ok(line),
///                 Some(c) => Err(ParseError::AtLine {
///                     line: i + 1,
///                     message: format!("invalid battery {c:?}"),
///                 }),
///             })
///             .collect()
///     }
/// }
///
/// assert_eq!(Banks::parse("987\n811").unwrap(), ["987", "811"]);
/// assert_eq!(Banks::parse("12\n1x").unwrap_err().line(), Some(2));
/// ```
pub trait AocParser {
    /// Parsed input, owned (`Vec<Rotation>`, `Grid`) or borrowed from the
    /// input (`Vec<&'a str>`). Parts get it mutably and may cache in it.
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Part `N` of a day, usually wired into [`Solver`] by `#[derive(AocSolver)]`.
///
/// ```
/// use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
///
/// /// Signed dial turns, `L` negative.
/// struct Turns;
///
/// impl AocParser for Turns {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .split_whitespace()
///             .map(|t| match t.split_at(1) {
///                 ("L", n) => n.parse::<i64>().map(|n| -n),
///                 (_, n) => n.parse::<i64>(),
///             })
///             .collect::<Result<_, _>>()
///             .map_err(|e| ParseError::InvalidFormat(e.to_string()))
///     }
/// }
///
/// impl PartSolver<1> for Turns {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         let end = shared.iter().fold(50i64, |pos, turn| (pos + turn).rem_euclid(100));
///         Ok(end.to_string())
///     }
/// }
///
/// let mut turns = Turns::parse("L68 R48").unwrap();
/// assert_eq!(<Turns as PartSolver<1>>::solve(&mut turns).unwrap(), "30");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A whole day: how many parts it has and how to run one by number.
///
/// Hand-written impls are fine for one-off solvers:
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// /// Counts `@` cells; part 2 is not solved yet.
/// struct Rolls;
///
/// impl AocParser for Rolls {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl Solver for Rolls {
///     const PARTS: u8 = 2;
///
///     fn solve_part(grid: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(grid.matches('@').count().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut grid = Rolls::parse("@.@\n.@.").unwrap();
/// assert_eq!(Rolls::solve_part(&mut grid, 1).unwrap(), "3");
/// assert!(Rolls::solve_part(&mut grid, 2).is_err());
/// ```
pub trait Solver: AocParser {
    const PARTS: u8;

    /// Answer for `part`, or [`SolveError::PartNotImplemented`].
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked dispatch used by the runner.
pub trait SolverExt: Solver {
    /// [`SolveError::PartOutOfRange`] unless `1 <= part <= PARTS`.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
