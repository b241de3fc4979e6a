//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use aoc_solver::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use tracing::{Level, debug, event, info, instrument};

/// Level of the log event for a day or part that failed; the formatter
/// reports the failure itself
pub const SOFT_FAILURE: Level = Level::INFO;

/// Result from a single solver execution
#[derive(Debug, Clone)]
pub struct SolverResult {
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    /// Set on the first part reported for a day whose input parsed
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs the selected solvers one after another, reporting each part as it finishes
pub struct Executor {
    registry: SolverRegistry,
    inputs_dir: PathBuf,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs_dir: config.inputs_dir.clone(),
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .storage()
            .iter_info()
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and the solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Path of the input file for `day`
    pub fn input_path(&self, day: u8) -> PathBuf {
        input_path(&self.inputs_dir, day)
    }

    /// Execute all work items in order, handing each result to `on_result`
    pub fn execute<F>(&self, work_items: &[WorkItem], mut on_result: F)
    where
        F: FnMut(SolverResult),
    {
        for work in work_items {
            self.run_solver(work, &mut on_result);
        }
    }

    /// Run a single solver for its selected parts
    #[instrument(skip_all, fields(day = work.day))]
    fn run_solver<F>(&self, work: &WorkItem, on_result: &mut F)
    where
        F: FnMut(SolverResult),
    {
        let input = match self.read_input(work.day) {
            Ok(input) => input,
            Err(e) => {
                event!(SOFT_FAILURE, error = %e, "skipping day");
                report_failure(work, e.into(), on_result);
                return;
            }
        };

        let mut solver = match self.registry.create_solver(work.day, &input) {
            Ok(solver) => solver,
            Err(e) => {
                event!(SOFT_FAILURE, error = %e, "input rejected");
                report_failure(work, ExecutorError::from(e).into(), on_result);
                return;
            }
        };

        let mut parse_duration = Some(solver.parse_duration());
        debug!(parse = ?parse_duration, "input parsed");

        for part in work.parts.clone() {
            let result = solve_part(work.day, part, &mut *solver, parse_duration.take());
            match &result.answer {
                Ok(_) => info!(part, "solved"),
                Err(e) => event!(SOFT_FAILURE, part, error = %e, "part failed"),
            }
            on_result(result);
        }
    }

    fn read_input(&self, day: u8) -> Result<String, ExecutorError> {
        let path = self.input_path(day);
        match std::fs::read_to_string(&path) {
            Ok(input) => Ok(input),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ExecutorError::MissingInput(path))
            }
            Err(source) => Err(ExecutorError::InputRead { path, source }),
        }
    }
}

/// `<dir>/day<N>_input.txt`
pub fn input_path(inputs_dir: &Path, day: u8) -> PathBuf {
    inputs_dir.join(format!("day{day}_input.txt"))
}

/// One error result per selected part, all sharing the same error
fn report_failure<F>(work: &WorkItem, error: ArcExecutorError, on_result: &mut F)
where
    F: FnMut(SolverResult),
{
    for part in work.parts.clone() {
        on_result(SolverResult {
            day: work.day,
            part,
            answer: Err(error.clone()),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        });
    }
}

fn solve_part(
    day: u8,
    part: u8,
    solver: &mut dyn DynSolver,
    parse_duration: Option<TimeDelta>,
) -> SolverResult {
    match solver.solve(part) {
        Ok(solved) => SolverResult {
            day,
            part,
            solve_duration: solved.duration(),
            answer: Ok(solved.answer),
            parse_duration,
        },
        Err(e) => SolverResult {
            day,
            part,
            answer: Err(ExecutorError::from(aoc_solver::SolverError::from(e)).into()),
            parse_duration,
            solve_duration: TimeDelta::zero(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::RegistryBuilder;
    use tempfile::TempDir;

    const DAY1_EXAMPLE: &str = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n";

    fn executor(dir: &Path, day: Option<u8>, part: Option<u8>) -> Executor {
        let registry = RegistryBuilder::new()
            .register_all_plugins()
            .unwrap()
            .build();
        let config = Config {
            day_filter: day,
            part_filter: part,
            tags: vec![],
            inputs_dir: dir.to_path_buf(),
            quiet: true,
        };
        Executor::new(registry, &config)
    }

    fn run(executor: &Executor) -> Vec<SolverResult> {
        let mut results = Vec::new();
        executor.execute(&executor.collect_work_items(), |r| results.push(r));
        results
    }

    #[test]
    fn test_input_path_layout() {
        assert_eq!(
            input_path(Path::new("inputs"), 4),
            PathBuf::from("inputs/day4_input.txt")
        );
    }

    #[test]
    fn test_day_filter_selects_both_parts() {
        let dir = TempDir::new().unwrap();
        let items = executor(dir.path(), Some(1), None).collect_work_items();
        assert_eq!(
            items,
            vec![WorkItem {
                day: 1,
                parts: 1..=2
            }]
        );
    }

    #[test]
    fn test_part_filter_applies_to_every_day() {
        let dir = TempDir::new().unwrap();
        let items = executor(dir.path(), None, Some(2)).collect_work_items();
        assert!(items.len() >= 4);
        assert!(items.iter().all(|w| w.parts == (2..=2)));
        assert!(items.windows(2).all(|w| w[0].day < w[1].day));
    }

    #[test]
    fn test_unregistered_day_has_no_work() {
        let dir = TempDir::new().unwrap();
        assert!(
            executor(dir.path(), Some(25), None)
                .collect_work_items()
                .is_empty()
        );
    }

    #[test]
    fn test_day1_example_answers() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("day1_input.txt"), DAY1_EXAMPLE).unwrap();

        let results = run(&executor(dir.path(), Some(1), None));
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].part, 1);
        assert_eq!(results[0].answer.as_deref().unwrap(), "3");
        assert!(results[0].parse_duration.is_some());
        assert_eq!(results[1].part, 2);
        assert_eq!(results[1].answer.as_deref().unwrap(), "6");
        assert!(results[1].parse_duration.is_none());
    }

    #[test]
    fn test_missing_input_is_soft() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("day1_input.txt"), DAY1_EXAMPLE).unwrap();

        let results = run(&executor(dir.path(), None, Some(1)));
        let day1 = results.iter().find(|r| r.day == 1).unwrap();
        assert_eq!(day1.answer.as_deref().unwrap(), "3");

        let day2 = results.iter().find(|r| r.day == 2).unwrap();
        let err = day2.answer.as_ref().unwrap_err();
        assert!(matches!(err.inner(), ExecutorError::MissingInput(_)));
        assert!(err.to_string().contains("day2_input.txt"), "{err}");
    }

    #[test]
    fn test_parse_error_reported_for_each_part() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("day4_input.txt"), "@.@\n.@.\n@#@\n").unwrap();

        let results = run(&executor(dir.path(), Some(4), None));
        assert_eq!(results.len(), 2);
        for result in &results {
            let err = result.answer.as_ref().unwrap_err();
            assert!(matches!(err.inner(), ExecutorError::Solver(_)));
            assert!(err.to_string().contains("line 3"), "{err}");
        }
    }
}
