//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Announce how many parts are about to run
    pub fn print_header(&self, solvers: usize, parts: usize) {
        if !self.quiet {
            println!("Running {} solver(s), {} part(s)...", solvers, parts);
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        match (self.quiet, &result.answer) {
            (true, Ok(answer)) => println!("{}", answer),
            (true, Err(e)) => eprintln!("Error: {}", e),
            (false, Ok(_)) => println!("{}", render_result(result)),
            (false, Err(_)) => eprintln!("{}", render_result(result)),
        }
    }

    /// Print solved/failed counts and the elapsed wall-clock time
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let (solved, failed) = tally(results);
        let total_solve_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();

        println!();
        println!("--- Summary ---");
        println!("Parts: {} solved, {} failed", solved, failed);
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

/// Count of successful and failed results
pub fn tally(results: &[SolverResult]) -> (usize, usize) {
    let solved = results.iter().filter(|r| r.answer.is_ok()).count();
    (solved, results.len() - solved)
}

/// One line for a result in full mode
pub fn render_result(result: &SolverResult) -> String {
    let prefix = format!("Day {} Part {}", result.day, result.part);

    match &result.answer {
        Ok(answer) => {
            let parse_timing = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            format!(
                "✅ {}: {} ({}solve: {})",
                prefix,
                answer,
                parse_timing,
                format_duration(result.solve_duration)
            )
        }
        Err(e) => format!("❌ {}: {}", prefix, e),
    }
}

/// Format a TimeDelta for display
pub fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExecutorError;
    use std::path::PathBuf;

    fn solved(part: u8, answer: &str, parse: Option<TimeDelta>) -> SolverResult {
        SolverResult {
            day: 1,
            part,
            answer: Ok(answer.to_string()),
            parse_duration: parse,
            solve_duration: TimeDelta::microseconds(42),
        }
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-5)), "-5µs");
    }

    #[test]
    fn test_format_std_duration_units() {
        assert_eq!(
            format_std_duration(std::time::Duration::from_micros(12)),
            "12µs"
        );
        assert_eq!(
            format_std_duration(std::time::Duration::from_millis(3)),
            "3.00ms"
        );
    }

    #[test]
    fn test_parse_time_only_with_first_part() {
        let first = solved(1, "3", Some(TimeDelta::microseconds(7)));
        let second = solved(2, "6", None);
        assert_eq!(
            render_result(&first),
            "✅ Day 1 Part 1: 3 (parse: 7µs, solve: 42µs)"
        );
        assert_eq!(render_result(&second), "✅ Day 1 Part 2: 6 (solve: 42µs)");
    }

    #[test]
    fn test_failure_line_and_tally() {
        let failed = SolverResult {
            day: 2,
            part: 1,
            answer: Err(
                ExecutorError::MissingInput(PathBuf::from("inputs/day2_input.txt")).into(),
            ),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        };
        assert_eq!(
            render_result(&failed),
            "❌ Day 2 Part 1: Input file not found at inputs/day2_input.txt"
        );
        assert_eq!(tally(&[solved(1, "3", None), failed]), (1, 1));
    }
}
