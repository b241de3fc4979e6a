//! Line-oriented input parsing shared by the solutions

use aoc_solver::ParseError;
use std::fmt::Display;

/// Parse every non-blank line of `input` with `parse_line`.
///
/// Lines are numbered from 1 and trimmed before parsing; blank lines are
/// skipped but still counted. The first failing line aborts the whole parse
/// with [`ParseError::AtLine`].
pub fn parse_lines<'a, T, E, F>(input: &'a str, mut parse_line: F) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&'a str) -> Result<T, E>,
    E: Display,
{
    input
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_no, line)| {
            parse_line(line).map_err(|e| ParseError::AtLine {
                line: line_no,
                message: format!("{e:#}"),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_skipped_and_trimmed() {
        let parsed = parse_lines("  1\n\n2  \n\n", |l| l.parse::<u8>()).unwrap();
        assert_eq!(parsed, vec![1, 2]);
    }

    #[test]
    fn test_error_reports_physical_line() {
        let err = parse_lines("1\n\n2\nx\n3", |l| l.parse::<u8>()).unwrap_err();
        assert_eq!(err.line(), Some(4));
        assert!(err.to_string().starts_with("line 4: "));
    }

    #[test]
    fn test_stops_at_first_error() {
        let mut seen = Vec::new();
        let result = parse_lines("a\nb\nc", |l| {
            seen.push(l);
            if l == "b" { Err("bad") } else { Ok(()) }
        });
        assert!(result.is_err());
        assert_eq!(seen, vec!["a", "b"]);
    }

    #[test]
    fn test_empty_input() {
        let parsed = parse_lines("", |l| l.parse::<u8>()).unwrap();
        assert!(parsed.is_empty());
    }
}
