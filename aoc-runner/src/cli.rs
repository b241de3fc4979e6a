//! CLI argument parsing using clap

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Advent of Code 2025 solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code 2025 solvers", version)]
pub struct Args {
    /// Day to run (0 runs every day, ignoring --part)
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=25))]
    pub day: u8,

    /// Part to run (0 runs every part of the selected day)
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=2))]
    pub part: u8,

    /// Tags to filter solvers (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding the `day<N>_input.txt` files (falls back to `AOC_INPUTS_DIR`)
    #[arg(short, long)]
    pub inputs_dir: Option<PathBuf>,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Log solver progress at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

/// Single-dash long flags accepted for compatibility: `-day 4 -part=2`
const SINGLE_DASH_LONG: [&str; 2] = ["day", "part"];

/// Rewrite `-day`/`-part` (optionally `=value`) into their `--` forms so clap
/// does not read them as `-d ay`. Everything after `--` is left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                passthrough = true;
                return arg;
            }
            let Some(flag) = text.strip_prefix('-').filter(|f| !f.starts_with('-')) else {
                return arg;
            };
            let name = flag.split_once('=').map_or(flag, |(name, _)| name);
            if SINGLE_DASH_LONG.contains(&name) {
                OsString::from(format!("-{text}"))
            } else {
                arg
            }
        })
        .collect()
}
