//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use std::path::{Path, PathBuf};

/// Environment variable consulted when `--inputs-dir` is absent
pub const INPUTS_DIR_ENV: &str = "AOC_INPUTS_DIR";

/// Directories tried, relative to the working directory, when neither the flag
/// nor the environment variable names one
pub const INPUTS_DIR_CANDIDATES: [&str; 3] = ["inputs", "../inputs", "aoc-runner/inputs"];

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Directory holding the puzzle inputs
    pub inputs_dir: PathBuf,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args, resolving the inputs directory
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let from_env = std::env::var_os(INPUTS_DIR_ENV).map(PathBuf::from);
        let base = std::env::current_dir().unwrap_or_default();
        let inputs_dir = resolve_inputs_dir(args.inputs_dir, from_env, &base)?;

        let day_filter = (args.day != 0).then_some(args.day);
        // every day runs in full unless one day is picked
        let part_filter = day_filter.and((args.part != 0).then_some(args.part));

        Ok(Config {
            day_filter,
            part_filter,
            tags: args.tags,
            inputs_dir,
            quiet: args.quiet,
        })
    }
}

/// Pick the inputs directory: an explicit path wins, then the environment,
/// then the first existing candidate under `base`.
///
/// Explicit and environment paths are used as given; a missing file inside
/// them is reported per day later on.
pub fn resolve_inputs_dir(
    explicit: Option<PathBuf>,
    from_env: Option<PathBuf>,
    base: &Path,
) -> Result<PathBuf, CliError> {
    if let Some(dir) = explicit.or(from_env) {
        return Ok(dir);
    }

    let tried: Vec<PathBuf> = INPUTS_DIR_CANDIDATES
        .iter()
        .map(|candidate| base.join(candidate))
        .collect();

    tried
        .iter()
        .find(|dir| dir.is_dir())
        .cloned()
        .ok_or(CliError::InputsDirNotFound { tried })
}
