//! AOC runner - command-line dispatcher for the Advent of Code 2025 solvers

mod cli;
mod config;
mod error;
mod executor;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::{RegistryBuilder, SolverRegistry};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::OutputFormatter;
use std::io::IsTerminal;
use tracing::{Level, error, info};

fn main() {
    let args = Args::parse_from(cli::normalize_args(std::env::args_os()));
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        error!("{e}");
        std::process::exit(1);
    }
}

/// WARN by default, DEBUG with `-v`
fn log_level(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::WARN }
}

fn init_tracing(verbose: bool) {
    tracing_subscriber::fmt()
        .with_max_level(log_level(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    info!(inputs_dir = %config.inputs_dir.display(), "configuration resolved");

    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, &config);

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        return Err(CliError::NoMatchingSolvers {
            day: config.day_filter.unwrap_or(0),
            part: config.part_filter.unwrap_or(0),
        });
    }

    let formatter = OutputFormatter::new(config.quiet);
    let parts: usize = work_items.iter().map(|w| w.parts.len()).sum();
    formatter.print_header(work_items.len(), parts);

    let mut results = Vec::new();
    executor.execute(&work_items, |result| {
        formatter.print_result(&result);
        results.push(result);
    });

    formatter.print_summary(&results);
    Ok(())
}

/// Build registry with tag filtering; a solver must carry every requested tag
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
