//! Advent of Code Solver Library
//!
//! A small type-safe framework for writing Advent of Code solvers and running
//! them by day. Each day is a solver with its own input parsing that produces an
//! answer for each of its parts.
//!
//! # Overview
//!
//! This library provides:
//! - [`AocParser`] / [`PartSolver`] / [`Solver`] traits for defining solvers
//! - [`SolverInstance`] and the type-erased [`DynSolver`] with parse/solve timing
//! - A day-indexed [`SolverRegistry`] fed by `inventory` plugins
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, ParseError, RegistryBuilder, SolveError, Solver};
//!
//! /// Final dial position after signed turns, starting from 50.
//! pub struct Dial;
//!
//! impl AocParser for Dial {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|turn| {
//!                 turn.parse::<i64>()
//!                     .map_err(|_| ParseError::InvalidFormat(format!("bad turn {turn:?}")))
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl Solver for Dial {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(turns: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => Ok((50 + turns.iter().sum::<i64>()).rem_euclid(100).to_string()),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! let registry = RegistryBuilder::new().register::<Dial>(1).unwrap().build();
//!
//! let mut solver = registry.create_solver(1, "-68\n48").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "30");
//! ```
//!
//! # Plugins and derive macros
//!
//! Solutions normally register themselves:
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(day = 1, tags = ["dial"])]
//! pub struct Day1;
//! ```
//!
//! `AocSolver` forwards `solve_part(shared, n)` to `PartSolver<n>`, and
//! `AutoRegisterSolver` submits a [`SolverPlugin`] picked up by
//! [`RegistryBuilder::register_all_plugins`].

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    DAYS, FactoryInfo, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin,
    SolverRegistry, SolverStorage,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
