//! Advent of Code 2025 puzzle solutions with automatic registration
//!
//! Each day is a unit struct deriving `AocSolver` and `AutoRegisterSolver`, so
//! linking this crate is enough for `RegistryBuilder::register_all_plugins` to
//! find every solution.

pub mod utils;
pub mod year_2025;
