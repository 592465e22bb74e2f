//! Advent of Code puzzle solutions with automatic registration
//!
//! Solutions are organised by year. Each one derives `AutoRegisterSolver`,
//! so linking this crate is enough for the CLI to discover it.

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
