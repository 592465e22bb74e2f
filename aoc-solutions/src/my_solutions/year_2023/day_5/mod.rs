//! 2023 day 5: If You Give A Seed A Fertilizer
//!
//! Seeds pass through a chain of almanac maps (seed-to-soil, soil-to-fertilizer,
//! ..., humidity-to-location). Each map shifts values that fall in one of its
//! ranges and passes everything else through unchanged. Both parts ask for the
//! lowest location any seed reaches:
//!
//! - part 1 reads the `seeds:` numbers as individual seeds and maps each one
//!   forward;
//! - part 2 reads them as `(start, length)` pairs covering billions of seeds,
//!   so it walks locations upward from 0 and maps each one back until it
//!   lands inside a seed range.

mod almanac;
mod error;
mod interval_map;
mod pipeline;
mod resolver;
mod seeds;

pub use almanac::Almanac;
pub use error::{AlmanacError, ResolveError};
pub use interval_map::{IntervalMap, MapRange};
pub use pipeline::Pipeline;
pub use resolver::{SeedResolver, Strategy};
pub use seeds::{SeedMode, SeedRange, SeedSet};

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 5, tags = ["almanac", "ranges"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Almanac;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input.parse().map_err(|e| match e {
            AlmanacError::MissingSeeds => ParseError::MissingData(e.to_string()),
            _ => ParseError::InvalidFormat(e.to_string()),
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        lowest_location(shared, SeedMode::Discrete)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        lowest_location(shared, SeedMode::Ranges)
    }
}

fn lowest_location(almanac: &Almanac, mode: SeedMode) -> Result<String, SolveError> {
    let seeds = almanac.seed_set(mode).map_err(SolveError::failed)?;
    SeedResolver::new(almanac.pipeline())
        .lowest_location(&seeds)
        .map(|location| location.to_string())
        .map_err(SolveError::failed)
}
