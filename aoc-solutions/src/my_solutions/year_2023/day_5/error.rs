//! Almanac parse and resolution errors

use thiserror::Error;

/// Fatal problems in almanac text. Nothing is recovered locally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlmanacError {
    #[error("line {line_number} did not match any expected format: \"{line}\"")]
    MalformedLine { line_number: usize, line: String },

    #[error("no seeds line found")]
    MissingSeeds,

    #[error("line {line_number} declares seeds a second time")]
    DuplicateSeeds { line_number: usize },

    #[error("line {line_number} has a mapping before any map title")]
    MappingOutsideMap { line_number: usize },

    #[error("{count} seed numbers cannot be read as (start, length) pairs")]
    UnpairedSeedRange { count: usize },
}

/// Resolution failure; the arithmetic itself cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("the seed set is empty, so there is no lowest location")]
    NoMinimum,
}
