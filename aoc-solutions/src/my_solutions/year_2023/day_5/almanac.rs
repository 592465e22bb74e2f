//! Almanac text parsing

use super::error::AlmanacError;
use super::interval_map::{IntervalMap, triple_fits};
use super::pipeline::Pipeline;
use super::seeds::{SeedMode, SeedSet};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

static SEEDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^seeds:((?:\s+\d+)*)$").expect("seeds pattern is valid"));
static MAP_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z]+)-to-([a-z]+) map:$").expect("map title pattern is valid")
});
static MAPPING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\s+(\d+)\s+(\d+)$").expect("mapping pattern is valid")
});

/// Parsed puzzle input: the raw seed numbers and the stage pipeline.
///
/// Seed numbers are kept uninterpreted because the two parts read them
/// differently; see [`Almanac::seed_set`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Almanac {
    seeds: Vec<i64>,
    pipeline: Pipeline,
}

/// One recognised input line
enum Line<'a> {
    Seeds(Vec<i64>),
    MapTitle { source: &'a str, destination: &'a str },
    Mapping([i64; 3]),
}

impl Almanac {
    pub fn new(seeds: Vec<i64>, pipeline: Pipeline) -> Self {
        Self { seeds, pipeline }
    }

    /// Raw numbers from the `seeds:` line
    pub fn seeds(&self) -> &[i64] {
        &self.seeds
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Read the seed numbers in the given mode
    pub fn seed_set(&self, mode: SeedMode) -> Result<SeedSet, AlmanacError> {
        SeedSet::from_numbers(&self.seeds, mode)
    }
}

impl FromStr for Almanac {
    type Err = AlmanacError;

    /// Lines are lowercased and trimmed before matching; blank lines are
    /// skipped. Line numbers in errors count every raw line from 1.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut seeds: Option<Vec<i64>> = None;
        let mut stages: Vec<IntervalMap> = Vec::new();

        for (index, raw) in input.lines().enumerate() {
            let line_number = index + 1;
            let line = raw.trim().to_lowercase();
            if line.is_empty() {
                continue;
            }

            match classify(&line).ok_or_else(|| AlmanacError::MalformedLine {
                line_number,
                line: raw.trim().to_string(),
            })? {
                Line::Seeds(numbers) => {
                    if seeds.is_some() {
                        return Err(AlmanacError::DuplicateSeeds { line_number });
                    }
                    seeds = Some(numbers);
                }
                Line::MapTitle {
                    source,
                    destination,
                } => stages.push(IntervalMap::new(source, destination)),
                Line::Mapping([destination_start, source_start, length]) => stages
                    .last_mut()
                    .ok_or(AlmanacError::MappingOutsideMap { line_number })?
                    .add_range(destination_start, source_start, length),
            }
        }

        let seeds = seeds.ok_or(AlmanacError::MissingSeeds)?;
        Ok(Self::new(seeds, Pipeline::new(stages)))
    }
}

/// Match a cleaned line against the three grammars. Numbers that do not fit
/// in `i64`, and mappings whose last source or destination value would not,
/// make the line unrecognised.
fn classify(line: &str) -> Option<Line<'_>> {
    if let Some(caps) = SEEDS.captures(line) {
        let numbers = caps[1]
            .split_whitespace()
            .map(|n| n.parse().ok())
            .collect::<Option<Vec<i64>>>()?;
        return Some(Line::Seeds(numbers));
    }
    if let Some(caps) = MAP_TITLE.captures(line) {
        let (_, [source, destination]) = caps.extract();
        return Some(Line::MapTitle {
            source,
            destination,
        });
    }
    if let Some(caps) = MAPPING.captures(line) {
        let (_, fields) = caps.extract::<3>();
        let mut triple = [0i64; 3];
        for (slot, field) in triple.iter_mut().zip(fields) {
            *slot = field.parse().ok()?;
        }
        let [destination_start, source_start, length] = triple;
        if !triple_fits(destination_start, source_start, length) {
            return None;
        }
        return Some(Line::Mapping(triple));
    }
    None
}
