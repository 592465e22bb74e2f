//! Seed sets, either listed one by one or as compact ranges

use super::error::AlmanacError;
use rayon::prelude::*;
use std::ops::RangeInclusive;

/// How the numbers on the `seeds:` line are read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedMode {
    /// Every number is a seed
    Discrete,
    /// Consecutive numbers are `(start, length)` pairs
    Ranges,
}

/// Seeds `start..=start + length - 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedRange {
    pub start: i64,
    pub length: i64,
}

impl SeedRange {
    pub fn new(start: i64, length: i64) -> Self {
        Self { start, length }
    }

    pub fn is_empty(&self) -> bool {
        self.length <= 0
    }

    /// Last seed in the range; `None` when the range is empty or its end
    /// does not fit in `i64`
    pub fn last(&self) -> Option<i64> {
        if self.is_empty() {
            return None;
        }
        self.start.checked_add(self.length - 1)
    }

    /// Inclusive on both ends: `start` and `start + length - 1` are members,
    /// `start + length` is not.
    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.start <= value && value - self.start < self.length
    }

    /// Every seed in the range, clamped at `i64::MAX`
    #[allow(clippy::reversed_empty_ranges)]
    pub fn values(&self) -> RangeInclusive<i64> {
        if self.is_empty() {
            return 1..=0;
        }
        self.start..=self.start.saturating_add(self.length - 1)
    }
}

/// Initial values to push through the pipeline.
///
/// The range form stands for up to billions of seeds and is only ever
/// iterated lazily, never collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSet {
    Discrete(Vec<i64>),
    Ranges(Vec<SeedRange>),
}

impl SeedSet {
    /// Interpret raw `seeds:` numbers according to `mode`
    pub fn from_numbers(numbers: &[i64], mode: SeedMode) -> Result<Self, AlmanacError> {
        match mode {
            SeedMode::Discrete => Ok(Self::Discrete(numbers.to_vec())),
            SeedMode::Ranges => {
                if numbers.len() % 2 != 0 {
                    return Err(AlmanacError::UnpairedSeedRange {
                        count: numbers.len(),
                    });
                }
                Ok(Self::Ranges(
                    numbers
                        .chunks_exact(2)
                        .map(|pair| SeedRange::new(pair[0], pair[1]))
                        .collect(),
                ))
            }
        }
    }

    pub fn mode(&self) -> SeedMode {
        match self {
            Self::Discrete(_) => SeedMode::Discrete,
            Self::Ranges(_) => SeedMode::Ranges,
        }
    }

    /// True when the set holds no seed at all
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Discrete(values) => values.is_empty(),
            Self::Ranges(ranges) => ranges.iter().all(SeedRange::is_empty),
        }
    }

    /// Number of seeds, counted without expanding ranges
    pub fn count(&self) -> u64 {
        match self {
            Self::Discrete(values) => values.len() as u64,
            Self::Ranges(ranges) => ranges.iter().map(|r| r.length.max(0) as u64).sum(),
        }
    }

    pub fn contains(&self, value: i64) -> bool {
        match self {
            Self::Discrete(values) => values.contains(&value),
            Self::Ranges(ranges) => ranges.iter().any(|r| r.contains(value)),
        }
    }

    /// Lazily yield every seed
    pub fn values(&self) -> Box<dyn Iterator<Item = i64> + '_> {
        match self {
            Self::Discrete(values) => Box::new(values.iter().copied()),
            Self::Ranges(ranges) => Box::new(ranges.iter().flat_map(SeedRange::values)),
        }
    }

    /// Smallest seed of each range (each discrete seed for the listed form)
    pub fn starts(&self) -> Box<dyn Iterator<Item = i64> + '_> {
        match self {
            Self::Discrete(values) => Box::new(values.iter().copied()),
            Self::Ranges(ranges) => Box::new(
                ranges
                    .iter()
                    .filter(|r| !r.is_empty())
                    .map(|r| r.start),
            ),
        }
    }

    /// Apply `f` to every seed on the rayon pool and keep the minimum
    pub(crate) fn par_min_of<F>(&self, f: F) -> Option<i64>
    where
        F: Fn(i64) -> i64 + Send + Sync,
    {
        match self {
            Self::Discrete(values) => values.par_iter().map(|&v| f(v)).min(),
            Self::Ranges(ranges) => ranges
                .par_iter()
                .flat_map(|r| r.values().into_par_iter())
                .map(&f)
                .min(),
        }
    }
}
