//! Offset-translating interval maps with passthrough default

use std::fmt;

/// Inclusive source interval `[min, max]` whose values shift by `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapRange {
    min: i64,
    max: i64,
    offset: i64,
}

impl MapRange {
    /// Build from an almanac triple. `None` for a zero length, which covers
    /// no values, and for triples whose source or destination end does not
    /// fit in `i64`.
    pub fn from_triple(destination_start: i64, source_start: i64, length: i64) -> Option<Self> {
        if !triple_fits(destination_start, source_start, length) || length == 0 {
            return None;
        }
        Some(Self {
            min: source_start,
            max: source_start + length - 1,
            offset: destination_start.checked_sub(source_start)?,
        })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Mapped value if `input` lies in the source interval
    #[inline]
    pub fn forward(&self, input: i64) -> Option<i64> {
        if self.contains(input) {
            input.checked_add(self.offset)
        } else {
            None
        }
    }

    /// Source value that maps to `output` through this range, if any
    #[inline]
    pub fn reverse(&self, output: i64) -> Option<i64> {
        let candidate = output.checked_sub(self.offset)?;
        self.contains(candidate).then_some(candidate)
    }
}

/// Whether both ends of a `destination source length` triple are
/// representable: non-negative length and no overflow at `start + length - 1`.
pub fn triple_fits(destination_start: i64, source_start: i64, length: i64) -> bool {
    length >= 0
        && (length == 0
            || (destination_start.checked_add(length - 1).is_some()
                && source_start.checked_add(length - 1).is_some()))
}

/// One almanac stage, e.g. `seed-to-soil`.
///
/// Ranges are kept in insertion order and may overlap; lookups in both
/// directions take the first range that matches and fall back to the value
/// itself. When ranges overlap the two directions can pick different ranges,
/// so `map_reverse` is only a true inverse of `map_forward` for maps whose
/// ranges are disjoint in both source and destination space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalMap {
    source: String,
    destination: String,
    ranges: Vec<MapRange>,
}

impl IntervalMap {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            ranges: Vec::new(),
        }
    }

    /// Append a range from a `destination source length` triple.
    /// Zero-length triples are ignored.
    pub fn add_range(&mut self, destination_start: i64, source_start: i64, length: i64) {
        if let Some(range) = MapRange::from_triple(destination_start, source_start, length) {
            self.ranges.push(range);
        }
    }

    pub fn map_forward(&self, input: i64) -> i64 {
        self.ranges
            .iter()
            .find_map(|range| range.forward(input))
            .unwrap_or(input)
    }

    pub fn map_reverse(&self, output: i64) -> i64 {
        self.ranges
            .iter()
            .find_map(|range| range.reverse(output))
            .unwrap_or(output)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Display name, `"seed to soil"`
    pub fn name(&self) -> String {
        format!("{} to {}", self.source, self.destination)
    }

    pub fn ranges(&self) -> &[MapRange] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl fmt::Display for IntervalMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}-to-{} map:", self.source, self.destination)?;
        for range in &self.ranges {
            writeln!(
                f,
                "{} {} {}",
                range.min + range.offset,
                range.min,
                range.max - range.min + 1
            )?;
        }
        Ok(())
    }
}
