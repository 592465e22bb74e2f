//! Chained interval maps

use super::interval_map::IntervalMap;

/// Ordered chain of stages; each stage's output feeds the next stage.
///
/// Stage labels are never checked for continuity. An empty pipeline is the
/// identity in both directions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    stages: Vec<IntervalMap>,
}

impl Pipeline {
    pub fn new(stages: Vec<IntervalMap>) -> Self {
        Self { stages }
    }

    pub fn push(&mut self, stage: IntervalMap) {
        self.stages.push(stage);
    }

    pub fn stages(&self) -> &[IntervalMap] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run `input` through every stage in order
    pub fn map_forward(&self, input: i64) -> i64 {
        self.stages
            .iter()
            .fold(input, |value, stage| stage.map_forward(value))
    }

    /// Run `output` back through every stage, last stage first
    pub fn map_reverse(&self, output: i64) -> i64 {
        self.stages
            .iter()
            .rev()
            .fold(output, |value, stage| stage.map_reverse(value))
    }

    /// Every intermediate value of a forward run, starting with `input`.
    /// The last element equals `map_forward(input)`.
    pub fn trace_forward(&self, input: i64) -> Vec<i64> {
        let mut trace = Vec::with_capacity(self.stages.len() + 1);
        let mut value = input;
        trace.push(value);
        for stage in &self.stages {
            value = stage.map_forward(value);
            trace.push(value);
        }
        trace
    }
}

impl FromIterator<IntervalMap> for Pipeline {
    fn from_iter<T: IntoIterator<Item = IntervalMap>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
