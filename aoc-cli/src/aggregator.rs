//! Reorders results arriving from worker threads
//!
//! Workers finish in any order; output must follow (year, day, part). Each
//! result is held back until every key sorting before it has been emitted.

use crate::executor::SolverResult;
use std::collections::{BTreeMap, BTreeSet};

/// Key for ordering results (year, day, part) - ordered ascending
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

/// Aggregator that buffers results and emits them in sorted order
pub struct ResultAggregator {
    /// Keys not yet emitted
    expected: BTreeSet<ResultKey>,
    /// Received results waiting for an earlier key
    pending: BTreeMap<ResultKey, SolverResult>,
}

impl ResultAggregator {
    pub fn new(expected_keys: impl IntoIterator<Item = ResultKey>) -> Self {
        Self {
            expected: expected_keys.into_iter().collect(),
            pending: BTreeMap::new(),
        }
    }

    /// Add a result and return any results ready for output (in order)
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.pending.insert(ResultKey::from(&result), result);

        let mut ready = Vec::new();
        while let (Some(next), Some((held, _))) =
            (self.expected.first(), self.pending.first_key_value())
        {
            if next != held {
                break;
            }
            self.expected.pop_first();
            if let Some((_, result)) = self.pending.pop_first() {
                ready.push(result);
            }
        }
        ready
    }

    /// Remove and return whatever is still buffered, in order
    pub fn drain(&mut self) -> Vec<SolverResult> {
        std::mem::take(&mut self.pending).into_values().collect()
    }

    /// Check if all expected results have been received
    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use proptest::prelude::*;

    fn key(year: u16, day: u8, part: u8) -> ResultKey {
        ResultKey { year, day, part }
    }

    fn make_result(k: ResultKey) -> SolverResult {
        SolverResult {
            year: k.year,
            day: k.day,
            part: k.part,
            answer: Ok(format!("{}_{}_{}", k.year, k.day, k.part)),
            expected: None,
            solve_duration: TimeDelta::milliseconds(10),
            parse_duration: Some(TimeDelta::milliseconds(5)),
        }
    }

    #[test]
    fn test_in_order_results() {
        let mut agg = ResultAggregator::new(vec![key(2023, 5, 1), key(2023, 5, 2)]);

        let ready = agg.add(make_result(key(2023, 5, 1)));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].part, 1);

        let ready = agg.add(make_result(key(2023, 5, 2)));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].part, 2);

        assert!(agg.is_complete());
    }

    #[test]
    fn test_out_of_order_results() {
        let mut agg = ResultAggregator::new(vec![
            key(2023, 5, 1),
            key(2023, 5, 2),
            key(2023, 6, 1),
        ]);

        assert!(agg.add(make_result(key(2023, 5, 2))).is_empty());
        assert!(agg.add(make_result(key(2023, 6, 1))).is_empty());

        let ready: Vec<_> = agg
            .add(make_result(key(2023, 5, 1)))
            .iter()
            .map(ResultKey::from)
            .collect();
        assert_eq!(
            ready,
            vec![key(2023, 5, 1), key(2023, 5, 2), key(2023, 6, 1)]
        );
        assert!(agg.is_complete());
    }

    #[test]
    fn test_drain_remaining() {
        let mut agg = ResultAggregator::new(vec![key(2023, 5, 1), key(2023, 5, 2)]);

        agg.add(make_result(key(2023, 5, 2)));

        let remaining = agg.drain();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].part, 2);
        assert!(!agg.is_complete());
    }

    proptest! {
        /// Whatever order results arrive in, they leave sorted and complete
        #[test]
        fn prop_any_arrival_order_emits_sorted(
            keys in prop::collection::btree_set((2015u16..2030, 1u8..=25, 1u8..=2), 1..30)
                .prop_map(|set| set.into_iter().map(|(y, d, p)| key(y, d, p)).collect::<Vec<_>>())
                .prop_shuffle()
        ) {
            let mut agg = ResultAggregator::new(keys.clone());
            let mut emitted = Vec::new();
            for k in &keys {
                emitted.extend(agg.add(make_result(*k)).iter().map(ResultKey::from));
            }

            let mut sorted = keys;
            sorted.sort();
            prop_assert_eq!(emitted, sorted);
            prop_assert!(agg.is_complete());
        }
    }
}
