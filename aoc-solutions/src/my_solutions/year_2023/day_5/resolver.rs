//! Lowest reachable location for a seed set

use super::error::ResolveError;
use super::pipeline::Pipeline;
use super::seeds::SeedSet;
use rayon::prelude::*;

/// How the minimum is searched for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Map every seed forward and keep the smallest location.
    /// Cost grows with the number of seeds.
    ForwardEnumeration,
    /// Walk locations upwards from 0 and stop at the first one whose reverse
    /// mapping is a seed. Cost grows with the answer itself.
    ReverseProbing,
}

impl Strategy {
    /// Listed seeds are enumerated; seed ranges are probed in reverse
    pub fn for_seeds(seeds: &SeedSet) -> Self {
        match seeds {
            SeedSet::Discrete(_) => Self::ForwardEnumeration,
            SeedSet::Ranges(_) => Self::ReverseProbing,
        }
    }
}

/// Finds the lowest pipeline output any seed can reach.
///
/// Reverse probing trusts `Pipeline::map_reverse` to invert the pipeline. That
/// holds when every stage's ranges are disjoint in both source and
/// destination space (true for well-formed almanacs). Otherwise a candidate
/// may be accepted through a range that the forward lookup would not pick.
///
/// The probe never scans past the ceiling `min(map_forward(first seed of each
/// range))`. That location is known to be reachable, so the probe always
/// terminates and returns a reachable location even when the reverse lookup
/// skips over the true preimage (e.g. a range mapping onto values that also
/// pass through unchanged).
#[derive(Debug, Clone, Copy)]
pub struct SeedResolver<'p> {
    pipeline: &'p Pipeline,
    parallel: bool,
}

impl<'p> SeedResolver<'p> {
    pub fn new(pipeline: &'p Pipeline) -> Self {
        Self {
            pipeline,
            parallel: false,
        }
    }

    /// Spread the work over the rayon pool. Answers are identical.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Resolve with the strategy that suits the seed representation
    pub fn lowest_location(&self, seeds: &SeedSet) -> Result<i64, ResolveError> {
        self.lowest_location_with(seeds, Strategy::for_seeds(seeds))
    }

    pub fn lowest_location_with(
        &self,
        seeds: &SeedSet,
        strategy: Strategy,
    ) -> Result<i64, ResolveError> {
        match strategy {
            Strategy::ForwardEnumeration => self.forward_enumeration(seeds),
            Strategy::ReverseProbing => self.reverse_probing(seeds),
        }
    }

    /// Strategy A: O(seeds × stages)
    pub fn forward_enumeration(&self, seeds: &SeedSet) -> Result<i64, ResolveError> {
        let pipeline = self.pipeline;
        let lowest = if self.parallel {
            seeds.par_min_of(|seed| pipeline.map_forward(seed))
        } else {
            seeds.values().map(|seed| pipeline.map_forward(seed)).min()
        };
        lowest.ok_or(ResolveError::NoMinimum)
    }

    /// Strategy B: O(answer × stages)
    pub fn reverse_probing(&self, seeds: &SeedSet) -> Result<i64, ResolveError> {
        let pipeline = self.pipeline;
        let ceiling = seeds
            .starts()
            .map(|seed| pipeline.map_forward(seed))
            .min()
            .ok_or(ResolveError::NoMinimum)?;

        let lands_on_seed = |candidate: &i64| seeds.contains(pipeline.map_reverse(*candidate));
        let found = if self.parallel {
            (0..ceiling).into_par_iter().find_first(lands_on_seed)
        } else {
            (0..ceiling).find(lands_on_seed)
        };
        Ok(found.unwrap_or(ceiling))
    }
}
