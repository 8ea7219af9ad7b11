//! Batch recommendation across many source entities
//!
//! Each source is evaluated on its own against the shared pool, so sources
//! are spread over the rayon thread pool. The output is keyed by source id.

use crate::recommend::recommend;
use rayon::prelude::*;
use std::collections::HashMap;
use tagmatch_core::{RecommendConfig, Tagged};
use tracing::debug;

/// Run [`recommend`] for every source entity
///
/// Every source gets an entry, including those with no recommendations.
/// If two sources share an id, the later one in `sources` wins.
pub fn recommend_batch<'a, S, C>(
    sources: &[S],
    pool: &'a [C],
    config: &RecommendConfig,
) -> HashMap<String, Vec<&'a C>>
where
    S: Tagged + Sync,
    C: Tagged + Sync,
{
    let evaluated: Vec<(String, Vec<&'a C>)> = sources
        .par_iter()
        .map(|source| (source.id().to_string(), recommend(source, pool, config)))
        .collect();

    debug!(sources = sources.len(), pool_size = pool.len(), "batch evaluated");

    let mut recommendations = HashMap::with_capacity(evaluated.len());
    for (id, results) in evaluated {
        recommendations.insert(id, results);
    }
    recommendations
}
