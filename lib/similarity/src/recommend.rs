//! Forward and reverse recommendation
//!
//! Both directions run the same algorithm: score every candidate in the pool
//! against the source tags, then rank and filter. Forward queries use a
//! learning path as source and careers as pool; reverse queries swap roles.

use crate::rank::{rank_and_filter, ScoredCandidate};
use crate::score::score;
use tagmatch_core::{RecommendConfig, Tagged};
use tracing::debug;

/// Score and rank every candidate, keeping the scores
///
/// Returns an empty list without scoring anything when the source has no tags.
pub fn recommend_scored<'a, S, C>(
    source: &S,
    pool: &'a [C],
    config: &RecommendConfig,
) -> Vec<ScoredCandidate<&'a C>>
where
    S: Tagged + ?Sized,
    C: Tagged,
{
    if source.is_untagged() {
        debug!(source = source.id(), "source has no tags, skipping pool");
        return Vec::new();
    }

    let scored = pool
        .iter()
        .map(|candidate| ScoredCandidate::new(candidate, score(source.tags(), candidate.tags())))
        .collect();

    let ranked = rank_and_filter(scored, config.min_similarity, config.max_results);
    debug!(
        source = source.id(),
        pool_size = pool.len(),
        results = ranked.len(),
        min_similarity = config.min_similarity,
        "ranked candidates"
    );
    ranked
}

/// Recommend the candidates most similar to `source`
///
/// At most `config.max_results` entities, each scoring at least
/// `config.min_similarity`, best first.
pub fn recommend<'a, S, C>(source: &S, pool: &'a [C], config: &RecommendConfig) -> Vec<&'a C>
where
    S: Tagged + ?Sized,
    C: Tagged,
{
    recommend_scored(source, pool, config)
        .into_iter()
        .map(|c| c.candidate)
        .collect()
}

/// Recommend sources for a target entity, e.g. learning paths for a career
#[inline]
pub fn reverse_recommend<'a, T, C>(target: &T, source_pool: &'a [C], config: &RecommendConfig) -> Vec<&'a C>
where
    T: Tagged + ?Sized,
    C: Tagged,
{
    recommend(target, source_pool, config)
}

/// True when at least one candidate reaches `min_similarity`
pub fn has_recommendations<S, C>(source: &S, pool: &[C], min_similarity: f32) -> bool
where
    S: Tagged + ?Sized,
    C: Tagged,
{
    top_recommendation(source, pool, min_similarity).is_some()
}

/// The single best candidate reaching `min_similarity`, if any
pub fn top_recommendation<'a, S, C>(source: &S, pool: &'a [C], min_similarity: f32) -> Option<&'a C>
where
    S: Tagged + ?Sized,
    C: Tagged,
{
    let config = RecommendConfig::new(min_similarity, 1);
    recommend(source, pool, &config).into_iter().next()
}
