//! Ranking and filtering of scored candidates

use std::cmp::Ordering;

/// A candidate paired with its similarity to the query entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<T> {
    pub candidate: T,
    pub score: f32,
}

impl<T> ScoredCandidate<T> {
    #[inline]
    pub fn new(candidate: T, score: f32) -> Self {
        Self { candidate, score }
    }
}

/// Sort by score descending. The sort is stable: equal scores keep the
/// order in which candidates were enumerated.
pub(crate) fn sort_by_score_desc<T>(items: &mut [T], score: impl Fn(&T) -> f32) {
    items.sort_by(|a, b| score(b).partial_cmp(&score(a)).unwrap_or(Ordering::Equal));
}

/// Drop candidates below `min_similarity`, sort the rest by score
/// descending (ties in input order) and keep the first `max_results`.
pub fn rank_and_filter<T>(
    scored: Vec<ScoredCandidate<T>>,
    min_similarity: f32,
    max_results: usize,
) -> Vec<ScoredCandidate<T>> {
    let mut ranked: Vec<ScoredCandidate<T>> = scored
        .into_iter()
        .filter(|c| c.score >= min_similarity)
        .collect();

    sort_by_score_desc(&mut ranked, |c| c.score);
    ranked.truncate(max_results);
    ranked
}
