//! Score transparency for recommendation results
//!
//! Diagnostic surfaces get every candidate in the pool with its score and the
//! source tags it matched, without any threshold applied.

use crate::rank::sort_by_score_desc;
use crate::score::{matching_tags, score};
use serde::Serialize;
use tagmatch_core::Tagged;
use tracing::debug;

/// A candidate annotated with its score and the source tags it matched
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityResult<'a, C> {
    pub entity: &'a C,
    pub score: f32,
    /// Source tags (original casing, repeats kept) found in the candidate
    pub matching_tags: Vec<String>,
}

/// Score every candidate in the pool against `source`
///
/// The result has one entry per candidate, sorted by score descending with
/// ties in pool order. Empty source tags give an empty list.
pub fn recommend_with_scores<'a, S, C>(source: &S, pool: &'a [C]) -> Vec<SimilarityResult<'a, C>>
where
    S: Tagged + ?Sized,
    C: Tagged,
{
    if source.is_untagged() {
        return Vec::new();
    }

    let mut results: Vec<SimilarityResult<'a, C>> = pool
        .iter()
        .map(|candidate| SimilarityResult {
            entity: candidate,
            score: score(source.tags(), candidate.tags()),
            matching_tags: matching_tags(source.tags(), candidate.tags()),
        })
        .collect();

    sort_by_score_desc(&mut results, |r| r.score);
    debug!(source = source.id(), candidates = results.len(), "scored full pool");
    results
}

/// Owned, serializable form of a [`SimilarityResult`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplainedResult {
    pub id: String,
    pub title: String,
    pub score: f32,
    pub matching_tags: Vec<String>,
}

impl ExplainedResult {
    pub fn from_result<C: Tagged>(result: &SimilarityResult<'_, C>) -> Self {
        Self {
            id: result.entity.id().to_string(),
            title: result.entity.title().to_string(),
            score: result.score,
            matching_tags: result.matching_tags.clone(),
        }
    }

    pub fn from_results<C: Tagged>(results: &[SimilarityResult<'_, C>]) -> Vec<Self> {
        results.iter().map(Self::from_result).collect()
    }
}

/// Summary statistics over a diagnostic result list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityStats {
    /// Number of candidates scored
    pub candidates_count: usize,
    /// Candidates at or above the threshold
    pub above_threshold_count: usize,
    /// Average score across all candidates
    pub avg_score: f32,
    /// Score of best candidate
    pub best_score: f32,
    /// Most frequent matching tag of the best candidate
    pub most_common_tag: Option<String>,
}

impl SimilarityStats {
    /// Compute stats from results sorted by score descending
    pub fn compute<C>(results: &[SimilarityResult<'_, C>], min_similarity: f32) -> Self {
        if results.is_empty() {
            return Self {
                candidates_count: 0,
                above_threshold_count: 0,
                avg_score: 0.0,
                best_score: 0.0,
                most_common_tag: None,
            };
        }

        let avg_score = results.iter().map(|r| r.score).sum::<f32>() / results.len() as f32;
        let best_score = results[0].score;
        let above_threshold_count = results.iter().filter(|r| r.score >= min_similarity).count();

        let mut tag_counts: Vec<(String, usize)> = Vec::new();
        for tag in &results[0].matching_tags {
            let key = tag.to_lowercase();
            match tag_counts.iter().position(|(seen, _)| *seen == key) {
                Some(i) => tag_counts[i].1 += 1,
                None => tag_counts.push((key, 1)),
            }
        }

        // Highest count wins; ties go to the tag seen first
        let mut most_common_tag: Option<(String, usize)> = None;
        for (tag, count) in tag_counts {
            if most_common_tag.as_ref().map_or(true, |(_, best)| count > *best) {
                most_common_tag = Some((tag, count));
            }
        }

        Self {
            candidates_count: results.len(),
            above_threshold_count,
            avg_score,
            best_score,
            most_common_tag: most_common_tag.map(|(tag, _)| tag),
        }
    }
}
