//! Tag similarity scoring
//!
//! Scores two tag sequences in [0.0, 1.0] where 1.0 means a full match.
//!
//! The score combines two counts over the case-folded tags:
//! - exact matches: every source tag (repeats included) found in the target
//! - partial matches: 0.5 for every ordered (source, target) pair of unequal
//!   tags where one contains the other
//!
//! The total is divided by the average length of both sequences and capped
//! at 1.0. Nothing is deduplicated, so repeated tags weigh more.

use serde::Serialize;
use tagmatch_core::{normalize, normalize_tag};

/// Weight of a substring relation between two unequal tags
pub const PARTIAL_MATCH_WEIGHT: f32 = 0.5;

/// Intermediate counts of a tag similarity computation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TagScore {
    /// Source tags (with repeats) that appear in the target
    pub exact_matches: usize,
    /// Sum of partial match weights over the cross product
    pub partial_matches: f32,
    /// Average length of the two tag sequences
    pub denominator: f32,
    /// Final capped score
    pub score: f32,
}

impl TagScore {
    /// Exact plus partial matches, before normalization
    #[inline]
    pub fn total_matches(&self) -> f32 {
        self.exact_matches as f32 + self.partial_matches
    }
}

/// Calculate the similarity of two tag sequences
///
/// # Arguments
/// * `source` - Tags of the entity recommendations are made for
/// * `target` - Tags of the candidate entity
///
/// # Returns
/// Similarity score in [0.0, 1.0]; 0.0 when either side is empty
#[inline]
pub fn score<A: AsRef<str>, B: AsRef<str>>(source: &[A], target: &[B]) -> f32 {
    score_breakdown(source, target).score
}

/// Same as [`score`] but keeps the exact/partial counts
pub fn score_breakdown<A: AsRef<str>, B: AsRef<str>>(source: &[A], target: &[B]) -> TagScore {
    if source.is_empty() || target.is_empty() {
        return TagScore::default();
    }

    let source = normalize(source);
    let target = normalize(target);

    let exact_matches = source.iter().filter(|tag| target.contains(tag)).count();

    let mut partial_matches = 0.0f32;
    for s in &source {
        for t in &target {
            if s != t && (s.contains(t.as_str()) || t.contains(s.as_str())) {
                partial_matches += PARTIAL_MATCH_WEIGHT;
            }
        }
    }

    let denominator = (source.len() + target.len()) as f32 / 2.0;
    let total = exact_matches as f32 + partial_matches;

    TagScore {
        exact_matches,
        partial_matches,
        denominator,
        score: (total / denominator).min(1.0),
    }
}

/// Source tags, in their original casing, that exactly match some target tag
///
/// Order and repeats follow the source sequence.
pub fn matching_tags<A: AsRef<str>, B: AsRef<str>>(source: &[A], target: &[B]) -> Vec<String> {
    let target = normalize(target);
    source
        .iter()
        .filter(|tag| target.contains(&normalize_tag(tag.as_ref())))
        .map(|tag| tag.as_ref().to_string())
        .collect()
}
