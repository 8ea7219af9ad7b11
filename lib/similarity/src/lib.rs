//! # tagmatch Similarity
//!
//! Tag-overlap recommendation engine.
//!
//! Given an entity described by tags, finds other entities whose tags overlap
//! strongly enough to be worth surfacing, in either direction (learning path
//! to career, career to learning path), one at a time or in batch.
//!
//! ## Features
//!
//! - **Scoring**: Bounded score from exact and substring tag matches
//! - **Ranking**: Threshold, stable descending sort and top-K truncation
//! - **Diagnostics**: Unfiltered, score-annotated results with matching tags
//! - **Batch**: Parallel evaluation of many sources against one pool
//!
//! ## Example
//!
//! ```rust
//! use tagmatch_core::{CareerProfile, LearningPath, RecommendConfig};
//! use tagmatch_similarity::{recommend, recommend_with_scores, score};
//!
//! assert_eq!(score(&["web", "webdev"], &["webdev", "mobile"]), 0.75);
//!
//! let path = LearningPath::new(
//!     "frontend-react",
//!     "Frontend Development with React",
//!     vec!["frontend".into(), "react".into()],
//! );
//! let careers = vec![
//!     CareerProfile::new("frontend-developer", "Frontend Developer", vec!["react".into(), "css".into()]),
//!     CareerProfile::new("data-scientist", "Data Scientist", vec!["python".into()]),
//! ];
//!
//! let results = recommend(&path, &careers, &RecommendConfig::default());
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].id, "frontend-developer");
//!
//! let report = recommend_with_scores(&path, &careers);
//! assert_eq!(report.len(), 2);
//! assert_eq!(report[0].matching_tags, vec!["react"]);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  normalize  │────>│    score    │────>│    rank     │
//! │   (tags)    │     │ (tag pairs) │     │ (threshold) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │                   │
//!                     ┌─────────────┐     ┌─────────────┐
//!                     │   explain   │     │  recommend  │──> batch
//!                     │ (full pool) │     │ (fwd / rev) │
//!                     └─────────────┘     └─────────────┘
//! ```

pub mod batch;
pub mod explain;
pub mod rank;
pub mod recommend;
pub mod score;

pub use batch::recommend_batch;
pub use explain::{recommend_with_scores, ExplainedResult, SimilarityResult, SimilarityStats};
pub use rank::{rank_and_filter, ScoredCandidate};
pub use recommend::{
    has_recommendations, recommend, recommend_scored, reverse_recommend, top_recommendation,
};
pub use score::{matching_tags, score, score_breakdown, TagScore, PARTIAL_MATCH_WEIGHT};
