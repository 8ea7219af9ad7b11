//! # tagmatch
//!
//! Tag-based similarity recommendations between learning paths and careers.
//!
//! Every entity carries an ordered list of keyword tags. tagmatch scores how
//! strongly two tag lists overlap and surfaces the best matches, from
//! learning path to career or from career to learning path, one source at a
//! time or many in parallel, with full score breakdowns for diagnostics.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! tagmatch --http-port 6380 --catalog ./catalog.json
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use tagmatch::prelude::*;
//!
//! let path = LearningPath::new(
//!     "backend-nodejs",
//!     "Backend Development with Node.js",
//!     vec!["backend".into(), "nodejs".into(), "api".into()],
//! );
//! let careers = vec![
//!     CareerProfile::new("backend-developer", "Backend Developer", vec!["backend".into(), "api".into()]),
//!     CareerProfile::new("designer", "UI Designer", vec!["figma".into()]),
//! ];
//!
//! let results = recommend(&path, &careers, &RecommendConfig::default());
//! assert_eq!(results[0].id, "backend-developer");
//! ```
//!
//! ## Crate Structure
//!
//! - `tagmatch-core` - Entities, tag normalization, config, catalog snapshots
//! - `tagmatch-similarity` - Scoring, ranking, recommendation, diagnostics, batch
//! - `tagmatch-api` - REST API

// Re-export core types
pub use tagmatch_core::{
    normalize, CareerProfile, Catalog, Difficulty, Error, LearningPath, RecommendConfig, Result,
    Tagged,
};

// Re-export the engine
pub use tagmatch_similarity::{
    has_recommendations, rank_and_filter, recommend, recommend_batch, recommend_scored,
    recommend_with_scores, reverse_recommend, score, score_breakdown, top_recommendation,
    ExplainedResult, ScoredCandidate, SimilarityResult, SimilarityStats, TagScore,
};

// Re-export API
pub use tagmatch_api::{ApiState, RestApi};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        recommend, recommend_batch, recommend_with_scores, reverse_recommend, score,
        CareerProfile, Catalog, Error, LearningPath, RecommendConfig, Result, SimilarityResult,
        Tagged,
    };
}
