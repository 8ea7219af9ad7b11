//! # tagmatch Core
//!
//! Core types for the tagmatch recommendation engine.
//!
//! - [`Tagged`] - Capability shared by everything the engine can score
//! - [`LearningPath`] / [`CareerProfile`] - The two tagged entity kinds
//! - [`normalize`] - Case folding for tag comparison
//! - [`RecommendConfig`] - Threshold and result limit for a query
//! - [`Catalog`] - Read-only JSON snapshot of entities
//!
//! ## Example
//!
//! ```rust
//! use tagmatch_core::{LearningPath, RecommendConfig, Tagged, normalize};
//!
//! let path = LearningPath::new(
//!     "frontend-react",
//!     "Frontend Development with React",
//!     vec!["Frontend".to_string(), "React".to_string()],
//! );
//! assert_eq!(normalize(path.tags()), vec!["frontend", "react"]);
//!
//! let config = RecommendConfig::default();
//! assert_eq!(config.max_results, 3);
//! ```

pub mod catalog;
pub mod config;
pub mod entity;
pub mod error;
pub mod tags;

pub use catalog::Catalog;
pub use config::{RecommendConfig, DEFAULT_MAX_RESULTS, DEFAULT_MIN_SIMILARITY};
pub use entity::{CareerProfile, Difficulty, LearningPath, Tagged};
pub use error::{Error, Result};
pub use tags::{normalize, normalize_tag};
