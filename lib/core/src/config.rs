use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default minimum similarity a candidate needs to be recommended
pub const DEFAULT_MIN_SIMILARITY: f32 = 0.2;

/// Default number of recommendations returned per query
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Filtering and truncation settings for a recommendation query
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendConfig {
    /// Candidates scoring below this are dropped
    #[serde(default = "default_min_similarity")]
    pub min_similarity: f32,
    /// Maximum number of entities returned
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_min_similarity() -> f32 {
    DEFAULT_MIN_SIMILARITY
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            min_similarity: DEFAULT_MIN_SIMILARITY,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl RecommendConfig {
    pub fn new(min_similarity: f32, max_results: usize) -> Self {
        Self { min_similarity, max_results }
    }

    #[inline]
    #[must_use]
    pub fn with_min_similarity(mut self, min_similarity: f32) -> Self {
        self.min_similarity = min_similarity;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Reject settings that can never produce a meaningful query.
    ///
    /// The engine itself accepts any value; this is for configuration
    /// arriving from outside (CLI flags, request bodies).
    pub fn validate(&self) -> Result<()> {
        if !self.min_similarity.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "min_similarity must be a finite number, got {}",
                self.min_similarity
            )));
        }
        if self.max_results == 0 {
            return Err(Error::InvalidConfig(
                "max_results must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RecommendConfig::default();
        assert_eq!(config.min_similarity, 0.2);
        assert_eq!(config.max_results, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = RecommendConfig::default()
            .with_min_similarity(0.5)
            .with_max_results(10);
        assert_eq!(config, RecommendConfig::new(0.5, 10));
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let config: RecommendConfig = serde_json::from_str(r#"{"max_results": 5}"#).unwrap();
        assert_eq!(config.min_similarity, DEFAULT_MIN_SIMILARITY);
        assert_eq!(config.max_results, 5);

        let config: RecommendConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RecommendConfig::default());
    }

    #[test]
    fn test_validate_rejects_nan() {
        let config = RecommendConfig::default().with_min_similarity(f32::NAN);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_zero_results() {
        let config = RecommendConfig::default().with_max_results(0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_allows_out_of_range_threshold() {
        // A threshold above 1.0 just filters everything out
        let config = RecommendConfig::default().with_min_similarity(1.5);
        assert!(config.validate().is_ok());
    }
}
