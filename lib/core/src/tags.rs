//! Tag normalization
//!
//! Tags are compared case-insensitively. Normalization only folds case:
//! order and duplicates are kept, since every occurrence of a tag counts
//! on its own when scoring.

/// Lowercase every tag, keeping order and cardinality.
#[inline]
#[must_use]
pub fn normalize<S: AsRef<str>>(tags: &[S]) -> Vec<String> {
    tags.iter().map(|tag| normalize_tag(tag.as_ref())).collect()
}

/// Lowercase a single tag.
#[inline]
#[must_use]
pub fn normalize_tag(tag: &str) -> String {
    tag.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases() {
        let tags = vec!["React", "TypeScript", "CSS"];
        assert_eq!(normalize(&tags), vec!["react", "typescript", "css"]);
    }

    #[test]
    fn test_normalize_keeps_order_and_duplicates() {
        let tags = vec!["Web".to_string(), "api".to_string(), "WEB".to_string()];
        assert_eq!(normalize(&tags), vec!["web", "api", "web"]);
    }

    #[test]
    fn test_normalize_empty() {
        let tags: Vec<String> = Vec::new();
        assert!(normalize(&tags).is_empty());
    }

    #[test]
    fn test_normalize_unicode() {
        assert_eq!(normalize_tag("ÜBER"), "über");
    }
}
