//! JSON catalog snapshots
//!
//! A catalog is a read-only snapshot of the learning paths and careers the
//! data layer hands over. It is loaded once and borrowed by queries.

use crate::{CareerProfile, Error, LearningPath, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default, alias = "roadmaps")]
    pub learning_paths: Vec<LearningPath>,
    #[serde(default)]
    pub careers: Vec<CareerProfile>,
}

impl Catalog {
    pub fn new(learning_paths: Vec<LearningPath>, careers: Vec<CareerProfile>) -> Self {
        Self { learning_paths, careers }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a catalog snapshot from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&data)
    }

    pub fn learning_path(&self, id: &str) -> Result<&LearningPath> {
        self.learning_paths
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::EntityNotFound(format!("learning path {}", id)))
    }

    pub fn career(&self, id: &str) -> Result<&CareerProfile> {
        self.careers
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::EntityNotFound(format!("career {}", id)))
    }

    pub fn is_empty(&self) -> bool {
        self.learning_paths.is_empty() && self.careers.is_empty()
    }
}
