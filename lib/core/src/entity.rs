use serde::{Deserialize, Serialize};

/// Anything the recommendation engine can score: an identifier, a display
/// title and an ordered sequence of tags.
pub trait Tagged {
    fn id(&self) -> &str;
    fn title(&self) -> &str;
    fn tags(&self) -> &[String];

    /// True when the entity carries no tags and can never match anything
    #[inline]
    fn is_untagged(&self) -> bool {
        self.tags().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

/// A learning path (roadmap) a user can follow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub estimated_duration: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl LearningPath {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category: String::new(),
            difficulty: Difficulty::default(),
            estimated_duration: String::new(),
            tags,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }
}

impl Tagged for LearningPath {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// A career a learner can work towards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerProfile {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub average_salary: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default, alias = "roadmapIds")]
    pub learning_path_ids: Vec<String>,
    #[serde(default)]
    pub companies: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CareerProfile {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            average_salary: String::new(),
            required_skills: Vec::new(),
            learning_path_ids: Vec::new(),
            companies: Vec::new(),
            tags,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_average_salary(mut self, average_salary: impl Into<String>) -> Self {
        self.average_salary = average_salary.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_required_skills(mut self, skills: Vec<String>) -> Self {
        self.required_skills = skills;
        self
    }
}

impl Tagged for CareerProfile {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}
