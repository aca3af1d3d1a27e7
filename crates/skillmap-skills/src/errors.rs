//! Skill-specific error types

use thiserror::Error;

/// Errors raised while parsing skill documents or loading the registry
#[derive(Error, Debug)]
pub enum SkillError {
    /// Skill validation failed
    #[error("Skill validation failed at {path}: {message}")]
    InvalidSkill { path: String, message: String },

    /// Frontmatter could not be deserialized
    #[error("Frontmatter parse error in {path}: {message}")]
    Frontmatter { path: String, message: String },

    /// Missing required field
    #[error("Missing required field '{field}' in skill at {path}")]
    MissingField { field: String, path: String },

    /// Two documents declared the same identifier
    #[error("Duplicate skill name '{name}': declared by {first} and {second}")]
    DuplicateSkill {
        name: String,
        first: String,
        second: String,
    },

    /// Skill not found
    #[error("Skill '{name}' not found. Available skills: {available}")]
    NotFound { name: String, available: String },

    /// Corpus root does not exist or is not a directory
    #[error("Skill corpus root not found: {path}")]
    RootNotFound { path: String },

    /// IO error during skill loading
    #[error("IO error loading skill: {0}")]
    Io(#[from] std::io::Error),
}

impl SkillError {
    /// Create a skill not found error with available skill names
    pub fn not_found(name: impl Into<String>, available_skills: &[String]) -> Self {
        Self::NotFound {
            name: name.into(),
            available: if available_skills.is_empty() {
                "none".to_string()
            } else {
                available_skills.join(", ")
            },
        }
    }

    /// Whether the error is a lookup miss rather than a corpus defect
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
