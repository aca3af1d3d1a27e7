//! Skill data models

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A fenced code block extracted from a skill document body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeExample {
    /// Language tag of the fence, if any (e.g. "js", "html")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// The code itself, as written in the document
    pub code: String,
}

/// A fully parsed skill document
///
/// Immutable once loaded; the registry never mutates skills after the
/// initial corpus scan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    /// Skill identifier (from frontmatter)
    pub name: String,

    /// One-line purpose description (from frontmatter)
    pub description: String,

    /// Grouping label, if the document declares one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Optional document version (e.g. "4.34")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Free-form tags for matching
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Code examples, in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<CodeExample>,

    /// Pitfall entries, in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pitfalls: Vec<String>,

    /// Identifiers of related skills referenced by this document
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<String>,

    /// Document body (markdown after the frontmatter block)
    pub body: String,

    /// Path to the source file
    pub location: PathBuf,
}

/// Parsed skill metadata from frontmatter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMetadata {
    /// Skill name (required)
    pub name: String,

    /// Skill description (required)
    pub description: String,

    /// Optional category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Optional version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Optional tags for matching
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl SkillMetadata {
    /// Validate required fields
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Skill name cannot be empty".to_string());
        }
        if self.description.trim().is_empty() {
            return Err("Skill description cannot be empty".to_string());
        }
        if self.name.chars().any(char::is_whitespace) {
            return Err(format!(
                "Skill name '{}' must not contain whitespace",
                self.name
            ));
        }
        Ok(())
    }
}

impl Skill {
    /// First line of the description, for index rendering
    pub fn purpose(&self) -> &str {
        self.description.lines().next().unwrap_or("").trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(name: &str, description: &str) -> SkillMetadata {
        SkillMetadata {
            name: name.to_string(),
            description: description.to_string(),
            category: None,
            version: None,
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_metadata() {
        assert!(metadata("arcgis-layers", "Work with layers").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        assert!(metadata("", "Work with layers").validate().is_err());
        assert!(metadata("   ", "Work with layers").validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_description() {
        assert!(metadata("arcgis-layers", "").validate().is_err());
    }

    #[test]
    fn test_validate_rejects_whitespace_in_name() {
        assert!(metadata("arcgis layers", "Work with layers").validate().is_err());
    }

    #[test]
    fn test_purpose_takes_first_line() {
        let skill = Skill {
            name: "arcgis-layers".to_string(),
            description: "Work with layers\nand more detail".to_string(),
            category: None,
            version: None,
            tags: Vec::new(),
            examples: Vec::new(),
            pitfalls: Vec::new(),
            related: Vec::new(),
            body: String::new(),
            location: PathBuf::from("arcgis-layers.md"),
        };
        assert_eq!(skill.purpose(), "Work with layers");
    }
}
