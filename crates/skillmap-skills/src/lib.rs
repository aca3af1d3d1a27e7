//! Skill corpus loading for skillmap
//!
//! Skills are data (markdown + YAML frontmatter), never executable code.
//! This crate parses individual skill documents and assembles them into an
//! in-memory registry: a read-only map from skill identifier to skill
//! record, built once at startup from a corpus directory.

pub mod document;
pub mod errors;
pub mod models;
pub mod registry;

pub use document::parse_skill_document;
pub use errors::SkillError;
pub use models::{CodeExample, Skill, SkillMetadata};
pub use registry::SkillRegistry;

/// Result type for skill operations
pub type Result<T> = std::result::Result<T, SkillError>;
