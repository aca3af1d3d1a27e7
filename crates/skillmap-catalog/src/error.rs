//! Catalog error types

use thiserror::Error;

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A recipe or selection referenced an identifier the registry
    /// cannot resolve
    #[error("Unknown skill '{name}'. Available skills: {available}")]
    UnknownSkill { name: String, available: String },

    /// Named recipe does not exist in the catalog
    #[error("Unknown recipe '{name}'. Available recipes: {available}")]
    UnknownRecipe { name: String, available: String },

    /// Index document could not be parsed
    #[error("Index parse error in {path}: {message}")]
    IndexParse { path: String, message: String },

    /// IO error reading the index document
    #[error("IO error loading index: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Create an unknown-skill error listing the resolvable identifiers
    pub fn unknown_skill(name: impl Into<String>, available: &[String]) -> Self {
        Self::UnknownSkill {
            name: name.into(),
            available: join_or_none(available),
        }
    }

    /// Create an unknown-recipe error listing the defined recipes
    pub fn unknown_recipe(name: impl Into<String>, available: &[String]) -> Self {
        Self::UnknownRecipe {
            name: name.into(),
            available: join_or_none(available),
        }
    }
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}
