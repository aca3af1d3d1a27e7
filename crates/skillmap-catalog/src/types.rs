//! Catalog data types

use serde::{Deserialize, Serialize};
use skillmap_skills::SkillRegistry;
use std::collections::HashMap;

/// One catalog line: a skill identifier with its one-line purpose
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexEntry {
    /// Skill identifier
    pub skill: String,

    /// One-line purpose shown in the index
    #[serde(default)]
    pub purpose: String,
}

/// A grouping of skills under a label
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Category label (e.g. "Core", "Layers & Data")
    pub name: String,

    /// Member entries, in index order
    pub entries: Vec<IndexEntry>,
}

/// A named ordered combination of skills for a compound task
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recipe {
    /// Workflow name (e.g. "Build a basic map app")
    pub name: String,

    /// Skill identifiers, in recommended reading order
    pub skills: Vec<String>,
}

/// A decision-table row: a condition paired with a recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecisionRow {
    /// The question or condition
    pub question: String,

    /// Recommended choice
    pub choice: String,

    /// Why that choice
    #[serde(default)]
    pub rationale: String,
}

/// The parsed index document
///
/// Read-only after load. `order` is the catalog order used for match
/// tie-breaking: identifiers in first-appearance order across category
/// sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    /// Categories, in index order
    pub categories: Vec<Category>,

    /// Recipes, in index order
    pub recipes: Vec<Recipe>,

    /// Decision-table rows, in index order
    pub decisions: Vec<DecisionRow>,

    /// Skill identifiers in catalog order
    pub order: Vec<String>,
}

impl Catalog {
    /// Look up a recipe by name
    pub fn recipe(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    /// Names of all recipes, in index order
    pub fn recipe_names(&self) -> Vec<String> {
        self.recipes.iter().map(|r| r.name.clone()).collect()
    }

    /// Category a skill belongs to, per the index
    pub fn category_of(&self, skill: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.entries.iter().any(|e| e.skill == skill))
            .map(|c| c.name.as_str())
    }

    /// Position of a skill in catalog order
    pub fn position(&self, skill: &str) -> Option<usize> {
        self.order.iter().position(|s| s == skill)
    }

    /// Number of catalog-ordered identifiers
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the catalog lists no skills
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Build a fallback catalog from a registry alone
    ///
    /// Used when the corpus ships no index document: categories come
    /// from each skill's own frontmatter, recipes and decisions are
    /// empty, catalog order is registry scan order.
    pub fn derive(registry: &SkillRegistry) -> Self {
        let mut categories: Vec<Category> = Vec::new();
        let mut by_name: HashMap<String, usize> = HashMap::new();

        for skill in registry.iter() {
            let label = skill.category.clone().unwrap_or_else(|| "Uncategorized".to_string());
            let idx = *by_name.entry(label.clone()).or_insert_with(|| {
                categories.push(Category {
                    name: label,
                    entries: Vec::new(),
                });
                categories.len() - 1
            });
            categories[idx].entries.push(IndexEntry {
                skill: skill.name.clone(),
                purpose: skill.purpose().to_string(),
            });
        }

        Self {
            categories,
            recipes: Vec::new(),
            decisions: Vec::new(),
            order: registry.names().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog {
            categories: vec![Category {
                name: "Core".to_string(),
                entries: vec![IndexEntry {
                    skill: "arcgis-core-maps".to_string(),
                    purpose: "Maps and views".to_string(),
                }],
            }],
            recipes: vec![Recipe {
                name: "Build a basic map app".to_string(),
                skills: vec!["arcgis-starter-app".to_string(), "arcgis-core-maps".to_string()],
            }],
            decisions: Vec::new(),
            order: vec!["arcgis-core-maps".to_string()],
        }
    }

    #[test]
    fn test_recipe_lookup() {
        let catalog = sample();
        assert!(catalog.recipe("Build a basic map app").is_some());
        assert!(catalog.recipe("Unknown").is_none());
    }

    #[test]
    fn test_category_of() {
        let catalog = sample();
        assert_eq!(catalog.category_of("arcgis-core-maps"), Some("Core"));
        assert_eq!(catalog.category_of("arcgis-starter-app"), None);
    }

    #[test]
    fn test_position() {
        let catalog = sample();
        assert_eq!(catalog.position("arcgis-core-maps"), Some(0));
        assert_eq!(catalog.position("missing"), None);
    }
}
