//! Combination resolver and referential-integrity checks

use crate::error::{CatalogError, Result};
use crate::graph::CrossRefGraph;
use crate::types::Catalog;
use skillmap_skills::{Skill, SkillRegistry};
use std::collections::HashSet;
use std::fmt;

/// Where a skill reference came from, for integrity reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefOrigin {
    /// Recipe entry in the index document
    Recipe(String),
    /// Category entry in the index document
    Category(String),
    /// Related-skills reference inside a skill document
    CrossRef(String),
}

impl fmt::Display for RefOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefOrigin::Recipe(name) => write!(f, "recipe '{}'", name),
            RefOrigin::Category(name) => write!(f, "category '{}'", name),
            RefOrigin::CrossRef(name) => write!(f, "skill '{}'", name),
        }
    }
}

/// A reference that does not resolve to a registered skill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dangling {
    /// Reference source
    pub origin: RefOrigin,
    /// The identifier that failed to resolve
    pub skill: String,
}

impl fmt::Display for Dangling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} references unknown skill '{}'", self.origin, self.skill)
    }
}

/// Expand a selection of identifiers into skills
///
/// Preserves first-occurrence order and removes duplicates introduced by
/// overlapping selections. Fails on the first identifier the registry
/// cannot resolve.
pub fn resolve<'a, I, S>(ids: I, registry: &'a SkillRegistry) -> Result<Vec<&'a Skill>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut skills = Vec::new();

    for id in ids {
        let id = id.as_ref();
        let skill = registry
            .get(id)
            .ok_or_else(|| CatalogError::unknown_skill(id, registry.names()))?;
        if seen.insert(skill.name.clone()) {
            skills.push(skill);
        }
    }

    Ok(skills)
}

/// Expand a named recipe into its ordered skill list
pub fn resolve_recipe<'a>(
    catalog: &Catalog,
    name: &str,
    registry: &'a SkillRegistry,
) -> Result<Vec<&'a Skill>> {
    let recipe = catalog
        .recipe(name)
        .ok_or_else(|| CatalogError::unknown_recipe(name, &catalog.recipe_names()))?;
    resolve(&recipe.skills, registry)
}

/// Check referential integrity of the corpus
///
/// Every recipe entry, category entry and cross-reference must resolve
/// to a registered skill. Returns every dangling reference rather than
/// stopping at the first, so a maintainer can fix the corpus in one
/// pass.
pub fn check_integrity(catalog: &Catalog, registry: &SkillRegistry) -> Vec<Dangling> {
    let mut dangling = Vec::new();

    for category in &catalog.categories {
        for entry in &category.entries {
            if !registry.contains(&entry.skill) {
                dangling.push(Dangling {
                    origin: RefOrigin::Category(category.name.clone()),
                    skill: entry.skill.clone(),
                });
            }
        }
    }

    for recipe in &catalog.recipes {
        for skill in &recipe.skills {
            if !registry.contains(skill) {
                dangling.push(Dangling {
                    origin: RefOrigin::Recipe(recipe.name.clone()),
                    skill: skill.clone(),
                });
            }
        }
    }

    let graph = CrossRefGraph::from_registry(registry);
    for (from, to) in graph.references() {
        if !registry.contains(to) {
            dangling.push(Dangling {
                origin: RefOrigin::CrossRef(from.to_string()),
                skill: to.to_string(),
            });
        }
    }

    dangling
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::parse_index;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, SkillRegistry) {
        let temp = TempDir::new().unwrap();
        for (file, name) in [
            ("a.md", "arcgis-starter-app"),
            ("b.md", "arcgis-core-maps"),
            ("c.md", "arcgis-layers"),
        ] {
            fs::write(
                temp.path().join(file),
                format!("---\nname: {}\ndescription: {} docs\n---\nBody\n", name, name),
            )
            .unwrap();
        }
        let registry = SkillRegistry::load(temp.path()).unwrap();
        (temp, registry)
    }

    #[test]
    fn test_resolve_preserves_first_occurrence_order() {
        let (_temp, registry) = fixture();
        let skills = resolve(
            ["arcgis-layers", "arcgis-core-maps", "arcgis-layers"],
            &registry,
        )
        .unwrap();
        let names: Vec<_> = skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["arcgis-layers", "arcgis-core-maps"]);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let (_temp, registry) = fixture();
        let ids = ["arcgis-starter-app", "arcgis-core-maps", "arcgis-starter-app"];
        let first: Vec<_> = resolve(ids, &registry)
            .unwrap()
            .iter()
            .map(|s| s.name.clone())
            .collect();
        let second: Vec<_> = resolve(ids, &registry)
            .unwrap()
            .iter()
            .map(|s| s.name.clone())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_fails_on_unknown_identifier() {
        let (_temp, registry) = fixture();
        let err = resolve(["arcgis-layers", "missing"], &registry).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownSkill { .. }));
    }

    #[test]
    fn test_resolve_recipe() {
        let (_temp, registry) = fixture();
        let catalog = parse_index(
            "## Recipes\n\n### Build a basic map app\n\n1. arcgis-starter-app\n2. arcgis-core-maps\n3. arcgis-layers\n",
        );
        let skills = resolve_recipe(&catalog, "Build a basic map app", &registry).unwrap();
        let names: Vec<_> = skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["arcgis-starter-app", "arcgis-core-maps", "arcgis-layers"]
        );
    }

    #[test]
    fn test_resolve_unknown_recipe() {
        let (_temp, registry) = fixture();
        let catalog = Catalog::default();
        let err = resolve_recipe(&catalog, "nope", &registry).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownRecipe { .. }));
    }

    #[test]
    fn test_check_integrity_reports_all_danglers() {
        let (_temp, registry) = fixture();
        let catalog = parse_index(
            "## Categories\n\n### Core\n\n- arcgis-core-maps - maps\n- ghost-skill - gone\n\n## Recipes\n\n### Broken\n\n1. arcgis-layers\n2. phantom\n",
        );
        let dangling = check_integrity(&catalog, &registry);
        let skills: Vec<_> = dangling.iter().map(|d| d.skill.as_str()).collect();
        assert_eq!(skills, vec!["ghost-skill", "phantom"]);
    }

    #[test]
    fn test_check_integrity_covers_cross_references() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("a.md"),
            "---\nname: a\ndescription: A\n---\n## Related\n- nowhere\n",
        )
        .unwrap();
        let registry = SkillRegistry::load(temp.path()).unwrap();
        let dangling = check_integrity(&Catalog::default(), &registry);
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].skill, "nowhere");
        assert_eq!(dangling[0].origin, RefOrigin::CrossRef("a".to_string()));
    }
}
