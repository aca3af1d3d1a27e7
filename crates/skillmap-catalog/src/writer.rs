//! Index document serialization
//!
//! Renders a registry plus catalog back into index markdown. Loading
//! the rendered document again yields an equivalent catalog (same
//! identifiers, categories, recipes and decision rows), which is how
//! the round-trip tests pin the format.

use crate::types::Catalog;
use skillmap_skills::SkillRegistry;
use std::collections::HashSet;
use std::fmt::Write;

/// Render the catalog as an index document
///
/// Skills the catalog does not place in any category are emitted under
/// an "Uncategorized" section so the rendered index always covers the
/// whole registry.
pub fn render_index(registry: &SkillRegistry, catalog: &Catalog) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# Skill Catalog");
    let _ = writeln!(out);
    let _ = writeln!(out, "## Categories");
    let _ = writeln!(out);

    let mut placed: HashSet<&str> = HashSet::new();
    for category in &catalog.categories {
        let _ = writeln!(out, "### {}", category.name);
        let _ = writeln!(out);
        for entry in &category.entries {
            placed.insert(entry.skill.as_str());
            let purpose = if entry.purpose.is_empty() {
                registry
                    .get(&entry.skill)
                    .map(|s| s.purpose().to_string())
                    .unwrap_or_default()
            } else {
                entry.purpose.clone()
            };
            write_entry(&mut out, &entry.skill, &purpose);
        }
        let _ = writeln!(out);
    }

    let unplaced: Vec<_> = registry
        .iter()
        .filter(|s| !placed.contains(s.name.as_str()))
        .collect();
    if !unplaced.is_empty() {
        let _ = writeln!(out, "### Uncategorized");
        let _ = writeln!(out);
        for skill in unplaced {
            write_entry(&mut out, &skill.name, skill.purpose());
        }
        let _ = writeln!(out);
    }

    if !catalog.recipes.is_empty() {
        let _ = writeln!(out, "## Recipes");
        let _ = writeln!(out);
        for recipe in &catalog.recipes {
            let _ = writeln!(out, "### {}", recipe.name);
            let _ = writeln!(out);
            for (i, skill) in recipe.skills.iter().enumerate() {
                let _ = writeln!(out, "{}. {}", i + 1, skill);
            }
            let _ = writeln!(out);
        }
    }

    if !catalog.decisions.is_empty() {
        let _ = writeln!(out, "## Decision Table");
        let _ = writeln!(out);
        let _ = writeln!(out, "| Question | Choice | Rationale |");
        let _ = writeln!(out, "|---|---|---|");
        for row in &catalog.decisions {
            let _ = writeln!(
                out,
                "| {} | {} | {} |",
                row.question, row.choice, row.rationale
            );
        }
        let _ = writeln!(out);
    }

    out
}

fn write_entry(out: &mut String, skill: &str, purpose: &str) {
    if purpose.is_empty() {
        let _ = writeln!(out, "- {}", skill);
    } else {
        let _ = writeln!(out, "- {} - {}", skill, purpose);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::parse_index;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_preserves_identifiers() {
        let temp = TempDir::new().unwrap();
        for (file, name, category) in [
            ("a.md", "arcgis-core-maps", "Core"),
            ("b.md", "arcgis-layers", "Layers"),
            ("c.md", "arcgis-widgets", ""),
        ] {
            let category_line = if category.is_empty() {
                String::new()
            } else {
                format!("category: {}\n", category)
            };
            fs::write(
                temp.path().join(file),
                format!(
                    "---\nname: {}\ndescription: {} docs\n{}---\nBody\n",
                    name, name, category_line
                ),
            )
            .unwrap();
        }
        let registry = SkillRegistry::load(temp.path()).unwrap();
        let catalog = Catalog::derive(&registry);

        let rendered = render_index(&registry, &catalog);
        let reloaded = parse_index(&rendered);

        let mut original: Vec<_> = registry.names().to_vec();
        let mut round_tripped = reloaded.order.clone();
        original.sort();
        round_tripped.sort();
        assert_eq!(original, round_tripped);
    }

    #[test]
    fn test_round_trip_preserves_recipes_and_decisions() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("a.md"),
            "---\nname: arcgis-core-maps\ndescription: Maps\n---\nBody\n",
        )
        .unwrap();
        let registry = SkillRegistry::load(temp.path()).unwrap();

        let mut catalog = Catalog::derive(&registry);
        catalog.recipes.push(crate::types::Recipe {
            name: "Quick start".to_string(),
            skills: vec!["arcgis-core-maps".to_string()],
        });
        catalog.decisions.push(crate::types::DecisionRow {
            question: "2D or 3D?".to_string(),
            choice: "MapView".to_string(),
            rationale: "Lower GPU cost".to_string(),
        });

        let reloaded = parse_index(&render_index(&registry, &catalog));
        assert_eq!(reloaded.recipes, catalog.recipes);
        assert_eq!(reloaded.decisions, catalog.decisions);
    }
}
