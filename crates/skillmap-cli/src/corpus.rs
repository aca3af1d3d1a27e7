// Corpus loading shared by all commands

use crate::error::{CliError, CliResult};
use skillmap_catalog::{find_index_file, load_index, Catalog};
use skillmap_skills::{registry::default_roots, SkillRegistry};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A loaded corpus: the skill registry plus its catalog
///
/// Loaded once per invocation and read-only afterwards.
#[derive(Debug)]
pub struct Corpus {
    pub registry: SkillRegistry,
    pub catalog: Catalog,
}

impl Corpus {
    /// Load the corpus from an explicit root or the default locations
    pub fn load(root_override: Option<&Path>) -> CliResult<Self> {
        let root = resolve_root(root_override)?;
        debug!("Loading skill corpus from {}", root.display());

        let registry = SkillRegistry::load(&root)?;

        let catalog = match find_index_file(&root) {
            Some(index_path) => load_index(&index_path)?,
            None => {
                warn!(
                    "No index document (AGENTS.md or INDEX.md) under {}; deriving catalog from frontmatter",
                    root.display()
                );
                Catalog::derive(&registry)
            }
        };

        Ok(Self { registry, catalog })
    }
}

/// Resolve the corpus root: explicit flag first, then the default
/// locations (SKILLMAP_ROOT, ./skills, ~/.skillmap/skills)
fn resolve_root(root_override: Option<&Path>) -> CliResult<PathBuf> {
    if let Some(root) = root_override {
        return Ok(root.to_path_buf());
    }

    default_roots()
        .into_iter()
        .find(|candidate| candidate.is_dir())
        .ok_or_else(|| {
            CliError::Config(
                "no skill corpus found in the default locations".to_string(),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_with_explicit_root() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("maps.md"),
            "---\nname: arcgis-core-maps\ndescription: Maps\n---\nBody\n",
        )
        .unwrap();

        let corpus = Corpus::load(Some(temp.path())).unwrap();
        assert_eq!(corpus.registry.len(), 1);
        assert_eq!(corpus.catalog.order, vec!["arcgis-core-maps"]);
    }

    #[test]
    fn test_load_prefers_index_document() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("maps.md"),
            "---\nname: arcgis-core-maps\ndescription: Maps\n---\nBody\n",
        )
        .unwrap();
        fs::write(
            temp.path().join("AGENTS.md"),
            "## Recipes\n\n### Quick start\n\n1. arcgis-core-maps\n",
        )
        .unwrap();

        let corpus = Corpus::load(Some(temp.path())).unwrap();
        assert!(corpus.catalog.recipe("Quick start").is_some());
    }

    #[test]
    fn test_load_missing_root_fails() {
        let err = Corpus::load(Some(Path::new("/nonexistent/corpus"))).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }
}
