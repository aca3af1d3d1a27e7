//! Skill registry with filesystem scanning
//!
//! Walks a corpus root for markdown skill documents and assembles the
//! read-only registry. Index documents (AGENTS.md / INDEX.md) and README
//! files live alongside skills and are skipped here; the catalog crate
//! parses them separately.

use crate::document::parse_skill_document;
use crate::errors::SkillError;
use crate::models::Skill;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// File names that are part of the corpus but are not skill documents
const NON_SKILL_FILES: &[&str] = &["AGENTS.md", "INDEX.md", "README.md"];

/// In-memory collection of all parsed skills
///
/// Built once from a corpus directory; read-only afterwards. Iteration
/// order is the deterministic scan order (lexicographic by path).
#[derive(Debug, Clone, Default)]
pub struct SkillRegistry {
    skills: HashMap<String, Skill>,
    order: Vec<String>,
    root: PathBuf,
}

impl SkillRegistry {
    /// Load every skill document under `root`
    ///
    /// Fatal on the first malformed document or identifier collision; a
    /// half-parsed corpus is not usable as a registry.
    pub fn load(root: &Path) -> Result<Self, SkillError> {
        if !root.is_dir() {
            return Err(SkillError::RootNotFound {
                path: root.display().to_string(),
            });
        }

        debug!("Scanning for skills in: {}", root.display());

        let mut registry = Self {
            skills: HashMap::new(),
            order: Vec::new(),
            root: root.to_path_buf(),
        };

        for entry in WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()))
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && is_skill_file(e.path()))
        {
            let path = entry.path();
            let content = std::fs::read_to_string(path)?;
            let skill = parse_skill_document(path, &content)?;
            registry.insert(skill)?;
        }

        debug!("Skill registry loaded with {} skills", registry.len());
        Ok(registry)
    }

    /// Insert a parsed skill, applying the version-shadowing policy
    ///
    /// Two documents may share a name only when both carry distinct
    /// `version` values; the later version wins and the earlier one is
    /// shadowed with a warning. Anything else is a fatal collision.
    fn insert(&mut self, skill: Skill) -> Result<(), SkillError> {
        match self.skills.get(&skill.name) {
            None => {
                self.order.push(skill.name.clone());
                self.skills.insert(skill.name.clone(), skill);
                Ok(())
            }
            Some(existing) => match (&existing.version, &skill.version) {
                (Some(old), Some(new)) if old != new => {
                    if compare_versions(new, old) == Ordering::Greater {
                        warn!(
                            "Skill '{}' v{} shadows v{} ({})",
                            skill.name,
                            new,
                            old,
                            existing.location.display()
                        );
                        self.skills.insert(skill.name.clone(), skill);
                    } else {
                        warn!(
                            "Skill '{}' v{} ignored; registry keeps v{}",
                            skill.name, new, old
                        );
                    }
                    Ok(())
                }
                _ => Err(SkillError::DuplicateSkill {
                    name: skill.name.clone(),
                    first: existing.location.display().to_string(),
                    second: skill.location.display().to_string(),
                }),
            },
        }
    }

    /// Get a skill by identifier
    pub fn get(&self, name: &str) -> Option<&Skill> {
        self.skills.get(name)
    }

    /// Get a skill by identifier, or a not-found error naming the
    /// available identifiers
    pub fn require(&self, name: &str) -> Result<&Skill, SkillError> {
        self.get(name)
            .ok_or_else(|| SkillError::not_found(name, &self.order))
    }

    /// Whether an identifier resolves
    pub fn contains(&self, name: &str) -> bool {
        self.skills.contains_key(name)
    }

    /// Identifiers in scan order
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Position of an identifier in scan order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.order.iter().position(|n| n == name)
    }

    /// Skills in scan order
    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.order.iter().filter_map(|name| self.skills.get(name))
    }

    /// Number of registered skills
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Corpus root the registry was loaded from
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}

fn is_skill_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    path.extension().and_then(|e| e.to_str()) == Some("md")
        && !NON_SKILL_FILES.contains(&name)
}

/// Compare dotted version strings segment-wise, numerically where possible
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = match (x.parse::<u64>(), y.parse::<u64>()) {
                    (Ok(nx), Ok(ny)) => nx.cmp(&ny),
                    _ => x.cmp(y),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

/// Candidate corpus roots, in priority order
///
/// Used by callers when no explicit root is given: the `SKILLMAP_ROOT`
/// environment variable, a `skills/` directory under the working
/// directory, then the per-user corpus under the home directory.
pub fn default_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(path) = std::env::var("SKILLMAP_ROOT") {
        if !path.trim().is_empty() {
            roots.push(PathBuf::from(path));
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd.join("skills"));
    }

    if let Some(home) = dirs::home_dir() {
        roots.push(home.join(".skillmap").join("skills"));
    }

    roots
}
