//! Cross-reference graph
//!
//! Skills reference each other by identifier ("Related skills"
//! sections), which forms a directed graph that may contain cycles
//! (mutual see-also links are common). The graph is an adjacency list
//! keyed by identifier; no live references are embedded.

use skillmap_skills::SkillRegistry;
use std::collections::HashMap;

/// Adjacency list of skill cross-references
#[derive(Debug, Clone, Default)]
pub struct CrossRefGraph {
    edges: HashMap<String, Vec<String>>,
}

impl CrossRefGraph {
    /// Build the graph from every skill's related-skill references
    pub fn from_registry(registry: &SkillRegistry) -> Self {
        let mut edges = HashMap::new();
        for skill in registry.iter() {
            edges.insert(skill.name.clone(), skill.related.clone());
        }
        Self { edges }
    }

    /// Outgoing references of a skill, in document order
    pub fn neighbors(&self, name: &str) -> &[String] {
        self.edges.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All (from, to) reference pairs
    pub fn references(&self) -> impl Iterator<Item = (&str, &str)> {
        self.edges.iter().flat_map(|(from, targets)| {
            targets.iter().map(move |to| (from.as_str(), to.as_str()))
        })
    }

    /// Number of nodes with outgoing edges recorded
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
