//! Deterministic term-overlap ranking

use crate::tokenize::tokenize;
use skillmap_catalog::Catalog;
use skillmap_skills::{Skill, SkillRegistry};
use tracing::debug;

/// Field weights for scoring
///
/// A query term found in several fields counts once, at the heaviest
/// matching field.
#[derive(Debug, Clone, Copy)]
pub struct MatchWeights {
    pub name: f64,
    pub tags: f64,
    pub description: f64,
    pub category: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            name: 3.0,
            tags: 2.5,
            description: 1.5,
            category: 1.0,
        }
    }
}

/// A ranked match
#[derive(Debug, Clone)]
pub struct ScoredSkill<'a> {
    /// Skill identifier
    pub name: String,

    /// Relevance score; strictly positive for every returned match
    pub score: f64,

    /// The matched skill
    pub skill: &'a Skill,
}

/// Ranks skills against free-text queries
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    weights: MatchWeights,
}

impl Matcher {
    /// Create a matcher with default weights
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matcher with custom weights
    pub fn with_weights(weights: MatchWeights) -> Self {
        Self { weights }
    }

    /// Rank every skill in the registry against `query`
    ///
    /// Scoring is weighted term overlap between the query and the
    /// skill's name, tags, description and category. Only skills with a
    /// positive score are returned, best first; ties break by catalog
    /// order. An empty result is not an error; the caller decides the
    /// fallback.
    pub fn rank<'a>(
        &self,
        query: &str,
        registry: &'a SkillRegistry,
        catalog: &Catalog,
    ) -> Vec<ScoredSkill<'a>> {
        let terms = tokenize(query);
        if terms.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<ScoredSkill<'a>> = registry
            .iter()
            .filter_map(|skill| {
                let score = self.score(skill, catalog, &terms);
                (score > 0.0).then(|| ScoredSkill {
                    name: skill.name.clone(),
                    score,
                    skill,
                })
            })
            .collect();

        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    ordinal(&a.name, registry, catalog).cmp(&ordinal(&b.name, registry, catalog))
                })
                .then_with(|| a.name.cmp(&b.name))
        });

        debug!("Query '{}' matched {} skills", query, results.len());
        results
    }

    fn score(&self, skill: &Skill, catalog: &Catalog, terms: &[String]) -> f64 {
        let name_terms = tokenize(&skill.name);
        let description_terms = tokenize(&skill.description);
        let tag_terms: Vec<String> = skill.tags.iter().flat_map(|t| tokenize(t)).collect();
        let category = catalog
            .category_of(&skill.name)
            .map(str::to_string)
            .or_else(|| skill.category.clone())
            .unwrap_or_default();
        let category_terms = tokenize(&category);

        let mut score = 0.0;
        for term in terms {
            let mut weight: f64 = 0.0;
            if name_terms.contains(term) {
                weight = weight.max(self.weights.name);
            }
            if tag_terms.contains(term) {
                weight = weight.max(self.weights.tags);
            }
            if description_terms.contains(term) {
                weight = weight.max(self.weights.description);
            }
            if category_terms.contains(term) {
                weight = weight.max(self.weights.category);
            }
            score += weight;
        }
        score
    }
}

/// Catalog position, with registry scan order as the fallback for skills
/// the index does not list
fn ordinal(name: &str, registry: &SkillRegistry, catalog: &Catalog) -> usize {
    catalog
        .position(name)
        .unwrap_or_else(|| catalog.len() + registry.position(name).unwrap_or(usize::MAX - catalog.len()))
}
