//! Keyword matching for the skill registry
//!
//! Ranks skills against a free-text task description with a
//! deterministic weighted term-overlap score. No index, no fuzzing: the
//! corpus is tens of documents, a linear scan per query is plenty.

pub mod matcher;
pub mod tokenize;

pub use matcher::{Matcher, MatchWeights, ScoredSkill};
pub use tokenize::tokenize;
