//! Catalog index, cross-reference graph and combination resolver
//!
//! The catalog is the corpus's single source of truth for category
//! membership, recipes and decision tables. It is parsed once from the
//! index document (AGENTS.md or INDEX.md) at load time and treated as a
//! process-wide read-only object afterwards.

pub mod error;
pub mod graph;
pub mod index;
pub mod resolver;
pub mod types;
pub mod writer;

pub use error::{CatalogError, Result};
pub use graph::CrossRefGraph;
pub use index::{find_index_file, load_index, parse_index};
pub use resolver::{check_integrity, resolve, resolve_recipe, Dangling, RefOrigin};
pub use types::{Catalog, Category, DecisionRow, IndexEntry, Recipe};
pub use writer::render_index;
