//! Index document parsing
//!
//! The index document (AGENTS.md, with INDEX.md accepted as a fallback
//! name) is plain markdown: level-2 headings open the Categories,
//! Recipes and Decision sections, level-3 headings name a category or
//! recipe, list items carry the entries, and decision tables are
//! standard markdown tables.

use crate::error::{CatalogError, Result};
use crate::types::{Catalog, Category, DecisionRow, IndexEntry, Recipe};
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag};
use skillmap_skills::document::leading_identifier;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Index file names probed at the corpus root, in priority order
const INDEX_FILE_NAMES: &[&str] = &["AGENTS.md", "INDEX.md"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IndexSection {
    None,
    Categories,
    Recipes,
    Decisions,
}

/// Locate the index document under a corpus root
pub fn find_index_file(root: &Path) -> Option<PathBuf> {
    INDEX_FILE_NAMES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}

/// Load and parse the index document at `path`
pub fn load_index(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::InvalidData {
            CatalogError::IndexParse {
                path: path.display().to_string(),
                message: "index document is not valid UTF-8".to_string(),
            }
        } else {
            CatalogError::Io(e)
        }
    })?;
    Ok(parse_index(&content))
}

/// Parse index markdown into a [`Catalog`]
///
/// Unrecognized sections are ignored; list items that do not start with
/// an identifier are skipped with a warning.
pub fn parse_index(content: &str) -> Catalog {
    let mut catalog = Catalog::default();

    let mut section = IndexSection::None;
    let mut heading_level: Option<HeadingLevel> = None;
    let mut heading_buf = String::new();
    let mut item_buf = String::new();
    let mut in_item = false;
    let mut in_table_head = false;
    let mut in_cell = false;
    let mut cell_buf = String::new();
    let mut row_cells: Vec<String> = Vec::new();

    let parser = Parser::new_ext(content, Options::ENABLE_TABLES);
    for event in parser {
        match event {
            Event::Start(Tag::Heading(level, ..)) => {
                heading_level = Some(level);
                heading_buf.clear();
            }
            Event::End(Tag::Heading(level, ..)) => {
                match level {
                    HeadingLevel::H2 => section = classify_section(&heading_buf),
                    HeadingLevel::H3 => match section {
                        IndexSection::Categories => catalog.categories.push(Category {
                            name: heading_buf.trim().to_string(),
                            entries: Vec::new(),
                        }),
                        IndexSection::Recipes => catalog.recipes.push(Recipe {
                            name: heading_buf.trim().to_string(),
                            skills: Vec::new(),
                        }),
                        _ => {}
                    },
                    _ => {}
                }
                heading_level = None;
            }
            Event::Start(Tag::Item) => {
                in_item = true;
                item_buf.clear();
            }
            Event::End(Tag::Item) => {
                in_item = false;
                record_item(&mut catalog, section, item_buf.trim());
            }
            Event::Start(Tag::TableHead) => in_table_head = true,
            Event::End(Tag::TableHead) => in_table_head = false,
            Event::Start(Tag::TableRow) => row_cells.clear(),
            Event::End(Tag::TableRow) => {
                if section == IndexSection::Decisions && row_cells.len() >= 2 {
                    catalog.decisions.push(DecisionRow {
                        question: row_cells[0].trim().to_string(),
                        choice: row_cells[1].trim().to_string(),
                        rationale: row_cells.get(2).map(|c| c.trim().to_string()).unwrap_or_default(),
                    });
                }
            }
            Event::Start(Tag::TableCell) => {
                in_cell = true;
                cell_buf.clear();
            }
            Event::End(Tag::TableCell) => {
                in_cell = false;
                if !in_table_head {
                    row_cells.push(cell_buf.clone());
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if heading_level.is_some() {
                    heading_buf.push_str(&text);
                } else if in_cell {
                    cell_buf.push_str(&text);
                } else if in_item {
                    item_buf.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if in_item {
                    item_buf.push(' ');
                }
            }
            _ => {}
        }
    }

    catalog.order = collect_order(&catalog);
    catalog
}

fn classify_section(heading: &str) -> IndexSection {
    let lower = heading.to_lowercase();
    if lower.contains("categor") || lower.contains("skills") {
        IndexSection::Categories
    } else if lower.contains("recipe") || lower.contains("combination") {
        IndexSection::Recipes
    } else if lower.contains("decision") {
        IndexSection::Decisions
    } else {
        IndexSection::None
    }
}

fn record_item(catalog: &mut Catalog, section: IndexSection, entry: &str) {
    if entry.is_empty() {
        return;
    }
    let Some(id) = leading_identifier(entry) else {
        warn!("Skipping index entry without identifier: {}", entry);
        return;
    };
    match section {
        IndexSection::Categories => {
            if let Some(category) = catalog.categories.last_mut() {
                let purpose = entry
                    .find(id.as_str())
                    .map(|pos| strip_separator(&entry[pos + id.len()..]))
                    .unwrap_or_default();
                category.entries.push(IndexEntry { skill: id, purpose });
            }
        }
        IndexSection::Recipes => {
            if let Some(recipe) = catalog.recipes.last_mut() {
                recipe.skills.push(id);
            }
        }
        _ => {}
    }
}

/// Drop the "- " / ": " separator between an identifier and its purpose
fn strip_separator(rest: &str) -> String {
    rest.trim_start_matches(|c: char| c.is_whitespace() || matches!(c, '-' | ':' | '`'))
        .trim()
        .to_string()
}

fn collect_order(catalog: &Catalog) -> Vec<String> {
    let mut order = Vec::new();
    let mut push = |id: &str, order: &mut Vec<String>| {
        if !order.iter().any(|o| o == id) {
            order.push(id.to_string());
        }
    };
    for category in &catalog.categories {
        for entry in &category.entries {
            push(&entry.skill, &mut order);
        }
    }
    for recipe in &catalog.recipes {
        for skill in &recipe.skills {
            push(skill, &mut order);
        }
    }
    order
}
