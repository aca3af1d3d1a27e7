// List the catalog, grouped by category

use super::Command;
use crate::corpus::Corpus;
use crate::error::{CliError, CliResult};
use crate::output::OutputStyle;
use crate::router::OutputFormat;
use serde::Serialize;

/// One listing line
#[derive(Debug, Serialize)]
struct ListEntry<'a> {
    name: &'a str,
    purpose: &'a str,
    category: &'a str,
}

/// List skills, optionally filtered to one category
pub struct ListCommand {
    corpus: Corpus,
    category: Option<String>,
    format: OutputFormat,
}

impl ListCommand {
    pub fn new(corpus: Corpus, category: Option<String>, format: OutputFormat) -> Self {
        Self {
            corpus,
            category,
            format,
        }
    }

    /// Collect listing entries in catalog order
    fn entries(&self) -> CliResult<Vec<ListEntry<'_>>> {
        let catalog = &self.corpus.catalog;
        let registry = &self.corpus.registry;

        if let Some(wanted) = &self.category {
            if !catalog.categories.iter().any(|c| &c.name == wanted) {
                return Err(CliError::InvalidArgument {
                    message: format!(
                        "unknown category '{}'. Categories: {}",
                        wanted,
                        catalog
                            .categories
                            .iter()
                            .map(|c| c.name.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                });
            }
        }

        let mut entries = Vec::new();
        for category in &catalog.categories {
            if let Some(wanted) = &self.category {
                if &category.name != wanted {
                    continue;
                }
            }
            for entry in &category.entries {
                let purpose = if entry.purpose.is_empty() {
                    registry.get(&entry.skill).map(|s| s.purpose()).unwrap_or("")
                } else {
                    entry.purpose.as_str()
                };
                entries.push(ListEntry {
                    name: &entry.skill,
                    purpose,
                    category: &category.name,
                });
            }
        }

        // Skills the index never placed still belong in the full listing
        if self.category.is_none() {
            for skill in registry.iter() {
                if catalog.category_of(&skill.name).is_none() {
                    entries.push(ListEntry {
                        name: &skill.name,
                        purpose: skill.purpose(),
                        category: skill.category.as_deref().unwrap_or("Uncategorized"),
                    });
                }
            }
        }

        Ok(entries)
    }
}

impl Command for ListCommand {
    fn execute(&self) -> CliResult<()> {
        let entries = self.entries()?;

        match self.format {
            OutputFormat::Names => {
                for entry in &entries {
                    println!("{}", entry.name);
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            }
            OutputFormat::Text => {
                let style = OutputStyle::default();
                let mut current_category = "";
                for entry in &entries {
                    if entry.category != current_category {
                        current_category = entry.category;
                        println!("{}", style.header(current_category));
                    }
                    println!("  {}  {}", style.identifier(entry.name), entry.purpose);
                }
            }
        }

        Ok(())
    }
}
