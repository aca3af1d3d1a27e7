// Expand a named recipe

use super::Command;
use crate::corpus::Corpus;
use crate::error::CliResult;
use crate::output::{self, OutputStyle};
use crate::router::OutputFormat;
use skillmap_catalog::resolve_recipe;

/// Expand a recipe into its ordered, de-duplicated skill documents
pub struct RecipeCommand {
    corpus: Corpus,
    name: String,
    format: OutputFormat,
}

impl RecipeCommand {
    pub fn new(corpus: Corpus, name: String, format: OutputFormat) -> Self {
        Self {
            corpus,
            name,
            format,
        }
    }
}

impl Command for RecipeCommand {
    fn execute(&self) -> CliResult<()> {
        let skills = resolve_recipe(&self.corpus.catalog, &self.name, &self.corpus.registry)?;

        match self.format {
            OutputFormat::Names => {
                for skill in &skills {
                    println!("{}", skill.name);
                }
            }
            OutputFormat::Json => {
                let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
                println!("{}", serde_json::to_string_pretty(&names)?);
            }
            OutputFormat::Text => {
                let style = OutputStyle::default();
                eprintln!(
                    "{}",
                    style.header(&format!("Recipe '{}' ({} skills)", self.name, skills.len()))
                );
                let sections: Vec<String> =
                    skills.iter().map(|s| output::render_skill(s)).collect();
                println!("{}", sections.join("\n\n"));
            }
        }

        Ok(())
    }
}
