// List defined recipes

use super::Command;
use crate::corpus::Corpus;
use crate::error::CliResult;
use crate::output::OutputStyle;
use crate::router::OutputFormat;

/// List recipe names with their skill sequences
pub struct RecipesCommand {
    corpus: Corpus,
    format: OutputFormat,
}

impl RecipesCommand {
    pub fn new(corpus: Corpus, format: OutputFormat) -> Self {
        Self { corpus, format }
    }
}

impl Command for RecipesCommand {
    fn execute(&self) -> CliResult<()> {
        let recipes = &self.corpus.catalog.recipes;

        match self.format {
            OutputFormat::Names => {
                for recipe in recipes {
                    println!("{}", recipe.name);
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(recipes)?);
            }
            OutputFormat::Text => {
                let style = OutputStyle::default();
                if recipes.is_empty() {
                    println!("No recipes defined in the index document.");
                    return Ok(());
                }
                for recipe in recipes {
                    println!("{}", style.header(&recipe.name));
                    for (i, skill) in recipe.skills.iter().enumerate() {
                        println!("  {}. {}", i + 1, style.identifier(skill));
                    }
                }
            }
        }

        Ok(())
    }
}
