// Match skills against a free-text task description

use super::Command;
use crate::corpus::Corpus;
use crate::error::CliResult;
use crate::output::{self, OutputStyle};
use crate::router::OutputFormat;
use skillmap_search::Matcher;

/// Rank skills by relevance and print the selection
pub struct SearchCommand {
    corpus: Corpus,
    query: String,
    format: OutputFormat,
    limit: Option<usize>,
}

impl SearchCommand {
    pub fn new(corpus: Corpus, query: String, format: OutputFormat, limit: Option<usize>) -> Self {
        Self {
            corpus,
            query,
            format,
            limit,
        }
    }
}

impl Command for SearchCommand {
    fn execute(&self) -> CliResult<()> {
        let matcher = Matcher::new();
        let mut results = matcher.rank(&self.query, &self.corpus.registry, &self.corpus.catalog);
        if let Some(limit) = self.limit {
            results.truncate(limit);
        }

        if results.is_empty() {
            // Empty match is a warning, never a failure; the catalog
            // listing is the fallback
            output::print_warning(&format!(
                "No skills matched '{}'. Run 'skm list' to browse the catalog.",
                self.query
            ));
            if self.format == OutputFormat::Json {
                println!("[]");
            }
            return Ok(());
        }

        match self.format {
            OutputFormat::Names => {
                for result in &results {
                    println!("{}", result.name);
                }
            }
            OutputFormat::Json => {
                let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
                println!("{}", serde_json::to_string_pretty(&names)?);
            }
            OutputFormat::Text => {
                let style = OutputStyle::default();
                let mut sections = Vec::new();
                for result in &results {
                    sections.push(output::render_skill(result.skill));
                }
                eprintln!(
                    "{}",
                    style.header(&format!(
                        "{} skill(s) matched '{}'",
                        results.len(),
                        self.query
                    ))
                );
                println!("{}", sections.join("\n\n"));
            }
        }

        Ok(())
    }
}
