// Corpus referential-integrity check

use super::Command;
use crate::corpus::Corpus;
use crate::error::{CliError, CliResult};
use crate::output::{self, OutputStyle};
use skillmap_catalog::check_integrity;

/// Verify that every recipe entry and cross-reference resolves
pub struct ValidateCommand {
    corpus: Corpus,
}

impl ValidateCommand {
    pub fn new(corpus: Corpus) -> Self {
        Self { corpus }
    }
}

impl Command for ValidateCommand {
    fn execute(&self) -> CliResult<()> {
        let dangling = check_integrity(&self.corpus.catalog, &self.corpus.registry);

        if dangling.is_empty() {
            output::print_success(&format!(
                "Corpus is consistent: {} skills, {} recipes, {} decision rows",
                self.corpus.registry.len(),
                self.corpus.catalog.recipes.len(),
                self.corpus.catalog.decisions.len()
            ));
            return Ok(());
        }

        let style = OutputStyle::default();
        for problem in &dangling {
            eprintln!("{}", style.error(&problem.to_string()));
        }

        Err(CliError::Integrity {
            problems: dangling.len(),
        })
    }
}
