// Print a single skill document

use super::Command;
use crate::corpus::Corpus;
use crate::error::CliResult;
use crate::output;
use crate::router::OutputFormat;

/// Print one skill document by identifier
pub struct ShowCommand {
    corpus: Corpus,
    skill: String,
    format: OutputFormat,
}

impl ShowCommand {
    pub fn new(corpus: Corpus, skill: String, format: OutputFormat) -> Self {
        Self {
            corpus,
            skill,
            format,
        }
    }
}

impl Command for ShowCommand {
    fn execute(&self) -> CliResult<()> {
        let skill = self.corpus.registry.require(&self.skill)?;

        match self.format {
            OutputFormat::Names => println!("{}", skill.name),
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(skill)?);
            }
            OutputFormat::Text => {
                println!("{}", output::render_skill(skill));
            }
        }

        Ok(())
    }
}
