// CLI error handling and exit-code mapping

use skillmap_catalog::CatalogError;
use skillmap_skills::SkillError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error(transparent)]
    Skill(#[from] SkillError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Referential integrity check failed: {problems} dangling reference(s)")]
    Integrity { problems: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::InvalidArgument { message } => {
                format!(
                    "Invalid argument: {}\n\nRun 'skm --help' for usage information.",
                    message
                )
            }
            CliError::Skill(e) if e.is_not_found() => {
                format!("{}\n\nRun 'skm list' to browse the catalog.", e)
            }
            CliError::Skill(e) => format!("{}", e),
            CliError::Catalog(CatalogError::UnknownRecipe { .. }) => {
                format!("{}\n\nRun 'skm recipes' to list defined recipes.", self)
            }
            CliError::Catalog(e) => format!("{}", e),
            CliError::Config(msg) => {
                format!(
                    "Configuration error: {}\n\nPass --root <path> or set SKILLMAP_ROOT.",
                    msg
                )
            }
            CliError::Integrity { .. } => {
                format!("{}\n\nRun 'skm validate' after fixing the corpus.", self)
            }
            CliError::Io(e) => format!("File operation failed: {}", e),
            CliError::Serialization(e) => format!("Serialization failed: {}", e),
        }
    }

    /// Process exit code for this error
    ///
    /// 1 for load/parse failures, 2 for unknown recipes, skills and
    /// other caller mistakes.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgument { .. } => 2,
            CliError::Skill(e) if e.is_not_found() => 2,
            CliError::Skill(_) => 1,
            CliError::Catalog(CatalogError::UnknownSkill { .. })
            | CliError::Catalog(CatalogError::UnknownRecipe { .. }) => 2,
            CliError::Catalog(_) => 1,
            CliError::Config(_) => 1,
            CliError::Integrity { .. } => 2,
            CliError::Io(_) => 1,
            CliError::Serialization(_) => 1,
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
