// Command routing and dispatch

use crate::commands::*;
use crate::corpus::Corpus;
use crate::error::CliResult;
use crate::logging;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// skillmap - retrieval tool for markdown skill corpora
#[derive(Parser, Debug)]
#[command(name = "skm")]
#[command(bin_name = "skm")]
#[command(about = "Find, combine and print skills from a markdown corpus")]
#[command(
    long_about = "skillmap: a retrieval tool for markdown skill corpora.\n\nA corpus is a directory of skill documents (YAML frontmatter + markdown)\nplus an index document (AGENTS.md) defining categories, recipes and\ndecision tables.\n\nQuick start:\n  skm feature layer query     Match skills against a task description\n  skm --recipe \"Build a basic map app\"\n  skm list                    Browse the full catalog\n  skm validate                Check cross-references and recipes"
)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Free-text task description to match against the catalog
    #[arg(value_name = "QUERY")]
    pub query: Vec<String>,

    /// Expand a named recipe instead of matching a query
    #[arg(long, value_name = "NAME")]
    pub recipe: Option<String>,

    /// Corpus root (default: SKILLMAP_ROOT, ./skills, ~/.skillmap/skills)
    #[arg(long, global = true, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Maximum number of matches to print
    #[arg(long, global = true, value_name = "N")]
    pub limit: Option<usize>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimize output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// How selected skills are written to stdout
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Concatenated markdown of the selected skills
    Text,
    /// JSON array of skill identifiers
    Json,
    /// Bare identifiers, one per line
    Names,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Match skills against a free-text task description
    #[command(about = "Rank skills by relevance to a task description")]
    Search {
        /// Task description
        #[arg(value_name = "QUERY", required = true)]
        query: Vec<String>,
    },

    /// List the full catalog
    #[command(about = "List skills, grouped by category")]
    List {
        /// Only show one category
        #[arg(long, value_name = "NAME")]
        category: Option<String>,
    },

    /// Print a single skill document
    #[command(about = "Print one skill document by identifier")]
    Show {
        /// Skill identifier
        #[arg(value_name = "SKILL")]
        skill: String,
    },

    /// List defined recipes
    #[command(about = "List recipe names with their skill sequences")]
    Recipes,

    /// Expand a named recipe
    #[command(about = "Expand a recipe into its ordered skill documents")]
    Recipe {
        /// Recipe name
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Check corpus referential integrity
    #[command(about = "Verify that recipes and cross-references resolve")]
    Validate,

    /// Generate shell completions
    #[command(about = "Generate shell completion scripts")]
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_name = "SHELL")]
        shell: String,
    },

    /// Display version information
    #[command(about = "Display version information")]
    Version,
}

/// Routes parsed arguments to command handlers
pub struct CommandRouter;

impl CommandRouter {
    /// Parse arguments and execute the selected command
    pub async fn route() -> CliResult<()> {
        Self::dispatch(Cli::parse()).await
    }

    async fn dispatch(cli: Cli) -> CliResult<()> {
        logging::init_logging(cli.verbose, cli.quiet);

        match cli.command {
            Some(Commands::Completions { ref shell }) => {
                crate::completion::generate_completions(shell)
                    .map_err(|message| crate::error::CliError::InvalidArgument { message })
            }
            Some(Commands::Version) => VersionCommand::new().execute(),
            Some(Commands::Search { ref query }) => {
                let corpus = Corpus::load(cli.root.as_deref())?;
                SearchCommand::new(corpus, query.join(" "), cli.format, cli.limit).execute()
            }
            Some(Commands::List { ref category }) => {
                let corpus = Corpus::load(cli.root.as_deref())?;
                ListCommand::new(corpus, category.clone(), cli.format).execute()
            }
            Some(Commands::Show { ref skill }) => {
                let corpus = Corpus::load(cli.root.as_deref())?;
                ShowCommand::new(corpus, skill.clone(), cli.format).execute()
            }
            Some(Commands::Recipes) => {
                let corpus = Corpus::load(cli.root.as_deref())?;
                RecipesCommand::new(corpus, cli.format).execute()
            }
            Some(Commands::Recipe { ref name }) => {
                let corpus = Corpus::load(cli.root.as_deref())?;
                RecipeCommand::new(corpus, name.clone(), cli.format).execute()
            }
            Some(Commands::Validate) => {
                let corpus = Corpus::load(cli.root.as_deref())?;
                ValidateCommand::new(corpus).execute()
            }
            None => {
                let corpus = Corpus::load(cli.root.as_deref())?;
                if let Some(name) = cli.recipe {
                    RecipeCommand::new(corpus, name, cli.format).execute()
                } else if !cli.query.is_empty() {
                    SearchCommand::new(corpus, cli.query.join(" "), cli.format, cli.limit)
                        .execute()
                } else {
                    // No query, no recipe: fall back to the full catalog
                    ListCommand::new(corpus, None, cli.format).execute()
                }
            }
        }
    }
}
