// Command handlers for the skillmap CLI

pub mod list;
pub mod recipe;
pub mod recipes;
pub mod search;
pub mod show;
pub mod validate;
pub mod version;

pub use list::ListCommand;
pub use recipe::RecipeCommand;
pub use recipes::RecipesCommand;
pub use search::SearchCommand;
pub use show::ShowCommand;
pub use validate::ValidateCommand;
pub use version::VersionCommand;

use crate::error::CliResult;

/// Trait for command handlers
pub trait Command {
    fn execute(&self) -> CliResult<()>;
}
