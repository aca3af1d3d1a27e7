// Display version information

use super::Command;
use crate::error::CliResult;
use crate::output::OutputStyle;

/// Display version information
pub struct VersionCommand;

impl VersionCommand {
    pub fn new() -> Self {
        Self
    }

    /// Get version information
    fn get_version_info() -> String {
        format!(
            "skillmap v{}\n\nBuild Information:\n  Edition: 2021\n  Profile: {}",
            env!("CARGO_PKG_VERSION"),
            if cfg!(debug_assertions) {
                "debug"
            } else {
                "release"
            }
        )
    }
}

impl Default for VersionCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for VersionCommand {
    fn execute(&self) -> CliResult<()> {
        let style = OutputStyle::default();
        println!("{}", style.header(&Self::get_version_info()));
        Ok(())
    }
}
