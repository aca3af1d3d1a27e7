// Output formatting and styling

use crate::logging::VerbosityLevel;
use colored::Colorize;
use skillmap_skills::Skill;

/// Output styling configuration
pub struct OutputStyle {
    pub use_colors: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl OutputStyle {
    /// Format success message
    pub fn success(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✓".green().bold(), msg)
        } else {
            format!("✓ {}", msg)
        }
    }

    /// Format error message
    pub fn error(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✗".red().bold(), msg)
        } else {
            format!("✗ {}", msg)
        }
    }

    /// Format warning message
    pub fn warning(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "⚠".yellow(), msg)
        } else {
            format!("⚠ {}", msg)
        }
    }

    /// Format header
    pub fn header(&self, title: &str) -> String {
        if self.use_colors {
            title.bold().to_string()
        } else {
            title.to_string()
        }
    }

    /// Format a skill identifier
    pub fn identifier(&self, name: &str) -> String {
        if self.use_colors {
            name.cyan().to_string()
        } else {
            name.to_string()
        }
    }
}

/// Print an error message to stderr
pub fn print_error(msg: &str) {
    eprintln!("{}", OutputStyle::default().error(msg));
}

/// Print a warning to stderr, honoring quiet mode
pub fn print_warning(msg: &str) {
    if VerbosityLevel::Normal.should_output() {
        eprintln!("{}", OutputStyle::default().warning(msg));
    }
}

/// Print a success line to stdout, honoring quiet mode
pub fn print_success(msg: &str) {
    if VerbosityLevel::Normal.should_output() {
        println!("{}", OutputStyle::default().success(msg));
    }
}

/// Render a skill document for concatenated markdown output
///
/// The comment line keeps each document attributable once several are
/// concatenated into one stream.
pub fn render_skill(skill: &Skill) -> String {
    format!(
        "<!-- {} - {} -->\n\n{}",
        skill.name,
        skill.purpose(),
        skill.body.trim_start()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_plain_styling_without_colors() {
        let style = OutputStyle { use_colors: false };
        assert_eq!(style.success("done"), "✓ done");
        assert_eq!(style.error("bad"), "✗ bad");
        assert_eq!(style.identifier("arcgis-layers"), "arcgis-layers");
    }

    #[test]
    fn test_render_skill_keeps_body() {
        let skill = Skill {
            name: "arcgis-layers".to_string(),
            description: "Layer docs".to_string(),
            category: None,
            version: None,
            tags: Vec::new(),
            examples: Vec::new(),
            pitfalls: Vec::new(),
            related: Vec::new(),
            body: "# Layers\n\nContent.\n".to_string(),
            location: PathBuf::from("layers.md"),
        };
        let rendered = render_skill(&skill);
        assert!(rendered.starts_with("<!-- arcgis-layers - Layer docs -->"));
        assert!(rendered.contains("# Layers"));
    }
}
