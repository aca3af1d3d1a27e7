//! Exit-code contract for the CLI layer
//!
//! 0 on success, 1 on parse/load failure, 2 on unknown recipe or skill.

use skillmap_cli::commands::{Command, RecipeCommand, SearchCommand, ShowCommand, ValidateCommand};
use skillmap_cli::{CliError, Corpus, OutputFormat};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn build_corpus(with_dangling: bool) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("arcgis-core-maps.md"),
        "---\nname: arcgis-core-maps\ndescription: Maps and views\n---\n# Maps\n\nBody.\n",
    )
    .unwrap();
    let extra = if with_dangling {
        "\n### Broken\n\n1. ghost-skill\n"
    } else {
        ""
    };
    fs::write(
        temp.path().join("AGENTS.md"),
        format!(
            "## Categories\n\n### Core\n\n- arcgis-core-maps - Maps and views\n\n## Recipes\n\n### Quick start\n\n1. arcgis-core-maps\n{}",
            extra
        ),
    )
    .unwrap();
    temp
}

fn load(root: &Path) -> Corpus {
    Corpus::load(Some(root)).unwrap()
}

#[test]
fn search_succeeds_even_without_matches() {
    let temp = build_corpus(false);
    let corpus = load(temp.path());

    let cmd = SearchCommand::new(corpus, "nothing relevant".to_string(), OutputFormat::Names, None);
    assert!(cmd.execute().is_ok());
}

#[test]
fn unknown_skill_maps_to_exit_2() {
    let temp = build_corpus(false);
    let corpus = load(temp.path());

    let err = ShowCommand::new(corpus, "ghost".to_string(), OutputFormat::Names)
        .execute()
        .unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn unknown_recipe_maps_to_exit_2() {
    let temp = build_corpus(false);
    let corpus = load(temp.path());

    let err = RecipeCommand::new(corpus, "ghost recipe".to_string(), OutputFormat::Names)
        .execute()
        .unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn known_recipe_succeeds() {
    let temp = build_corpus(false);
    let corpus = load(temp.path());

    let cmd = RecipeCommand::new(corpus, "Quick start".to_string(), OutputFormat::Names);
    assert!(cmd.execute().is_ok());
}

#[test]
fn malformed_corpus_maps_to_exit_1() {
    let temp = build_corpus(false);
    fs::write(temp.path().join("zz-broken.md"), "# missing frontmatter\n").unwrap();

    let err = Corpus::load(Some(temp.path())).unwrap_err();
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn validate_flags_dangling_references_with_exit_2() {
    let temp = build_corpus(true);
    let corpus = load(temp.path());

    let err = ValidateCommand::new(corpus).execute().unwrap_err();
    assert!(matches!(err, CliError::Integrity { problems: 1 }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn validate_passes_on_consistent_corpus() {
    let temp = build_corpus(false);
    let corpus = load(temp.path());

    assert!(ValidateCommand::new(corpus).execute().is_ok());
}
