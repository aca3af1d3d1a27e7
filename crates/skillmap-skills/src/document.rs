//! Skill document parsing (frontmatter + markdown body)

use crate::errors::SkillError;
use crate::models::{CodeExample, Skill, SkillMetadata};
use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag};
use std::path::Path;

/// Sections of a skill body that carry structured entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodySection {
    Prose,
    Pitfalls,
    Related,
}

/// Parse a skill document (frontmatter + content) into a [`Skill`]
///
/// The frontmatter block must declare `name` and `description`; the body
/// is scanned for fenced code blocks, a pitfalls section, and a
/// related-skills section.
pub fn parse_skill_document(path: &Path, content: &str) -> Result<Skill, SkillError> {
    let matter = gray_matter::Matter::<gray_matter::engine::YAML>::new();
    let parsed = matter.parse(content);

    let metadata: SkillMetadata = parsed
        .data
        .ok_or_else(|| SkillError::MissingField {
            field: "frontmatter".to_string(),
            path: path.display().to_string(),
        })
        .and_then(|data| {
            serde_json::from_value(data.into()).map_err(|e| SkillError::Frontmatter {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        })?;

    metadata.validate().map_err(|msg| SkillError::InvalidSkill {
        path: path.display().to_string(),
        message: msg,
    })?;

    let body = parsed.content;
    let scan = scan_body(&body);

    Ok(Skill {
        name: metadata.name,
        description: metadata.description,
        category: metadata.category,
        version: metadata.version,
        tags: metadata.tags,
        examples: scan.examples,
        pitfalls: scan.pitfalls,
        related: scan.related,
        body,
        location: path.to_path_buf(),
    })
}

struct BodyScan {
    examples: Vec<CodeExample>,
    pitfalls: Vec<String>,
    related: Vec<String>,
}

/// Walk the markdown event stream once, collecting fenced code blocks and
/// the list entries of the pitfalls / related sections
fn scan_body(body: &str) -> BodyScan {
    let mut examples = Vec::new();
    let mut pitfalls = Vec::new();
    let mut related = Vec::new();

    let mut section = BodySection::Prose;
    let mut heading_buf = String::new();
    let mut in_heading = false;
    let mut code_lang: Option<Option<String>> = None;
    let mut code_buf = String::new();
    let mut item_buf = String::new();
    let mut in_item = false;

    for event in Parser::new(body) {
        match event {
            Event::Start(Tag::Heading(..)) => {
                in_heading = true;
                heading_buf.clear();
            }
            Event::End(Tag::Heading(..)) => {
                in_heading = false;
                section = classify_heading(&heading_buf);
            }
            Event::Start(Tag::CodeBlock(kind)) => {
                code_buf.clear();
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => {
                        let tag = info.split_whitespace().next().unwrap_or("");
                        if tag.is_empty() {
                            None
                        } else {
                            Some(tag.to_string())
                        }
                    }
                    CodeBlockKind::Indented => None,
                };
                code_lang = Some(lang);
            }
            Event::End(Tag::CodeBlock(_)) => {
                if let Some(lang) = code_lang.take() {
                    examples.push(CodeExample {
                        language: lang,
                        code: code_buf.clone(),
                    });
                }
            }
            Event::Start(Tag::Item) => {
                in_item = true;
                item_buf.clear();
            }
            Event::End(Tag::Item) => {
                in_item = false;
                let entry = item_buf.trim();
                if entry.is_empty() {
                    continue;
                }
                match section {
                    BodySection::Pitfalls => pitfalls.push(entry.to_string()),
                    BodySection::Related => {
                        if let Some(id) = leading_identifier(entry) {
                            related.push(id);
                        }
                    }
                    BodySection::Prose => {}
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if in_heading {
                    heading_buf.push_str(&text);
                } else if code_lang.is_some() {
                    code_buf.push_str(&text);
                } else if in_item {
                    item_buf.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if in_item {
                    item_buf.push(' ');
                }
            }
            _ => {}
        }
    }

    BodyScan {
        examples,
        pitfalls,
        related,
    }
}

fn classify_heading(heading: &str) -> BodySection {
    let lower = heading.to_lowercase();
    if lower.contains("pitfall") {
        BodySection::Pitfalls
    } else if lower.contains("related") || lower.contains("see also") {
        BodySection::Related
    } else {
        BodySection::Prose
    }
}

/// Extract the identifier a list entry starts with
///
/// Accepts entries like "arcgis-layers - query features" or
/// "`arcgis-layers`: query features" and returns `arcgis-layers`.
pub fn leading_identifier(entry: &str) -> Option<String> {
    let trimmed = entry.trim_start_matches(|c: char| !c.is_alphanumeric());
    let id: String = trimmed
        .chars()
        .take_while(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
        .collect();
    let id = id.trim_end_matches('.').to_string();
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const DOC: &str = r#"---
name: arcgis-layers
description: Create and query FeatureLayer, GeoJSONLayer and tiled layers
category: Layers & Data
tags:
  - featurelayer
  - query
---
# Layers

Add a layer to a map:

```js
const layer = new FeatureLayer({ url });
map.add(layer);
```

## Pitfalls

- Do not query before the layer view is ready
- definitionExpression is applied server side

## Related skills

- `arcgis-core-maps` - map and view setup
- arcgis-visualization: renderers and symbols
"#;

    #[test]
    fn test_parse_extracts_frontmatter() {
        let skill = parse_skill_document(&PathBuf::from("arcgis-layers.md"), DOC).unwrap();
        assert_eq!(skill.name, "arcgis-layers");
        assert_eq!(skill.category.as_deref(), Some("Layers & Data"));
        assert_eq!(skill.tags, vec!["featurelayer", "query"]);
    }

    #[test]
    fn test_parse_extracts_code_examples() {
        let skill = parse_skill_document(&PathBuf::from("arcgis-layers.md"), DOC).unwrap();
        assert_eq!(skill.examples.len(), 1);
        assert_eq!(skill.examples[0].language.as_deref(), Some("js"));
        assert!(skill.examples[0].code.contains("new FeatureLayer"));
    }

    #[test]
    fn test_parse_extracts_pitfalls_in_order() {
        let skill = parse_skill_document(&PathBuf::from("arcgis-layers.md"), DOC).unwrap();
        assert_eq!(skill.pitfalls.len(), 2);
        assert!(skill.pitfalls[0].starts_with("Do not query"));
    }

    #[test]
    fn test_parse_extracts_related_identifiers() {
        let skill = parse_skill_document(&PathBuf::from("arcgis-layers.md"), DOC).unwrap();
        assert_eq!(skill.related, vec!["arcgis-core-maps", "arcgis-visualization"]);
    }

    #[test]
    fn test_parse_rejects_missing_frontmatter() {
        let err = parse_skill_document(&PathBuf::from("bad.md"), "# No frontmatter\n")
            .unwrap_err();
        assert!(matches!(err, SkillError::MissingField { .. }));
    }

    #[test]
    fn test_parse_rejects_missing_description() {
        let doc = "---\nname: lonely\n---\nbody\n";
        let err = parse_skill_document(&PathBuf::from("lonely.md"), doc).unwrap_err();
        assert!(matches!(err, SkillError::Frontmatter { .. }));
    }

    #[test]
    fn test_leading_identifier() {
        assert_eq!(
            leading_identifier("`arcgis-layers` - query features").as_deref(),
            Some("arcgis-layers")
        );
        assert_eq!(
            leading_identifier("[arcgis-auth] sign in").as_deref(),
            Some("arcgis-auth")
        );
        assert_eq!(leading_identifier("---"), None);
    }
}
