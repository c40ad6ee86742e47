//! SKILL.md parsing and frontmatter validation
//!
//! A skill file is YAML frontmatter between `---` delimiters followed by a
//! markdown body. Validation reports every failing field at once instead of
//! stopping at the first one.

use crate::errors::{FieldIssue, SkillError};
use crate::models::{Skill, SkillFrontmatter};
use crate::paths::SkillRoot;
use gray_matter::{engine::YAML, Matter};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::{Component, Path};

/// Prefix of every derived tool identifier
pub const TOOL_IDENTIFIER_PREFIX: &str = "skills_";

/// Minimum description length, counted in characters
pub const MIN_DESCRIPTION_LEN: usize = 10;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9-]+$").expect("skill name pattern is valid"));

/// Returns true when `name` is a valid skill name
pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

/// Split a document into `(frontmatter, body)`; the body is trimmed.
///
/// Documents without a closed, non-empty `---` block have no frontmatter.
pub fn split_frontmatter(content: &str) -> Result<(Value, String), FieldIssue> {
    let matter = Matter::<YAML>::new();
    let parsed = matter.parse(content.trim_start_matches('\u{feff}'));

    let data = parsed.data.ok_or_else(|| {
        FieldIssue::new(
            "frontmatter",
            "document must start with a '---' delimited YAML block",
        )
    })?;

    Ok((data.into(), parsed.content.trim().to_string()))
}

/// Validate parsed frontmatter against the skill schema
pub fn validate_frontmatter(frontmatter: Value) -> Result<SkillFrontmatter, Vec<FieldIssue>> {
    let mut fields = match frontmatter {
        Value::Object(fields) => fields,
        _ => {
            return Err(vec![FieldIssue::new(
                "frontmatter",
                "must be a YAML mapping",
            )])
        }
    };

    let mut issues = Vec::new();

    let name = required_string(fields.remove("name"), "name", &mut issues);
    if let Some(name) = &name {
        if !is_valid_name(name) {
            issues.push(FieldIssue::new(
                "name",
                "must contain only lowercase letters, digits and hyphens",
            ));
        }
    }

    let description = required_string(fields.remove("description"), "description", &mut issues);
    if let Some(description) = &description {
        if description.chars().count() < MIN_DESCRIPTION_LEN {
            issues.push(FieldIssue::new(
                "description",
                format!("must be at least {} characters", MIN_DESCRIPTION_LEN),
            ));
        }
    }

    let license = optional_string(fields.remove("license"), "license", &mut issues);
    let allowed_tools =
        optional_string_list(fields.remove("allowed-tools"), "allowed-tools", &mut issues);
    let metadata = optional_string_map(fields.remove("metadata"), "metadata", &mut issues);

    match (name, description) {
        (Some(name), Some(description)) if issues.is_empty() => Ok(SkillFrontmatter {
            name,
            description,
            license,
            allowed_tools,
            metadata,
        }),
        _ => Err(issues),
    }
}

/// Derive the tool identifier from the skill file's location below its root.
///
/// `<root>/data/pdf-tools/SKILL.md` becomes `skills_data_pdf_tools`.
pub fn tool_identifier(skill_file: &Path, root: &Path) -> String {
    let relative = skill_file.strip_prefix(root).unwrap_or(skill_file);
    let segments: Vec<String> = relative
        .parent()
        .map(|dir| {
            dir.components()
                .filter_map(|component| match component {
                    Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default();

    format!(
        "{}{}",
        TOOL_IDENTIFIER_PREFIX,
        segments.join("_").replace('-', "_")
    )
}

/// Read and validate one SKILL.md found under `root`
pub fn parse_skill_file(path: &Path, root: &SkillRoot) -> Result<Skill, SkillError> {
    let content = std::fs::read_to_string(path).map_err(|source| SkillError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_skill(&content, path, root)
}

/// Validate already-loaded SKILL.md text
pub fn parse_skill(content: &str, path: &Path, root: &SkillRoot) -> Result<Skill, SkillError> {
    let schema_error = |issues: Vec<FieldIssue>| SkillError::SchemaValidation {
        path: path.to_path_buf(),
        issues,
    };

    let (data, body) = split_frontmatter(content).map_err(|issue| schema_error(vec![issue]))?;
    let frontmatter = validate_frontmatter(data).map_err(schema_error)?;

    let base_directory = path.parent().unwrap_or(root.path.as_path()).to_path_buf();
    let directory = base_directory
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    if frontmatter.name != directory {
        return Err(SkillError::NameMismatch {
            path: path.to_path_buf(),
            declared: frontmatter.name,
            directory,
        });
    }

    Ok(Skill {
        name: frontmatter.name,
        base_path: path.to_path_buf(),
        tool_identifier: tool_identifier(path, &root.path),
        base_directory,
        description: frontmatter.description,
        allowed_tools: frontmatter.allowed_tools,
        metadata: frontmatter.metadata,
        license: frontmatter.license,
        content: body,
        origin: root.origin,
    })
}

fn required_string(
    value: Option<Value>,
    field: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<String> {
    match value {
        None => {
            issues.push(FieldIssue::new(field, "is required"));
            None
        }
        Some(Value::String(s)) => Some(s),
        Some(_) => {
            issues.push(FieldIssue::new(field, "must be a string"));
            None
        }
    }
}

fn optional_string(
    value: Option<Value>,
    field: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<String> {
    match value {
        None => None,
        Some(Value::String(s)) => Some(s),
        Some(_) => {
            issues.push(FieldIssue::new(field, "must be a string"));
            None
        }
    }
}

fn optional_string_list(
    value: Option<Value>,
    field: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<Vec<String>> {
    let items = match value {
        None => return None,
        Some(Value::Array(items)) => items,
        Some(_) => {
            issues.push(FieldIssue::new(field, "must be a list of strings"));
            return None;
        }
    };

    let mut tools = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match item {
            Value::String(s) => tools.push(s),
            _ => issues.push(FieldIssue::new(
                format!("{}[{}]", field, index),
                "must be a string",
            )),
        }
    }
    Some(tools)
}

fn optional_string_map(
    value: Option<Value>,
    field: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<BTreeMap<String, String>> {
    let mapping: Map<String, Value> = match value {
        None => return None,
        Some(Value::Object(mapping)) => mapping,
        Some(_) => {
            issues.push(FieldIssue::new(field, "must be a mapping of strings"));
            return None;
        }
    };

    let mut entries = BTreeMap::new();
    for (key, value) in mapping {
        match value {
            Value::String(v) => {
                entries.insert(key, v);
            }
            _ => issues.push(FieldIssue::new(format!("{}.{}", field, key), "must be a string")),
        }
    }
    Some(entries)
}
