//! Skill discovery error taxonomy
//!
//! Nothing in here is fatal to startup. Discovery collects these into a
//! [`DiscoveryReport`](crate::discovery::DiscoveryReport) and keeps going.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One frontmatter field that failed schema validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Frontmatter key (or `frontmatter` for structural problems)
    pub field: String,
    /// Why the value was rejected
    pub reason: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Skill-specific errors
#[derive(Error, Debug)]
pub enum SkillError {
    /// Search root does not exist or is not a directory
    #[error("Skills directory not found: {}", .path.display())]
    MissingRoot { path: PathBuf },

    /// IO error reading a candidate SKILL.md
    #[error("Failed to read skill at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Frontmatter missing, malformed, or failing the schema
    #[error("Invalid frontmatter in {}: {}", .path.display(), join_issues(.issues))]
    SchemaValidation {
        path: PathBuf,
        issues: Vec<FieldIssue>,
    },

    /// Declared name differs from the containing directory name
    #[error(
        "Skill name mismatch at {}: frontmatter name '{declared}', directory name '{directory}'",
        .path.display()
    )]
    NameMismatch {
        path: PathBuf,
        declared: String,
        directory: String,
    },
}

impl SkillError {
    /// Path of the root or file the error refers to
    pub fn path(&self) -> &Path {
        match self {
            Self::MissingRoot { path }
            | Self::Read { path, .. }
            | Self::SchemaValidation { path, .. }
            | Self::NameMismatch { path, .. } => path,
        }
    }

    pub fn is_missing_root(&self) -> bool {
        matches!(self, Self::MissingRoot { .. })
    }
}

/// Advisory warning: two skills derived the same tool identifier.
///
/// Both skills stay registered; lookups by name resolve to the first one seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateIdentifier {
    pub tool_identifier: String,
    /// SKILL.md of the first skill that claimed the identifier
    pub first_path: PathBuf,
    /// SKILL.md of the later skill that collided with it
    pub duplicate_path: PathBuf,
}

impl fmt::Display for DuplicateIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Duplicate tool identifier '{}': {} conflicts with {}",
            self.tool_identifier,
            self.duplicate_path.display(),
            self.first_path.display()
        )
    }
}
