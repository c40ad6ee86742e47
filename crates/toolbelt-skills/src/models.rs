//! Skill data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Which search-root category produced a skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillOrigin {
    Project,
    Global,
}

impl SkillOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Global => "global",
        }
    }
}

impl fmt::Display for SkillOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A discovered and validated skill.
///
/// Skills are data (markdown + frontmatter), never executable code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name, equal to the containing directory name
    pub name: String,

    /// Absolute path to the SKILL.md file
    pub base_path: PathBuf,

    /// Directory containing SKILL.md, used to resolve relative assets
    pub base_directory: PathBuf,

    /// Identifier derived from the path below the search root
    pub tool_identifier: String,

    pub description: String,

    /// Parsed but not enforced here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_tools: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// Markdown body after the frontmatter, trimmed
    pub content: String,

    pub origin: SkillOrigin,
}

/// Validated SKILL.md frontmatter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillFrontmatter {
    pub name: String,
    pub description: String,
    pub license: Option<String>,
    pub allowed_tools: Option<Vec<String>>,
    pub metadata: Option<BTreeMap<String, String>>,
}
