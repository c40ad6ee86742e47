//! Skill discovery for the toolbelt skills server
//!
//! Skills are markdown documents (`SKILL.md`) with YAML frontmatter, loaded
//! once at startup from project and global directories and served through a
//! single tool that returns a skill's instructions by name.
//!
//! Pipeline: [`paths`] resolves search roots, [`scanner`] finds `SKILL.md`
//! files, [`parser`] validates them, [`discovery`] collects the results into a
//! report, [`registry`] indexes the valid skills and renders the catalog, and
//! [`tool`] answers invocations.

pub mod discovery;
pub mod errors;
pub mod models;
pub mod parser;
pub mod paths;
pub mod registry;
pub mod scanner;
pub mod tool;

pub use discovery::{discover, DiscoveryReport};
pub use errors::{DuplicateIdentifier, FieldIssue, SkillError};
pub use models::{Skill, SkillFrontmatter, SkillOrigin};
pub use paths::{PathResolver, SkillRoot};
pub use registry::SkillRegistry;
pub use tool::{SkillTool, SKILLS_TOOL_NAME};
