//! Skill tool dispatcher
//!
//! The single invocation entry point behind the `skills` MCP tool. Looking up
//! an unknown name is a normal outcome and produces a readable answer listing
//! what is available.

use crate::registry::SkillRegistry;
use std::sync::Arc;

/// Advertised tool name before any configured prefix
pub const SKILLS_TOOL_NAME: &str = "skills";

/// Read-only dispatcher over a shared registry
#[derive(Debug, Clone)]
pub struct SkillTool {
    registry: Arc<SkillRegistry>,
    name: String,
}

impl SkillTool {
    pub fn new(registry: Arc<SkillRegistry>) -> Self {
        Self::with_prefix(registry, "")
    }

    /// Tool named `<prefix>skills`
    pub fn with_prefix(registry: Arc<SkillRegistry>, prefix: &str) -> Self {
        Self {
            registry,
            name: format!("{}{}", prefix, SKILLS_TOOL_NAME),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn registry(&self) -> &SkillRegistry {
        &self.registry
    }

    /// Tool description shown to clients
    pub fn description(&self) -> String {
        self.registry.catalog(&self.name)
    }

    /// Load a skill's instructions by name
    pub fn invoke(&self, command: &str) -> String {
        let Some(skill) = self.registry.get(command) else {
            let names = self.registry.names();
            let available = if names.is_empty() {
                "none".to_string()
            } else {
                names.join(", ")
            };
            return format!(
                "Skill \"{}\" not found. Available skills: {}",
                command, available
            );
        };

        format!(
            "<command-message>The \"{name}\" skill is running</command-message>\n\
             <command-name>{name}</command-name>\n\
             \n\
             # {name} Skill information\n\
             \n\
             Base directory for this skill: {base}\n\
             \n\
             Skill Content:\n\
             \n\
             {content}",
            name = skill.name,
            base = skill.base_directory.display(),
            content = skill.content,
        )
    }
}
