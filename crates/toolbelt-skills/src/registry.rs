//! Immutable skill registry and catalog rendering
//!
//! Built once from the discovery report and shared read-only afterwards.
//! When two skills share a name the first one discovered wins, which puts
//! project skills ahead of global ones.

use crate::errors::DuplicateIdentifier;
use crate::models::Skill;
use std::collections::HashMap;

const CATALOG_PREAMBLE: &str = "Execute a skill within the main conversation";

/// Name-indexed view over the discovered skills
#[derive(Debug, Clone, Default)]
pub struct SkillRegistry {
    skills: Vec<Skill>,
    by_name: HashMap<String, usize>,
}

impl SkillRegistry {
    pub fn new(skills: Vec<Skill>) -> Self {
        let mut by_name = HashMap::with_capacity(skills.len());
        for (index, skill) in skills.iter().enumerate() {
            by_name.entry(skill.name.clone()).or_insert(index);
        }
        Self { skills, by_name }
    }

    pub fn get(&self, name: &str) -> Option<&Skill> {
        self.by_name.get(name).map(|&index| &self.skills[index])
    }

    /// Skills reachable by name, in discovery order
    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.skills
            .iter()
            .enumerate()
            .filter(|(index, skill)| self.by_name.get(&skill.name) == Some(index))
            .map(|(_, skill)| skill)
    }

    /// Every discovered skill, including ones shadowed by an earlier name
    pub fn all(&self) -> &[Skill] {
        &self.skills
    }

    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|skill| skill.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Render the tool description: usage instructions plus every discovered
    /// skill, shadowed ones included
    pub fn catalog(&self, tool_name: &str) -> String {
        let entries: Vec<String> = self
            .skills
            .iter()
            .map(|skill| {
                format!(
                    "<skill>\n<name>\n{}\n</name>\n<description>\n{}\n</description>\n<location>\n{}\n</location>\n</skill>",
                    skill.name, skill.description, skill.origin
                )
            })
            .collect();

        format!(
            "{CATALOG_PREAMBLE}\n\
             \n\
             <skills_instructions>\n\
             When users ask you to perform tasks, check if any of the available skills below can help complete the task more effectively. \
             Skills provide specialized capabilities and domain knowledge.\n\
             \n\
             How to use skills:\n\
             - **Invoke skills using this tool `{tool_name}` with the skill name only (no arguments)**\n\
             - When you invoke a skill, you will see <command-message>The \"{{name}}\" skill is loading</command-message>\n\
             - The skill's prompt will expand and provide detailed instructions on how to complete the task\n\
             - Examples:\n\
             \x20 - `command: \"pdf\"` - invoke the pdf skill\n\
             \x20 - `command: \"xlsx\"` - invoke the xlsx skill\n\
             \x20 - `command: \"ms-office-suite:pdf\"` - invoke using fully qualified name\n\
             \n\
             Important:\n\
             - Only use skills listed in <available_skills> below\n\
             - Do not invoke a skill that is already running\n\
             - Do not use this tool for built-in CLI commands (like /help, /clear, etc.)\n\
             </skills_instructions>\n\
             \n\
             <available_skills>\n\
             {skills}\n\
             </available_skills>",
            skills = entries.join("\n"),
        )
    }
}

/// One entry per skill whose tool identifier was already claimed earlier
pub fn find_duplicate_identifiers(skills: &[Skill]) -> Vec<DuplicateIdentifier> {
    let mut seen: HashMap<&str, &Skill> = HashMap::new();
    let mut duplicates = Vec::new();

    for skill in skills {
        match seen.get(skill.tool_identifier.as_str()) {
            Some(first) => duplicates.push(DuplicateIdentifier {
                tool_identifier: skill.tool_identifier.clone(),
                first_path: first.base_path.clone(),
                duplicate_path: skill.base_path.clone(),
            }),
            None => {
                seen.insert(&skill.tool_identifier, skill);
            }
        }
    }

    duplicates
}
