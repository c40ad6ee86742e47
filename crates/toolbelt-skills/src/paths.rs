//! Search root resolution
//!
//! Turns the comma-separated project and global path lists into an ordered
//! list of absolute roots. Project roots always come first.

use crate::models::SkillOrigin;
use std::path::{Component, Path, PathBuf};

/// Environment variable holding project-level skill directories
pub const PROJECT_SKILLS_ENV: &str = "PROJECT_SKILLS_PATH";

/// Environment variable holding global skill directories
pub const GLOBAL_SKILLS_ENV: &str = "GLOBAL_SKILLS_PATH";

pub const DEFAULT_PROJECT_SKILLS_PATH: &str = ".skills/";
pub const DEFAULT_GLOBAL_SKILLS_PATH: &str = "~/.skills/";

/// One directory to scan, tagged with the category it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRoot {
    pub path: PathBuf,
    pub origin: SkillOrigin,
}

impl SkillRoot {
    pub fn new(path: impl Into<PathBuf>, origin: SkillOrigin) -> Self {
        Self {
            path: path.into(),
            origin,
        }
    }
}

/// Resolves configured path lists against a working directory and home
#[derive(Debug, Clone)]
pub struct PathResolver {
    cwd: PathBuf,
    home: Option<PathBuf>,
}

impl PathResolver {
    pub fn new(cwd: impl Into<PathBuf>, home: Option<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            home,
        }
    }

    /// Resolver for the running process
    pub fn current() -> std::io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?, dirs::home_dir()))
    }

    /// Resolve both lists, expanding `$VAR` references from the process environment
    pub fn resolve(&self, project: &str, global: &str) -> Vec<SkillRoot> {
        self.resolve_with(project, global, |name| std::env::var(name).ok())
    }

    /// Resolve both lists with an explicit variable lookup
    pub fn resolve_with<F>(&self, project: &str, global: &str, lookup: F) -> Vec<SkillRoot>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut roots = Vec::new();
        for (list, origin) in [(project, SkillOrigin::Project), (global, SkillOrigin::Global)] {
            for entry in split_path_list(list) {
                roots.push(SkillRoot::new(self.expand(entry, &lookup), origin));
            }
        }
        roots
    }

    /// Expand variables and `~`, then anchor relative paths at the working directory.
    /// Unset variables are left as written.
    pub fn expand<F>(&self, raw: &str, lookup: &F) -> PathBuf
    where
        F: Fn(&str) -> Option<String>,
    {
        let expanded = shellexpand::full_with_context_no_errors(
            raw,
            || self.home.as_deref().and_then(Path::to_str),
            |name| lookup(name),
        );
        let path = PathBuf::from(expanded.into_owned());

        let absolute = if path.is_absolute() {
            path
        } else {
            self.cwd.join(path)
        };
        strip_cur_dir(&absolute)
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones
pub fn split_path_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|entry| !entry.is_empty())
}

fn strip_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}
