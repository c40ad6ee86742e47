//! Recursive SKILL.md discovery under a single root

use crate::errors::SkillError;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// File name that marks a skill directory
pub const SKILL_FILE_NAME: &str = "SKILL.md";

/// Find every `SKILL.md` below `root`, following symlinks, sorted by path.
///
/// A root that does not exist (or is not a directory) is returned as
/// [`SkillError::MissingRoot`] so the caller can record it and move on.
pub fn scan_root(root: &Path) -> Result<Vec<PathBuf>, SkillError> {
    if !root.is_dir() {
        return Err(SkillError::MissingRoot {
            path: root.to_path_buf(),
        });
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!("Skipping unreadable entry under {}: {}", root.display(), err);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && entry.file_name() == SKILL_FILE_NAME)
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    debug!("Found {} skill files under {}", files.len(), root.display());
    Ok(files)
}
