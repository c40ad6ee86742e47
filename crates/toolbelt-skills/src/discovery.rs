//! One-shot startup discovery across all search roots

use crate::errors::{DuplicateIdentifier, SkillError};
use crate::models::Skill;
use crate::parser::parse_skill_file;
use crate::paths::SkillRoot;
use crate::registry::{find_duplicate_identifiers, SkillRegistry};
use crate::scanner::scan_root;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Everything discovery found, including what it had to skip
#[derive(Debug, Default)]
pub struct DiscoveryReport {
    /// Valid skills in discovery order (roots in order, files sorted)
    pub skills: Vec<Skill>,
    /// Files that could not be read or failed validation
    pub failures: Vec<SkillError>,
    /// Configured roots that do not exist
    pub missing_roots: Vec<PathBuf>,
    pub duplicates: Vec<DuplicateIdentifier>,
}

impl DiscoveryReport {
    /// Build the immutable registry from the valid skills
    pub fn into_registry(self) -> SkillRegistry {
        SkillRegistry::new(self.skills)
    }
}

/// Scan and parse every root. Never fails; problems land in the report.
pub fn discover(roots: &[SkillRoot]) -> DiscoveryReport {
    let mut report = DiscoveryReport::default();

    for root in roots {
        let files = match scan_root(&root.path) {
            Ok(files) => files,
            Err(SkillError::MissingRoot { path }) => {
                debug!("Skills directory {} does not exist, skipping", path.display());
                report.missing_roots.push(path);
                continue;
            }
            Err(e) => {
                warn!("Failed to scan {}: {}", root.path.display(), e);
                report.failures.push(e);
                continue;
            }
        };

        debug!(
            "Scanning {} {} skill files in {}",
            files.len(),
            root.origin,
            root.path.display()
        );

        for path in files {
            match parse_skill_file(&path, root) {
                Ok(skill) => {
                    debug!("Loaded skill '{}' from {}", skill.name, path.display());
                    report.skills.push(skill);
                }
                Err(e) => {
                    warn!("Failed to parse skill at {}: {}", path.display(), e);
                    report.failures.push(e);
                }
            }
        }
    }

    report.duplicates = find_duplicate_identifiers(&report.skills);
    for duplicate in &report.duplicates {
        warn!("{}", duplicate);
    }

    info!(
        "Discovered {} skills ({} failed, {} missing roots)",
        report.skills.len(),
        report.failures.len(),
        report.missing_roots.len()
    );
    report
}
