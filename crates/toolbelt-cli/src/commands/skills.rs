//! Skills command - discover SKILL.md files and serve the skills tool

use crate::commands::{Command, ServeArgs};
use crate::error::CliResult;
use std::fmt::Write;
use std::sync::Arc;
use toolbelt_mcp::{serve, SkillsServer};
use toolbelt_skills::{discover, DiscoveryReport, PathResolver, SkillTool};
use tracing::info;

pub struct SkillsCommand {
    project_paths: String,
    global_paths: String,
    tool_prefix: String,
    list: bool,
    serve: ServeArgs,
}

impl SkillsCommand {
    pub fn new(project_paths: String, global_paths: String, serve: ServeArgs) -> Self {
        Self {
            project_paths,
            global_paths,
            tool_prefix: String::new(),
            list: false,
            serve,
        }
    }

    pub fn with_tool_prefix(mut self, prefix: String) -> Self {
        self.tool_prefix = prefix;
        self
    }

    /// Print the discovery report instead of serving
    pub fn with_list(mut self, list: bool) -> Self {
        self.list = list;
        self
    }

    fn discover(&self) -> CliResult<DiscoveryReport> {
        let resolver = PathResolver::current()?;
        let roots = resolver.resolve(&self.project_paths, &self.global_paths);
        for root in &roots {
            info!("Skills root ({}): {}", root.origin, root.path.display());
        }
        Ok(discover(&roots))
    }
}

#[async_trait::async_trait]
impl Command for SkillsCommand {
    async fn execute(&self) -> CliResult<()> {
        let report = self.discover()?;

        if self.list {
            print!("{}", render_report(&report));
            return Ok(());
        }

        let transport = self.serve.default_transport()?;
        let tool = SkillTool::with_prefix(Arc::new(report.into_registry()), &self.tool_prefix);
        info!("Serving {} skills as tool '{}'", tool.registry().len(), tool.name());

        serve(SkillsServer::new(tool), transport).await?;
        Ok(())
    }
}

/// Human-readable summary of a discovery run
pub fn render_report(report: &DiscoveryReport) -> String {
    let mut out = String::new();

    if report.skills.is_empty() {
        out.push_str("No skills found.\n");
    } else {
        let _ = writeln!(out, "Skills ({}):", report.skills.len());
        for skill in &report.skills {
            let _ = writeln!(
                out,
                "  {:<24} {:<32} {:<8} {}",
                skill.name,
                skill.tool_identifier,
                skill.origin,
                skill.base_path.display()
            );
        }
    }

    if !report.failures.is_empty() {
        let _ = writeln!(out, "\nSkipped ({}):", report.failures.len());
        for failure in &report.failures {
            let _ = writeln!(out, "  {}", failure);
        }
    }

    if !report.duplicates.is_empty() {
        let _ = writeln!(out, "\nDuplicate identifiers ({}):", report.duplicates.len());
        for duplicate in &report.duplicates {
            let _ = writeln!(out, "  {}", duplicate);
        }
    }

    if !report.missing_roots.is_empty() {
        let _ = writeln!(out, "\nMissing directories:");
        for root in &report.missing_roots {
            let _ = writeln!(out, "  {}", root.display());
        }
    }

    out
}
