//! Top-level scaffolding flow
//!
//! Resolves the project name and type, looks up the handler, then runs
//! `create` followed by `post_setup` when creation succeeded.

use crate::error::{Error, Result};
use crate::project::{PostInstallationStep, ProjectDir, ProjectType};
use crate::prompt::{Choice, PromptService};
use crate::registry::HandlerRegistry;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Lifecycle of a single scaffolding run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Created,
    PostSetupInProgress,
    Done,
    /// The generator reported failure; post-setup never ran
    CreateFailed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Created => "created",
            Phase::PostSetupInProgress => "post-setup",
            Phase::Done => "done",
            Phase::CreateFailed => "create-failed",
        };
        f.write_str(name)
    }
}

/// Outcome of [`Orchestrator::init_project`]
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub project_name: String,
    pub project_type: ProjectType,
    pub project_dir: ProjectDir,
    pub phase: Phase,
    /// Advisory follow-ups, in installer run order
    pub steps: Vec<PostInstallationStep>,
}

impl ScaffoldReport {
    pub fn succeeded(&self) -> bool {
        self.phase == Phase::Done
    }
}

pub struct Orchestrator {
    registry: HandlerRegistry,
    prompts: Arc<dyn PromptService>,
    base_dir: PathBuf,
}

impl Orchestrator {
    pub fn new(
        registry: HandlerRegistry,
        prompts: Arc<dyn PromptService>,
        base_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            registry,
            prompts,
            base_dir: base_dir.into(),
        }
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    fn resolve_name(&self, project_name: Option<String>) -> Result<String> {
        match project_name.map(|n| n.trim().to_string()) {
            Some(name) if !name.is_empty() => Ok(name),
            _ => self.prompts.ask_non_empty_text("Enter project name"),
        }
    }

    fn resolve_type(&self) -> Result<ProjectType> {
        let choices: Vec<Choice> = ProjectType::ALL
            .iter()
            .map(|t| Choice::new(t.key(), t.display_name()))
            .collect();

        let key = self
            .prompts
            .ask_single_choice("Select project type", &choices)?;

        ProjectType::from_key(&key).ok_or_else(|| {
            Error::Prompt(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("unknown project type '{key}'"),
            ))
        })
    }

    /// Run the whole flow for one project.
    ///
    /// `Ok` with [`Phase::CreateFailed`] means the generator ran and failed;
    /// every other failure is an `Err` and nothing is rolled back.
    pub async fn init_project(&self, project_name: Option<String>) -> Result<ScaffoldReport> {
        let project_name = self.resolve_name(project_name)?;
        let project_type = self.resolve_type()?;

        let handler = self
            .registry
            .get_handler(project_type)
            .ok_or(Error::UnsupportedProjectType(project_type))?;

        let mut report = ScaffoldReport {
            project_dir: ProjectDir::new(self.base_dir.join(&project_name)),
            project_name,
            project_type,
            phase: Phase::Idle,
            steps: Vec::new(),
        };

        info!(
            project = %report.project_name,
            project_type = %project_type,
            "Initializing project"
        );

        if !handler.create(&self.base_dir, &report.project_name).await? {
            report.phase = Phase::CreateFailed;
            warn!(project = %report.project_name, "Project creation failed, skipping post-setup");
            return Ok(report);
        }
        report.phase = Phase::Created;
        debug!(phase = %report.phase, "Project created");

        report.phase = Phase::PostSetupInProgress;
        debug!(phase = %report.phase, path = %report.project_dir.root().display(), "Running post-setup");
        report.steps = handler.post_setup(&report.project_dir).await?;
        report.phase = Phase::Done;

        info!(steps = report.steps.len(), "Project initialized");
        Ok(report)
    }
}
