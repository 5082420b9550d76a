//! Project handler contract
//!
//! A handler owns the whole lifecycle of one project type:
//! `create` generates the project, `post_setup` layers optional libraries
//! on top of it. Handlers are built once with the shared [`Services`] and
//! are otherwise immutable, so the project location is always passed in.

use crate::error::Result;
use crate::project::{PostInstallationStep, ProjectDir, ProjectType};
use crate::prompt::PromptService;
use crate::runtime::Toolchain;
use crate::templates::TemplateStore;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

/// External collaborators shared by handlers and their installers
#[derive(Clone)]
pub struct Services {
    pub toolchain: Toolchain,
    pub prompts: Arc<dyn PromptService>,
    pub templates: Arc<dyn TemplateStore>,
}

#[async_trait]
pub trait ProjectHandler: Send + Sync {
    /// Registry key
    fn project_type(&self) -> ProjectType;

    /// Generate `project_name` inside `base_dir`.
    ///
    /// `Ok(false)` means the generator ran and reported failure; a generator
    /// that could not be started is an `Err`.
    async fn create(&self, base_dir: &Path, project_name: &str) -> Result<bool>;

    /// Second phase, only run after a successful `create`.
    ///
    /// Returns the advisory steps collected from every installer that ran.
    async fn post_setup(&self, _project: &ProjectDir) -> Result<Vec<PostInstallationStep>> {
        Ok(Vec::new())
    }
}
