//! TanStack Query installer

use crate::error::{InstallError, InstallErrorKind};
use crate::files;
use crate::installer::LibraryInstaller;
use crate::project::{PostInstallationStep, ProjectDir};
use crate::runtime::Toolchain;
use crate::templates::{TemplateId, TemplateStore};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

const NAME: &str = "tanstack-query";

pub struct QueryClientInstaller {
    toolchain: Toolchain,
    templates: Arc<dyn TemplateStore>,
}

impl QueryClientInstaller {
    pub fn new(toolchain: Toolchain, templates: Arc<dyn TemplateStore>) -> Self {
        Self {
            toolchain,
            templates,
        }
    }

    async fn run(&self, project: &ProjectDir) -> Result<(), InstallErrorKind> {
        info!(installer = NAME, "Installing TanStack Query...");
        self.toolchain
            .install_packages(project.root(), &["@tanstack/react-query"], false)
            .await?;

        let path = project.source_root().join("app").join("providers.tsx");
        if files::write_if_absent(&path, self.templates.get(TemplateId::QueryProviders)).await? {
            info!(installer = NAME, path = %path.display(), "Created query provider");
        } else {
            info!(installer = NAME, path = %path.display(), "Already exists. Skipping creation.");
        }
        Ok(())
    }
}

#[async_trait]
impl LibraryInstaller for QueryClientInstaller {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn install(&self, project: &ProjectDir) -> Result<(), InstallError> {
        self.run(project)
            .await
            .map_err(|kind| InstallError::new(NAME, kind))
    }

    // Wrapping the root layout in <Providers> is left to the user's layout code.
    fn post_installation_steps(&self) -> Vec<PostInstallationStep> {
        Vec::new()
    }
}
