//! Docker Compose database installer
//!
//! Decorates another installer (Prisma in the built-in wiring): the wrapped
//! installer runs its full contract first, then the compose file and the
//! database connection variable are layered on top.

use crate::error::{InstallError, InstallErrorKind};
use crate::files;
use crate::installer::LibraryInstaller;
use crate::project::{PostInstallationStep, ProjectDir};
use crate::templates::{TemplateId, TemplateStore};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

const NAME: &str = "docker";

pub const COMPOSE_FILE: &str = "docker-compose.yml";
pub const ENV_FILE: &str = ".env";
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

pub struct ContainerInstaller {
    inner: Arc<dyn LibraryInstaller>,
    templates: Arc<dyn TemplateStore>,
    database_url: String,
}

impl ContainerInstaller {
    pub fn new(
        inner: Arc<dyn LibraryInstaller>,
        templates: Arc<dyn TemplateStore>,
        database_url: impl Into<String>,
    ) -> Self {
        Self {
            inner,
            templates,
            database_url: database_url.into(),
        }
    }

    async fn setup_compose(&self, project: &ProjectDir) -> Result<(), InstallErrorKind> {
        let path = project.join(COMPOSE_FILE);
        let written =
            files::write_if_absent(&path, self.templates.get(TemplateId::DockerCompose)).await?;
        if written {
            info!(installer = NAME, "Created '{}'", COMPOSE_FILE);
        } else {
            info!(installer = NAME, "'{}' already exists. Skipping creation.", COMPOSE_FILE);
        }
        Ok(())
    }

    async fn update_env(&self, project: &ProjectDir) -> Result<(), InstallErrorKind> {
        files::upsert_env_var(&project.join(ENV_FILE), DATABASE_URL_VAR, &self.database_url)
            .await?;
        info!(installer = NAME, "Set {} in '{}'", DATABASE_URL_VAR, ENV_FILE);
        Ok(())
    }
}

#[async_trait]
impl LibraryInstaller for ContainerInstaller {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn install(&self, project: &ProjectDir) -> Result<(), InstallError> {
        self.inner.install(project).await?;

        info!(installer = NAME, "Setting up Docker");
        self.setup_compose(project)
            .await
            .map_err(|kind| InstallError::new(NAME, kind))?;
        self.update_env(project)
            .await
            .map_err(|kind| InstallError::new(NAME, kind))?;
        info!(installer = NAME, "Docker setup completed");
        Ok(())
    }

    fn post_installation_steps(&self) -> Vec<PostInstallationStep> {
        let mut steps = self.inner.post_installation_steps();
        steps.push(PostInstallationStep::new(
            "docker",
            &["compose", "up", "-d"],
            "Start the PostgreSQL container using Docker Compose",
        ));
        steps
    }
}
