//! NextAuth scaffold installer

use crate::error::{InstallError, InstallErrorKind};
use crate::files;
use crate::installer::LibraryInstaller;
use crate::project::{PostInstallationStep, ProjectDir};
use crate::runtime::Toolchain;
use crate::templates::{render, TemplateId, TemplateStore};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

const NAME: &str = "next-auth";

/// `<src>/auth.ts` as seen from the route handler
const AUTH_IMPORT_FROM_ROUTE: &str = "../../../../auth";

pub struct NextAuthInstaller {
    toolchain: Toolchain,
    templates: Arc<dyn TemplateStore>,
}

impl NextAuthInstaller {
    pub fn new(toolchain: Toolchain, templates: Arc<dyn TemplateStore>) -> Self {
        Self {
            toolchain,
            templates,
        }
    }

    async fn write_scaffold(&self, path: &Path, content: &str) -> Result<(), InstallErrorKind> {
        if files::write_if_absent(path, content).await? {
            info!(installer = NAME, path = %path.display(), "Created auth file");
        } else {
            info!(installer = NAME, path = %path.display(), "Already exists. Skipping creation.");
        }
        Ok(())
    }

    async fn run(&self, project: &ProjectDir) -> Result<(), InstallErrorKind> {
        info!(installer = NAME, "Installing NextAuth...");
        self.toolchain
            .install_packages(project.root(), &["next-auth@beta"], false)
            .await?;

        let source_root = project.source_root();
        self.write_scaffold(
            &source_root.join("auth.ts"),
            self.templates.get(TemplateId::AuthConfig),
        )
        .await?;

        let route = render(
            self.templates.get(TemplateId::AuthRoute),
            &[("auth_import", AUTH_IMPORT_FROM_ROUTE)],
        )?;
        let route_path = source_root
            .join("app")
            .join("api")
            .join("auth")
            .join("[...nextauth]")
            .join("route.ts");
        self.write_scaffold(&route_path, &route).await
    }
}

#[async_trait]
impl LibraryInstaller for NextAuthInstaller {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn install(&self, project: &ProjectDir) -> Result<(), InstallError> {
        self.run(project)
            .await
            .map_err(|kind| InstallError::new(NAME, kind))?;
        info!(installer = NAME, "NextAuth setup completed");
        Ok(())
    }

    fn post_installation_steps(&self) -> Vec<PostInstallationStep> {
        vec![PostInstallationStep::new(
            "npx",
            &["auth", "secret"],
            "Generate AUTH_SECRET in '.env.local'",
        )]
    }
}
