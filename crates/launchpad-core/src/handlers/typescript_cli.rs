//! TypeScript CLI project handler
//!
//! There is no external generator for this project type: `create` writes the
//! package manifest itself and `post_setup` installs the toolchain.

use crate::error::{InstallError, InstallErrorKind, Result};
use crate::files;
use crate::handler::{ProjectHandler, Services};
use crate::project::{PostInstallationStep, ProjectDir, ProjectType};
use crate::templates::{render, TemplateId};
use async_trait::async_trait;
use std::path::Path;
use tracing::{error, info};

const NAME: &str = "typescript-cli";

const DEV_DEPENDENCIES: &[&str] = &["typescript", "ts-node", "@types/node"];
const DEPENDENCIES: &[&str] = &["commander"];

pub struct TypescriptCliProjectHandler {
    services: Services,
}

impl TypescriptCliProjectHandler {
    pub fn new(services: Services) -> Self {
        Self { services }
    }

    async fn scaffold(&self, project_dir: &Path, project_name: &str) -> Result<(), InstallErrorKind> {
        tokio::fs::create_dir(project_dir)
            .await
            .map_err(|e| InstallErrorKind::io(project_dir, e))?;

        let manifest = render(
            self.services.templates.get(TemplateId::CliPackageJson),
            &[("name", project_name)],
        )?;
        files::write_file(&project_dir.join("package.json"), &manifest).await?;
        info!("Created 'package.json'");
        Ok(())
    }

    async fn install_dependencies(&self, project: &ProjectDir) -> Result<(), InstallErrorKind> {
        info!("Installing dependencies...");
        let toolchain = &self.services.toolchain;
        toolchain
            .install_packages(project.root(), DEV_DEPENDENCIES, true)
            .await?;
        toolchain
            .install_packages(project.root(), DEPENDENCIES, false)
            .await?;
        info!("Dependencies installed successfully");
        Ok(())
    }

    async fn configure_typescript(&self, project: &ProjectDir) -> Result<(), InstallErrorKind> {
        info!("Configuring TypeScript...");
        self.services
            .toolchain
            .run_package(project.root(), &["tsc", "--init"])
            .await?;
        files::write_file(
            &project.join("tsconfig.json"),
            self.services.templates.get(TemplateId::CliTsConfig),
        )
        .await?;
        info!("Updated 'tsconfig.json' with custom configuration");
        Ok(())
    }

    async fn create_source_files(&self, project: &ProjectDir) -> Result<(), InstallErrorKind> {
        let name = project
            .root()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "cli".to_string());
        let index = render(
            self.services.templates.get(TemplateId::CliIndex),
            &[("name", &name)],
        )?;
        files::write_file(&project.join("src").join("index.ts"), &index).await?;
        info!("Created 'src/index.ts'");
        Ok(())
    }

    fn post_installation_steps() -> Vec<PostInstallationStep> {
        vec![
            PostInstallationStep::new("npm", &["run", "build"], "Build the TypeScript CLI"),
            PostInstallationStep::new("npm", &["run", "start"], "Start the TypeScript CLI"),
        ]
    }
}

#[async_trait]
impl ProjectHandler for TypescriptCliProjectHandler {
    fn project_type(&self) -> ProjectType {
        ProjectType::CommandLineTool
    }

    async fn create(&self, base_dir: &Path, project_name: &str) -> Result<bool> {
        info!(project = project_name, "Creating TypeScript CLI project");

        match self.scaffold(&base_dir.join(project_name), project_name).await {
            Ok(()) => {
                info!("TypeScript CLI project created successfully");
                Ok(true)
            }
            Err(err) => {
                error!(error = %err, "Failed to create TypeScript CLI project");
                Ok(false)
            }
        }
    }

    async fn post_setup(&self, project: &ProjectDir) -> Result<Vec<PostInstallationStep>> {
        info!(path = %project.root().display(), "Running post-setup for TypeScript CLI project");

        let setup = async {
            self.install_dependencies(project).await?;
            self.configure_typescript(project).await?;
            self.create_source_files(project).await
        };
        setup.await.map_err(|kind| InstallError::new(NAME, kind))?;

        info!("TypeScript CLI project setup completed successfully");
        Ok(Self::post_installation_steps())
    }
}
