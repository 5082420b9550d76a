//! Prisma ORM installer

use crate::error::{InstallError, InstallErrorKind};
use crate::files;
use crate::installer::LibraryInstaller;
use crate::project::{PostInstallationStep, ProjectDir};
use crate::runtime::Toolchain;
use crate::templates::{render, TemplateId, TemplateStore};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

const NAME: &str = "prisma";

/// Script registered as both the Prisma seed hook and `npm run seed`
pub const SEED_COMMAND: &str = "tsx prisma/seed.ts";

/// Generated client location from the client wrapper in `<src>/lib/`
const CLIENT_IMPORT_FROM_LIB: &str = "../app/generated/prisma";

pub struct PrismaInstaller {
    toolchain: Toolchain,
    templates: Arc<dyn TemplateStore>,
}

impl PrismaInstaller {
    pub fn new(toolchain: Toolchain, templates: Arc<dyn TemplateStore>) -> Self {
        Self {
            toolchain,
            templates,
        }
    }

    /// Client output directory, relative to `prisma/`
    pub fn output_path(project: &ProjectDir) -> &'static str {
        if project.has_src_dir() {
            "../src/app/generated/prisma"
        } else {
            "../app/generated/prisma"
        }
    }

    async fn install_dependencies(&self, project: &ProjectDir) -> Result<(), InstallErrorKind> {
        info!(installer = NAME, "Installing Prisma dependencies...");
        self.toolchain
            .install_packages(project.root(), &["prisma"], true)
            .await?;
        self.toolchain
            .install_packages(project.root(), &["@prisma/extension-accelerate"], false)
            .await?;
        info!(installer = NAME, "Prisma dependencies installed");
        Ok(())
    }

    async fn initialize(&self, project: &ProjectDir, output: &str) -> Result<(), InstallErrorKind> {
        info!(installer = NAME, "Initializing Prisma...");
        self.toolchain
            .run_package(project.root(), &["prisma", "init", "--output", output])
            .await
    }

    async fn append_schema(&self, project: &ProjectDir) -> Result<(), InstallErrorKind> {
        let path = project.join("prisma").join("schema.prisma");
        files::append_file(&path, self.templates.get(TemplateId::PrismaSchema)).await?;
        info!(installer = NAME, path = %path.display(), "Updated schema");
        Ok(())
    }

    async fn write_seeder(&self, project: &ProjectDir, output: &str) -> Result<(), InstallErrorKind> {
        let path = project.join("prisma").join("seed.ts");
        let content = render(
            self.templates.get(TemplateId::PrismaSeed),
            &[("client_import", output)],
        )?;
        files::write_file(&path, &content).await?;
        info!(installer = NAME, path = %path.display(), "Created seed script");
        Ok(())
    }

    async fn write_client(&self, project: &ProjectDir) -> Result<(), InstallErrorKind> {
        let path = project.source_root().join("lib").join("prisma.ts");
        let content = render(
            self.templates.get(TemplateId::PrismaClient),
            &[("client_import", CLIENT_IMPORT_FROM_LIB)],
        )?;
        files::write_file(&path, &content).await?;
        info!(installer = NAME, path = %path.display(), "Created Prisma client wrapper");
        Ok(())
    }

    /// Register the seed script, keeping every other manifest key
    async fn update_package_json(&self, project: &ProjectDir) -> Result<(), InstallErrorKind> {
        let path = project.join("package.json");
        files::update_json(&path, |pkg| {
            files::set_nested(pkg, "prisma", "seed", SEED_COMMAND);
            files::set_nested(pkg, "scripts", "seed", SEED_COMMAND);
        })
        .await?;
        info!(installer = NAME, "Updated 'package.json' with Prisma seed script");
        Ok(())
    }

    async fn run(&self, project: &ProjectDir) -> Result<(), InstallErrorKind> {
        let output = Self::output_path(project);
        self.install_dependencies(project).await?;
        self.initialize(project, output).await?;
        self.append_schema(project).await?;
        self.write_seeder(project, output).await?;
        self.write_client(project).await?;
        self.update_package_json(project).await
    }
}

#[async_trait]
impl LibraryInstaller for PrismaInstaller {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn install(&self, project: &ProjectDir) -> Result<(), InstallError> {
        info!(installer = NAME, "Setting up Prisma...");
        self.run(project)
            .await
            .map_err(|kind| InstallError::new(NAME, kind))?;
        info!(installer = NAME, "Prisma setup completed");
        Ok(())
    }

    fn post_installation_steps(&self) -> Vec<PostInstallationStep> {
        vec![
            PostInstallationStep::new(
                "npx",
                &["prisma", "migrate", "dev", "--name", "init"],
                "Run the initial migration to set up your database schema",
            ),
            PostInstallationStep::new(
                "npx",
                &["prisma", "db", "seed"],
                "Populate the database with seed data defined in 'prisma/seed.ts'",
            ),
        ]
    }
}
