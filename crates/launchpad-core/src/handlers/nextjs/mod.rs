//! Next.js project handler

pub mod libraries;

use crate::error::{Error, InstallError, Result};
use crate::handler::{ProjectHandler, Services};
use crate::installer::{InstallerChain, LibraryInstaller};
use crate::project::{BaseDependency, LibraryOption, PostInstallationStep, ProjectDir, ProjectType};
use crate::prompt::Choice;
use crate::runtime::CommandOptions;
use async_trait::async_trait;
use libraries::{ContainerInstaller, NextAuthInstaller, PrismaInstaller, QueryClientInstaller};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

const BASE_DEPENDENCIES: &str = "base-dependencies";

pub struct NextJsProjectHandler {
    services: Services,
    installers: InstallerChain,
}

impl NextJsProjectHandler {
    /// Build the handler with the built-in installer wiring
    pub fn new(services: Services) -> Self {
        let installers = Self::register_installers(&services);
        Self::with_installers(services, installers)
    }

    /// Build the handler with a custom installer chain
    pub fn with_installers(services: Services, installers: InstallerChain) -> Self {
        Self {
            services,
            installers,
        }
    }

    fn register_installers(services: &Services) -> InstallerChain {
        let prisma: Arc<dyn LibraryInstaller> = Arc::new(PrismaInstaller::new(
            services.toolchain.clone(),
            services.templates.clone(),
        ));
        let docker = Arc::new(ContainerInstaller::new(
            prisma.clone(),
            services.templates.clone(),
            services.toolchain.config().database_url.clone(),
        ));
        let auth = Arc::new(NextAuthInstaller::new(
            services.toolchain.clone(),
            services.templates.clone(),
        ));
        let query = Arc::new(QueryClientInstaller::new(
            services.toolchain.clone(),
            services.templates.clone(),
        ));

        let mut chain = InstallerChain::new();
        chain.register(LibraryOption::Orm, vec![prisma]);
        chain.register(LibraryOption::OrmContainer, vec![docker]);
        chain.register(LibraryOption::AuthScaffold, vec![auth]);
        chain.register(LibraryOption::QueryClient, vec![query]);
        chain
    }

    pub fn installers(&self) -> &InstallerChain {
        &self.installers
    }

    fn ask_libraries(&self) -> Result<Vec<LibraryOption>> {
        let choices: Vec<Choice> = ProjectType::WebApp
            .library_options()
            .iter()
            .map(|o| Choice::new(o.key(), o.display_name()).with_hint(o.hint()))
            .collect();

        let selected = self
            .services
            .prompts
            .ask_multi_choice("Select libraries to scaffold:", &choices, false)?;

        Ok(selected
            .iter()
            .filter_map(|key| {
                let option = LibraryOption::from_key(key);
                if option.is_none() {
                    warn!(key = %key, "Ignoring unknown library option");
                }
                option
            })
            .collect())
    }

    /// Shared dependencies required by at least one selection, first-seen order
    fn base_dependencies(selections: &[LibraryOption]) -> Vec<BaseDependency> {
        let mut deps: Vec<BaseDependency> = Vec::new();
        for dep in selections.iter().flat_map(|o| o.base_dependencies()) {
            if !deps.contains(dep) {
                deps.push(*dep);
            }
        }
        deps
    }

    async fn install_base_dependencies(
        &self,
        project: &ProjectDir,
        selections: &[LibraryOption],
    ) -> Result<(), InstallError> {
        for dep in Self::base_dependencies(selections) {
            info!(package = dep.package, "Installing base dependency...");
            self.services
                .toolchain
                .install_packages(project.root(), &[dep.package], dep.dev)
                .await
                .map_err(|kind| {
                    error!(package = dep.package, "Failed to install base dependency");
                    InstallError::new(BASE_DEPENDENCIES, kind)
                })?;
            info!(package = dep.package, "Installed base dependency");
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectHandler for NextJsProjectHandler {
    fn project_type(&self) -> ProjectType {
        ProjectType::WebApp
    }

    async fn create(&self, base_dir: &Path, project_name: &str) -> Result<bool> {
        let config = self.services.toolchain.config();
        let mut args: Vec<&str> = vec![config.nextjs.generator.as_str(), project_name];
        args.extend(config.nextjs.flags.iter().map(String::as_str));

        info!(project = project_name, "Creating Next.js project");

        let code = self
            .services
            .toolchain
            .runner()
            .execute(
                &config.package_runner,
                &args,
                &CommandOptions::inherit().in_dir(base_dir),
            )
            .await?;

        if code != 0 {
            error!(code, "Failed to create Next.js project");
            return Ok(false);
        }

        info!("Next.js project created successfully");
        Ok(true)
    }

    async fn post_setup(&self, project: &ProjectDir) -> Result<Vec<PostInstallationStep>> {
        info!(path = %project.root().display(), "Running post-setup for Next.js project");

        let selections = self.ask_libraries()?;
        if selections.is_empty() {
            info!("No libraries selected");
            return Ok(Vec::new());
        }

        self.install_base_dependencies(project, &selections).await?;

        let mut steps = Vec::new();
        if let Err(err) = self.installers.run(&selections, project, &mut steps).await {
            if !steps.is_empty() {
                warn!(
                    completed_steps = ?steps.iter().map(|s| s.command_line()).collect::<Vec<_>>(),
                    "Installers before the failure completed; their follow-up steps still apply"
                );
            }
            return Err(Error::Install(err));
        }

        Ok(steps)
    }
}
