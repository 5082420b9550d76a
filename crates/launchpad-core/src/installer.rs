//! Library installer contract and the ordered installer chain

use crate::error::InstallError;
use crate::project::{LibraryOption, PostInstallationStep, ProjectDir};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::{debug, info};

/// A unit of optional, composable setup work
///
/// Installers are stateless between runs. Composite installers hold the
/// installer they wrap and run its full contract before their own.
#[async_trait]
pub trait LibraryInstaller: Send + Sync {
    /// Short identifier used in logs and errors
    fn name(&self) -> &'static str;

    /// Add dependencies and files to the project
    async fn install(&self, project: &ProjectDir) -> Result<(), InstallError>;

    /// Follow-up commands for the user.
    ///
    /// Pure: the result does not depend on whether `install` has run.
    fn post_installation_steps(&self) -> Vec<PostInstallationStep>;
}

/// Ordered mapping from library option to the installers that implement it
#[derive(Default, Clone)]
pub struct InstallerChain {
    installers: IndexMap<LibraryOption, Vec<Arc<dyn LibraryInstaller>>>,
}

impl InstallerChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the installers for `option`, replacing any previous list
    pub fn register(&mut self, option: LibraryOption, installers: Vec<Arc<dyn LibraryInstaller>>) {
        self.installers.insert(option, installers);
    }

    /// Installers for `option` in registration order (empty if none)
    pub fn installers_for(&self, option: LibraryOption) -> &[Arc<dyn LibraryInstaller>] {
        self.installers
            .get(&option)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn options(&self) -> impl Iterator<Item = LibraryOption> + '_ {
        self.installers.keys().copied()
    }

    /// Run the installers for each selected option, in selection order.
    ///
    /// Stops at the first failure. Steps of every installer that completed
    /// are pushed to `steps`, so the caller still sees them on error.
    pub async fn run(
        &self,
        selections: &[LibraryOption],
        project: &ProjectDir,
        steps: &mut Vec<PostInstallationStep>,
    ) -> Result<(), InstallError> {
        for option in selections {
            let installers = self.installers_for(*option);
            if installers.is_empty() {
                debug!(option = option.key(), "no installers registered");
                continue;
            }

            for installer in installers {
                info!(installer = installer.name(), option = option.key(), "Running installer");
                installer.install(project).await?;
                steps.extend(installer.post_installation_steps());
            }
        }
        Ok(())
    }
}
