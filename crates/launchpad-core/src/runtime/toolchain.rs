//! Package manager and package runner invocations used by installers

use super::runner::{command_line, CommandOptions, CommandRunner};
use crate::config::LaunchpadConfig;
use crate::error::InstallErrorKind;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Configured package tooling bound to a command runner
#[derive(Clone)]
pub struct Toolchain {
    runner: Arc<dyn CommandRunner>,
    config: Arc<LaunchpadConfig>,
}

impl Toolchain {
    pub fn new(runner: Arc<dyn CommandRunner>, config: Arc<LaunchpadConfig>) -> Self {
        Self { runner, config }
    }

    pub fn config(&self) -> &LaunchpadConfig {
        &self.config
    }

    pub fn runner(&self) -> &dyn CommandRunner {
        self.runner.as_ref()
    }

    /// `npm install <packages> [--save-dev]`, output suppressed
    pub async fn install_packages(
        &self,
        dir: &Path,
        packages: &[&str],
        dev: bool,
    ) -> Result<(), InstallErrorKind> {
        let mut args = Vec::with_capacity(packages.len() + 2);
        args.push("install");
        args.extend_from_slice(packages);
        if dev {
            args.push("--save-dev");
        }
        self.run_silent(dir, &self.config.package_manager, &args).await
    }

    /// `npx <args>`, output suppressed
    pub async fn run_package(&self, dir: &Path, args: &[&str]) -> Result<(), InstallErrorKind> {
        self.run_silent(dir, &self.config.package_runner, args).await
    }

    async fn run_silent(
        &self,
        dir: &Path,
        command: &str,
        args: &[&str],
    ) -> Result<(), InstallErrorKind> {
        let options = CommandOptions::silent().in_dir(dir);
        let code = self.runner.execute(command, args, &options).await?;
        debug!(command = %command_line(command, args), code, "command finished");

        if code == 0 {
            Ok(())
        } else {
            Err(InstallErrorKind::CommandFailed {
                command: command_line(command, args),
                code,
            })
        }
    }
}
