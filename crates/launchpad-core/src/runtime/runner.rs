//! External command execution
//!
//! Every generator and package-manager invocation goes through the
//! [`CommandRunner`] trait so handlers and installers can be exercised without
//! spawning real processes.

use crate::error::LaunchError;
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;
use tracing::debug;

/// How the child process's standard streams are wired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IoMode {
    /// Share the invoking terminal (interactive generators)
    #[default]
    Inherit,
    /// Discard all output (dependency installs)
    Silent,
}

/// Options for a single command execution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOptions {
    pub io: IoMode,
    /// Working directory for the child; the caller's directory when `None`
    pub current_dir: Option<PathBuf>,
}

impl CommandOptions {
    pub fn inherit() -> Self {
        Self {
            io: IoMode::Inherit,
            current_dir: None,
        }
    }

    pub fn silent() -> Self {
        Self {
            io: IoMode::Silent,
            current_dir: None,
        }
    }

    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }
}

/// Runs an external program and reports its exit code
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Returns the exit code, or `LaunchError` if the program could not start.
    ///
    /// A process killed by a signal reports `-1`.
    async fn execute(
        &self,
        command: &str,
        args: &[&str],
        options: &CommandOptions,
    ) -> Result<i32, LaunchError>;
}

/// [`CommandRunner`] backed by real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn execute(
        &self,
        command: &str,
        args: &[&str],
        options: &CommandOptions,
    ) -> Result<i32, LaunchError> {
        debug!(command, ?args, ?options, "spawning");

        let mut cmd = TokioCommand::new(command);
        cmd.args(args);

        if let Some(dir) = &options.current_dir {
            cmd.current_dir(dir);
        }

        match options.io {
            IoMode::Inherit => {
                cmd.stdin(Stdio::inherit())
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit());
            }
            IoMode::Silent => {
                cmd.stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null());
            }
        }

        let status = cmd.status().await.map_err(|source| LaunchError {
            command: command.to_string(),
            source,
        })?;

        Ok(status.code().unwrap_or(-1))
    }
}

/// Join a command and its arguments for display
pub fn command_line(command: &str, args: &[&str]) -> String {
    std::iter::once(command)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
