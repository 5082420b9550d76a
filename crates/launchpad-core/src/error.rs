//! Error types for launchpad-core

use crate::project::ProjectType;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using launchpad-core's Error type
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level error surfaced to the orchestrator
#[derive(Error, Debug)]
pub enum Error {
    /// An external command could not be started at all
    #[error(transparent)]
    Launch(#[from] LaunchError),

    /// A library installer (or a handler's own setup step) failed
    #[error(transparent)]
    Install(#[from] InstallError),

    /// No handler is registered for the selected project type
    #[error("No handler registered for project type: {0}")]
    UnsupportedProjectType(ProjectType),

    /// The prompt was aborted or the terminal could not be read
    #[error("Prompt failed: {0}")]
    Prompt(#[source] io::Error),

    /// The configuration file could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// The external command could not be spawned (missing binary, permissions)
#[derive(Error, Debug)]
#[error("Could not launch `{command}`: {source}")]
pub struct LaunchError {
    pub command: String,
    #[source]
    pub source: io::Error,
}

/// Failure of a single installer, wrapping the first underlying cause
#[derive(Error, Debug)]
#[error("{installer} setup failed: {kind}")]
pub struct InstallError {
    /// Name of the installer (or handler step) that failed
    pub installer: &'static str,
    #[source]
    pub kind: InstallErrorKind,
}

impl InstallError {
    pub fn new(installer: &'static str, kind: InstallErrorKind) -> Self {
        Self { installer, kind }
    }
}

/// What went wrong inside an installer
#[derive(Error, Debug)]
pub enum InstallErrorKind {
    /// A dependency or tool command ran but exited non-zero
    #[error("`{command}` exited with status {code}")]
    CommandFailed { command: String, code: i32 },

    /// A dependency or tool command could not be started
    #[error(transparent)]
    Launch(#[from] LaunchError),

    /// Reading or writing a project file failed
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The package manifest could not be parsed
    #[error("invalid package manifest {}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A template could not be rendered
    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl InstallErrorKind {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Template rendering failure
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template variable `{0}` was not provided")]
    MissingVariable(String),
}

/// Configuration loading failure
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
