//! Launchpad Core - Project handlers and library installers for dev-launchpad
//!
//! This library scaffolds a new project by running the project type's own
//! generator and then layering optional libraries (ORM, auth, data fetching)
//! on top of it.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Capabilities** - Command runner, prompt service and template store traits
//! - **Layer 2: Handlers and installers** - One [`ProjectHandler`] per [`ProjectType`],
//!   composed of [`LibraryInstaller`]s selected by the user
//! - **Layer 3: Orchestration** - [`HandlerRegistry`] lookup and the [`Orchestrator`] flow
//! - **Layer 4: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompts and the interactive flow
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use launchpad_core::{HandlerRegistry, Orchestrator, Services};
//!
//! let registry = HandlerRegistry::with_builtin_handlers(&services);
//! let orchestrator = Orchestrator::new(registry, services.prompts.clone(), base_dir);
//! let report = orchestrator.init_project(Some("demo".into())).await?;
//! for step in &report.steps {
//!     println!("{step}");
//! }
//! ```

pub mod config;
pub mod error;
pub mod files;
pub mod handler;
pub mod handlers;
pub mod installer;
pub mod orchestrator;
pub mod project;
pub mod prompt;
pub mod registry;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(test)]
mod testing;

// Re-export main types for convenience
pub use config::LaunchpadConfig;
pub use error::{Error, InstallError, InstallErrorKind, LaunchError, Result};
pub use handler::{ProjectHandler, Services};
pub use installer::{InstallerChain, LibraryInstaller};
pub use orchestrator::{Orchestrator, Phase, ScaffoldReport};
pub use project::{LibraryOption, PostInstallationStep, ProjectDir, ProjectType};
pub use prompt::{Choice, PromptService};
pub use registry::HandlerRegistry;
pub use runtime::{CommandRunner, ProcessRunner, RuntimeInfo, Toolchain};
pub use templates::{BuiltinTemplates, TemplateId, TemplateStore};

#[cfg(feature = "tui")]
pub use tui::run;
