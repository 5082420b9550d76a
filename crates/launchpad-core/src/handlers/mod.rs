//! Built-in project handlers

pub mod nextjs;
pub mod typescript_cli;

pub use nextjs::NextJsProjectHandler;
pub use typescript_cli::TypescriptCliProjectHandler;
