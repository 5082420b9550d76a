//! CLI prompts using cliclack (Charm-style inline prompts)
//!
//! This module is optional and only available when the `tui` feature is enabled.

mod prompts;
mod service;

pub use prompts::{print_catalog, run, CreateArgs};
pub use service::CliclackPrompts;
