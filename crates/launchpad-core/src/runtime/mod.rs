//! Process execution and toolchain detection
//!
//! This module provides:
//! - The command runner capability (real processes or test doubles)
//! - Package manager/runner helpers used by installers
//! - Toolchain probing for the preflight check

pub mod check;
pub mod runner;
pub mod toolchain;

pub use check::{check_tool, check_toolchain, missing_tools, RuntimeInfo};
pub use runner::{command_line, CommandOptions, CommandRunner, IoMode, ProcessRunner};
pub use toolchain::Toolchain;
