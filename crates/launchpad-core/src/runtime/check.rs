//! Toolchain detection for Node.js and the configured package tooling

use crate::config::LaunchpadConfig;
use std::process::Command;

/// Tool detection result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    pub name: String,
    pub version: Option<String>,
    pub available: bool,
}

/// Probe `<binary> --version`
pub fn check_tool(binary: &str) -> RuntimeInfo {
    let output = Command::new(binary).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name: binary.to_string(),
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name: binary.to_string(),
            version: None,
            available: false,
        },
    }
}

/// Check Node.js plus the configured package manager and runner.
///
/// Missing tools are reported, not fatal: the commands that need them fail
/// with a launch error later on.
pub fn check_toolchain(config: &LaunchpadConfig) -> Vec<RuntimeInfo> {
    let mut binaries = vec!["node", config.package_manager.as_str()];
    if config.package_runner != config.package_manager {
        binaries.push(config.package_runner.as_str());
    }
    binaries.into_iter().map(check_tool).collect()
}

/// Human-readable list of unavailable tools, if any
pub fn missing_tools(results: &[RuntimeInfo]) -> Option<String> {
    let missing: Vec<&str> = results
        .iter()
        .filter(|r| !r.available)
        .map(|r| r.name.as_str())
        .collect();

    if missing.is_empty() {
        None
    } else {
        Some(format!(
            "Not found on PATH: {} (install Node.js from https://nodejs.org)",
            missing.join(", ")
        ))
    }
}
