//! Charm-style scaffolding flow using cliclack

use super::service::CliclackPrompts;
use crate::config::LaunchpadConfig;
use crate::handler::Services;
use crate::orchestrator::{Orchestrator, Phase, ScaffoldReport};
use crate::project::{PostInstallationStep, ProjectType};
use crate::registry::HandlerRegistry;
use crate::runtime::{check_toolchain, missing_tools, ProcessRunner, Toolchain};
use crate::templates::BuiltinTemplates;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the create flow
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name; prompted when absent or blank
    pub project_name: Option<String>,

    /// Directory the project is created in (defaults to the current directory)
    pub base_dir: Option<PathBuf>,

    /// Skip the node/npm/npx version probe
    pub skip_tool_check: bool,
}

/// Run the interactive create flow
pub async fn run(config: LaunchpadConfig, args: CreateArgs) -> Result<ScaffoldReport> {
    cliclack::intro("dev-launchpad")?;

    if args.skip_tool_check {
        cliclack::log::info("Skipping toolchain check")?;
    } else {
        check_tools(&config)?;
    }

    let base_dir = match args.base_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Could not resolve the current directory")?,
    };

    let services = Services {
        toolchain: Toolchain::new(Arc::new(ProcessRunner), Arc::new(config)),
        prompts: Arc::new(CliclackPrompts),
        templates: Arc::new(BuiltinTemplates),
    };
    let registry = HandlerRegistry::with_builtin_handlers(&services);
    let orchestrator = Orchestrator::new(registry, services.prompts.clone(), base_dir);

    let report = orchestrator.init_project(args.project_name).await?;

    if report.phase == Phase::CreateFailed {
        anyhow::bail!(
            "{} generator failed for '{}'",
            report.project_type,
            report.project_name
        );
    }

    cliclack::log::success(format!(
        "Created {} project in {}",
        report.project_type,
        report.project_dir.root().display()
    ))?;

    print_next_steps(&report.project_name, &report.steps)?;

    Ok(report)
}

fn check_tools(config: &LaunchpadConfig) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking toolchain...");

    let tools = check_toolchain(config);
    let summary: Vec<String> = tools
        .iter()
        .map(|t| match (&t.version, t.available) {
            (Some(version), true) => format!("{} ({})", t.name, version),
            _ => format!("{} (not installed)", t.name),
        })
        .collect();
    spinner.stop(format!("Detected tools: {}", summary.join(", ")));

    if let Some(missing) = missing_tools(&tools) {
        cliclack::log::warning(missing)?;
    }
    Ok(())
}

fn print_next_steps(project_name: &str, steps: &[PostInstallationStep]) -> Result<()> {
    println!();
    println!("  {}", "Next steps".bold());
    println!();
    println!("  {}.  cd {}", 1, project_name.cyan());

    for (i, step) in steps.iter().enumerate() {
        println!(
            "  {}.  {} {}",
            i + 2,
            step.command_line().cyan(),
            format!("→ {}", step.description).dimmed()
        );
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}

/// Print the supported project types and their library menus
pub fn print_catalog() {
    println!();
    for project_type in ProjectType::ALL {
        println!(
            "  {} {} {}",
            "●".blue(),
            project_type.display_name().bold(),
            format!("({})", project_type.key()).dimmed()
        );
        for option in project_type.library_options() {
            println!(
                "    {} {} {}",
                "◇".dimmed(),
                option.key(),
                format!("- {}", option.hint()).dimmed()
            );
        }
    }
    println!();
}
