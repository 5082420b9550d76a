//! dev-launchpad - Scaffold a new project with best practices

use anyhow::Result;
use clap::{Parser, Subcommand};
use launchpad_core::tui::{self, CreateArgs};
use launchpad_core::LaunchpadConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dev-launchpad")]
#[command(about = "CLI that scaffolds a new project with best practices")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Project name (prompted when omitted)
    pub project_name: Option<String>,

    /// Path to a launchpad.yaml configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project
    Create(CliCreateArgs),
    /// List the supported project types and libraries
    List,
}

#[derive(Parser, Debug, Default)]
pub struct CliCreateArgs {
    /// Project name (prompted when omitted)
    pub project_name: Option<String>,

    /// Directory to create the project in
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Skip the node/npm/npx version check
    #[arg(long = "skip-tool-check")]
    pub skip_tool_check: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            project_name: args.project_name,
            base_dir: args.directory,
            skip_tool_check: args.skip_tool_check,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .compact()
        .with_writer(std::io::stderr)
        .init();
}

async fn create(config_path: Option<PathBuf>, args: CreateArgs) -> Result<()> {
    let config = LaunchpadConfig::load(config_path.as_deref())?;
    tui::run(config, args).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    init_tracing();

    let args = Args::parse();

    let result = match args.command {
        Some(Command::List) => {
            tui::print_catalog();
            Ok(())
        }
        Some(Command::Create(create_args)) => create(args.config, create_args.into()).await,
        None => {
            // No subcommand provided, default to create behavior (interactive mode)
            let create_args = CliCreateArgs {
                project_name: args.project_name,
                ..Default::default()
            };
            create(args.config, create_args.into()).await
        }
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(err) = result {
        tracing::error!("Failed to initialize project: {err:#}");
        std::process::exit(1);
    }
}
