//! Main CLI application structure

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use super::command::{Command, UnknownCommand};
use super::output::{Output, OutputFormat};
use super::project_cmd;
use crate::domain::{Clock, SystemClock};
use crate::storage::{Profile, Project};

/// Exit code for an unrecognized command
const EXIT_USAGE: u8 = 2;

#[derive(Parser)]
#[command(name = "projkit")]
#[command(author, version, about = "Status, build and deploy for directory-structured projects")]
pub struct Cli {
    /// Project root (defaults to the current directory)
    #[arg(long, env = "PROJKIT_ROOT")]
    pub root: Option<PathBuf>,

    /// Built-in project profile
    #[arg(long, value_enum, default_value = "site")]
    pub profile: Profile,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Command to run: status, init, structure, build, deploy (default: status)
    pub command: Option<String>,
}

/// Main entry point for the CLI
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    execute(cli, &SystemClock)
}

/// Runs a parsed command line against `clock`
pub fn execute(cli: Cli, clock: &dyn Clock) -> Result<ExitCode> {
    let output = Output::new(cli.format, cli.verbose);

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };
    output.verbose_ctx("root", &format!("Opening project at: {}", root.display()));

    // A name no project knows is a usage error even when the root is unusable
    if let Err(unknown) = Command::resolve(cli.command.as_deref(), true) {
        return Ok(usage(UnknownCommand {
            available: Command::available(cli.profile.defaults().build),
            ..unknown
        }));
    }

    let project = Project::open(&root, cli.profile)?;
    output.verbose_ctx(
        "config",
        &format!(
            "{} v{} (slug: {}, build: {})",
            project.config().name,
            project.config().version,
            project.config().slug,
            project.config().build
        ),
    );

    let command = match Command::resolve(cli.command.as_deref(), project.supports_build()) {
        Ok(command) => command,
        Err(unknown) => return Ok(usage(unknown)),
    };
    output.verbose(&format!("Running command: {}", command));

    let code = match command {
        Command::Status => project_cmd::status(&project, &output)?,
        Command::Init => project_cmd::init(&project, &output)?,
        Command::Structure => project_cmd::structure(&project)?,
        Command::Build => project_cmd::build(&project, &output, clock)?,
        Command::Deploy => project_cmd::deploy(&project, &output, clock)?,
    };

    output.verbose("Command completed");
    Ok(code)
}

/// Prints unknown-command guidance; plain text regardless of --format
fn usage(unknown: UnknownCommand) -> ExitCode {
    println!("{}", unknown);
    println!("Available commands: {}", unknown.available_list());
    ExitCode::from(EXIT_USAGE)
}
