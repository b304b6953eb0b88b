//! Command names
//!
//! The positional argument is matched against a closed set of commands.
//! `build` and `deploy` only exist for projects with a build concept.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Status,
    Init,
    Build,
    Deploy,
    Structure,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown command: {name}")]
pub struct UnknownCommand {
    pub name: String,
    pub available: Vec<Command>,
}

impl UnknownCommand {
    /// Comma-separated list of valid command names
    pub fn available_list(&self) -> String {
        self.available
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Command {
    const ALL: [Command; 5] = [
        Command::Status,
        Command::Init,
        Command::Build,
        Command::Deploy,
        Command::Structure,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Command::Status => "status",
            Command::Init => "init",
            Command::Build => "build",
            Command::Deploy => "deploy",
            Command::Structure => "structure",
        }
    }

    /// Returns true if the command only exists for build-enabled projects
    pub fn needs_build(&self) -> bool {
        matches!(self, Command::Build | Command::Deploy)
    }

    /// Commands available for a project
    pub fn available(build: bool) -> Vec<Command> {
        Self::ALL
            .into_iter()
            .filter(|c| build || !c.needs_build())
            .collect()
    }

    /// Resolves a command name; `None` means the default `status`
    pub fn resolve(name: Option<&str>, build: bool) -> Result<Command, UnknownCommand> {
        let Some(name) = name else {
            return Ok(Command::Status);
        };

        Self::available(build)
            .into_iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| UnknownCommand {
                name: name.to_string(),
                available: Self::available(build),
            })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
