//! # Command-Line Interface
//!
//! `projkit [OPTIONS] [COMMAND]`, where the command defaults to `status`.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `status` | Banner, canonical directory contents, build readiness |
//! | `init` | Create the working directories under `var/` |
//! | `structure` | Canonical directory contents as JSON |
//! | `build` | Stage `src` and `www` into `var/build` with a manifest |
//! | `deploy` | Package `var/build` into `var/deploy` |
//!
//! `build` and `deploy` only exist for profiles with a build concept.
//!
//! ## Exit Codes
//!
//! - `0` success
//! - `1` fatal error, or `deploy` with nothing built
//! - `2` unknown command
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod command;
mod output;
mod project_cmd;

pub use app::{execute, run, Cli};
pub use command::{Command, UnknownCommand};
pub use output::{Output, OutputFormat};
