//! # Storage Layer
//!
//! Filesystem side of project-kit: reading the canonical directories,
//! creating working directories, staging builds and writing packages.
//!
//! ## Project Layout
//!
//! ```text
//! <root>/
//! ├── bin/                  # Operator scripts (reported only)
//! ├── etc/
//! │   └── project.toml      # Optional identity overrides
//! ├── src/                  # Copied into var/build/src
//! ├── www/                  # Copied into var/build/www
//! └── var/
//!     ├── logs/ cache/ tmp/
//!     ├── build/
//!     │   └── build-info.json
//!     └── deploy/
//!         └── <slug>-YYYYMMDD-HHMMSS.tar.gz
//! ```
//!
//! ## Concurrency
//!
//! Nothing is locked. Two builds or deploys against the same root at the
//! same time may interleave.
//!
//! ## Key Types
//!
//! - [`Project`] - Entry point bound to one root
//! - [`ProjectConfig`] - Name, version, slug and build capability
//! - [`BuildReport`] / [`PackageReport`] - What `build` and `deploy` produced

mod build;
mod config;
mod package;
mod project;

pub use build::{BuildReport, CopiedTree};
pub use config::{ConfigError, Profile, ProjectConfig};
pub use package::PackageReport;
pub use project::{InitReport, Project, ProjectError, WorkDir};
