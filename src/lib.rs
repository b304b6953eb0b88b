//! project-kit - Status, build and deploy for directory-structured projects
//!
//! A project is a root directory with the canonical `bin`, `etc`, `src`,
//! `var` and `www` subdirectories. project-kit reports on them, creates the
//! working directories under `var/`, stages `src` and `www` into a build
//! directory, and packages that build as a timestamped tarball.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{CanonicalDir, Snapshot};
pub use storage::{Profile, Project, ProjectConfig, ProjectError};
