//! Project access
//!
//! A [`Project`] binds a resolved root directory to its configuration and
//! exposes the filesystem operations behind each command.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use super::build::{self, BuildReport, CopiedTree};
use super::config::{Profile, ProjectConfig};
use super::package::{self, PackageReport};
use crate::domain::layout::{self, BUILD_DIR, DEPLOY_DIR};
use crate::domain::{BuildInfo, CanonicalDir, Clock, Snapshot};

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Project root is not readable: {}", .path.display())]
    UnreadableRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Project root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("No build artifacts found. Run 'build' first.")]
    NotBuilt,

    #[error("Project '{0}' does not support build and deploy")]
    BuildUnsupported(String),
}

/// One working directory handled by `init`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkDir {
    pub path: &'static str,

    /// False when the directory was already present
    pub created: bool,
}

/// Directories handled by `init`, in creation order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    pub dirs: Vec<WorkDir>,
}

impl InitReport {
    /// Directories that did not exist before
    pub fn created(&self) -> Vec<&'static str> {
        self.dirs.iter().filter(|d| d.created).map(|d| d.path).collect()
    }

    /// Directories that were already present
    pub fn existing(&self) -> Vec<&'static str> {
        self.dirs.iter().filter(|d| !d.created).map(|d| d.path).collect()
    }
}

/// A project rooted at one directory
#[derive(Debug)]
pub struct Project {
    root: PathBuf,
    config: ProjectConfig,
}

impl Project {
    /// Opens the project at `root` with identity from `profile`
    ///
    /// The root is canonicalized once and never changes afterwards.
    pub fn open(root: impl AsRef<Path>, profile: Profile) -> Result<Self> {
        let root = root.as_ref();
        let root = root
            .canonicalize()
            .map_err(|source| ProjectError::UnreadableRoot {
                path: root.to_path_buf(),
                source,
            })?;

        if !root.is_dir() {
            return Err(ProjectError::NotADirectory(root).into());
        }

        if let Err(source) = fs::read_dir(&root) {
            return Err(ProjectError::UnreadableRoot { path: root, source }.into());
        }

        let config = ProjectConfig::load(&root, profile)?;
        Ok(Self { root, config })
    }

    /// Returns the project root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the configuration
    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Returns true if the project has a build concept
    pub fn supports_build(&self) -> bool {
        self.config.build
    }

    /// Returns the build directory path
    pub fn build_dir(&self) -> PathBuf {
        self.root.join(BUILD_DIR)
    }

    /// Returns the deployment package directory path
    pub fn deploy_dir(&self) -> PathBuf {
        self.root.join(DEPLOY_DIR)
    }

    /// Lists every canonical directory
    pub fn snapshot(&self) -> Result<Snapshot> {
        Snapshot::collect(|dir| self.list_dir(dir))
    }

    fn list_dir(&self, dir: CanonicalDir) -> Result<Option<Vec<String>>> {
        let path = dir.path_in(&self.root);
        if !is_existing_dir(&path)? {
            return Ok(None);
        }

        let entries = fs::read_dir(&path)
            .with_context(|| format!("Failed to list directory: {}", path.display()))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry =
                entry.with_context(|| format!("Failed to read entry in: {}", path.display()))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(Some(names))
    }

    /// Returns true if the build directory exists and has content
    pub fn is_built(&self) -> Result<bool> {
        dir_has_entries(&self.build_dir())
    }

    /// Manifest of the most recent build, if there is one
    pub fn last_build(&self) -> Result<Option<BuildInfo>> {
        build::read_manifest(&self.build_dir())
    }

    /// Creates the working directories, leaving existing ones alone
    pub fn init_dirs(&self) -> Result<InitReport> {
        let mut report = InitReport::default();

        for path in layout::work_dirs(self.supports_build()) {
            let full = self.root.join(path);
            let created = !is_existing_dir(&full)?;
            if created {
                fs::create_dir_all(&full)
                    .with_context(|| format!("Failed to create directory: {}", full.display()))?;
            }
            report.dirs.push(WorkDir { path, created });
        }

        Ok(report)
    }

    /// Copies `src` and `www` into the build directory and writes the manifest
    ///
    /// `on_copied` runs after each source tree lands, before the next starts.
    pub fn build(
        &self,
        clock: &dyn Clock,
        on_copied: impl FnMut(&CopiedTree),
    ) -> Result<BuildReport> {
        self.require_build()?;
        build::run(self, clock.now(), on_copied)
    }

    /// Packages the build directory into `var/deploy`
    ///
    /// Refuses with [`ProjectError::NotBuilt`] before writing anything when
    /// there is no build to package.
    pub fn deploy(&self, clock: &dyn Clock) -> Result<PackageReport> {
        self.require_build()?;
        if !self.is_built()? {
            return Err(ProjectError::NotBuilt.into());
        }
        package::create(self, clock.now())
    }

    fn require_build(&self) -> Result<(), ProjectError> {
        if self.supports_build() {
            Ok(())
        } else {
            Err(ProjectError::BuildUnsupported(self.config.name.clone()))
        }
    }
}

/// Returns true if `path` is a directory, false if it is missing or not one
///
/// Only `NotFound` counts as missing; any other failure is an error.
pub(crate) fn is_existing_dir(path: &Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("Failed to inspect: {}", path.display())),
    }
}

/// Returns true if `path` is a directory containing at least one entry
fn dir_has_entries(path: &Path) -> Result<bool> {
    if !is_existing_dir(path)? {
        return Ok(false);
    }
    let mut entries = fs::read_dir(path)
        .with_context(|| format!("Failed to list directory: {}", path.display()))?;
    Ok(entries.next().is_some())
}
