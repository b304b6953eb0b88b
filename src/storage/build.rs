//! Build staging
//!
//! Copies the `src` and `www` trees into `var/build` and records a manifest.
//! Existing files at the destination are overwritten; anything else already
//! in the build directory is left in place.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use walkdir::WalkDir;

use super::project::is_existing_dir;
use super::Project;
use crate::domain::layout::{BUILD_SOURCES, MANIFEST_FILE};
use crate::domain::{BuildInfo, CanonicalDir};

/// One source tree copied into the build directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedTree {
    pub dir: CanonicalDir,

    /// Human label for progress output
    pub label: &'static str,

    /// Number of files copied
    pub files: usize,
}

/// Result of a build
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub build_directory: String,
    pub copied: Vec<CopiedTree>,
    pub manifest: BuildInfo,
}

impl BuildReport {
    /// Names of the source trees that were copied, in copy order
    pub fn copied_dirs(&self) -> Vec<&'static str> {
        self.copied.iter().map(|t| t.dir.as_str()).collect()
    }
}

pub(super) fn run(
    project: &Project,
    built_at: DateTime<Local>,
    mut on_copied: impl FnMut(&CopiedTree),
) -> Result<BuildReport> {
    let build_dir = project.build_dir();
    fs::create_dir_all(&build_dir)
        .with_context(|| format!("Failed to create build directory: {}", build_dir.display()))?;

    let mut copied = Vec::new();
    for (dir, label) in BUILD_SOURCES {
        let source = dir.path_in(project.root());
        if !is_existing_dir(&source)? {
            continue;
        }
        let files = copy_tree(&source, &build_dir.join(dir.as_str()))?;
        let tree = CopiedTree { dir, label, files };
        on_copied(&tree);
        copied.push(tree);
    }

    let config = project.config();
    let manifest = BuildInfo::new(
        &config.name,
        &config.version,
        built_at,
        build_dir.display().to_string(),
    );
    write_manifest(&build_dir.join(MANIFEST_FILE), &manifest)?;

    Ok(BuildReport {
        build_directory: build_dir.display().to_string(),
        copied,
        manifest,
    })
}

/// Recursively copies `source` into `dest`, returning the number of files
///
/// Symlinks are followed, so linked files land as regular files.
fn copy_tree(source: &Path, dest: &Path) -> Result<usize> {
    let mut files = 0;

    for entry in WalkDir::new(source).follow_links(true) {
        let entry =
            entry.with_context(|| format!("Failed to walk directory: {}", source.display()))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .with_context(|| format!("Entry outside source tree: {}", entry.path().display()))?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create directory: {}", target.display()))?;
        } else {
            fs::copy(entry.path(), &target).with_context(|| {
                format!(
                    "Failed to copy {} to {}",
                    entry.path().display(),
                    target.display()
                )
            })?;
            files += 1;
        }
    }

    Ok(files)
}

fn write_manifest(path: &Path, manifest: &BuildInfo) -> Result<()> {
    let content =
        serde_json::to_string_pretty(manifest).context("Failed to serialize build manifest")?;

    fs::write(path, content)
        .with_context(|| format!("Failed to write build manifest: {}", path.display()))
}

/// Reads the manifest from a build directory, if one was written
pub(super) fn read_manifest(build_dir: &Path) -> Result<Option<BuildInfo>> {
    let path = build_dir.join(MANIFEST_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read build manifest: {}", path.display()))
        }
    };

    let manifest = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse build manifest: {}", path.display()))?;
    Ok(Some(manifest))
}
