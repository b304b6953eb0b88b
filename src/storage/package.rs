//! Deployment packaging
//!
//! Archives the whole build directory into a gzip-compressed tarball under
//! `var/deploy`. Entries are stored relative to the build directory.

use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use flate2::write::GzEncoder;
use flate2::Compression;
use tar::Builder;

use super::Project;
use crate::domain::package::package_name;

/// Result of packaging a build
#[derive(Debug, Clone)]
pub struct PackageReport {
    pub package: PathBuf,
    pub size_bytes: u64,
}

impl PackageReport {
    /// Package size in kilobytes
    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }
}

/// Writes the package; the caller has already checked there is a build
///
/// An existing package with the same name is replaced.
pub(super) fn create(project: &Project, at: DateTime<Local>) -> Result<PackageReport> {
    let build_dir = project.build_dir();
    let deploy_dir = project.deploy_dir();
    fs::create_dir_all(&deploy_dir)
        .with_context(|| format!("Failed to create deploy directory: {}", deploy_dir.display()))?;

    let package = deploy_dir.join(package_name(&project.config().slug, at));
    let file = File::create(&package)
        .with_context(|| format!("Failed to create package: {}", package.display()))?;

    let mut builder = Builder::new(GzEncoder::new(file, Compression::default()));
    builder.follow_symlinks(false);
    builder
        .append_dir_all(".", &build_dir)
        .with_context(|| format!("Failed to archive build directory: {}", build_dir.display()))?;

    builder
        .into_inner()
        .and_then(|encoder| encoder.finish())
        .with_context(|| format!("Failed to finish package: {}", package.display()))?;

    let size_bytes = fs::metadata(&package)
        .with_context(|| format!("Failed to stat package: {}", package.display()))?
        .len();

    Ok(PackageReport {
        package,
        size_bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FixedClock;
    use crate::storage::{Profile, ProjectError};
    use chrono::TimeZone;
    use flate2::read::GzDecoder;
    use std::collections::BTreeSet;
    use tempfile::TempDir;

    fn clock_at(sec: u32) -> FixedClock {
        FixedClock(Local.with_ymd_and_hms(2024, 5, 6, 7, 8, sec).unwrap())
    }

    fn archive_entries(path: &std::path::Path) -> BTreeSet<String> {
        let mut archive = tar::Archive::new(GzDecoder::new(File::open(path).unwrap()));
        archive
            .entries()
            .unwrap()
            .map(|e| {
                let e = e.unwrap();
                let p = e.path().unwrap().into_owned();
                p.strip_prefix(".").unwrap_or(p.as_path()).display().to_string()
            })
            .filter(|p| !p.is_empty())
            .collect()
    }

    fn built_project() -> (TempDir, Project) {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/app.txt"), "app").unwrap();
        fs::create_dir_all(dir.path().join("www")).unwrap();
        fs::write(dir.path().join("www/index.html"), "<html>").unwrap();

        let project = Project::open(dir.path(), Profile::Site).unwrap();
        project.build(&clock_at(0), |_| {}).unwrap();
        (dir, project)
    }

    #[test]
    fn deploy_without_build_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let project = Project::open(dir.path(), Profile::Site).unwrap();

        let err = project.deploy(&clock_at(1)).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ProjectError>(),
            Some(ProjectError::NotBuilt)
        ));
        assert!(!project.deploy_dir().exists());
    }

    #[test]
    fn deploy_with_empty_build_dir_refused() {
        let dir = TempDir::new().unwrap();
        let project = Project::open(dir.path(), Profile::Site).unwrap();
        fs::create_dir_all(project.build_dir()).unwrap();

        assert!(project.deploy(&clock_at(1)).is_err());
        assert!(!project.deploy_dir().exists());
    }

    #[test]
    fn package_contains_build_tree() {
        let (_dir, project) = built_project();
        let report = project.deploy(&clock_at(1)).unwrap();

        assert_eq!(
            report.package.file_name().unwrap().to_string_lossy(),
            "site-20240506-070801.tar.gz"
        );
        assert!(report.size_bytes > 0);

        let entries = archive_entries(&report.package);
        assert!(entries.contains("src/app.txt"));
        assert!(entries.contains("www/index.html"));
        assert!(entries.contains("build-info.json"));
    }

    #[test]
    fn distinct_seconds_give_two_packages() {
        let (_dir, project) = built_project();
        let first = project.deploy(&clock_at(1)).unwrap();
        let second = project.deploy(&clock_at(2)).unwrap();

        assert_ne!(first.package, second.package);
        assert!(first.package.is_file());
        assert!(second.package.is_file());
        assert_eq!(fs::read_dir(project.deploy_dir()).unwrap().count(), 2);
    }

    #[test]
    fn same_second_replaces_package() {
        let (_dir, project) = built_project();
        project.deploy(&clock_at(3)).unwrap();
        project.deploy(&clock_at(3)).unwrap();

        assert_eq!(fs::read_dir(project.deploy_dir()).unwrap().count(), 1);
    }

    #[test]
    fn size_kb_divides_by_1024() {
        let report = PackageReport {
            package: PathBuf::from("x.tar.gz"),
            size_bytes: 1536,
        };
        assert_eq!(format!("{:.1}", report.size_kb()), "1.5");
    }
}
