//! Project commands: status, init, structure, build, deploy

use std::process::ExitCode;

use anyhow::Result;
use chrono::Local;

use super::output::Output;
use crate::domain::layout::BUILD_DIR;
use crate::domain::{BuildInfo, Clock};
use crate::storage::{Project, ProjectError};

pub fn status(project: &Project, output: &Output) -> Result<ExitCode> {
    let config = project.config();
    let snapshot = project.snapshot()?;
    let built = if project.supports_build() {
        Some(project.is_built()?)
    } else {
        None
    };
    let last_build = match built {
        Some(true) => project.last_build()?,
        _ => None,
    };

    if output.is_json() {
        let mut data = serde_json::json!({
            "project": config.name,
            "version": config.version,
            "root": project.root().display().to_string(),
            "structure": snapshot,
        });
        if let Some(built) = built {
            data["build_status"] = serde_json::json!(if built { "ready" } else { "not_built" });
        }
        if let Some(info) = &last_build {
            data["last_build"] = serde_json::json!(info);
        }
        output.data(&data);
        return Ok(ExitCode::SUCCESS);
    }

    output.info("🚀", &format!("{} v{}", config.name, config.version));
    output.line(&"=".repeat(40));
    output.line(&format!("Root directory: {}", project.root().display()));
    output.blank();

    for listing in snapshot.listings() {
        output.info("📁", &format!("{}/", listing.dir));
        for entry in &listing.entries {
            output.line(&format!("   {}", entry));
        }
        output.blank();
    }

    match built {
        Some(true) => {
            output.info("📦", "Build Status: Ready");
            output.line(&format!("   Build artifacts found in {}/", BUILD_DIR));
            if let Some(info) = &last_build {
                output.line(&format!("   Last build: {} (v{})", built_at_label(info), info.version));
            }
        }
        Some(false) => {
            output.info("📦", "Build Status: Not built");
            output.line("   Run 'projkit build' to create build artifacts");
        }
        None => {}
    }

    Ok(ExitCode::SUCCESS)
}

/// Local build time for display, or the raw manifest value if it does not parse
fn built_at_label(info: &BuildInfo) -> String {
    info.built_at()
        .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| info.build_time.clone())
}

pub fn init(project: &Project, output: &Output) -> Result<ExitCode> {
    let report = project.init_dirs()?;
    output.verbose_ctx("init", &format!("{} created", report.created().len()));

    if output.is_json() {
        output.data(&serde_json::json!({
            "created": report.created(),
            "existing": report.existing(),
        }));
        return Ok(ExitCode::SUCCESS);
    }

    for dir in &report.dirs {
        if dir.created {
            output.success(&format!("Created directory: {}", dir.path));
        } else {
            output.success(&format!("Directory exists: {}", dir.path));
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Prints the snapshot as indented JSON, whatever the output format
pub fn structure(project: &Project) -> Result<ExitCode> {
    let snapshot = project.snapshot()?;
    println!("{}", snapshot.to_pretty_json()?);
    Ok(ExitCode::SUCCESS)
}

pub fn build(project: &Project, output: &Output, clock: &dyn Clock) -> Result<ExitCode> {
    output.info("🔨", "Creating build...");

    let report = project.build(clock, |tree| {
        output.verbose_ctx("build", &format!("{}: {} files", tree.dir, tree.files));
        output.step(&format!("{} copied", tree.label));
    })?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "build_directory": report.build_directory,
            "copied": report.copied_dirs(),
            "manifest": report.manifest,
        }));
        return Ok(ExitCode::SUCCESS);
    }

    output.step("Build info created");
    output.success(&format!("Build completed: {}", report.build_directory));

    Ok(ExitCode::SUCCESS)
}

pub fn deploy(project: &Project, output: &Output, clock: &dyn Clock) -> Result<ExitCode> {
    output.info("🚀", "Creating deployment package...");

    let report = match project.deploy(clock) {
        Ok(report) => report,
        Err(e) if matches!(e.downcast_ref::<ProjectError>(), Some(ProjectError::NotBuilt)) => {
            output.failure(&e.to_string());
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e),
    };

    if output.is_json() {
        output.data(&serde_json::json!({
            "package": report.package.display().to_string(),
            "size_bytes": report.size_bytes,
            "size_kb": report.size_kb(),
        }));
        return Ok(ExitCode::SUCCESS);
    }

    output.success(&format!(
        "Deployment package created: {}",
        report.package.display()
    ));
    output.info("📦", &format!("Package size: {:.1} KB", report.size_kb()));

    Ok(ExitCode::SUCCESS)
}
