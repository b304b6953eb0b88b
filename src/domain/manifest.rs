//! Build manifest
//!
//! Written to `var/build/build-info.json` on every build so a deployment
//! package carries the identity of the project it was built from.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Record of one build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    /// Project display name
    pub project: String,

    /// Project version string
    pub version: String,

    /// When the build ran, as an RFC 3339 timestamp
    pub build_time: String,

    /// Absolute path of the build directory
    pub build_directory: String,
}

impl BuildInfo {
    pub fn new(
        project: impl Into<String>,
        version: impl Into<String>,
        built_at: DateTime<Local>,
        build_directory: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            version: version.into(),
            build_time: built_at.to_rfc3339(),
            build_directory: build_directory.into(),
        }
    }

    /// Parses the build time back into a timestamp
    pub fn built_at(&self) -> Option<DateTime<chrono::FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.build_time).ok()
    }
}
