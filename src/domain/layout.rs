//! Project directory layout
//!
//! Every project shares the same top-level shape: five canonical
//! directories plus a set of working directories under `var/`.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

/// One of the five top-level directories reported by `status` and `structure`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CanonicalDir {
    Bin,
    Etc,
    Src,
    Var,
    Www,
}

impl CanonicalDir {
    /// All canonical directories in reporting order
    pub const ALL: [CanonicalDir; 5] = [
        CanonicalDir::Bin,
        CanonicalDir::Etc,
        CanonicalDir::Src,
        CanonicalDir::Var,
        CanonicalDir::Www,
    ];

    /// Returns the directory name relative to the project root
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalDir::Bin => "bin",
            CanonicalDir::Etc => "etc",
            CanonicalDir::Src => "src",
            CanonicalDir::Var => "var",
            CanonicalDir::Www => "www",
        }
    }

    /// Returns the absolute path of this directory under `root`
    pub fn path_in(&self, root: &Path) -> PathBuf {
        root.join(self.as_str())
    }
}

impl fmt::Display for CanonicalDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CanonicalDir {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Build staging directory, relative to the project root
pub const BUILD_DIR: &str = "var/build";

/// Deployment package directory, relative to the project root
pub const DEPLOY_DIR: &str = "var/deploy";

/// Manifest file written at the root of the build directory
pub const MANIFEST_FILE: &str = "build-info.json";

/// Project config file, relative to the project root
pub const CONFIG_FILE: &str = "etc/project.toml";

/// Working directories every project gets from `init`
const BASE_WORK_DIRS: [&str; 4] = ["var/logs", "var/cache", "var/tmp", BUILD_DIR];

/// Source trees copied into the build directory, with the label used in reports
pub const BUILD_SOURCES: [(CanonicalDir, &str); 2] = [
    (CanonicalDir::Src, "Source files"),
    (CanonicalDir::Www, "Web files"),
];

/// Returns the working directories `init` creates
///
/// Projects with deployment support also get `var/deploy`.
pub fn work_dirs(with_deploy: bool) -> Vec<&'static str> {
    let mut dirs = BASE_WORK_DIRS.to_vec();
    if with_deploy {
        dirs.push(DEPLOY_DIR);
    }
    dirs
}
