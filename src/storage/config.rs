//! Project configuration
//!
//! A project's identity comes from a built-in profile, optionally
//! overridden by `etc/project.toml` under the project root.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::layout::CONFIG_FILE;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Built-in project profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Profile {
    /// Static site with build and deploy support
    #[default]
    Site,
    /// Picture transfer system, status only
    Pits,
}

impl Profile {
    /// Returns the configuration this profile starts from
    pub fn defaults(&self) -> ProjectConfig {
        match self {
            Profile::Site => ProjectConfig {
                name: "Site".to_string(),
                version: "1.0.0".to_string(),
                slug: "site".to_string(),
                build: true,
            },
            Profile::Pits => ProjectConfig {
                name: "PITS".to_string(),
                version: "1.0.0".to_string(),
                slug: "pits".to_string(),
                build: false,
            },
        }
    }
}

/// Resolved project identity and capabilities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Display name shown in the status banner and manifest
    pub name: String,

    /// Version string shown in the banner and manifest
    pub version: String,

    /// Prefix of deployment package names
    pub slug: String,

    /// Whether `build` and `deploy` are available
    pub build: bool,
}

/// Partial overrides read from `etc/project.toml`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigOverrides {
    name: Option<String>,
    version: Option<String>,
    slug: Option<String>,
    build: Option<bool>,
}

impl ProjectConfig {
    /// Loads configuration for the project at `root`, starting from `profile`
    pub fn load(root: &Path, profile: Profile) -> Result<Self> {
        let config_path = root.join(CONFIG_FILE);
        let mut config = profile.defaults();

        let content = match fs::read_to_string(&config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(config),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read project config: {}", config_path.display())
                })
            }
        };

        let overrides = Self::parse_overrides(&content)
            .with_context(|| format!("Failed to load project config: {}", config_path.display()))?;

        config.apply(overrides);
        config.validate()?;
        Ok(config)
    }

    fn parse_overrides(content: &str) -> Result<ConfigOverrides, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(name) = overrides.name {
            // Slug follows the name unless given explicitly
            if overrides.slug.is_none() {
                self.slug = slugify(&name);
            }
            self.name = name;
        }
        if let Some(version) = overrides.version {
            self.version = version;
        }
        if let Some(slug) = overrides.slug {
            self.slug = slug;
        }
        if let Some(build) = overrides.build {
            self.build = build;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Invalid("name must not be empty".to_string()));
        }
        if self.slug.is_empty() || self.slug.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(format!(
                "slug '{}' must be a non-empty file name component",
                self.slug
            )));
        }
        Ok(())
    }
}

/// Lowercases a name and replaces anything outside `[a-z0-9_-]` with `-`
fn slugify(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}
