//! Deployment package naming

use chrono::{DateTime, Local};

/// Timestamp format embedded in package names (`YYYYMMDD-HHMMSS`)
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Extension of deployment packages
pub const PACKAGE_EXTENSION: &str = ".tar.gz";

/// Returns the package file name for `slug` at `at`
///
/// Names only have one-second resolution: two packages stamped within the
/// same second share a name.
pub fn package_name(slug: &str, at: DateTime<Local>) -> String {
    format!("{}-{}{}", slug, at.format(TIMESTAMP_FORMAT), PACKAGE_EXTENSION)
}

/// Extracts the timestamp token from a package name produced for `slug`
pub fn timestamp_token<'a>(slug: &str, name: &'a str) -> Option<&'a str> {
    let token = name
        .strip_prefix(slug)?
        .strip_prefix('-')?
        .strip_suffix(PACKAGE_EXTENSION)?;

    let valid = token.len() == 15
        && token.char_indices().all(|(i, c)| match i {
            8 => c == '-',
            _ => c.is_ascii_digit(),
        });

    valid.then_some(token)
}
